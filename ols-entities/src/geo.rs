/// A position in the service's default reference system.
///
/// The values are passed through exactly as the normalization
/// service reports them, no reprojection takes place.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Coordinates {
    pub lng: f64,
    pub lat: f64,
}

impl Coordinates {
    pub const fn from_lng_lat(lng: f64, lat: f64) -> Self {
        Self { lng, lat }
    }

    /// Longitude first, as in the `pos` element of the response.
    pub const fn to_lng_lat(self) -> (f64, f64) {
        (self.lng, self.lat)
    }
}
