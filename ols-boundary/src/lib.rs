use serde::{Deserialize, Serialize};

#[cfg(feature = "entity-conversions")]
mod conv;

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
#[serde(rename_all = "camelCase")]
pub struct GeocodeRequest {
    pub addresses: Vec<Address>,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub country_code      : String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub free_form_address : Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street_address    : Option<StreetAddress>,
    #[serde(default)]
    pub places            : Vec<Place>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_code       : Option<String>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
#[serde(rename_all = "camelCase")]
pub struct StreetAddress {
    #[serde(default)]
    pub streets: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub building: Option<Building>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct Building {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subdivision: Option<String>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct Place {
    #[serde(rename = "type")]
    pub kind: PlaceKind,
    pub value: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(
    feature = "extra-derive",
    derive(Debug, Clone, Copy, PartialEq, Eq, Hash)
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlaceKind {
    CountrySubdivision,
    CountrySecondarySubdivision,
    Municipality,
    MunicipalitySubdivision,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
#[serde(rename_all = "camelCase")]
pub struct GeocodeResponse {
    pub geocode_response_lists: Vec<GeocodeResponseList>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
#[serde(rename_all = "camelCase")]
pub struct GeocodeResponseList {
    pub number_of_geocoded_addresses: usize,
    pub geocoded_addresses: Vec<GeocodedAddress>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
#[serde(rename_all = "camelCase")]
pub struct GeocodedAddress {
    pub point: Point,
    pub address: ReturnAddress,
    pub geocode_match_code: GeocodeMatchCode,
}

/// A 2D position, longitude first.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy, PartialEq))]
pub struct Point {
    pub pos: [f64; 2],
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
#[serde(rename_all = "camelCase")]
pub struct ReturnAddress {
    pub country_code : String,
    pub places       : Vec<Place>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code  : Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street       : Option<String>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
#[serde(rename_all = "camelCase")]
pub struct GeocodeMatchCode {
    pub match_type: String,
    pub accuracy: f32,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct Error {
    pub message: String,
}
