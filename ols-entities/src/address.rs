use strum::{Display, EnumString};

/// Named place classification of the OpenLS address model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum PlaceKind {
    CountrySubdivision,
    CountrySecondarySubdivision,
    Municipality,
    MunicipalitySubdivision,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Place {
    pub kind: PlaceKind,
    pub value: String,
}

impl Place {
    pub fn new(kind: PlaceKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Street {
    pub name: String,
}

/// Locates a building along the street, e.g. `12` or `12/B`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BuildingLocator {
    pub number: Option<String>,
    pub subdivision: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StreetAddress {
    pub streets: Vec<Street>,
    pub building: Option<BuildingLocator>,
}

/// A single structured address of a geocode request.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AddressQuery {
    pub country_code      : String,
    pub free_form_address : Option<String>,
    pub street_address    : Option<StreetAddress>,
    pub places            : Vec<Place>,
    pub postal_code       : Option<String>,
}
