use ols_entities::address::{AddressQuery, BuildingLocator, PlaceKind};
use thiserror::Error;

/// The only country served by the normalization service.
pub const SUPPORTED_COUNTRY_CODE: &str = "IT";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressInvalidation {
    #[error("Unsupported country code: {0}")]
    UnsupportedCountry(String),
    #[error("Cannot parse free form requests")]
    FreeFormUnsupported,
    #[error("StreetAddress missing in geocoding request")]
    MissingStreetAddress,
    #[error("Streets list missing or empty in geocoding request")]
    MissingStreets,
    #[error("Cannot manage street crossing")]
    MultiStreetUnsupported,
    #[error("Street name missing in geocoding request")]
    MissingStreetName,
    #[error("Places list missing or empty in geocoding request")]
    MissingPlaces,
    #[error("Too many municipalities in geocoding request: old one {old} new one: {new}")]
    DuplicateMunicipality { old: String, new: String },
    #[error(
        "Too many country secondary subdivisions in geocoding request: old one {old} new one: {new}"
    )]
    DuplicateSubdivision { old: String, new: String },
    #[error("Municipality missing or empty in geocoding request")]
    MissingMunicipality,
}

/// The parts of an [`AddressQuery`] that are forwarded to the normalization service.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedAddress {
    pub street          : String,
    pub building_number : Option<String>,
    pub municipality    : String,
    pub subdivision     : Option<String>,
    pub postal_code     : Option<String>,
}

impl ValidatedAddress {
    /// Street name followed by the building number, if any.
    pub fn street_with_building_number(&self) -> String {
        match &self.building_number {
            Some(nr) => format!("{}, {nr}", self.street),
            None => self.street.clone(),
        }
    }
}

/// Combine number and subdivision of a building, e.g. `12/B`.
pub fn compose_building_number(number: Option<&str>, subdivision: Option<&str>) -> Option<String> {
    let number = number?;
    match subdivision.filter(|s| !s.is_empty()) {
        Some(subdivision) => Some(format!("{number}/{subdivision}")),
        None => Some(number.to_owned()),
    }
}

fn building_number(building: Option<&BuildingLocator>) -> Option<String> {
    building.and_then(|b| compose_building_number(b.number.as_deref(), b.subdivision.as_deref()))
}

fn non_empty(s: &Option<String>) -> Option<&str> {
    s.as_deref().filter(|s| !s.is_empty())
}

/// Check the structure of a single address.
///
/// The checks are performed in a fixed order and the first
/// failing check determines the returned error.
pub fn validate_address_query(query: &AddressQuery) -> Result<ValidatedAddress, AddressInvalidation> {
    use AddressInvalidation as E;

    if !query.country_code.eq_ignore_ascii_case(SUPPORTED_COUNTRY_CODE) {
        return Err(E::UnsupportedCountry(query.country_code.clone()));
    }
    if non_empty(&query.free_form_address).is_some() {
        return Err(E::FreeFormUnsupported);
    }
    let street_address = query.street_address.as_ref().ok_or(E::MissingStreetAddress)?;
    let street = match street_address.streets.as_slice() {
        [] => return Err(E::MissingStreets),
        [street] => street,
        _ => return Err(E::MultiStreetUnsupported),
    };
    if street.name.is_empty() {
        return Err(E::MissingStreetName);
    }
    let building_number = building_number(street_address.building.as_ref());

    if query.places.is_empty() {
        return Err(E::MissingPlaces);
    }
    let mut municipality: Option<&str> = None;
    let mut subdivision: Option<&str> = None;
    for place in &query.places {
        match place.kind {
            PlaceKind::Municipality => {
                if let Some(old) = municipality.filter(|m| !m.is_empty()) {
                    return Err(E::DuplicateMunicipality {
                        old: old.to_owned(),
                        new: place.value.clone(),
                    });
                }
                municipality = Some(&place.value);
            }
            PlaceKind::CountrySecondarySubdivision => {
                if let Some(old) = subdivision.filter(|s| !s.is_empty()) {
                    return Err(E::DuplicateSubdivision {
                        old: old.to_owned(),
                        new: place.value.clone(),
                    });
                }
                subdivision = Some(&place.value);
            }
            _ => {}
        }
    }
    let municipality = municipality
        .filter(|m| !m.is_empty())
        .ok_or(E::MissingMunicipality)?;

    Ok(ValidatedAddress {
        street: street.name.clone(),
        building_number,
        municipality: municipality.to_owned(),
        subdivision: subdivision.filter(|s| !s.is_empty()).map(ToOwned::to_owned),
        postal_code: non_empty(&query.postal_code).map(ToOwned::to_owned),
    })
}
