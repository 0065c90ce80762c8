use crate::{address::*, geo::*};

/// Ordered list of addresses that are geocoded as one batch.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GeocodeRequest {
    pub addresses: Vec<AddressQuery>,
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReconstructedAddress {
    pub country_code : String,
    pub places       : Vec<Place>,
    pub postal_code  : Option<String>,
    pub street       : Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MatchCode {
    pub match_type: String,
    pub accuracy: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GeocodedAddress {
    pub pos: Coordinates,
    pub address: ReconstructedAddress,
    pub match_code: MatchCode,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct GeocodeResultSet {
    pub address_count: usize,
    pub candidates: Vec<GeocodedAddress>,
}

impl GeocodeResultSet {
    pub const fn empty() -> Self {
        Self {
            address_count: 0,
            candidates: Vec::new(),
        }
    }

    pub fn single(candidate: GeocodedAddress) -> Self {
        Self {
            address_count: 1,
            candidates: vec![candidate],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

/// One result set per requested address, in request order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GeocodeBatchResult {
    pub results: Vec<GeocodeResultSet>,
}
