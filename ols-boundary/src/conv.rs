use super::*;
use ols_entities as e;

impl From<PlaceKind> for e::address::PlaceKind {
    fn from(from: PlaceKind) -> Self {
        use e::address::PlaceKind as E;
        match from {
            PlaceKind::CountrySubdivision => E::CountrySubdivision,
            PlaceKind::CountrySecondarySubdivision => E::CountrySecondarySubdivision,
            PlaceKind::Municipality => E::Municipality,
            PlaceKind::MunicipalitySubdivision => E::MunicipalitySubdivision,
        }
    }
}

impl From<e::address::PlaceKind> for PlaceKind {
    fn from(from: e::address::PlaceKind) -> Self {
        use e::address::PlaceKind as E;
        match from {
            E::CountrySubdivision => PlaceKind::CountrySubdivision,
            E::CountrySecondarySubdivision => PlaceKind::CountrySecondarySubdivision,
            E::Municipality => PlaceKind::Municipality,
            E::MunicipalitySubdivision => PlaceKind::MunicipalitySubdivision,
        }
    }
}

impl From<Place> for e::address::Place {
    fn from(from: Place) -> Self {
        let Place { kind, value } = from;
        Self {
            kind: kind.into(),
            value,
        }
    }
}

impl From<e::address::Place> for Place {
    fn from(from: e::address::Place) -> Self {
        let e::address::Place { kind, value } = from;
        Self {
            kind: kind.into(),
            value,
        }
    }
}

impl From<StreetAddress> for e::address::StreetAddress {
    fn from(from: StreetAddress) -> Self {
        let StreetAddress { streets, building } = from;
        Self {
            streets: streets
                .into_iter()
                .map(|name| e::address::Street { name })
                .collect(),
            building: building.map(|Building { number, subdivision }| {
                e::address::BuildingLocator {
                    number,
                    subdivision,
                }
            }),
        }
    }
}

impl From<Address> for e::address::AddressQuery {
    fn from(from: Address) -> Self {
        let Address {
            country_code,
            free_form_address,
            street_address,
            places,
            postal_code,
        } = from;
        Self {
            country_code,
            free_form_address,
            street_address: street_address.map(Into::into),
            places: places.into_iter().map(Into::into).collect(),
            postal_code,
        }
    }
}

impl From<GeocodeRequest> for e::geocode::GeocodeRequest {
    fn from(from: GeocodeRequest) -> Self {
        Self {
            addresses: from.addresses.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<e::geocode::ReconstructedAddress> for ReturnAddress {
    fn from(from: e::geocode::ReconstructedAddress) -> Self {
        let e::geocode::ReconstructedAddress {
            country_code,
            places,
            postal_code,
            street,
        } = from;
        Self {
            country_code,
            places: places.into_iter().map(Into::into).collect(),
            postal_code,
            street,
        }
    }
}

impl From<e::geocode::GeocodedAddress> for GeocodedAddress {
    fn from(from: e::geocode::GeocodedAddress) -> Self {
        let e::geocode::GeocodedAddress {
            pos,
            address,
            match_code,
        } = from;
        let (lng, lat) = pos.to_lng_lat();
        Self {
            point: Point { pos: [lng, lat] },
            address: address.into(),
            geocode_match_code: GeocodeMatchCode {
                match_type: match_code.match_type,
                accuracy: match_code.accuracy,
            },
        }
    }
}

impl From<e::geocode::GeocodeResultSet> for GeocodeResponseList {
    fn from(from: e::geocode::GeocodeResultSet) -> Self {
        let e::geocode::GeocodeResultSet {
            address_count,
            candidates,
        } = from;
        Self {
            number_of_geocoded_addresses: address_count,
            geocoded_addresses: candidates.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<e::geocode::GeocodeBatchResult> for GeocodeResponse {
    fn from(from: e::geocode::GeocodeBatchResult) -> Self {
        Self {
            geocode_response_lists: from.results.into_iter().map(Into::into).collect(),
        }
    }
}
