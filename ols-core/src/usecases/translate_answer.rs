use super::prelude::*;
use crate::util::validate::SUPPORTED_COUNTRY_CODE;

/// Algorithm used for every remote call of this adapter.
pub const ALGORITHM: Algorithm = Algorithm::FuzzyQueries;

/// Data source used for every remote call of this adapter.
pub const DATA_SOURCE: DataSource = DataSource::RegioneToscana;

const DIRECT_MATCH_ACCURACY: f32 = 1.0;
const AMBIGUOUS_MATCH_ACCURACY: f32 = 0.0;

/// Label attached to all candidates, e.g. `RFC59-2`.
pub fn match_type() -> String {
    format!("RFC59-{ALGORITHM}")
}

fn match_code(accuracy: f32) -> MatchCode {
    MatchCode {
        match_type: match_type(),
        accuracy,
    }
}

/// Decode the response code of the answer and translate it.
pub fn translate_raw_answer(raw: &RawAnswer, region: &str) -> Result<GeocodeResultSet> {
    let code = ResponseCode::decode(&raw.response_code)
        .ok_or_else(|| TranslationError::UnknownResponseCode(raw.response_code.clone()))?;
    Ok(translate_answer(code, raw, region)?)
}

/// Turn an answer of the normalization service into a result set.
///
/// `region` is added as a `COUNTRY_SUBDIVISION` place to every
/// candidate that carries administrative places.
pub fn translate_answer(
    code: ResponseCode,
    raw: &RawAnswer,
    region: &str,
) -> std::result::Result<GeocodeResultSet, TranslationError> {
    use ResponseCode as C;
    match code {
        C::Ok => recognized_address(raw, region),
        C::UnknownAddress | C::UnknownMunicipality => Ok(GeocodeResultSet::empty()),
        C::InputParameterError => Err(TranslationError::InputParameterError),
        C::AmbiguousMunicipality => {
            // TODO: expose the alternative municipalities once the response envelope can carry them
            log::debug!("Ambiguous municipality: the candidates are not reported");
            Ok(GeocodeResultSet::empty())
        }
        C::AmbiguousAddress => ambiguous_address(raw),
        C::MunicipalityDataOnly => normalized_locality(raw, region),
        C::DataAccessError => Err(TranslationError::DataAccessError),
    }
}

fn missing(code: ResponseCode, section: &'static str) -> TranslationError {
    TranslationError::MissingAnswerData { code, section }
}

fn non_empty(s: &Option<String>) -> Option<&str> {
    s.as_deref().filter(|s| !s.is_empty())
}

fn recognized_address(
    raw: &RawAnswer,
    region: &str,
) -> std::result::Result<GeocodeResultSet, TranslationError> {
    let RecognizedAddress { pos, normalized } = raw
        .recognized_address
        .as_ref()
        .ok_or_else(|| missing(ResponseCode::Ok, "recognized address"))?;
    let NormalizedStreetData {
        locality,
        province,
        postal_code,
        house_number,
        street_type,
        street_name,
    } = normalized;

    let mut street = format!("{street_type} {street_name}");
    if let Some(nr) = non_empty(house_number).filter(|nr| *nr != "0") {
        street.push_str(", ");
        street.push_str(nr);
    }
    let address = ReconstructedAddress {
        country_code: SUPPORTED_COUNTRY_CODE.to_owned(),
        places: vec![
            Place::new(PlaceKind::Municipality, locality.as_str()),
            Place::new(PlaceKind::CountrySecondarySubdivision, province.as_str()),
            Place::new(PlaceKind::CountrySubdivision, region),
        ],
        postal_code: postal_code.clone(),
        street: Some(street),
    };
    Ok(GeocodeResultSet::single(GeocodedAddress {
        pos: *pos,
        address,
        match_code: match_code(DIRECT_MATCH_ACCURACY),
    }))
}

fn ambiguous_address(raw: &RawAnswer) -> std::result::Result<GeocodeResultSet, TranslationError> {
    let AmbiguousAddress {
        reported_count,
        items,
    } = raw
        .ambiguous_address
        .as_ref()
        .ok_or_else(|| missing(ResponseCode::AmbiguousAddress, "ambiguous address"))?;
    if *reported_count != items.len() {
        return Err(TranslationError::CandidateCountMismatch {
            reported: *reported_count,
            actual: items.len(),
        });
    }
    let candidates = items
        .iter()
        .map(|item| {
            let street = match non_empty(&item.house_number) {
                Some(nr) => format!("{}, {nr}", item.address),
                None => item.address.clone(),
            };
            GeocodedAddress {
                pos: item.pos,
                address: ReconstructedAddress {
                    country_code: SUPPORTED_COUNTRY_CODE.to_owned(),
                    street: Some(street),
                    ..Default::default()
                },
                match_code: match_code(AMBIGUOUS_MATCH_ACCURACY),
            }
        })
        .collect();
    Ok(GeocodeResultSet {
        address_count: *reported_count,
        candidates,
    })
}

fn normalized_locality(
    raw: &RawAnswer,
    region: &str,
) -> std::result::Result<GeocodeResultSet, TranslationError> {
    let NormalizedLocality {
        pos,
        hamlet,
        locality,
        province,
        postal_code,
    } = raw
        .normalized_locality
        .as_ref()
        .ok_or_else(|| missing(ResponseCode::MunicipalityDataOnly, "normalized locality"))?;
    let address = ReconstructedAddress {
        country_code: SUPPORTED_COUNTRY_CODE.to_owned(),
        places: vec![
            Place::new(PlaceKind::MunicipalitySubdivision, hamlet.as_str()),
            Place::new(PlaceKind::Municipality, locality.as_str()),
            Place::new(PlaceKind::CountrySecondarySubdivision, province.as_str()),
            Place::new(PlaceKind::CountrySubdivision, region),
        ],
        postal_code: postal_code.clone(),
        street: None,
    };
    Ok(GeocodeResultSet::single(GeocodedAddress {
        pos: *pos,
        address,
        match_code: match_code(DIRECT_MATCH_ACCURACY),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ols_entities::builders::*;

    const REGION: &str = "Toscana";

    fn firenze_via_roma(house_number: Option<&str>) -> RawAnswer {
        RawAnswer::build()
            .response_code("0")
            .recognized(
                Coordinates::from_lng_lat(11.25, 43.77),
                NormalizedStreetData {
                    locality: "Firenze".into(),
                    province: "FI".into(),
                    postal_code: Some("50100".into()),
                    house_number: house_number.map(Into::into),
                    street_type: "Via".into(),
                    street_name: "Roma".into(),
                },
            )
            .finish()
    }

    #[test]
    fn direct_match() {
        let raw = firenze_via_roma(Some("0"));
        let res = translate_answer(ResponseCode::Ok, &raw, REGION).unwrap();
        assert_eq!(res.address_count, 1);
        assert_eq!(res.candidates.len(), 1);
        let candidate = &res.candidates[0];
        assert_eq!(candidate.pos.to_lng_lat(), (11.25, 43.77));
        assert_eq!(candidate.address.street.as_deref(), Some("Via Roma"));
        assert_eq!(candidate.address.country_code, "IT");
        assert_eq!(candidate.address.postal_code.as_deref(), Some("50100"));
        assert_eq!(
            candidate.address.places,
            vec![
                Place::new(PlaceKind::Municipality, "Firenze"),
                Place::new(PlaceKind::CountrySecondarySubdivision, "FI"),
                Place::new(PlaceKind::CountrySubdivision, "Toscana"),
            ]
        );
        assert_eq!(candidate.match_code.accuracy, 1.0);
        assert_eq!(candidate.match_code.match_type, "RFC59-2");
    }

    #[test]
    fn direct_match_with_house_number() {
        let raw = firenze_via_roma(Some("12"));
        let res = translate_answer(ResponseCode::Ok, &raw, REGION).unwrap();
        assert_eq!(
            res.candidates[0].address.street.as_deref(),
            Some("Via Roma, 12")
        );
        for nr in [None, Some("")] {
            let raw = firenze_via_roma(nr);
            let res = translate_answer(ResponseCode::Ok, &raw, REGION).unwrap();
            assert_eq!(res.candidates[0].address.street.as_deref(), Some("Via Roma"));
        }
    }

    #[test]
    fn direct_match_without_data() {
        let raw = RawAnswer::build().response_code("0").finish();
        assert!(matches!(
            translate_answer(ResponseCode::Ok, &raw, REGION),
            Err(TranslationError::MissingAnswerData {
                code: ResponseCode::Ok,
                ..
            })
        ));
    }

    #[test]
    fn unknown_address_or_municipality() {
        let raw = RawAnswer::default();
        for code in [
            ResponseCode::UnknownAddress,
            ResponseCode::UnknownMunicipality,
            ResponseCode::AmbiguousMunicipality,
        ] {
            let res = translate_answer(code, &raw, REGION).unwrap();
            assert_eq!(res.address_count, 0);
            assert!(res.is_empty());
        }
    }

    #[test]
    fn remote_failures() {
        let raw = RawAnswer::default();
        assert!(matches!(
            translate_answer(ResponseCode::InputParameterError, &raw, REGION),
            Err(TranslationError::InputParameterError)
        ));
        assert!(matches!(
            translate_answer(ResponseCode::DataAccessError, &raw, REGION),
            Err(TranslationError::DataAccessError)
        ));
    }

    #[test]
    fn ambiguous_address() {
        let raw = RawAnswer::build()
            .response_code("7")
            .ambiguous_item(Coordinates::from_lng_lat(11.1, 43.1), "Via Roma", Some("3"))
            .ambiguous_item(Coordinates::from_lng_lat(11.2, 43.2), "Piazza Roma", None)
            .finish();
        let res = translate_answer(ResponseCode::AmbiguousAddress, &raw, REGION).unwrap();
        assert_eq!(res.address_count, 2);
        assert_eq!(res.candidates.len(), 2);
        assert!(res.candidates.iter().all(|c| c.match_code.accuracy == 0.0));
        assert!(res.candidates.iter().all(|c| c.address.places.is_empty()));
        assert_eq!(res.candidates[0].address.street.as_deref(), Some("Via Roma, 3"));
        assert_eq!(res.candidates[1].address.street.as_deref(), Some("Piazza Roma"));
        assert_eq!(res.candidates[1].pos.to_lng_lat(), (11.2, 43.2));
    }

    #[test]
    fn ambiguous_address_with_inconsistent_count() {
        let raw = RawAnswer::build()
            .response_code("7")
            .ambiguous_item(Coordinates::default(), "Via Roma", None)
            .reported_count(3)
            .finish();
        assert!(matches!(
            translate_answer(ResponseCode::AmbiguousAddress, &raw, REGION),
            Err(TranslationError::CandidateCountMismatch {
                reported: 3,
                actual: 1
            })
        ));
    }

    #[test]
    fn municipality_data_only() {
        let raw = RawAnswer::build()
            .response_code("8")
            .locality(NormalizedLocality {
                pos: Coordinates::from_lng_lat(11.22, 43.79),
                hamlet: "Rifredi".into(),
                locality: "Firenze".into(),
                province: "FI".into(),
                postal_code: Some("50141".into()),
            })
            .finish();
        let res = translate_answer(ResponseCode::MunicipalityDataOnly, &raw, REGION).unwrap();
        assert_eq!(res.address_count, 1);
        let candidate = &res.candidates[0];
        assert_eq!(candidate.pos.to_lng_lat(), (11.22, 43.79));
        assert_eq!(candidate.address.street, None);
        assert_eq!(candidate.address.postal_code.as_deref(), Some("50141"));
        assert_eq!(
            candidate.address.places,
            vec![
                Place::new(PlaceKind::MunicipalitySubdivision, "Rifredi"),
                Place::new(PlaceKind::Municipality, "Firenze"),
                Place::new(PlaceKind::CountrySecondarySubdivision, "FI"),
                Place::new(PlaceKind::CountrySubdivision, "Toscana"),
            ]
        );
        assert_eq!(candidate.match_code.accuracy, 1.0);
    }

    #[test]
    fn unknown_response_code() {
        let raw = RawAnswer::build().response_code("5").finish();
        assert!(matches!(
            translate_raw_answer(&raw, REGION),
            Err(Error::Translation(TranslationError::UnknownResponseCode(code))) if code == "5"
        ));
    }
}
