//! Request and answer of the remote address normalization service.

use strum::{Display, EnumString};

use crate::geo::Coordinates;

/// Matching strategy of the normalization service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
pub enum Algorithm {
    #[strum(serialize = "1")]
    TermQueries,
    #[strum(serialize = "2")]
    FuzzyQueries,
    #[strum(serialize = "3")]
    Radix,
}

/// Gazetteer the normalization service matches against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
pub enum DataSource {
    #[strum(serialize = "1")]
    RegioneToscana,
    #[strum(serialize = "2")]
    Other,
}

/// Arguments of a single remote normalization call.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizationRequest {
    pub algorithm    : Algorithm,
    /// Street name, optionally followed by `, <building number>`.
    pub address      : String,
    pub municipality : String,
    pub subdivision  : Option<String>,
    pub postal_code  : Option<String>,
    pub data_source  : DataSource,
}

/// Street level data of a recognized address.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NormalizedStreetData {
    pub locality     : String,
    pub province     : String,
    pub postal_code  : Option<String>,
    pub house_number : Option<String>,
    pub street_type  : String,
    pub street_name  : String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecognizedAddress {
    pub pos: Coordinates,
    pub normalized: NormalizedStreetData,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AmbiguousAddressItem {
    pub pos: Coordinates,
    pub address: String,
    pub house_number: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AmbiguousAddress {
    /// Number of candidates as reported by the service.
    pub reported_count: usize,
    pub items: Vec<AmbiguousAddressItem>,
}

/// Locality level data, used when no street could be matched.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedLocality {
    /// Reference point of the census section.
    pub pos         : Coordinates,
    pub hamlet      : String,
    pub locality    : String,
    pub province    : String,
    pub postal_code : Option<String>,
}

/// The unprocessed answer of the normalization service.
///
/// Which of the optional sections is populated depends on
/// the response code.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RawAnswer {
    pub response_code       : String,
    pub recognized_address  : Option<RecognizedAddress>,
    pub ambiguous_address   : Option<AmbiguousAddress>,
    pub normalized_locality : Option<NormalizedLocality>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_codes() {
        assert_eq!("2", Algorithm::FuzzyQueries.to_string());
        assert_eq!("1", DataSource::RegioneToscana.to_string());
        assert_eq!(Algorithm::Radix, "3".parse::<Algorithm>().unwrap());
        assert!("4".parse::<Algorithm>().is_err());
    }
}
