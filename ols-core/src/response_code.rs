use lazy_static::lazy_static;
use std::{collections::HashMap, fmt};

/// Outcome of a normalization request as reported by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResponseCode {
    Ok,
    UnknownAddress,
    UnknownMunicipality,
    InputParameterError,
    AmbiguousMunicipality,
    AmbiguousAddress,
    MunicipalityDataOnly,
    DataAccessError,
}

lazy_static! {
    static ref RESPONSE_CODES: HashMap<&'static str, ResponseCode> = ResponseCode::ALL
        .iter()
        .map(|code| (code.wire_code(), *code))
        .collect();
}

impl ResponseCode {
    pub const ALL: [Self; 8] = [
        Self::Ok,
        Self::UnknownAddress,
        Self::UnknownMunicipality,
        Self::InputParameterError,
        Self::AmbiguousMunicipality,
        Self::AmbiguousAddress,
        Self::MunicipalityDataOnly,
        Self::DataAccessError,
    ];

    #[rustfmt::skip]
    pub const fn wire_code(self) -> &'static str {
        match self {
            Self::Ok                    => "0",
            Self::UnknownAddress        => "1",
            Self::UnknownMunicipality   => "2",
            Self::InputParameterError   => "3",
            Self::AmbiguousMunicipality => "6",
            Self::AmbiguousAddress      => "7",
            Self::MunicipalityDataOnly  => "8",
            Self::DataAccessError       => "9",
        }
    }

    pub fn decode(wire_code: &str) -> Option<Self> {
        RESPONSE_CODES.get(wire_code).copied()
    }
}

impl fmt::Display for ResponseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_all_wire_codes() {
        for code in ResponseCode::ALL {
            assert_eq!(Some(code), ResponseCode::decode(code.wire_code()));
        }
        assert_eq!(Some(ResponseCode::AmbiguousAddress), ResponseCode::decode("7"));
    }

    #[test]
    fn decode_unknown_wire_codes() {
        assert_eq!(None, ResponseCode::decode("4"));
        assert_eq!(None, ResponseCode::decode("5"));
        assert_eq!(None, ResponseCode::decode(""));
        assert_eq!(None, ResponseCode::decode(" 0"));
    }

    #[test]
    fn wire_codes_are_unique() {
        assert_eq!(RESPONSE_CODES.len(), ResponseCode::ALL.len());
    }
}
