use crate::{
    gateways::normalization::{BindingError, RemoteError},
    response_code::ResponseCode,
    util::validate::AddressInvalidation,
};
use thiserror::Error;

/// The normalization service reported a result that cannot be
/// turned into geocoded addresses.
#[derive(Debug, Error)]
pub enum TranslationError {
    #[error("Parameter error")]
    InputParameterError,
    #[error("Data access error")]
    DataAccessError,
    #[error("Unknown response code: {0:?}")]
    UnknownResponseCode(String),
    #[error("Missing {section} in answer with response code {code}")]
    MissingAnswerData {
        code: ResponseCode,
        section: &'static str,
    },
    #[error("Ambiguous answer reports {reported} candidates but contains {actual}")]
    CandidateCountMismatch { reported: usize, actual: usize },
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] AddressInvalidation),
    #[error(transparent)]
    Binding(#[from] BindingError),
    #[error(transparent)]
    Remote(#[from] RemoteError),
    #[error(transparent)]
    Translation(#[from] TranslationError),
    #[error("Geocoding has been cancelled")]
    Cancelled,
}
