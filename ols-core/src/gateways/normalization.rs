use std::time::Duration;

use ols_entities::normalization::{NormalizationRequest, RawAnswer};
use thiserror::Error;

/// Client side deadline of a single remote call.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Debug, Error)]
#[error("Unable to bind to the normalization service: {0}")]
pub struct BindingError(pub anyhow::Error);

#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("The normalization service did not answer within {0:?}")]
    Timeout(Duration),
    #[error("Remote error: {0}")]
    Transport(anyhow::Error),
}

/// Entry point to the remote normalization service.
pub trait NormalizationService {
    type Binding: NormalizationBinding;

    /// Establish a binding that is used for all addresses of one batch.
    fn bind(&self) -> Result<Self::Binding, BindingError>;
}

/// An established binding that is able to perform remote calls.
///
/// Calls are blocking and must either return or fail with
/// [`RemoteError::Timeout`] after the configured deadline.
pub trait NormalizationBinding {
    fn request(&self, req: &NormalizationRequest) -> Result<RawAnswer, RemoteError>;
}

impl<T> NormalizationService for &T
where
    T: NormalizationService,
{
    type Binding = T::Binding;
    fn bind(&self) -> Result<Self::Binding, BindingError> {
        (*self).bind()
    }
}
