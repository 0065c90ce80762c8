use std::time::Duration;

use anyhow::anyhow;
use ols_core::gateways::normalization::*;
use ols_entities::normalization::{NormalizationRequest, RawAnswer};
use reqwest::{blocking::Client, Url};

mod wire;

/// The RFC59 address normalization web service of Regione Toscana.
#[derive(Debug, Clone)]
pub struct Rfc59 {
    endpoint: String,
    timeout: Duration,
}

impl Rfc59 {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[derive(Debug)]
pub struct Rfc59Binding {
    client: Client,
    url: Url,
    timeout: Duration,
}

impl NormalizationService for Rfc59 {
    type Binding = Rfc59Binding;

    fn bind(&self) -> Result<Self::Binding, BindingError> {
        let url = self
            .endpoint
            .parse::<Url>()
            .map_err(|err| BindingError(anyhow!("Invalid endpoint '{}': {err}", self.endpoint)))?;
        let client = Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|err| BindingError(err.into()))?;
        log::debug!("Bound to RFC59 normalization service at {url}");
        Ok(Rfc59Binding {
            client,
            url,
            timeout: self.timeout,
        })
    }
}

fn form_params(req: &NormalizationRequest) -> Vec<(&'static str, String)> {
    let NormalizationRequest {
        algorithm,
        address,
        municipality,
        subdivision,
        postal_code,
        data_source,
    } = req;
    let mut params = vec![
        ("algoritmo", algorithm.to_string()),
        ("indirizzo", address.clone()),
        ("localita", municipality.clone()),
    ];
    if let Some(subdivision) = subdivision {
        params.push(("provincia", subdivision.clone()));
    }
    if let Some(postal_code) = postal_code {
        params.push(("cap", postal_code.clone()));
    }
    params.push(("fonte", data_source.to_string()));
    params
}

impl Rfc59Binding {
    fn remote_error(&self, err: reqwest::Error) -> RemoteError {
        if err.is_timeout() {
            RemoteError::Timeout(self.timeout)
        } else {
            RemoteError::Transport(err.into())
        }
    }
}

impl NormalizationBinding for Rfc59Binding {
    fn request(&self, req: &NormalizationRequest) -> Result<RawAnswer, RemoteError> {
        let response = self
            .client
            .post(self.url.clone())
            .form(&form_params(req))
            .send()
            .map_err(|err| self.remote_error(err))?;
        let status = response.status();
        if !status.is_success() {
            return Err(RemoteError::Transport(anyhow!(
                "Unexpected response status: {status}"
            )));
        }
        let answer: wire::RispostaNormalizzata =
            response.json().map_err(|err| self.remote_error(err))?;
        log::debug!("Normalization service response: {answer:?}");
        Ok(answer.into())
    }
}
