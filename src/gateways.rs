use crate::config;
use ols_gateways::rfc59::Rfc59;

pub fn normalization_gateway(cfg: &config::Normalization) -> Rfc59 {
    log::info!(
        "Use RFC59 normalization service at {} (timeout = {:?})",
        cfg.endpoint,
        cfg.request_timeout
    );
    Rfc59::new(cfg.endpoint.clone()).with_timeout(cfg.request_timeout)
}
