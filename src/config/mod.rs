use anyhow::{anyhow, Result};
use ols_core::gateways::normalization::DEFAULT_REQUEST_TIMEOUT;
use std::{env, fs, io::ErrorKind, path::Path, time::Duration};

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "ols-geocoder.toml";

const ENV_NAME_NORMALIZATION_ENDPOINT: &str = "OLS_NORMALIZATION_ENDPOINT";

pub struct Config {
    pub normalization: Normalization,
    pub geocoding: Geocoding,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::info!(
                        "{} not found => load default configuration.",
                        file_path.display()
                    );
                    Ok(raw::Config::default())
                }
                _ => Err(err),
            }?,
        };
        let mut cfg = Self::try_from(raw_config)?;
        if let Ok(endpoint) = env::var(ENV_NAME_NORMALIZATION_ENDPOINT) {
            cfg.normalization.endpoint = endpoint;
        }
        Ok(cfg)
    }
}

pub struct Normalization {
    /// URL of the RFC59 normalization service
    pub endpoint: String,
    pub request_timeout: Duration,
}

pub struct Geocoding {
    /// Administrative region served by the normalization service.
    pub region: String,
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config {
            normalization,
            geocoding,
        } = from;

        let raw::Normalization {
            endpoint,
            request_timeout,
        } = normalization.unwrap_or_default();
        let endpoint = endpoint
            .or_else(|| raw::Normalization::default().endpoint)
            .ok_or_else(|| anyhow!("Missing normalization service endpoint"))?;
        let request_timeout = request_timeout.unwrap_or(DEFAULT_REQUEST_TIMEOUT);
        if request_timeout.is_zero() {
            return Err(anyhow!("The request timeout must not be zero"));
        }
        let normalization = Normalization {
            endpoint,
            request_timeout,
        };

        let raw::Geocoding { region } = geocoding.unwrap_or_default();
        let region = region
            .or_else(|| raw::Geocoding::default().region)
            .filter(|r| !r.trim().is_empty())
            .ok_or_else(|| anyhow!("No geocoding region defined"))?;
        let geocoding = Geocoding { region };

        Ok(Self {
            normalization,
            geocoding,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_default_config() {
        let file: Option<&Path> = None;
        let cfg: Config = Config::try_load_from_file_or_default(file).unwrap();
        assert_eq!(cfg.geocoding.region, "Toscana");
    }

    #[test]
    fn fill_in_defaults() {
        let raw: raw::Config = toml::from_str("[normalization]\nendpoint = \"http://normaws\"").unwrap();
        let cfg = Config::try_from(raw).unwrap();
        assert_eq!(cfg.normalization.endpoint, "http://normaws");
        assert_eq!(cfg.normalization.request_timeout, DEFAULT_REQUEST_TIMEOUT);
        assert_eq!(cfg.geocoding.region, "Toscana");
    }

    #[test]
    fn reject_empty_region() {
        let raw: raw::Config = toml::from_str("[geocoding]\nregion = \" \"").unwrap();
        assert!(Config::try_from(raw).is_err());
    }

    #[test]
    fn reject_zero_timeout() {
        let raw: raw::Config =
            toml::from_str("[normalization]\nrequest-timeout = \"0s\"").unwrap();
        assert!(Config::try_from(raw).is_err());
    }
}
