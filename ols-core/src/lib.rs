//! # ols-core
//!
//! Geocoding of structured OpenLS addresses against the
//! RFC59 normalization service.

pub mod gateways;
pub mod response_code;
pub mod usecases;
pub mod util;

pub mod entities {
    pub use ols_entities::{address::*, geo::*, geocode::*, normalization::*};
}
