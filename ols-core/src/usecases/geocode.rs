use std::sync::atomic::{AtomicBool, Ordering};

use super::{prelude::*, translate_answer::*};
use crate::{
    gateways::normalization::*,
    util::validate::{validate_address_query, ValidatedAddress},
};

/// A binding to the normalization service that is established
/// on first use and lives as long as a single batch.
struct BatchBinding<'a, S: NormalizationService> {
    service: &'a S,
    binding: Option<S::Binding>,
}

impl<'a, S: NormalizationService> BatchBinding<'a, S> {
    const fn new(service: &'a S) -> Self {
        Self {
            service,
            binding: None,
        }
    }

    fn get(&mut self) -> std::result::Result<&S::Binding, BindingError> {
        match self.binding {
            Some(ref binding) => Ok(binding),
            None => {
                log::debug!("Binding to the normalization service");
                let binding = self.service.bind()?;
                Ok(self.binding.insert(binding))
            }
        }
    }
}

pub fn normalization_request(addr: &ValidatedAddress) -> NormalizationRequest {
    NormalizationRequest {
        algorithm: ALGORITHM,
        address: addr.street_with_building_number(),
        municipality: addr.municipality.clone(),
        subdivision: addr.subdivision.clone(),
        postal_code: addr.postal_code.clone(),
        data_source: DATA_SOURCE,
    }
}

/// Geocode all addresses of the request.
///
/// Addresses are processed one after another and the first
/// failing address aborts the whole batch.
pub fn geocode<S>(service: &S, region: &str, request: &GeocodeRequest) -> Result<GeocodeBatchResult>
where
    S: NormalizationService,
{
    geocode_with_cancellation(service, region, request, &AtomicBool::new(false))
}

/// Like [`geocode`] but stops before the next address once `cancelled` is set.
///
/// A remote call that is already in flight is not interrupted.
pub fn geocode_with_cancellation<S>(
    service: &S,
    region: &str,
    request: &GeocodeRequest,
    cancelled: &AtomicBool,
) -> Result<GeocodeBatchResult>
where
    S: NormalizationService,
{
    let GeocodeRequest { addresses } = request;
    log::info!("Geocoding {} addresses", addresses.len());
    let mut binding = BatchBinding::new(service);
    let mut results = Vec::with_capacity(addresses.len());
    for (i, query) in addresses.iter().enumerate() {
        if cancelled.load(Ordering::Acquire) {
            log::info!("Geocoding cancelled before address #{}", i + 1);
            return Err(Error::Cancelled);
        }
        let addr = validate_address_query(query)?;
        let req = normalization_request(&addr);
        log::debug!(
            "Normalizing address #{}: '{}' in {}",
            i + 1,
            req.address,
            req.municipality
        );
        let raw = binding.get()?.request(&req)?;
        let result = translate_raw_answer(&raw, region)
            .inspect_err(|err| log::warn!("Unable to geocode address #{}: {err}", i + 1))?;
        log::debug!(
            "Address #{} resolved to {} candidate(s)",
            i + 1,
            result.address_count
        );
        results.push(result);
    }
    Ok(GeocodeBatchResult { results })
}
