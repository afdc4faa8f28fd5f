//! Weight Normalizer
//!
//! Couriers bill whole kilograms with a one kilogram minimum, however light
//! the parcel.

use ongkir_core::{BillableWeight, ShippingError};

const GRAMS_PER_KG: u64 = 1_000;

/// `max(1, ceil(grams / 1000))`. Fails for zero or negative weights.
pub fn normalize(weight_grams: i64) -> Result<u64, ShippingError> {
    billable_weight(weight_grams).map(|w| w.kg)
}

pub fn billable_weight(weight_grams: i64) -> Result<BillableWeight, ShippingError> {
    if weight_grams <= 0 {
        return Err(ShippingError::invalid_weight(
            weight_grams,
            "parcel weight must be positive",
        ));
    }
    let grams = weight_grams as u64;
    let kg = grams.div_ceil(GRAMS_PER_KG).max(1);
    Ok(BillableWeight { grams, kg })
}
