//! Cost Calculator
//!
//! Integer currency units throughout. Every formula uses checked
//! arithmetic: an overflow or a non-positive result is a pricing bug and
//! fails the quote instead of being clamped.

use crate::catalog::{CourierDefinition, CourierService};
use crate::eligibility::EligibleEntry;
use crate::policy::EligibilityPolicy;
use ongkir_core::{ShippingError, ShippingOption, ZoneInfo};

/// Price one eligible entry.
pub fn cost(
    courier: &CourierDefinition,
    zone: &ZoneInfo,
    weight_kg: u64,
    policy: &EligibilityPolicy,
) -> Result<u64, ShippingError> {
    let overflow = || ShippingError::pricing(&courier.name, "cost overflows");
    let distance = u64::from(zone.distance_km);

    let amount = match &courier.service {
        CourierService::Ekspedisi { rates } => {
            let rate = rates.get(&zone.zone).ok_or_else(|| {
                ShippingError::pricing(&courier.name, format!("no rate for zone {}", zone.zone))
            })?;
            // Base covers the first kilogram.
            let extra_kg = weight_kg.saturating_sub(1);
            let base = rate
                .per_kg_rate
                .checked_mul(extra_kg)
                .and_then(|extra| extra.checked_add(rate.base_rate))
                .ok_or_else(overflow)?;
            long_haul(base, zone.distance_km, policy).ok_or_else(overflow)?
        }
        CourierService::KurirToko {
            base_fee,
            per_km_per_kg,
        } => distance
            .checked_mul(*per_km_per_kg)
            .and_then(|v| v.checked_mul(weight_kg))
            .and_then(|v| v.checked_add(*base_fee))
            .ok_or_else(overflow)?,
        CourierService::Kargo {
            flat_rate,
            distance_surcharge,
            surcharge_after_km,
        } => {
            if zone.distance_km > *surcharge_after_km {
                flat_rate.checked_add(*distance_surcharge).ok_or_else(overflow)?
            } else {
                *flat_rate
            }
        }
        CourierService::GoSend {
            base_fee, per_km, ..
        } => distance
            .checked_mul(*per_km)
            .and_then(|v| v.checked_add(*base_fee))
            .ok_or_else(overflow)?,
    };

    if amount == 0 {
        return Err(ShippingError::pricing(&courier.name, "cost must be positive"));
    }
    Ok(amount)
}

/// Beyond the standard radius add `percentPerKm`% per extra km, rounded
/// half up to the nearest unit.
fn long_haul(cost: u64, distance_km: u32, policy: &EligibilityPolicy) -> Option<u64> {
    if distance_km <= policy.long_haul_threshold_km {
        return Some(cost);
    }
    let extra_km = u64::from(distance_km - policy.long_haul_threshold_km);
    let percent = extra_km
        .checked_mul(u64::from(policy.long_haul_percent_per_km))?
        .checked_add(100)?;
    let scaled = cost.checked_mul(percent)?.checked_add(50)?;
    Some(scaled / 100)
}

/// Price an entry and wrap it as an unranked option.
pub fn price(
    entry: &EligibleEntry,
    zone: &ZoneInfo,
    weight_kg: u64,
    policy: &EligibilityPolicy,
) -> Result<ShippingOption, ShippingError> {
    let courier = &entry.courier;
    let amount = cost(courier, zone, weight_kg, policy)?;
    Ok(ShippingOption {
        courier: courier.name.clone(),
        service_type: courier.service_type(),
        cost: amount,
        estimated_delivery: courier.estimated_delivery.label.clone(),
        recommended: false,
        max_delivery_hours: courier.estimated_delivery.max_hours,
    })
}
