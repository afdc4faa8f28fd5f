//! Rate card: zone table + rate catalog + policy, loaded once and shared
//!
//! A `RateCard` is immutable after construction. Use
//! [`crate::RateCardStore`] to swap in a new one at runtime.

use crate::catalog::{CourierDefinition, CourierService, RateCatalog, ZoneRate};
use crate::error::RateCardError;
use crate::policy::EligibilityPolicy;
use crate::zone::{ZoneEntry, ZoneTable};
use ongkir_core::{DeliveryEstimate, ShippingError, ZoneInfo};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateCard {
    #[serde(default)]
    pub policy: EligibilityPolicy,
    pub zones: ZoneTable,
    pub couriers: RateCatalog,
}

impl RateCard {
    /// Build and validate a rate card.
    pub fn new(
        policy: EligibilityPolicy,
        zones: ZoneTable,
        couriers: RateCatalog,
    ) -> Result<Self, RateCardError> {
        let card = Self {
            policy,
            zones,
            couriers,
        };
        card.validate()?;
        Ok(card)
    }

    /// The built-in card: Jabodetabek destinations, three ekspedisi
    /// couriers, the store courier (regular and cargo), and two GoSend
    /// variants.
    pub fn standard() -> Self {
        let zones = ZoneTable::new(vec![
            ZoneEntry::new("Jakarta Pusat", 1, 5),
            ZoneEntry::new("Jakarta Selatan", 1, 7),
            ZoneEntry::new("Jakarta Barat", 1, 9),
            ZoneEntry::new("Jakarta Timur", 1, 12),
            ZoneEntry::new("Jakarta Utara", 1, 10),
            ZoneEntry::new("Depok", 2, 25),
            ZoneEntry::new("Tangerang", 2, 30),
            ZoneEntry::new("Tangerang Selatan", 2, 22),
            ZoneEntry::new("Bekasi", 2, 28),
            ZoneEntry::new("Bogor", 2, 35),
        ]);

        let couriers = RateCatalog::new(vec![
            CourierDefinition::ekspedisi(
                "JNE REG",
                DeliveryEstimate::new("2-3 hari", 48, 72),
                [(1, ZoneRate::new(10_000, 8_000)), (2, ZoneRate::new(15_000, 10_000))],
            ),
            CourierDefinition::ekspedisi(
                "TIKI REG",
                DeliveryEstimate::new("2-4 hari", 48, 96),
                [(1, ZoneRate::new(11_000, 8_500)), (2, ZoneRate::new(16_000, 11_000))],
            ),
            CourierDefinition::ekspedisi(
                "J&T REG",
                DeliveryEstimate::new("1-3 hari", 24, 72),
                [(1, ZoneRate::new(9_000, 7_500)), (2, ZoneRate::new(14_000, 9_500))],
            ),
            CourierDefinition::new(
                "Kurir Toko",
                DeliveryEstimate::new("Same day", 4, 12),
                CourierService::KurirToko {
                    base_fee: 10_000,
                    per_km_per_kg: 1_000,
                },
            ),
            CourierDefinition::new(
                "Kurir Toko Kargo",
                DeliveryEstimate::new("1-2 hari", 24, 48),
                CourierService::Kargo {
                    flat_rate: 500_000,
                    distance_surcharge: 100_000,
                    surcharge_after_km: 20,
                },
            ),
            CourierDefinition::new(
                "GoSend INSTANT",
                DeliveryEstimate::new("1-3 jam", 1, 3),
                CourierService::GoSend {
                    base_fee: 15_000,
                    per_km: 2_500,
                    max_distance_km: 25,
                    max_weight_grams: Some(20_000),
                },
            ),
            CourierDefinition::new(
                "GoSend SAME DAY",
                DeliveryEstimate::new("6-8 jam", 6, 8),
                CourierService::GoSend {
                    base_fee: 12_000,
                    per_km: 2_000,
                    max_distance_km: 40,
                    max_weight_grams: Some(20_000),
                },
            ),
        ]);

        Self {
            policy: EligibilityPolicy::default(),
            zones,
            couriers,
        }
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self, RateCardError> {
        let card: RateCard = serde_yaml::from_str(yaml)?;
        card.validate()?;
        Ok(card)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, RateCardError> {
        let yaml = std::fs::read_to_string(path.as_ref())?;
        let card = Self::from_yaml_str(&yaml)?;
        tracing::info!(
            path = %path.as_ref().display(),
            destinations = card.zones.len(),
            couriers = card.couriers.len(),
            "rate card loaded"
        );
        Ok(card)
    }

    pub fn to_yaml(&self) -> Result<String, RateCardError> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn resolve(&self, destination: &str) -> Result<ZoneInfo, ShippingError> {
        self.zones.resolve(destination)
    }

    pub fn destinations(&self) -> Vec<&str> {
        self.zones.destinations().collect()
    }

    /// Check every invariant the calculator relies on. Collects all
    /// problems instead of stopping at the first.
    pub fn validate(&self) -> Result<(), RateCardError> {
        let mut problems = Vec::new();

        if self.zones.is_empty() {
            problems.push("zone table is empty".to_string());
        }

        let mut seen = HashSet::new();
        for entry in self.zones.entries() {
            if entry.destination.trim().is_empty() {
                problems.push("destination label is empty".to_string());
            }
            if !seen.insert(entry.destination.as_str()) {
                problems.push(format!("duplicate destination '{}'", entry.destination));
            }
            if entry.zone == 0 {
                problems.push(format!("destination '{}' has zone 0", entry.destination));
            }
            if entry.distance_km == 0 {
                problems.push(format!("destination '{}' has zero distance", entry.destination));
            }
        }

        let zones = self.zones.zones();
        let mut names = HashSet::new();
        for courier in self.couriers.iter() {
            if !names.insert(courier.name.as_str()) {
                problems.push(format!("duplicate courier '{}'", courier.name));
            }
            validate_service(courier, &zones, &mut problems);
        }

        if self.policy.cargo_threshold_grams == 0 {
            problems.push("cargo threshold must be positive".to_string());
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(RateCardError::Invalid { problems })
        }
    }
}

impl Default for RateCard {
    fn default() -> Self {
        Self::standard()
    }
}

fn validate_service(courier: &CourierDefinition, zones: &[u8], problems: &mut Vec<String>) {
    let name = &courier.name;
    match &courier.service {
        CourierService::Ekspedisi { rates } => {
            for zone in zones {
                match rates.get(zone) {
                    None => problems.push(format!("{name}: no rate for zone {zone}")),
                    Some(rate) if rate.base_rate == 0 => {
                        problems.push(format!("{name}: zero base rate for zone {zone}"))
                    }
                    Some(_) => {}
                }
            }
        }
        CourierService::KurirToko { base_fee, .. } => {
            if *base_fee == 0 {
                problems.push(format!("{name}: zero base fee"));
            }
        }
        CourierService::Kargo { flat_rate, .. } => {
            if *flat_rate == 0 {
                problems.push(format!("{name}: zero flat rate"));
            }
        }
        CourierService::GoSend {
            base_fee,
            max_distance_km,
            ..
        } => {
            if *base_fee == 0 {
                problems.push(format!("{name}: zero base fee"));
            }
            if *max_distance_km == 0 {
                problems.push(format!("{name}: zero service radius"));
            }
        }
    }
}
