//! Eligibility policy: the thresholds shared by every courier rule

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EligibilityPolicy {
    /// Parcels strictly heavier than this go by cargo only
    pub cargo_threshold_grams: u64,

    /// Highest zone the store courier, cargo, and GoSend services cover
    pub local_max_zone: u8,

    /// Ekspedisi standard service radius; beyond it a surcharge applies
    pub long_haul_threshold_km: u32,

    /// Surcharge percent added per km beyond `long_haul_threshold_km`
    pub long_haul_percent_per_km: u32,
}

impl EligibilityPolicy {
    pub fn needs_cargo(&self, weight_grams: u64) -> bool {
        weight_grams > self.cargo_threshold_grams
    }

    pub fn is_local(&self, zone: u8) -> bool {
        zone <= self.local_max_zone
    }
}

impl Default for EligibilityPolicy {
    fn default() -> Self {
        Self {
            cargo_threshold_grams: 20_000,
            local_max_zone: 2,
            long_haul_threshold_km: 50,
            long_haul_percent_per_km: 1,
        }
    }
}
