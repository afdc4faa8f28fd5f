//! Rate Catalog: courier definitions and their pricing parameters
//!
//! Each entry carries exactly the constants its pricing formula needs. The
//! formulas themselves live in [`crate::cost`].

use ongkir_core::{DeliveryEstimate, ServiceType};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Per-zone ekspedisi tariff: the base covers the first kilogram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneRate {
    pub base_rate: u64,
    pub per_kg_rate: u64,
}

impl ZoneRate {
    pub fn new(base_rate: u64, per_kg_rate: u64) -> Self {
        Self {
            base_rate,
            per_kg_rate,
        }
    }
}

/// Pricing parameters, one variant per service class
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CourierService {
    #[serde(rename = "ekspedisi", rename_all = "camelCase")]
    Ekspedisi { rates: BTreeMap<u8, ZoneRate> },

    /// Regular store courier: `baseFee + km × perKmPerKg × kg`
    #[serde(rename = "kurir-toko", rename_all = "camelCase")]
    KurirToko { base_fee: u64, per_km_per_kg: u64 },

    /// Store courier cargo dispatch: flat, weight-independent
    #[serde(rename = "kargo", rename_all = "camelCase")]
    Kargo {
        flat_rate: u64,
        distance_surcharge: u64,
        surcharge_after_km: u32,
    },

    #[serde(rename = "gosend", rename_all = "camelCase")]
    GoSend {
        base_fee: u64,
        per_km: u64,
        max_distance_km: u32,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max_weight_grams: Option<u64>,
    },
}

impl CourierService {
    pub fn service_type(&self) -> ServiceType {
        match self {
            CourierService::Ekspedisi { .. } => ServiceType::Ekspedisi,
            CourierService::KurirToko { .. } => ServiceType::KurirToko,
            CourierService::Kargo { .. } => ServiceType::Kargo,
            CourierService::GoSend { .. } => ServiceType::GoSend,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourierDefinition {
    pub name: String,
    pub estimated_delivery: DeliveryEstimate,
    pub service: CourierService,
}

impl CourierDefinition {
    pub fn new(
        name: impl Into<String>,
        estimated_delivery: DeliveryEstimate,
        service: CourierService,
    ) -> Self {
        Self {
            name: name.into(),
            estimated_delivery,
            service,
        }
    }

    pub fn ekspedisi(
        name: impl Into<String>,
        estimated_delivery: DeliveryEstimate,
        rates: impl IntoIterator<Item = (u8, ZoneRate)>,
    ) -> Self {
        Self::new(
            name,
            estimated_delivery,
            CourierService::Ekspedisi {
                rates: rates.into_iter().collect(),
            },
        )
    }

    pub fn service_type(&self) -> ServiceType {
        self.service.service_type()
    }
}

/// Ordered courier list. Iteration order is the tie-break order when two
/// options cost the same.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct RateCatalog {
    couriers: Vec<CourierDefinition>,
}

impl RateCatalog {
    pub fn new(couriers: Vec<CourierDefinition>) -> Self {
        Self { couriers }
    }

    pub fn iter(&self) -> impl Iterator<Item = &CourierDefinition> {
        self.couriers.iter()
    }

    pub fn get(&self, name: &str) -> Option<&CourierDefinition> {
        self.couriers.iter().find(|c| c.name == name)
    }

    pub fn len(&self) -> usize {
        self.couriers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.couriers.is_empty()
    }
}
