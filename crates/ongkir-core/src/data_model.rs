//! Data Model: ShippingRequest, ZoneInfo, ShippingOption, ShippingQuote
//!
//! All of these are value objects built and dropped inside a single quote
//! call. Field names serialize in camelCase to match the checkout client.
use crate::error::ShippingError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Class of delivery service a courier entry offers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ServiceType {
    /// Third-party parcel network (JNE, TIKI, J&T)
    #[serde(rename = "ekspedisi")]
    Ekspedisi,
    /// Store-operated local courier
    #[serde(rename = "kurir-toko")]
    KurirToko,
    /// On-demand motorcycle courier with a hard radius
    #[serde(rename = "gosend")]
    GoSend,
    /// Dedicated heavy-freight dispatch
    #[serde(rename = "kargo")]
    Kargo,
}

impl ServiceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceType::Ekspedisi => "ekspedisi",
            ServiceType::KurirToko => "kurir-toko",
            ServiceType::GoSend => "gosend",
            ServiceType::Kargo => "kargo",
        }
    }

    pub fn is_cargo(&self) -> bool {
        matches!(self, ServiceType::Kargo)
    }
}

impl fmt::Display for ServiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a destination sits relative to the fulfillment origin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneInfo {
    /// 1 = inner metro, 2 = greater metro
    pub zone: u8,
    pub distance_km: u32,
}

impl ZoneInfo {
    pub fn new(zone: u8, distance_km: u32) -> Self {
        Self { zone, distance_km }
    }
}

/// One cart line as the order subsystem hands it over
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParcelItem {
    pub weight_grams: i64,
    pub quantity: u32,
}

impl ParcelItem {
    pub fn new(weight_grams: i64, quantity: u32) -> Self {
        Self {
            weight_grams,
            quantity,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingRequest {
    pub total_weight_grams: i64,
    pub destination: String,
}

impl ShippingRequest {
    pub fn new(destination: impl Into<String>, total_weight_grams: i64) -> Self {
        Self {
            total_weight_grams,
            destination: destination.into(),
        }
    }

    /// Build a request from cart lines: total = Σ weight × quantity.
    ///
    /// A line with a non-positive weight or zero quantity is rejected
    /// rather than skipped, as is a total that does not fit in `i64`.
    pub fn from_items(
        destination: impl Into<String>,
        items: &[ParcelItem],
    ) -> Result<Self, ShippingError> {
        let mut total: i64 = 0;
        for item in items {
            if item.weight_grams <= 0 {
                return Err(ShippingError::invalid_weight(
                    item.weight_grams,
                    "item weight must be positive",
                ));
            }
            if item.quantity == 0 {
                return Err(ShippingError::invalid_weight(
                    0,
                    "item quantity must be at least 1",
                ));
            }
            total = item
                .weight_grams
                .checked_mul(i64::from(item.quantity))
                .and_then(|line| total.checked_add(line))
                .ok_or_else(|| {
                    ShippingError::invalid_weight(i64::MAX, "total parcel weight overflows")
                })?;
        }
        Ok(Self::new(destination, total))
    }
}

/// Weight the couriers bill for: whole kilograms, never below 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillableWeight {
    pub grams: u64,
    pub kg: u64,
}

/// Delivery window as the catalog stores it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryEstimate {
    /// Customer-facing text (ex: "2-3 hari")
    pub label: String,
    pub min_hours: u32,
    pub max_hours: u32,
}

impl DeliveryEstimate {
    pub fn new(label: impl Into<String>, min_hours: u32, max_hours: u32) -> Self {
        Self {
            label: label.into(),
            min_hours,
            max_hours,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingOption {
    pub courier: String,
    pub service_type: ServiceType,
    pub cost: u64,
    pub estimated_delivery: String,
    pub recommended: bool,
    /// Upper bound of the delivery window. Only populated on quotes the
    /// engine produced; not part of the wire format.
    #[serde(skip)]
    pub max_delivery_hours: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingQuote {
    pub destination: String,
    pub zone: u8,
    pub distance_km: u32,
    pub weight_in_kg: u64,
    pub needs_cargo: bool,
    /// Ascending by cost
    pub options: Vec<ShippingOption>,
}

impl ShippingQuote {
    /// No courier can take this parcel to this destination. A normal
    /// outcome, not an error.
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    pub fn cheapest(&self) -> Option<&ShippingOption> {
        self.options.first()
    }

    /// Option with the shortest worst-case delivery window; ties go to the
    /// cheaper option.
    pub fn fastest(&self) -> Option<&ShippingOption> {
        self.options.iter().min_by_key(|o| o.max_delivery_hours)
    }

    pub fn recommended(&self) -> Option<&ShippingOption> {
        self.options.iter().find(|o| o.recommended)
    }
}
