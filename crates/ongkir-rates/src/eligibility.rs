//! Eligibility Filter
//!
//! Decides which catalog entries may be offered for a parcel. Rules in
//! priority order:
//!
//! 1. Above the cargo threshold only cargo service is offered, and only in
//!    local zones. Everything else is excluded outright.
//! 2. Ekspedisi is offered whenever cargo is not needed, in every zone and
//!    at every distance.
//! 3. The store courier (regular and cargo) only serves local zones.
//! 4. GoSend needs a non-cargo parcel, a local zone, and a destination
//!    inside the variant's own radius.
//!
//! An excluded entry is silently left out of the quote. The exclusion is
//! recorded for logging only.

use crate::catalog::{CourierDefinition, CourierService};
use crate::policy::EligibilityPolicy;
use crate::rate_card::RateCard;
use ongkir_core::{BillableWeight, ZoneInfo};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which rule removed an entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EligibilityRule {
    /// Parcel is over the cargo threshold; only cargo may carry it
    CargoOnly,
    /// Cargo offered for a parcel that fits regular service
    NoCargoNeeded,
    /// Destination is outside the zones local services cover
    LocalZone,
    /// Destination is beyond the variant's radius
    ServiceRadius,
    /// Parcel exceeds the variant's own weight cap
    MaxWeight,
}

impl EligibilityRule {
    pub fn id(&self) -> &'static str {
        match self {
            EligibilityRule::CargoOnly => "cargo-only",
            EligibilityRule::NoCargoNeeded => "no-cargo-needed",
            EligibilityRule::LocalZone => "local-zone",
            EligibilityRule::ServiceRadius => "service-radius",
            EligibilityRule::MaxWeight => "max-weight",
        }
    }
}

impl fmt::Display for EligibilityRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exclusion {
    pub courier: String,
    pub rule: EligibilityRule,
    pub reason: String,
}

/// A catalog entry cleared for pricing, with its catalog position
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EligibleEntry {
    pub position: usize,
    pub courier: CourierDefinition,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Eligibility {
    pub needs_cargo: bool,
    /// In catalog order
    pub eligible: Vec<EligibleEntry>,
    pub exclusions: Vec<Exclusion>,
}

impl Eligibility {
    pub fn is_empty(&self) -> bool {
        self.eligible.is_empty()
    }

    pub fn names(&self) -> Vec<&str> {
        self.eligible.iter().map(|e| e.courier.name.as_str()).collect()
    }
}

/// Run every catalog entry through the rules.
pub fn filter(zone: &ZoneInfo, weight: &BillableWeight, card: &RateCard) -> Eligibility {
    let policy = &card.policy;
    let needs_cargo = policy.needs_cargo(weight.grams);

    let mut eligible = Vec::new();
    let mut exclusions = Vec::new();

    for (position, courier) in card.couriers.iter().enumerate() {
        match check(courier, zone, weight, needs_cargo, policy) {
            Ok(()) => eligible.push(EligibleEntry {
                position,
                courier: courier.clone(),
            }),
            Err((rule, reason)) => {
                tracing::debug!(courier = %courier.name, rule = rule.id(), %reason, "courier excluded");
                exclusions.push(Exclusion {
                    courier: courier.name.clone(),
                    rule,
                    reason,
                });
            }
        }
    }

    Eligibility {
        needs_cargo,
        eligible,
        exclusions,
    }
}

fn check(
    courier: &CourierDefinition,
    zone: &ZoneInfo,
    weight: &BillableWeight,
    needs_cargo: bool,
    policy: &EligibilityPolicy,
) -> Result<(), (EligibilityRule, String)> {
    let cargo_only = || {
        (
            EligibilityRule::CargoOnly,
            format!(
                "{} g exceeds the {} g cargo threshold",
                weight.grams, policy.cargo_threshold_grams
            ),
        )
    };
    let local_zone = || {
        if policy.is_local(zone.zone) {
            Ok(())
        } else {
            Err((
                EligibilityRule::LocalZone,
                format!("zone {} is beyond local zone {}", zone.zone, policy.local_max_zone),
            ))
        }
    };

    match &courier.service {
        CourierService::Ekspedisi { .. } => {
            if needs_cargo {
                return Err(cargo_only());
            }
            Ok(())
        }
        CourierService::KurirToko { .. } => {
            if needs_cargo {
                return Err(cargo_only());
            }
            local_zone()
        }
        CourierService::Kargo { .. } => {
            if !needs_cargo {
                return Err((
                    EligibilityRule::NoCargoNeeded,
                    format!("{} g fits regular service", weight.grams),
                ));
            }
            local_zone()
        }
        CourierService::GoSend {
            max_distance_km,
            max_weight_grams,
            ..
        } => {
            if needs_cargo {
                return Err(cargo_only());
            }
            local_zone()?;
            if zone.distance_km > *max_distance_km {
                return Err((
                    EligibilityRule::ServiceRadius,
                    format!("{} km is beyond the {} km radius", zone.distance_km, max_distance_km),
                ));
            }
            if let Some(max) = max_weight_grams {
                if weight.grams > *max {
                    return Err((
                        EligibilityRule::MaxWeight,
                        format!("{} g exceeds the {} g limit", weight.grams, max),
                    ));
                }
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weight::billable_weight;
    use ongkir_core::ServiceType;

    fn run(zone: u8, distance_km: u32, grams: i64) -> Eligibility {
        let weight = billable_weight(grams).unwrap();
        filter(&ZoneInfo::new(zone, distance_km), &weight, &RateCard::standard())
    }

    #[test]
    fn test_inner_metro_light_parcel() {
        let result = run(1, 5, 1000);
        assert!(!result.needs_cargo);
        assert_eq!(
            result.names(),
            vec![
                "JNE REG",
                "TIKI REG",
                "J&T REG",
                "Kurir Toko",
                "GoSend INSTANT",
                "GoSend SAME DAY"
            ]
        );
        assert_eq!(result.exclusions.len(), 1);
        assert_eq!(result.exclusions[0].rule, EligibilityRule::NoCargoNeeded);
    }

    #[test]
    fn test_gosend_radius() {
        // Bogor: beyond INSTANT's 25 km, inside SAME DAY's 40 km
        let result = run(2, 35, 8200);
        assert!(!result.names().contains(&"GoSend INSTANT"));
        assert!(result.names().contains(&"GoSend SAME DAY"));
        assert!(result
            .exclusions
            .iter()
            .any(|e| e.courier == "GoSend INSTANT" && e.rule == EligibilityRule::ServiceRadius));

        let far = run(2, 41, 1000);
        assert!(far
            .eligible
            .iter()
            .all(|e| e.courier.service_type() != ServiceType::GoSend));
    }

    #[test]
    fn test_radius_boundary_is_inclusive() {
        let result = run(2, 25, 1000);
        assert!(result.names().contains(&"GoSend INSTANT"));
    }

    #[test]
    fn test_cargo_exclusivity() {
        let result = run(2, 30, 25_000);
        assert!(result.needs_cargo);
        assert_eq!(result.names(), vec!["Kurir Toko Kargo"]);
        assert_eq!(
            result
                .exclusions
                .iter()
                .filter(|e| e.rule == EligibilityRule::CargoOnly)
                .count(),
            6
        );
    }

    #[test]
    fn test_threshold_parcel_is_not_cargo() {
        let result = run(1, 5, 20_000);
        assert!(!result.needs_cargo);
        assert!(!result.names().contains(&"Kurir Toko Kargo"));
    }

    #[test]
    fn test_outer_zone_keeps_only_ekspedisi() {
        let result = run(3, 150, 5000);
        assert!(result
            .eligible
            .iter()
            .all(|e| e.courier.service_type() == ServiceType::Ekspedisi));
        assert_eq!(result.eligible.len(), 3);
    }

    #[test]
    fn test_outer_zone_cargo_is_empty() {
        let result = run(3, 150, 30_000);
        assert!(result.needs_cargo);
        assert!(result.is_empty());
        assert!(result
            .exclusions
            .iter()
            .any(|e| e.courier == "Kurir Toko Kargo" && e.rule == EligibilityRule::LocalZone));
    }

    #[test]
    fn test_positions_follow_catalog() {
        let result = run(1, 5, 1000);
        let positions: Vec<usize> = result.eligible.iter().map(|e| e.position).collect();
        assert_eq!(positions, vec![0, 1, 2, 3, 5, 6]);
    }

    #[test]
    fn test_gosend_weight_cap_below_cargo_threshold() {
        let mut card = RateCard::standard();
        let couriers = card
            .couriers
            .iter()
            .cloned()
            .map(|mut courier| {
                if courier.name == "GoSend INSTANT" {
                    if let CourierService::GoSend { max_weight_grams, .. } = &mut courier.service {
                        *max_weight_grams = Some(5_000);
                    }
                }
                courier
            })
            .collect();
        card.couriers = crate::catalog::RateCatalog::new(couriers);

        let weight = billable_weight(8_000).unwrap();
        let result = filter(&ZoneInfo::new(1, 5), &weight, &card);

        assert!(!result.needs_cargo);
        assert!(!result.names().contains(&"GoSend INSTANT"));
        assert!(result.names().contains(&"GoSend SAME DAY"));
        let exclusion = result
            .exclusions
            .iter()
            .find(|e| e.courier == "GoSend INSTANT")
            .unwrap();
        assert_eq!(exclusion.rule, EligibilityRule::MaxWeight);
        assert_eq!(exclusion.reason, "8000 g exceeds the 5000 g limit");

        // At the cap the variant still rides
        let at_cap = filter(&ZoneInfo::new(1, 5), &billable_weight(5_000).unwrap(), &card);
        assert!(at_cap.names().contains(&"GoSend INSTANT"));
    }
}
