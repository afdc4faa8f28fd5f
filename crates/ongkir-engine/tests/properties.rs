//! Invariants that must hold for every request.

use ongkir_core::{ServiceType, ShippingRequest};
use ongkir_engine::ShippingEngine;
use ongkir_rates::{CourierService, RateCard, ZoneEntry, ZoneRate, ZoneTable};
use proptest::prelude::*;
use proptest::test_runner::Config;

/// Standard card plus two zone 3 destinations, so zone gating can be
/// exercised.
fn extended_card() -> RateCard {
    let mut card = RateCard::standard();
    let mut zones = card.zones.entries().to_vec();
    zones.push(ZoneEntry::new("Bandung", 3, 150));
    zones.push(ZoneEntry::new("Serang", 3, 45));
    card.zones = ZoneTable::new(zones);

    let couriers = card
        .couriers
        .iter()
        .cloned()
        .map(|mut courier| {
            if let CourierService::Ekspedisi { rates } = &mut courier.service {
                rates.insert(3, ZoneRate::new(25_000, 15_000));
            }
            courier
        })
        .collect();
    card.couriers = ongkir_rates::RateCatalog::new(couriers);
    card
}

fn destination() -> impl Strategy<Value = String> {
    let labels: Vec<String> = extended_card()
        .destinations()
        .into_iter()
        .map(str::to_string)
        .collect();
    proptest::sample::select(labels)
}

proptest! {
    #![proptest_config(Config::with_cases(256))]

    #[test]
    fn repeated_calls_are_identical(dest in destination(), grams in 1_i64..60_000) {
        let engine = ShippingEngine::new(extended_card()).unwrap();
        let request = ShippingRequest::new(dest, grams);
        let first = serde_json::to_vec(&engine.calculate_shipping(&request).unwrap()).unwrap();
        let second = serde_json::to_vec(&engine.calculate_shipping(&request).unwrap()).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn light_parcels_bill_one_kg(dest in destination(), grams in 1_i64..=1_000) {
        let engine = ShippingEngine::new(extended_card()).unwrap();
        let quote = engine.calculate_shipping(&ShippingRequest::new(dest, grams)).unwrap();
        prop_assert_eq!(quote.weight_in_kg, 1);
    }

    #[test]
    fn options_sorted_by_cost(dest in destination(), grams in 1_i64..60_000) {
        let engine = ShippingEngine::new(extended_card()).unwrap();
        let quote = engine.calculate_shipping(&ShippingRequest::new(dest, grams)).unwrap();
        prop_assert!(quote.options.windows(2).all(|w| w[0].cost <= w[1].cost));
        prop_assert!(quote.options.iter().all(|o| o.cost > 0));
    }

    #[test]
    fn cargo_is_exclusive(dest in destination(), grams in 20_001_i64..200_000) {
        let engine = ShippingEngine::new(extended_card()).unwrap();
        let quote = engine.calculate_shipping(&ShippingRequest::new(dest, grams)).unwrap();
        prop_assert!(quote.needs_cargo);
        prop_assert!(quote.options.iter().all(|o| o.service_type == ServiceType::Kargo));
        if quote.zone > 2 {
            prop_assert!(quote.options.is_empty());
        } else {
            prop_assert_eq!(quote.options.iter().filter(|o| o.recommended).count(), 1);
        }
    }

    #[test]
    fn no_cargo_below_threshold(dest in destination(), grams in 1_i64..=20_000) {
        let engine = ShippingEngine::new(extended_card()).unwrap();
        let quote = engine.calculate_shipping(&ShippingRequest::new(dest, grams)).unwrap();
        prop_assert!(!quote.needs_cargo);
        prop_assert!(quote.options.iter().all(|o| o.service_type != ServiceType::Kargo));
        prop_assert!(quote.options.iter().all(|o| !o.recommended));
    }

    #[test]
    fn outer_zones_get_ekspedisi_only(grams in 1_i64..=20_000) {
        let engine = ShippingEngine::new(extended_card()).unwrap();
        for dest in ["Bandung", "Serang"] {
            let quote = engine.calculate_shipping(&ShippingRequest::new(dest, grams)).unwrap();
            prop_assert_eq!(quote.zone, 3);
            prop_assert_eq!(quote.options.len(), 3);
            prop_assert!(quote.options.iter().all(|o| o.service_type == ServiceType::Ekspedisi));
        }
    }

    #[test]
    fn gosend_respects_radius(dest in destination(), grams in 1_i64..=20_000) {
        let card = extended_card();
        let engine = ShippingEngine::new(card.clone()).unwrap();
        let quote = engine.calculate_shipping(&ShippingRequest::new(dest, grams)).unwrap();
        for option in quote.options.iter().filter(|o| o.service_type == ServiceType::GoSend) {
            let radius = match &card.couriers.get(&option.courier).unwrap().service {
                CourierService::GoSend { max_distance_km, .. } => *max_distance_km,
                other => panic!("unexpected service {:?}", other),
            };
            prop_assert!(quote.distance_km <= radius);
        }
    }
}

#[test]
fn test_outer_zone_long_haul() {
    let engine = ShippingEngine::new(extended_card()).unwrap();
    let quote = engine
        .calculate_shipping(&ShippingRequest::new("Bandung", 1000))
        .unwrap();
    // 25000 × (1 + 0.01 × 100)
    assert!(quote.options.iter().all(|o| o.service_type == ServiceType::Ekspedisi));
    assert_eq!(quote.options[0].cost, 50_000);
}

#[test]
fn test_outer_zone_cargo_is_empty_not_error() {
    let engine = ShippingEngine::new(extended_card()).unwrap();
    let quote = engine
        .calculate_shipping(&ShippingRequest::new("Bandung", 30_000))
        .unwrap();
    assert!(quote.needs_cargo);
    assert!(quote.is_empty());
    assert!(quote.recommended().is_none());
}
