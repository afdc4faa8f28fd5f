//! Quote Ranker
//!
//! Sorts ascending by cost. The sort is stable, so equal costs keep catalog
//! order. The engine only recommends when cargo is mandatory; otherwise
//! picking "cheapest" or "fastest" is left to the caller.

use ongkir_core::ShippingOption;

pub fn rank(mut options: Vec<ShippingOption>, needs_cargo: bool) -> Vec<ShippingOption> {
    options.sort_by_key(|o| o.cost);

    for option in options.iter_mut() {
        option.recommended = false;
    }
    if needs_cargo {
        if let Some(cargo) = options.iter_mut().find(|o| o.service_type.is_cargo()) {
            cargo.recommended = true;
        }
    }

    options
}

#[cfg(test)]
mod tests {
    use super::*;
    use ongkir_core::ServiceType;

    fn option(courier: &str, service_type: ServiceType, cost: u64) -> ShippingOption {
        ShippingOption {
            courier: courier.to_string(),
            service_type,
            cost,
            estimated_delivery: String::new(),
            recommended: false,
            max_delivery_hours: 0,
        }
    }

    #[test]
    fn test_sorted_ascending() {
        let ranked = rank(
            vec![
                option("JNE REG", ServiceType::Ekspedisi, 15_000),
                option("J&T REG", ServiceType::Ekspedisi, 14_000),
                option("GoSend SAME DAY", ServiceType::GoSend, 82_000),
            ],
            false,
        );
        let costs: Vec<u64> = ranked.iter().map(|o| o.cost).collect();
        assert_eq!(costs, vec![14_000, 15_000, 82_000]);
        assert!(ranked.iter().all(|o| !o.recommended));
    }

    #[test]
    fn test_ties_keep_input_order() {
        let ranked = rank(
            vec![
                option("A", ServiceType::Ekspedisi, 10_000),
                option("B", ServiceType::Ekspedisi, 9_000),
                option("C", ServiceType::Ekspedisi, 10_000),
            ],
            false,
        );
        let names: Vec<&str> = ranked.iter().map(|o| o.courier.as_str()).collect();
        assert_eq!(names, vec!["B", "A", "C"]);
    }

    #[test]
    fn test_cargo_is_recommended() {
        let ranked = rank(vec![option("Kurir Toko Kargo", ServiceType::Kargo, 600_000)], true);
        assert!(ranked[0].recommended);
    }

    #[test]
    fn test_single_recommendation() {
        let ranked = rank(
            vec![
                option("Kargo A", ServiceType::Kargo, 700_000),
                option("Kargo B", ServiceType::Kargo, 600_000),
            ],
            true,
        );
        assert_eq!(ranked.iter().filter(|o| o.recommended).count(), 1);
        assert_eq!(ranked[0].courier, "Kargo B");
        assert!(ranked[0].recommended);
    }

    #[test]
    fn test_empty() {
        assert!(rank(Vec::new(), true).is_empty());
    }
}
