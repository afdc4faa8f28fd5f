//! Zone Table: destination label → (zone, distance)
use ongkir_core::{ShippingError, ZoneInfo};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneEntry {
    pub destination: String,
    pub zone: u8,
    pub distance_km: u32,
}

impl ZoneEntry {
    pub fn new(destination: impl Into<String>, zone: u8, distance_km: u32) -> Self {
        Self {
            destination: destination.into(),
            zone,
            distance_km,
        }
    }

    pub fn info(&self) -> ZoneInfo {
        ZoneInfo::new(self.zone, self.distance_km)
    }
}

/// Known destinations in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct ZoneTable {
    entries: Vec<ZoneEntry>,
}

impl ZoneTable {
    pub fn new(entries: Vec<ZoneEntry>) -> Self {
        Self { entries }
    }

    /// Exact, case-sensitive match. "jakarta pusat" or "Jakarta" do not
    /// resolve to "Jakarta Pusat": a near miss must fail loudly instead of
    /// pricing the wrong zone.
    pub fn resolve(&self, destination: &str) -> Result<ZoneInfo, ShippingError> {
        self.entries
            .iter()
            .find(|e| e.destination == destination)
            .map(ZoneEntry::info)
            .ok_or_else(|| ShippingError::UnknownDestination(destination.to_string()))
    }

    pub fn entries(&self) -> &[ZoneEntry] {
        &self.entries
    }

    pub fn destinations(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.destination.as_str())
    }

    /// Distinct zones in ascending order
    pub fn zones(&self) -> Vec<u8> {
        let mut zones: Vec<u8> = self.entries.iter().map(|e| e.zone).collect();
        zones.sort_unstable();
        zones.dedup();
        zones
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> ZoneTable {
        ZoneTable::new(vec![
            ZoneEntry::new("Jakarta Pusat", 1, 5),
            ZoneEntry::new("Bogor", 2, 35),
            ZoneEntry::new("Bekasi", 2, 28),
        ])
    }

    #[test]
    fn test_resolve_known() {
        assert_eq!(table().resolve("Bogor").unwrap(), ZoneInfo::new(2, 35));
    }

    #[test]
    fn test_resolve_is_exact() {
        let table = table();
        for label in ["Atlantis", "jakarta pusat", "Jakarta", " Bogor", "Bogor ", ""] {
            assert_eq!(
                table.resolve(label),
                Err(ShippingError::UnknownDestination(label.to_string())),
                "should not resolve: {:?}",
                label
            );
        }
    }

    #[test]
    fn test_zones_are_distinct() {
        assert_eq!(table().zones(), vec![1, 2]);
        assert_eq!(table().destinations().collect::<Vec<_>>(), ["Jakarta Pusat", "Bogor", "Bekasi"]);
    }
}
