use crate::shared::types::{PieSlice, PlantType};

/// Installed capacity per energy source. Display content only; these
/// figures describe the whole regional fleet, not the sample register.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryShare {
    pub plant_type: PlantType,
    pub plant_count: u32,
    pub capacity_mw: u32,
    pub share_pct: f64,
}

pub const CATEGORY_SHARES: [CategoryShare; 4] = [
    CategoryShare {
        plant_type: PlantType::Solar,
        plant_count: 23,
        capacity_mw: 487,
        share_pct: 26.4,
    },
    CategoryShare {
        plant_type: PlantType::Wind,
        plant_count: 12,
        capacity_mw: 634,
        share_pct: 34.3,
    },
    CategoryShare {
        plant_type: PlantType::Thermal,
        plant_count: 8,
        capacity_mw: 592,
        share_pct: 32.1,
    },
    CategoryShare {
        plant_type: PlantType::Hydro,
        plant_count: 4,
        capacity_mw: 134,
        share_pct: 7.2,
    },
];

// Pie order: largest sources first
const PIE_ORDER: [PlantType; 4] = [
    PlantType::Wind,
    PlantType::Thermal,
    PlantType::Solar,
    PlantType::Hydro,
];

pub fn share_slices() -> Vec<PieSlice> {
    PIE_ORDER
        .iter()
        .filter_map(|t| CATEGORY_SHARES.iter().find(|c| c.plant_type == *t))
        .map(|c| PieSlice {
            label: c.plant_type.label().to_string(),
            value: c.share_pct,
            color: c.plant_type.color().to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_type_has_one_share() {
        for t in PlantType::ALL {
            assert_eq!(
                CATEGORY_SHARES.iter().filter(|c| c.plant_type == t).count(),
                1
            );
        }
    }

    #[test]
    fn slices_follow_pie_order() {
        let labels: Vec<String> = share_slices().into_iter().map(|s| s.label).collect();
        assert_eq!(labels, vec!["풍력", "화력", "태양광", "수력"]);
        let total: f64 = share_slices().iter().map(|s| s.value).sum();
        assert!((total - 100.0).abs() < 1e-9);
    }
}
