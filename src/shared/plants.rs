use crate::shared::types::{PlantRecord, PlantType, STATUS_OPERATING};

// (id, name, location, type, capacity MW, utilization %, operator)
const JEJU_PLANTS: [(u32, &str, &str, PlantType, f64, f64, &str); 10] = [
    (1, "한림 태양광 발전소", "제주시 한림읍", PlantType::Solar, 45.2, 92.3, "제주에너지"),
    (2, "성산 풍력 발전소", "서귀포시 성산읍", PlantType::Wind, 78.5, 87.1, "제주풍력"),
    (3, "제주 화력 발전소", "제주시 애월읍", PlantType::Thermal, 200.0, 94.7, "한국남동발전"),
    (4, "표선 태양광 발전소", "서귀포시 표선면", PlantType::Solar, 38.4, 89.2, "제주에너지"),
    (5, "월정 풍력 발전소", "제주시 구좌읍", PlantType::Wind, 42.0, 85.6, "제주풍력"),
    (6, "김녕 풍력 발전소", "제주시 구좌읍", PlantType::Wind, 15.0, 88.9, "제주풍력"),
    (7, "중문 수력 발전소", "서귀포시 중문동", PlantType::Hydro, 12.5, 76.3, "한국수자원공사"),
    (8, "신창 풍력 발전소", "제주시 한경면", PlantType::Wind, 99.0, 91.4, "제주풍력"),
    (9, "애월 태양광 발전소", "제주시 애월읍", PlantType::Solar, 25.6, 90.1, "제주에너지"),
    (10, "서귀포 화력 발전소", "서귀포시 대정읍", PlantType::Thermal, 150.0, 93.2, "한국남동발전"),
];

/// The Jeju power plant register shown on the overview screen.
pub fn power_plants() -> Vec<PlantRecord> {
    JEJU_PLANTS
        .iter()
        .map(
            |&(id, name, location, plant_type, capacity_mw, utilization_pct, operator)| {
                PlantRecord {
                    id,
                    name: name.to_string(),
                    location: location.to_string(),
                    plant_type,
                    capacity_mw,
                    utilization_pct,
                    status: STATUS_OPERATING.to_string(),
                    operator: operator.to_string(),
                }
            },
        )
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn ids_are_unique() {
        let plants = power_plants();
        let ids: HashSet<u32> = plants.iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), plants.len());
    }

    #[test]
    fn values_are_in_range() {
        for p in power_plants() {
            assert!(p.capacity_mw > 0.0, "{}", p.name);
            assert!((0.0..=100.0).contains(&p.utilization_pct), "{}", p.name);
            assert!(p.is_operating());
        }
    }
}
