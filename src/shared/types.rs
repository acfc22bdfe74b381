use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlantType {
    Solar,
    Wind,
    Thermal,
    Hydro,
}

impl PlantType {
    pub const ALL: [PlantType; 4] = [
        PlantType::Solar,
        PlantType::Wind,
        PlantType::Thermal,
        PlantType::Hydro,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PlantType::Solar => "태양광",
            PlantType::Wind => "풍력",
            PlantType::Thermal => "화력",
            PlantType::Hydro => "수력",
        }
    }

    pub fn english_label(self) -> &'static str {
        match self {
            PlantType::Solar => "Solar Power",
            PlantType::Wind => "Wind Power",
            PlantType::Thermal => "Thermal Power",
            PlantType::Hydro => "Hydro Power",
        }
    }

    /// Tailwind classes for the type badge in the plant table.
    pub fn badge_class(self) -> &'static str {
        match self {
            PlantType::Solar => "bg-yellow-50 text-yellow-600",
            PlantType::Wind => "bg-blue-50 text-blue-600",
            PlantType::Thermal => "bg-red-50 text-red-600",
            PlantType::Hydro => "bg-cyan-50 text-cyan-600",
        }
    }

    pub fn text_class(self) -> &'static str {
        match self {
            PlantType::Solar => "text-yellow-600",
            PlantType::Wind => "text-blue-600",
            PlantType::Thermal => "text-red-600",
            PlantType::Hydro => "text-cyan-600",
        }
    }

    pub fn dot_class(self) -> &'static str {
        match self {
            PlantType::Solar => "bg-yellow-500",
            PlantType::Wind => "bg-blue-500",
            PlantType::Thermal => "bg-red-500",
            PlantType::Hydro => "bg-cyan-500",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            PlantType::Solar => "#eab308",
            PlantType::Wind => "#3b82f6",
            PlantType::Thermal => "#ef4444",
            PlantType::Hydro => "#06b6d4",
        }
    }
}

pub const STATUS_OPERATING: &str = "운영중";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlantRecord {
    pub id: u32,
    pub name: String,
    pub location: String,
    #[serde(rename = "type")]
    pub plant_type: PlantType,
    #[serde(rename = "capacityMw")]
    pub capacity_mw: f64,
    #[serde(rename = "utilizationPct")]
    pub utilization_pct: f64,
    pub status: String,
    pub operator: String,
}

impl PlantRecord {
    pub fn is_operating(&self) -> bool {
        self.status == STATUS_OPERATING
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppView {
    #[default]
    Dashboard,
    PowerPlant,
}

impl AppView {
    pub fn as_str(self) -> &'static str {
        match self {
            AppView::Dashboard => "dashboard",
            AppView::PowerPlant => "powerplant",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub label: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieSlice {
    pub label: String,
    pub value: f64,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyTrendPoint {
    #[serde(rename = "date")]
    pub date_label: String, // "10/17일"
    #[serde(rename = "actual")]
    pub actual_kwh: i64,
    #[serde(rename = "average")]
    pub average_kwh: i64,
    #[serde(rename = "isToday")]
    pub is_today: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plant_type_serializes_lowercase() {
        let json = serde_json::to_string(&PlantType::Thermal).unwrap();
        assert_eq!(json, "\"thermal\"");
        let back: PlantType = serde_json::from_str("\"hydro\"").unwrap();
        assert_eq!(back, PlantType::Hydro);
    }

    #[test]
    fn plant_record_uses_wire_field_names() {
        let record = PlantRecord {
            id: 1,
            name: "한림 태양광 발전소".into(),
            location: "제주시 한림읍".into(),
            plant_type: PlantType::Solar,
            capacity_mw: 45.2,
            utilization_pct: 92.3,
            status: STATUS_OPERATING.into(),
            operator: "제주에너지".into(),
        };
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["type"], "solar");
        assert_eq!(value["capacityMw"], 45.2);
        assert_eq!(value["utilizationPct"], 92.3);
        assert!(record.is_operating());
    }

    #[test]
    fn app_view_names() {
        assert_eq!(AppView::default(), AppView::Dashboard);
        assert_eq!(AppView::Dashboard.as_str(), "dashboard");
        assert_eq!(AppView::PowerPlant.as_str(), "powerplant");
    }
}
