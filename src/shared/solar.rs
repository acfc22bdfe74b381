use crate::shared::types::ChartPoint;

// Output in kW, sampled every two hours from midnight
const HOURLY_OUTPUT_KW: [(&str, f64); 12] = [
    ("00", 0.0),
    ("02", 0.0),
    ("04", 50.0),
    ("06", 500.0),
    ("08", 1500.0),
    ("10", 2400.0),
    ("12", 3100.0),
    ("14", 3200.0),
    ("16", 2800.0),
    ("18", 1800.0),
    ("20", 400.0),
    ("22", 0.0),
];

pub fn hourly_output() -> Vec<ChartPoint> {
    HOURLY_OUTPUT_KW
        .iter()
        .map(|&(label, value)| ChartPoint {
            label: label.to_string(),
            value,
        })
        .collect()
}
