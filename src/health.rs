/// One of the four wear/status readings tracked for the vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HealthMetric {
    Oil,
    Brake,
    Battery,
    Tire,
}

impl HealthMetric {
    pub const ALL: [HealthMetric; 4] = [
        HealthMetric::Oil,
        HealthMetric::Brake,
        HealthMetric::Battery,
        HealthMetric::Tire,
    ];

    /// Label used on the compact gauges of the home view.
    pub fn short_label(&self) -> &'static str {
        match self {
            HealthMetric::Oil => "Oil",
            HealthMetric::Brake => "Brakes",
            HealthMetric::Battery => "Battery",
            HealthMetric::Tire => "Tires",
        }
    }

    /// Label used on the full-size gauges of the health dashboard.
    pub fn long_label(&self) -> &'static str {
        match self {
            HealthMetric::Oil => "Engine Oil",
            HealthMetric::Brake => "Brake System",
            HealthMetric::Battery => "Battery",
            HealthMetric::Tire => "Tires",
        }
    }
}

/// Health readings and predictions for the member's vehicle.
///
/// Created once at start-up from a fixed seed and never mutated afterwards;
/// a telemetry feed would be the only writer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VehicleHealthSnapshot {
    pub oil_status: u8,
    pub brake_status: u8,
    pub battery_status: u8,
    pub tire_status: u8,
    pub overall_health: String,
    pub next_service_advice: String,
    pub alerts: Vec<String>,
}

impl Default for VehicleHealthSnapshot {
    fn default() -> Self {
        Self {
            oil_status: 85,
            brake_status: 92,
            battery_status: 88,
            tire_status: 76,
            overall_health: "Excellent".to_string(),
            next_service_advice: "Oil change recommended in 2 weeks".to_string(),
            alerts: vec!["Tire pressure check recommended".to_string()],
        }
    }
}

impl VehicleHealthSnapshot {
    pub fn status(&self, metric: HealthMetric) -> u8 {
        match metric {
            HealthMetric::Oil => self.oil_status,
            HealthMetric::Brake => self.brake_status,
            HealthMetric::Battery => self.battery_status,
            HealthMetric::Tire => self.tire_status,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VehicleProfile {
    pub model_year: u16,
    pub make: String,
    pub model: String,
    pub trim: String,
    pub color: String,
    pub mileage_mi: u32,
    pub last_service: String,
}

impl Default for VehicleProfile {
    fn default() -> Self {
        Self {
            model_year: 2023,
            make: "Porsche".to_string(),
            model: "911".to_string(),
            trim: "Carrera S".to_string(),
            color: "Black".to_string(),
            mileage_mi: 12_450,
            last_service: "2 weeks ago".to_string(),
        }
    }
}

impl VehicleProfile {
    pub fn title(&self) -> String {
        format!("{} {} {}", self.model_year, self.make, self.model)
    }

    pub fn subtitle(&self) -> String {
        format!("{} • {}", self.trim, self.color)
    }

    /// Mileage with thousands separators, e.g. `12,450 mi`.
    pub fn mileage_label(&self) -> String {
        format!("{} mi", group_thousands(self.mileage_mi))
    }
}

fn group_thousands(value: u32) -> String {
    match value {
        0..=999 => value.to_string(),
        _ => format!("{},{:03}", group_thousands(value / 1000), value % 1000),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredictionStatus {
    Scheduled,
    Recurring,
    Healthy,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaintenancePrediction {
    pub title: &'static str,
    pub due: &'static str,
    pub status: PredictionStatus,
}

pub fn maintenance_predictions() -> Vec<MaintenancePrediction> {
    vec![
        MaintenancePrediction {
            title: "Oil Change",
            due: "Due in 2 weeks",
            status: PredictionStatus::Scheduled,
        },
        MaintenancePrediction {
            title: "Tire Rotation",
            due: "Due in 1 month",
            status: PredictionStatus::Recurring,
        },
        MaintenancePrediction {
            title: "Brake Inspection",
            due: "Due in 3 months",
            status: PredictionStatus::Healthy,
        },
    ]
}
