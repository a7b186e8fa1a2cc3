use serde::{Deserialize, Serialize};

/// Sensor types a custom alarm can be configured for
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "camelCase")]
pub enum DeviceType {
    #[default]
    TemperatureSensor,
    HumiditySensor,
    PressureSensor,
}

impl DeviceType {
    pub const ALL: [DeviceType; 3] = [
        Self::TemperatureSensor,
        Self::HumiditySensor,
        Self::PressureSensor,
    ];

    /// Identifier as used on the wire and in rule-engine message metadata
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TemperatureSensor => "temperatureSensor",
            Self::HumiditySensor => "humiditySensor",
            Self::PressureSensor => "pressureSensor",
        }
    }

    /// Metadata key carrying the reading this device type is judged by
    pub fn telemetry_key(&self) -> &'static str {
        match self {
            Self::TemperatureSensor => "temperature",
            Self::HumiditySensor => "humidity",
            Self::PressureSensor => "pressure",
        }
    }

    /// Threshold applied when no custom threshold is configured
    pub fn default_threshold(&self) -> Option<f64> {
        match self {
            Self::TemperatureSensor => Some(50.0),
            Self::HumiditySensor | Self::PressureSensor => None,
        }
    }
}

impl std::fmt::Display for DeviceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for DeviceType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|device_type| device_type.as_str() == s)
            .ok_or_else(|| format!("unknown device type: {s}"))
    }
}
