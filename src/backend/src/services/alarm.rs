//! Threshold-based alarm evaluation for rule-engine messages.

use alarm_widget_core::{DeviceType, WidgetConfiguration};
use anyhow::{Context, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// Metadata key naming the kind of device that produced a message
pub const DEVICE_TYPE_KEY: &str = "deviceType";

pub const ALARM_TYPE: &str = "Custom Threshold Alarm";

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AlarmSeverity {
    Critical,
    Major,
    Minor,
    Warning,
    Indeterminate,
}

/// Incoming rule-engine message: who sent it and its string metadata
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct AlarmMessage {
    pub originator: String,
    #[serde(default)]
    pub metadata: HashMap<String, String>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Alarm {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub alarm_type: String,
    pub severity: AlarmSeverity,
    pub originator: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlarmResult {
    pub created: bool,
    pub updated: bool,
    pub cleared: bool,
    pub alarm: Option<Alarm>,
}

pub struct AlarmService;

impl AlarmService {
    /// Evaluate a message against `config` and build the alarm result.
    pub fn process(config: &WidgetConfiguration, message: &AlarmMessage) -> Result<AlarmResult> {
        let Some(severity) = Self::determine_severity(config, &message.metadata)? else {
            return Ok(AlarmResult::default());
        };

        let alarm = Alarm {
            id: Uuid::new_v4(),
            alarm_type: ALARM_TYPE.to_string(),
            severity,
            originator: message.originator.clone(),
        };

        debug!("raising {severity:?} alarm for {}", alarm.originator);

        Ok(AlarmResult {
            created: true,
            alarm: Some(alarm),
            ..Default::default()
        })
    }

    /// Severity for a message, `None` if no alarm applies.
    ///
    /// The configured custom threshold only applies to messages from the
    /// configured device type; other types fall back to their default.
    pub fn determine_severity(
        config: &WidgetConfiguration,
        metadata: &HashMap<String, String>,
    ) -> Result<Option<AlarmSeverity>> {
        let Some(device_type) = metadata
            .get(DEVICE_TYPE_KEY)
            .and_then(|value| value.parse::<DeviceType>().ok())
        else {
            return Ok(None);
        };

        let Some(threshold) = Self::threshold_for(config, device_type) else {
            return Ok(None);
        };

        let key = device_type.telemetry_key();
        let Some(raw) = metadata.get(key) else {
            return Ok(None);
        };

        let value = raw
            .trim()
            .parse::<f64>()
            .with_context(|| format!("failed to parse {key} value '{raw}' as number"))?;

        Ok((value > threshold).then_some(AlarmSeverity::Critical))
    }

    fn threshold_for(config: &WidgetConfiguration, device_type: DeviceType) -> Option<f64> {
        if config.device_type == device_type {
            config
                .custom_threshold
                .or_else(|| device_type.default_threshold())
        } else {
            device_type.default_threshold()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metadata(entries: &[(&str, &str)]) -> HashMap<String, String> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn config(device_type: DeviceType, threshold: Option<f64>) -> WidgetConfiguration {
        WidgetConfiguration {
            device_type,
            custom_threshold: threshold,
        }
    }

    mod determine_severity {
        use super::*;

        #[test]
        fn temperature_above_default_is_critical() {
            let severity = AlarmService::determine_severity(
                &WidgetConfiguration::default(),
                &metadata(&[("deviceType", "temperatureSensor"), ("temperature", "50.5")]),
            )
            .unwrap();

            assert_eq!(severity, Some(AlarmSeverity::Critical));
        }

        #[test]
        fn temperature_at_default_does_not_alarm() {
            let severity = AlarmService::determine_severity(
                &WidgetConfiguration::default(),
                &metadata(&[("deviceType", "temperatureSensor"), ("temperature", "50")]),
            )
            .unwrap();

            assert_eq!(severity, None);
        }

        #[test]
        fn custom_threshold_overrides_default() {
            let severity = AlarmService::determine_severity(
                &config(DeviceType::TemperatureSensor, Some(30.0)),
                &metadata(&[("deviceType", "temperatureSensor"), ("temperature", "31")]),
            )
            .unwrap();

            assert_eq!(severity, Some(AlarmSeverity::Critical));
        }

        #[test]
        fn custom_threshold_for_other_type_is_ignored() {
            let severity = AlarmService::determine_severity(
                &config(DeviceType::HumiditySensor, Some(10.0)),
                &metadata(&[("deviceType", "temperatureSensor"), ("temperature", "31")]),
            )
            .unwrap();

            assert_eq!(severity, None);
        }

        #[test]
        fn humidity_without_threshold_never_alarms() {
            let severity = AlarmService::determine_severity(
                &config(DeviceType::HumiditySensor, None),
                &metadata(&[("deviceType", "humiditySensor"), ("humidity", "99")]),
            )
            .unwrap();

            assert_eq!(severity, None);
        }

        #[test]
        fn humidity_with_threshold_alarms() {
            let severity = AlarmService::determine_severity(
                &config(DeviceType::HumiditySensor, Some(80.0)),
                &metadata(&[("deviceType", "humiditySensor"), ("humidity", "85")]),
            )
            .unwrap();

            assert_eq!(severity, Some(AlarmSeverity::Critical));
        }

        #[test]
        fn unknown_device_type_does_not_alarm() {
            let severity = AlarmService::determine_severity(
                &WidgetConfiguration::default(),
                &metadata(&[("deviceType", "smokeSensor"), ("temperature", "900")]),
            )
            .unwrap();

            assert_eq!(severity, None);
        }

        #[test]
        fn missing_reading_does_not_alarm() {
            let severity = AlarmService::determine_severity(
                &WidgetConfiguration::default(),
                &metadata(&[("deviceType", "temperatureSensor")]),
            )
            .unwrap();

            assert_eq!(severity, None);
        }

        #[test]
        fn non_numeric_reading_is_an_error() {
            let result = AlarmService::determine_severity(
                &WidgetConfiguration::default(),
                &metadata(&[("deviceType", "temperatureSensor"), ("temperature", "hot")]),
            );

            assert!(
                result
                    .unwrap_err()
                    .to_string()
                    .contains("failed to parse temperature value 'hot'")
            );
        }
    }

    mod process {
        use super::*;

        #[test]
        fn triggered_alarm_is_created_for_originator() {
            let message = AlarmMessage {
                originator: "device-7".to_string(),
                metadata: metadata(&[("deviceType", "temperatureSensor"), ("temperature", "75")]),
            };

            let result = AlarmService::process(&WidgetConfiguration::default(), &message).unwrap();

            assert!(result.created);
            assert!(!result.updated);
            assert!(!result.cleared);
            let alarm = result.alarm.unwrap();
            assert_eq!(alarm.severity, AlarmSeverity::Critical);
            assert_eq!(alarm.originator, "device-7");
            assert_eq!(alarm.alarm_type, ALARM_TYPE);
        }

        #[test]
        fn no_alarm_yields_empty_result() {
            let message = AlarmMessage {
                originator: "device-7".to_string(),
                metadata: metadata(&[("deviceType", "temperatureSensor"), ("temperature", "20")]),
            };

            let result = AlarmService::process(&WidgetConfiguration::default(), &message).unwrap();

            assert_eq!(result, AlarmResult::default());
        }
    }

    #[test]
    fn severity_serializes_in_upper_case() {
        let json = serde_json::to_string(&AlarmSeverity::Critical).unwrap();
        assert_eq!(json, r#""CRITICAL""#);
    }
}
