use crate::http_client::handle_http_response;
use alarm_widget_core::{WidgetConfiguration, config_endpoint};
use anyhow::{Context, Result};
use log::{error, info};
#[cfg(any(test, feature = "mock"))]
use mockall::automock;
use reqwest::Client;
use serde_json::Value;
use trait_variant::make;

/// Persists a widget configuration for a node and yields the server's reply
#[make(Send)]
#[cfg_attr(any(test, feature = "mock"), automock)]
pub trait ConfigTransport {
    async fn save_config(&self, node_id: &str, config: &WidgetConfiguration) -> Result<Value>;
}

/// reqwest based transport talking to a custom alarm node service
#[derive(Clone, Debug)]
pub struct HttpConfigTransport {
    client: Client,
    base_url: String,
}

impl HttpConfigTransport {
    pub fn new(base_url: &str) -> Result<Self> {
        let client = Client::builder()
            .build()
            .context("failed to create HTTP client")?;

        Ok(HttpConfigTransport {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn build_url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

impl ConfigTransport for HttpConfigTransport {
    async fn save_config(&self, node_id: &str, config: &WidgetConfiguration) -> Result<Value> {
        let url = self.build_url(&config_endpoint(node_id));
        info!("POST {url}");

        let res = self
            .client
            .post(&url)
            .json(config)
            .send()
            .await
            .context(format!("failed to send POST request to {url}"))?;

        let body = handle_http_response(res, &format!("POST {url}")).await?;

        if body.trim().is_empty() {
            return Ok(Value::Null);
        }

        serde_json::from_str(&body).context("failed to parse response body as JSON")
    }
}

/// Save `config` through `transport`, logging the attempt and its outcome.
pub async fn push_config<T: ConfigTransport>(
    transport: &T,
    node_id: &str,
    config: &WidgetConfiguration,
) -> Result<Value> {
    info!("Saving custom alarm configuration: {config:?}");

    match transport.save_config(node_id, config).await {
        Ok(response) => {
            info!("Settings saved successfully: {response}");
            Ok(response)
        }
        Err(e) => {
            error!("Error saving settings: {e:#}");
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alarm_widget_core::DeviceType;
    use mockall::predicate::eq;
    use serde_json::json;

    mod build_url {
        use super::*;

        #[test]
        fn strips_trailing_slash_from_base_url() {
            let transport = HttpConfigTransport::new("http://localhost:1977/").unwrap();

            assert_eq!(
                transport.build_url(&config_endpoint("n1")),
                "http://localhost:1977/api/custom-alarm-node/n1/config"
            );
        }
    }

    mod push_config {
        use super::*;

        fn config() -> WidgetConfiguration {
            WidgetConfiguration {
                device_type: DeviceType::TemperatureSensor,
                custom_threshold: Some(42.0),
            }
        }

        #[tokio::test]
        async fn passes_node_id_and_config_through() {
            let mut transport = MockConfigTransport::new();
            transport
                .expect_save_config()
                .with(eq("nodeId"), eq(config()))
                .times(1)
                .returning(|_, _| Box::pin(async { Ok(json!({"saved": true})) }));

            let response = push_config(&transport, "nodeId", &config()).await.unwrap();

            assert_eq!(response, json!({"saved": true}));
        }

        #[tokio::test]
        async fn returns_transport_error_unchanged() {
            let mut transport = MockConfigTransport::new();
            transport
                .expect_save_config()
                .times(1)
                .returning(|_, _| {
                    Box::pin(async { Err(anyhow::anyhow!("connection refused")) })
                });

            let result = push_config(&transport, "nodeId", &config()).await;

            assert_eq!(result.unwrap_err().to_string(), "connection refused");
        }
    }
}
