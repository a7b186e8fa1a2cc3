//! CLI tool to push a custom alarm configuration to a node
//!
//! Usage: save-alarm-config <base-url> <node-id> <device-type> [threshold]

use alarm_widget_core::{DeviceType, WidgetConfiguration};
use anyhow::{Context, Result, bail};
use custom_alarm_node::config_client::{HttpConfigTransport, push_config};
use env_logger::{Builder, Env};
use std::env;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    Builder::from_env(Env::default().default_filter_or("info")).init();

    if let Err(e) = run(env::args().collect()).await {
        eprintln!("Failed to save configuration: {e:#}");
        std::process::exit(1);
    }
}

async fn run(args: Vec<String>) -> Result<()> {
    if !(4..=5).contains(&args.len()) {
        let program = args.first().map_or("save-alarm-config", String::as_str);
        bail!("Usage: {program} <base-url> <node-id> <device-type> [threshold]");
    }

    let device_type = args[3].parse::<DeviceType>().map_err(anyhow::Error::msg)?;
    let custom_threshold = args
        .get(4)
        .map(|threshold| threshold.parse::<f64>())
        .transpose()
        .context("failed to parse threshold")?;

    let transport = HttpConfigTransport::new(&args[1])?;
    let config = WidgetConfiguration {
        device_type,
        custom_threshold,
    };

    let response = push_config(&transport, &args[2], &config).await?;
    println!("{response}");

    Ok(())
}
