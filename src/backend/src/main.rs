use actix_web::{App, HttpServer, web::Data};
use anyhow::{Context, Result};
use custom_alarm_node::{api::Api, config::AppConfig, services::node_config::NodeConfigStore};
use env_logger::{Builder, Env, Target};
use log::{debug, error, info};
use std::io::Write;
use tokio::signal::unix::{SignalKind, signal};

#[actix_web::main]
async fn main() {
    if let Err(e) = run().await {
        error!("application error: {e:#}");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    initialize();

    let config = &AppConfig::get().server;
    let api = Api::new(NodeConfigStore::default());

    let server = HttpServer::new(move || {
        App::new()
            .app_data(Data::new(api.clone()))
            .configure(Api::routes)
    })
    .bind((config.bind_address, config.port))
    .context("failed to bind server")?
    .disable_signals()
    .run();

    info!("listening on {}:{}", config.bind_address, config.port);

    let server_handle = server.handle();
    let server_task = tokio::spawn(server);

    let mut sigterm =
        signal(SignalKind::terminate()).context("failed to install SIGTERM handler")?;

    tokio::select! {
        _ = tokio::signal::ctrl_c() => debug!("ctrl-c received"),
        _ = sigterm.recv() => debug!("SIGTERM received"),
        result = server_task => {
            match result {
                Ok(Ok(())) => debug!("server stopped normally"),
                Ok(Err(e)) => error!("server stopped with error: {e}"),
                Err(e) => error!("server task panicked: {e}"),
            }
            return Ok(());
        }
    };

    info!("shutting down");
    server_handle.stop(true).await;
    info!("shutdown complete");

    Ok(())
}

fn initialize() {
    log_panics::init();

    let mut builder = if cfg!(debug_assertions) {
        Builder::from_env(Env::default().default_filter_or("debug"))
    } else {
        Builder::from_env(Env::default().default_filter_or("info"))
    };

    builder.format(|f, record| match record.level() {
        log::Level::Error => {
            eprintln!("{}", record.args());
            Ok(())
        }
        _ => {
            writeln!(f, "{}", record.args())
        }
    });

    builder.target(Target::Stdout).init();

    info!("module version: {}", env!("CARGO_PKG_VERSION"));
}
