use crate::{
    http_client::{ServiceResultResponse, handle_service_result},
    services::{
        alarm::{AlarmMessage, AlarmService},
        node_config::NodeConfigStore,
    },
};
use actix_web::{HttpResponse, Responder, web};
use alarm_widget_core::WidgetConfiguration;
use log::{debug, error};

#[derive(Clone, Debug, Default)]
pub struct Api {
    pub store: NodeConfigStore,
}

impl Api {
    pub fn new(store: NodeConfigStore) -> Self {
        Api { store }
    }

    /// Register all routes of the custom alarm node service
    pub fn routes(cfg: &mut web::ServiceConfig) {
        cfg.route(
            "/api/custom-alarm-node/{node_id}/config",
            web::post().to(Self::save_config),
        )
        .route(
            "/api/custom-alarm-node/{node_id}/config",
            web::get().to(Self::get_config),
        )
        .route(
            "/api/custom-alarm-node/{node_id}/process",
            web::post().to(Self::process_message),
        )
        .route("/version", web::get().to(Self::version));
    }

    pub async fn save_config(
        node_id: web::Path<String>,
        body: web::Json<WidgetConfiguration>,
        api: web::Data<Self>,
    ) -> impl Responder {
        debug!("save_config() called for node {node_id}: {body:?}");

        handle_service_result(api.store.save(&node_id, body.into_inner()), "save_config")
    }

    pub async fn get_config(node_id: web::Path<String>, api: web::Data<Self>) -> impl Responder {
        debug!("get_config() called for node {node_id}");

        match api.store.get(&node_id) {
            Ok(Some(config)) => config.into_response(),
            Ok(None) => {
                HttpResponse::NotFound().body(format!("no configuration stored for node {node_id}"))
            }
            Err(e) => {
                error!("get_config failed: {e:#}");
                HttpResponse::InternalServerError().body(e.to_string())
            }
        }
    }

    pub async fn process_message(
        node_id: web::Path<String>,
        body: web::Json<AlarmMessage>,
        api: web::Data<Self>,
    ) -> impl Responder {
        debug!("process_message() called for node {node_id}: {body:?}");

        let config = match api.store.get(&node_id) {
            Ok(config) => config.unwrap_or_default(),
            Err(e) => {
                error!("process_message failed: {e:#}");
                return HttpResponse::InternalServerError().body(e.to_string());
            }
        };

        match AlarmService::process(&config, &body) {
            Ok(result) => result.into_response(),
            Err(e) => {
                error!("process_message failed: {e:#}");
                HttpResponse::BadRequest().body(e.to_string())
            }
        }
    }

    pub async fn version() -> impl Responder {
        HttpResponse::Ok().body(env!("CARGO_PKG_VERSION"))
    }
}
