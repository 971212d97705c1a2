use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use shared::{
    domain::{Resource, ResourceId},
    error::{ApiError, ErrorCode},
    protocol::{FilterOptionsResponse, ResourceListQuery, ResourceListResponse},
};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

mod api;
mod app_state;
mod config;

use api::{filters_route, get_resource, list_filter_options, list_resources, resources_route, ApiContext};
use app_state::AppState;
use config::{load_catalog, load_settings};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let settings = load_settings();
    let catalog = load_catalog(&settings)?;
    let state = AppState {
        api: ApiContext::new(catalog),
    };
    let app = build_router(Arc::new(state));

    let addr: SocketAddr = settings
        .server_bind
        .parse()
        .with_context(|| format!("invalid bind address '{}'", settings.server_bind))?;
    info!(%addr, "server listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route(resources_route(), get(http_list_resources))
        .route("/api/resources/:resource_id", get(http_get_resource))
        .route(filters_route(), get(http_list_filter_options))
        .with_state(state)
}

async fn healthz() -> &'static str {
    "ok"
}

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::Validation => StatusCode::BAD_REQUEST,
    }
}

async fn http_list_resources(
    State(state): State<Arc<AppState>>,
    Query(q): Query<ResourceListQuery>,
) -> Result<Json<ResourceListResponse>, (StatusCode, Json<ApiError>)> {
    let response = list_resources(&state.api, &q).map_err(|e| (status_for(e.code), Json(e)))?;
    debug!(
        matched = response.resources.len(),
        search = q.search(),
        "listed resources"
    );
    Ok(Json(response))
}

async fn http_get_resource(
    State(state): State<Arc<AppState>>,
    Path(resource_id): Path<String>,
) -> Result<Json<Resource>, (StatusCode, Json<ApiError>)> {
    let resource = get_resource(&state.api, &ResourceId::new(resource_id))
        .map_err(|e| (status_for(e.code), Json(e)))?;
    Ok(Json(resource))
}

async fn http_list_filter_options(
    State(state): State<Arc<AppState>>,
) -> Json<FilterOptionsResponse> {
    Json(list_filter_options(&state.api))
}

#[cfg(test)]
#[path = "tests/main_tests.rs"]
mod tests;
