use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{Method, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tracing::{error, info};

use crate::common::error::HubError;
use crate::domain::Company;
use crate::repository::CompanyRepository;

#[derive(Clone)]
pub struct AppState {
    pub repository: Arc<CompanyRepository>,
}

/// Errors surfaced at the API boundary
pub enum ApiError {
    NotFound,
    Upstream(HubError),
}

impl From<HubError> for ApiError {
    fn from(err: HubError) -> Self {
        ApiError::Upstream(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            ApiError::NotFound => (StatusCode::NOT_FOUND, "Company not found".to_string()),
            ApiError::Upstream(err) => {
                error!("upstream feed failure: {}", err);
                (
                    StatusCode::BAD_GATEWAY,
                    format!("Upstream feed failure: {}", err),
                )
            }
        };
        (status, Json(serde_json::json!({ "detail": detail }))).into_response()
    }
}

/// Health check endpoint
async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "company-hub",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// List all unified companies
async fn list_companies(State(state): State<AppState>) -> Result<Json<Vec<Company>>, ApiError> {
    let companies = state.repository.get_all().await?;
    Ok(Json(companies))
}

/// Look up a single company by its unified id
async fn get_company(
    State(state): State<AppState>,
    Path(company_id): Path<String>,
) -> Result<Json<Company>, ApiError> {
    match state.repository.get_by_id(&company_id).await? {
        Some(company) => Ok(Json(company)),
        None => Err(ApiError::NotFound),
    }
}

pub fn app_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET])
        .allow_headers(Any);

    Router::new()
        .route("/api/companies", get(list_companies))
        .route("/api/companies/:company_id", get(get_company))
        .route("/health", get(health))
        .layer(cors)
        .with_state(state)
}

/// Bind and serve the API until the process is stopped
pub async fn run_server(state: AppState, port: u16) -> anyhow::Result<()> {
    let app = app_router(state);

    let bind_addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    info!("API server listening on {}", bind_addr);
    axum::serve(listener, app).await?;
    Ok(())
}
