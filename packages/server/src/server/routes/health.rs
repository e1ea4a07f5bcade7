use std::time::Duration;

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use tracing::warn;

use crate::server::app::AppState;

const DATABASE_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: &'static str,
    /// Fuel type rows present; `None` when the database did not answer
    pub fuel_types: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Health check (`GET /health`)
///
/// Counts the seeded fuel types, which both pings the database and tells
/// whether migrations ran. 200 when the count succeeds, 503 otherwise.
pub async fn health_handler(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let count = tokio::time::timeout(
        DATABASE_TIMEOUT,
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM fuel_types").fetch_one(&state.db_pool),
    )
    .await;

    let (status, response) = match count {
        Ok(Ok(fuel_types)) => (
            StatusCode::OK,
            HealthResponse {
                status: "healthy",
                fuel_types: Some(fuel_types),
                error: None,
            },
        ),
        Ok(Err(e)) => (StatusCode::SERVICE_UNAVAILABLE, unhealthy(format!("Query failed: {}", e))),
        Err(_) => (
            StatusCode::SERVICE_UNAVAILABLE,
            unhealthy(format!("Query timeout (>{}s)", DATABASE_TIMEOUT.as_secs())),
        ),
    };

    if let Some(error) = &response.error {
        warn!(error = %error, "Health check failed");
    }

    (status, Json(response))
}

fn unhealthy(error: String) -> HealthResponse {
    HealthResponse {
        status: "unhealthy",
        fuel_types: None,
        error: Some(error),
    }
}
