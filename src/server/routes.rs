use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::domain::chart::{AxisDomain, ChartPoint};
use crate::render::render_page;
use crate::server::error::ApiError;
use crate::server::state::AppState;
use crate::shared::Locale;

/// Build the page + API router.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(page))
        .route("/api/rates", get(api_rates))
        .route("/health", get(health))
}

#[derive(Debug, Default, Deserialize)]
pub struct LangQuery {
    pub lang: Option<String>,
}

impl LangQuery {
    /// Requested locale, or `fallback` when absent or unsupported.
    pub fn locale_or(&self, fallback: Locale) -> Locale {
        self.lang
            .as_deref()
            .and_then(|tag| tag.parse().ok())
            .unwrap_or(fallback)
    }
}

/// GET / — the chart page. Both locales are rendered; `lang` picks the visible one.
async fn page(State(state): State<Arc<AppState>>, Query(query): Query<LangQuery>) -> Response {
    let active = query.locale_or(state.config.default_locale);
    let outcome = state.client.rates().chart(&Locale::ALL).await;

    let status = match &outcome {
        Ok(_) => StatusCode::OK,
        Err(e) => {
            tracing::warn!(kind = e.kind(), "Rate pipeline failed: {e}");
            StatusCode::BAD_GATEWAY
        }
    };

    (status, Html(render_page(&outcome, active))).into_response()
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RatesResponse {
    pub locale: Locale,
    pub axis: AxisDomain,
    pub points: Vec<ChartPoint>,
}

/// GET /api/rates — the same pipeline as the page, projected for one locale.
async fn api_rates(
    State(state): State<Arc<AppState>>,
    Query(query): Query<LangQuery>,
) -> Result<Json<RatesResponse>, ApiError> {
    let locale = query.locale_or(state.config.default_locale);
    let chart = state.client.rates().chart(&[locale]).await?;
    Ok(Json(RatesResponse {
        locale,
        axis: chart.axis,
        points: chart.points(locale),
    }))
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}
