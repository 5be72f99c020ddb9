//! Request handlers for the dashboard endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse};

use super::AppState;
use super::types::{ErrorResponse, SeriesQuery, SummaryResponse};
use crate::dashboard::{
    Advisory, CategoryShare, MonthlyMean, OutlierRecord, SeriesPoint, WeekdayMean,
};

/// Single-page dashboard; charts are drawn client-side from the JSON endpoints.
const INDEX_HTML: &str = include_str!("dashboard.html");

/// `GET /` → 200 + dashboard page
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// `GET /api/summary` → 200 + `SummaryResponse` JSON
pub async fn get_summary(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(SummaryResponse::new(
        &state.source,
        &state.params,
        &state.view.summary,
    ))
    .into_response()
}

/// Returns daily totals with peak flags, optionally filtered by date.
///
/// `GET /api/series` → 200 + `Vec<SeriesPoint>` JSON
/// `GET /api/series?from=2024-03-01&to=2024-03-31` → filtered range (inclusive)
/// `GET /api/series?from=2024-03-31&to=2024-03-01` → 400 + `ErrorResponse`
pub async fn get_series(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SeriesQuery>,
) -> Result<Json<Vec<SeriesPoint>>, (StatusCode, Json<ErrorResponse>)> {
    if let (Some(from), Some(to)) = (query.from, query.to) {
        if from > to {
            return Err((
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: format!("`from` ({from}) must be <= `to` ({to})"),
                }),
            ));
        }
    }

    let points = state
        .view
        .series
        .iter()
        .filter(|p| query.from.is_none_or(|from| p.date >= from))
        .filter(|p| query.to.is_none_or(|to| p.date <= to))
        .cloned()
        .collect();

    Ok(Json(points))
}

/// `GET /api/outliers` → 200 + `Vec<OutlierRecord>` JSON
pub async fn get_outliers(State(state): State<Arc<AppState>>) -> Json<Vec<OutlierRecord>> {
    Json(state.view.outliers.clone())
}

/// `GET /api/monthly` → 200 + `Vec<MonthlyMean>` JSON
pub async fn get_monthly(State(state): State<Arc<AppState>>) -> Json<Vec<MonthlyMean>> {
    Json(state.view.monthly.clone())
}

/// `GET /api/categories` → 200 + `Vec<CategoryShare>` JSON
pub async fn get_categories(State(state): State<Arc<AppState>>) -> Json<Vec<CategoryShare>> {
    Json(state.view.categories.clone())
}

/// `GET /api/weekdays` → 200 + `Vec<WeekdayMean>` JSON
pub async fn get_weekdays(State(state): State<Arc<AppState>>) -> Json<Vec<WeekdayMean>> {
    Json(state.view.weekdays.clone())
}

/// `GET /api/advice` → 200 + `Vec<Advisory>` JSON
pub async fn get_advice(State(state): State<Arc<AppState>>) -> Json<Vec<Advisory>> {
    Json(state.view.advice.clone())
}
