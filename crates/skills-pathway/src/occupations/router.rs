use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::advisor::PathwayAdvisor;
use super::domain::ClientProfile;
use super::matching::MatchProfile;
use super::timeline::{AssessmentTimeline, ClientReadiness, OutcomeWindow};

/// Router builder exposing catalog lookups, eligibility and planning endpoints.
pub fn occupation_router(advisor: Arc<PathwayAdvisor>) -> Router {
    Router::new()
        .route("/api/v1/occupations", get(search_handler))
        .route("/api/v1/occupations/categories", get(categories_handler))
        .route("/api/v1/occupations/:code", get(occupation_handler))
        .route("/api/v1/occupations/:code/checklist", get(checklist_handler))
        .route("/api/v1/occupations/:code/timeline", post(timeline_handler))
        .route("/api/v1/eligibility", post(eligibility_handler))
        .route("/api/v1/matches", post(matches_handler))
        .route("/api/v1/plan", post(plan_handler))
        .with_state(advisor)
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct SearchParams {
    #[serde(default)]
    pub(crate) q: Option<String>,
    #[serde(default)]
    pub(crate) category: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct TimelineRequest {
    #[serde(flatten)]
    pub(crate) readiness: ClientReadiness,
    #[serde(default)]
    pub(crate) start_date: Option<NaiveDate>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct TimelineResponse {
    #[serde(flatten)]
    timeline: AssessmentTimeline,
    #[serde(skip_serializing_if = "Option::is_none")]
    projected_outcome: Option<OutcomeWindow>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct EligibilityRequest {
    pub(crate) occupation_code: String,
    #[serde(default)]
    pub(crate) profile: ClientProfile,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct MatchRequest {
    pub(crate) occupation: String,
    #[serde(default)]
    pub(crate) profile: Option<MatchProfile>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PlanRequest {
    pub(crate) occupation_code: String,
    #[serde(default)]
    pub(crate) profile: ClientProfile,
    #[serde(default)]
    pub(crate) readiness: ClientReadiness,
    #[serde(default)]
    pub(crate) start_date: Option<NaiveDate>,
}

fn occupation_not_found(code: &str) -> Response {
    let payload = json!({
        "error": "occupation not found",
        "code": code,
    });
    (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
}

pub(crate) async fn search_handler(
    State(advisor): State<Arc<PathwayAdvisor>>,
    Query(params): Query<SearchParams>,
) -> Response {
    let results = advisor.search(params.q.as_deref(), params.category.as_deref());
    (StatusCode::OK, axum::Json(results)).into_response()
}

pub(crate) async fn categories_handler(State(advisor): State<Arc<PathwayAdvisor>>) -> Response {
    let categories = advisor.catalog().get_all_categories();
    (StatusCode::OK, axum::Json(json!({ "categories": categories }))).into_response()
}

pub(crate) async fn occupation_handler(
    State(advisor): State<Arc<PathwayAdvisor>>,
    Path(code): Path<String>,
) -> Response {
    match advisor.catalog().get_occupation_by_code(&code) {
        Some(occupation) => (StatusCode::OK, axum::Json(occupation)).into_response(),
        None => occupation_not_found(&code),
    }
}

pub(crate) async fn checklist_handler(
    State(advisor): State<Arc<PathwayAdvisor>>,
    Path(code): Path<String>,
) -> Response {
    match advisor.checklist(&code) {
        Some(documents) => (StatusCode::OK, axum::Json(documents)).into_response(),
        None => occupation_not_found(&code),
    }
}

pub(crate) async fn timeline_handler(
    State(advisor): State<Arc<PathwayAdvisor>>,
    Path(code): Path<String>,
    axum::Json(request): axum::Json<TimelineRequest>,
) -> Response {
    match advisor.timeline(&code, request.readiness) {
        Some(timeline) => {
            let projected_outcome = request
                .start_date
                .map(|start| timeline.projected_outcome(start));
            let body = TimelineResponse {
                timeline,
                projected_outcome,
            };
            (StatusCode::OK, axum::Json(body)).into_response()
        }
        None => occupation_not_found(&code),
    }
}

/// Unknown codes are a data outcome here, not a missing resource.
pub(crate) async fn eligibility_handler(
    State(advisor): State<Arc<PathwayAdvisor>>,
    axum::Json(request): axum::Json<EligibilityRequest>,
) -> Response {
    let outcome = advisor.evaluate(&request.profile, &request.occupation_code);
    (StatusCode::OK, axum::Json(outcome)).into_response()
}

pub(crate) async fn matches_handler(
    State(advisor): State<Arc<PathwayAdvisor>>,
    axum::Json(request): axum::Json<MatchRequest>,
) -> Response {
    let candidates = advisor.match_client(&request.occupation, request.profile.as_ref());
    (StatusCode::OK, axum::Json(candidates)).into_response()
}

pub(crate) async fn plan_handler(
    State(advisor): State<Arc<PathwayAdvisor>>,
    axum::Json(request): axum::Json<PlanRequest>,
) -> Response {
    let prepared_on = request
        .start_date
        .unwrap_or_else(|| Local::now().date_naive());

    match advisor.plan(
        &request.profile,
        &request.occupation_code,
        request.readiness,
        prepared_on,
    ) {
        Some(plan) => (StatusCode::OK, axum::Json(plan)).into_response(),
        None => occupation_not_found(&request.occupation_code),
    }
}
