use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::property::PropertyAttributes;
use super::service::{AssessmentService, AssessmentServiceError};
use super::AssessmentEngine;
use crate::context::{
    FacilitySnapshot, SnapshotFacilityProvider, SnapshotWeatherProvider, WeatherReading,
};

/// Property plus whatever live data the caller already gathered.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentRequest {
    pub property: PropertyAttributes,
    #[serde(default)]
    pub weather: Option<WeatherReading>,
    #[serde(default)]
    pub facilities: Option<FacilitySnapshot>,
    #[serde(default)]
    pub assessment_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BaselineRequest {
    pub property: PropertyAttributes,
    #[serde(default)]
    pub assessment_date: Option<NaiveDate>,
}

/// Router builder exposing the stateless assessment endpoints.
pub fn assessment_router(engine: Arc<AssessmentEngine>) -> Router {
    Router::new()
        .route("/api/v1/assessments", post(assess_handler))
        .route("/api/v1/assessments/baseline", post(baseline_handler))
        .with_state(engine)
}

pub(crate) async fn assess_handler(
    State(engine): State<Arc<AssessmentEngine>>,
    Json(request): Json<AssessmentRequest>,
) -> Response {
    let AssessmentRequest {
        property,
        weather,
        facilities,
        assessment_date,
    } = request;

    let assessed_on = assessment_date.unwrap_or_else(|| Local::now().date_naive());
    let service = AssessmentService::new(
        engine,
        Arc::new(SnapshotWeatherProvider::new(weather)),
        Arc::new(SnapshotFacilityProvider::new(facilities)),
    );

    match service.assess(&property, assessed_on) {
        Ok(envelope) => (StatusCode::OK, Json(envelope)).into_response(),
        Err(AssessmentServiceError::Validation(error)) => unprocessable(error.to_string()),
    }
}

pub(crate) async fn baseline_handler(
    State(engine): State<Arc<AssessmentEngine>>,
    Json(request): Json<BaselineRequest>,
) -> Response {
    if let Err(error) = request.property.validate() {
        return unprocessable(error.to_string());
    }

    let assessed_on = request
        .assessment_date
        .unwrap_or_else(|| Local::now().date_naive());
    let baseline = engine.baseline(&request.property, assessed_on);
    (StatusCode::OK, Json(baseline)).into_response()
}

fn unprocessable(message: String) -> Response {
    let payload = json!({ "error": message });
    (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
}
