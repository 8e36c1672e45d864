use axum::{
    Router,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::{
    form::TripDetails,
    models::{ActivityTag, TripParameters},
    plan::TripPlan,
};

/// Body of `POST /api/plan`
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiTripRequest {
    pub destination: String,
    pub duration: u32,
    pub start_date: NaiveDate,
    #[serde(default)]
    pub activities: Vec<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl TryFrom<ApiTripRequest> for TripDetails {
    type Error = crate::PackSmartError;

    fn try_from(request: ApiTripRequest) -> crate::Result<Self> {
        let trip = TripParameters::new(
            &request.destination,
            request.duration,
            request.start_date,
            &request.activities,
        )?;
        Ok(TripDetails {
            trip,
            notes: request.notes.unwrap_or_default(),
        })
    }
}

pub fn router() -> Router {
    Router::new()
        .route("/activities", get(get_activities))
        .route("/plan", post(plan_trip))
}

async fn get_activities() -> Json<Vec<&'static str>> {
    Json(ActivityTag::ALL.iter().map(|tag| tag.label()).collect())
}

async fn plan_trip(Json(request): Json<ApiTripRequest>) -> Result<Json<TripPlan>, Response> {
    let details = TripDetails::try_from(request).map_err(|err| {
        tracing::warn!("Rejected trip request: {}", err);
        (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({ "error": err.user_message() })),
        )
            .into_response()
    })?;

    Ok(Json(TripPlan::build(&details)))
}
