use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use service::vehicle::domain::{RegisterVehicle, Vehicle};
use tracing::info;
use utoipa::ToSchema;

use crate::{errors::ApiError, state::ServerState};

/// Body of `POST /register`
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct RegisterRequest {
    #[schema(example = "GJ01AB1234", min_length = 1, max_length = 32)]
    pub plate_number: String,
    #[schema(example = 100.0)]
    pub balance: f64,
}

/// Body of `POST /topup/{plate_number}`
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct TopUpRequest {
    #[schema(example = 70.0)]
    pub amount: f64,
}

/// Vehicle record as returned by every endpoint
#[derive(Debug, Deserialize, Serialize, PartialEq, ToSchema)]
pub struct VehicleResponse {
    pub plate_number: String,
    pub balance: f64,
}

impl From<Vehicle> for VehicleResponse {
    fn from(v: Vehicle) -> Self {
        Self { plate_number: v.plate_number, balance: v.balance }
    }
}

#[utoipa::path(
    post, path = "/register", tag = "vehicles",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Vehicle registered", body = VehicleResponse),
        (status = 400, description = "Vehicle already registered", body = crate::openapi::ErrorBody),
        (status = 422, description = "Malformed request", body = crate::openapi::ErrorBody)
    )
)]
pub async fn register(
    State(state): State<ServerState>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<VehicleResponse>), ApiError> {
    let Json(input) = payload?;
    info!(plate_number = %input.plate_number, balance = input.balance, "vehicle_register_request");

    let created = state
        .vehicles
        .register(RegisterVehicle { plate_number: input.plate_number, balance: input.balance })
        .await?;
    Ok((StatusCode::CREATED, Json(created.into())))
}

#[utoipa::path(
    post, path = "/topup/{plate_number}", tag = "vehicles",
    params(("plate_number" = String, Path, description = "Vehicle license plate")),
    request_body = TopUpRequest,
    responses(
        (status = 200, description = "Balance updated", body = VehicleResponse),
        (status = 400, description = "Undecodable plate number", body = crate::openapi::ErrorBody),
        (status = 404, description = "Vehicle not found", body = crate::openapi::ErrorBody),
        (status = 422, description = "Malformed request or balance overflow", body = crate::openapi::ErrorBody)
    )
)]
pub async fn top_up(
    State(state): State<ServerState>,
    plate_number: Result<Path<String>, PathRejection>,
    payload: Result<Json<TopUpRequest>, JsonRejection>,
) -> Result<Json<VehicleResponse>, ApiError> {
    let Path(plate_number) = plate_number?;
    let Json(input) = payload?;
    let updated = state.vehicles.top_up(&plate_number, input.amount).await?;
    Ok(Json(updated.into()))
}

#[utoipa::path(
    get, path = "/balance/{plate_number}", tag = "vehicles",
    params(("plate_number" = String, Path, description = "Vehicle license plate")),
    responses(
        (status = 200, description = "Current vehicle record", body = VehicleResponse),
        (status = 400, description = "Undecodable plate number", body = crate::openapi::ErrorBody),
        (status = 404, description = "Vehicle not found", body = crate::openapi::ErrorBody)
    )
)]
pub async fn balance(
    State(state): State<ServerState>,
    plate_number: Result<Path<String>, PathRejection>,
) -> Result<Json<VehicleResponse>, ApiError> {
    let Path(plate_number) = plate_number?;
    let vehicle = state.vehicles.balance(&plate_number).await?;
    Ok(Json(vehicle.into()))
}
