use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};

use crate::core::error::Result;
use crate::core::extractor::{AppJson, RequiredJson};
use crate::features::locations::dtos::{Dati2CodeQueryDto, InsertLocationsDto};
use crate::features::locations::models::Location;
use crate::features::locations::services::LocationService;
use crate::shared::constants::MSG_LOCATIONS_INSERTED;
use crate::shared::types::{ErrorResponse, MessageResponse};

/// Insert a batch of location rows
///
/// Rows are written one by one in request order. When a row fails the batch
/// stops there and rows written before it are kept.
#[utoipa::path(
    post,
    path = "/insert",
    request_body = InsertLocationsDto,
    responses(
        (status = 201, description = "Rows inserted", body = MessageResponse),
        (status = 400, description = "Body does not match Dati2Data.Row", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    ),
    tag = "locations"
)]
pub async fn insert_locations(
    State(service): State<Arc<LocationService>>,
    AppJson(dto): AppJson<InsertLocationsDto>,
) -> Result<(StatusCode, Json<MessageResponse>)> {
    service.insert_batch(&dto.dati2_data.row).await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new(MSG_LOCATIONS_INSERTED)),
    ))
}

/// List every stored location
#[utoipa::path(
    get,
    path = "/data",
    responses(
        (status = 200, description = "All stored locations", body = Vec<Location>),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    ),
    tag = "locations"
)]
pub async fn list_locations(
    State(service): State<Arc<LocationService>>,
) -> Result<Json<Vec<Location>>> {
    let locations = service.list_all().await?;
    Ok(Json(locations))
}

/// List locations with an exact Dati2Code
#[utoipa::path(
    post,
    path = "/data/by-dati2code",
    request_body = Dati2CodeQueryDto,
    responses(
        (status = 200, description = "Matching locations, possibly empty", body = Vec<Location>),
        (status = 400, description = "Dati2Code missing from the body", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    ),
    tag = "locations"
)]
pub async fn list_locations_by_dati2_code(
    State(service): State<Arc<LocationService>>,
    RequiredJson(dto): RequiredJson<Dati2CodeQueryDto>,
) -> Result<Json<Vec<Location>>> {
    let locations = service.list_by_dati2_code(&dto.dati2_code).await?;
    Ok(Json(locations))
}
