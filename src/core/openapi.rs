use utoipa::{Modify, OpenApi};

use crate::features::locations::{dtos as locations_dtos, handlers as locations_handlers, models};
use crate::shared::types::{ErrorResponse, MessageResponse};

#[derive(OpenApi)]
#[openapi(
    paths(
        locations_handlers::insert_locations,
        locations_handlers::list_locations,
        locations_handlers::list_locations_by_dati2_code,
    ),
    components(
        schemas(
            ErrorResponse,
            MessageResponse,
            models::Location,
            locations_dtos::LocationRowDto,
            locations_dtos::Dati2DataDto,
            locations_dtos::InsertLocationsDto,
            locations_dtos::Dati2CodeQueryDto,
        )
    ),
    tags(
        (name = "locations", description = "Indonesian postal codes and their administrative hierarchy"),
    ),
    info(
        title = "Postal Locations API",
        version = "0.1.0",
        description = "API documentation for the postal location store",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
