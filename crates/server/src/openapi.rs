use utoipa::OpenApi;
use utoipa::ToSchema;

use crate::routes::vehicles::{RegisterRequest, TopUpRequest, VehicleResponse};

#[derive(ToSchema)]
pub struct HealthResponse {
    #[schema(example = "ok")]
    pub status: String,
}

#[derive(ToSchema)]
pub struct ErrorBody {
    #[schema(example = "Vehicle not found")]
    pub detail: String,
}

#[derive(OpenApi)]
#[openapi(
    info(title = "Vehicle Ledger", description = "Register vehicles, top up and query their prepaid balance."),
    paths(
        crate::routes::health,
        crate::routes::vehicles::register,
        crate::routes::vehicles::top_up,
        crate::routes::vehicles::balance,
    ),
    components(
        schemas(
            HealthResponse,
            ErrorBody,
            RegisterRequest,
            TopUpRequest,
            VehicleResponse,
        )
    ),
    tags(
        (name = "health"),
        (name = "vehicles")
    )
)]
pub struct ApiDoc;
