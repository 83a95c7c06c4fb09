use crate::application::http::{
    department::router::DepartmentApiDoc,
    health::router::HealthApiDoc,
    product::router::ProductApiDoc,
    stats::router::{DepartmentStatsApiDoc, ProductStatsApiDoc},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Catalog API",
        description = "Products and departments with filtering, sorting, pagination and statistics."
    ),
    nest(
        (path = "/products", api = ProductApiDoc),
        (path = "/products", api = ProductStatsApiDoc),
        (path = "/departments", api = DepartmentApiDoc),
        (path = "/departments", api = DepartmentStatsApiDoc),
        (path = "/health", api = HealthApiDoc),
    )
)]
pub struct ApiDoc;
