//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{books, customers, health, home, loans};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Library Catalog API",
        version = "0.1.0",
        description = "Customers, books and late loans"
    ),
    paths(
        home::index,
        health::health_check,
        health::readiness_check,
        customers::list_customers,
        customers::create_customer,
        books::create_book,
        loans::list_late_loans,
    ),
    components(
        schemas(
            crate::models::customer::Customer,
            crate::models::customer::CreateCustomer,
            crate::models::book::Book,
            crate::models::book::CreateBook,
            crate::models::loan::LateLoan,
            crate::api::MessageResponse,
            health::HealthResponse,
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Welcome and health endpoints"),
        (name = "customers", description = "Customer registry"),
        (name = "books", description = "Book registry"),
        (name = "loans", description = "Loan tracking")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
