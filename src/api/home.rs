//! Welcome page

/// Welcome message
#[utoipa::path(
    get,
    path = "/",
    tag = "health",
    responses(
        (status = 200, description = "Welcome text", body = String)
    )
)]
pub async fn index() -> &'static str {
    tracing::info!("Home page accessed.");
    "Welcome to the Library Management System!"
}
