//! OpenAPI documentation configuration

use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "User API",
        version = "0.1.0",
        description = "User registration and management backed by MongoDB",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    nest(
        (path = "/user", api = domain_users::ApiDoc)
    ),
    tags(
        (name = "Users", description = "User registration and management (MongoDB)")
    )
)]
pub struct ApiDoc;
