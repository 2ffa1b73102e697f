//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::{auth_handler, user_handler};
use crate::domain::{UserResponse, UserSummary};

/// OpenAPI documentation for the user service
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Xanadu Users",
        version = "0.1.0",
        description = "User management: registration, listing, lookup and password login",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        user_handler::create_user,
        user_handler::list_users,
        user_handler::get_user,
        auth_handler::login,
    ),
    components(
        schemas(
            UserResponse,
            UserSummary,
            user_handler::CreateUserRequest,
            user_handler::UpdateUserRequest,
            auth_handler::LoginRequest,
            auth_handler::LoginResponse,
        )
    ),
    tags(
        (name = "Users", description = "User records"),
        (name = "Authentication", description = "Password login")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_every_route() {
        let doc = ApiDoc::openapi();
        let paths: Vec<_> = doc.paths.paths.keys().cloned().collect();

        assert!(paths.contains(&"/users".to_string()));
        assert!(paths.contains(&"/users/{id}".to_string()));
        assert!(paths.contains(&"/login".to_string()));
    }

    #[test]
    fn test_update_shape_is_published() {
        let doc = ApiDoc::openapi();
        let schemas = doc.components.expect("components").schemas;
        assert!(schemas.contains_key("UpdateUserRequest"));
        assert!(schemas.contains_key("UserResponse"));
    }
}
