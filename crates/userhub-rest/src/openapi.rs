//! OpenAPI documentation.

use crate::controllers::health_controller;
use userhub_core::{ErrorResponse, FieldError};
use userhub_service::{CreateUserRequest, PostDto, UpdateUserRequest, UserDto};
use utoipa::OpenApi;

/// API documentation definition.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "UserHub API",
        description = "User management microservice with a cache-backed random-access path and profile image storage"
    ),
    paths(
        health_controller::health_check,
        health_controller::readiness_check,
        health_controller::liveness_check,
    ),
    components(schemas(
        UserDto,
        PostDto,
        CreateUserRequest,
        UpdateUserRequest,
        ErrorResponse,
        FieldError,
        health_controller::HealthResponse,
    )),
    tags(
        (name = "users", description = "User management endpoints"),
        (name = "health", description = "Health check endpoints")
    )
)]
pub struct ApiDoc;
