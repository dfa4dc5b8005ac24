//! User management controller.

use crate::{
    responses::{created, ok, ApiResponse, ApiResult, AppError},
    state::AppState,
};
use axum::{
    extract::{Multipart, Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use tracing::debug;
use userhub_core::{HubError, UserId};
use userhub_service::{CreateUserRequest, UpdateUserRequest, UserDto};

/// Creates the user router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/load", get(get_random_user).post(add_random_user))
        .route("/", get(get_all_users).post(add_user).put(update_user))
        .route("/image", axum::routing::post(add_user_with_image))
        .route("/:id", get(get_user_by_id).delete(delete_user))
        .route("/:id/posts", get(get_posts_by_user_id))
        .route("/:id/image", get(get_profile_image))
}

/// List all users.
async fn get_all_users(State(state): State<AppState>) -> ApiResult<Vec<UserDto>> {
    debug!("List users request");
    let response = state.user_service.get_all_users().await?;
    ok(response)
}

/// Get a user by ID (sentinel DTO when absent).
async fn get_user_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<UserDto> {
    debug!("Get user request: {}", id);
    let user_id = parse_user_id(&id)?;
    let response = state.user_service.get_user(user_id).await?;
    ok(response)
}

/// Get a user with its nested post collection.
async fn get_posts_by_user_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<UserDto> {
    debug!("Get user posts request: {}", id);
    let user_id = parse_user_id(&id)?;
    let response = state.user_service.get_user_with_posts(user_id).await?;
    ok(response)
}

/// Create a new user.
async fn add_user(
    State(state): State<AppState>,
    Json(request): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<ApiResponse<UserDto>>), AppError> {
    debug!("Create user request: {}", request.username);
    let response = state.user_service.add_user(request).await?;
    Ok(created(response))
}

/// Update a user; responds with `data: null` when the ID is unknown.
async fn update_user(
    State(state): State<AppState>,
    Json(request): Json<UpdateUserRequest>,
) -> ApiResult<Option<UserDto>> {
    debug!("Update user request: {}", request.id);
    let response = state.user_service.update_user(request).await?;
    ok(response)
}

/// Delete a user; the outcome is reported as a sentinel message.
async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<UserDto> {
    debug!("Delete user request: {}", id);
    let user_id = parse_user_id(&id)?;
    let response = state.user_service.delete_user(user_id).await?;
    ok(response)
}

/// Get one randomly selected existing user (load-testing helper).
async fn get_random_user(State(state): State<AppState>) -> ApiResult<Option<UserDto>> {
    debug!("Random user request");
    let response = state.user_service.get_random_user().await?;
    ok(response)
}

/// Generate and persist one synthetic user (load-testing helper).
async fn add_random_user(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<ApiResponse<UserDto>>), AppError> {
    debug!("Add random user request");
    let response = state.user_service.add_random_user().await?;
    Ok(created(response))
}

/// Create a user with a profile image (multipart: `user` JSON + `file`).
async fn add_user_with_image(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<ApiResponse<UserDto>>), AppError> {
    debug!("Create user with image request");

    let mut request: Option<CreateUserRequest> = None;
    let mut file: Option<(String, String, Vec<u8>)> = None;

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        AppError(HubError::validation(format!(
            "Invalid multipart payload: {}",
            e
        )))
    })? {
        match field.name() {
            Some("user") => {
                let text = field.text().await.map_err(|e| {
                    AppError(HubError::validation(format!("Invalid user part: {}", e)))
                })?;
                let parsed = serde_json::from_str(&text).map_err(|e| {
                    AppError(HubError::validation(format!("Invalid user payload: {}", e)))
                })?;
                request = Some(parsed);
            }
            Some("file") => {
                let filename = field.file_name().unwrap_or("profile").to_string();
                let content_type = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| {
                        AppError(HubError::validation(format!("Invalid file part: {}", e)))
                    })?
                    .to_vec();
                file = Some((filename, content_type, data));
            }
            _ => {}
        }
    }

    let request =
        request.ok_or_else(|| AppError(HubError::validation("Missing 'user' multipart field")))?;
    let (filename, content_type, data) =
        file.ok_or_else(|| AppError(HubError::validation("Missing 'file' multipart field")))?;

    let response = state
        .user_service
        .add_user_with_image(request, &filename, &content_type, data)
        .await?;
    Ok(created(response))
}

/// Download a user's profile image.
async fn get_profile_image(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    debug!("Get profile image request: {}", id);
    let user_id = parse_user_id(&id)?;
    let image = state.user_service.get_profile_image(user_id).await?;

    let headers = [
        (header::CONTENT_TYPE, image.content_type.clone()),
        (header::CONTENT_LENGTH, image.size.to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", image.filename),
        ),
    ];
    Ok((headers, image.data).into_response())
}

/// Helper to parse a user ID from a path parameter.
fn parse_user_id(id: &str) -> Result<UserId, AppError> {
    UserId::parse(id).map_err(|_| AppError(HubError::Validation(format!("Invalid user ID: {}", id))))
}
