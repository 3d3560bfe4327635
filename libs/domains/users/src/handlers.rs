use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use axum_helpers::{
    ErrorResponse, ValidatedJson,
    errors::responses::{
        BadRequestIdResponse, BadRequestValidationResponse, ConflictResponse,
        InternalServerErrorResponse, NotFoundResponse,
    },
};
#[allow(unused_imports)]
use serde_json::json;
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::UserResult;
use crate::models::{CreateUser, MessageResponse, UpdateUser, UserView};
use crate::repository::UserRepository;
use crate::service::UserService;

#[derive(OpenApi)]
#[openapi(
    paths(create_user, list_users, get_user, update_user),
    components(
        schemas(UserView, CreateUser, UpdateUser, MessageResponse, ErrorResponse),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestIdResponse,
            ConflictResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Users", description = "User registration and management (MongoDB)")
    )
)]
pub struct ApiDoc;

/// Routes relative to the `/user` mount point.
pub fn router<R: UserRepository + 'static>(service: UserService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/{id}", get(get_user).put(update_user))
        .with_state(shared_service)
}

/// Register a user
#[utoipa::path(
    post,
    path = "",
    tag = "Users",
    request_body = CreateUser,
    responses(
        (status = 201, description = "User created", body = MessageResponse,
            example = json!({"message": "User created successfully.", "statusCode": 201})),
        (status = 400, description = "Invalid body, or username already taken", content(
            (ErrorResponse = "application/json", examples(
                ("Validation" = (value = json!({
                    "statusCode": 400,
                    "code": 1001,
                    "error": "VALIDATION_ERROR",
                    "message": "Request validation failed"
                }))),
                ("Conflict" = (value = json!({
                    "statusCode": 400,
                    "code": 1008,
                    "error": "CONFLICT",
                    "message": "User already exists"
                })))
            ))
        )),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateUser>,
) -> UserResult<impl IntoResponse> {
    service.register(input).await?;
    Ok((StatusCode::CREATED, Json(MessageResponse::created())))
}

/// List all users
#[utoipa::path(
    get,
    path = "",
    tag = "Users",
    responses(
        (status = 200, description = "All users", body = Vec<UserView>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_users<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
) -> UserResult<Json<Vec<UserView>>> {
    let users = service.list_all().await?;
    Ok(Json(users))
}

/// Get a user by id
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Users",
    params(
        ("id" = String, Path, description = "User ObjectId (24 hex characters)")
    ),
    responses(
        (status = 200, description = "User found", body = UserView),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    Path(id): Path<String>,
) -> UserResult<Json<UserView>> {
    let user = service.get_by_id(&id).await?;
    Ok(Json(user))
}

/// Update a user; empty fields are left unchanged
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Users",
    params(
        ("id" = String, Path, description = "User ObjectId (24 hex characters)")
    ),
    request_body = UpdateUser,
    responses(
        (status = 200, description = "User updated", body = MessageResponse,
            example = json!({"message": "User updated successfully.", "statusCode": 200})),
        (status = 400, description = "Malformed id, invalid body, or username already taken", content(
            (ErrorResponse = "application/json", examples(
                ("InvalidId" = (value = json!({
                    "statusCode": 400,
                    "code": 1002,
                    "error": "INVALID_ID",
                    "message": "Id is not correct"
                }))),
                ("Conflict" = (value = json!({
                    "statusCode": 400,
                    "code": 1008,
                    "error": "CONFLICT",
                    "message": "Username already existed in the system"
                })))
            ))
        )),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    Path(id): Path<String>,
    ValidatedJson(input): ValidatedJson<UpdateUser>,
) -> UserResult<Json<MessageResponse>> {
    service.update(&id, input).await?;
    Ok(Json(MessageResponse::updated()))
}
