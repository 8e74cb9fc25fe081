use crate::crud;
use actix_web::{HttpResponse, Responder, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use sqlx::PgPool;
use tracing::error;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Deserialize, Validate, ToSchema)]
pub struct CreateUser {
    #[schema(example = "John Doe")]
    pub name: String,
    #[validate(email)]
    #[schema(example = "john.doe@company.com", format = "email")]
    pub email: String,
    #[schema(example = "user")]
    pub role: String,
    #[schema(example = "Engineering")]
    pub department: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct UserResponse {
    #[schema(example = "6f1c1b2a-0d3e-4e2f-9c7b-8a54d1e0f316")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
    pub department: Option<String>,
}

impl From<crate::model::user::User> for UserResponse {
    fn from(user: crate::model::user::User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            role: user.role,
            department: user.department,
        }
    }
}

#[derive(Deserialize, IntoParams)]
pub struct SearchQuery {
    /// Substring matched against name and email, case-insensitively
    pub q: String,
}

/// Create User
#[utoipa::path(
    post,
    path = "/users",
    request_body = CreateUser,
    responses(
        (status = 200, description = "User created successfully", body = UserResponse),
        (status = 400, description = "Invalid email or email already registered", body = Object, example = json!({
            "detail": "Email already exists"
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Users"
)]
pub async fn create_user(
    pool: web::Data<PgPool>,
    payload: web::Json<CreateUser>,
) -> actix_web::Result<impl Responder> {
    if payload.validate().is_err() {
        return Ok(HttpResponse::BadRequest().json(json!({
            "detail": "Invalid email address"
        })));
    }

    let existing = crud::get_user_by_email(pool.get_ref(), &payload.email)
        .await
        .map_err(|e| {
            error!(error = %e, email = %payload.email, "Failed to check existing email");
            actix_web::error::ErrorInternalServerError("Internal Server Error")
        })?;

    if existing.is_some() {
        return Ok(HttpResponse::BadRequest().json(json!({
            "detail": "Email already exists"
        })));
    }

    let user = crud::create_user(
        pool.get_ref(),
        &payload.name,
        &payload.email,
        &payload.role,
        payload.department.as_deref(),
    )
    .await
    .map_err(|e| {
        error!(error = %e, "Failed to create user");
        actix_web::error::ErrorInternalServerError("Internal Server Error")
    })?;

    Ok(HttpResponse::Ok().json(UserResponse::from(user)))
}

/// List Users
#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "All users", body = [UserResponse]),
        (status = 500, description = "Internal server error")
    ),
    tag = "Users"
)]
pub async fn list_users(pool: web::Data<PgPool>) -> actix_web::Result<impl Responder> {
    let users = crud::list_users(pool.get_ref()).await.map_err(|e| {
        error!(error = %e, "Failed to list users");
        actix_web::error::ErrorInternalServerError("Internal Server Error")
    })?;

    Ok(HttpResponse::Ok().json(users.into_iter().map(UserResponse::from).collect::<Vec<_>>()))
}

/// Get User by ID
#[utoipa::path(
    get,
    path = "/users/{user_id}",
    params(
        ("user_id", Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User found", body = UserResponse),
        (status = 404, description = "User not found", body = Object, example = json!({
            "detail": "User not found"
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Users"
)]
pub async fn get_user(
    pool: web::Data<PgPool>,
    path: web::Path<String>,
) -> actix_web::Result<impl Responder> {
    let user_id = path.into_inner();

    let user = crud::get_user(pool.get_ref(), &user_id).await.map_err(|e| {
        error!(error = %e, %user_id, "Failed to fetch user");
        actix_web::error::ErrorInternalServerError("Internal Server Error")
    })?;

    match user {
        Some(u) => Ok(HttpResponse::Ok().json(UserResponse::from(u))),
        None => Ok(HttpResponse::NotFound().json(json!({
            "detail": "User not found"
        }))),
    }
}

/// Search Users by name or email
#[utoipa::path(
    get,
    path = "/search/users",
    params(SearchQuery),
    responses(
        (status = 200, description = "Matching users", body = [UserResponse]),
        (status = 500, description = "Internal server error")
    ),
    tag = "Search"
)]
pub async fn search_users(
    pool: web::Data<PgPool>,
    query: web::Query<SearchQuery>,
) -> actix_web::Result<impl Responder> {
    let users = crud::search_user_by_name_or_email(pool.get_ref(), &query.q)
        .await
        .map_err(|e| {
            error!(error = %e, q = %query.q, "Failed to search users");
            actix_web::error::ErrorInternalServerError("Internal Server Error")
        })?;

    Ok(HttpResponse::Ok().json(users.into_iter().map(UserResponse::from).collect::<Vec<_>>()))
}

#[cfg(test)]
mod tests {
    use super::CreateUser;
    use validator::Validate;

    #[test]
    fn create_user_department_defaults_to_none() {
        let payload: CreateUser = serde_json::from_str(
            r#"{"name": "John", "email": "john@example.com", "role": "admin"}"#,
        )
        .unwrap();
        assert_eq!(payload.name, "John");
        assert!(payload.department.is_none());
        assert!(payload.validate().is_ok());
    }

    #[test]
    fn create_user_rejects_malformed_email() {
        let payload: CreateUser =
            serde_json::from_str(r#"{"name": "John", "email": "not-an-email", "role": "user"}"#)
                .unwrap();
        assert!(payload.validate().is_err());
    }

    #[test]
    fn user_response_serializes_null_department() {
        let user = crate::model::user::User {
            id: "abc".to_string(),
            name: "John".to_string(),
            email: "john@example.com".to_string(),
            role: "user".to_string(),
            department: None,
        };
        let value = serde_json::to_value(super::UserResponse::from(user)).unwrap();
        assert_eq!(value["department"], serde_json::Value::Null);
        assert_eq!(value["email"], "john@example.com");
    }
}
