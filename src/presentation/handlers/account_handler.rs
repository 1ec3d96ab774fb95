use std::sync::Arc;

use crate::{
    domain::{
        error::DomainError,
        repositories::{
            account_repository::AccountRepository, credential_repository::CredentialRepository,
        },
        services::password_service::PasswordHasher,
    },
    usecase::{login_usecase::LoginUsecase, register_account_usecase::RegisterAccountUsecase},
};
use axum::{Json, Router, extract::State, http::StatusCode, response::IntoResponse, routing::post};
use serde::{Deserialize, Serialize};

// Request

/// json for login request
#[derive(Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// json for register request
#[derive(Serialize, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub display_name: String,
}

// Response

#[derive(Serialize, Deserialize)]
pub struct AccountResponse {
    pub id: String,
    pub email: String,
    pub display_name: String,
}

impl From<crate::domain::models::account::Account> for AccountResponse {
    fn from(account: crate::domain::models::account::Account) -> Self {
        Self {
            id: account.id().to_string(),
            email: account.email().as_str().to_string(),
            display_name: account.display_name().to_string(),
        }
    }
}

/* Router Function and Handler Function */

/// function return Router object
/// Suppose to be nested by main router
pub fn create_account_router<
    C: CredentialRepository + Send + Sync + 'static + Clone,
    A: AccountRepository + Send + Sync + 'static + Clone,
    P: PasswordHasher + Send + Sync + 'static + Clone,
>(
    login_service: LoginUsecase<C, A, P>,
    register_service: RegisterAccountUsecase<A, P>,
) -> Router {
    let state = AppState {
        login_service: Arc::new(login_service),
        register_service: Arc::new(register_service),
    };

    Router::new()
        .route("/login", post(login::<C, A, P>))
        .route("/register", post(register::<C, A, P>))
        .with_state(state)
}

#[derive(Clone)]
pub struct AppState<C: CredentialRepository, A: AccountRepository, P: PasswordHasher> {
    pub login_service: Arc<LoginUsecase<C, A, P>>,
    pub register_service: Arc<RegisterAccountUsecase<A, P>>,
}

// handler function

/// handler function for login. Every failure maps to the same 401 body so a
/// caller cannot probe which emails have accounts.
async fn login<
    C: CredentialRepository + Send + Sync,
    A: AccountRepository + Send + Sync,
    P: PasswordHasher + Send + Sync,
>(
    State(state): State<AppState<C, A, P>>,
    Json(payload): Json<LoginRequest>,
) -> impl IntoResponse {
    match state
        .login_service
        .login(payload.email, payload.password)
        .await
    {
        Ok(account) => {
            let response = AccountResponse::from(account);
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(_) => (StatusCode::UNAUTHORIZED, Json("Authentication failed")).into_response(),
    }
}

/// handler function for register
async fn register<
    C: CredentialRepository + Send + Sync,
    A: AccountRepository + Send + Sync,
    P: PasswordHasher + Send + Sync,
>(
    State(state): State<AppState<C, A, P>>,
    Json(payload): Json<RegisterRequest>,
) -> impl IntoResponse {
    match state
        .register_service
        .register(payload.email, payload.display_name, payload.password)
        .await
    {
        Ok(account) => {
            let response = AccountResponse::from(account);
            (StatusCode::CREATED, Json(response)).into_response()
        }
        // the strength reason is the user's own input, safe to echo back
        Err(DomainError::WeakPassword(reason)) => {
            (StatusCode::BAD_REQUEST, Json(reason.to_string())).into_response()
        }
        Err(DomainError::InvalidEmail) => {
            (StatusCode::BAD_REQUEST, Json("Invalid email address")).into_response()
        }
        Err(DomainError::EmptyDisplayName) => {
            (StatusCode::BAD_REQUEST, Json("Display name is required")).into_response()
        }
        Err(_) => (StatusCode::BAD_REQUEST, Json("Registration failed")).into_response(),
    }
}
