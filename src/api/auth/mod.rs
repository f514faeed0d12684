//! Authentication API endpoints
//!
//! Registration, login, logout and password change for token-based sessions.

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Router,
};
use chrono::DateTime;
use serde::{Deserialize, Serialize};

use crate::api::middleware::RequireAccount;
use crate::api::state::AppState;
use crate::api::types::{ApiError, FieldError, Json};
use crate::domain::account::{validate_email, validate_password, validate_required, Account, Role};
use crate::domain::profile::Profile;
use crate::infrastructure::account::{ChangePasswordRequest, RegisterEmployerRequest};

/// Create the authentication router
pub fn create_auth_router() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/register/employer", post(register_employer))
        .route("/login", post(login))
        .route("/logout", post(logout))
        .route("/password", post(change_password))
        .route("/me", get(get_current_account))
}

/// Candidate registration request
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
}

/// Employer registration request
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployerRegisterRequest {
    #[serde(default)]
    pub company_name: String,
    #[serde(default)]
    pub hiring_manager_first_name: String,
    #[serde(default)]
    pub hiring_manager_last_name: String,
    #[serde(default)]
    pub hiring_manager_email: String,
    #[serde(default)]
    pub hiring_manager_phone: String,
    #[serde(default)]
    pub password: String,
}

/// Login request
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Password change request
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordChangeRequest {
    pub current_password: String,
    pub new_password: String,
}

/// Account summary (safe to expose; the credential hash never serializes)
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountResponse {
    pub id: String,
    pub email: String,
    pub role: Role,
    pub profile: Profile,
    pub created_at: String,
}

impl AccountResponse {
    fn from_account(account: &Account) -> Self {
        Self {
            id: account.id().to_string(),
            email: account.email().as_str().to_string(),
            role: account.role(),
            profile: account.profile().clone(),
            created_at: account.created_at().to_rfc3339(),
        }
    }
}

/// Session response returned by register and login
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub token: String,
    pub account: AccountResponse,
    pub expires_at: String,
}

/// Logout response
#[derive(Debug, Serialize)]
pub struct LogoutResponse {
    pub message: String,
}

fn session_response(state: &AppState, account: &Account) -> Result<SessionResponse, ApiError> {
    let token = state.token_issuer.issue(account.id())?;

    // Read the expiry back off the token itself
    let claims = state.token_issuer.validate(&token)?;
    let expires_at = DateTime::from_timestamp(claims.exp, 0)
        .ok_or_else(|| ApiError::internal("Token expiry out of range"))?;

    Ok(SessionResponse {
        token,
        account: AccountResponse::from_account(account),
        expires_at: expires_at.to_rfc3339(),
    })
}

/// Register a candidate account
///
/// POST /auth/register
///
/// Returns 201 with a session token; duplicate emails yield 409.
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<SessionResponse>), ApiError> {
    let mut errors = Vec::new();

    if let Err(e) = validate_email(request.email.trim()) {
        errors.push(FieldError {
            field: "email".to_string(),
            message: e.to_string(),
        });
    }
    if let Err(e) = validate_password(&request.password) {
        errors.push(FieldError {
            field: "password".to_string(),
            message: e.to_string(),
        });
    }
    if !errors.is_empty() {
        return Err(ApiError::bad_request("Validation failed").with_field_errors(errors));
    }

    let account = state
        .account_service
        .register_candidate(&request.email, &request.password)
        .await?;

    Ok((StatusCode::CREATED, Json(session_response(&state, &account)?)))
}

/// Register an employer account
///
/// POST /auth/register/employer
pub async fn register_employer(
    State(state): State<AppState>,
    Json(request): Json<EmployerRegisterRequest>,
) -> Result<(StatusCode, Json<SessionResponse>), ApiError> {
    let mut errors = Vec::new();

    let required = [
        ("companyName", &request.company_name),
        ("hiringManagerFirstName", &request.hiring_manager_first_name),
        ("hiringManagerLastName", &request.hiring_manager_last_name),
        ("hiringManagerPhone", &request.hiring_manager_phone),
    ];
    for (field, value) in required {
        if let Err(e) = validate_required(value, field) {
            errors.push(FieldError {
                field: field.to_string(),
                message: e.to_string(),
            });
        }
    }
    if let Err(e) = validate_email(request.hiring_manager_email.trim()) {
        errors.push(FieldError {
            field: "hiringManagerEmail".to_string(),
            message: e.to_string(),
        });
    }
    if let Err(e) = validate_password(&request.password) {
        errors.push(FieldError {
            field: "password".to_string(),
            message: e.to_string(),
        });
    }
    if !errors.is_empty() {
        return Err(ApiError::bad_request("Validation failed").with_field_errors(errors));
    }

    let account = state
        .account_service
        .register_employer(RegisterEmployerRequest {
            company_name: request.company_name,
            hiring_manager_first_name: request.hiring_manager_first_name,
            hiring_manager_last_name: request.hiring_manager_last_name,
            hiring_manager_email: request.hiring_manager_email,
            hiring_manager_phone: request.hiring_manager_phone,
            password: request.password,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(session_response(&state, &account)?)))
}

/// Login with email and password
///
/// POST /auth/login
///
/// Unknown email and wrong password are indistinguishable to the caller.
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<SessionResponse>, ApiError> {
    let account = state
        .account_service
        .authenticate(&request.email, &request.password)
        .await?
        .ok_or_else(|| ApiError::unauthorized("Invalid credentials"))?;

    Ok(Json(session_response(&state, &account)?))
}

/// Logout (client-side only for stateless tokens)
///
/// POST /auth/logout
///
/// The token stays valid until expiry; the client discards it. The endpoint
/// exists for API symmetry.
pub async fn logout(_account: RequireAccount) -> Result<Json<LogoutResponse>, ApiError> {
    Ok(Json(LogoutResponse {
        message: "Logged out successfully".to_string(),
    }))
}

/// Change the current account's password
///
/// POST /auth/password
pub async fn change_password(
    RequireAccount(account): RequireAccount,
    State(state): State<AppState>,
    Json(request): Json<PasswordChangeRequest>,
) -> Result<Json<AccountResponse>, ApiError> {
    let updated = state
        .account_service
        .change_password(
            account.id(),
            ChangePasswordRequest {
                current_password: request.current_password,
                new_password: request.new_password,
            },
        )
        .await?;

    Ok(Json(AccountResponse::from_account(&updated)))
}

/// Get the current authenticated account
///
/// GET /auth/me
pub async fn get_current_account(
    RequireAccount(account): RequireAccount,
) -> Result<Json<AccountResponse>, ApiError> {
    Ok(Json(AccountResponse::from_account(&account)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::infrastructure::account::{
        AccountService, Argon2Hasher, InMemoryAccountRepository,
    };
    use crate::infrastructure::auth::{JwtConfig, JwtService};

    fn create_state() -> AppState {
        let repository = Arc::new(InMemoryAccountRepository::new());
        let hasher = Arc::new(Argon2Hasher::new());
        let account_service = Arc::new(AccountService::new(repository, hasher));
        let token_issuer = Arc::new(JwtService::new(JwtConfig::new("test-secret-key", 7)));

        AppState::new(account_service, token_issuer)
    }

    fn employer_request() -> EmployerRegisterRequest {
        EmployerRegisterRequest {
            company_name: "Acme".to_string(),
            hiring_manager_first_name: "Jo".to_string(),
            hiring_manager_last_name: "Lee".to_string(),
            hiring_manager_email: "jo@acme.com".to_string(),
            hiring_manager_phone: "555-0100".to_string(),
            password: "secret1".to_string(),
        }
    }

    #[tokio::test]
    async fn test_register_response_includes_profile() {
        let state = create_state();

        let (status, Json(response)) = register(
            State(state),
            Json(RegisterRequest {
                email: "jo@acme.com".to_string(),
                password: "secret1".to_string(),
            }),
        )
        .await
        .unwrap();

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(response.account.role, Role::Candidate);
        assert_eq!(response.account.profile, Profile::default());

        // The wire body carries the profile and never the credential hash
        let body = serde_json::to_value(&response).unwrap();
        assert!(body["account"]["profile"].is_object());
        assert!(body["account"].get("passwordHash").is_none());
        assert!(body["account"].get("password_hash").is_none());
    }

    #[tokio::test]
    async fn test_employer_registration_profile_visible_after_login() {
        let state = create_state();

        let (_, Json(registered)) =
            register_employer(State(state.clone()), Json(employer_request()))
                .await
                .unwrap();

        assert_eq!(registered.account.role, Role::Employer);
        assert_eq!(registered.account.profile.company_name, "Acme");
        assert_eq!(registered.account.profile.first_name, "Jo");

        let Json(logged_in) = login(
            State(state),
            Json(LoginRequest {
                email: "jo@acme.com".to_string(),
                password: "secret1".to_string(),
            }),
        )
        .await
        .unwrap();

        assert_eq!(logged_in.account.id, registered.account.id);
        assert_eq!(logged_in.account.profile.company_name, "Acme");

        let body = serde_json::to_value(&logged_in).unwrap();
        assert_eq!(body["account"]["profile"]["companyName"], "Acme");
        assert_eq!(body["account"]["profile"]["firstName"], "Jo");
    }

    #[tokio::test]
    async fn test_login_failure_is_undifferentiated() {
        let state = create_state();

        let err = login(
            State(state),
            Json(LoginRequest {
                email: "nobody@acme.com".to_string(),
                password: "secret1".to_string(),
            }),
        )
        .await
        .unwrap_err();

        assert_eq!(err.status, StatusCode::UNAUTHORIZED);
        assert_eq!(err.response.error.message, "Invalid credentials");
    }

    #[tokio::test]
    async fn test_register_collects_field_errors() {
        let state = create_state();

        let err = register(
            State(state),
            Json(RegisterRequest {
                email: "not-an-email".to_string(),
                password: "123".to_string(),
            }),
        )
        .await
        .unwrap_err();

        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        let errors = err.response.error.errors.unwrap();
        assert_eq!(errors.len(), 2);
        assert!(errors.iter().any(|e| e.field == "email"));
        assert!(errors.iter().any(|e| e.field == "password"));
    }
}
