//! Profile API endpoints
//!
//! Profile reads and sparse updates plus identity-addressed experience and
//! education sub-collections. Every mutation responds with the full updated
//! sequence so clients never have to reconcile deltas.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post, put},
    Router,
};
use serde::Serialize;

use crate::api::middleware::RequireAccount;
use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::domain::account::{Account, Role};
use crate::domain::profile::{
    Education, EducationPatch, Entry, EntryId, Experience, ExperiencePatch, Profile, ProfilePatch,
};

/// Create the profile router
pub fn create_profile_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_profile).put(update_profile))
        .route("/experience", post(add_experience))
        .route(
            "/experience/{id}",
            put(update_experience).delete(remove_experience),
        )
        .route("/education", post(add_education))
        .route(
            "/education/{id}",
            put(update_education).delete(remove_education),
        )
}

/// Profile response including account identity and role
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    pub id: String,
    pub email: String,
    pub role: Role,
    pub profile: Profile,
}

impl ProfileResponse {
    fn from_account(account: &Account) -> Self {
        Self {
            id: account.id().to_string(),
            email: account.email().as_str().to_string(),
            role: account.role(),
            profile: account.profile().clone(),
        }
    }
}

/// Experience sequence response
#[derive(Debug, Serialize)]
pub struct ExperienceListResponse {
    pub experience: Vec<Entry<Experience>>,
}

/// Education sequence response
#[derive(Debug, Serialize)]
pub struct EducationListResponse {
    pub education: Vec<Entry<Education>>,
}

fn experience_response(account: &Account) -> ExperienceListResponse {
    ExperienceListResponse {
        experience: account.profile().experience.entries().to_vec(),
    }
}

fn education_response(account: &Account) -> EducationListResponse {
    EducationListResponse {
        education: account.profile().education.entries().to_vec(),
    }
}

fn parse_entry_id(raw: &str) -> Result<EntryId, ApiError> {
    EntryId::parse(raw).map_err(|_| ApiError::bad_request("Invalid entry id"))
}

/// Get the current account's profile
///
/// GET /profile
pub async fn get_profile(
    RequireAccount(account): RequireAccount,
) -> Result<Json<ProfileResponse>, ApiError> {
    Ok(Json(ProfileResponse::from_account(&account)))
}

/// Apply a sparse patch to the profile
///
/// PUT /profile
///
/// Only keys present in the body are written; absent keys keep their
/// values. Explicit empty strings and empty arrays clear fields.
pub async fn update_profile(
    RequireAccount(account): RequireAccount,
    State(state): State<AppState>,
    Json(patch): Json<ProfilePatch>,
) -> Result<Json<ProfileResponse>, ApiError> {
    let updated = state
        .account_service
        .update_profile(account.id(), patch)
        .await?;

    Ok(Json(ProfileResponse::from_account(&updated)))
}

/// Append an experience entry
///
/// POST /profile/experience
pub async fn add_experience(
    RequireAccount(account): RequireAccount,
    State(state): State<AppState>,
    Json(entry): Json<Experience>,
) -> Result<(StatusCode, Json<ExperienceListResponse>), ApiError> {
    let updated = state
        .account_service
        .add_experience(account.id(), entry)
        .await?;

    Ok((StatusCode::CREATED, Json(experience_response(&updated))))
}

/// Update an experience entry by identity
///
/// PUT /profile/experience/{id}
///
/// 404 when the identity does not exist.
pub async fn update_experience(
    RequireAccount(account): RequireAccount,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<ExperiencePatch>,
) -> Result<Json<ExperienceListResponse>, ApiError> {
    let entry_id = parse_entry_id(&id)?;

    let updated = state
        .account_service
        .update_experience(account.id(), &entry_id, patch)
        .await?;

    Ok(Json(experience_response(&updated)))
}

/// Remove an experience entry by identity
///
/// DELETE /profile/experience/{id}
///
/// Removing an identity that does not exist succeeds and returns the
/// unchanged sequence.
pub async fn remove_experience(
    RequireAccount(account): RequireAccount,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ExperienceListResponse>, ApiError> {
    let entry_id = parse_entry_id(&id)?;

    let updated = state
        .account_service
        .remove_experience(account.id(), &entry_id)
        .await?;

    Ok(Json(experience_response(&updated)))
}

/// Append an education entry
///
/// POST /profile/education
pub async fn add_education(
    RequireAccount(account): RequireAccount,
    State(state): State<AppState>,
    Json(entry): Json<Education>,
) -> Result<(StatusCode, Json<EducationListResponse>), ApiError> {
    let updated = state
        .account_service
        .add_education(account.id(), entry)
        .await?;

    Ok((StatusCode::CREATED, Json(education_response(&updated))))
}

/// Update an education entry by identity
///
/// PUT /profile/education/{id}
pub async fn update_education(
    RequireAccount(account): RequireAccount,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<EducationPatch>,
) -> Result<Json<EducationListResponse>, ApiError> {
    let entry_id = parse_entry_id(&id)?;

    let updated = state
        .account_service
        .update_education(account.id(), &entry_id, patch)
        .await?;

    Ok(Json(education_response(&updated)))
}

/// Remove an education entry by identity
///
/// DELETE /profile/education/{id}
pub async fn remove_education(
    RequireAccount(account): RequireAccount,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<EducationListResponse>, ApiError> {
    let entry_id = parse_entry_id(&id)?;

    let updated = state
        .account_service
        .remove_education(account.id(), &entry_id)
        .await?;

    Ok(Json(education_response(&updated)))
}
