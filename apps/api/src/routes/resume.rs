//! Read-only résumé endpoints. Each one is a single gateway read.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::errors::AppError;
use crate::models::resume::{EducationRow, ExperienceRow, ProjectRow, SkillRow};
use crate::state::AppState;

/// GET /api/profile
/// Responds with `{}` rather than 404 before the store is seeded.
pub async fn handle_get_profile(State(state): State<AppState>) -> Result<Response, AppError> {
    let response = match state.store.get_profile().await? {
        Some(profile) => Json(profile).into_response(),
        None => Json(json!({})).into_response(),
    };
    Ok(response)
}

/// GET /api/skills
pub async fn handle_list_skills(
    State(state): State<AppState>,
) -> Result<Json<Vec<SkillRow>>, AppError> {
    Ok(Json(state.store.get_skills().await?))
}

/// GET /api/experience
pub async fn handle_list_experience(
    State(state): State<AppState>,
) -> Result<Json<Vec<ExperienceRow>>, AppError> {
    Ok(Json(state.store.get_experience().await?))
}

/// GET /api/projects
pub async fn handle_list_projects(
    State(state): State<AppState>,
) -> Result<Json<Vec<ProjectRow>>, AppError> {
    Ok(Json(state.store.get_projects().await?))
}

/// GET /api/education
pub async fn handle_list_education(
    State(state): State<AppState>,
) -> Result<Json<Vec<EducationRow>>, AppError> {
    Ok(Json(state.store.get_education().await?))
}
