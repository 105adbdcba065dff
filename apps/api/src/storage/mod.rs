//! Persistence gateway for résumé records.
//!
//! The gateway is the only component that touches storage. It offers a typed
//! read and a typed create per entity and nothing else: rows are never updated
//! or deleted through the API. Errors from the backend propagate unchanged;
//! there is no retry and no transaction spanning several entities.
//!
//! `AppState` holds an `Arc<dyn Storage>`, chosen at startup from config.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;

use crate::errors::AppError;
use crate::models::resume::{
    EducationRow, ExperienceRow, NewEducation, NewExperience, NewProfile, NewProject, NewSkill,
    ProfileRow, ProjectRow, SkillRow,
};

pub use memory::MemoryStorage;
pub use postgres::PgStorage;

#[async_trait]
pub trait Storage: Send + Sync {
    /// First profile row in storage order, if any. Uniqueness is not enforced.
    async fn get_profile(&self) -> Result<Option<ProfileRow>, AppError>;
    async fn get_skills(&self) -> Result<Vec<SkillRow>, AppError>;
    async fn get_experience(&self) -> Result<Vec<ExperienceRow>, AppError>;
    async fn get_projects(&self) -> Result<Vec<ProjectRow>, AppError>;
    async fn get_education(&self) -> Result<Vec<EducationRow>, AppError>;

    async fn create_profile(&self, profile: NewProfile) -> Result<ProfileRow, AppError>;
    async fn create_skill(&self, skill: NewSkill) -> Result<SkillRow, AppError>;
    async fn create_experience(&self, experience: NewExperience)
        -> Result<ExperienceRow, AppError>;
    async fn create_project(&self, project: NewProject) -> Result<ProjectRow, AppError>;
    async fn create_education(&self, education: NewEducation) -> Result<EducationRow, AppError>;
}
