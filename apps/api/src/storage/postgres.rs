use async_trait::async_trait;
use sqlx::PgPool;

use crate::errors::AppError;
use crate::models::resume::{
    EducationRow, ExperienceRow, NewEducation, NewExperience, NewProfile, NewProject, NewSkill,
    ProfileRow, ProjectRow, SkillRow,
};
use crate::storage::Storage;

/// PostgreSQL-backed gateway. Reads return rows in `id` order, which matches
/// insertion order for `SERIAL` keys.
#[derive(Clone)]
pub struct PgStorage {
    pool: PgPool,
}

impl PgStorage {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Storage for PgStorage {
    async fn get_profile(&self) -> Result<Option<ProfileRow>, AppError> {
        Ok(
            sqlx::query_as::<_, ProfileRow>("SELECT * FROM profile ORDER BY id LIMIT 1")
                .fetch_optional(&self.pool)
                .await?,
        )
    }

    async fn get_skills(&self) -> Result<Vec<SkillRow>, AppError> {
        Ok(sqlx::query_as::<_, SkillRow>("SELECT * FROM skills ORDER BY id")
            .fetch_all(&self.pool)
            .await?)
    }

    async fn get_experience(&self) -> Result<Vec<ExperienceRow>, AppError> {
        Ok(
            sqlx::query_as::<_, ExperienceRow>("SELECT * FROM experience ORDER BY id")
                .fetch_all(&self.pool)
                .await?,
        )
    }

    async fn get_projects(&self) -> Result<Vec<ProjectRow>, AppError> {
        Ok(sqlx::query_as::<_, ProjectRow>("SELECT * FROM projects ORDER BY id")
            .fetch_all(&self.pool)
            .await?)
    }

    async fn get_education(&self) -> Result<Vec<EducationRow>, AppError> {
        Ok(
            sqlx::query_as::<_, EducationRow>("SELECT * FROM education ORDER BY id")
                .fetch_all(&self.pool)
                .await?,
        )
    }

    async fn create_profile(&self, profile: NewProfile) -> Result<ProfileRow, AppError> {
        Ok(sqlx::query_as::<_, ProfileRow>(
            r#"
            INSERT INTO profile (name, title, bio, email, phone, location, linkedin, github)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(profile.name)
        .bind(profile.title)
        .bind(profile.bio)
        .bind(profile.email)
        .bind(profile.phone)
        .bind(profile.location)
        .bind(profile.linkedin)
        .bind(profile.github)
        .fetch_one(&self.pool)
        .await?)
    }

    async fn create_skill(&self, skill: NewSkill) -> Result<SkillRow, AppError> {
        Ok(sqlx::query_as::<_, SkillRow>(
            "INSERT INTO skills (category, items) VALUES ($1, $2) RETURNING *",
        )
        .bind(skill.category)
        .bind(skill.items)
        .fetch_one(&self.pool)
        .await?)
    }

    async fn create_experience(
        &self,
        experience: NewExperience,
    ) -> Result<ExperienceRow, AppError> {
        Ok(sqlx::query_as::<_, ExperienceRow>(
            r#"
            INSERT INTO experience (company, role, duration, description)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(experience.company)
        .bind(experience.role)
        .bind(experience.duration)
        .bind(experience.description)
        .fetch_one(&self.pool)
        .await?)
    }

    async fn create_project(&self, project: NewProject) -> Result<ProjectRow, AppError> {
        Ok(sqlx::query_as::<_, ProjectRow>(
            r#"
            INSERT INTO projects (title, tech_stack, description, link)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(project.title)
        .bind(project.tech_stack)
        .bind(project.description)
        .bind(project.link)
        .fetch_one(&self.pool)
        .await?)
    }

    async fn create_education(&self, education: NewEducation) -> Result<EducationRow, AppError> {
        Ok(sqlx::query_as::<_, EducationRow>(
            "INSERT INTO education (institution, degree, year) VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(education.institution)
        .bind(education.degree)
        .bind(education.year)
        .fetch_one(&self.pool)
        .await?)
    }
}
