//! In-process gateway used when no database is configured, and in tests.
//!
//! Ids are assigned per table starting at 1 and reads return rows in
//! insertion order, the same as `SERIAL` keys read back by id.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::errors::AppError;
use crate::models::resume::{
    EducationRow, ExperienceRow, NewEducation, NewExperience, NewProfile, NewProject, NewSkill,
    ProfileRow, ProjectRow, SkillRow,
};
use crate::storage::Storage;

#[derive(Default)]
struct Tables {
    profile: Vec<ProfileRow>,
    skills: Vec<SkillRow>,
    experience: Vec<ExperienceRow>,
    projects: Vec<ProjectRow>,
    education: Vec<EducationRow>,
}

#[derive(Default)]
pub struct MemoryStorage {
    tables: RwLock<Tables>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

// No deletes, so the next id is always one past the row count.
fn next_id<T>(rows: &[T]) -> Result<i32, AppError> {
    i32::try_from(rows.len() + 1)
        .map_err(|_| AppError::Internal(anyhow::anyhow!("table id space exhausted")))
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn get_profile(&self) -> Result<Option<ProfileRow>, AppError> {
        Ok(self.tables.read().await.profile.first().cloned())
    }

    async fn get_skills(&self) -> Result<Vec<SkillRow>, AppError> {
        Ok(self.tables.read().await.skills.clone())
    }

    async fn get_experience(&self) -> Result<Vec<ExperienceRow>, AppError> {
        Ok(self.tables.read().await.experience.clone())
    }

    async fn get_projects(&self) -> Result<Vec<ProjectRow>, AppError> {
        Ok(self.tables.read().await.projects.clone())
    }

    async fn get_education(&self) -> Result<Vec<EducationRow>, AppError> {
        Ok(self.tables.read().await.education.clone())
    }

    async fn create_profile(&self, profile: NewProfile) -> Result<ProfileRow, AppError> {
        let mut tables = self.tables.write().await;
        let row = profile.into_row(next_id(&tables.profile)?);
        tables.profile.push(row.clone());
        Ok(row)
    }

    async fn create_skill(&self, skill: NewSkill) -> Result<SkillRow, AppError> {
        let mut tables = self.tables.write().await;
        let row = skill.into_row(next_id(&tables.skills)?);
        tables.skills.push(row.clone());
        Ok(row)
    }

    async fn create_experience(
        &self,
        experience: NewExperience,
    ) -> Result<ExperienceRow, AppError> {
        let mut tables = self.tables.write().await;
        let row = experience.into_row(next_id(&tables.experience)?);
        tables.experience.push(row.clone());
        Ok(row)
    }

    async fn create_project(&self, project: NewProject) -> Result<ProjectRow, AppError> {
        let mut tables = self.tables.write().await;
        let row = project.into_row(next_id(&tables.projects)?);
        tables.projects.push(row.clone());
        Ok(row)
    }

    async fn create_education(&self, education: NewEducation) -> Result<EducationRow, AppError> {
        let mut tables = self.tables.write().await;
        let row = education.into_row(next_id(&tables.education)?);
        tables.education.push(row.clone());
        Ok(row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skill(category: &str) -> NewSkill {
        NewSkill {
            category: category.to_string(),
            items: vec!["Rust".to_string()],
        }
    }

    fn profile(name: &str) -> NewProfile {
        NewProfile {
            name: name.to_string(),
            title: "Engineer".to_string(),
            bio: "Bio".to_string(),
            email: "jane@example.com".to_string(),
            phone: "123".to_string(),
            location: "Somewhere".to_string(),
            linkedin: None,
            github: None,
        }
    }

    #[tokio::test]
    async fn test_empty_store_reads_as_empty() {
        let store = MemoryStorage::new();
        assert!(store.get_profile().await.unwrap().is_none());
        assert!(store.get_skills().await.unwrap().is_empty());
        assert!(store.get_experience().await.unwrap().is_empty());
        assert!(store.get_projects().await.unwrap().is_empty());
        assert!(store.get_education().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_assigns_sequential_ids_per_table() {
        let store = MemoryStorage::new();
        let a = store.create_skill(skill("Languages")).await.unwrap();
        let b = store.create_skill(skill("Databases")).await.unwrap();
        assert_eq!((a.id, b.id), (1, 2));

        let edu = store
            .create_education(NewEducation {
                institution: "Uni".to_string(),
                degree: "BSc".to_string(),
                year: "Pursuing".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(edu.id, 1);
    }

    #[tokio::test]
    async fn test_reads_preserve_insertion_order() {
        let store = MemoryStorage::new();
        for category in ["Languages", "Databases", "Soft Skills"] {
            store.create_skill(skill(category)).await.unwrap();
        }
        let categories: Vec<_> = store
            .get_skills()
            .await
            .unwrap()
            .into_iter()
            .map(|s| s.category)
            .collect();
        assert_eq!(categories, ["Languages", "Databases", "Soft Skills"]);
    }

    #[tokio::test]
    async fn test_second_profile_is_stored_but_first_wins() {
        let store = MemoryStorage::new();
        store.create_profile(profile("First")).await.unwrap();
        let second = store.create_profile(profile("Second")).await.unwrap();
        assert_eq!(second.id, 2);
        assert_eq!(store.get_profile().await.unwrap().unwrap().name, "First");
    }

    #[tokio::test]
    async fn test_create_returns_persisted_row() {
        let store = MemoryStorage::new();
        let row = store
            .create_project(NewProject {
                title: "Pipeline".to_string(),
                tech_stack: vec!["Python".to_string(), "Flask".to_string()],
                description: vec!["Built it.".to_string()],
                link: Some("https://github.com".to_string()),
            })
            .await
            .unwrap();
        assert_eq!(store.get_projects().await.unwrap(), vec![row]);
    }
}
