//! Résumé records as stored in Postgres and served over the API.
//!
//! Each entity has a `*Row` type (persisted, with the surrogate `id`) and a
//! `New*` insert shape. Tables are independent; there are no foreign keys.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct ProfileRow {
    pub id: i32,
    pub name: String,
    pub title: String,
    pub bio: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub linkedin: Option<String>,
    pub github: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct SkillRow {
    pub id: i32,
    pub category: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct ExperienceRow {
    pub id: i32,
    pub company: String,
    pub role: String,
    /// Free-text range, e.g. "Feb 2025 – Present".
    pub duration: String,
    pub description: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRow {
    pub id: i32,
    pub title: String,
    pub tech_stack: Vec<String>,
    pub description: Vec<String>,
    pub link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct EducationRow {
    pub id: i32,
    pub institution: String,
    pub degree: String,
    /// A year range or a status such as "Pursuing".
    pub year: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewProfile {
    pub name: String,
    pub title: String,
    pub bio: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub linkedin: Option<String>,
    pub github: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewSkill {
    pub category: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewExperience {
    pub company: String,
    pub role: String,
    pub duration: String,
    pub description: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProject {
    pub title: String,
    pub tech_stack: Vec<String>,
    pub description: Vec<String>,
    pub link: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewEducation {
    pub institution: String,
    pub degree: String,
    pub year: String,
}

impl NewProfile {
    pub fn into_row(self, id: i32) -> ProfileRow {
        ProfileRow {
            id,
            name: self.name,
            title: self.title,
            bio: self.bio,
            email: self.email,
            phone: self.phone,
            location: self.location,
            linkedin: self.linkedin,
            github: self.github,
        }
    }
}

impl NewSkill {
    pub fn into_row(self, id: i32) -> SkillRow {
        SkillRow {
            id,
            category: self.category,
            items: self.items,
        }
    }
}

impl NewExperience {
    pub fn into_row(self, id: i32) -> ExperienceRow {
        ExperienceRow {
            id,
            company: self.company,
            role: self.role,
            duration: self.duration,
            description: self.description,
        }
    }
}

impl NewProject {
    pub fn into_row(self, id: i32) -> ProjectRow {
        ProjectRow {
            id,
            title: self.title,
            tech_stack: self.tech_stack,
            description: self.description,
            link: self.link,
        }
    }
}

impl NewEducation {
    pub fn into_row(self, id: i32) -> EducationRow {
        EducationRow {
            id,
            institution: self.institution,
            degree: self.degree,
            year: self.year,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_project_serializes_tech_stack_in_camel_case() {
        let project = NewProject {
            title: "Pipeline".to_string(),
            tech_stack: vec!["Rust".to_string()],
            description: vec![],
            link: None,
        }
        .into_row(7);

        let value = serde_json::to_value(&project).unwrap();
        assert_eq!(value["techStack"], json!(["Rust"]));
        assert!(value.get("tech_stack").is_none());
        assert_eq!(value["id"], json!(7));
        assert_eq!(value["link"], json!(null));
    }

    #[test]
    fn test_profile_keeps_optional_links_as_null() {
        let profile = NewProfile {
            name: "Jane".to_string(),
            title: "Engineer".to_string(),
            bio: "Bio".to_string(),
            email: "jane@example.com".to_string(),
            phone: "123".to_string(),
            location: "Somewhere".to_string(),
            linkedin: None,
            github: Some("https://github.com".to_string()),
        }
        .into_row(1);

        let value = serde_json::to_value(&profile).unwrap();
        assert_eq!(value["linkedin"], json!(null));
        assert_eq!(value["github"], json!("https://github.com"));
    }
}
