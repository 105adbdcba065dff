//! Startup seeding of résumé content.
//!
//! The only gate is whether a profile row exists. Other tables are not
//! re-checked, and the inserts are not wrapped in a transaction: a run that
//! dies after the profile insert leaves the rest unseeded for good.

mod resume;

use tracing::info;

use crate::errors::AppError;
use crate::storage::Storage;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    AlreadySeeded,
    Seeded(SeedCounts),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedCounts {
    pub profiles: usize,
    pub skills: usize,
    pub experience: usize,
    pub projects: usize,
    pub education: usize,
}

impl SeedCounts {
    pub fn total(&self) -> usize {
        self.profiles + self.skills + self.experience + self.projects + self.education
    }
}

/// Inserts the fixed résumé if no profile exists yet.
///
/// Must run once, before the server accepts requests. Not safe to run
/// concurrently against the same store.
pub async fn seed_database(store: &dyn Storage) -> Result<SeedOutcome, AppError> {
    if store.get_profile().await?.is_some() {
        info!("Profile already present, skipping seed");
        return Ok(SeedOutcome::AlreadySeeded);
    }

    info!("Seeding database with resume data...");
    let mut counts = SeedCounts::default();

    store.create_profile(resume::profile()).await?;
    counts.profiles += 1;

    for skill in resume::skills() {
        store.create_skill(skill).await?;
        counts.skills += 1;
    }
    for experience in resume::experience() {
        store.create_experience(experience).await?;
        counts.experience += 1;
    }
    for project in resume::projects() {
        store.create_project(project).await?;
        counts.projects += 1;
    }
    for education in resume::education() {
        store.create_education(education).await?;
        counts.education += 1;
    }

    info!(rows = counts.total(), "Database seeded successfully!");
    Ok(SeedOutcome::Seeded(counts))
}
