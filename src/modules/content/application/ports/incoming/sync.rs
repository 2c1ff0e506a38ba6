use async_trait::async_trait;

use crate::content::domain::entities::{
    Certification, Education, Experience, Extracurricular, PersonalInfo, PortfolioData, Project,
    SkillCategory, WebsiteSettings,
};

/// Where the fetched aggregate actually came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSource {
    /// Assembled from the remote store.
    Remote,
    /// Remote failed; a previously cached local blob was used.
    Fallback,
    /// Remote failed and no local blob existed; in-memory seed, not persisted.
    Seed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FetchedPortfolio {
    pub data: PortfolioData,
    pub source: DataSource,
}

/// Outcome of a structured-data mutation. Remote store failures never
/// propagate as errors from these operations; they degrade to the local
/// fallback and report `SavedLocally`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The remote store accepted the write.
    Synced,
    /// The remote store was unreachable; the change landed in the local
    /// fallback blob only.
    SavedLocally,
}

impl SaveOutcome {
    pub fn is_synced(self) -> bool {
        matches!(self, SaveOutcome::Synced)
    }
}

/// Incoming port for the persistence layer: fetch the whole aggregate once
/// per session, mutate one section at a time, reset everything to seed.
#[async_trait]
pub trait PortfolioSync: Send + Sync {
    /// Seeds an empty remote store, then assembles the full aggregate.
    /// Never fails: degraded sources are reported through `DataSource`.
    async fn fetch_all(&self) -> FetchedPortfolio;

    async fn update_personal_info(&self, info: PersonalInfo) -> SaveOutcome;

    async fn update_skills(&self, skills: Vec<SkillCategory>) -> SaveOutcome;

    async fn update_experience(&self, experience: Vec<Experience>) -> SaveOutcome;

    async fn update_education(&self, education: Vec<Education>) -> SaveOutcome;

    async fn update_certifications(&self, certifications: Vec<Certification>) -> SaveOutcome;

    async fn update_extracurricular(&self, entries: Vec<Extracurricular>) -> SaveOutcome;

    async fn update_projects(&self, projects: Vec<Project>) -> SaveOutcome;

    async fn update_website_settings(&self, settings: WebsiteSettings) -> SaveOutcome;

    /// Rewrites every collection back to seed values. The local fallback
    /// blob is set to the seed even when remote writes fail partway.
    async fn reset_to_defaults(&self) -> SaveOutcome;
}
