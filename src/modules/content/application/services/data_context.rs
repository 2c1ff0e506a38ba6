use std::sync::Arc;

use tokio::sync::RwLock;

use crate::content::application::ports::incoming::sync::{DataSource, PortfolioSync, SaveOutcome};
use crate::content::application::ports::outgoing::notifier::{Notification, Notifier};
use crate::content::domain::entities::{
    Certification, Education, Experience, Extracurricular, PersonalInfo, PortfolioData, Project,
    SkillCategory, WebsiteSettings,
};
use crate::content::domain::seed::seed_data;
use crate::content::domain::validation::{
    validate_certifications, validate_education, validate_experience, validate_extracurricular,
    validate_personal_info, validate_projects, validate_skills, ValidationError,
};
use crate::theme::bridge::ThemeBridge;

/// Lifecycle of the context. `Failed` is terminal: recovery is a fresh
/// context (the reload path), not an in-app retry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Uninitialized,
    Loading,
    Ready,
    Failed(String),
}

const SYNC_FAILED_TITLE: &str = "Update failed";
const SYNC_FAILED_MESSAGE: &str =
    "Changes saved locally only. Will sync when connection is restored.";

/// Process-wide holder of the portfolio aggregate.
///
/// Constructed once at application start and passed down explicitly; the
/// in-memory state is mutated only through the operations below and read
/// through [`snapshot`](DataContext::snapshot). Mutators apply optimistically:
/// the snapshot reflects a change before its persistence resolves, and is
/// never rolled back when persistence fails.
pub struct DataContext {
    sync: Arc<dyn PortfolioSync>,
    notifier: Arc<dyn Notifier>,
    theme: ThemeBridge,
    state: RwLock<LoadState>,
    data: RwLock<PortfolioData>,
}

impl DataContext {
    pub fn new(sync: Arc<dyn PortfolioSync>, notifier: Arc<dyn Notifier>, theme: ThemeBridge) -> Self {
        Self {
            sync,
            notifier,
            theme,
            state: RwLock::new(LoadState::Uninitialized),
            data: RwLock::new(seed_data()),
        }
    }

    pub async fn load_state(&self) -> LoadState {
        self.state.read().await.clone()
    }

    /// Current aggregate. Possibly stale relative to the remote store, but
    /// always internally consistent.
    pub async fn snapshot(&self) -> PortfolioData {
        self.data.read().await.clone()
    }

    /// Initial fetch. Runs once per context; later calls are no-ops.
    pub async fn load(&self) {
        {
            let mut state = self.state.write().await;
            if *state != LoadState::Uninitialized {
                return;
            }
            *state = LoadState::Loading;
        }

        let fetched = self.sync.fetch_all().await;
        let settings = fetched.data.website_settings.clone();
        *self.data.write().await = fetched.data;
        self.theme.apply(&settings);

        let mut state = self.state.write().await;
        match fetched.source {
            DataSource::Remote => *state = LoadState::Ready,
            DataSource::Fallback => {
                tracing::warn!("Serving locally cached portfolio data");
                *state = LoadState::Ready;
            }
            DataSource::Seed => {
                *state = LoadState::Failed("Failed to load data. Using default values.".into());
            }
        }
    }

    fn notify_outcome(&self, outcome: SaveOutcome, title: &str, message: &str) {
        match outcome {
            SaveOutcome::Synced => self.notifier.notify(Notification::info(title, message)),
            SaveOutcome::SavedLocally => self
                .notifier
                .notify(Notification::warning(SYNC_FAILED_TITLE, SYNC_FAILED_MESSAGE)),
        }
    }

    pub async fn update_personal_info(
        &self,
        info: PersonalInfo,
    ) -> Result<SaveOutcome, ValidationError> {
        validate_personal_info(&info)?;
        self.data.write().await.personal_info = info.clone();
        let outcome = self.sync.update_personal_info(info).await;
        self.notify_outcome(
            outcome,
            "Personal information updated",
            "Your changes have been saved",
        );
        Ok(outcome)
    }

    pub async fn update_skills(
        &self,
        skills: Vec<SkillCategory>,
    ) -> Result<SaveOutcome, ValidationError> {
        validate_skills(&skills)?;
        self.data.write().await.skills = skills.clone();
        let outcome = self.sync.update_skills(skills).await;
        self.notify_outcome(outcome, "Skills updated", "Your skills have been updated");
        Ok(outcome)
    }

    pub async fn update_experience(
        &self,
        experience: Vec<Experience>,
    ) -> Result<SaveOutcome, ValidationError> {
        validate_experience(&experience)?;
        self.data.write().await.experience = experience.clone();
        let outcome = self.sync.update_experience(experience).await;
        self.notify_outcome(
            outcome,
            "Experience updated",
            "Your experience has been updated",
        );
        Ok(outcome)
    }

    pub async fn update_education(
        &self,
        education: Vec<Education>,
    ) -> Result<SaveOutcome, ValidationError> {
        validate_education(&education)?;
        self.data.write().await.education = education.clone();
        let outcome = self.sync.update_education(education).await;
        self.notify_outcome(
            outcome,
            "Education updated",
            "Your education has been updated",
        );
        Ok(outcome)
    }

    pub async fn update_certifications(
        &self,
        certifications: Vec<Certification>,
    ) -> Result<SaveOutcome, ValidationError> {
        validate_certifications(&certifications)?;
        self.data.write().await.certifications = certifications.clone();
        let outcome = self.sync.update_certifications(certifications).await;
        self.notify_outcome(
            outcome,
            "Certifications updated",
            "Your certifications have been updated",
        );
        Ok(outcome)
    }

    pub async fn update_extracurricular(
        &self,
        entries: Vec<Extracurricular>,
    ) -> Result<SaveOutcome, ValidationError> {
        validate_extracurricular(&entries)?;
        self.data.write().await.extracurricular = entries.clone();
        let outcome = self.sync.update_extracurricular(entries).await;
        self.notify_outcome(
            outcome,
            "Extracurricular activities updated",
            "Your extracurricular activities have been updated",
        );
        Ok(outcome)
    }

    pub async fn update_projects(
        &self,
        projects: Vec<Project>,
    ) -> Result<SaveOutcome, ValidationError> {
        validate_projects(&projects)?;
        self.data.write().await.projects = projects.clone();
        let outcome = self.sync.update_projects(projects).await;
        self.notify_outcome(outcome, "Projects updated", "Your projects have been updated");
        Ok(outcome)
    }

    /// Settings changes additionally re-run the theme projection so the page
    /// restyles without a reload.
    pub async fn update_website_settings(&self, settings: WebsiteSettings) -> SaveOutcome {
        self.data.write().await.website_settings = settings.clone();
        self.theme.apply(&settings);
        let outcome = self.sync.update_website_settings(settings).await;
        self.notify_outcome(
            outcome,
            "Website settings updated",
            "Your website settings have been updated",
        );
        outcome
    }

    /// Destroys and recreates the aggregate from seed values.
    pub async fn reset(&self) -> SaveOutcome {
        let outcome = self.sync.reset_to_defaults().await;

        let seed = seed_data();
        let settings = seed.website_settings.clone();
        *self.data.write().await = seed;
        self.theme.apply(&settings);

        match outcome {
            SaveOutcome::Synced => self.notifier.notify(Notification::info(
                "Data reset",
                "All data has been reset to default values",
            )),
            SaveOutcome::SavedLocally => self.notifier.notify(Notification::warning(
                "Reset partially failed",
                "Local data reset, but there was an issue with the remote reset.",
            )),
        }
        outcome
    }
}
