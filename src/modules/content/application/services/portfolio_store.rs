use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tokio::sync::Mutex;

use crate::content::application::ports::incoming::sync::{
    DataSource, FetchedPortfolio, PortfolioSync, SaveOutcome,
};
use crate::content::application::ports::outgoing::document_store::{
    DocumentStore, DocumentStoreError,
};
use crate::content::application::ports::outgoing::fallback_store::FallbackStore;
use crate::content::domain::entities::{
    Certification, Education, Experience, Extracurricular, PersonalInfo, PortfolioData, Project,
    SkillCategory, WebsiteSettings,
};
use crate::content::domain::seed::seed_data;

/// Remote collection names, matching the deployed document layout.
pub mod collections {
    pub const PERSONAL_INFO: &str = "personalInfo";
    pub const SKILLS: &str = "skills";
    pub const EXPERIENCE: &str = "experience";
    pub const EDUCATION: &str = "education";
    pub const CERTIFICATIONS: &str = "certifications";
    pub const EXTRACURRICULAR: &str = "extracurricular";
    pub const PROJECTS: &str = "projects";
    pub const WEBSITE_SETTINGS: &str = "websiteSettings";
}

/// Key under which singleton documents (personal info, settings) are stored.
pub const SINGLETON_KEY: &str = "main";

const DEFAULT_REMOTE_TIMEOUT: Duration = Duration::from_secs(10);

fn encode<T: Serialize>(value: &T) -> Result<Value, DocumentStoreError> {
    serde_json::to_value(value).map_err(|e| DocumentStoreError::Decode(e.to_string()))
}

fn decode<T: DeserializeOwned>(value: Value) -> Result<T, DocumentStoreError> {
    serde_json::from_value(value).map_err(|e| DocumentStoreError::Decode(e.to_string()))
}

/// Persistence adapter over a remote document store with a local fallback.
///
/// Holds the last known aggregate so that a failed remote write can persist
/// the full dataset (with the mutated section replaced) into the fallback
/// blob. Remote failures never escape the mutating operations; they resolve
/// to [`SaveOutcome::SavedLocally`].
pub struct PortfolioStore<D, F>
where
    D: DocumentStore,
    F: FallbackStore,
{
    docs: D,
    fallback: F,
    cache: Mutex<PortfolioData>,
    remote_timeout: Duration,
}

impl<D, F> PortfolioStore<D, F>
where
    D: DocumentStore,
    F: FallbackStore,
{
    pub fn new(docs: D, fallback: F) -> Self {
        Self {
            docs,
            fallback,
            cache: Mutex::new(seed_data()),
            remote_timeout: DEFAULT_REMOTE_TIMEOUT,
        }
    }

    /// Caps every remote call so a hung store cannot leave a save in flight
    /// forever.
    pub fn with_remote_timeout(mut self, timeout: Duration) -> Self {
        self.remote_timeout = timeout;
        self
    }

    async fn bounded<T>(
        &self,
        fut: impl Future<Output = Result<T, DocumentStoreError>>,
    ) -> Result<T, DocumentStoreError> {
        match tokio::time::timeout(self.remote_timeout, fut).await {
            Ok(result) => result,
            Err(_) => Err(DocumentStoreError::Timeout),
        }
    }

    /// Writes the full seed dataset when the store has never been populated.
    /// Keyed on the personal-info singleton; each write is create-or-replace,
    /// so racing initializers converge on the same seeded state.
    async fn seed_remote_if_empty(&self) -> Result<(), DocumentStoreError> {
        let existing = self
            .bounded(self.docs.get_document(collections::PERSONAL_INFO, SINGLETON_KEY))
            .await?;
        if existing.is_some() {
            return Ok(());
        }

        let seed = seed_data();
        self.bounded(self.docs.set_document(
            collections::PERSONAL_INFO,
            SINGLETON_KEY,
            encode(&seed.personal_info)?,
            false,
        ))
        .await?;

        for category in &seed.skills {
            self.bounded(self.docs.set_document(
                collections::SKILLS,
                &category.category,
                encode(category)?,
                false,
            ))
            .await?;
        }
        for exp in &seed.experience {
            self.bounded(self.docs.set_document(
                collections::EXPERIENCE,
                &exp.company,
                encode(exp)?,
                false,
            ))
            .await?;
        }
        for edu in &seed.education {
            self.bounded(self.docs.set_document(
                collections::EDUCATION,
                &edu.degree,
                encode(edu)?,
                false,
            ))
            .await?;
        }
        for cert in &seed.certifications {
            self.bounded(self.docs.set_document(
                collections::CERTIFICATIONS,
                &cert.name,
                encode(cert)?,
                false,
            ))
            .await?;
        }
        for extra in &seed.extracurricular {
            self.bounded(self.docs.set_document(
                collections::EXTRACURRICULAR,
                &extra.role,
                encode(extra)?,
                false,
            ))
            .await?;
        }
        for project in &seed.projects {
            self.bounded(self.docs.set_document(
                collections::PROJECTS,
                &project.title,
                encode(project)?,
                false,
            ))
            .await?;
        }
        self.bounded(self.docs.set_document(
            collections::WEBSITE_SETTINGS,
            SINGLETON_KEY,
            encode(&seed.website_settings)?,
            false,
        ))
        .await?;

        tracing::info!("Remote store seeded with default portfolio data");
        Ok(())
    }

    async fn get_singleton<T: DeserializeOwned>(
        &self,
        collection: &str,
    ) -> Result<T, DocumentStoreError> {
        let doc = self
            .bounded(self.docs.get_document(collection, SINGLETON_KEY))
            .await?
            .ok_or_else(|| {
                DocumentStoreError::Unavailable(format!(
                    "{collection}/{SINGLETON_KEY} missing after seeding"
                ))
            })?;
        decode(doc)
    }

    async fn list_collection<T: DeserializeOwned>(
        &self,
        collection: &str,
    ) -> Result<Vec<T>, DocumentStoreError> {
        let docs = self.bounded(self.docs.list_documents(collection)).await?;
        let mut items = Vec::with_capacity(docs.len());
        for (key, value) in docs {
            match decode(value) {
                Ok(item) => items.push(item),
                Err(err) => {
                    tracing::warn!(%err, collection, key, "Skipping undecodable document")
                }
            }
        }
        Ok(items)
    }

    async fn fetch_remote(&self) -> Result<PortfolioData, DocumentStoreError> {
        self.seed_remote_if_empty().await?;

        Ok(PortfolioData {
            personal_info: self.get_singleton(collections::PERSONAL_INFO).await?,
            skills: self.list_collection(collections::SKILLS).await?,
            experience: self.list_collection(collections::EXPERIENCE).await?,
            education: self.list_collection(collections::EDUCATION).await?,
            certifications: self.list_collection(collections::CERTIFICATIONS).await?,
            extracurricular: self.list_collection(collections::EXTRACURRICULAR).await?,
            projects: self.list_collection(collections::PROJECTS).await?,
            website_settings: self.get_singleton(collections::WEBSITE_SETTINGS).await?,
        })
    }

    /// Merge-writes every submitted item by natural key, then blanks remote
    /// documents whose key was dropped from the submission. Removed entries
    /// are overwritten with a sentinel shape, never deleted, so they stay
    /// enumerable.
    async fn sync_collection<T: Serialize>(
        &self,
        collection: &str,
        items: &[T],
        key_of: fn(&T) -> &str,
        removal_sentinel: fn() -> Value,
    ) -> Result<(), DocumentStoreError> {
        let existing = self.bounded(self.docs.list_documents(collection)).await?;

        for item in items {
            let value = encode(item)?;
            self.bounded(self.docs.set_document(collection, key_of(item), value, true))
                .await?;
        }

        let submitted: Vec<&str> = items.iter().map(key_of).collect();
        for (key, _) in &existing {
            if !submitted.contains(&key.as_str()) {
                self.bounded(self.docs.update_fields(collection, key, removal_sentinel()))
                    .await?;
            }
        }
        Ok(())
    }

    /// Shared tail of every mutator: the in-memory aggregate is updated in
    /// both branches (local state always wins visually); a remote failure
    /// additionally lands the whole aggregate in the fallback blob.
    async fn finish_update<A>(
        &self,
        section: &'static str,
        result: Result<(), DocumentStoreError>,
        apply: A,
    ) -> SaveOutcome
    where
        A: FnOnce(&mut PortfolioData),
    {
        let snapshot = {
            let mut cache = self.cache.lock().await;
            apply(&mut cache);
            cache.clone()
        };

        match result {
            Ok(()) => SaveOutcome::Synced,
            Err(err) => {
                tracing::warn!(%err, section, "Remote update failed; writing local fallback");
                if let Err(fallback_err) = self.fallback.save(&snapshot).await {
                    tracing::error!(%fallback_err, section, "Local fallback write failed");
                }
                SaveOutcome::SavedLocally
            }
        }
    }

    /// Reset pass for one collection: blank whatever is there, then rewrite
    /// the seed items over it.
    async fn reset_collection<T: Serialize>(
        &self,
        collection: &str,
        seed_items: &[T],
        key_of: fn(&T) -> &str,
        removal_sentinel: fn() -> Value,
    ) -> Result<(), DocumentStoreError> {
        let existing = self.bounded(self.docs.list_documents(collection)).await?;
        for (key, _) in &existing {
            self.bounded(self.docs.update_fields(collection, key, removal_sentinel()))
                .await?;
        }
        for item in seed_items {
            let value = encode(item)?;
            self.bounded(self.docs.set_document(collection, key_of(item), value, true))
                .await?;
        }
        Ok(())
    }

    async fn remote_reset(&self, seed: &PortfolioData) -> Result<(), DocumentStoreError> {
        self.bounded(self.docs.set_document(
            collections::PERSONAL_INFO,
            SINGLETON_KEY,
            encode(&seed.personal_info)?,
            true,
        ))
        .await?;

        self.reset_collection(collections::SKILLS, &seed.skills, |c| &c.category, sentinels::skills)
            .await?;
        self.reset_collection(
            collections::EXPERIENCE,
            &seed.experience,
            |e| &e.company,
            sentinels::experience,
        )
        .await?;
        self.reset_collection(
            collections::EDUCATION,
            &seed.education,
            |e| &e.degree,
            sentinels::education,
        )
        .await?;
        self.reset_collection(
            collections::CERTIFICATIONS,
            &seed.certifications,
            |c| &c.name,
            sentinels::certification,
        )
        .await?;
        self.reset_collection(
            collections::EXTRACURRICULAR,
            &seed.extracurricular,
            |e| &e.role,
            sentinels::extracurricular,
        )
        .await?;
        self.reset_collection(
            collections::PROJECTS,
            &seed.projects,
            |p| &p.title,
            sentinels::project,
        )
        .await?;

        self.bounded(self.docs.set_document(
            collections::WEBSITE_SETTINGS,
            SINGLETON_KEY,
            encode(&seed.website_settings)?,
            true,
        ))
        .await?;

        Ok(())
    }
}

/// Sentinel shapes written over removed documents. Field values match the
/// deployed store's blanked records exactly.
pub mod sentinels {
    use serde_json::{json, Value};

    pub fn skills() -> Value {
        json!({ "items": [] })
    }

    pub fn experience() -> Value {
        json!({
            "position": "Removed",
            "period": "",
            "description": "",
            "achievements": [],
            "technologies": []
        })
    }

    pub fn education() -> Value {
        json!({ "institution": "Removed", "period": "", "description": "" })
    }

    pub fn certification() -> Value {
        json!({ "issuer": "Removed", "date": "", "description": "" })
    }

    pub fn extracurricular() -> Value {
        json!({ "organization": "Removed", "period": "", "description": "" })
    }

    pub fn project() -> Value {
        json!({ "description": "Removed", "technologies": [], "role": "", "outcome": "" })
    }
}

#[async_trait]
impl<D, F> PortfolioSync for PortfolioStore<D, F>
where
    D: DocumentStore + Send + Sync,
    F: FallbackStore + Send + Sync,
{
    async fn fetch_all(&self) -> FetchedPortfolio {
        match self.fetch_remote().await {
            Ok(data) => {
                *self.cache.lock().await = data.clone();
                FetchedPortfolio {
                    data,
                    source: DataSource::Remote,
                }
            }
            Err(err) => {
                tracing::warn!(%err, "Remote fetch failed; trying local fallback");
                match self.fallback.load().await {
                    Ok(Some(data)) => {
                        *self.cache.lock().await = data.clone();
                        FetchedPortfolio {
                            data,
                            source: DataSource::Fallback,
                        }
                    }
                    Ok(None) => FetchedPortfolio {
                        data: seed_data(),
                        source: DataSource::Seed,
                    },
                    Err(fallback_err) => {
                        tracing::error!(%fallback_err, "Local fallback unreadable");
                        FetchedPortfolio {
                            data: seed_data(),
                            source: DataSource::Seed,
                        }
                    }
                }
            }
        }
    }

    async fn update_personal_info(&self, info: PersonalInfo) -> SaveOutcome {
        let result = match encode(&info) {
            Ok(value) => {
                self.bounded(self.docs.update_fields(
                    collections::PERSONAL_INFO,
                    SINGLETON_KEY,
                    value,
                ))
                .await
            }
            Err(err) => Err(err),
        };
        self.finish_update(collections::PERSONAL_INFO, result, |cache| {
            cache.personal_info = info
        })
        .await
    }

    async fn update_skills(&self, skills: Vec<SkillCategory>) -> SaveOutcome {
        let result = self
            .sync_collection(collections::SKILLS, &skills, |c| &c.category, sentinels::skills)
            .await;
        self.finish_update(collections::SKILLS, result, |cache| cache.skills = skills)
            .await
    }

    async fn update_experience(&self, experience: Vec<Experience>) -> SaveOutcome {
        let result = self
            .sync_collection(
                collections::EXPERIENCE,
                &experience,
                |e| &e.company,
                sentinels::experience,
            )
            .await;
        self.finish_update(collections::EXPERIENCE, result, |cache| {
            cache.experience = experience
        })
        .await
    }

    async fn update_education(&self, education: Vec<Education>) -> SaveOutcome {
        let result = self
            .sync_collection(
                collections::EDUCATION,
                &education,
                |e| &e.degree,
                sentinels::education,
            )
            .await;
        self.finish_update(collections::EDUCATION, result, |cache| {
            cache.education = education
        })
        .await
    }

    async fn update_certifications(&self, certifications: Vec<Certification>) -> SaveOutcome {
        let result = self
            .sync_collection(
                collections::CERTIFICATIONS,
                &certifications,
                |c| &c.name,
                sentinels::certification,
            )
            .await;
        self.finish_update(collections::CERTIFICATIONS, result, |cache| {
            cache.certifications = certifications
        })
        .await
    }

    async fn update_extracurricular(&self, entries: Vec<Extracurricular>) -> SaveOutcome {
        let result = self
            .sync_collection(
                collections::EXTRACURRICULAR,
                &entries,
                |e| &e.role,
                sentinels::extracurricular,
            )
            .await;
        self.finish_update(collections::EXTRACURRICULAR, result, |cache| {
            cache.extracurricular = entries
        })
        .await
    }

    async fn update_projects(&self, projects: Vec<Project>) -> SaveOutcome {
        let result = self
            .sync_collection(
                collections::PROJECTS,
                &projects,
                |p| &p.title,
                sentinels::project,
            )
            .await;
        self.finish_update(collections::PROJECTS, result, |cache| {
            cache.projects = projects
        })
        .await
    }

    async fn update_website_settings(&self, settings: WebsiteSettings) -> SaveOutcome {
        let result = match encode(&settings) {
            Ok(value) => {
                self.bounded(self.docs.update_fields(
                    collections::WEBSITE_SETTINGS,
                    SINGLETON_KEY,
                    value,
                ))
                .await
            }
            Err(err) => Err(err),
        };
        self.finish_update(collections::WEBSITE_SETTINGS, result, |cache| {
            cache.website_settings = settings
        })
        .await
    }

    async fn reset_to_defaults(&self) -> SaveOutcome {
        let seed = seed_data();
        let remote = self.remote_reset(&seed).await;

        *self.cache.lock().await = seed.clone();

        // The fallback blob is reset even when the remote pass failed.
        if let Err(fallback_err) = self.fallback.save(&seed).await {
            tracing::error!(%fallback_err, "Local fallback reset failed");
        }

        match remote {
            Ok(()) => SaveOutcome::Synced,
            Err(err) => {
                tracing::warn!(%err, "Remote reset failed partway");
                SaveOutcome::SavedLocally
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    use crate::content::adapter::outgoing::memory_document_store::InMemoryDocumentStore;
    use crate::test_support::{FailingDocumentStore, HangingDocumentStore, MemoryFallback};

    fn store_over(
        docs: InMemoryDocumentStore,
    ) -> PortfolioStore<InMemoryDocumentStore, MemoryFallback> {
        PortfolioStore::new(docs, MemoryFallback::default())
    }

    #[tokio::test]
    async fn test_fetch_all_seeds_empty_store_idempotently() {
        let docs = InMemoryDocumentStore::new();
        let store = store_over(docs.clone());

        let first = store.fetch_all().await;
        assert_eq!(first.source, DataSource::Remote);
        assert_eq!(first.data, seed_data());

        let counts_after_first: Vec<usize> = [
            collections::SKILLS,
            collections::EXPERIENCE,
            collections::PROJECTS,
        ]
        .iter()
        .map(|c| docs.document_count(c))
        .collect();

        let second = store.fetch_all().await;
        assert_eq!(second.data, seed_data());

        let counts_after_second: Vec<usize> = [
            collections::SKILLS,
            collections::EXPERIENCE,
            collections::PROJECTS,
        ]
        .iter()
        .map(|c| docs.document_count(c))
        .collect();

        assert_eq!(counts_after_first, counts_after_second);
    }

    #[tokio::test]
    async fn test_fetch_all_prefers_fallback_blob_over_seed() {
        let fallback = MemoryFallback::default();
        let mut cached = seed_data();
        cached.personal_info.name = "Cached Name".into();
        fallback.set(cached.clone()).await;

        let store = PortfolioStore::new(FailingDocumentStore, fallback);
        let fetched = store.fetch_all().await;

        assert_eq!(fetched.source, DataSource::Fallback);
        assert_eq!(fetched.data, cached);
    }

    #[tokio::test]
    async fn test_fetch_all_returns_seed_when_no_fallback_exists() {
        let fallback = MemoryFallback::default();
        let store = PortfolioStore::new(FailingDocumentStore, fallback.clone());

        let fetched = store.fetch_all().await;

        assert_eq!(fetched.source, DataSource::Seed);
        assert_eq!(fetched.data, seed_data());
        // Seed-only result is not persisted.
        assert!(fallback.current().await.is_none());
    }

    #[tokio::test]
    async fn test_update_with_failing_remote_lands_in_fallback_blob() {
        let fallback = MemoryFallback::default();
        let store = PortfolioStore::new(FailingDocumentStore, fallback.clone());

        let mut projects = seed_data().projects;
        projects.remove(0);

        let outcome = store.update_projects(projects.clone()).await;
        assert_eq!(outcome, SaveOutcome::SavedLocally);

        let blob = fallback.current().await.expect("fallback blob written");
        assert_eq!(blob.projects, projects);
        // Untouched sections keep the last known aggregate.
        assert_eq!(blob.personal_info, seed_data().personal_info);
        assert_eq!(blob.skills, seed_data().skills);
    }

    #[tokio::test]
    async fn test_removed_experience_is_blanked_not_deleted() {
        let docs = InMemoryDocumentStore::new();
        let store = store_over(docs.clone());
        store.fetch_all().await;

        let mut experience = seed_data().experience;
        let removed = experience.pop().expect("seed has experience entries");

        let outcome = store.update_experience(experience.clone()).await;
        assert_eq!(outcome, SaveOutcome::Synced);

        // Record still enumerable, fields overwritten with the sentinel.
        let doc = docs
            .get(collections::EXPERIENCE, &removed.company)
            .expect("blanked document still present");
        assert_eq!(doc["position"], "Removed");
        assert_eq!(doc["period"], "");
        assert_eq!(doc["description"], "");
        assert_eq!(doc["achievements"], json!([]));
        assert_eq!(doc["technologies"], json!([]));
        // The natural key field is untouched by the sentinel.
        assert_eq!(doc["company"], removed.company.as_str());

        assert_eq!(
            docs.document_count(collections::EXPERIENCE),
            seed_data().experience.len()
        );
    }

    #[tokio::test]
    async fn test_removed_skill_category_is_emptied() {
        let docs = InMemoryDocumentStore::new();
        let store = store_over(docs.clone());
        store.fetch_all().await;

        let mut skills = seed_data().skills;
        let removed = skills.pop().expect("seed has skill categories");

        store.update_skills(skills).await;

        let doc = docs
            .get(collections::SKILLS, &removed.category)
            .expect("blanked category still present");
        assert_eq!(doc["items"], json!([]));
    }

    #[tokio::test]
    async fn test_update_with_matching_key_overwrites_in_place() {
        let docs = InMemoryDocumentStore::new();
        let store = store_over(docs.clone());
        store.fetch_all().await;

        let mut projects = seed_data().projects;
        projects[0].outcome = "Rewritten outcome".into();

        store.update_projects(projects.clone()).await;

        assert_eq!(
            docs.document_count(collections::PROJECTS),
            seed_data().projects.len()
        );
        let doc = docs
            .get(collections::PROJECTS, &projects[0].title)
            .expect("project document");
        assert_eq!(doc["outcome"], "Rewritten outcome");
    }

    #[tokio::test]
    async fn test_reset_always_lands_locally_even_when_remote_fails() {
        let fallback = MemoryFallback::default();
        let store = PortfolioStore::new(FailingDocumentStore, fallback.clone());

        let outcome = store.reset_to_defaults().await;

        assert_eq!(outcome, SaveOutcome::SavedLocally);
        assert_eq!(fallback.current().await, Some(seed_data()));
    }

    #[tokio::test]
    async fn test_reset_restores_seed_remotely() {
        let docs = InMemoryDocumentStore::new();
        let store = store_over(docs.clone());
        store.fetch_all().await;

        store.update_projects(Vec::new()).await;
        let outcome = store.reset_to_defaults().await;
        assert_eq!(outcome, SaveOutcome::Synced);

        let fetched = store.fetch_all().await;
        assert_eq!(fetched.data.projects, seed_data().projects);
    }

    #[tokio::test(start_paused = true)]
    async fn test_hung_remote_call_times_out_into_local_save() {
        let fallback = MemoryFallback::default();
        let store = PortfolioStore::new(HangingDocumentStore, fallback.clone())
            .with_remote_timeout(Duration::from_millis(50));

        let outcome = store.update_education(seed_data().education).await;

        assert_eq!(outcome, SaveOutcome::SavedLocally);
        assert!(fallback.current().await.is_some());
    }

    #[tokio::test]
    async fn test_singleton_update_touches_only_its_document() {
        let docs = InMemoryDocumentStore::new();
        let store = store_over(docs.clone());
        store.fetch_all().await;

        let mut info = seed_data().personal_info;
        info.title = "Head of Delivery".into();
        let outcome = store.update_personal_info(info.clone()).await;
        assert_eq!(outcome, SaveOutcome::Synced);

        let doc = docs
            .get(collections::PERSONAL_INFO, SINGLETON_KEY)
            .expect("singleton document");
        assert_eq!(doc["title"], "Head of Delivery");
        assert_eq!(
            docs.document_count(collections::PERSONAL_INFO),
            1,
            "singleton collection holds exactly one document"
        );
    }
}
