use std::sync::Arc;

use samskrita_core::{Catalog, ContentStore};
use storage::repository::Storage;
use tracing::{info, warn};

use crate::ai::{ContentGenerator, GeminiGenerator, GeneratorCapability};
use crate::content_resolver::ContentResolver;
use crate::error::AppServicesError;
use crate::navigation::ViewController;
use crate::progress::ProgressTracker;

/// Assembles app-facing services from storage and the generator capability.
#[derive(Clone)]
pub struct AppServices {
    catalog: Catalog,
    resolver: ContentResolver,
    progress: ProgressTracker,
}

impl AppServices {
    /// Build services backed by `SQLite` storage, probing the environment for
    /// generator settings.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization fails.
    pub async fn new_sqlite(db_url: &str) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        let generator = generator_for(GeneratorCapability::from_env());
        Ok(Self::from_parts(storage, ContentStore::builtin(), generator).await)
    }

    /// Build services from explicit parts.
    pub async fn from_parts(
        storage: Storage,
        preloaded: ContentStore,
        generator: Option<Arc<dyn ContentGenerator>>,
    ) -> Self {
        let catalog = Catalog::builtin();
        let progress = ProgressTracker::load(Arc::clone(&storage.kv), catalog).await;
        let resolver = ContentResolver::new(preloaded, generator);
        Self {
            catalog,
            resolver,
            progress,
        }
    }

    #[must_use]
    pub fn catalog(&self) -> Catalog {
        self.catalog
    }

    #[must_use]
    pub fn resolver(&self) -> ContentResolver {
        self.resolver.clone()
    }

    #[must_use]
    pub fn progress(&self) -> ProgressTracker {
        self.progress.clone()
    }

    #[must_use]
    pub fn generation_available(&self) -> bool {
        self.resolver.is_capable()
    }

    /// A fresh controller on the home screen.
    #[must_use]
    pub fn controller(&self, admin_mode: bool) -> ViewController {
        ViewController::new(self.resolver(), self.progress()).with_admin_mode(admin_mode)
    }
}

/// Turn a probe result into a generator, or none.
#[must_use]
pub fn generator_for(capability: GeneratorCapability) -> Option<Arc<dyn ContentGenerator>> {
    let GeneratorCapability::Available(settings) = capability else {
        info!("no generator api key configured; admin fetches disabled");
        return None;
    };
    match GeminiGenerator::new(settings) {
        Ok(generator) => Some(Arc::new(generator)),
        Err(err) => {
            warn!(error = %err, "could not build generator client; admin fetches disabled");
            None
        }
    }
}
