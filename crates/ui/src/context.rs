use std::sync::Arc;

use services::{ContentResolver, ProgressTracker, ViewController};

pub trait UiApp: Send + Sync {
    fn resolver(&self) -> ContentResolver;
    fn progress(&self) -> ProgressTracker;

    /// Whether admin capture starts switched on.
    fn admin_on_launch(&self) -> bool;

    /// Whether a generator is configured at all.
    fn generation_available(&self) -> bool;
}

#[derive(Clone)]
pub struct AppContext {
    resolver: ContentResolver,
    progress: ProgressTracker,
    admin_on_launch: bool,
    generation_available: bool,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            resolver: app.resolver(),
            progress: app.progress(),
            admin_on_launch: app.admin_on_launch(),
            generation_available: app.generation_available(),
        }
    }

    /// A controller on the home screen, sharing this context's services.
    #[must_use]
    pub fn controller(&self) -> ViewController {
        ViewController::new(self.resolver.clone(), self.progress.clone())
            .with_admin_mode(self.admin_on_launch)
    }

    #[must_use]
    pub fn generation_available(&self) -> bool {
        self.generation_available
    }
}

/// Build an `AppContext` from a UI-facing app implementation.
///
/// Called once by the binary before launch.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
