use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use samskrita_core::ContentStore;
use services::{AppServices, ContentGenerator, ContentResolver, ProgressTracker};
use storage::repository::Storage;

use crate::app::Shell;
use crate::context::{AppContext, UiApp, build_app_context};
use crate::views::{GrandDeckView, GrandQuizView, HomeView, TopicView};

#[derive(Clone)]
struct TestApp {
    services: AppServices,
    admin: bool,
}

impl UiApp for TestApp {
    fn resolver(&self) -> ContentResolver {
        self.services.resolver()
    }

    fn progress(&self) -> ProgressTracker {
        self.services.progress()
    }

    fn admin_on_launch(&self) -> bool {
        self.admin
    }

    fn generation_available(&self) -> bool {
        self.services.generation_available()
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Shell,
    Home,
    Topic(u32),
    GrandQuiz,
    GrandDeck,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewHarnessRoot(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    match props.view {
        ViewKind::Shell => rsx! { Shell {} },
        view => rsx! { SingleView { view } },
    }
}

/// Renders one view against its own controller, without the shell chrome.
#[component]
fn SingleView(view: ViewKind) -> Element {
    let ctx = use_context::<AppContext>();
    let controller = use_signal(|| ctx.controller());
    use_context_provider(|| controller);
    match view {
        ViewKind::Shell | ViewKind::Home => rsx! { HomeView {} },
        ViewKind::Topic(topic_id) => rsx! { TopicView { topic_id } },
        ViewKind::GrandQuiz => rsx! { GrandQuizView {} },
        ViewKind::GrandDeck => rsx! { GrandDeckView {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub services: AppServices,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub async fn setup_view_harness(view: ViewKind, admin: bool) -> ViewHarness {
    setup_view_harness_with_generator(view, admin, None).await
}

pub async fn setup_view_harness_with_generator(
    view: ViewKind,
    admin: bool,
    generator: Option<Arc<dyn ContentGenerator>>,
) -> ViewHarness {
    let services =
        AppServices::from_parts(Storage::in_memory(), ContentStore::builtin(), generator).await;
    let app = Arc::new(TestApp {
        services: services.clone(),
        admin,
    });
    let dom = VirtualDom::new_with_props(ViewHarnessRoot, ViewHarnessProps { app, view });
    ViewHarness { dom, services }
}
