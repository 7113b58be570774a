//! Application State
//!
//! Owns the current route, the mounted page and the layout shell, and
//! turns user actions into navigation and resource client calls.

use crate::client::{scoped, JobsApi};
use crate::config::Config;
use crate::listing::JobListings;
use crate::models::{Job, JobPatch};
use crate::router::{self, Capability, Route};
use crate::shell::{Navbar, Notifications};
use crate::tui::event::AppAction;
use crate::tui::form::JobForm;
use crate::types::{AppError, AppResult};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::style::Style;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};
use tui_textarea::TextArea;

/// Routes kept for Back
const HISTORY_LIMIT: usize = 50;

/// Current overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Page,
    Help,
    ConfirmDelete,
    GoTo,
}

/// Fetch state of a listing page
#[derive(Debug, Clone, PartialEq)]
pub enum ListingsStatus {
    Loading,
    Loaded(JobListings),
    Failed(String),
}

/// The mounted page and its local state
pub enum Page {
    Home(ListingsStatus),
    Jobs(ListingsStatus),
    AddJob(JobForm),
    /// Loader in flight; the target page has not been painted yet
    Loading(Route),
    Job(Job),
    EditJob { job: Job, form: JobForm },
    NotFound { path: String, notice: Option<String> },
    LoadFailed { route: Route, message: String },
}

/// Results of background requests, tagged with the mount that issued them
#[derive(Debug)]
pub enum AppEvent {
    ListingsLoaded { mount: u64, result: AppResult<Vec<Job>> },
    RouteLoaded { mount: u64, route: Route, result: AppResult<Option<Job>> },
    JobCreated { mount: u64, result: AppResult<Job> },
    JobUpdated { mount: u64, result: AppResult<Job> },
    JobDeleted { mount: u64, result: AppResult<()> },
}

impl AppEvent {
    fn mount(&self) -> u64 {
        match self {
            AppEvent::ListingsLoaded { mount, .. }
            | AppEvent::RouteLoaded { mount, .. }
            | AppEvent::JobCreated { mount, .. }
            | AppEvent::JobUpdated { mount, .. }
            | AppEvent::JobDeleted { mount, .. } => *mount,
        }
    }
}

/// Lifetime of one mounted page. Cancelling the scope aborts its requests.
struct Mount {
    id: u64,
    scope: CancellationToken,
}

/// Main application state
pub struct App {
    // Configuration and services
    pub config: Config,
    api: Arc<dyn JobsApi>,
    pub navbar: Navbar,
    pub notifications: Notifications,

    // Routing
    pub route: Route,
    pub page: Page,
    history: Vec<Route>,
    mount: Mount,
    root_scope: CancellationToken,

    // UI State
    pub view: View,
    pub should_quit: bool,
    pub pending: bool,
    pub goto_input: TextArea<'static>,
    pub ticks: u64,

    // Async communication
    event_rx: mpsc::Receiver<AppEvent>,
    event_tx: mpsc::Sender<AppEvent>,
}

impl App {
    /// Create a new application instance. Call `navigate` to mount the first page.
    pub fn new(
        config: Config,
        api: Arc<dyn JobsApi>,
        navbar: Navbar,
        notifications: Notifications,
    ) -> Self {
        let (tx, rx) = mpsc::channel(100);
        let root_scope = CancellationToken::new();
        let mount = Mount {
            id: 0,
            scope: root_scope.child_token(),
        };

        Self {
            config,
            api,
            navbar,
            notifications,
            route: Route::Home,
            page: Page::Home(ListingsStatus::Loading),
            history: Vec::new(),
            mount,
            root_scope,
            view: View::Page,
            should_quit: false,
            pending: false,
            goto_input: Self::new_goto_input(),
            ticks: 0,
            event_rx: rx,
            event_tx: tx,
        }
    }

    fn new_goto_input() -> TextArea<'static> {
        let mut input = TextArea::default();
        input.set_cursor_line_style(Style::default());
        input.set_placeholder_text("/jobs/1");
        input
    }

    /// Mount the first page without recording history
    pub fn start(&mut self, path: &str) {
        self.mount_route(Route::parse(path));
    }

    /// Navigate to `path`, recording the current route in history
    pub fn navigate(&mut self, path: &str) {
        let previous = self.route.clone();
        if self.history.len() == HISTORY_LIMIT {
            self.history.remove(0);
        }
        self.history.push(previous);
        self.mount_route(Route::parse(path));
    }

    /// Replace the current route with `path`. Used after a mutation so Back
    /// never returns to the page that performed it.
    pub fn redirect(&mut self, path: &str) {
        self.mount_route(Route::parse(path));
    }

    /// Return to the previous route, if any
    pub fn back(&mut self) {
        if let Some(route) = self.history.pop() {
            self.mount_route(route);
        }
    }

    fn mount_route(&mut self, route: Route) {
        info!("Navigating to {}", route);

        // Tear down the previous page: its in-flight requests are abandoned
        self.mount.scope.cancel();
        self.mount = Mount {
            id: self.mount.id + 1,
            scope: self.root_scope.child_token(),
        };
        self.view = View::Page;
        self.pending = false;

        self.page = match &route {
            Route::Home => {
                self.fetch_listings(Some(self.config.ui.home_listing_limit));
                Page::Home(ListingsStatus::Loading)
            }
            Route::Jobs => {
                self.fetch_listings(None);
                Page::Jobs(ListingsStatus::Loading)
            }
            Route::AddJob => Page::AddJob(JobForm::new()),
            Route::Job { .. } | Route::EditJob { .. } => {
                self.spawn_loader(route.clone());
                Page::Loading(route.clone())
            }
            Route::NotFound { path } => Page::NotFound {
                path: path.clone(),
                notice: None,
            },
        };
        self.route = route;
    }

    fn fetch_listings(&self, limit: Option<usize>) {
        let api = Arc::clone(&self.api);
        let tx = self.event_tx.clone();
        let (mount, scope) = (self.mount.id, self.mount.scope.clone());

        tokio::spawn(async move {
            let result = scoped(&scope, api.list_jobs(limit)).await;
            tx.send(AppEvent::ListingsLoaded { mount, result }).await.ok();
        });
    }

    fn spawn_loader(&self, route: Route) {
        let api = Arc::clone(&self.api);
        let tx = self.event_tx.clone();
        let (mount, scope) = (self.mount.id, self.mount.scope.clone());

        tokio::spawn(async move {
            let result = router::run_loader(&route, api.as_ref(), &scope).await;
            tx.send(AppEvent::RouteLoaded { mount, route, result })
                .await
                .ok();
        });
    }

    /// Whether the mounted route is wired to `capability`
    fn allows(&self, capability: Capability) -> bool {
        let allowed = self.route.capability() == Some(capability);
        if !allowed {
            warn!("{:?} is not available on {}", capability, self.route);
        }
        allowed
    }

    /// Poll for async events
    pub fn poll_events(&mut self) {
        let mut events = Vec::new();
        while let Ok(event) = self.event_rx.try_recv() {
            events.push(event);
        }

        for event in events {
            self.handle_event(event);
        }
    }

    /// Handle an async event
    fn handle_event(&mut self, event: AppEvent) {
        if event.mount() != self.mount.id {
            debug!("Discarding result for an unmounted page: {:?}", event);
            return;
        }

        match event {
            AppEvent::ListingsLoaded { result, .. } => {
                let status = match result {
                    Ok(jobs) => ListingsStatus::Loaded(JobListings::new(self.listings_title(), jobs)),
                    Err(e) => {
                        error!("Failed to fetch job listings: {}", e);
                        ListingsStatus::Failed(e.to_string())
                    }
                };
                if let Page::Home(current) | Page::Jobs(current) = &mut self.page {
                    *current = status;
                }
            }
            AppEvent::RouteLoaded { route, result, .. } => self.finish_loading(route, result),
            AppEvent::JobCreated { result, .. } => {
                self.pending = false;
                match result {
                    Ok(job) => {
                        info!("Created job {}", job.id);
                        self.notifications.success("Job added successfully");
                        self.redirect("/jobs");
                    }
                    Err(e) => self.report_failure("add job", &e),
                }
            }
            AppEvent::JobUpdated { result, .. } => {
                self.pending = false;
                match result {
                    Ok(job) => {
                        info!("Updated job {}", job.id);
                        self.notifications.success("Job updated successfully");
                        self.redirect(&Route::Job { id: job.id }.path());
                    }
                    Err(e) => self.report_failure("update job", &e),
                }
            }
            AppEvent::JobDeleted { result, .. } => {
                self.pending = false;
                match result {
                    Ok(()) => {
                        self.notifications.success("Job deleted successfully");
                        self.redirect("/jobs");
                    }
                    Err(e) => self.report_failure("delete job", &e),
                }
            }
        }
    }

    fn listings_title(&self) -> &'static str {
        match self.route {
            Route::Home => "Recent Jobs",
            _ => "Browse Jobs",
        }
    }

    fn finish_loading(&mut self, route: Route, result: AppResult<Option<Job>>) {
        let job = match result {
            Ok(Some(job)) => job,
            Ok(None) => return,
            Err(e) if e.is_cancelled() => return,
            Err(e) if e.is_not_found() => {
                let notice = route.loader_id().map(|id| format!("Job {} was not found", id));
                self.page = Page::NotFound {
                    path: route.path(),
                    notice,
                };
                return;
            }
            Err(e) => {
                error!("Loader for {} failed: {}", route, e);
                self.notifications.error(format!("Could not load job: {}", e));
                self.page = Page::LoadFailed {
                    message: e.to_string(),
                    route,
                };
                return;
            }
        };

        self.page = match route {
            Route::EditJob { .. } => Page::EditJob {
                form: JobForm::from_job(&job),
                job,
            },
            _ => Page::Job(job),
        };
    }

    /// Surface a failed mutation and stay on the page
    fn report_failure(&mut self, operation: &str, err: &AppError) {
        if err.is_cancelled() {
            return;
        }
        error!("Failed to {}: {}", operation, err);
        self.notifications.error(format!("Failed to {}: {}", operation, err));
    }

    /// Handle a user action
    pub async fn handle_action(&mut self, action: AppAction) {
        match action {
            AppAction::Quit | AppAction::ForceQuit => {
                self.should_quit = true;
            }
            AppAction::Tick => {
                self.ticks = self.ticks.wrapping_add(1);
                self.notifications.prune();
            }
            AppAction::ToggleHelp => {
                self.view = if self.view == View::Help {
                    View::Page
                } else {
                    View::Help
                };
            }
            AppAction::GoTo => {
                self.goto_input = Self::new_goto_input();
                self.view = View::GoTo;
            }
            AppAction::Back => self.back(),
            AppAction::Navigate(key) => {
                if let Some(item) = self.navbar.by_key(key) {
                    let path = item.path;
                    self.navigate(path);
                }
            }
            AppAction::Escape => self.escape(),
            AppAction::Submit => self.submit(),
            AppAction::Up => self.move_selection(false),
            AppAction::Down => self.move_selection(true),
            AppAction::NextField => {
                if let Page::AddJob(form) | Page::EditJob { form, .. } = &mut self.page {
                    form.next_field();
                }
            }
            AppAction::PrevField => {
                if let Page::AddJob(form) | Page::EditJob { form, .. } = &mut self.page {
                    form.prev_field();
                }
            }
            AppAction::Input(key) => self.handle_input(key),
        }
    }

    fn escape(&mut self) {
        if self.view != View::Page {
            self.view = View::Page;
            return;
        }

        match &self.route {
            Route::Job { .. } => self.navigate("/jobs"),
            Route::AddJob | Route::EditJob { .. } => self.back(),
            _ => self.notifications.dismiss(),
        }
    }

    fn submit(&mut self) {
        match self.view {
            View::GoTo => {
                let path = self.goto_input.lines().join("");
                self.view = View::Page;
                if !path.trim().is_empty() {
                    self.navigate(path.trim());
                }
                return;
            }
            View::ConfirmDelete => {
                self.view = View::Page;
                self.delete_job();
                return;
            }
            View::Help => {
                self.view = View::Page;
                return;
            }
            View::Page => {}
        }

        match &self.page {
            Page::Home(ListingsStatus::Loaded(listings))
            | Page::Jobs(ListingsStatus::Loaded(listings)) => {
                if let Some(card) = listings.selected() {
                    let path = card.detail_path();
                    self.navigate(&path);
                }
            }
            Page::AddJob(_) => self.create_job(),
            Page::EditJob { .. } => self.update_job(),
            Page::NotFound { .. } => self.navigate("/"),
            _ => {}
        }
    }

    fn move_selection(&mut self, down: bool) {
        match &mut self.page {
            Page::Home(ListingsStatus::Loaded(listings))
            | Page::Jobs(ListingsStatus::Loaded(listings)) => {
                if down {
                    listings.select_next();
                } else {
                    listings.select_prev();
                }
            }
            Page::AddJob(form) | Page::EditJob { form, .. } => {
                if down {
                    form.next_field();
                } else {
                    form.prev_field();
                }
            }
            _ => {}
        }
    }

    /// Handle keyboard input for the current page
    fn handle_input(&mut self, key: KeyEvent) {
        match self.view {
            View::GoTo => {
                self.goto_input.input(key);
                return;
            }
            View::ConfirmDelete => {
                match key.code {
                    KeyCode::Char('y') | KeyCode::Char('Y') => {
                        self.view = View::Page;
                        self.delete_job();
                    }
                    KeyCode::Char('n') | KeyCode::Char('N') => self.view = View::Page,
                    _ => {}
                }
                return;
            }
            View::Help => {
                self.view = View::Page;
                return;
            }
            View::Page => {}
        }

        if let Page::AddJob(form) | Page::EditJob { form, .. } = &mut self.page {
            form.handle_key(key);
            return;
        }

        match key.code {
            KeyCode::Char('?') => self.view = View::Help,
            KeyCode::Char(' ') => {
                if let Page::Home(ListingsStatus::Loaded(listings))
                | Page::Jobs(ListingsStatus::Loaded(listings)) = &mut self.page
                {
                    listings.toggle_selected();
                }
            }
            KeyCode::Char('v') if matches!(self.page, Page::Home(_)) => self.navigate("/jobs"),
            KeyCode::Char('e') => {
                if let Page::Job(job) = &self.page {
                    let path = Route::EditJob { id: job.id.clone() }.path();
                    self.navigate(&path);
                }
            }
            KeyCode::Char('d') if matches!(self.page, Page::Job(_)) && !self.pending => {
                self.view = View::ConfirmDelete;
            }
            KeyCode::Char('r') => {
                if let Page::LoadFailed { route, .. } = &self.page {
                    let route = route.clone();
                    self.mount_route(route);
                }
            }
            _ => {}
        }
    }

    fn create_job(&mut self) {
        if self.pending || !self.allows(Capability::Create) {
            return;
        }
        let Page::AddJob(form) = &self.page else {
            return;
        };

        let job = match form.to_new_job() {
            Ok(job) => job,
            Err(e) => {
                self.notifications.error(e.to_string());
                return;
            }
        };

        self.pending = true;
        let api = Arc::clone(&self.api);
        let tx = self.event_tx.clone();
        let (mount, scope) = (self.mount.id, self.mount.scope.clone());

        tokio::spawn(async move {
            let result = scoped(&scope, api.create_job(&job)).await;
            tx.send(AppEvent::JobCreated { mount, result }).await.ok();
        });
    }

    fn update_job(&mut self) {
        if self.pending || !self.allows(Capability::Update) {
            return;
        }
        let Page::EditJob { job, form } = &self.page else {
            return;
        };

        if form.is_unchanged() {
            let id = job.id.clone();
            self.notifications.info("No changes to save");
            self.redirect(&Route::Job { id }.path());
            return;
        }

        let edited = match form.to_new_job() {
            Ok(edited) => edited,
            Err(e) => {
                self.notifications.error(e.to_string());
                return;
            }
        };

        let patch = JobPatch::changes(job, &edited);
        let id = job.id.clone();
        if patch.is_empty() {
            self.notifications.info("No changes to save");
            self.redirect(&Route::Job { id }.path());
            return;
        }

        self.pending = true;
        let api = Arc::clone(&self.api);
        let tx = self.event_tx.clone();
        let (mount, scope) = (self.mount.id, self.mount.scope.clone());

        tokio::spawn(async move {
            let result = scoped(&scope, api.update_job(&id, &patch)).await;
            tx.send(AppEvent::JobUpdated { mount, result }).await.ok();
        });
    }

    fn delete_job(&mut self) {
        if self.pending || !self.allows(Capability::Delete) {
            return;
        }
        let Page::Job(job) = &self.page else {
            return;
        };

        self.pending = true;
        let id = job.id.clone();
        let api = Arc::clone(&self.api);
        let tx = self.event_tx.clone();
        let (mount, scope) = (self.mount.id, self.mount.scope.clone());

        tokio::spawn(async move {
            let result = scoped(&scope, api.delete_job(&id)).await;
            tx.send(AppEvent::JobDeleted { mount, result }).await.ok();
        });
    }

    /// Cancel every in-flight request on shutdown
    pub fn shutdown(&self) {
        self.root_scope.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::mock::{job, Call, MockJobsApi};
    use crossterm::event::KeyModifiers;
    use std::time::Duration;

    fn app_with(api: Arc<MockJobsApi>) -> App {
        let config = Config::default();
        let notifications = Notifications::new(config.ui.toast_ttl(), config.ui.toast_max_visible);
        App::new(config, api, Navbar::default(), notifications)
    }

    /// Wait for the next background result and apply it
    async fn settle(app: &mut App) {
        let event = tokio::time::timeout(Duration::from_secs(5), app.event_rx.recv())
            .await
            .expect("timed out waiting for app event")
            .expect("event channel closed");
        app.handle_event(event);
    }

    fn key(c: char) -> AppAction {
        AppAction::Input(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
    }

    fn toasts(app: &App) -> Vec<String> {
        app.notifications.visible().map(|t| t.message.clone()).collect()
    }

    #[tokio::test]
    async fn test_unmapped_path_renders_not_found_without_calls() {
        let api = Arc::new(MockJobsApi::default());
        let mut app = app_with(api.clone());

        app.navigate("/nonexistent");

        assert!(matches!(&app.page, Page::NotFound { path, notice: None } if path == "/nonexistent"));
        tokio::task::yield_now().await;
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_detail_page_is_painted_after_loader() {
        let api = Arc::new(MockJobsApi::with_jobs(vec![job("abc123", "Rust Developer")]));
        let mut app = app_with(api.clone());

        app.navigate("/jobs/abc123");
        assert!(matches!(app.page, Page::Loading(_)));

        settle(&mut app).await;
        assert!(matches!(&app.page, Page::Job(job) if job.id == "abc123"));
        assert_eq!(api.calls(), vec![Call::Get("abc123".to_string())]);
    }

    #[tokio::test]
    async fn test_missing_job_renders_not_found_with_notice() {
        let api = Arc::new(MockJobsApi::default());
        let mut app = app_with(api);

        app.navigate("/edit-job/404");
        settle(&mut app).await;

        assert!(matches!(
            &app.page,
            Page::NotFound { notice: Some(notice), .. } if notice.contains("404")
        ));
    }

    #[tokio::test]
    async fn test_loader_error_renders_failure_page() {
        let api = Arc::new(MockJobsApi::with_jobs(vec![job("1", "Any")]));
        api.fail_with(500);
        let mut app = app_with(api);

        app.navigate("/jobs/1");
        settle(&mut app).await;

        assert!(matches!(app.page, Page::LoadFailed { .. }));
        assert_eq!(toasts(&app).len(), 1);
    }

    #[tokio::test]
    async fn test_stale_results_are_discarded() {
        let api = Arc::new(MockJobsApi::with_jobs(vec![job("1", "Any")]));
        let mut app = app_with(api);

        app.navigate("/jobs");
        app.navigate("/add-job");

        // Whatever the listing fetch produced belongs to an unmounted page
        app.handle_event(AppEvent::ListingsLoaded {
            mount: app.mount.id - 1,
            result: Ok(vec![job("2", "Late")]),
        });
        assert!(matches!(app.page, Page::AddJob(_)));
    }

    #[tokio::test]
    async fn test_navigation_cancels_previous_scope() {
        let api = Arc::new(MockJobsApi::default());
        let mut app = app_with(api);

        app.navigate("/jobs");
        let scope = app.mount.scope.clone();
        app.navigate("/");

        assert!(scope.is_cancelled());
        assert!(!app.mount.scope.is_cancelled());
    }

    #[tokio::test]
    async fn test_home_lists_limited_jobs_and_toggles_one_card() {
        let jobs = (1..=5).map(|i| job(&i.to_string(), "Listing")).collect();
        let api = Arc::new(MockJobsApi::with_jobs(jobs));
        let mut app = app_with(api.clone());

        app.navigate("/");
        settle(&mut app).await;

        assert_eq!(api.calls(), vec![Call::List(Some(3))]);
        app.handle_action(AppAction::Down).await;
        app.handle_action(key(' ')).await;

        let Page::Home(ListingsStatus::Loaded(listings)) = &app.page else {
            panic!("home listings not loaded");
        };
        assert_eq!(listings.cards().len(), 3);
        let expanded: Vec<bool> = listings.cards().iter().map(|c| c.is_expanded()).collect();
        assert_eq!(expanded, vec![false, true, false]);
    }

    #[tokio::test]
    async fn test_create_success_navigates_to_listing() {
        let api = Arc::new(MockJobsApi::with_jobs(Vec::new()));
        let mut app = app_with(api.clone());

        app.navigate("/add-job");
        let Page::AddJob(form) = &mut app.page else {
            panic!("add page not mounted");
        };
        *form = JobForm::from_job(&job("ignored", "Platform Engineer"));

        app.handle_action(AppAction::Submit).await;
        assert!(app.pending);
        settle(&mut app).await;

        assert_eq!(app.route, Route::Jobs);
        assert_eq!(toasts(&app), vec!["Job added successfully".to_string()]);
        assert!(api.calls().contains(&Call::Create));
    }

    #[tokio::test]
    async fn test_invalid_form_stays_and_reports() {
        let api = Arc::new(MockJobsApi::default());
        let mut app = app_with(api.clone());

        app.navigate("/add-job");
        app.handle_action(AppAction::Submit).await;

        assert_eq!(app.route, Route::AddJob);
        assert!(!app.pending);
        assert_eq!(toasts(&app).len(), 1);
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_failed_delete_keeps_detail_page() {
        let api = Arc::new(MockJobsApi::with_jobs(vec![job("9", "Keep Me")]));
        let mut app = app_with(api.clone());

        app.navigate("/jobs/9");
        settle(&mut app).await;
        api.fail_with(503);

        app.handle_action(key('d')).await;
        assert_eq!(app.view, View::ConfirmDelete);
        app.handle_action(key('y')).await;
        settle(&mut app).await;

        assert!(matches!(&app.page, Page::Job(job) if job.id == "9"));
        assert!(toasts(&app)[0].starts_with("Failed to delete job"));
    }

    #[tokio::test]
    async fn test_delete_success_returns_to_listing() {
        let api = Arc::new(MockJobsApi::with_jobs(vec![job("9", "Remove Me")]));
        let mut app = app_with(api.clone());

        app.navigate("/jobs/9");
        settle(&mut app).await;
        app.handle_action(key('d')).await;
        app.handle_action(AppAction::Submit).await;
        settle(&mut app).await;

        assert_eq!(app.route, Route::Jobs);
        assert!(api.job("9").is_none());
    }

    #[tokio::test]
    async fn test_edit_sends_only_changes() {
        let api = Arc::new(MockJobsApi::with_jobs(vec![job("3", "Old Title")]));
        let mut app = app_with(api.clone());

        app.navigate("/edit-job/3");
        settle(&mut app).await;

        // Focus the title field and append to it
        app.handle_action(AppAction::NextField).await;
        app.handle_action(AppAction::Input(KeyEvent::new(KeyCode::End, KeyModifiers::NONE)))
            .await;
        app.handle_action(key('!')).await;
        app.handle_action(AppAction::Submit).await;
        settle(&mut app).await;

        assert_eq!(app.route, Route::Job { id: "3".to_string() });
        assert_eq!(api.job("3").unwrap().title, "Old Title!");
        assert!(api.calls().contains(&Call::Update("3".to_string())));
    }

    #[tokio::test]
    async fn test_unchanged_edit_skips_request() {
        let api = Arc::new(MockJobsApi::with_jobs(vec![job("3", "Same")]));
        let mut app = app_with(api.clone());

        app.navigate("/edit-job/3");
        settle(&mut app).await;
        app.handle_action(AppAction::Submit).await;

        assert_eq!(app.route, Route::Job { id: "3".to_string() });
        assert_eq!(toasts(&app), vec!["No changes to save".to_string()]);
        assert!(!api.calls().contains(&Call::Update("3".to_string())));
    }

    #[tokio::test]
    async fn test_untouched_edit_keeps_irregular_backend_values() {
        let mut existing = job("3", "Analyst");
        existing.job_type = String::new();
        existing.description = "Line one\r\nLine two\n".to_string();
        existing.location = " Boston ".to_string();
        let api = Arc::new(MockJobsApi::with_jobs(vec![existing.clone()]));
        let mut app = app_with(api.clone());

        app.navigate("/edit-job/3");
        settle(&mut app).await;
        app.handle_action(AppAction::Submit).await;

        assert_eq!(app.route, Route::Job { id: "3".to_string() });
        assert_eq!(api.calls(), vec![Call::Get("3".to_string())]);
        assert_eq!(api.job("3"), Some(existing));
    }

    #[tokio::test]
    async fn test_partial_edit_sends_only_the_edited_field() {
        let mut existing = job("4", "Analyst");
        existing.description = "Line one\r\nLine two\n".to_string();
        existing.location = " Boston ".to_string();
        let api = Arc::new(MockJobsApi::with_jobs(vec![existing]));
        let mut app = app_with(api.clone());

        app.navigate("/edit-job/4");
        settle(&mut app).await;
        app.handle_action(AppAction::NextField).await;
        app.handle_action(AppAction::Input(KeyEvent::new(KeyCode::End, KeyModifiers::NONE)))
            .await;
        app.handle_action(key('!')).await;
        app.handle_action(AppAction::Submit).await;
        settle(&mut app).await;

        let stored = api.job("4").unwrap();
        assert_eq!(stored.title, "Analyst!");
        assert_eq!(stored.description, "Line one\r\nLine two\n");
        assert_eq!(stored.location, " Boston ");
    }

    #[tokio::test]
    async fn test_back_after_create_skips_the_form() {
        let api = Arc::new(MockJobsApi::with_jobs(Vec::new()));
        let mut app = app_with(api);

        app.navigate("/add-job");
        let Page::AddJob(form) = &mut app.page else {
            panic!("add page not mounted");
        };
        *form = JobForm::from_job(&job("ignored", "Platform Engineer"));
        app.handle_action(AppAction::Submit).await;
        settle(&mut app).await;
        assert_eq!(app.route, Route::Jobs);

        app.handle_action(AppAction::Back).await;
        assert_eq!(app.route, Route::Home);
    }

    #[tokio::test]
    async fn test_history_is_bounded() {
        let api = Arc::new(MockJobsApi::default());
        let mut app = app_with(api);

        for i in 0..(HISTORY_LIMIT + 10) {
            app.navigate(&format!("/missing/{}", i));
        }
        assert_eq!(app.history.len(), HISTORY_LIMIT);
        assert_eq!(
            app.history.last(),
            Some(&Route::NotFound { path: format!("/missing/{}", HISTORY_LIMIT + 8) })
        );
    }

    #[tokio::test]
    async fn test_goto_prompt_and_back() {
        let api = Arc::new(MockJobsApi::default());
        let mut app = app_with(api);

        app.navigate("/jobs");
        app.handle_action(AppAction::GoTo).await;
        for c in "/add-job".chars() {
            app.handle_action(key(c)).await;
        }
        app.handle_action(AppAction::Submit).await;
        assert_eq!(app.route, Route::AddJob);

        app.handle_action(AppAction::Back).await;
        assert_eq!(app.route, Route::Jobs);
    }
}
