use std::sync::{
    Arc, Mutex,
    atomic::{AtomicBool, AtomicUsize, Ordering},
};

use campusfeed::{
    FeedDb, NewProfile, NewProject, Notifier, ProfileStore, Project, ProjectQuery, ProjectStore,
    Severity, UserProfile,
};

/// Creates a FeedDb backed by a temporary database file.
/// Returns both the store and the temp directory (which must be kept alive).
pub async fn create_test_store() -> (FeedDb, tempfile::TempDir) {
    let dir = tempfile::TempDir::new().expect("Failed to create temp directory");
    let path = dir.path().join("feed.db");
    let db = FeedDb::new(&path).await.expect("Failed to create test store");
    (db, dir)
}

/// Creates a NewProject with test defaults for store round-trip tests.
pub fn make_new_project(title: &str, college: Option<&str>, women_led: bool) -> NewProject {
    NewProject {
        title: title.to_string(),
        description: format!("{title} description"),
        skills: vec!["Rust".to_string()],
        team_size: "3-4".to_string(),
        duration: "2 months".to_string(),
        is_women_led: women_led,
        creator_name: "Test Creator".to_string(),
        creator_id: "creator-1".to_string(),
        college: college.map(str::to_string),
        applicants: 0,
    }
}

/// Creates an in-memory Project directly, bypassing the store, for pure
/// view-filter and fake-store tests.
pub fn make_project(id: &str, title: &str, college: Option<&str>, women_led: bool) -> Project {
    Project {
        id: id.to_string(),
        title: title.to_string(),
        description: String::new(),
        skills: Vec::new(),
        team_size: "2".to_string(),
        duration: "1 month".to_string(),
        is_women_led: women_led,
        creator_name: "Creator".to_string(),
        creator_id: "creator-1".to_string(),
        college: college.map(str::to_string),
        created_at: "2026-01-01T00:00:00Z".to_string(),
        applicants: 0,
    }
}

pub fn make_profile(id: &str, college: Option<&str>) -> NewProfile {
    NewProfile {
        id: id.to_string(),
        name: format!("User {id}"),
        college: college.map(str::to_string),
    }
}

pub fn make_user_profile(id: &str, college: Option<&str>) -> UserProfile {
    UserProfile {
        id: id.to_string(),
        name: format!("User {id}"),
        college: college.map(str::to_string),
    }
}

/// Notifier fake that records every alert for assertions.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    pub alerts: Arc<Mutex<Vec<(String, Severity)>>>,
}

impl RecordingNotifier {
    pub fn alerts(&self) -> Vec<(String, Severity)> {
        self.alerts.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str, severity: Severity) {
        self.alerts
            .lock()
            .unwrap()
            .push((message.to_string(), severity));
    }
}

/// Store fake with switchable failure modes. Clones share the failure flags
/// and the call counter, so a test can keep a handle after moving a clone
/// into the controller.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    pub projects: Vec<Project>,
    pub profiles: Vec<UserProfile>,
    pub fail_queries: Arc<AtomicBool>,
    pub fail_profiles: Arc<AtomicBool>,
    pub query_calls: Arc<AtomicUsize>,
}

impl InMemoryStore {
    pub fn with_projects(projects: Vec<Project>) -> Self {
        Self {
            projects,
            ..Self::default()
        }
    }

    pub fn query_calls(&self) -> usize {
        self.query_calls.load(Ordering::SeqCst)
    }
}

impl ProjectStore for InMemoryStore {
    async fn query_projects(&self, query: &ProjectQuery) -> anyhow::Result<Vec<Project>> {
        self.query_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_queries.load(Ordering::SeqCst) {
            anyhow::bail!("project store unavailable");
        }
        Ok(self
            .projects
            .iter()
            .filter(|p| query.women_led.is_none_or(|flag| p.is_women_led == flag))
            .cloned()
            .collect())
    }

    async fn get_project(&self, id: &str) -> anyhow::Result<Option<Project>> {
        if self.fail_queries.load(Ordering::SeqCst) {
            anyhow::bail!("project store unavailable");
        }
        Ok(self.projects.iter().find(|p| p.id == id).cloned())
    }
}

impl ProfileStore for InMemoryStore {
    async fn get_profile(&self, id: &str) -> anyhow::Result<Option<UserProfile>> {
        if self.fail_profiles.load(Ordering::SeqCst) {
            anyhow::bail!("profile store unavailable");
        }
        Ok(self.profiles.iter().find(|p| p.id == id).cloned())
    }
}
