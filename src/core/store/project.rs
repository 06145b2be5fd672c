use serde::{Deserialize, Serialize};

/// A project card as stored in the `projects` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub skills: Vec<String>,
    pub team_size: String,
    pub duration: String,
    pub is_women_led: bool,
    pub creator_name: String,
    pub creator_id: String,
    pub college: Option<String>,
    pub created_at: String,
    pub applicants: i64,
}

impl Project {
    /// Path of the detail view for this project.
    pub fn detail_path(&self) -> String {
        format!("/projects/{}", self.id)
    }
}

/// Fields for a project about to be inserted. The store assigns the
/// identifier and the creation timestamp.
#[derive(Debug, Clone)]
pub struct NewProject {
    pub title: String,
    pub description: String,
    pub skills: Vec<String>,
    pub team_size: String,
    pub duration: String,
    pub is_women_led: bool,
    pub creator_name: String,
    pub creator_id: String,
    pub college: Option<String>,
    pub applicants: i64,
}

/// Server-side equality constraints for a project query. A `None` field adds
/// no constraint; the default query is a full collection scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProjectQuery {
    pub women_led: Option<bool>,
}

pub trait ProjectStore {
    fn query_projects(
        &self,
        query: &ProjectQuery,
    ) -> impl Future<Output = anyhow::Result<Vec<Project>>>;
    fn get_project(&self, id: &str) -> impl Future<Output = anyhow::Result<Option<Project>>>;
}
