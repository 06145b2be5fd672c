mod profile;
mod project;
mod state;

use std::{path::Path, sync::Arc};

use anyhow::Context;
use sqlx::{Connection, Row, Sqlite, pool::PoolConnection, sqlite::SqliteRow};
use state::StoreState;
use time::{OffsetDateTime, format_description::well_known::Rfc3339};
use uuid::Uuid;

pub use profile::{NewProfile, ProfileStore, UserProfile};
pub use project::{NewProject, Project, ProjectQuery, ProjectStore};

const PROJECT_COLUMNS: &str = "id, title, description, team_size, duration, is_women_led, \
     creator_name, creator_id, college, created_at, applicants";

/// SQLite-backed document store holding the `projects` and `profiles`
/// collections. Cloning is cheap; clones share the same pool.
#[derive(Debug, Clone)]
pub struct FeedDb {
    state: Arc<StoreState>,
}

impl FeedDb {
    pub async fn new<P: AsRef<Path>>(db_file: P) -> anyhow::Result<Self> {
        Ok(Self {
            state: Arc::new(StoreState::new(db_file).await?),
        })
    }

    /// Checkpoint and release the underlying database. Required before the
    /// file is reopened by another store instance.
    pub async fn close(&self) -> anyhow::Result<()> {
        self.state.close().await
    }

    /// Insert a project, assigning it a fresh opaque identifier and the
    /// current timestamp.
    pub async fn add_project(&self, project: &NewProject) -> anyhow::Result<Project> {
        let id = Uuid::new_v4().to_string();
        let created_at = OffsetDateTime::now_utc()
            .format(&Rfc3339)
            .context("Failed to format creation timestamp")?;

        let mut conn = self.state.conn().await?;
        let mut tx = conn.begin().await?;
        sqlx::query(
            "INSERT INTO projects (id, title, description, team_size, duration, is_women_led, \
             creator_name, creator_id, college, created_at, applicants) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&id)
        .bind(&project.title)
        .bind(&project.description)
        .bind(&project.team_size)
        .bind(&project.duration)
        .bind(project.is_women_led)
        .bind(&project.creator_name)
        .bind(&project.creator_id)
        .bind(&project.college)
        .bind(&created_at)
        .bind(project.applicants)
        .execute(&mut *tx)
        .await?;

        for (position, skill) in project.skills.iter().enumerate() {
            sqlx::query(
                "INSERT INTO project_skills (project_id, position, skill) VALUES (?, ?, ?)",
            )
            .bind(&id)
            .bind(position as i64)
            .bind(skill)
            .execute(&mut *tx)
            .await?;
        }
        tx.commit().await?;

        Ok(Project {
            id,
            title: project.title.clone(),
            description: project.description.clone(),
            skills: project.skills.clone(),
            team_size: project.team_size.clone(),
            duration: project.duration.clone(),
            is_women_led: project.is_women_led,
            creator_name: project.creator_name.clone(),
            creator_id: project.creator_id.clone(),
            college: project.college.clone(),
            created_at,
            applicants: project.applicants,
        })
    }

    pub async fn add_profile(&self, profile: &NewProfile) -> anyhow::Result<UserProfile> {
        let mut conn = self.state.conn().await?;
        sqlx::query("INSERT INTO profiles (id, name, college) VALUES (?, ?, ?)")
            .bind(&profile.id)
            .bind(&profile.name)
            .bind(&profile.college)
            .execute(&mut *conn)
            .await?;
        Ok(UserProfile {
            id: profile.id.clone(),
            name: profile.name.clone(),
            college: profile.college.clone(),
        })
    }

    async fn fetch_skills(
        conn: &mut PoolConnection<Sqlite>,
        project_id: &str,
    ) -> anyhow::Result<Vec<String>> {
        let rows = sqlx::query(
            "SELECT skill FROM project_skills WHERE project_id = ? ORDER BY position",
        )
        .bind(project_id)
        .fetch_all(&mut **conn)
        .await?;
        rows.iter()
            .map(|row| Ok(row.try_get("skill")?))
            .collect()
    }
}

fn project_from_row(row: &SqliteRow, skills: Vec<String>) -> anyhow::Result<Project> {
    Ok(Project {
        id: row.try_get("id")?,
        title: row.try_get("title")?,
        description: row.try_get("description")?,
        skills,
        team_size: row.try_get("team_size")?,
        duration: row.try_get("duration")?,
        is_women_led: row.try_get("is_women_led")?,
        creator_name: row.try_get("creator_name")?,
        creator_id: row.try_get("creator_id")?,
        college: row.try_get("college")?,
        created_at: row.try_get("created_at")?,
        applicants: row.try_get("applicants")?,
    })
}

impl ProjectStore for FeedDb {
    async fn query_projects(&self, query: &ProjectQuery) -> anyhow::Result<Vec<Project>> {
        let mut conn = self.state.conn().await?;
        let rows = match query.women_led {
            Some(flag) => {
                sqlx::query(&format!(
                    "SELECT {PROJECT_COLUMNS} FROM projects WHERE is_women_led = ? ORDER BY rowid"
                ))
                .bind(flag)
                .fetch_all(&mut *conn)
                .await?
            }
            None => {
                sqlx::query(&format!(
                    "SELECT {PROJECT_COLUMNS} FROM projects ORDER BY rowid"
                ))
                .fetch_all(&mut *conn)
                .await?
            }
        };

        let mut projects = Vec::with_capacity(rows.len());
        for row in &rows {
            let id: String = row.try_get("id")?;
            let skills = Self::fetch_skills(&mut conn, &id).await?;
            projects.push(project_from_row(row, skills)?);
        }
        Ok(projects)
    }

    async fn get_project(&self, id: &str) -> anyhow::Result<Option<Project>> {
        let mut conn = self.state.conn().await?;
        let row = sqlx::query(&format!(
            "SELECT {PROJECT_COLUMNS} FROM projects WHERE id = ?"
        ))
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?;
        let Some(row) = row else {
            return Ok(None);
        };
        let skills = Self::fetch_skills(&mut conn, id).await?;
        Ok(Some(project_from_row(&row, skills)?))
    }
}

impl ProfileStore for FeedDb {
    async fn get_profile(&self, id: &str) -> anyhow::Result<Option<UserProfile>> {
        let mut conn = self.state.conn().await?;
        let row = sqlx::query("SELECT id, name, college FROM profiles WHERE id = ?")
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?;
        row.map(|row| {
            Ok(UserProfile {
                id: row.try_get("id")?,
                name: row.try_get("name")?,
                college: row.try_get("college")?,
            })
        })
        .transpose()
    }
}
