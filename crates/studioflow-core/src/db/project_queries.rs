//! Project CRUD operations and queries.

use jiff::Timestamp;
use rusqlite::{params, Connection, OptionalExtension};

use super::{enum_column, optional_enum_column, timestamp_column};
use crate::{
    error::{DatabaseResultExt, Result, StudioError},
    models::{Project, ProjectCategory, ProjectStage},
    workflow::ProjectChanges,
};

const INSERT_PROJECT_SQL: &str = "INSERT INTO projects (name, category, budget_cap, stage, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6)";
const PROJECT_COLUMNS: &str = "id, name, category, budget_cap, stage, client_brief, executive_summary, review_status, created_at, updated_at";
const CHECK_PROJECT_EXISTS_SQL: &str = "SELECT EXISTS(SELECT 1 FROM projects WHERE id = ?1)";
const DELETE_PROJECT_SQL: &str = "DELETE FROM projects WHERE id = ?1";
const UPDATE_PROJECT_SQL: &str = "UPDATE projects SET stage = COALESCE(?1, stage), client_brief = COALESCE(?2, client_brief), executive_summary = COALESCE(?3, executive_summary), review_status = COALESCE(?4, review_status), updated_at = ?5 WHERE id = ?6";

impl super::Database {
    fn build_project_from_row(row: &rusqlite::Row) -> rusqlite::Result<Project> {
        Ok(Project {
            id: row.get::<_, i64>(0)? as u64,
            name: row.get(1)?,
            category: enum_column(row, 2)?,
            budget_cap: row.get::<_, Option<i64>>(3)?.map(|cap| cap.max(0) as u64),
            stage: enum_column(row, 4)?,
            client_brief: row.get(5)?,
            executive_summary: row.get(6)?,
            review_status: optional_enum_column(row, 7)?,
            created_at: timestamp_column(row, 8)?,
            updated_at: timestamp_column(row, 9)?,
            steps: Vec::new(),
        })
    }

    /// Load a project row without its steps.
    pub(super) fn load_project(connection: &Connection, id: u64) -> Result<Option<Project>> {
        connection
            .query_row(
                &format!("SELECT {PROJECT_COLUMNS} FROM projects WHERE id = ?1"),
                params![id as i64],
                Self::build_project_from_row,
            )
            .optional()
            .db_context("Failed to query project")
    }

    pub(super) fn project_exists(connection: &Connection, id: u64) -> Result<bool> {
        connection
            .query_row(CHECK_PROJECT_EXISTS_SQL, params![id as i64], |row| row.get(0))
            .db_context("Failed to check project existence")
    }

    /// Write the project fields a resolution touched.
    pub(super) fn update_project(
        connection: &Connection,
        id: u64,
        changes: &ProjectChanges,
        now: &str,
    ) -> Result<()> {
        connection
            .execute(
                UPDATE_PROJECT_SQL,
                params![
                    changes.stage.map(|s| s.as_str()),
                    changes.client_brief.as_deref(),
                    changes.executive_summary.as_deref(),
                    changes.review_status.map(|r| r.as_str()),
                    now,
                    id as i64
                ],
            )
            .db_context("Failed to update project")?;
        Ok(())
    }

    /// Creates a new project. The workflow is not seeded here.
    pub fn create_project(
        &mut self,
        name: &str,
        category: ProjectCategory,
        budget_cap: Option<u64>,
    ) -> Result<Project> {
        let name = name.trim();
        if name.is_empty() {
            return Err(StudioError::InvalidInput {
                field: "name".to_string(),
                reason: "Project name must not be empty".to_string(),
            });
        }

        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let now = Timestamp::now();
        let now_str = now.to_string();

        tx.execute(
            INSERT_PROJECT_SQL,
            params![
                name,
                category.as_str(),
                budget_cap.map(|cap| cap as i64),
                ProjectStage::Intake.as_str(),
                &now_str,
                &now_str
            ],
        )
        .db_context("Failed to insert project")?;

        let id = tx.last_insert_rowid() as u64;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(Project {
            id,
            name: name.to_string(),
            category,
            budget_cap,
            stage: ProjectStage::Intake,
            client_brief: None,
            executive_summary: None,
            review_status: None,
            created_at: now,
            updated_at: now,
            steps: Vec::new(),
        })
    }

    /// Retrieves a project by its ID, with its steps in order.
    pub fn get_project(&self, id: u64) -> Result<Option<Project>> {
        let mut project = Self::load_project(&self.connection, id)?;

        if let Some(ref mut project) = project {
            project.steps = self.get_steps(project.id)?;
        }

        Ok(project)
    }

    /// Lists all projects, newest first. Steps are not loaded.
    pub fn list_projects(&self) -> Result<Vec<Project>> {
        let mut stmt = self
            .connection
            .prepare(&format!(
                "SELECT {PROJECT_COLUMNS} FROM projects ORDER BY id DESC"
            ))
            .db_context("Failed to prepare query")?;

        let projects = stmt
            .query_map([], Self::build_project_from_row)
            .db_context("Failed to query projects")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to collect projects")?;

        Ok(projects)
    }

    /// Deletes a project together with its steps and deliverables.
    pub fn delete_project(&mut self, id: u64) -> Result<()> {
        let affected = self
            .connection
            .execute(DELETE_PROJECT_SQL, params![id as i64])
            .db_context("Failed to delete project")?;

        if affected == 0 {
            return Err(StudioError::ProjectNotFound { id });
        }

        Ok(())
    }
}
