//! Deliverable inserts and listing.

use rusqlite::{params, Connection};

use super::{enum_column, timestamp_column};
use crate::{
    error::{DatabaseResultExt, Result, StudioError},
    models::{Deliverable, NewDeliverable},
};

const INSERT_DELIVERABLE_SQL: &str = "INSERT INTO deliverables (project_id, title, catalog_key, cost, phase, owner, created_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)";
const SELECT_DELIVERABLES_SQL: &str = "SELECT id, project_id, title, catalog_key, cost, phase, owner, created_at FROM deliverables WHERE project_id = ?1 ORDER BY id";

impl super::Database {
    fn build_deliverable_from_row(row: &rusqlite::Row) -> rusqlite::Result<Deliverable> {
        Ok(Deliverable {
            id: row.get::<_, i64>(0)? as u64,
            project_id: row.get::<_, i64>(1)? as u64,
            title: row.get(2)?,
            catalog_key: row.get(3)?,
            cost: row.get::<_, i64>(4)?.max(0) as u64,
            phase: row.get(5)?,
            owner: enum_column(row, 6)?,
            created_at: timestamp_column(row, 7)?,
        })
    }

    pub(super) fn insert_deliverables(
        connection: &Connection,
        project_id: u64,
        deliverables: &[NewDeliverable],
        now: &str,
    ) -> Result<()> {
        if deliverables.is_empty() {
            return Ok(());
        }

        let mut stmt = connection
            .prepare(INSERT_DELIVERABLE_SQL)
            .db_context("Failed to prepare deliverable insert")?;

        for deliverable in deliverables {
            stmt.execute(params![
                project_id as i64,
                &deliverable.title,
                deliverable.catalog_key.as_deref(),
                deliverable.cost as i64,
                deliverable.phase.as_deref(),
                deliverable.owner.as_str(),
                now
            ])
            .db_context("Failed to insert deliverable")?;
        }

        Ok(())
    }

    /// Lists a project's deliverables in creation order.
    pub fn list_deliverables(&self, project_id: u64) -> Result<Vec<Deliverable>> {
        if !Self::project_exists(&self.connection, project_id)? {
            return Err(StudioError::ProjectNotFound { id: project_id });
        }

        let mut stmt = self
            .connection
            .prepare(SELECT_DELIVERABLES_SQL)
            .db_context("Failed to prepare query")?;

        let deliverables = stmt
            .query_map(params![project_id as i64], Self::build_deliverable_from_row)
            .db_context("Failed to query deliverables")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to collect deliverables")?;

        Ok(deliverables)
    }
}
