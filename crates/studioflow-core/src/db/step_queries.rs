//! Workflow step queries, seeding and resolution.

use jiff::Timestamp;
use rusqlite::{params, Connection, OptionalExtension, TransactionBehavior};

use super::{enum_column, optional_enum_column, optional_timestamp_column, timestamp_column};
use crate::{
    error::{DatabaseResultExt, Result, StudioError},
    models::{NewStep, ProjectStage, Resolution, StepOption, StepStatus, WorkflowStep},
    workflow::{self, invariants, ResolutionPlan},
};

const STEP_COLUMNS: &str = "id, project_id, order_index, agent, phase, title, body, step_type, options_json, status, chosen_option, input_text, effect, created_at, resolved_at";
const COUNT_STEPS_SQL: &str = "SELECT COUNT(*) FROM workflow_steps WHERE project_id = ?1";
const INSERT_STEP_SQL: &str = "INSERT INTO workflow_steps (project_id, order_index, agent, phase, title, body, step_type, options_json, status, effect, created_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)";
const UPDATE_PROJECT_STAGE_SQL: &str =
    "UPDATE projects SET stage = ?1, updated_at = ?2 WHERE id = ?3";
const RESOLVE_STEP_SQL: &str = "UPDATE workflow_steps SET status = 'resolved', chosen_option = ?1, input_text = ?2, options_json = ?3, resolved_at = ?4 WHERE id = ?5 AND project_id = ?6 AND status = 'active'";
const ACTIVATE_STEP_SQL: &str = "UPDATE workflow_steps SET status = 'active' WHERE id = ?1 AND project_id = ?2 AND status = 'pending'";
const UPDATE_STEP_BODY_SQL: &str =
    "UPDATE workflow_steps SET body = ?1 WHERE id = ?2 AND project_id = ?3 AND status = 'pending'";

impl super::Database {
    /// Helper function to construct a WorkflowStep from a database row
    fn build_step_from_row(row: &rusqlite::Row) -> rusqlite::Result<WorkflowStep> {
        let options = match row.get::<_, Option<String>>(8)? {
            Some(json) => serde_json::from_str::<Vec<StepOption>>(&json).map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(
                    8,
                    rusqlite::types::Type::Text,
                    Box::new(e),
                )
            })?,
            None => Vec::new(),
        };

        Ok(WorkflowStep {
            id: row.get::<_, i64>(0)? as u64,
            project_id: row.get::<_, i64>(1)? as u64,
            order_index: row.get::<_, i64>(2)? as u32,
            agent: enum_column(row, 3)?,
            phase: enum_column(row, 4)?,
            title: row.get(5)?,
            body: row.get(6)?,
            step_type: enum_column(row, 7)?,
            options,
            status: enum_column(row, 9)?,
            chosen_option: row.get(10)?,
            input_text: row.get(11)?,
            effect: optional_enum_column(row, 12)?,
            created_at: timestamp_column(row, 13)?,
            resolved_at: optional_timestamp_column(row, 14)?,
        })
    }

    pub(super) fn load_steps(
        connection: &Connection,
        project_id: u64,
    ) -> Result<Vec<WorkflowStep>> {
        let mut stmt = connection
            .prepare(&format!(
                "SELECT {STEP_COLUMNS} FROM workflow_steps WHERE project_id = ?1 ORDER BY order_index"
            ))
            .db_context("Failed to prepare query")?;

        let steps = stmt
            .query_map(params![project_id as i64], Self::build_step_from_row)
            .db_context("Failed to query steps")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to collect steps")?;

        Ok(steps)
    }

    /// Retrieves all steps of a project ordered by `order_index`.
    pub fn get_steps(&self, project_id: u64) -> Result<Vec<WorkflowStep>> {
        Self::load_steps(&self.connection, project_id)
    }

    /// Retrieves a single step by its ID.
    pub fn get_step(&self, step_id: u64) -> Result<Option<WorkflowStep>> {
        self.connection
            .query_row(
                &format!("SELECT {STEP_COLUMNS} FROM workflow_steps WHERE id = ?1"),
                params![step_id as i64],
                Self::build_step_from_row,
            )
            .optional()
            .db_context("Failed to query step")
    }

    /// Whether the project already has workflow steps.
    pub fn has_steps(&self, project_id: u64) -> Result<bool> {
        let count: i64 = self
            .connection
            .query_row(COUNT_STEPS_SQL, params![project_id as i64], |row| row.get(0))
            .db_context("Failed to count steps")?;
        Ok(count > 0)
    }

    /// Insert `steps` as the project's workflow, activating the first one.
    ///
    /// Returns `false` without writing when the project already has steps, so
    /// concurrent or repeated seeding never duplicates a sequence.
    pub fn seed_workflow(&mut self, project_id: u64, steps: &[NewStep]) -> Result<bool> {
        let tx = self
            .connection
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .db_context("Failed to begin transaction")?;

        if !Self::project_exists(&tx, project_id)? {
            return Err(StudioError::ProjectNotFound { id: project_id });
        }

        let existing: i64 = tx
            .query_row(COUNT_STEPS_SQL, params![project_id as i64], |row| row.get(0))
            .db_context("Failed to count steps")?;
        if existing > 0 {
            return Ok(false);
        }

        let now_str = Timestamp::now().to_string();

        for (index, step) in steps.iter().enumerate() {
            let status = if index == 0 {
                StepStatus::Active
            } else {
                StepStatus::Pending
            };
            let options_json = if step.options.is_empty() {
                None
            } else {
                Some(serde_json::to_string(&step.options)?)
            };

            tx.execute(
                INSERT_STEP_SQL,
                params![
                    project_id as i64,
                    index as i64,
                    step.agent.as_str(),
                    step.phase.as_str(),
                    &step.title,
                    &step.body,
                    step.step_type.as_str(),
                    options_json.as_deref(),
                    status.as_str(),
                    step.effect.map(|e| e.as_str()),
                    &now_str
                ],
            )
            .db_context("Failed to insert workflow step")?;
        }

        let stage = steps
            .first()
            .map_or(ProjectStage::Complete, |step| step.phase.into());
        tx.execute(
            UPDATE_PROJECT_STAGE_SQL,
            params![stage.as_str(), &now_str, project_id as i64],
        )
        .db_context("Failed to update project stage")?;

        invariants::check(project_id, &Self::load_steps(&tx, project_id)?)?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(true)
    }

    /// Validate and apply a resolution atomically.
    ///
    /// The project and its steps are read under the write lock, so the
    /// resolution is judged against the state it will be applied to. On any
    /// error nothing is written. Returns the project's steps after the change.
    pub fn resolve_step(
        &mut self,
        project_id: u64,
        step_id: u64,
        resolution: &Resolution,
    ) -> Result<Vec<WorkflowStep>> {
        let tx = self
            .connection
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .db_context("Failed to begin transaction")?;

        let project = Self::load_project(&tx, project_id)?
            .ok_or(StudioError::ProjectNotFound { id: project_id })?;
        let steps = Self::load_steps(&tx, project_id)?;

        let plan = workflow::plan(&project, &steps, step_id, resolution)?;
        Self::apply_plan(&tx, &plan)?;

        let steps = Self::load_steps(&tx, project_id)?;
        invariants::check(project_id, &steps)?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(steps)
    }

    fn apply_plan(connection: &Connection, plan: &ResolutionPlan) -> Result<()> {
        let now_str = Timestamp::now().to_string();
        let project_id = plan.project_id as i64;
        let options_json = if plan.options.is_empty() {
            None
        } else {
            Some(serde_json::to_string(&plan.options)?)
        };

        let resolved = connection
            .execute(
                RESOLVE_STEP_SQL,
                params![
                    plan.chosen_option.as_deref(),
                    plan.input_text.as_deref(),
                    options_json.as_deref(),
                    &now_str,
                    plan.step_id as i64,
                    project_id
                ],
            )
            .db_context("Failed to resolve step")?;
        if resolved != 1 {
            return Err(StudioError::InvalidState {
                step_id: plan.step_id,
                reason: "step is no longer active".to_string(),
            });
        }

        if let Some(next_id) = plan.next_step_id {
            connection
                .execute(ACTIVATE_STEP_SQL, params![next_id as i64, project_id])
                .db_context("Failed to activate next step")?;
        }

        for (step_id, body) in &plan.body_updates {
            connection
                .execute(UPDATE_STEP_BODY_SQL, params![body, *step_id as i64, project_id])
                .db_context("Failed to update step body")?;
        }

        Self::insert_deliverables(connection, plan.project_id, &plan.deliverables, &now_str)?;
        Self::update_project(connection, plan.project_id, &plan.project, &now_str)?;

        Ok(())
    }
}
