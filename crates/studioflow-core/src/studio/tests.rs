//! Tests for the studio module.

use tempfile::TempDir;

use super::*;
use crate::{
    error::{ErrorKind, StudioError},
    models::{DeliverableOwner, ProjectStage, ReviewStatus, StepStatus, StepType},
    params::{CreateProject, Id, ProjectId, ResolveStep},
};

/// Helper function to create a test studio
async fn create_test_studio() -> (TempDir, Studio) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let studio = StudioBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create studio");
    (temp_dir, studio)
}

async fn create_project(studio: &Studio, budget_cap: Option<u64>) -> ProjectId {
    let project = studio
        .create_project(&CreateProject {
            name: "Northwind Rebrand".to_string(),
            category: Some("brand".to_string()),
            budget_cap,
        })
        .await
        .expect("Failed to create project");
    ProjectId {
        project_id: project.id,
    }
}

fn resolve(
    project: &ProjectId,
    step_id: u64,
    action: &str,
    chosen_option: Option<&str>,
    input_text: Option<&str>,
) -> ResolveStep {
    ResolveStep {
        project_id: project.project_id,
        step_id,
        action: action.to_string(),
        chosen_option: chosen_option.map(String::from),
        input_text: input_text.map(String::from),
    }
}

#[tokio::test]
async fn test_get_workflow_seeds_once() {
    let (_temp_dir, studio) = create_test_studio().await;
    let project = create_project(&studio, None).await;

    assert!(!studio.is_seeded(&project).await.unwrap());

    let first = studio.get_workflow(&project).await.unwrap();
    let second = studio.get_workflow(&project).await.unwrap();

    assert_eq!(first.len(), 7);
    assert_eq!(first, second);
    assert!(studio.is_seeded(&project).await.unwrap());
    assert!(!studio.seed(&project).await.unwrap());

    let orders: Vec<u32> = first.iter().map(|s| s.order_index).collect();
    assert_eq!(orders, (0..7).collect::<Vec<u32>>());
    assert_eq!(first[0].status, StepStatus::Active);
    assert!(first[1..].iter().all(|s| s.status == StepStatus::Pending));

    let shown = studio.get_project(&Id { id: project.project_id }).await.unwrap().unwrap();
    assert_eq!(shown.stage, ProjectStage::Strategy);
}

#[tokio::test]
async fn test_concurrent_seeding_creates_one_sequence() {
    let (_temp_dir, studio) = create_test_studio().await;
    let project = create_project(&studio, None).await;

    let (a, b) = tokio::join!(studio.seed(&project), studio.seed(&project));
    assert_ne!(a.unwrap(), b.unwrap());

    let steps = studio.get_workflow(&project).await.unwrap();
    assert_eq!(steps.len(), 7);
}

#[tokio::test]
async fn test_brand_project_walkthrough() {
    let (_temp_dir, studio) = create_test_studio().await;
    let project = create_project(&studio, Some(3000)).await;
    let steps = studio.get_workflow(&project).await.unwrap();
    let ids: Vec<u64> = steps.iter().map(|s| s.id).collect();

    let after = studio
        .resolve_step(&resolve(&project, ids[0], "input", None, Some("A bakery rebrand")))
        .await
        .unwrap();
    assert_eq!(after[0].status, StepStatus::Resolved);
    assert_eq!(after[0].input_text.as_deref(), Some("A bakery rebrand"));
    assert_eq!(after[1].status, StepStatus::Active);

    studio
        .resolve_step(&resolve(&project, ids[1], "choose", Some("B"), None))
        .await
        .unwrap();
    studio
        .resolve_step(&resolve(&project, ids[2], "approve", Some("approve"), None))
        .await
        .unwrap();

    let after = studio
        .resolve_step(&resolve(
            &project,
            ids[3],
            "choose",
            Some(r#"["logo_system"]"#),
            Some("Packaging Design"),
        ))
        .await
        .unwrap();
    assert_eq!(after[3].chosen_option.as_deref(), Some(r#"["logo_system"]"#));
    assert!(after[3].options.iter().filter(|o| o.is_selected()).count() == 1);
    assert!(after[6].body.contains("Packaging Design"));

    let deliverables = studio.list_deliverables(&project).await.unwrap();
    assert_eq!(deliverables.len(), 2);
    assert_eq!(deliverables[0].cost, 1500);
    assert_eq!(deliverables[0].owner, DeliverableOwner::Agent);
    assert_eq!(deliverables[1].title, "Packaging Design");
    assert_eq!(deliverables[1].cost, 0);
    assert_eq!(deliverables[1].owner, DeliverableOwner::Founder);

    // Rejecting the visual direction still moves the workflow on
    let after = studio
        .resolve_step(&resolve(&project, ids[4], "reject", Some("reject"), None))
        .await
        .unwrap();
    assert_eq!(after[5].status, StepStatus::Active);

    studio
        .resolve_step(&resolve(&project, ids[5], "acknowledge", None, None))
        .await
        .unwrap();
    let done = studio
        .resolve_step(&resolve(&project, ids[6], "ack", None, Some("Looks right")))
        .await
        .unwrap();
    assert!(done.iter().all(|s| s.status == StepStatus::Resolved));
    assert!(studio.active_step(&project).await.unwrap().is_none());

    let project = studio.get_project(&Id { id: project.project_id }).await.unwrap().unwrap();
    assert_eq!(project.stage, ProjectStage::Complete);
    assert_eq!(project.client_brief.as_deref(), Some("A bakery rebrand"));
    assert!(project.executive_summary.is_some());
    assert_eq!(project.review_status, Some(ReviewStatus::Rejected));
}

#[tokio::test]
async fn test_re_resolve_is_invalid_state_and_keeps_choice() {
    let (_temp_dir, studio) = create_test_studio().await;
    let project = create_project(&studio, None).await;
    let steps = studio.get_workflow(&project).await.unwrap();

    studio
        .resolve_step(&resolve(&project, steps[0].id, "input", None, Some("Brief")))
        .await
        .unwrap();
    let err = studio
        .resolve_step(&resolve(&project, steps[0].id, "input", None, Some("Other")))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidState);

    let steps = studio.get_workflow(&project).await.unwrap();
    assert_eq!(steps[0].input_text.as_deref(), Some("Brief"));
}

#[tokio::test]
async fn test_pending_step_cannot_be_resolved() {
    let (_temp_dir, studio) = create_test_studio().await;
    let project = create_project(&studio, None).await;
    let steps = studio.get_workflow(&project).await.unwrap();

    let err = studio
        .resolve_step(&resolve(&project, steps[1].id, "choose", Some("A"), None))
        .await
        .unwrap_err();
    assert!(matches!(err, StudioError::InvalidState { .. }));
}

#[tokio::test]
async fn test_illegal_action_leaves_step_active() {
    let (_temp_dir, studio) = create_test_studio().await;
    let project = create_project(&studio, None).await;
    let steps = studio.get_workflow(&project).await.unwrap();

    for (action, option) in [("approve", Some("approve")), ("dance", None), ("input", None)] {
        let err = studio
            .resolve_step(&resolve(&project, steps[0].id, action, option, None))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidAction, "action {action}");
    }

    let active = studio.active_step(&project).await.unwrap().unwrap();
    assert_eq!(active.id, steps[0].id);
    assert_eq!(active.step_type, StepType::InputNeeded);
}

#[tokio::test]
async fn test_foreign_step_is_not_found() {
    let (_temp_dir, studio) = create_test_studio().await;
    let first = create_project(&studio, None).await;
    let second = create_project(&studio, None).await;
    let foreign = studio.get_workflow(&second).await.unwrap();
    studio.get_workflow(&first).await.unwrap();

    let err = studio
        .resolve_step(&resolve(&first, foreign[0].id, "input", None, Some("Brief")))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);

    let untouched = studio.active_step(&second).await.unwrap().unwrap();
    assert_eq!(untouched.id, foreign[0].id);
}

#[tokio::test]
async fn test_parallel_resolution_has_one_winner() {
    let (_temp_dir, studio) = create_test_studio().await;
    let project = create_project(&studio, None).await;
    let steps = studio.get_workflow(&project).await.unwrap();

    let a = resolve(&project, steps[0].id, "input", None, Some("First"));
    let b = resolve(&project, steps[0].id, "input", None, Some("Second"));
    let (ra, rb) = tokio::join!(studio.resolve_step(&a), studio.resolve_step(&b));

    assert_eq!(ra.is_ok() as u8 + rb.is_ok() as u8, 1);
    let loser = ra.err().or(rb.err()).unwrap();
    assert_eq!(loser.kind(), ErrorKind::InvalidState);

    let steps = studio.get_workflow(&project).await.unwrap();
    let active = steps.iter().filter(|s| s.status == StepStatus::Active).count();
    assert_eq!(active, 1);
}

#[tokio::test]
async fn test_separate_instances_serialize_on_the_database() {
    let (temp_dir, studio) = create_test_studio().await;
    let other = StudioBuilder::new()
        .with_database_path(Some(temp_dir.path().join("test.db")))
        .build()
        .await
        .unwrap();
    let project = create_project(&studio, None).await;
    let steps = studio.get_workflow(&project).await.unwrap();

    let a = resolve(&project, steps[0].id, "input", None, Some("First"));
    let b = resolve(&project, steps[0].id, "input", None, Some("Second"));
    let (ra, rb) = tokio::join!(studio.resolve_step(&a), other.resolve_step(&b));

    assert_eq!(ra.is_ok() as u8 + rb.is_ok() as u8, 1);
}

#[tokio::test]
async fn test_unknown_project() {
    let (_temp_dir, studio) = create_test_studio().await;
    let missing = ProjectId { project_id: 404 };

    assert_eq!(
        studio.get_workflow(&missing).await.unwrap_err().kind(),
        ErrorKind::NotFound
    );
    assert_eq!(
        studio.list_deliverables(&missing).await.unwrap_err().kind(),
        ErrorKind::NotFound
    );
    assert!(matches!(
        studio.delete_project(&Id { id: 404 }).await,
        Err(StudioError::ProjectNotFound { id: 404 })
    ));
}

#[tokio::test]
async fn test_invalid_category_rejected() {
    let (_temp_dir, studio) = create_test_studio().await;
    let err = studio
        .create_project(&CreateProject {
            name: "Odd".to_string(),
            category: Some("sculpture".to_string()),
            budget_cap: None,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, StudioError::InvalidInput { .. }));
}

#[tokio::test]
async fn test_delete_cascades() {
    let (_temp_dir, studio) = create_test_studio().await;
    let project = create_project(&studio, None).await;
    studio.get_workflow(&project).await.unwrap();

    let deleted = studio
        .delete_project(&Id { id: project.project_id })
        .await
        .unwrap();
    assert_eq!(deleted.steps.len(), 7);
    assert!(studio.list_projects().await.unwrap().is_empty());
    assert!(studio.is_seeded(&project).await.is_err());
}

#[tokio::test]
async fn test_handlers_render_markdown() {
    let (_temp_dir, studio) = create_test_studio().await;
    let created = studio
        .create_project_result(&CreateProject {
            name: "Launch".to_string(),
            category: Some("campaign".to_string()),
            budget_cap: None,
        })
        .await
        .unwrap();
    assert!(created.to_string().contains("Created project with ID"));

    let project = ProjectId {
        project_id: created.resource.id,
    };
    let workflow = studio.workflow_result(&project).await.unwrap();
    assert!(workflow.to_string().starts_with("Progress: 0/7 resolved"));

    let result = studio
        .resolve_step_result(&resolve(&project, workflow[0].id, "input", None, Some("Go")))
        .await
        .unwrap();
    assert!(result.to_string().contains("## Next"));
    assert!(result.to_string().contains("Strategic Direction"));
}

#[tokio::test]
async fn test_unknown_action_reports_step_problems_first() {
    let (_temp_dir, studio) = create_test_studio().await;
    let project = create_project(&studio, None).await;
    let steps = studio.get_workflow(&project).await.unwrap();
    studio
        .resolve_step(&resolve(&project, steps[0].id, "input", None, Some("Brief")))
        .await
        .unwrap();

    let resolved = studio
        .resolve_step(&resolve(&project, steps[0].id, "bogus", None, None))
        .await
        .unwrap_err();
    assert_eq!(resolved.kind(), ErrorKind::InvalidState);

    let missing = studio
        .resolve_step(&resolve(&project, 999_999, "bogus", None, None))
        .await
        .unwrap_err();
    assert_eq!(missing.kind(), ErrorKind::NotFound);

    let active = studio
        .resolve_step(&resolve(&project, steps[1].id, "bogus", Some("A"), None))
        .await
        .unwrap_err();
    assert_eq!(active.kind(), ErrorKind::InvalidAction);
    assert_eq!(
        studio.active_step(&project).await.unwrap().unwrap().id,
        steps[1].id
    );
}

#[tokio::test]
async fn test_approval_rejects_contradicting_key() {
    let (_temp_dir, studio) = create_test_studio().await;
    let project = create_project(&studio, None).await;
    let steps = studio.get_workflow(&project).await.unwrap();
    studio
        .resolve_step(&resolve(&project, steps[0].id, "input", None, Some("Brief")))
        .await
        .unwrap();
    studio
        .resolve_step(&resolve(&project, steps[1].id, "choose", Some("A"), None))
        .await
        .unwrap();

    let err = studio
        .resolve_step(&resolve(&project, steps[2].id, "approve", Some("reject"), None))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidAction);

    let shown = studio.get_project(&Id { id: project.project_id }).await.unwrap().unwrap();
    assert_eq!(shown.review_status, None);
    assert_eq!(shown.steps[2].status, StepStatus::Active);

    let after = studio
        .resolve_step(&resolve(&project, steps[2].id, "approve", None, None))
        .await
        .unwrap();
    assert_eq!(after[2].chosen_option.as_deref(), Some("approve"));
}

#[tokio::test]
async fn test_missing_project_leaves_no_lock_behind() {
    let (_temp_dir, studio) = create_test_studio().await;
    let missing = ProjectId { project_id: 404 };

    for _ in 0..3 {
        let err = studio
            .resolve_step(&resolve(&missing, 1, "input", None, Some("Brief")))
            .await
            .unwrap_err();
        assert!(matches!(err, StudioError::ProjectNotFound { id: 404 }));
        assert!(studio.seed(&missing).await.is_err());
        assert!(studio.delete_project(&Id { id: 404 }).await.is_err());
    }

    assert!(studio.locks.0.lock().unwrap().is_empty());
}
