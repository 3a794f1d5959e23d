mod common;

use common::{create_project, create_test_studio};
use studioflow_core::{
    params::{Id, ProjectId, ResolveStep},
    ErrorKind, ProjectStage, StepStatus, StepType,
};

#[tokio::test]
async fn test_each_category_seeds_its_own_catalog() {
    let (_temp_dir, studio) = create_test_studio().await;

    for (category, key) in [
        ("brand", "logo_system"),
        ("digital", "ui_design"),
        ("campaign", "media_plan"),
    ] {
        let project = create_project(&studio, category, None).await;
        let steps = studio
            .get_workflow(&ProjectId {
                project_id: project.id,
            })
            .await
            .unwrap();
        let selection = steps
            .iter()
            .find(|s| s.step_type == StepType::DeliverableSelection)
            .expect("selection step");
        assert!(selection.option(key).is_some(), "{category} lacks {key}");
    }
}

#[tokio::test]
async fn test_at_most_one_active_after_every_resolution() {
    let (_temp_dir, studio) = create_test_studio().await;
    let project = create_project(&studio, "digital", Some(10_000)).await;
    let id = ProjectId {
        project_id: project.id,
    };

    let mut resolved = 0;
    while let Some(step) = studio.active_step(&id).await.unwrap() {
        let (action, option, input) = match step.step_type {
            StepType::InputNeeded => ("input", None, Some("A new storefront")),
            StepType::DecisionGate => ("choose", Some("A"), None),
            StepType::DeliverableSelection => ("choose", Some("ui_design"), None),
            StepType::ApprovalGate => ("approve", Some("approve"), None),
            StepType::AgentOutput => ("acknowledge", None, None),
        };
        let steps = studio
            .resolve_step(&ResolveStep {
                project_id: project.id,
                step_id: step.id,
                action: action.to_string(),
                chosen_option: option.map(String::from),
                input_text: input.map(String::from),
            })
            .await
            .unwrap();
        let active = steps
            .iter()
            .filter(|s| s.status == StepStatus::Active)
            .count();
        assert!(active <= 1);
        resolved += 1;
    }

    assert_eq!(resolved, 7);
    let project = studio
        .show_project(&Id { id: project.id })
        .await
        .unwrap();
    assert_eq!(project.stage, ProjectStage::Complete);
    assert_eq!(
        studio.list_deliverables(&id).await.unwrap()[0].catalog_key.as_deref(),
        Some("ui_design")
    );
}

#[tokio::test]
async fn test_unknown_option_is_invalid_action() {
    let (_temp_dir, studio) = create_test_studio().await;
    let project = create_project(&studio, "brand", None).await;
    let id = ProjectId {
        project_id: project.id,
    };
    let steps = studio.get_workflow(&id).await.unwrap();

    studio
        .resolve_step(&ResolveStep {
            project_id: project.id,
            step_id: steps[0].id,
            action: "input".to_string(),
            chosen_option: None,
            input_text: Some("Brief".to_string()),
        })
        .await
        .unwrap();

    let err = studio
        .resolve_step(&ResolveStep {
            project_id: project.id,
            step_id: steps[1].id,
            action: "choose".to_string(),
            chosen_option: Some("Z".to_string()),
            input_text: None,
        })
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidAction);
    assert_eq!(err.report().kind, ErrorKind::InvalidAction);

    let active = studio.active_step(&id).await.unwrap().unwrap();
    assert_eq!(active.id, steps[1].id);
    assert!(active.chosen_option.is_none());
}

#[tokio::test]
async fn test_list_projects_newest_first() {
    let (_temp_dir, studio) = create_test_studio().await;
    let first = create_project(&studio, "brand", None).await;
    let second = create_project(&studio, "campaign", None).await;

    let projects = studio.list_projects().await.unwrap();
    let ids: Vec<u64> = projects.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![second.id, first.id]);
}
