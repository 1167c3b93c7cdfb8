use ddocs_service::response::respond;
use ddocs_service::{MetadataArgs, ProjectInfo};
use ddocs_test_utils::{TempProject, COMPLETE_VISION, MARKED_DOC, VALID_REQUIREMENTS};
use pretty_assertions::assert_eq;
use serde_json::json;
use std::sync::Arc;

#[tokio::test]
async fn test_get_section_from_disk() {
    let project = TempProject::new();
    project.write("docs/architecture/system_overview.md", MARKED_DOC);
    let service = project.service();

    let record = service
        .get_section("docs/architecture/system_overview.md", "NOTES")
        .await
        .unwrap();
    assert_eq!(record.section.as_deref(), Some("## Notes\n\nKeep this."));
}

#[tokio::test]
async fn test_update_section_preserves_everything_else() {
    let project = TempProject::new();
    project.write("docs/a.md", MARKED_DOC);
    let service = project.service();

    service
        .update_section("docs/a.md", "components", "- api\n- scheduler")
        .await
        .unwrap();

    let updated = project.read("docs/a.md");
    let expected = MARKED_DOC.replace("- api\n- worker", "- api\n- scheduler");
    assert_eq!(updated, expected);
}

#[tokio::test]
async fn test_update_section_is_idempotent() {
    let project = TempProject::new();
    project.write("docs/a.md", MARKED_DOC);
    let service = project.service();

    service.update_section("docs/a.md", "components", "x").await.unwrap();
    let once = project.read("docs/a.md");
    service.update_section("docs/a.md", "components", "x").await.unwrap();
    assert_eq!(project.read("docs/a.md"), once);
}

#[tokio::test]
async fn test_update_missing_markers_reports_failure() {
    let project = TempProject::new();
    project.write("docs/a.md", MARKED_DOC);
    let service = project.service();

    let result = service.update_section("docs/a.md", "nope", "x").await;
    assert_eq!(
        respond(&result),
        json!({
            "success": false,
            "error": "AI_EDITABLE markers not found for section: nope",
            "kind": "MarkersNotFound",
        })
    );
    assert_eq!(project.read("docs/a.md"), MARKED_DOC);
}

#[tokio::test]
async fn test_validate_by_extension() {
    let project = TempProject::new();
    project.write("docs/product/requirements.yaml", VALID_REQUIREMENTS);
    project.write("docs/product/vision.md", COMPLETE_VISION);
    project.write("docs/agent/roles.yml", "version: \"1.0\"\n");
    let service = project.service();

    let requirements = service
        .validate_document("docs/product/requirements.yaml")
        .await
        .unwrap();
    assert!(requirements.is_valid());

    let vision = service.validate_document("docs/product/vision.md").await.unwrap();
    assert!(vision.is_valid());
    assert!(vision.warnings().is_empty());

    // .yml is structured, but the schema is keyed by the exact file name
    let roles = service.validate_document("docs/agent/roles.yml").await.unwrap();
    assert!(roles.is_valid());
    assert_eq!(roles.warning_messages(), vec!["No schema defined for roles.yml"]);
}

#[tokio::test]
async fn test_validate_record_shape() {
    let project = TempProject::new();
    project.write("docs/agent/roles.yaml", "version: \"1.0\"\n");
    let service = project.service();

    let result = service.validate_document("docs/agent/roles.yaml").await;
    assert_eq!(
        respond(&result),
        json!({
            "success": true,
            "valid": false,
            "errors": ["Missing required field: roles"],
            "warnings": [],
        })
    );
}

#[tokio::test]
async fn test_create_then_fill_then_validate() {
    let project = TempProject::new();
    let service = project.service();

    let created = service
        .create_document(
            "requirements.yaml",
            "docs/product/requirements.yaml",
            MetadataArgs {
                date: Some("2024-05-06".to_string()),
                ..MetadataArgs::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(created.template_type, "requirements.yaml");
    assert!(created.path.ends_with("requirements.yaml"));

    let content = project.read("docs/product/requirements.yaml");
    assert!(content.contains("last_updated: 2024-05-06"));
    assert!(content.contains("version: \"1.0\""));

    service
        .fill_metadata(
            "docs/product/requirements.yaml",
            MetadataArgs {
                version: Some("2.1".to_string()),
                ..MetadataArgs::default()
            },
        )
        .await
        .unwrap();
    assert!(project.read("docs/product/requirements.yaml").contains("version: \"2.1\""));

    let result = service
        .validate_document("docs/product/requirements.yaml")
        .await
        .unwrap();
    assert!(result.is_valid());
}

#[tokio::test]
async fn test_create_overwrites_existing() {
    let project = TempProject::new();
    project.write("docs/product/vision.md", "old");
    let service = project.service();

    service
        .create_document("vision.md", "docs/product/vision.md", MetadataArgs::default())
        .await
        .unwrap();
    assert!(project.read("docs/product/vision.md").starts_with("# プロダクトビジョン"));
}

#[tokio::test]
async fn test_fill_metadata_author() {
    let project = TempProject::new();
    project.write(
        "docs/a.md",
        "_最終更新日: YYYY-MM-DD_\n_更新者: [担当者/AIエージェント名]_\n",
    );
    let service = project.service();

    service
        .fill_metadata(
            "docs/a.md",
            MetadataArgs {
                date: Some("2025-01-02".to_string()),
                author: Some("planner".to_string()),
                version: None,
            },
        )
        .await
        .unwrap();
    assert_eq!(
        project.read("docs/a.md"),
        "_最終更新日: 2025-01-02_\n_更新者: planner_\n"
    );
}

#[tokio::test]
async fn test_fill_metadata_missing_document_is_not_created() {
    let project = TempProject::new();
    let service = project.service();

    let err = service
        .fill_metadata("docs/none.md", MetadataArgs::default())
        .await
        .unwrap_err();
    assert_eq!(err.kind(), "NotFound");
    assert!(!project.exists("docs/none.md"));
}

#[tokio::test]
async fn test_list_sections() {
    let project = TempProject::new();
    project.write("docs/a.md", MARKED_DOC);
    let service = project.service();

    let outline = service.list_sections("docs/a.md").await.unwrap();
    assert_eq!(outline.headings, vec!["Summary", "Notes"]);
    assert_eq!(outline.editable, vec!["components"]);
}

#[tokio::test]
async fn test_project_introspection() {
    let project = TempProject::new();
    project.write("docs/product/vision.md", COMPLETE_VISION);
    project.write("meta/change_history.md", "# history\n");
    let service = project.service();

    let info: ProjectInfo = service.project_info().await.unwrap();
    assert!(info.exists);
    assert!(!info.has_claude_md);
    assert_eq!(info.categories, vec!["product"]);

    let docs = service.list_documents().await.unwrap();
    let paths: Vec<_> = docs.iter().map(|d| d.path.as_str()).collect();
    assert_eq!(paths, vec!["docs/product/vision.md", "meta/change_history.md"]);
}

#[tokio::test]
async fn test_concurrent_updates_on_one_path_do_not_interleave() {
    let project = TempProject::new();
    let doc = "<!-- AI_EDITABLE_START: a -->\n<!-- AI_EDITABLE_END: a -->\n\
               <!-- AI_EDITABLE_START: b -->\n<!-- AI_EDITABLE_END: b -->\n";
    project.write("docs/a.md", doc);
    let service = Arc::new(project.service());

    let mut handles = Vec::new();
    for (name, value) in [("a", "alpha"), ("b", "beta")] {
        let service = Arc::clone(&service);
        handles.push(tokio::spawn(async move {
            service.update_section("docs/a.md", name, value).await.unwrap();
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    let content = project.read("docs/a.md");
    assert!(content.contains("<!-- AI_EDITABLE_START: a -->\nalpha\n"));
    assert!(content.contains("<!-- AI_EDITABLE_START: b -->\nbeta\n"));
}
