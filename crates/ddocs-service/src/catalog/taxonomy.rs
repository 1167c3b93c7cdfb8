//! Fixed taxonomy of expected project documents

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// One expected document, flattened to its project-relative path
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateEntry {
    /// Project-relative path, `/`-separated
    pub path: String,
    /// Whether every project should have it
    pub required: bool,
    /// What the document covers
    pub description: String,
}

/// Node in the taxonomy tree
#[derive(Debug, Clone)]
pub enum TaxonomyNode {
    /// Directory grouping further nodes
    Dir(&'static str, Vec<TaxonomyNode>),
    /// Expected file
    File {
        name: &'static str,
        required: bool,
        description: &'static str,
    },
}

const fn file(name: &'static str, required: bool, description: &'static str) -> TaxonomyNode {
    TaxonomyNode::File {
        name,
        required,
        description,
    }
}

static TAXONOMY: Lazy<Vec<TaxonomyNode>> = Lazy::new(|| {
    use TaxonomyNode::Dir;
    vec![
        Dir(
            "docs",
            vec![
                Dir(
                    "product",
                    vec![
                        file("vision.md", true, "プロダクトビジョン"),
                        file("requirements.yaml", true, "機能要件定義"),
                        file("nonfunctional_requirements.yaml", false, "非機能要件"),
                        file("user_scenarios.md", false, "ユーザーシナリオ"),
                    ],
                ),
                Dir(
                    "architecture",
                    vec![
                        file("system_overview.md", true, "システム概要"),
                        file("domain_model.md", false, "ドメインモデル"),
                        file("sequence_diagrams.md", false, "シーケンス図"),
                        file("api_design/openapi.yaml", false, "API設計"),
                        file("data_schemas/entities.yaml", false, "エンティティ定義"),
                        file("data_schemas/validation_rules.yaml", false, "バリデーションルール"),
                    ],
                ),
                Dir(
                    "dev_process",
                    vec![
                        file("coding_standards.md", true, "コーディング規約"),
                        file("branch_strategy.md", false, "ブランチ戦略"),
                        file("review_guidelines.md", false, "レビューガイドライン"),
                        file("agent_commit_rules.yaml", false, "エージェントコミットルール"),
                    ],
                ),
                Dir(
                    "agent",
                    vec![
                        file("roles.yaml", true, "役割定義"),
                        file("constraints.yaml", true, "制約条件"),
                        file("behaviours.md", false, "行動規則"),
                        file("tools/available_tools.md", false, "利用可能ツール"),
                        file("tools/tool_schemas.yaml", false, "ツールスキーマ"),
                    ],
                ),
                Dir(
                    "ops",
                    vec![
                        file("ci_cd_pipeline.md", false, "CI/CDパイプライン"),
                        file("monitoring_plan.md", false, "監視計画"),
                        file("logs_schema.yaml", false, "ログスキーマ"),
                    ],
                ),
            ],
        ),
        Dir(
            "generator_instructions",
            vec![
                file("system_prompt.md", true, "システムプロンプト"),
                file("file_update_policy.md", true, "ファイル更新ポリシー"),
                file("forbidden_actions.md", true, "禁止事項"),
                file("generation_rules.yaml", false, "生成ルール"),
            ],
        ),
        Dir("meta", vec![file("change_history.md", false, "変更履歴")]),
    ]
});

/// The taxonomy tree
#[inline]
#[must_use]
pub fn taxonomy() -> &'static [TaxonomyNode] {
    &TAXONOMY
}

/// Flatten the taxonomy into entries, in declaration order
#[must_use]
pub fn flatten() -> Vec<TemplateEntry> {
    let mut out = Vec::new();
    for node in taxonomy() {
        flatten_into(node, "", &mut out);
    }
    out
}

fn flatten_into(node: &TaxonomyNode, prefix: &str, out: &mut Vec<TemplateEntry>) {
    let join = |name: &str| {
        if prefix.is_empty() {
            name.to_string()
        } else {
            format!("{prefix}/{name}")
        }
    };

    match node {
        TaxonomyNode::Dir(name, children) => {
            let path = join(*name);
            for child in children {
                flatten_into(child, &path, out);
            }
        }
        TaxonomyNode::File {
            name,
            required,
            description,
        } => out.push(TemplateEntry {
            path: join(*name),
            required: *required,
            description: (*description).to_string(),
        }),
    }
}

/// Flattened entries, optionally restricted to a category
///
/// A category matches entries under `docs/{category}/` or `{category}/`.
#[must_use]
pub fn list_templates(category: Option<&str>) -> Vec<TemplateEntry> {
    let entries = flatten();
    let Some(category) = category.filter(|c| !c.is_empty()) else {
        return entries;
    };

    let docs_prefix = format!("docs/{category}/");
    let top_prefix = format!("{category}/");
    entries
        .into_iter()
        .filter(|e| e.path.starts_with(&docs_prefix) || e.path.starts_with(&top_prefix))
        .collect()
}
