//! Review workflow prompts
//!
//! Each prompt is a fixed body with one argument substituted in.

use crate::error::{ServiceError, ServiceResult};
use serde::Serialize;
use std::collections::HashMap;

/// Declared prompt argument
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PromptArgument {
    /// Placeholder name in the body
    pub name: &'static str,
    /// Shown to clients
    pub description: &'static str,
    /// Whether clients must supply it
    pub required: bool,
}

/// Prompt definition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PromptDef {
    /// Prompt name used by `prompts/get`
    pub name: &'static str,
    /// Shown to clients
    pub description: &'static str,
    /// Declared arguments
    pub arguments: &'static [PromptArgument],
    /// Value used when the argument is not supplied
    #[serde(skip)]
    default: &'static str,
    #[serde(skip)]
    body: &'static str,
}

impl PromptDef {
    /// Substitute the argument into the body
    #[must_use]
    pub fn render(&self, arguments: &HashMap<String, String>) -> String {
        let arg = self.arguments.first().map_or("", |a| a.name);
        let value = arguments.get(arg).map_or(self.default, String::as_str);
        self.body.replace("{arg}", value)
    }
}

const DESIGN_REVIEW: &str = "設計ドキュメントのレビューを行います。

対象ドキュメント: {arg}

以下の観点でレビューしてください：

1. **完全性チェック**
   - 必須セクションが全て記載されているか
   - 各セクションに十分な情報があるか

2. **整合性チェック**
   - 他のドキュメントとの矛盾がないか
   - 用語が統一されているか

3. **実現可能性チェック**
   - 技術的に実現可能か
   - リソース制約を考慮しているか

4. **セキュリティチェック**
   - セキュリティ上の問題点はないか
   - 機密情報の取り扱いは適切か

5. **改善提案**
   - より良い設計の提案
   - 不足している考慮事項

レビュー結果を構造化して報告してください。
";

const UPDATE_ARCHITECTURE: &str = "アーキテクチャドキュメントの更新を行います。

変更内容: {arg}

以下の手順で更新してください：

1. **現状の確認**
   - docs/architecture/system_overview.md を読み込む
   - 関連するシーケンス図やドメインモデルを確認

2. **影響範囲の特定**
   - 変更が影響するコンポーネントを特定
   - 依存関係を確認

3. **ドキュメント更新**
   - システム概要図を更新
   - 必要に応じてシーケンス図を更新
   - コンポーネント表を更新

4. **整合性確認**
   - 他のドキュメントとの整合性を確認
   - API仕様との整合性を確認

5. **変更履歴の記録**
   - meta/change_history.md に変更を記録

更新後、変更サマリを報告してください。
";

const SYNC_WITH_CODE: &str = "コードとドキュメントの整合性をチェックします。

対象コードパス: {arg}

以下の観点でチェックしてください：

1. **API整合性**
   - docs/architecture/api_design/openapi.yaml と実装コードの比較
   - エンドポイント、パラメータ、レスポンス型の一致確認

2. **データモデル整合性**
   - docs/architecture/data_schemas/entities.yaml と実装の比較
   - エンティティ定義、フィールド、型の一致確認

3. **ドメインモデル整合性**
   - docs/architecture/domain_model.md と実装の比較
   - ドメインオブジェクト、関係性の一致確認

4. **不整合の報告**
   - 発見した不整合を一覧化
   - 修正が必要な箇所を特定

5. **修正提案**
   - ドキュメント側の修正案
   - またはコード側の修正案

整合性チェック結果を報告してください。
";

static PROMPTS: [PromptDef; 3] = [
    PromptDef {
        name: "design-review",
        description: "設計レビュー用のワークフロー",
        arguments: &[PromptArgument {
            name: "document_path",
            description: "レビュー対象のドキュメントパス",
            required: true,
        }],
        default: "",
        body: DESIGN_REVIEW,
    },
    PromptDef {
        name: "update-architecture",
        description: "アーキテクチャ図更新のガイド",
        arguments: &[PromptArgument {
            name: "change_description",
            description: "変更内容の説明",
            required: true,
        }],
        default: "",
        body: UPDATE_ARCHITECTURE,
    },
    PromptDef {
        name: "sync-with-code",
        description: "コードとの整合性チェック",
        arguments: &[PromptArgument {
            name: "code_path",
            description: "チェック対象のコードパス",
            required: false,
        }],
        default: "src/",
        body: SYNC_WITH_CODE,
    },
];

/// All prompt definitions
#[inline]
#[must_use]
pub fn prompts() -> &'static [PromptDef] {
    &PROMPTS
}

/// Render a prompt by name
///
/// # Errors
/// `ServiceError::UnknownPrompt` if no prompt has this name.
pub fn render_prompt(name: &str, arguments: &HashMap<String, String>) -> ServiceResult<String> {
    prompts()
        .iter()
        .find(|p| p.name == name)
        .map(|p| p.render(arguments))
        .ok_or_else(|| ServiceError::UnknownPrompt(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn three_prompts() {
        let names: Vec<_> = prompts().iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["design-review", "update-architecture", "sync-with-code"]);
    }

    #[test]
    fn argument_is_interpolated() {
        let text = render_prompt(
            "design-review",
            &args(&[("document_path", "docs/product/vision.md")]),
        )
        .unwrap();
        assert!(text.contains("対象ドキュメント: docs/product/vision.md"));
        assert!(!text.contains("{arg}"));
    }

    #[test]
    fn sync_with_code_defaults_to_src() {
        let text = render_prompt("sync-with-code", &HashMap::new()).unwrap();
        assert!(text.contains("対象コードパス: src/"));
    }

    #[test]
    fn missing_required_argument_renders_empty() {
        let text = render_prompt("update-architecture", &HashMap::new()).unwrap();
        assert!(text.contains("変更内容: \n"));
    }

    #[test]
    fn unknown_prompt() {
        let err = render_prompt("nope", &HashMap::new()).unwrap_err();
        assert_eq!(err.kind(), "UnknownPrompt");
    }
}
