//! Document templates
//!
//! Template bodies carry the date and author placeholders filled at
//! creation time.

use ddocs_core::metadata::{fill_metadata, MetadataFill};
use indexmap::IndexMap;
use once_cell::sync::Lazy;

const VISION: &str = r"# プロダクトビジョン

## プロダクトの目的

<!-- このプロダクトが存在する理由を記述 -->

- 目的: [プロダクトの主要な目的を記述]
- ミッション: [達成したいミッションを記述]

## 解決したい課題

<!-- プロダクトが解決する具体的な課題 -->

1. **課題1**: [課題の詳細説明]
   - 現状: [現在の状況]
   - 影響: [課題による影響]

## ターゲットユーザー

<!-- 主要なユーザーセグメント -->

| ユーザー種別 | 特徴 | ニーズ |
|-------------|------|--------|
| プライマリユーザー | [特徴] | [ニーズ] |

## 成功指標（KPI）

<!-- 測定可能な成功指標 -->

| 指標名 | 現在値 | 目標値 | 測定方法 |
|--------|--------|--------|----------|
| KPI-1 | - | - | [測定方法] |

---

_最終更新日: YYYY-MM-DD_
_更新者: [担当者/AIエージェント名]_
";

const REQUIREMENTS: &str = r#"# 機能要件定義
version: "1.0"
last_updated: YYYY-MM-DD

features:
  - id: F001
    name: "[機能名]"
    description: "[機能の説明]"
    priority: high  # high, medium, low
    status: draft   # draft, approved, implemented
    acceptance_criteria:
      - "[受け入れ基準1]"
      - "[受け入れ基準2]"
    dependencies: []
"#;

const ROLES: &str = r#"# AIエージェント役割定義
version: "1.0"
last_updated: YYYY-MM-DD

roles:
  - id: developer
    name: "開発エージェント"
    description: "コード生成・修正を担当"
    permissions:
      - "read:all"
      - "write:code"
      - "write:tests"
      - "execute:lint"
      - "execute:test"
    restrictions:
      - "no-production-deploy"
      - "no-security-config-changes"
"#;

const CONSTRAINTS: &str = r#"# AIエージェント制約条件
version: "1.0"
last_updated: YYYY-MM-DD

constraints:
  - id: C001
    description: "機密情報を含むファイルの編集禁止"
    severity: critical
    scope:
      - ".env*"
      - "**/credentials*"
      - "**/secrets*"

  - id: C002
    description: "本番環境への直接デプロイ禁止"
    severity: critical
    action: escalate_to_human
"#;

const SYSTEM_OVERVIEW: &str = r"# システム概要

## システム全体図

```
[システム構成図をここに記述]
```

## コンポーネント構成

### 1. フロントエンド

| コンポーネント | 説明 | 技術スタック |
|---------------|------|-------------|
| [コンポーネント名] | [説明] | [技術] |

### 2. バックエンド

| サービス | 責務 | 通信方式 |
|---------|------|---------|
| [サービス名] | [責務] | [通信方式] |

### 3. データ層

| コンポーネント | 用途 | 技術 |
|---------------|------|------|
| [コンポーネント名] | [用途] | [技術] |

---

_最終更新日: YYYY-MM-DD_
_更新者: [担当者/AIエージェント名]_
";

static TEMPLATES: Lazy<IndexMap<&'static str, &'static str>> = Lazy::new(|| {
    IndexMap::from([
        ("vision.md", VISION),
        ("requirements.yaml", REQUIREMENTS),
        ("roles.yaml", ROLES),
        ("constraints.yaml", CONSTRAINTS),
        ("system_overview.md", SYSTEM_OVERVIEW),
    ])
});

/// Raw template body by template type
#[inline]
#[must_use]
pub fn template_for(template_type: &str) -> Option<&'static str> {
    TEMPLATES.get(template_type).copied()
}

/// Template types with a body, in catalog order
#[must_use]
pub fn template_types() -> Vec<&'static str> {
    TEMPLATES.keys().copied().collect()
}

/// Template body with date and author filled
///
/// The version field is left as shipped.
#[must_use]
pub fn render_template(template_type: &str, date: &str, author: Option<&str>) -> Option<String> {
    let body = template_for(template_type)?;
    let mut fill = MetadataFill::new(date);
    if let Some(author) = author {
        fill = fill.with_author(author);
    }
    Some(fill_metadata(body, &fill))
}
