//! Schema registry for structured documents
//!
//! Maps a document file name (`requirements.yaml`) to its structural
//! contract. The registry is built once and is read-only afterwards.
//!
//! Only root type and required top-level fields are enforced by
//! [`validate_structured`](crate::validate::validate_structured); property
//! types, enums and item schemas are published as data for callers.

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Declared JSON-schema style type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaType {
    /// Mapping
    Object,
    /// Sequence
    Array,
    /// Scalar string
    String,
}

/// Structural contract for a value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schema {
    /// Declared type of the value
    #[serde(rename = "type")]
    pub schema_type: SchemaType,
    /// Required keys (objects only)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<String>,
    /// Per-key schemas (objects only)
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub properties: IndexMap<String, Schema>,
    /// Element schema (arrays only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<Schema>>,
    /// Allowed values (strings only)
    #[serde(default, rename = "enum", skip_serializing_if = "Option::is_none")]
    pub allowed: Option<Vec<String>>,
}

impl Schema {
    fn of(schema_type: SchemaType) -> Self {
        Self {
            schema_type,
            required: Vec::new(),
            properties: IndexMap::new(),
            items: None,
            allowed: None,
        }
    }

    /// Object schema with no fields yet
    #[must_use]
    pub fn object() -> Self {
        Self::of(SchemaType::Object)
    }

    /// Plain string schema
    #[must_use]
    pub fn string() -> Self {
        Self::of(SchemaType::String)
    }

    /// Array of `items`
    #[must_use]
    pub fn array(items: Schema) -> Self {
        Self {
            items: Some(Box::new(items)),
            ..Self::of(SchemaType::Array)
        }
    }

    /// Declare required keys
    #[must_use]
    pub fn with_required<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.required.extend(fields.into_iter().map(Into::into));
        self
    }

    /// Declare a property schema
    #[must_use]
    pub fn with_property(mut self, name: impl Into<String>, schema: Schema) -> Self {
        self.properties.insert(name.into(), schema);
        self
    }

    /// Restrict to an enumerated set of values
    #[must_use]
    pub fn with_enum<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed = Some(values.into_iter().map(Into::into).collect());
        self
    }

    /// Whether the root must decode to a mapping
    #[inline]
    #[must_use]
    pub fn expects_object(&self) -> bool {
        self.schema_type == SchemaType::Object
    }
}

/// Document name → schema
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SchemaRegistry {
    schemas: IndexMap<String, Schema>,
}

impl SchemaRegistry {
    /// Create empty registry
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a schema under a document name
    pub fn register(&mut self, name: impl Into<String>, schema: Schema) {
        self.schemas.insert(name.into(), schema);
    }

    /// Look up a schema by document name
    #[inline]
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Schema> {
        self.schemas.get(name)
    }

    /// Registered document names, in registration order
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.schemas.keys().map(String::as_str).collect()
    }

    /// Number of registered schemas
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    /// Check if registry is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }
}

static BUILTIN: Lazy<SchemaRegistry> = Lazy::new(builtin_schemas);

/// Process-wide registry of built-in document schemas
#[inline]
#[must_use]
pub fn schemas() -> &'static SchemaRegistry {
    &BUILTIN
}

fn builtin_schemas() -> SchemaRegistry {
    let mut registry = SchemaRegistry::new();

    let feature = Schema::object()
        .with_required(["id", "name", "description"])
        .with_property("id", Schema::string())
        .with_property("name", Schema::string())
        .with_property("description", Schema::string())
        .with_property("priority", Schema::string().with_enum(["high", "medium", "low"]))
        .with_property("status", Schema::string());
    registry.register(
        "requirements.yaml",
        Schema::object()
            .with_required(["features"])
            .with_property("features", Schema::array(feature)),
    );

    let role = Schema::object()
        .with_required(["id", "name", "permissions"])
        .with_property("id", Schema::string())
        .with_property("name", Schema::string())
        .with_property("description", Schema::string())
        .with_property("permissions", Schema::array(Schema::string()));
    registry.register(
        "roles.yaml",
        Schema::object()
            .with_required(["roles"])
            .with_property("roles", Schema::array(role)),
    );

    let constraint = Schema::object()
        .with_required(["id", "description"])
        .with_property("id", Schema::string())
        .with_property("description", Schema::string())
        .with_property(
            "severity",
            Schema::string().with_enum(["critical", "high", "medium", "low"]),
        );
    registry.register(
        "constraints.yaml",
        Schema::object()
            .with_required(["constraints"])
            .with_property("constraints", Schema::array(constraint)),
    );

    registry
}
