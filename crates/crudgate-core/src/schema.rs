//! Per-route parameter schema and the static route configuration bundle.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::types::QueryOptions;

/// Expected kind of a route path parameter.
///
/// A closed set: there is deliberately no catch-all variant, so every
/// declared parameter is validated by an explicit match arm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamKind {
    /// A numeric string, converted to an integer filter value.
    Number,
    /// A free-form string, passed through unchanged.
    Text,
    /// A canonical hyphenated UUID string (version 1-5).
    Uuid,
}

/// Static mapping from parameter name to its expected kind.
///
/// Built once at route registration and shared read-only across requests.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParamSchema(HashMap<String, ParamKind>);

impl ParamSchema {
    /// Create an empty schema.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a parameter, builder-style.
    pub fn param(mut self, name: impl Into<String>, kind: ParamKind) -> Self {
        self.0.insert(name.into(), kind);
        self
    }

    /// Look up the declared kind of a parameter.
    pub fn kind_of(&self, name: &str) -> Option<ParamKind> {
        self.0.get(name).copied()
    }

    /// Number of declared parameters.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the schema declares no parameters.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// The static per-route configuration bundle.
///
/// Supplied at route registration time and immutable for the lifetime of
/// the route; per-request resolution never writes back into it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CrudOptions {
    /// Expected kind of each path parameter.
    #[serde(default)]
    pub params: ParamSchema,
    /// Baseline query options merged into every request.
    #[serde(default)]
    pub options: QueryOptions,
}

impl CrudOptions {
    /// Create an empty configuration bundle.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the parameter schema, builder-style.
    pub fn with_params(mut self, params: ParamSchema) -> Self {
        self.params = params;
        self
    }

    /// Set the baseline query options, builder-style.
    pub fn with_options(mut self, options: QueryOptions) -> Self {
        self.options = options;
        self
    }
}
