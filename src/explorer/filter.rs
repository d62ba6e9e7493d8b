//! Explorer filter predicates and their query-string encoding
//!
//! Every Explorer collection accepts filters of the form
//! `filter[<index>][<field>][<operator>][0]=<value>`. The index is the
//! position of the predicate in the caller's list, so order is preserved
//! from input to wire.

use std::fmt;
use std::str::FromStr;

use crate::config::api;
use crate::error::TfeError;

/// Comparison operator of a filter predicate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOperator {
    Is,
    IsNot,
    Contains,
    DoesNotContain,
    IsEmpty,
    IsNotEmpty,
    Gt,
    Lt,
    Gteq,
    Lteq,
    IsBefore,
    IsAfter,
}

impl FilterOperator {
    /// All operators, in wire-table order
    pub const ALL: [FilterOperator; 12] = [
        FilterOperator::Is,
        FilterOperator::IsNot,
        FilterOperator::Contains,
        FilterOperator::DoesNotContain,
        FilterOperator::IsEmpty,
        FilterOperator::IsNotEmpty,
        FilterOperator::Gt,
        FilterOperator::Lt,
        FilterOperator::Gteq,
        FilterOperator::Lteq,
        FilterOperator::IsBefore,
        FilterOperator::IsAfter,
    ];

    /// Name used in the query key
    pub fn wire_name(&self) -> &'static str {
        match self {
            FilterOperator::Is => "is",
            FilterOperator::IsNot => "is-not",
            FilterOperator::Contains => "contains",
            FilterOperator::DoesNotContain => "does-not-contain",
            FilterOperator::IsEmpty => "is-empty",
            FilterOperator::IsNotEmpty => "is-not-empty",
            FilterOperator::Gt => "gt",
            FilterOperator::Lt => "lt",
            FilterOperator::Gteq => "gteq",
            FilterOperator::Lteq => "lteq",
            FilterOperator::IsBefore => "is-before",
            FilterOperator::IsAfter => "is-after",
        }
    }
}

impl fmt::Display for FilterOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

impl FromStr for FilterOperator {
    type Err = TfeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FilterOperator::ALL
            .into_iter()
            .find(|op| op.wire_name() == s)
            .ok_or_else(|| TfeError::InvalidFilter(format!("unknown operator '{}'", s)))
    }
}

/// A resource-specific filterable field
///
/// Implemented by the closed field enum of each Explorer collection.
pub trait FilterField: Copy + fmt::Debug + 'static {
    /// Every variant of the field enum
    const ALL: &'static [Self];

    /// Lower-kebab-case name used in the query key
    fn wire_name(&self) -> &'static str;

    /// Look up a field by its wire name
    fn from_wire_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|f| f.wire_name() == name)
    }
}

/// One `(field, operator, value)` term of an Explorer query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filter<F> {
    pub field: F,
    pub operator: FilterOperator,
    pub value: String,
}

impl<F: FilterField> Filter<F> {
    pub fn new(field: F, operator: FilterOperator, value: impl Into<String>) -> Self {
        Self {
            field,
            operator,
            value: value.into(),
        }
    }

    /// Query key for this predicate at position `index`
    pub fn query_key(&self, index: usize) -> String {
        format!(
            "filter[{}][{}][{}][0]",
            index,
            self.field.wire_name(),
            self.operator.wire_name()
        )
    }

    /// Parse `field:operator[:value]`
    ///
    /// The value is everything after the second colon, so it may itself
    /// contain colons. It may be omitted for `is-empty` / `is-not-empty`.
    pub fn parse(expr: &str) -> Result<Self, TfeError> {
        let mut parts = expr.splitn(3, ':');
        let field_name = parts.next().unwrap_or_default();
        let operator_name = parts.next().ok_or_else(|| {
            TfeError::InvalidFilter(format!(
                "'{}' must have the form FIELD:OPERATOR[:VALUE]",
                expr
            ))
        })?;
        let value = parts.next().unwrap_or_default();

        let field = F::from_wire_name(field_name).ok_or_else(|| {
            let known: Vec<&str> = F::ALL.iter().map(|f| f.wire_name()).collect();
            TfeError::InvalidFilter(format!(
                "unknown field '{}' (expected one of: {})",
                field_name,
                known.join(", ")
            ))
        })?;
        let operator = operator_name.parse()?;

        Ok(Self::new(field, operator, value))
    }
}

/// Explorer collection selected by the `type` query parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Modules,
    Providers,
    Workspaces,
    TfVersions,
}

impl ResourceKind {
    pub fn wire_name(&self) -> &'static str {
        match self {
            ResourceKind::Modules => "modules",
            ResourceKind::Providers => "providers",
            ResourceKind::Workspaces => "workspaces",
            ResourceKind::TfVersions => "tf_versions",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

/// Ordered query parameters for an Explorer request, values unescaped
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExplorerQuery {
    params: Vec<(String, String)>,
}

impl ExplorerQuery {
    /// Build the query for `kind` with the given predicates
    pub fn new<F: FilterField>(kind: ResourceKind, filters: &[Filter<F>]) -> Self {
        let mut params = Vec::with_capacity(filters.len() + 2);
        params.push(("type".to_string(), kind.wire_name().to_string()));
        params.push(("page[size]".to_string(), api::PAGE_SIZE.to_string()));

        for (i, filter) in filters.iter().enumerate() {
            params.push((filter.query_key(i), filter.value.clone()));
        }

        Self { params }
    }

    /// Parameters in wire order
    pub fn params(&self) -> &[(String, String)] {
        &self.params
    }

    /// Value of the first parameter named `key`
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Render as `k=v&k=v` with values query-escaped
    pub fn to_query_string(&self) -> String {
        self.params
            .iter()
            .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}
