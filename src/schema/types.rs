//! Schema type definitions for HR request validation.
//!
//! Supported field kinds:
//! - text: UTF-8 string, non-empty, optional minimum length
//! - number: numeric value, inclusive min/max bounds
//! - one_of: enumerated string variants, matched case-sensitively
//! - date: ISO-8601 calendar date or RFC 3339 datetime

use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// HR resources exposed through the gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Resource {
    Employee,
    Leave,
    Attendance,
    Department,
}

impl Resource {
    /// All resources, in route-group order.
    pub const ALL: [Resource; 4] = [
        Resource::Employee,
        Resource::Leave,
        Resource::Attendance,
        Resource::Department,
    ];

    /// Returns the resource name used in registry keys and logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Resource::Employee => "employee",
            Resource::Leave => "leave",
            Resource::Attendance => "attendance",
            Resource::Department => "department",
        }
    }

    /// Returns the URL prefix for this resource group.
    pub fn route_prefix(&self) -> &'static str {
        match self {
            Resource::Employee => "/api/v1/employees",
            Resource::Leave => "/api/v1/leaves",
            Resource::Attendance => "/api/v1/attendance",
            Resource::Department => "/api/v1/departments",
        }
    }

    /// Human label for the resource id path parameter.
    pub fn id_label(&self) -> &'static str {
        match self {
            Resource::Employee => "Employee ID",
            Resource::Leave => "Leave ID",
            Resource::Attendance => "Attendance ID",
            Resource::Department => "Department ID",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Resource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "employee" => Ok(Resource::Employee),
            "leave" => Ok(Resource::Leave),
            "attendance" => Ok(Resource::Attendance),
            "department" => Ok(Resource::Department),
            other => Err(format!("unknown resource '{}'", other)),
        }
    }
}

/// The four request operations defined per resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Operation {
    Create,
    Update,
    GetById,
    Delete,
}

impl Operation {
    /// All operations, in registration order.
    pub const ALL: [Operation; 4] = [
        Operation::Create,
        Operation::Update,
        Operation::GetById,
        Operation::Delete,
    ];

    /// Returns the operation name used in registry keys and logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Create => "create",
            Operation::Update => "update",
            Operation::GetById => "get-by-id",
            Operation::Delete => "delete",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Operation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "create" => Ok(Operation::Create),
            "update" => Ok(Operation::Update),
            "get-by-id" | "get" => Ok(Operation::GetById),
            "delete" => Ok(Operation::Delete),
            other => Err(format!("unknown operation '{}'", other)),
        }
    }
}

/// Request sections a schema can declare rules for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Params,
    Body,
}

impl Section {
    /// Returns the section name used as the field-path prefix.
    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Params => "params",
            Section::Body => "body",
        }
    }
}

/// Field kinds with their per-kind constraints.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FieldKind {
    /// Non-empty string, optional minimum length in characters.
    Text {
        #[serde(skip_serializing_if = "Option::is_none")]
        min_len: Option<usize>,
    },
    /// Numeric value; bounds are inclusive on both ends.
    Number {
        #[serde(skip_serializing_if = "Option::is_none")]
        min: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        max: Option<f64>,
    },
    /// One of the declared string variants, case-sensitive.
    OneOf { variants: Vec<String> },
    /// ISO-8601 calendar date or RFC 3339 datetime string.
    DateOrDateTime,
}

impl FieldKind {
    /// Returns the kind name for listings and logs.
    pub fn kind_name(&self) -> &'static str {
        match self {
            FieldKind::Text { .. } => "text",
            FieldKind::Number { .. } => "number",
            FieldKind::OneOf { .. } => "one_of",
            FieldKind::DateOrDateTime => "date",
        }
    }
}

/// A single declarative field rule.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldRule {
    /// Field name as it appears on the wire.
    pub name: String,
    /// Human label used in error messages; defaults to the field name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Field kind and constraints.
    pub kind: FieldKind,
    /// Whether the field must be present.
    pub required: bool,
    /// Explicit default injected when the field is absent. Never set
    /// implicitly; absent optional fields are simply skipped.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
}

impl FieldRule {
    fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            label: None,
            kind,
            required: false,
            default: None,
        }
    }

    /// Create an optional text rule.
    pub fn text(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Text { min_len: None })
    }

    /// Create an optional number rule.
    pub fn number(name: impl Into<String>) -> Self {
        Self::new(
            name,
            FieldKind::Number {
                min: None,
                max: None,
            },
        )
    }

    /// Create an optional enumerated-string rule.
    pub fn one_of(name: impl Into<String>, variants: &[&str]) -> Self {
        Self::new(
            name,
            FieldKind::OneOf {
                variants: variants.iter().map(|v| (*v).to_string()).collect(),
            },
        )
    }

    /// Create an optional date-or-datetime rule.
    pub fn date(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::DateOrDateTime)
    }

    /// Mark the field as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Override the label used in error messages.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the minimum length for a text rule. No effect on other kinds.
    pub fn min_len(mut self, n: usize) -> Self {
        if let FieldKind::Text { min_len } = &mut self.kind {
            *min_len = Some(n);
        }
        self
    }

    /// Set the inclusive lower bound for a number rule.
    pub fn min(mut self, bound: f64) -> Self {
        if let FieldKind::Number { min, .. } = &mut self.kind {
            *min = Some(bound);
        }
        self
    }

    /// Set the inclusive upper bound for a number rule.
    pub fn max(mut self, bound: f64) -> Self {
        if let FieldKind::Number { max, .. } = &mut self.kind {
            *max = Some(bound);
        }
        self
    }

    /// Set an explicit default value injected when the field is absent.
    pub fn default_value(mut self, value: Value) -> Self {
        self.default = Some(value);
        self
    }

    /// Label shown in error messages.
    pub fn display_label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.name)
    }
}

/// Ordered rules for one request section.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionSchema {
    /// Rules in declaration order; errors are reported in this order.
    pub rules: Vec<FieldRule>,
    /// When true, undeclared fields are rejected instead of dropped.
    pub deny_unknown: bool,
}

impl SectionSchema {
    /// Create a section from its rules.
    pub fn new(rules: Vec<FieldRule>) -> Self {
        Self {
            rules,
            deny_unknown: false,
        }
    }

    /// Reject undeclared fields instead of dropping them.
    pub fn deny_unknown(mut self) -> Self {
        self.deny_unknown = true;
        self
    }

    /// Look up a rule by field name.
    pub fn rule(&self, name: &str) -> Option<&FieldRule> {
        self.rules.iter().find(|r| r.name == name)
    }
}

/// Declarative schema for one resource operation.
///
/// Immutable once registered; looked up by (resource, operation).
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct RequestSchema {
    /// Path-parameter rules, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<SectionSchema>,
    /// Body rules, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<SectionSchema>,
}

impl RequestSchema {
    /// Create an empty schema.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach the params section.
    pub fn with_params(mut self, section: SectionSchema) -> Self {
        self.params = Some(section);
        self
    }

    /// Attach the body section.
    pub fn with_body(mut self, section: SectionSchema) -> Self {
        self.body = Some(section);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_rule_builders() {
        let rule = FieldRule::text("name")
            .required()
            .label("Department name")
            .min_len(2);
        assert_eq!(rule.name, "name");
        assert!(rule.required);
        assert_eq!(rule.display_label(), "Department name");
        assert_eq!(rule.kind, FieldKind::Text { min_len: Some(2) });
    }

    #[test]
    fn test_label_defaults_to_field_name() {
        let rule = FieldRule::text("employeeId").required();
        assert_eq!(rule.display_label(), "employeeId");
    }

    #[test]
    fn test_number_bounds() {
        let rule = FieldRule::number("hoursWorked").min(0.0).max(24.0);
        assert_eq!(
            rule.kind,
            FieldKind::Number {
                min: Some(0.0),
                max: Some(24.0)
            }
        );
    }

    #[test]
    fn test_min_len_ignored_on_non_text() {
        let rule = FieldRule::number("n").min_len(3);
        assert_eq!(
            rule.kind,
            FieldKind::Number {
                min: None,
                max: None
            }
        );
    }

    #[test]
    fn test_one_of_variants_preserved() {
        let rule = FieldRule::one_of("status", &["PRESENT", "ABSENT", "LATE", "HALF_DAY"]);
        match &rule.kind {
            FieldKind::OneOf { variants } => {
                assert_eq!(variants, &["PRESENT", "ABSENT", "LATE", "HALF_DAY"]);
            }
            other => panic!("expected OneOf, got {:?}", other),
        }
    }

    #[test]
    fn test_default_value() {
        let rule = FieldRule::text("shift").default_value(json!("DAY"));
        assert_eq!(rule.default, Some(json!("DAY")));
    }

    #[test]
    fn test_section_rule_lookup() {
        let section = SectionSchema::new(vec![
            FieldRule::text("a").required(),
            FieldRule::number("b"),
        ]);
        assert!(section.rule("a").is_some());
        assert!(section.rule("b").is_some());
        assert!(section.rule("c").is_none());
        assert!(!section.deny_unknown);
    }

    #[test]
    fn test_resource_and_operation_names() {
        assert_eq!(Resource::Attendance.as_str(), "attendance");
        assert_eq!(Resource::Department.route_prefix(), "/api/v1/departments");
        assert_eq!(Resource::Department.id_label(), "Department ID");
        assert_eq!(Operation::GetById.as_str(), "get-by-id");
        assert_eq!("leave".parse::<Resource>().unwrap(), Resource::Leave);
        assert_eq!("update".parse::<Operation>().unwrap(), Operation::Update);
        assert!("payroll".parse::<Resource>().is_err());
    }
}
