//! Resume Data Collector — reads form state into a transient `ResumeData`
//! record immediately before rendering.
//!
//! No validation happens here; required-field checks are the orchestrator's
//! job. Every scalar field is trimmed and defaults to the empty string when
//! the provider has no value for it.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The form-state provider collaborator: named field reads by logical id,
/// plus the ordered list of currently-tagged skills.
pub trait FormState {
    fn field(&self, name: &str) -> Option<String>;
    fn skill_tags(&self) -> Vec<String>;
}

/// The transient resume record. Rebuilt fresh from form state on every
/// export; never persisted by this component.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResumeData {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub linkedin: String,
    pub summary: String,
    pub degree: String,
    pub institution: String,
    pub year: String,
    pub cgpa: String,
    /// Ordered as displayed in the form; duplicates preserved.
    pub skills: Vec<String>,
    pub exp_title: String,
    pub exp_org: String,
    pub exp_duration: String,
    pub exp_desc: String,
    pub achievements: String,
}

/// Collects a fresh `ResumeData` from the provider. Missing fields become
/// empty strings; all values are whitespace-trimmed.
pub fn collect(form: &dyn FormState) -> ResumeData {
    let get = |name: &str| {
        form.field(name)
            .map(|v| v.trim().to_string())
            .unwrap_or_default()
    };

    ResumeData {
        name: get("name"),
        email: get("email"),
        phone: get("phone"),
        location: get("location"),
        linkedin: get("linkedin"),
        summary: get("summary"),
        degree: get("degree"),
        institution: get("institution"),
        year: get("year"),
        cgpa: get("cgpa"),
        skills: form
            .skill_tags()
            .into_iter()
            .map(|s| s.trim().to_string())
            .collect(),
        exp_title: get("exp-title"),
        exp_org: get("exp-org"),
        exp_duration: get("exp-duration"),
        exp_desc: get("exp-desc"),
        achievements: get("achievements"),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// JSON-backed form state (CLI input)
// ────────────────────────────────────────────────────────────────────────────

/// Form state backed by a JSON object: top-level string members are fields,
/// the `skills` array holds the skill tags.
#[derive(Debug, Clone)]
pub struct JsonFormState {
    root: Value,
}

impl JsonFormState {
    pub fn new(root: Value) -> Self {
        Self { root }
    }

    pub fn from_str(raw: &str) -> Result<Self, serde_json::Error> {
        Ok(Self::new(serde_json::from_str(raw)?))
    }
}

impl FormState for JsonFormState {
    fn field(&self, name: &str) -> Option<String> {
        self.root
            .get(name)
            .and_then(Value::as_str)
            .map(str::to_string)
    }

    fn skill_tags(&self) -> Vec<String> {
        self.root
            .get("skills")
            .and_then(Value::as_array)
            .map(|tags| {
                tags.iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
