use serde::Serialize;

/// Display name used when a session has no usable template.
pub const CUSTOM_SESSION_NAME: &str = "Custom Session";

/// A resolved template reference as shown on a day entry.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TemplateRef {
    pub id: i64,
    pub name: String,
}

/// A reusable workout definition (⇔ templates table).
#[derive(Debug, Clone, Serialize)]
pub struct Template {
    pub id: i64,
    pub name: String,
    pub session_type: Option<String>,
    pub created_at: String,
}

impl Template {
    pub fn to_ref(&self) -> TemplateRef {
        TemplateRef {
            id: self.id,
            name: self.name.clone(),
        }
    }
}
