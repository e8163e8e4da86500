use serde::Serialize;

/// A coached client (⇔ clients table).
#[derive(Debug, Clone, Serialize)]
pub struct Client {
    pub id: i64,
    pub name: String,
    pub created_at: String,
}
