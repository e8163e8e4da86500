//! Seams between the derivation core and the outside world.

use crate::errors::AppResult;
use crate::models::session::SessionRecord;
use crate::models::template::TemplateRef;
use chrono::NaiveDate;

/// Session query service: returns the raw session rows of a client
/// scheduled between `start` and `end` (both inclusive).
pub trait SessionSource {
    fn fetch_sessions(
        &self,
        client_id: i64,
        start: NaiveDate,
        end: NaiveDate,
    ) -> AppResult<Vec<SessionRecord>>;
}

/// Fills in a template display name when a session only carries the id.
pub trait TemplateLookup {
    fn resolve_template(&self, template_id: i64) -> Option<TemplateRef>;
}

/// Lookup that never resolves anything.
pub struct NoTemplates;

impl TemplateLookup for NoTemplates {
    fn resolve_template(&self, _template_id: i64) -> Option<TemplateRef> {
        None
    }
}

impl<F> TemplateLookup for F
where
    F: Fn(i64) -> Option<TemplateRef>,
{
    fn resolve_template(&self, template_id: i64) -> Option<TemplateRef> {
        self(template_id)
    }
}
