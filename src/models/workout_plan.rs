use serde::Serialize;

/// A coaching plan (⇔ workout_plans table).
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct WorkoutPlan {
    pub id: i64,
    pub client_id: Option<i64>,
    pub name: String,
    pub description: Option<String>,
    pub sessions_per_week: Option<i32>,
    pub created_at: String,
    pub updated_at: String,
}

/// Fields for a new plan.
#[derive(Debug, Clone, Default)]
pub struct NewWorkoutPlan {
    pub client_id: Option<i64>,
    pub name: String,
    pub description: Option<String>,
    pub sessions_per_week: Option<i32>,
}

/// Partial update: only `Some` fields are written.
#[derive(Debug, Clone, Default)]
pub struct WorkoutPlanPatch {
    pub client_id: Option<i64>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub sessions_per_week: Option<i32>,
}

impl WorkoutPlanPatch {
    pub fn is_empty(&self) -> bool {
        self.client_id.is_none()
            && self.name.is_none()
            && self.description.is_none()
            && self.sessions_per_week.is_none()
    }
}
