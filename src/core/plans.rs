use crate::db::log::audit_quiet;
use crate::db::plans::{create_plan, delete_plan, get_plan, update_plan};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::workout_plan::{NewWorkoutPlan, WorkoutPlan, WorkoutPlanPatch};

/// Workout plan commands: the plain CRUD accessors plus an audit line.
pub struct PlanLogic;

impl PlanLogic {
    pub fn add(pool: &mut DbPool, plan: &NewWorkoutPlan) -> AppResult<WorkoutPlan> {
        let created = create_plan(&pool.conn, plan)?;
        audit_quiet(
            &pool.conn,
            "plan_add",
            &format!("plan #{}", created.id),
            &format!("Created plan '{}'", created.name),
        );
        Ok(created)
    }

    pub fn update(pool: &mut DbPool, id: i64, patch: &WorkoutPlanPatch) -> AppResult<WorkoutPlan> {
        let updated = update_plan(&pool.conn, id, patch)?;
        audit_quiet(
            &pool.conn,
            "plan_update",
            &format!("plan #{id}"),
            &format!("Updated plan '{}'", updated.name),
        );
        Ok(updated)
    }

    pub fn delete(pool: &mut DbPool, id: i64) -> AppResult<WorkoutPlan> {
        let plan = get_plan(&pool.conn, id)?;
        delete_plan(&pool.conn, id)?;
        audit_quiet(
            &pool.conn,
            "plan_del",
            &format!("plan #{id}"),
            &format!("Deleted plan '{}'", plan.name),
        );
        Ok(plan)
    }
}
