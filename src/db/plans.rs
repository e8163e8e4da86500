//! CRUD accessors for the `workout_plans` table.

use crate::errors::{AppError, AppResult};
use crate::models::workout_plan::{NewWorkoutPlan, WorkoutPlan, WorkoutPlanPatch};
use chrono::Local;
use rusqlite::types::Value;
use rusqlite::{Connection, OptionalExtension, Row, params, params_from_iter};

const PLAN_COLUMNS: &str =
    "id, client_id, name, description, sessions_per_week, created_at, updated_at";

fn map_plan(row: &Row) -> rusqlite::Result<WorkoutPlan> {
    Ok(WorkoutPlan {
        id: row.get("id")?,
        client_id: row.get("client_id")?,
        name: row.get("name")?,
        description: row.get("description")?,
        sessions_per_week: row.get("sessions_per_week")?,
        created_at: row.get("created_at")?,
        updated_at: row.get("updated_at")?,
    })
}

fn check_sessions_per_week(value: Option<i32>) -> AppResult<()> {
    match value {
        Some(n) if !(0..=7).contains(&n) => Err(AppError::InvalidArgument(format!(
            "sessions per week must be between 0 and 7, got {n}"
        ))),
        _ => Ok(()),
    }
}

pub fn create_plan(conn: &Connection, plan: &NewWorkoutPlan) -> AppResult<WorkoutPlan> {
    if plan.name.trim().is_empty() {
        return Err(AppError::InvalidArgument("plan name cannot be empty".into()));
    }
    check_sessions_per_week(plan.sessions_per_week)?;

    let now = Local::now().to_rfc3339();
    conn.execute(
        "INSERT INTO workout_plans (client_id, name, description, sessions_per_week, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?5)",
        params![
            plan.client_id,
            plan.name.trim(),
            plan.description,
            plan.sessions_per_week,
            now
        ],
    )?;

    get_plan(conn, conn.last_insert_rowid())
}

pub fn get_plan(conn: &Connection, id: i64) -> AppResult<WorkoutPlan> {
    let sql = format!("SELECT {PLAN_COLUMNS} FROM workout_plans WHERE id = ?1");
    conn.query_row(&sql, [id], map_plan)
        .optional()?
        .ok_or_else(|| AppError::NotFound(format!("Workout plan #{id}")))
}

/// All plans, or only those of `client_id` when given.
pub fn list_plans(conn: &Connection, client_id: Option<i64>) -> AppResult<Vec<WorkoutPlan>> {
    let mut out = Vec::new();

    match client_id {
        Some(cid) => {
            let sql = format!(
                "SELECT {PLAN_COLUMNS} FROM workout_plans WHERE client_id = ?1 ORDER BY id ASC"
            );
            let mut stmt = conn.prepare(&sql)?;
            for r in stmt.query_map([cid], map_plan)? {
                out.push(r?);
            }
        }
        None => {
            let sql = format!("SELECT {PLAN_COLUMNS} FROM workout_plans ORDER BY id ASC");
            let mut stmt = conn.prepare(&sql)?;
            for r in stmt.query_map([], map_plan)? {
                out.push(r?);
            }
        }
    }

    Ok(out)
}

/// Write only the fields present in `patch` and bump `updated_at`.
pub fn update_plan(conn: &Connection, id: i64, patch: &WorkoutPlanPatch) -> AppResult<WorkoutPlan> {
    if patch.is_empty() {
        return Err(AppError::InvalidArgument("nothing to update".into()));
    }
    if let Some(name) = &patch.name
        && name.trim().is_empty()
    {
        return Err(AppError::InvalidArgument("plan name cannot be empty".into()));
    }
    check_sessions_per_week(patch.sessions_per_week)?;

    let mut sets: Vec<&str> = Vec::new();
    let mut values: Vec<Value> = Vec::new();

    if let Some(cid) = patch.client_id {
        sets.push("client_id = ?");
        values.push(Value::Integer(cid));
    }
    if let Some(name) = &patch.name {
        sets.push("name = ?");
        values.push(Value::Text(name.trim().to_string()));
    }
    if let Some(desc) = &patch.description {
        sets.push("description = ?");
        values.push(Value::Text(desc.clone()));
    }
    if let Some(n) = patch.sessions_per_week {
        sets.push("sessions_per_week = ?");
        values.push(Value::Integer(i64::from(n)));
    }

    sets.push("updated_at = ?");
    values.push(Value::Text(Local::now().to_rfc3339()));
    values.push(Value::Integer(id));

    let sql = format!("UPDATE workout_plans SET {} WHERE id = ?", sets.join(", "));
    let changed = conn.execute(&sql, params_from_iter(values))?;

    if changed == 0 {
        return Err(AppError::NotFound(format!("Workout plan #{id}")));
    }

    get_plan(conn, id)
}

pub fn delete_plan(conn: &Connection, id: i64) -> AppResult<()> {
    let changed = conn.execute("DELETE FROM workout_plans WHERE id = ?1", [id])?;
    if changed == 0 {
        return Err(AppError::NotFound(format!("Workout plan #{id}")));
    }
    Ok(())
}
