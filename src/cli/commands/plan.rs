use super::{ask_confirmation, open_pool};
use crate::cli::parser::{Commands, PlanAction};
use crate::config::Config;
use crate::core::plans::PlanLogic;
use crate::db::plans::{get_plan, list_plans};
use crate::errors::AppResult;
use crate::models::workout_plan::{NewWorkoutPlan, WorkoutPlan, WorkoutPlanPatch};
use crate::ui::messages::{info, success};
use crate::utils::colors::colorize_optional;
use crate::utils::table::{Column, Table};

fn print_plan(plan: &WorkoutPlan) {
    let opt = |v: Option<String>| colorize_optional(&v.unwrap_or_else(|| "--".into()));

    println!("Plan #{}: {}", plan.id, plan.name);
    println!("  client:       {}", opt(plan.client_id.map(|c| c.to_string())));
    println!("  per week:     {}", opt(plan.sessions_per_week.map(|n| n.to_string())));
    println!("  description:  {}", opt(plan.description.clone()));
    println!("  created:      {}", plan.created_at);
    println!("  updated:      {}", plan.updated_at);
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Plan { action } = cmd else {
        return Ok(());
    };

    let mut pool = open_pool(cfg)?;

    match action {
        PlanAction::Add {
            name,
            client,
            description,
            per_week,
        } => {
            let plan = PlanLogic::add(
                &mut pool,
                &NewWorkoutPlan {
                    client_id: *client,
                    name: name.clone(),
                    description: description.clone(),
                    sessions_per_week: *per_week,
                },
            )?;
            success(format!("Workout plan #{} '{}' created.", plan.id, plan.name));
        }

        PlanAction::List { client } => {
            let plans = list_plans(&pool.conn, *client)?;
            if plans.is_empty() {
                info("No workout plans found.");
                return Ok(());
            }

            let mut table = Table::new(vec![
                Column::right("ID"),
                Column::left("Name"),
                Column::right("Client"),
                Column::right("Per week"),
            ]);
            for p in plans {
                table.add_row(vec![
                    p.id.to_string(),
                    p.name,
                    colorize_optional(&p.client_id.map(|c| c.to_string()).unwrap_or("--".into())),
                    colorize_optional(
                        &p.sessions_per_week
                            .map(|n| n.to_string())
                            .unwrap_or("--".into()),
                    ),
                ]);
            }
            print!("{}", table.render());
        }

        PlanAction::Show { id } => {
            let plan = get_plan(&pool.conn, *id)?;
            print_plan(&plan);
        }

        PlanAction::Update {
            id,
            name,
            client,
            description,
            per_week,
        } => {
            let patch = WorkoutPlanPatch {
                client_id: *client,
                name: name.clone(),
                description: description.clone(),
                sessions_per_week: *per_week,
            };
            let plan = PlanLogic::update(&mut pool, *id, &patch)?;
            success(format!("Workout plan #{} updated.", plan.id));
            print_plan(&plan);
        }

        PlanAction::Del { id, yes } => {
            if !*yes
                && !ask_confirmation(&format!(
                    "Delete workout plan #{}? This action is irreversible.",
                    id
                ))
            {
                info("Operation cancelled.");
                return Ok(());
            }

            let plan = PlanLogic::delete(&mut pool, *id)?;
            success(format!("Workout plan #{} '{}' deleted.", plan.id, plan.name));
        }
    }

    Ok(())
}
