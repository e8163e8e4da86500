mod common;
use chrono::{NaiveDate, NaiveTime};
use coachweek::core::logic::Core;
use coachweek::core::session::{NewSession, SessionLogic};
use coachweek::core::sources::{NoTemplates, SessionSource};
use coachweek::db::clients::insert_client;
use coachweek::db::initialize::init_db;
use coachweek::db::migrate::pending_count;
use coachweek::db::plans::{create_plan, get_plan, list_plans, update_plan};
use coachweek::db::pool::DbPool;
use coachweek::db::queries::{load_session, load_sessions_between};
use coachweek::db::templates::insert_template;
use coachweek::core::plans::PlanLogic;
use coachweek::errors::{AppError, AppResult};
use coachweek::models::day_entry::DayStatus;
use coachweek::models::session::SessionRecord;
use coachweek::models::session_status::SessionStatus;
use coachweek::models::workout_plan::{NewWorkoutPlan, WorkoutPlanPatch};
use common::{at, date};

fn fresh_pool() -> DbPool {
    let pool = DbPool::in_memory().expect("in-memory db");
    init_db(&pool.conn).expect("init db");
    pool
}

fn log_count(pool: &DbPool, operation: &str) -> i64 {
    pool.conn
        .query_row(
            "SELECT COUNT(*) FROM log WHERE operation = ?1",
            [operation],
            |row| row.get(0),
        )
        .unwrap()
}

#[test]
fn test_migrations_are_idempotent() {
    let pool = DbPool::in_memory().unwrap();

    let first = init_db(&pool.conn).unwrap();
    assert!(first > 0);
    assert_eq!(pending_count(&pool.conn).unwrap(), 0);

    let second = init_db(&pool.conn).unwrap();
    assert_eq!(second, 0);
    assert_eq!(log_count(&pool, "migration_applied") as usize, first);
}

#[test]
fn test_sessions_table_is_created_with_session_type() {
    let pool = fresh_pool();

    let mut stmt = pool.conn.prepare("PRAGMA table_info('sessions')").unwrap();
    let columns: Vec<String> = stmt
        .query_map([], |row| row.get(1))
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();

    assert!(columns.iter().any(|c| c == "session_type"));
    assert_eq!(log_count(&pool, "migration_applied"), 4);
}

#[test]
fn test_session_lifecycle() {
    let mut pool = fresh_pool();
    let client = insert_client(&pool.conn, "Bob").unwrap();
    let template = insert_template(&pool.conn, "Full Body", Some("strength")).unwrap();

    let id = SessionLogic::add(
        &mut pool,
        NewSession {
            client_id: client,
            date: Some(date(2024, 1, 3)),
            time: NaiveTime::from_hms_opt(7, 30, 0),
            template_id: Some(template),
            notes: Some("warm up first".into()),
            ..Default::default()
        },
    )
    .unwrap();

    let stored = load_session(&pool.conn, id).unwrap();
    assert_eq!(stored.status, SessionStatus::Scheduled);
    assert_eq!(stored.time, NaiveTime::from_hms_opt(7, 30, 0));
    assert_eq!(stored.template_id, Some(template));
    assert!(stored.created_at.is_some());

    SessionLogic::complete(&mut pool, id, Some(55)).unwrap();
    let stored = load_session(&pool.conn, id).unwrap();
    assert_eq!(stored.status, SessionStatus::Completed);
    assert_eq!(stored.duration_minutes, Some(55));

    SessionLogic::set_status(&mut pool, id, SessionStatus::NoShow).unwrap();
    assert_eq!(
        load_session(&pool.conn, id).unwrap().status,
        SessionStatus::NoShow
    );

    let removed = SessionLogic::delete(&mut pool, id).unwrap();
    assert_eq!(removed.id, id);
    assert!(matches!(
        load_session(&pool.conn, id),
        Err(AppError::NotFound(_))
    ));

    assert_eq!(log_count(&pool, "session_add"), 1);
    assert_eq!(log_count(&pool, "session_status"), 2);
    assert_eq!(log_count(&pool, "session_del"), 1);
}

#[test]
fn test_session_add_rejects_unknown_references() {
    let mut pool = fresh_pool();

    let missing_client = SessionLogic::add(
        &mut pool,
        NewSession {
            client_id: 99,
            date: Some(date(2024, 1, 3)),
            ..Default::default()
        },
    );
    assert!(matches!(missing_client, Err(AppError::NotFound(_))));

    let client = insert_client(&pool.conn, "Bob").unwrap();
    let missing_template = SessionLogic::add(
        &mut pool,
        NewSession {
            client_id: client,
            date: Some(date(2024, 1, 3)),
            template_id: Some(12),
            ..Default::default()
        },
    );
    assert!(matches!(missing_template, Err(AppError::NotFound(_))));
}

#[test]
fn test_complete_rejects_negative_duration() {
    let mut pool = fresh_pool();
    let client = insert_client(&pool.conn, "Bob").unwrap();
    let id = SessionLogic::add(
        &mut pool,
        NewSession {
            client_id: client,
            date: Some(date(2024, 1, 3)),
            ..Default::default()
        },
    )
    .unwrap();

    assert!(matches!(
        SessionLogic::complete(&mut pool, id, Some(-5)),
        Err(AppError::InvalidArgument(_))
    ));
}

#[test]
fn test_sessions_between_is_inclusive_and_per_client() {
    let pool = fresh_pool();
    let bob = insert_client(&pool.conn, "Bob").unwrap();
    let eve = insert_client(&pool.conn, "Eve").unwrap();

    for (client, day) in [(bob, 1), (bob, 7), (bob, 8), (eve, 3)] {
        let s = SessionRecord::scheduled(client, date(2024, 1, day), None);
        coachweek::db::queries::insert_session(&pool.conn, &s).unwrap();
    }

    let rows = load_sessions_between(&pool.conn, bob, &date(2024, 1, 1), &date(2024, 1, 7)).unwrap();
    let days: Vec<NaiveDate> = rows.iter().map(|s| s.date).collect();
    assert_eq!(days, vec![date(2024, 1, 1), date(2024, 1, 7)]);
}

#[test]
fn test_load_week_from_the_database() {
    let pool = fresh_pool();
    let bob = insert_client(&pool.conn, "Bob").unwrap();
    let template = insert_template(&pool.conn, "Intervals", Some("cardio")).unwrap();

    let mut done = SessionRecord::scheduled(bob, date(2024, 1, 2), None);
    done.status = SessionStatus::Completed;
    done.duration_minutes = Some(40);
    done.template_id = Some(template);
    coachweek::db::queries::insert_session(&pool.conn, &done).unwrap();

    let upcoming = SessionRecord::scheduled(bob, date(2024, 1, 6), NaiveTime::from_hms_opt(9, 0, 0));
    coachweek::db::queries::insert_session(&pool.conn, &upcoming).unwrap();

    let load = Core::load_week(&pool, &pool, bob, date(2024, 1, 4), at(2024, 1, 4, 12, 0)).unwrap();

    assert!(load.fetch_error.is_none());
    assert_eq!(load.week_start, date(2024, 1, 1));
    assert_eq!(load.week_end, date(2024, 1, 7));

    let tue = &load.view.days[1];
    assert_eq!(tue.status, DayStatus::Completed);
    assert_eq!(tue.template.as_ref().map(|t| t.name.as_str()), Some("Intervals"));
    assert_eq!(load.view.days[5].status, DayStatus::Scheduled);

    assert_eq!(load.view.stats.total_workouts, 2);
    assert_eq!(load.view.stats.completed_workouts, 1);
    assert_eq!(load.view.stats.total_duration, 40);
    assert_eq!(load.view.stats.completion_rate, 50.0);
}

struct BrokenSource;

impl SessionSource for BrokenSource {
    fn fetch_sessions(&self, _: i64, _: NaiveDate, _: NaiveDate) -> AppResult<Vec<SessionRecord>> {
        Err(AppError::Other("connection lost".into()))
    }
}

#[test]
fn test_load_week_degrades_to_rest_days_on_fetch_error() {
    let load = Core::load_week(
        &BrokenSource,
        &NoTemplates,
        1,
        date(2024, 1, 4),
        at(2024, 1, 4, 12, 0),
    )
    .unwrap();

    assert!(matches!(load.fetch_error, Some(AppError::Other(_))));
    assert_eq!(load.view.days.len(), 7);
    assert!(load.view.days.iter().all(|d| d.status == DayStatus::Rest));
    assert_eq!(load.view.stats.total_workouts, 0);
    assert_eq!(load.view.stats.completion_rate, 0.0);
}

#[test]
fn test_plan_crud() {
    let mut pool = fresh_pool();
    let bob = insert_client(&pool.conn, "Bob").unwrap();

    let plan = PlanLogic::add(
        &mut pool,
        &NewWorkoutPlan {
            client_id: Some(bob),
            name: "  Base building ".into(),
            description: Some("8 weeks".into()),
            sessions_per_week: Some(3),
        },
    )
    .unwrap();
    assert_eq!(plan.name, "Base building");
    assert_eq!(plan.created_at, plan.updated_at);

    create_plan(
        &pool.conn,
        &NewWorkoutPlan {
            name: "Unassigned".into(),
            ..Default::default()
        },
    )
    .unwrap();

    assert_eq!(list_plans(&pool.conn, None).unwrap().len(), 2);
    assert_eq!(list_plans(&pool.conn, Some(bob)).unwrap().len(), 1);

    let updated = PlanLogic::update(
        &mut pool,
        plan.id,
        &WorkoutPlanPatch {
            sessions_per_week: Some(4),
            ..Default::default()
        },
    )
    .unwrap();
    assert_eq!(updated.sessions_per_week, Some(4));
    assert_eq!(updated.description.as_deref(), Some("8 weeks"));

    PlanLogic::delete(&mut pool, plan.id).unwrap();
    assert!(matches!(
        get_plan(&pool.conn, plan.id),
        Err(AppError::NotFound(_))
    ));
    assert_eq!(log_count(&pool, "plan_add"), 1);
    assert_eq!(log_count(&pool, "plan_del"), 1);
}

#[test]
fn test_plan_validation() {
    let pool = fresh_pool();

    let empty_name = create_plan(
        &pool.conn,
        &NewWorkoutPlan {
            name: " ".into(),
            ..Default::default()
        },
    );
    assert!(matches!(empty_name, Err(AppError::InvalidArgument(_))));

    let too_many = create_plan(
        &pool.conn,
        &NewWorkoutPlan {
            name: "Daily".into(),
            sessions_per_week: Some(8),
            ..Default::default()
        },
    );
    assert!(matches!(too_many, Err(AppError::InvalidArgument(_))));

    let plan = create_plan(
        &pool.conn,
        &NewWorkoutPlan {
            name: "Ok".into(),
            ..Default::default()
        },
    )
    .unwrap();
    assert!(matches!(
        update_plan(&pool.conn, plan.id, &WorkoutPlanPatch::default()),
        Err(AppError::InvalidArgument(_))
    ));
    assert!(matches!(
        update_plan(
            &pool.conn,
            999,
            &WorkoutPlanPatch {
                name: Some("Ghost".into()),
                ..Default::default()
            }
        ),
        Err(AppError::NotFound(_))
    ));
}

#[test]
fn test_deleting_a_client_removes_its_sessions() {
    let pool = fresh_pool();
    let bob = insert_client(&pool.conn, "Bob").unwrap();
    let s = SessionRecord::scheduled(bob, date(2024, 1, 2), None);
    coachweek::db::queries::insert_session(&pool.conn, &s).unwrap();

    pool.conn.execute("DELETE FROM clients WHERE id = ?1", [bob]).unwrap();

    let rows = load_sessions_between(&pool.conn, bob, &date(2024, 1, 1), &date(2024, 1, 7)).unwrap();
    assert!(rows.is_empty());
}

#[test]
fn test_load_week_rejects_reference_at_the_end_of_time() {
    let pool = fresh_pool();
    let result = Core::load_week(&pool, &pool, 1, NaiveDate::MAX, at(2024, 1, 4, 12, 0));
    assert!(matches!(result, Err(AppError::InvalidDate(_))));
}
