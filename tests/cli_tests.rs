mod common;
use common::{cw, init_db_with_client, setup_test_db};
use predicates::prelude::*;

#[test]
fn test_init_creates_database() {
    let db_path = setup_test_db("init_creates_database");

    cw().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Database initialized"));

    assert!(std::path::Path::new(&db_path).exists());

    cw().args(["--db", &db_path, "db", "--check"])
        .assert()
        .success();
}

#[test]
fn test_client_add_and_list() {
    let db_path = setup_test_db("client_add_and_list");
    init_db_with_client(&db_path);

    cw().args(["--db", &db_path, "client", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Alice"));

    cw().args(["--db", &db_path, "client", "add", "  "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("client name cannot be empty"));
}

#[test]
fn test_week_json_after_completing_a_session() {
    let db_path = setup_test_db("week_json_completed");
    init_db_with_client(&db_path);

    cw().args([
        "--db", &db_path, "template", "add", "Upper Body", "--type", "strength",
    ])
    .assert()
    .success();

    cw().args([
        "--db",
        &db_path,
        "session",
        "add",
        "2024-01-03",
        "--client",
        "1",
        "--time",
        "08:00",
        "--template",
        "1",
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains("Session #1 scheduled on 2024-01-03"));

    cw().args(["--db", &db_path, "session", "complete", "1", "--duration", "45"])
        .assert()
        .success();

    cw().args([
        "--db",
        &db_path,
        "week",
        "--client",
        "1",
        "--date",
        "2024-01-03",
        "--now",
        "2024-01-04 12:00",
        "--json",
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains("\"week_start\": \"2024-01-01\""))
    .stdout(predicate::str::contains("\"name\": \"Upper Body\""))
    .stdout(predicate::str::contains("\"total_workouts\": 1"))
    .stdout(predicate::str::contains("\"completed_workouts\": 1"))
    .stdout(predicate::str::contains("\"total_duration\": 45"))
    .stdout(predicate::str::contains("\"completion_rate\": 100.0"));
}

#[test]
fn test_week_marks_past_scheduled_session_as_missed() {
    let db_path = setup_test_db("week_missed");
    init_db_with_client(&db_path);

    cw().args([
        "--db", &db_path, "session", "add", "2024-01-02", "--client", "1", "--time", "08:00",
    ])
    .assert()
    .success();

    cw().args([
        "--db",
        &db_path,
        "week",
        "--client",
        "1",
        "--date",
        "2024-01-02",
        "--now",
        "2024-01-04 12:00",
        "--json",
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains("\"status\": \"missed\""))
    .stdout(predicate::str::contains("\"name\": \"Custom Session\""))
    .stdout(predicate::str::contains("\"completion_rate\": 0.0"));

    cw().args([
        "--db",
        &db_path,
        "week",
        "--client",
        "1",
        "--date",
        "2024-01-02",
        "--now",
        "2024-01-01 12:00",
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains("scheduled"))
    .stdout(predicate::str::contains("Alice"));
}

#[test]
fn test_session_status_and_delete() {
    let db_path = setup_test_db("session_status_delete");
    init_db_with_client(&db_path);

    cw().args(["--db", &db_path, "session", "add", "2024-01-05", "--client", "1"])
        .assert()
        .success();

    cw().args(["--db", &db_path, "session", "status", "1", "no-show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("no_show"));

    cw().args(["--db", &db_path, "session", "status", "1", "postponed"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid session status"));

    cw().args(["--db", &db_path, "session", "del", "1", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("has been deleted"));

    cw().args(["--db", &db_path, "session", "complete", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Session #1 not found"));
}

#[test]
fn test_week_requires_a_client() {
    let db_path = setup_test_db("week_requires_client");
    init_db_with_client(&db_path);

    cw().args(["--db", &db_path, "week"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no client given"));

    cw().args(["--db", &db_path, "week", "--client", "42"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Client #42 not found"));
}

#[test]
fn test_dashboard_lists_every_client() {
    let db_path = setup_test_db("dashboard_clients");
    init_db_with_client(&db_path);

    cw().args(["--db", &db_path, "client", "add", "Bruno"])
        .assert()
        .success();

    cw().args(["--db", &db_path, "session", "add", "2024-01-02", "--client", "2"])
        .assert()
        .success();
    cw().args(["--db", &db_path, "session", "complete", "1", "--duration", "30"])
        .assert()
        .success();

    cw().args([
        "--db",
        &db_path,
        "dashboard",
        "--date",
        "2024-01-03",
        "--now",
        "2024-01-04 12:00",
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains("Alice"))
    .stdout(predicate::str::contains("Bruno"))
    .stdout(predicate::str::contains("100%"));
}

#[test]
fn test_plan_crud() {
    let db_path = setup_test_db("plan_crud");
    init_db_with_client(&db_path);

    cw().args([
        "--db",
        &db_path,
        "plan",
        "add",
        "Base building",
        "--client",
        "1",
        "--per-week",
        "3",
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains("Workout plan #1 'Base building' created"));

    cw().args(["--db", &db_path, "plan", "update", "1", "--per-week", "4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("per week:     4"));

    cw().args(["--db", &db_path, "plan", "update", "1", "--per-week", "9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("between 0 and 7"));

    cw().args(["--db", &db_path, "plan", "list", "--client", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Base building"));

    cw().args(["--db", &db_path, "plan", "del", "1", "-y"])
        .assert()
        .success();

    cw().args(["--db", &db_path, "plan", "show", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Workout plan #1 not found"));
}

#[test]
fn test_log_records_operations() {
    let db_path = setup_test_db("log_records");
    init_db_with_client(&db_path);

    cw().args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(predicate::str::contains("migration_applied"))
        .stdout(predicate::str::contains("client_add"));
}

#[test]
fn test_week_rejects_date_without_a_full_window() {
    let db_path = setup_test_db("week_edge_of_range");
    init_db_with_client(&db_path);

    cw().args(["--db", &db_path, "week", "--client", "1", "--date=+262142-12-31"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: Invalid date format"))
        .stderr(predicate::str::contains("panicked").not());

    cw().args(["--db", &db_path, "dashboard", "--date=+262142-12-31"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("panicked").not());
}
