use chrono::NaiveDate;
use rattendance::core::add::{AddLogic, AddOptions};
use rattendance::db::pool::DbPool;
use rattendance::db::{attendance, holidays};
use rattendance::errors::AppError;
use rattendance::models::attendance::AttendanceFields;
use rattendance::models::interruption::Interruption;

fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn fields(start: &str, end: &str) -> AttendanceFields {
    AttendanceFields {
        start_time: Some(start.into()),
        end_time: Some(end.into()),
        break_minutes: Some(30),
        ..Default::default()
    }
}

#[test]
fn test_repeated_upsert_keeps_one_row() {
    let pool = DbPool::in_memory().unwrap();
    let date = d("2025-04-01");

    attendance::upsert(&pool.conn, &date, &fields("09:00", "17:00")).unwrap();
    attendance::upsert(&pool.conn, &date, &fields("08:00", "16:00")).unwrap();
    let last = attendance::upsert(&pool.conn, &date, &fields("10:00", "18:00")).unwrap();

    let rows: i64 = pool
        .conn
        .query_row(
            "SELECT COUNT(*) FROM attendance_records WHERE date = ?1",
            ["2025-04-01"],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(rows, 1);
    assert_eq!(attendance::count(&pool.conn).unwrap(), 1);
    assert_eq!(last.start_time.as_deref(), Some("10:00"));
    assert!(last.updated_at.is_some());
}

#[test]
fn test_upsert_replaces_every_field() {
    let pool = DbPool::in_memory().unwrap();
    let date = d("2025-04-01");

    let mut first = fields("09:00", "17:00");
    first.comment = Some("kept?".into());
    first.interruptions.push(Interruption::new("10:00", "10:15"));
    attendance::upsert(&pool.conn, &date, &first).unwrap();

    attendance::upsert(&pool.conn, &date, &fields("09:00", "17:00")).unwrap();

    let rec = attendance::get(&pool.conn, &date).unwrap().unwrap();
    assert_eq!(rec.comment, None);
    assert!(rec.interruptions.is_empty());
}

#[test]
fn test_interruptions_round_trip_through_store() {
    let pool = DbPool::in_memory().unwrap();
    let date = d("2025-04-02");

    let mut f = fields("09:00", "17:00");
    f.interruptions.push(Interruption::new("10:00", "10:30"));
    f.interruptions.push(Interruption {
        start: Some("15:00".into()),
        end: None,
    });
    attendance::upsert(&pool.conn, &date, &f).unwrap();

    let rec = attendance::get(&pool.conn, &date).unwrap().unwrap();
    assert_eq!(rec.interruptions, f.interruptions);
}

#[test]
fn test_delete_missing_record_is_not_found() {
    let pool = DbPool::in_memory().unwrap();

    let err = attendance::delete(&pool.conn, &d("2025-04-03")).unwrap_err();
    assert!(matches!(err, AppError::RecordNotFound(ref s) if s == "2025-04-03"));
}

#[test]
fn test_delete_existing_record() {
    let pool = DbPool::in_memory().unwrap();
    let date = d("2025-04-03");

    attendance::upsert(&pool.conn, &date, &fields("09:00", "17:00")).unwrap();
    attendance::delete(&pool.conn, &date).unwrap();

    assert!(attendance::get(&pool.conn, &date).unwrap().is_none());
}

#[test]
fn test_list_returns_only_the_month_in_date_order() {
    let pool = DbPool::in_memory().unwrap();

    for date in ["2025-04-20", "2025-03-31", "2025-04-02", "2025-05-01"] {
        attendance::upsert(&pool.conn, &d(date), &fields("09:00", "17:00")).unwrap();
    }

    let april = attendance::list(&pool.conn, 2025, 4).unwrap();
    let dates: Vec<NaiveDate> = april.iter().map(|r| r.date).collect();
    assert_eq!(dates, vec![d("2025-04-02"), d("2025-04-20")]);

    assert!(matches!(
        attendance::list(&pool.conn, 2025, 13),
        Err(AppError::InvalidMonth(_))
    ));
}

#[test]
fn test_add_logic_merges_and_clears() {
    let mut pool = DbPool::in_memory().unwrap();
    let date = d("2025-04-04");

    let opts = AddOptions {
        start: Some("09:00".into()),
        end: Some("17:00".into()),
        break_minutes: Some(45),
        interruptions: vec![Interruption::new("11:00", "11:10")],
        comment: Some("first".into()),
        ..Default::default()
    };
    AddLogic::apply(&mut pool, date, &opts).unwrap();

    let opts = AddOptions {
        side_job_minutes: Some(30),
        clear_interruptions: true,
        comment: Some(String::new()),
        ..Default::default()
    };
    let rec = AddLogic::apply(&mut pool, date, &opts).unwrap();

    assert_eq!(rec.start_time.as_deref(), Some("09:00"));
    assert_eq!(rec.break_minutes, Some(45));
    assert_eq!(rec.side_job_minutes, Some(30));
    assert!(rec.interruptions.is_empty());
    assert_eq!(rec.comment, None);

    let rec = AddLogic::apply(
        &mut pool,
        date,
        &AddOptions {
            clear_times: true,
            ..Default::default()
        },
    )
    .unwrap();
    assert!(rec.start_time.is_none() && rec.end_time.is_none());
}

#[test]
fn test_holiday_store_rules() {
    let pool = DbPool::in_memory().unwrap();
    let xmas = d("2025-12-25");

    holidays::add(&pool.conn, &xmas, "Christmas").unwrap();
    holidays::add(&pool.conn, &d("2025-12-26"), "St Stephen").unwrap();
    holidays::add(&pool.conn, &d("2026-01-01"), "New Year").unwrap();

    assert!(matches!(
        holidays::add(&pool.conn, &xmas, "Duplicate"),
        Err(AppError::HolidayExists(_))
    ));
    assert!(matches!(
        holidays::update(&pool.conn, &d("2025-12-24"), "Eve"),
        Err(AppError::HolidayNotFound(_))
    ));
    assert!(matches!(
        holidays::delete(&pool.conn, &d("2025-12-24")),
        Err(AppError::HolidayNotFound(_))
    ));

    let december = holidays::list(&pool.conn, 2025, 12).unwrap();
    assert_eq!(december.len(), 2);
    assert_eq!(december[0].name, "Christmas");

    let renamed = holidays::update(&pool.conn, &xmas, "Christmas Day").unwrap();
    assert_eq!(renamed.name, "Christmas Day");
    assert_eq!(holidays::count(&pool.conn).unwrap(), 3);
}

#[test]
fn test_migrations_are_idempotent() {
    let pool = DbPool::in_memory().unwrap();

    rattendance::db::migrate::run_pending_migrations(&pool.conn).unwrap();
    rattendance::db::migrate::run_pending_migrations(&pool.conn).unwrap();

    let applied: i64 = pool
        .conn
        .query_row(
            "SELECT COUNT(*) FROM log WHERE operation = 'migration_applied'",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(applied, 2);
}
