//! Exercises the real MySQL store. Ignored by default; point the `DB_*`
//! variables at a scratch database and run with `cargo test -- --ignored`.

use std::time::Duration;

use tokio::sync::Mutex;

use task_service::config::Config;
use task_service::error::StoreError;
use task_service::routes::tasks::TaskPayload;
use task_service::store::mysql::POOL_SIZE;
use task_service::store::{MySqlTaskStore, TaskStore};

// The suite shares one scratch table, so tests take turns.
static DB_GATE: Mutex<()> = Mutex::const_new(());

async fn fresh_store() -> MySqlTaskStore {
    let config = Config::from_env().expect("DB_* variables are required for this suite");
    let store = MySqlTaskStore::connect(&config)
        .await
        .expect("MySQL must be reachable");

    sqlx::raw_sql(include_str!("../schema.sql"))
        .execute(store.pool())
        .await
        .expect("failed to apply schema.sql");
    sqlx::query("TRUNCATE TABLE tasks")
        .execute(store.pool())
        .await
        .expect("failed to reset the tasks table");

    store
}

fn payload(title: &str, description: Option<&str>, due_date: Option<&str>) -> TaskPayload {
    TaskPayload {
        title: Some(Some(title.to_string())),
        description: description.map(|text| Some(text.to_string())),
        due_date: due_date.map(|date| Some(date.to_string())),
    }
}

#[tokio::test]
#[ignore = "requires a running MySQL"]
async fn round_trip_create_get_list_update_delete() {
    let _guard = DB_GATE.lock().await;
    let store = fresh_store().await;

    store
        .create(&payload("Buy milk", Some("2%"), Some("2024-01-01")))
        .await
        .unwrap();

    let rows = store.list().await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].title, "Buy milk");
    assert_eq!(rows[0].description.as_deref(), Some("2%"));
    // The date comes back exactly as submitted.
    assert_eq!(rows[0].due_date.as_deref(), Some("2024-01-01"));

    let id = rows[0].id.to_string();
    let row = store.get(&id).await.unwrap().expect("row exists");
    assert_eq!(row, rows[0]);

    assert_eq!(
        store
            .update(&id, &payload("Buy bread", None, None))
            .await
            .unwrap(),
        1
    );
    let row = store.get(&id).await.unwrap().expect("row exists");
    assert_eq!(row.title, "Buy bread");
    assert_eq!(row.description, None);
    assert_eq!(row.due_date, None);

    assert_eq!(store.delete(&id).await.unwrap(), 1);
    assert!(store.get(&id).await.unwrap().is_none());
    assert_eq!(store.delete(&id).await.unwrap(), 0);
}

#[tokio::test]
#[ignore = "requires a running MySQL"]
async fn update_of_identical_values_still_reports_a_match() {
    let _guard = DB_GATE.lock().await;
    let store = fresh_store().await;

    let same = payload("unchanged", None, None);
    store.create(&same).await.unwrap();
    let id = store.list().await.unwrap()[0].id.to_string();

    // The connection runs with FOUND_ROWS, so a no-op write still counts
    // the matched row and the handler answers 200, not 404.
    assert_eq!(store.update(&id, &same).await.unwrap(), 1);
}

#[tokio::test]
#[ignore = "requires a running MySQL"]
async fn non_numeric_id_leaves_the_table_untouched() {
    let _guard = DB_GATE.lock().await;
    let store = fresh_store().await;

    store.create(&payload("kept", None, None)).await.unwrap();

    // SELECT downgrades the failed coercion to a warning, so reads are
    // deterministic: no row matches.
    assert!(store.get("abc").await.unwrap().is_none());

    // Data-change statements depend on the server's sql_mode: permissive
    // servers coerce 'abc' to 0 and match nothing (a 404 upstream), strict
    // servers abort the statement (a 500). Both are valid; no row may
    // change either way.
    match store.update("abc", &payload("x", None, None)).await {
        Ok(affected) => assert_eq!(affected, 0),
        Err(StoreError::Database(_)) => {}
    }
    match store.delete("abc").await {
        Ok(affected) => assert_eq!(affected, 0),
        Err(StoreError::Database(_)) => {}
    }

    let rows = store.list().await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].title, "kept");
}

#[tokio::test]
#[ignore = "requires a running MySQL"]
async fn acquisition_waits_for_a_free_connection() {
    let _guard = DB_GATE.lock().await;
    let store = fresh_store().await;

    let mut held = Vec::new();
    for _ in 0..POOL_SIZE {
        held.push(store.pool().acquire().await.unwrap());
    }

    let contended = store.clone();
    let waiter = tokio::spawn(async move { contended.list().await });

    tokio::time::sleep(Duration::from_millis(100)).await;
    assert!(!waiter.is_finished(), "list should wait, not fail");

    // Releasing one connection unblocks the queued call.
    held.pop();
    let rows = waiter.await.unwrap().unwrap();
    assert!(rows.is_empty());
}
