use progtrack_core::db::migrations::latest_version;
use progtrack_core::db::{open_db, open_db_in_memory, DbError};
use progtrack_core::{ProgramSlot, SqliteProgramSlot, PROGRAMS_SLOT_KEY};
use rusqlite::Connection;

#[derive(Debug, PartialEq, Eq)]
struct Column {
    name: String,
    decl_type: String,
    not_null: bool,
    primary_key: bool,
}

fn column(name: &str, decl_type: &str, not_null: bool, primary_key: bool) -> Column {
    Column {
        name: name.to_string(),
        decl_type: decl_type.to_string(),
        not_null,
        primary_key,
    }
}

fn kv_slot_columns(conn: &Connection) -> Vec<Column> {
    let mut stmt = conn.prepare("PRAGMA table_info(kv_slots);").unwrap();
    stmt.query_map([], |row| {
        Ok(Column {
            name: row.get(1)?,
            decl_type: row.get(2)?,
            not_null: row.get::<_, i64>(3)? != 0,
            primary_key: row.get::<_, i64>(5)? != 0,
        })
    })
    .unwrap()
    .collect::<Result<Vec<_>, _>>()
    .unwrap()
}

fn schema_version(conn: &Connection) -> u32 {
    conn.query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap()
}

#[test]
fn fresh_database_has_kv_slots_with_expected_shape() {
    let conn = open_db_in_memory().unwrap();

    assert_eq!(schema_version(&conn), latest_version());
    assert_eq!(
        kv_slot_columns(&conn),
        vec![
            column("key", "TEXT", true, true),
            column("value", "TEXT", true, false),
            column("updated_at", "INTEGER", true, false),
        ]
    );
}

#[test]
fn kv_slots_enforces_unique_keys_and_present_values() {
    let conn = open_db_in_memory().unwrap();
    conn.execute(
        "INSERT INTO kv_slots (key, value) VALUES (?1, '[]');",
        [PROGRAMS_SLOT_KEY],
    )
    .unwrap();

    let updated_at: i64 = conn
        .query_row(
            "SELECT updated_at FROM kv_slots WHERE key = ?1;",
            [PROGRAMS_SLOT_KEY],
            |row| row.get(0),
        )
        .unwrap();
    assert!(updated_at > 0);

    assert!(conn
        .execute(
            "INSERT INTO kv_slots (key, value) VALUES (?1, '[]');",
            [PROGRAMS_SLOT_KEY],
        )
        .is_err());
    assert!(conn
        .execute("INSERT INTO kv_slots (key, value) VALUES ('other', NULL);", [])
        .is_err());
}

#[test]
fn reopening_file_database_keeps_version_and_slot() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("progtrack.sqlite3");

    {
        let conn = open_db(&path).unwrap();
        SqliteProgramSlot::new(&conn)
            .write_slot(PROGRAMS_SLOT_KEY, "[]")
            .unwrap();
    }

    let conn = open_db(&path).unwrap();
    assert_eq!(schema_version(&conn), latest_version());
    assert_eq!(
        SqliteProgramSlot::new(&conn)
            .read_slot(PROGRAMS_SLOT_KEY)
            .unwrap()
            .as_deref(),
        Some("[]")
    );
}

#[test]
fn database_from_newer_build_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.sqlite3");
    Connection::open(&path)
        .unwrap()
        .execute_batch("PRAGMA user_version = 999;")
        .unwrap();

    let err = open_db(&path).unwrap_err();
    assert!(matches!(
        err,
        DbError::UnsupportedSchemaVersion { db_version: 999, latest_supported }
            if latest_supported == latest_version()
    ));
}
