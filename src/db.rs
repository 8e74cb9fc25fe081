use anyhow::Context;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

pub async fn init_db(database_url: &str) -> PgPool {
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(database_url)
        .await
        .expect("Failed to connect to database");

    create_schema(&pool)
        .await
        .expect("Failed to create database schema");

    pool
}

/// Creates both tables if absent. There is no migration mechanism; the
/// schema is owned entirely by these two statements.
async fn create_schema(pool: &PgPool) -> anyhow::Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            email TEXT NOT NULL UNIQUE,
            role TEXT NOT NULL,
            department TEXT
        )
        "#,
    )
    .execute(pool)
    .await
    .context("creating users table")?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS attendance_records (
            id TEXT PRIMARY KEY,
            user_id TEXT NOT NULL REFERENCES users(id) ON DELETE CASCADE,
            date TEXT NOT NULL,
            status TEXT NOT NULL,
            check_in TEXT,
            check_out TEXT,
            notes TEXT
        )
        "#,
    )
    .execute(pool)
    .await
    .context("creating attendance_records table")?;

    Ok(())
}
