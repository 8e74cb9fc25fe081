use crate::model::attendance::AttendanceRecord;
use crate::model::user::User;
use sqlx::PgPool;
use uuid::Uuid;

pub async fn create_user(
    pool: &PgPool,
    name: &str,
    email: &str,
    role: &str,
    department: Option<&str>,
) -> Result<User, sqlx::Error> {
    let id = Uuid::new_v4().to_string();

    sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (id, name, email, role, department)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, name, email, role, department
        "#,
    )
    .bind(id)
    .bind(name)
    .bind(email)
    .bind(role)
    .bind(department)
    .fetch_one(pool)
    .await
}

pub async fn list_users(pool: &PgPool) -> Result<Vec<User>, sqlx::Error> {
    sqlx::query_as::<_, User>("SELECT id, name, email, role, department FROM users")
        .fetch_all(pool)
        .await
}

pub async fn get_user(pool: &PgPool, user_id: &str) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>("SELECT id, name, email, role, department FROM users WHERE id = $1")
        .bind(user_id)
        .fetch_optional(pool)
        .await
}

/// Exact, case-sensitive match.
pub async fn get_user_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        "SELECT id, name, email, role, department FROM users WHERE email = $1",
    )
    .bind(email)
    .fetch_optional(pool)
    .await
}

/// Inserts the record as given. `status` is not checked here; the HTTP
/// boundary is the only place the enum is enforced.
pub async fn create_attendance(
    pool: &PgPool,
    user_id: &str,
    date: &str,
    status: &str,
    check_in: Option<&str>,
    check_out: Option<&str>,
    notes: Option<&str>,
) -> Result<AttendanceRecord, sqlx::Error> {
    let id = Uuid::new_v4().to_string();

    sqlx::query_as::<_, AttendanceRecord>(
        r#"
        INSERT INTO attendance_records (id, user_id, date, status, check_in, check_out, notes)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING id, user_id, date, status, check_in, check_out, notes
        "#,
    )
    .bind(id)
    .bind(user_id)
    .bind(date)
    .bind(status)
    .bind(check_in)
    .bind(check_out)
    .bind(notes)
    .fetch_one(pool)
    .await
}

/// Ordered by the literal date string, descending. The column is TEXT, so
/// this is lexicographic, not calendar order.
pub async fn list_attendance_by_user(
    pool: &PgPool,
    user_id: &str,
) -> Result<Vec<AttendanceRecord>, sqlx::Error> {
    sqlx::query_as::<_, AttendanceRecord>(
        r#"
        SELECT id, user_id, date, status, check_in, check_out, notes
        FROM attendance_records
        WHERE user_id = $1
        ORDER BY date DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}

pub async fn list_attendance_by_date(
    pool: &PgPool,
    date_str: &str,
) -> Result<Vec<AttendanceRecord>, sqlx::Error> {
    sqlx::query_as::<_, AttendanceRecord>(
        r#"
        SELECT id, user_id, date, status, check_in, check_out, notes
        FROM attendance_records
        WHERE date = $1
        "#,
    )
    .bind(date_str)
    .fetch_all(pool)
    .await
}

/// Case-insensitive substring match on name or email.
pub async fn search_user_by_name_or_email(
    pool: &PgPool,
    q: &str,
) -> Result<Vec<User>, sqlx::Error> {
    let like = format!("%{}%", q);

    sqlx::query_as::<_, User>(
        r#"
        SELECT id, name, email, role, department
        FROM users
        WHERE name ILIKE $1 OR email ILIKE $1
        "#,
    )
    .bind(like)
    .fetch_all(pool)
    .await
}
