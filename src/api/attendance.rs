use crate::crud;
use crate::model::attendance::{AttendanceRecord, AttendanceStatus};
use actix_web::{HttpResponse, Responder, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use sqlx::PgPool;
use std::str::FromStr;
use tracing::error;
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateAttendance {
    #[schema(example = "6f1c1b2a-0d3e-4e2f-9c7b-8a54d1e0f316")]
    pub user_id: String,
    #[schema(example = "2024-03-01", format = "date")]
    pub date: String,
    #[schema(example = "present")]
    pub status: String,
    #[schema(example = "2024-03-01T09:02:11")]
    pub check_in: Option<String>,
    #[schema(example = "2024-03-01T17:30:00")]
    pub check_out: Option<String>,
    pub notes: Option<String>,
}

/// Wire shape for attendance rows. External field names are camelCase
/// (`userId`, `checkIn`, `checkOut`) over the snake_case storage columns.
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceResponse {
    pub id: String,
    pub user_id: String,
    pub date: String,
    pub status: String,
    pub check_in: Option<String>,
    pub check_out: Option<String>,
    pub notes: Option<String>,
}

impl From<AttendanceRecord> for AttendanceResponse {
    fn from(rec: AttendanceRecord) -> Self {
        Self {
            id: rec.id,
            user_id: rec.user_id,
            date: rec.date,
            status: rec.status,
            check_in: rec.check_in,
            check_out: rec.check_out,
            notes: rec.notes,
        }
    }
}

/// Create attendance record
#[utoipa::path(
    post,
    path = "/attendance",
    request_body = CreateAttendance,
    responses(
        (status = 200, description = "Attendance record created", body = AttendanceResponse),
        (status = 400, description = "Status is not one of present, absent, late, half-day", body = Object, example = json!({
            "detail": "Invalid status"
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Attendance"
)]
pub async fn create_attendance(
    pool: web::Data<PgPool>,
    payload: web::Json<CreateAttendance>,
) -> actix_web::Result<impl Responder> {
    // Status check happens before any write; everything else is stored as given.
    if AttendanceStatus::from_str(&payload.status).is_err() {
        return Ok(HttpResponse::BadRequest().json(json!({
            "detail": "Invalid status"
        })));
    }

    let record = crud::create_attendance(
        pool.get_ref(),
        &payload.user_id,
        &payload.date,
        &payload.status,
        payload.check_in.as_deref(),
        payload.check_out.as_deref(),
        payload.notes.as_deref(),
    )
    .await
    .map_err(|e| {
        error!(error = %e, user_id = %payload.user_id, "Failed to create attendance record");
        actix_web::error::ErrorInternalServerError("Internal Server Error")
    })?;

    Ok(HttpResponse::Ok().json(AttendanceResponse::from(record)))
}

/// List attendance records for a user
#[utoipa::path(
    get,
    path = "/attendance/user/{user_id}",
    params(
        ("user_id", Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Records for the user, most recent date string first", body = [AttendanceResponse]),
        (status = 500, description = "Internal server error")
    ),
    tag = "Attendance"
)]
pub async fn attendance_for_user(
    pool: web::Data<PgPool>,
    path: web::Path<String>,
) -> actix_web::Result<impl Responder> {
    let user_id = path.into_inner();

    let records = crud::list_attendance_by_user(pool.get_ref(), &user_id)
        .await
        .map_err(|e| {
            error!(error = %e, %user_id, "Failed to list attendance by user");
            actix_web::error::ErrorInternalServerError("Internal Server Error")
        })?;

    Ok(HttpResponse::Ok().json(
        records
            .into_iter()
            .map(AttendanceResponse::from)
            .collect::<Vec<_>>(),
    ))
}

/// List attendance records for a date
#[utoipa::path(
    get,
    path = "/attendance/date/{date_str}",
    params(
        ("date_str", Path, description = "Date string, e.g. 2024-03-01")
    ),
    responses(
        (status = 200, description = "Records with an exact date-string match", body = [AttendanceResponse]),
        (status = 500, description = "Internal server error")
    ),
    tag = "Attendance"
)]
pub async fn attendance_by_date(
    pool: web::Data<PgPool>,
    path: web::Path<String>,
) -> actix_web::Result<impl Responder> {
    let date_str = path.into_inner();

    let records = crud::list_attendance_by_date(pool.get_ref(), &date_str)
        .await
        .map_err(|e| {
            error!(error = %e, %date_str, "Failed to list attendance by date");
            actix_web::error::ErrorInternalServerError("Internal Server Error")
        })?;

    Ok(HttpResponse::Ok().json(
        records
            .into_iter()
            .map(AttendanceResponse::from)
            .collect::<Vec<_>>(),
    ))
}

#[cfg(test)]
mod tests {
    use super::{AttendanceResponse, CreateAttendance};
    use crate::model::attendance::AttendanceRecord;

    #[test]
    fn create_attendance_reads_camel_case_fields() {
        let payload: CreateAttendance = serde_json::from_str(
            r#"{
                "userId": "u-1",
                "date": "2024-03-01",
                "status": "present",
                "checkIn": "2024-03-01T09:00:00"
            }"#,
        )
        .unwrap();
        assert_eq!(payload.user_id, "u-1");
        assert_eq!(payload.check_in.as_deref(), Some("2024-03-01T09:00:00"));
        assert!(payload.check_out.is_none());
        assert!(payload.notes.is_none());
    }

    #[test]
    fn attendance_response_writes_camel_case_fields() {
        let record = AttendanceRecord {
            id: "r-1".to_string(),
            user_id: "u-1".to_string(),
            date: "2024-03-01".to_string(),
            status: "late".to_string(),
            check_in: None,
            check_out: Some("2024-03-01T17:00:00".to_string()),
            notes: None,
        };
        let value = serde_json::to_value(AttendanceResponse::from(record)).unwrap();
        assert_eq!(value["userId"], "u-1");
        assert_eq!(value["checkOut"], "2024-03-01T17:00:00");
        assert_eq!(value["checkIn"], serde_json::Value::Null);
        assert!(value.get("user_id").is_none());
        assert!(value.get("check_in").is_none());
    }
}
