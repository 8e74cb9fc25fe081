use crate::api::attendance::{AttendanceResponse, CreateAttendance};
use crate::api::user::{CreateUser, UserResponse};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Attendance API",
        version = "1.0.0",
        description = r#"
Attendance-tracking backend.

- **Users** — create, list, and fetch users
- **Attendance** — record daily status (present / absent / late / half-day) with optional check-in/check-out times
- **Search** — case-insensitive substring search over user names and emails

Built with **Actix Web**, **SQLx**, and **Utoipa**.
"#,
    ),
    paths(
        crate::api::user::create_user,
        crate::api::user::list_users,
        crate::api::user::get_user,
        crate::api::user::search_users,

        crate::api::attendance::create_attendance,
        crate::api::attendance::attendance_for_user,
        crate::api::attendance::attendance_by_date
    ),
    components(
        schemas(
            CreateUser,
            UserResponse,
            CreateAttendance,
            AttendanceResponse
        )
    ),
    tags(
        (name = "Users", description = "User management APIs"),
        (name = "Attendance", description = "Attendance record APIs"),
        (name = "Search", description = "User search APIs"),
    )
)]
pub struct ApiDoc;
