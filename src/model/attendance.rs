use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

#[derive(Debug, Serialize, Deserialize, sqlx::FromRow)]
pub struct AttendanceRecord {
    pub id: String,
    pub user_id: String,
    /// Opaque "YYYY-MM-DD" string, never parsed as a calendar date.
    pub date: String,
    pub status: String,
    pub check_in: Option<String>,
    pub check_out: Option<String>,
    pub notes: Option<String>,
}

/// Allowed attendance states. Checked at the HTTP boundary only; the
/// storage column stays plain TEXT.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum AttendanceStatus {
    Present,
    Absent,
    Late,
    HalfDay,
}

#[cfg(test)]
mod tests {
    use super::AttendanceStatus;
    use std::str::FromStr;

    #[test]
    fn parses_all_four_statuses() {
        assert_eq!(
            AttendanceStatus::from_str("present").unwrap(),
            AttendanceStatus::Present
        );
        assert_eq!(
            AttendanceStatus::from_str("absent").unwrap(),
            AttendanceStatus::Absent
        );
        assert_eq!(
            AttendanceStatus::from_str("late").unwrap(),
            AttendanceStatus::Late
        );
        assert_eq!(
            AttendanceStatus::from_str("half-day").unwrap(),
            AttendanceStatus::HalfDay
        );
    }

    #[test]
    fn rejects_unknown_status() {
        assert!(AttendanceStatus::from_str("vacation").is_err());
        assert!(AttendanceStatus::from_str("Present").is_err());
        assert!(AttendanceStatus::from_str("half_day").is_err());
        assert!(AttendanceStatus::from_str("").is_err());
    }

    #[test]
    fn displays_kebab_case() {
        assert_eq!(AttendanceStatus::HalfDay.to_string(), "half-day");
        assert_eq!(AttendanceStatus::Present.to_string(), "present");
    }
}
