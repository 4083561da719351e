//! Vacation requests and yearly vacation packages.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::EmployeeId;

/// Vacation package identifier.
pub type VacationPackageId = i64;

/// Vacation request identifier.
pub type VacationId = i64;

/// Yearly vacation quota granted to the employees that reference it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VacationPackage {
    pub id: VacationPackageId,
    pub name: String,
    pub granted_days: u32,
    pub year: i32,
}

impl VacationPackage {
    pub fn new(
        id: VacationPackageId,
        name: impl Into<String>,
        granted_days: u32,
        year: i32,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            granted_days,
            year,
        }
    }
}

/// A single vacation request.
///
/// `number_of_hours` is what the request consumes from the quota; the date
/// range is informational except for year and "already taken" checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vacation {
    pub id: VacationId,
    pub employee_id: EmployeeId,
    pub date_since: NaiveDate,
    pub date_until: NaiveDate,
    pub number_of_hours: u32,
    #[serde(default)]
    pub is_partial_vacation: bool,
}

impl Vacation {
    /// Create a full-day vacation request.
    pub fn new(
        id: VacationId,
        employee_id: EmployeeId,
        date_since: NaiveDate,
        date_until: NaiveDate,
        number_of_hours: u32,
    ) -> Self {
        Self {
            id,
            employee_id,
            date_since,
            date_until,
            number_of_hours,
            is_partial_vacation: false,
        }
    }

    /// Calendar year the vacation is attributed to (year of `date_since`).
    #[inline]
    pub fn year(&self) -> i32 {
        self.date_since.year()
    }

    /// True if the whole vacation lies strictly before `today`.
    #[inline]
    pub fn ended_before(&self, today: NaiveDate) -> bool {
        self.date_until < today
    }
}
