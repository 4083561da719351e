//! Vacation-day accounting.
//!
//! A pure reducer over already-loaded records: sum the hours an employee
//! booked in a year, convert to whole days, subtract from the package quota
//! and floor at zero.

use chrono::{Datelike, Local};

use crate::config::VacationConfig;
use crate::types::{Employee, Vacation, VacationPackage};


/// Computes remaining vacation days from booked vacations.
#[derive(Debug, Clone)]
pub struct VacationCalculator {
    hours_per_day: u32,
}

impl Default for VacationCalculator {
    fn default() -> Self {
        Self::new(&VacationConfig::default())
    }
}

impl VacationCalculator {
    pub fn new(config: &VacationConfig) -> Self {
        Self {
            hours_per_day: config.hours_per_day.max(1),
        }
    }

    pub fn hours_per_day(&self) -> u32 {
        self.hours_per_day
    }

    /// Whole days `employee` booked in `year`. Partial days are truncated.
    pub fn used_days(&self, employee: &Employee, vacations: &[Vacation], year: i32) -> u32 {
        let used_hours: u64 = vacations
            .iter()
            .filter(|v| v.employee_id == employee.id && v.year() == year)
            .map(|v| u64::from(v.number_of_hours))
            .sum();

        u32::try_from(used_hours / u64::from(self.hours_per_day)).unwrap_or(u32::MAX)
    }

    /// Days `employee` still has available in `year`.
    ///
    /// Returns 0 when the employee has no vacation package. Vacations of
    /// other employees in `vacations` are ignored.
    pub fn count_free_days(
        &self,
        employee: &Employee,
        vacations: &[Vacation],
        package: Option<&VacationPackage>,
        year: i32,
    ) -> u32 {
        let Some(package) = package else {
            tracing::trace!(employee_id = employee.id, "No vacation package, no free days");
            return 0;
        };

        let used_days = self.used_days(employee, vacations, year);
        let free_days = package.granted_days.saturating_sub(used_days);

        tracing::trace!(
            employee_id = employee.id,
            year,
            granted_days = package.granted_days,
            used_days,
            free_days,
            "Counted free vacation days"
        );

        free_days
    }

    /// [`count_free_days`](Self::count_free_days) for the current local year.
    pub fn count_free_days_current_year(
        &self,
        employee: &Employee,
        vacations: &[Vacation],
        package: Option<&VacationPackage>,
    ) -> u32 {
        self.count_free_days(employee, vacations, package, Local::now().year())
    }

    /// True if the employee has at least one free day left in `year`.
    pub fn can_request_vacation(
        &self,
        employee: &Employee,
        vacations: &[Vacation],
        package: Option<&VacationPackage>,
        year: i32,
    ) -> bool {
        self.count_free_days(employee, vacations, package, year) > 0
    }

    /// [`can_request_vacation`](Self::can_request_vacation) for the current local year.
    pub fn can_request_vacation_current_year(
        &self,
        employee: &Employee,
        vacations: &[Vacation],
        package: Option<&VacationPackage>,
    ) -> bool {
        self.can_request_vacation(employee, vacations, package, Local::now().year())
    }
}
