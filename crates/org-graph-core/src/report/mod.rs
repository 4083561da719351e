//! In-memory report filters over loaded employee, team and vacation records.

use std::collections::{HashMap, HashSet};

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::types::{Employee, EmployeeId, Team, TeamId, Vacation};


/// Used vacation days of one employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsedVacationDays {
    pub employee_id: EmployeeId,
    pub used_days: u32,
}

/// Borrowed view over the collections a report runs against.
#[derive(Debug, Clone, Copy)]
pub struct ReportContext<'a> {
    pub employees: &'a [Employee],
    pub teams: &'a [Team],
    pub vacations: &'a [Vacation],
}

impl<'a> ReportContext<'a> {
    pub fn new(employees: &'a [Employee], teams: &'a [Team], vacations: &'a [Vacation]) -> Self {
        Self {
            employees,
            teams,
            vacations,
        }
    }

    fn employees_with_vacation_in(&self, year: i32) -> HashSet<EmployeeId> {
        self.vacations
            .iter()
            .filter(|v| v.year() == year)
            .map(|v| v.employee_id)
            .collect()
    }

    /// Members of the team named `team_name` with at least one vacation
    /// starting in `year`, in input order.
    ///
    /// Unknown team names yield an empty list.
    pub fn team_members_with_vacations_in_year(
        &self,
        team_name: &str,
        year: i32,
    ) -> Vec<&'a Employee> {
        let team_ids: HashSet<TeamId> = self
            .teams
            .iter()
            .filter(|t| t.name == team_name)
            .map(|t| t.id)
            .collect();
        if team_ids.is_empty() {
            tracing::debug!(team_name, "No team with this name");
            return Vec::new();
        }

        let on_vacation = self.employees_with_vacation_in(year);

        self.employees
            .iter()
            .filter(|e| e.team_id.is_some_and(|id| team_ids.contains(&id)))
            .filter(|e| on_vacation.contains(&e.id))
            .collect()
    }

    /// Days each employee has already used in `today`'s year.
    ///
    /// A vacation counts when it starts in that year and its `date_until`
    /// lies strictly before `today`. Every employee is reported, in input
    /// order, including those with zero used days.
    pub fn used_vacation_days(
        &self,
        today: NaiveDate,
        hours_per_day: u32,
    ) -> Vec<UsedVacationDays> {
        let year = today.year();
        let hours_per_day = u64::from(hours_per_day.max(1));

        let mut hours: HashMap<EmployeeId, u64> = HashMap::new();
        for v in self
            .vacations
            .iter()
            .filter(|v| v.year() == year && v.ended_before(today))
        {
            *hours.entry(v.employee_id).or_insert(0) += u64::from(v.number_of_hours);
        }

        self.employees
            .iter()
            .map(|e| {
                let used = hours.get(&e.id).copied().unwrap_or(0) / hours_per_day;
                UsedVacationDays {
                    employee_id: e.id,
                    used_days: u32::try_from(used).unwrap_or(u32::MAX),
                }
            })
            .collect()
    }

    /// Teams none of whose members has a vacation starting in `year`.
    ///
    /// Teams without members qualify.
    pub fn teams_without_vacations_in_year(&self, year: i32) -> Vec<&'a Team> {
        let on_vacation = self.employees_with_vacation_in(year);

        let busy_teams: HashSet<TeamId> = self
            .employees
            .iter()
            .filter(|e| on_vacation.contains(&e.id))
            .filter_map(|e| e.team_id)
            .collect();

        self.teams
            .iter()
            .filter(|t| !busy_teams.contains(&t.id))
            .collect()
    }
}
