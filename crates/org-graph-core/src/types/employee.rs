//! Employee records.

use serde::{Deserialize, Serialize};

use super::{TeamId, VacationPackageId};

/// Employee identifier.
pub type EmployeeId = i64;

/// A single employee as supplied by the caller's store.
///
/// `superior_id` is the direct manager. Employees without a superior are the
/// roots of the organisation forest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: EmployeeId,
    pub name: String,
    #[serde(default)]
    pub team_id: Option<TeamId>,
    #[serde(default)]
    pub superior_id: Option<EmployeeId>,
    #[serde(default)]
    pub vacation_package_id: Option<VacationPackageId>,
}

impl Employee {
    /// Create a root employee with no team, superior or vacation package.
    pub fn new(id: EmployeeId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            team_id: None,
            superior_id: None,
            vacation_package_id: None,
        }
    }

    /// Builder: set the direct superior.
    #[must_use]
    pub fn with_superior(mut self, superior_id: EmployeeId) -> Self {
        self.superior_id = Some(superior_id);
        self
    }

    /// Builder: set the team.
    #[must_use]
    pub fn in_team(mut self, team_id: TeamId) -> Self {
        self.team_id = Some(team_id);
        self
    }

    /// Builder: set the vacation package.
    #[must_use]
    pub fn with_vacation_package(mut self, package_id: VacationPackageId) -> Self {
        self.vacation_package_id = Some(package_id);
        self
    }

    /// True if the employee reports to nobody.
    #[inline]
    pub fn is_root(&self) -> bool {
        self.superior_id.is_none()
    }
}
