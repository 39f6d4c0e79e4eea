//! Persistence-collaborator contract for household snapshots.

use std::{
    collections::HashSet,
    path::{Path, PathBuf},
};

use hearth_domain::Household;

use crate::CoreError;

/// Describes a persisted backup artifact for a household.
#[derive(Debug, Clone)]
pub struct HouseholdBackupInfo {
    pub household: String,
    pub id: String,
    pub created_at: String,
    pub path: PathBuf,
}

/// Abstraction over persistence backends capable of storing households
/// and backups.
///
/// Availability is reported per call: `probe` returns a fresh result the
/// caller owns, and implementations must not cache a process-wide
/// availability flag — each call site decides how to react to an
/// unreachable backend.
pub trait HouseholdStorage: Send + Sync {
    fn save_household(&self, name: &str, household: &Household) -> Result<(), CoreError>;
    fn load_household(&self, name: &str) -> Result<Household, CoreError>;
    fn list_households(&self) -> Result<Vec<String>, CoreError>;
    fn delete_household(&self, name: &str) -> Result<(), CoreError>;
    fn save_household_to_path(&self, household: &Household, path: &Path) -> Result<(), CoreError>;
    fn load_household_from_path(&self, path: &Path) -> Result<Household, CoreError>;
    fn backup_household(
        &self,
        name: &str,
        household: &Household,
        note: Option<&str>,
    ) -> Result<HouseholdBackupInfo, CoreError>;
    fn list_backups(&self, name: &str) -> Result<Vec<HouseholdBackupInfo>, CoreError>;
    fn restore_backup(&self, backup: &HouseholdBackupInfo) -> Result<Household, CoreError>;

    /// Checks that the backend is reachable right now.
    fn probe(&self) -> Result<(), CoreError>;
}

/// Detects referential anomalies within a household snapshot.
///
/// Anomalies never fail aggregation; they are surfaced for the caller to
/// report.
pub fn household_warnings(household: &Household) -> Vec<String> {
    let known_persons: HashSet<&str> = household
        .persons
        .iter()
        .map(|person| person.name.as_str())
        .collect();
    let mut warnings = Vec::new();

    for expense in &household.expenses {
        if !expense.person.is_empty() && !known_persons.contains(expense.person.as_str()) {
            warnings.push(format!(
                "expense {} names unregistered member `{}`",
                expense.id, expense.person
            ));
        }
        if expense.amount < 0.0 {
            warnings.push(format!("expense {} has a negative amount", expense.id));
        }
    }
    for income in &household.incomes {
        if !income.person.is_empty() && !known_persons.contains(income.person.as_str()) {
            warnings.push(format!(
                "income {} names unregistered member `{}`",
                income.id, income.person
            ));
        }
        if income.amount < 0.0 {
            warnings.push(format!("income {} has a negative amount", income.id));
        }
    }
    for plan in &household.plans {
        let mut seen = HashSet::new();
        for entry in &plan.expenses {
            if !seen.insert(entry.expense.id) {
                warnings.push(format!(
                    "plan `{}` snapshots expense {} more than once",
                    plan.name, entry.expense.id
                ));
            }
        }
        let mut seen = HashSet::new();
        for entry in &plan.incomes {
            if !seen.insert(entry.income.id) {
                warnings.push(format!(
                    "plan `{}` snapshots income {} more than once",
                    plan.name, entry.income.id
                ));
            }
        }
    }
    for id in &household.active_plan_ids {
        if household.plan(*id).is_none() {
            warnings.push(format!("comparison set references missing plan {id}"));
        }
    }
    warnings
}
