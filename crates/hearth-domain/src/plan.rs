//! Domain models for what-if plans: frozen record snapshots with
//! per-entry enable flags.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::*;
use crate::record::{Expense, Income};

fn default_plan_id() -> Uuid {
    Uuid::new_v4()
}

fn default_enabled() -> bool {
    true
}

/// A named snapshot of the household's records taken at creation time.
///
/// Entries are frozen copies: later edits to live records never reach a
/// plan. Only the plan's own toggle operations mutate it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Plan {
    #[serde(default = "default_plan_id")]
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub expenses: Vec<PlanExpense>,
    #[serde(default)]
    pub incomes: Vec<PlanIncome>,
}

impl Plan {
    /// Builds a plan by snapshotting the given live records, every entry
    /// enabled.
    pub fn snapshot(
        name: impl Into<String>,
        description: impl Into<String>,
        expenses: &[Expense],
        incomes: &[Income],
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            description: description.into(),
            created_at: Utc::now(),
            expenses: expenses.iter().cloned().map(PlanExpense::from).collect(),
            incomes: incomes.iter().cloned().map(PlanIncome::from).collect(),
        }
    }

    pub fn expense(&self, id: Uuid) -> Option<&PlanExpense> {
        self.expenses.iter().find(|entry| entry.expense.id == id)
    }

    pub fn expense_mut(&mut self, id: Uuid) -> Option<&mut PlanExpense> {
        self.expenses.iter_mut().find(|entry| entry.expense.id == id)
    }

    pub fn income(&self, id: Uuid) -> Option<&PlanIncome> {
        self.incomes.iter().find(|entry| entry.income.id == id)
    }

    pub fn income_mut(&mut self, id: Uuid) -> Option<&mut PlanIncome> {
        self.incomes.iter_mut().find(|entry| entry.income.id == id)
    }

    /// Distinct non-empty person labels across both entry kinds, in
    /// first-seen order.
    pub fn persons(&self) -> Vec<String> {
        let mut persons: Vec<String> = Vec::new();
        let expense_persons = self.expenses.iter().filter_map(|e| e.expense.person());
        let income_persons = self.incomes.iter().filter_map(|i| i.income.person());
        for person in expense_persons.chain(income_persons) {
            if !persons.iter().any(|known| known == person) {
                persons.push(person.to_string());
            }
        }
        persons
    }
}

impl Identifiable for Plan {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl NamedEntity for Plan {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Displayable for Plan {
    fn display_label(&self) -> String {
        format!(
            "{} ({} expenses, {} incomes)",
            self.name,
            self.expenses.len(),
            self.incomes.len()
        )
    }
}

/// A frozen expense copy carrying the plan-local enable flag.
///
/// Serialized flattened so the wire shape stays "the record plus an
/// `enabled` key".
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlanExpense {
    #[serde(flatten)]
    pub expense: Expense,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

impl PlanExpense {
    /// The one place the two-flag rule lives: an entry counts toward plan
    /// totals only when it is enabled AND was active at snapshot time.
    pub fn effectively_included(&self) -> bool {
        self.enabled && self.expense.active
    }
}

impl From<Expense> for PlanExpense {
    fn from(expense: Expense) -> Self {
        Self {
            expense,
            enabled: true,
        }
    }
}

/// A frozen income copy carrying the plan-local enable flag.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlanIncome {
    #[serde(flatten)]
    pub income: Income,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

impl PlanIncome {
    /// Income inclusion is governed by the enable flag alone, mirroring
    /// how live income aggregation ignores the active flag.
    pub fn effectively_included(&self) -> bool {
        self.enabled
    }
}

impl From<Income> for PlanIncome {
    fn from(income: Income) -> Self {
        Self {
            income,
            enabled: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::Frequency;

    fn sample_records() -> (Vec<Expense>, Vec<Income>) {
        let expenses = vec![
            Expense::new("A", "Rent", 1200.0, Frequency::Monthly, "Housing"),
            Expense::new("B", "Gym", 25.0, Frequency::Monthly, "Subscriptions").inactive(),
        ];
        let incomes =
            vec![Income::new("A", "Acme", "Salary", 4000.0, Frequency::Monthly).gross(Some(0.25))];
        (expenses, incomes)
    }

    #[test]
    fn snapshot_copies_every_record_enabled() {
        let (expenses, incomes) = sample_records();
        let plan = Plan::snapshot("Baseline", "", &expenses, &incomes);
        assert_eq!(plan.expenses.len(), 2);
        assert_eq!(plan.incomes.len(), 1);
        assert!(plan.expenses.iter().all(|entry| entry.enabled));
        assert!(plan.incomes.iter().all(|entry| entry.enabled));
    }

    #[test]
    fn snapshot_is_isolated_from_live_mutation() {
        let (mut expenses, incomes) = sample_records();
        let plan = Plan::snapshot("Frozen", "", &expenses, &incomes);
        expenses[0].active = false;
        expenses[0].amount = 9999.0;
        let entry = plan.expense(expenses[0].id).unwrap();
        assert!(entry.expense.active);
        assert!((entry.expense.amount - 1200.0).abs() < f64::EPSILON);
    }

    #[test]
    fn inclusion_requires_enabled_and_snapshot_active() {
        let (expenses, incomes) = sample_records();
        let mut plan = Plan::snapshot("Rules", "", &expenses, &incomes);
        // Enabled but snapshot-inactive stays excluded.
        assert!(!plan.expenses[1].effectively_included());
        // Disabled overrides snapshot-active.
        plan.expenses[0].enabled = false;
        assert!(!plan.expenses[0].effectively_included());
        plan.expenses[0].enabled = true;
        assert!(plan.expenses[0].effectively_included());
    }

    #[test]
    fn entries_serialize_flattened_with_enabled_key() {
        let (expenses, incomes) = sample_records();
        let plan = Plan::snapshot("Wire", "", &expenses, &incomes);
        let value = serde_json::to_value(&plan).unwrap();
        let first = &value["expenses"][0];
        assert_eq!(first["name"], "Rent");
        assert_eq!(first["enabled"], true);
        let back: Plan = serde_json::from_value(value).unwrap();
        assert_eq!(back, plan);
    }

    #[test]
    fn persons_lists_both_kinds_without_duplicates() {
        let (expenses, incomes) = sample_records();
        let plan = Plan::snapshot("People", "", &expenses, &incomes);
        assert_eq!(plan.persons(), vec!["A".to_string(), "B".to_string()]);
    }
}
