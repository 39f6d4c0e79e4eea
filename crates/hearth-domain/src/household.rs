//! The household aggregate handed between persistence and the core.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::goal::Goal;
use crate::person::Person;
use crate::plan::Plan;
use crate::record::{Expense, Income};

const CURRENT_SCHEMA_VERSION: u8 = 1;

/// A full household snapshot: member registry, live records, goals, and
/// the plans the core owns end-to-end.
///
/// Live records are already-validated value objects supplied by the
/// persistence collaborator; the aggregate holds them for the duration of
/// a session, not as the system of record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Household {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub persons: Vec<Person>,
    #[serde(default)]
    pub expenses: Vec<Expense>,
    #[serde(default)]
    pub incomes: Vec<Income>,
    #[serde(default)]
    pub goals: Vec<Goal>,
    #[serde(default)]
    pub plans: Vec<Plan>,
    /// Plans marked for side-by-side comparison, in display order.
    #[serde(default)]
    pub active_plan_ids: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default = "Household::schema_version_default")]
    pub schema_version: u8,
}

impl Household {
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            persons: Vec::new(),
            expenses: Vec::new(),
            incomes: Vec::new(),
            goals: Vec::new(),
            plans: Vec::new(),
            active_plan_ids: Vec::new(),
            created_at: now,
            updated_at: now,
            schema_version: CURRENT_SCHEMA_VERSION,
        }
    }

    pub fn add_person(&mut self, person: Person) -> Uuid {
        let id = person.id;
        self.persons.push(person);
        self.touch();
        id
    }

    pub fn add_expense(&mut self, expense: Expense) -> Uuid {
        let id = expense.id;
        self.expenses.push(expense);
        self.touch();
        id
    }

    pub fn add_income(&mut self, income: Income) -> Uuid {
        let id = income.id;
        self.incomes.push(income);
        self.touch();
        id
    }

    pub fn add_goal(&mut self, goal: Goal) -> Uuid {
        let id = goal.id;
        self.goals.push(goal);
        self.touch();
        id
    }

    pub fn expense(&self, id: Uuid) -> Option<&Expense> {
        self.expenses.iter().find(|expense| expense.id == id)
    }

    pub fn expense_mut(&mut self, id: Uuid) -> Option<&mut Expense> {
        self.expenses.iter_mut().find(|expense| expense.id == id)
    }

    pub fn income(&self, id: Uuid) -> Option<&Income> {
        self.incomes.iter().find(|income| income.id == id)
    }

    pub fn income_mut(&mut self, id: Uuid) -> Option<&mut Income> {
        self.incomes.iter_mut().find(|income| income.id == id)
    }

    pub fn plan(&self, id: Uuid) -> Option<&Plan> {
        self.plans.iter().find(|plan| plan.id == id)
    }

    pub fn plan_mut(&mut self, id: Uuid) -> Option<&mut Plan> {
        self.plans.iter_mut().find(|plan| plan.id == id)
    }

    pub fn person_by_name(&self, name: &str) -> Option<&Person> {
        self.persons.iter().find(|person| person.name == name)
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    pub fn schema_version_default() -> u8 {
        CURRENT_SCHEMA_VERSION
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::Frequency;

    #[test]
    fn add_helpers_return_ids_and_touch_the_aggregate() {
        let mut household = Household::new("Demo");
        let before = household.updated_at;
        let id = household.add_expense(Expense::new(
            "Taylor",
            "Rent",
            760.0,
            Frequency::Monthly,
            "Housing",
        ));
        assert!(household.expense(id).is_some());
        assert!(household.updated_at >= before);
    }

    #[test]
    fn round_trips_through_json_with_plans_intact() {
        let mut household = Household::new("Persisted");
        household.add_income(
            Income::new("Kristopher", "Apple", "Salary", 8333.33, Frequency::Monthly)
                .gross(Some(0.33)),
        );
        let expenses = household.expenses.clone();
        let incomes = household.incomes.clone();
        household
            .plans
            .push(Plan::snapshot("PlanA", "first", &expenses, &incomes));
        household.active_plan_ids.push(household.plans[0].id);

        let json = serde_json::to_string(&household).unwrap();
        let back: Household = serde_json::from_str(&json).unwrap();
        assert_eq!(back.plans.len(), 1);
        assert_eq!(back.plans[0].name, "PlanA");
        assert_eq!(back.active_plan_ids, household.active_plan_ids);
        assert_eq!(back.schema_version, Household::schema_version_default());
    }

    #[test]
    fn missing_collections_default_to_empty() {
        let json = r#"{
            "id": "6e9a9aa6-0b59-4d0e-9f2f-2f1f0a3c8b11",
            "name": "Sparse",
            "created_at": "2025-01-01T00:00:00Z",
            "updated_at": "2025-01-01T00:00:00Z"
        }"#;
        let household: Household = serde_json::from_str(json).unwrap();
        assert!(household.expenses.is_empty());
        assert!(household.plans.is_empty());
        assert_eq!(household.schema_version, Household::schema_version_default());
    }
}
