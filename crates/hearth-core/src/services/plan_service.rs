//! The what-if plan engine: snapshot lifecycle, enable toggles, and
//! baseline-versus-plan impact math.

use tracing::warn;
use uuid::Uuid;

use hearth_domain::{Household, Plan};

use crate::error::CoreError;

use super::frequency_service::FrequencyService;
use super::income_service::IncomeService;
use super::summary_service::SummaryService;
use super::ServiceResult;

/// Which snapshot collection a toggle addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Expense,
    Income,
}

/// Monthly/annual delta of a plan against the live baseline, with the
/// figures both sides were computed from.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PlanImpact {
    pub monthly_savings: f64,
    pub annual_savings: f64,
    pub current_monthly_expenses: f64,
    pub plan_monthly_expenses: f64,
    pub current_monthly_income: f64,
    pub plan_monthly_income: f64,
    pub current_monthly_balance: f64,
    pub plan_monthly_balance: f64,
}

/// Derived display state for one member within a plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonEnabled {
    pub person: String,
    pub enabled: bool,
}

/// Stateless plan operations over a [`Household`] aggregate.
///
/// Plans are the one entity this crate owns end-to-end: created here,
/// mutated only through these toggles, deleted here. Creation is atomic —
/// there is no draft state, a new plan immediately carries a full
/// snapshot of every live record.
pub struct PlanService;

impl PlanService {
    /// Snapshots all live records into a new plan with every entry
    /// enabled, returning its id.
    pub fn create_plan(
        household: &mut Household,
        name: &str,
        description: &str,
    ) -> ServiceResult<Uuid> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CoreError::InvalidInput("plan name must not be blank".into()));
        }
        let plan = Plan::snapshot(name, description, &household.expenses, &household.incomes);
        let id = plan.id;
        household.plans.push(plan);
        household.touch();
        Ok(id)
    }

    /// Renames or re-describes an existing plan.
    pub fn update_plan(
        household: &mut Household,
        plan_id: Uuid,
        name: &str,
        description: &str,
    ) -> ServiceResult<()> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CoreError::InvalidInput("plan name must not be blank".into()));
        }
        let plan = household
            .plan_mut(plan_id)
            .ok_or(CoreError::PlanNotFound(plan_id))?;
        plan.name = name.to_string();
        plan.description = description.to_string();
        household.touch();
        Ok(())
    }

    /// Flips the enable flag on exactly one snapshot entry.
    pub fn toggle_record(
        household: &mut Household,
        plan_id: Uuid,
        kind: RecordKind,
        record_id: Uuid,
        enabled: bool,
    ) -> ServiceResult<()> {
        let plan = household
            .plan_mut(plan_id)
            .ok_or(CoreError::PlanNotFound(plan_id))?;
        match kind {
            RecordKind::Expense => {
                plan.expense_mut(record_id)
                    .ok_or(CoreError::RecordNotFound(record_id))?
                    .enabled = enabled;
            }
            RecordKind::Income => {
                plan.income_mut(record_id)
                    .ok_or(CoreError::RecordNotFound(record_id))?
                    .enabled = enabled;
            }
        }
        household.touch();
        Ok(())
    }

    pub fn toggle_expense(
        household: &mut Household,
        plan_id: Uuid,
        expense_id: Uuid,
        enabled: bool,
    ) -> ServiceResult<()> {
        Self::toggle_record(household, plan_id, RecordKind::Expense, expense_id, enabled)
    }

    pub fn toggle_income(
        household: &mut Household,
        plan_id: Uuid,
        income_id: Uuid,
        enabled: bool,
    ) -> ServiceResult<()> {
        Self::toggle_record(household, plan_id, RecordKind::Income, income_id, enabled)
    }

    /// Bulk-sets the enable flag on every snapshot entry belonging to a
    /// member. Entries of other members are untouched; a member with no
    /// entries makes this a no-op.
    pub fn toggle_person(
        household: &mut Household,
        plan_id: Uuid,
        person: &str,
        enabled: bool,
    ) -> ServiceResult<()> {
        let plan = household
            .plan_mut(plan_id)
            .ok_or(CoreError::PlanNotFound(plan_id))?;
        for entry in plan.expenses.iter_mut() {
            if entry.expense.person == person {
                entry.enabled = enabled;
            }
        }
        for entry in plan.incomes.iter_mut() {
            if entry.income.person == person {
                entry.enabled = enabled;
            }
        }
        household.touch();
        Ok(())
    }

    /// Derived per-member display state, recomputed on every call.
    ///
    /// A member reads as enabled only when all of their snapshot expenses
    /// AND all of their snapshot incomes are individually enabled; a
    /// member with only one kind is judged by that kind alone.
    pub fn person_enabled_states(plan: &Plan) -> Vec<PersonEnabled> {
        plan.persons()
            .into_iter()
            .map(|person| {
                let expenses: Vec<&bool> = plan
                    .expenses
                    .iter()
                    .filter(|entry| entry.expense.person == person)
                    .map(|entry| &entry.enabled)
                    .collect();
                let incomes: Vec<&bool> = plan
                    .incomes
                    .iter()
                    .filter(|entry| entry.income.person == person)
                    .map(|entry| &entry.enabled)
                    .collect();
                let all_expenses = !expenses.is_empty() && expenses.iter().all(|e| **e);
                let all_incomes = !incomes.is_empty() && incomes.iter().all(|e| **e);
                let enabled = match (expenses.is_empty(), incomes.is_empty()) {
                    (false, false) => all_expenses && all_incomes,
                    (false, true) => all_expenses,
                    (true, false) => all_incomes,
                    (true, true) => false,
                };
                PersonEnabled { person, enabled }
            })
            .collect()
    }

    /// Computes the plan's monthly/annual delta against the live records.
    ///
    /// An unknown plan id yields a zeroed impact rather than an error;
    /// callers that need to distinguish "no plan" from a neutral scenario
    /// check [`Household::plan`] first.
    pub fn compute_impact(household: &Household, plan_id: Uuid) -> PlanImpact {
        let Some(plan) = household.plan(plan_id) else {
            warn!("impact requested for unknown plan {plan_id}");
            return PlanImpact::default();
        };

        let current_monthly_expenses = SummaryService::sum_active_monthly(&household.expenses);
        let current_monthly_income = IncomeService::net_monthly_total(&household.incomes);

        let plan_monthly_expenses: f64 = plan
            .expenses
            .iter()
            .filter(|entry| entry.effectively_included())
            .map(|entry| FrequencyService::to_monthly(entry.expense.amount, entry.expense.frequency))
            .sum();
        let plan_monthly_income: f64 = plan
            .incomes
            .iter()
            .filter(|entry| entry.effectively_included())
            .map(|entry| IncomeService::net_monthly(&entry.income))
            .sum();

        let current_monthly_balance = current_monthly_income - current_monthly_expenses;
        let plan_monthly_balance = plan_monthly_income - plan_monthly_expenses;
        let monthly_savings = plan_monthly_balance - current_monthly_balance;

        PlanImpact {
            monthly_savings,
            annual_savings: monthly_savings * 12.0,
            current_monthly_expenses,
            plan_monthly_expenses,
            current_monthly_income,
            plan_monthly_income,
            current_monthly_balance,
            plan_monthly_balance,
        }
    }

    /// Removes a plan and drops it from the comparison set. Deleting an
    /// unknown id is not an error.
    pub fn delete_plan(household: &mut Household, plan_id: Uuid) {
        let before = household.plans.len();
        household.plans.retain(|plan| plan.id != plan_id);
        household.active_plan_ids.retain(|id| *id != plan_id);
        if household.plans.len() != before {
            household.touch();
        }
    }

    /// Adds or removes a plan from the ordered comparison set.
    pub fn toggle_visibility(household: &mut Household, plan_id: Uuid) -> ServiceResult<()> {
        if household.plan(plan_id).is_none() {
            return Err(CoreError::PlanNotFound(plan_id));
        }
        if let Some(position) = household
            .active_plan_ids
            .iter()
            .position(|id| *id == plan_id)
        {
            household.active_plan_ids.remove(position);
        } else {
            household.active_plan_ids.push(plan_id);
        }
        household.touch();
        Ok(())
    }

    /// Plans marked for comparison, in the order they were marked.
    pub fn active_plans(household: &Household) -> Vec<&Plan> {
        household
            .active_plan_ids
            .iter()
            .filter_map(|id| household.plan(*id))
            .collect()
    }
}
