use hearth_core::services::{PlanService, SummaryService};
use hearth_core::CoreError;
use hearth_domain::{Expense, Frequency, Household, Income};
use uuid::Uuid;

fn seeded_household() -> Household {
    let mut household = Household::new("Flow");
    household.add_expense(Expense::new(
        "A",
        "Rent",
        1200.0,
        Frequency::Monthly,
        "Housing",
    ));
    household.add_income(
        Income::new("A", "Acme", "Salary", 4000.0, Frequency::Monthly).gross(Some(0.25)),
    );
    household
}

#[test]
fn plan_round_trip_from_summary_to_impact() {
    let mut household = seeded_household();

    let summary = SummaryService::person_summary("A", &household.expenses, &household.incomes);
    assert!((summary.income - 3000.0).abs() < 1e-9);
    assert!((summary.expenses - 1200.0).abs() < 1e-9);
    assert!((summary.balance - 1800.0).abs() < 1e-9);

    let plan_id = PlanService::create_plan(&mut household, "Drop housing", "what if").unwrap();
    let expense_id = household.plan(plan_id).unwrap().expenses[0].expense.id;
    PlanService::toggle_expense(&mut household, plan_id, expense_id, false).unwrap();

    let impact = PlanService::compute_impact(&household, plan_id);
    assert!((impact.monthly_savings - 1200.0).abs() < 1e-9);
    assert!((impact.annual_savings - 14400.0).abs() < 1e-9);
    assert!((impact.plan_monthly_balance - 3000.0).abs() < 1e-9);
    assert!((impact.current_monthly_balance - 1800.0).abs() < 1e-9);
}

#[test]
fn live_mutation_after_creation_never_reaches_the_snapshot() {
    let mut household = seeded_household();
    let plan_id = PlanService::create_plan(&mut household, "Frozen", "").unwrap();

    let live_id = household.expenses[0].id;
    household.expense_mut(live_id).unwrap().active = false;

    let impact = PlanService::compute_impact(&household, plan_id);
    // The live side sees the deactivation; the snapshot side does not.
    assert!(impact.current_monthly_expenses.abs() < 1e-9);
    assert!((impact.plan_monthly_expenses - 1200.0).abs() < 1e-9);
    // With income unchanged on both sides the delta is exactly the
    // snapshot's expense load.
    assert!((impact.monthly_savings + 1200.0).abs() < 1e-9);
}

#[test]
fn impact_is_pure_under_repeated_computation() {
    let mut household = seeded_household();
    let plan_id = PlanService::create_plan(&mut household, "Stable", "").unwrap();
    let first = PlanService::compute_impact(&household, plan_id);
    for _ in 0..5 {
        assert_eq!(PlanService::compute_impact(&household, plan_id), first);
    }
}

#[test]
fn plans_survive_household_serialization() {
    let mut household = seeded_household();
    let plan_id = PlanService::create_plan(&mut household, "Persisted", "keep me").unwrap();
    let expense_id = household.plan(plan_id).unwrap().expenses[0].expense.id;
    PlanService::toggle_expense(&mut household, plan_id, expense_id, false).unwrap();

    let json = serde_json::to_string(&household).unwrap();
    let roundtrip: Household = serde_json::from_str(&json).unwrap();
    let plan = roundtrip.plan(plan_id).expect("plan survives round trip");
    assert!(!plan.expenses[0].enabled);
    assert_eq!(
        PlanService::compute_impact(&roundtrip, plan_id),
        PlanService::compute_impact(&household, plan_id)
    );
}

#[test]
fn missing_ids_signal_without_tearing_down_state() {
    let mut household = seeded_household();
    let plan_id = PlanService::create_plan(&mut household, "Kept", "").unwrap();

    let err = PlanService::update_plan(&mut household, Uuid::new_v4(), "x", "").unwrap_err();
    assert!(matches!(err, CoreError::PlanNotFound(_)));
    let err = PlanService::toggle_visibility(&mut household, Uuid::new_v4()).unwrap_err();
    assert!(matches!(err, CoreError::PlanNotFound(_)));

    // The existing plan is untouched by the failed operations.
    assert_eq!(household.plans.len(), 1);
    assert_eq!(household.plan(plan_id).unwrap().name, "Kept");
}
