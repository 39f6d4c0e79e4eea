//! Aggregation over live record collections: totals, category and person
//! breakdowns, and calendar-month cash-out trends.

use chrono::{Datelike, NaiveDate};
use hearth_domain::{BelongsToPerson, Expense, Income};

use super::filter_service::PersonSelection;
use super::frequency_service::FrequencyService;
use super::income_service::IncomeService;

/// Monthly total attributed to one category label.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    pub category: String,
    pub monthly_total: f64,
}

/// One calendar-month bucket of raw cash out.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthBucket {
    /// First day of the bucket's month.
    pub month: NaiveDate,
    /// Short display label, e.g. `Jan 25`.
    pub label: String,
    pub total: f64,
}

/// Monthly view of one household member's finances.
#[derive(Debug, Clone, PartialEq)]
pub struct PersonSummary {
    pub person: String,
    pub income: f64,
    pub expenses: f64,
    pub balance: f64,
    pub expenses_by_category: Vec<CategoryTotal>,
}

/// Stateless aggregation over record slices. Every operation is a pure
/// fold: empty inputs yield zeros and empty collections, never errors.
pub struct SummaryService;

impl SummaryService {
    /// Applies a person selection to any person-owned record collection.
    ///
    /// Unassigned records (empty person label) only survive the `All`
    /// selection; an explicit set matches by exact name equality.
    pub fn filter_by_persons<T>(records: &[T], selection: &PersonSelection) -> Vec<T>
    where
        T: BelongsToPerson + Clone,
    {
        match selection {
            PersonSelection::All => records.to_vec(),
            PersonSelection::Persons(names) => records
                .iter()
                .filter(|record| {
                    record
                        .person()
                        .map(|person| names.iter().any(|name| name == person))
                        .unwrap_or(false)
                })
                .cloned()
                .collect(),
        }
    }

    /// Sum of monthly-normalized amounts over active expenses.
    pub fn sum_active_monthly(expenses: &[Expense]) -> f64 {
        expenses
            .iter()
            .filter(|expense| expense.active)
            .map(|expense| FrequencyService::to_monthly(expense.amount, expense.frequency))
            .sum()
    }

    /// Monthly-normalized totals per category over active expenses,
    /// first-seen category order preserved for stable display.
    pub fn group_by_category(expenses: &[Expense]) -> Vec<CategoryTotal> {
        let mut totals: Vec<CategoryTotal> = Vec::new();
        for expense in expenses.iter().filter(|expense| expense.active) {
            let monthly = FrequencyService::to_monthly(expense.amount, expense.frequency);
            match totals
                .iter_mut()
                .find(|entry| entry.category == expense.category)
            {
                Some(entry) => entry.monthly_total += monthly,
                None => totals.push(CategoryTotal {
                    category: expense.category.clone(),
                    monthly_total: monthly,
                }),
            }
        }
        totals
    }

    /// Raw cash out per calendar month for the `month_count` months ending
    /// at the reference date's month.
    ///
    /// Buckets hold RAW amounts, not normalized recurring rates: the view
    /// answers "what actually left the account that month", which is why
    /// it diverges from every other aggregate here. Active expenses
    /// without a date contribute nothing.
    pub fn monthly_trend(
        expenses: &[Expense],
        month_count: usize,
        reference: NaiveDate,
    ) -> Vec<MonthBucket> {
        let mut buckets: Vec<MonthBucket> = (0..month_count)
            .rev()
            .map(|offset| {
                let month = shift_month_start(reference, offset as i32);
                MonthBucket {
                    month,
                    label: month.format("%b %y").to_string(),
                    total: 0.0,
                }
            })
            .collect();

        for expense in expenses.iter().filter(|expense| expense.active) {
            let Some(date) = expense.date else { continue };
            if let Some(bucket) = buckets.iter_mut().find(|bucket| {
                bucket.month.year() == date.year() && bucket.month.month() == date.month()
            }) {
                bucket.total += expense.amount;
            }
        }
        buckets
    }

    /// Monthly income, expenses, balance, and category breakdown for one
    /// member.
    pub fn person_summary(
        person: &str,
        expenses: &[Expense],
        incomes: &[Income],
    ) -> PersonSummary {
        let person_expenses: Vec<Expense> = expenses
            .iter()
            .filter(|expense| expense.person == person)
            .cloned()
            .collect();
        // TODO: inactive incomes still count toward member summaries while
        // inactive expenses do not; needs a product decision before
        // changing either side.
        let person_incomes: Vec<Income> = incomes
            .iter()
            .filter(|income| income.person == person)
            .cloned()
            .collect();

        let income = IncomeService::net_monthly_total(&person_incomes);
        let monthly_expenses = Self::sum_active_monthly(&person_expenses);

        PersonSummary {
            person: person.to_string(),
            income,
            expenses: monthly_expenses,
            balance: income - monthly_expenses,
            expenses_by_category: Self::group_by_category(&person_expenses),
        }
    }

    /// Distinct non-empty person labels across both record kinds, in
    /// first-seen order. Drives the selectable filter set.
    pub fn persons_in(expenses: &[Expense], incomes: &[Income]) -> Vec<String> {
        let mut persons: Vec<String> = Vec::new();
        let expense_persons = expenses.iter().filter_map(|e| e.person());
        let income_persons = incomes.iter().filter_map(|i| i.person());
        for person in expense_persons.chain(income_persons) {
            if !persons.iter().any(|known| known == person) {
                persons.push(person.to_string());
            }
        }
        persons
    }
}

/// First day of the month `offset_back` months before the reference date.
fn shift_month_start(reference: NaiveDate, offset_back: i32) -> NaiveDate {
    let index = reference.year() * 12 + reference.month() as i32 - 1 - offset_back;
    let year = index.div_euclid(12);
    let month = index.rem_euclid(12) as u32 + 1;
    NaiveDate::from_ymd_opt(year, month, 1).expect("month index arithmetic stays in range")
}
