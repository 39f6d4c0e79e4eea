//! Domain models for expense and income records.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::*;

fn default_active() -> bool {
    true
}

/// A recurring outgoing amount owned by a household member.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Expense {
    pub id: Uuid,
    /// Free-text member label; empty means unassigned.
    #[serde(default)]
    pub person: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub amount: f64,
    #[serde(default)]
    pub frequency: Frequency,
    pub category: String,
    /// Raw calendar date of the expense, used by cash-out trend views.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(default = "default_active")]
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Expense {
    pub fn new(
        person: impl Into<String>,
        name: impl Into<String>,
        amount: f64,
        frequency: Frequency,
        category: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            person: person.into(),
            name: name.into(),
            title: None,
            amount,
            frequency,
            category: category.into(),
            date: None,
            active: true,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn inactive(mut self) -> Self {
        self.active = false;
        self
    }

    /// Display name, preferring the optional title over the record name.
    pub fn label(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.name)
    }
}

impl Identifiable for Expense {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl NamedEntity for Expense {
    fn name(&self) -> &str {
        &self.name
    }
}

impl BelongsToPerson for Expense {
    fn person(&self) -> Option<&str> {
        if self.person.is_empty() {
            None
        } else {
            Some(&self.person)
        }
    }
}

impl Amounted for Expense {
    fn amount(&self) -> f64 {
        self.amount
    }
}

impl Displayable for Expense {
    fn display_label(&self) -> String {
        format!("{} ({} {})", self.label(), self.amount, self.frequency)
    }
}

/// A recurring incoming amount, optionally pre-tax.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Income {
    pub id: Uuid,
    #[serde(default)]
    pub person: String,
    pub source: String,
    pub name: String,
    pub amount: f64,
    #[serde(default)]
    pub frequency: Frequency,
    /// Whether `amount` is pre-tax and subject to the flat rate.
    #[serde(default)]
    pub is_gross: bool,
    /// Flat deduction rate; `None` defers to the calculator default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_rate: Option<f64>,
    #[serde(default = "default_active")]
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Income {
    pub fn new(
        person: impl Into<String>,
        source: impl Into<String>,
        name: impl Into<String>,
        amount: f64,
        frequency: Frequency,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            person: person.into(),
            source: source.into(),
            name: name.into(),
            amount,
            frequency,
            is_gross: false,
            tax_rate: None,
            active: true,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn gross(mut self, tax_rate: Option<f64>) -> Self {
        self.is_gross = true;
        self.tax_rate = tax_rate;
        self
    }
}

impl Identifiable for Income {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl NamedEntity for Income {
    fn name(&self) -> &str {
        &self.name
    }
}

impl BelongsToPerson for Income {
    fn person(&self) -> Option<&str> {
        if self.person.is_empty() {
            None
        } else {
            Some(&self.person)
        }
    }
}

impl Amounted for Income {
    fn amount(&self) -> f64 {
        self.amount
    }
}

impl Displayable for Income {
    fn display_label(&self) -> String {
        format!("{} / {} ({} {})", self.source, self.name, self.amount, self.frequency)
    }
}
