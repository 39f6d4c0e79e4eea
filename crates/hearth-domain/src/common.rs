//! Shared traits and the billing-cadence enum for finance primitives.

use std::fmt;

use serde::{de::Deserializer, Deserialize, Serialize};
use uuid::Uuid;

/// Exposes a stable identifier for entities stored in a household.
pub trait Identifiable {
    fn id(&self) -> Uuid;
}

/// Provides read-only access to an entity's display name.
pub trait NamedEntity {
    fn name(&self) -> &str;
}

/// Associates records with the household member they belong to.
///
/// Membership is a free-text label matched by exact string equality; an
/// empty label means the record is unassigned.
pub trait BelongsToPerson {
    fn person(&self) -> Option<&str>;
}

/// Supplies a common contract for retrieving numeric amounts.
pub trait Amounted {
    fn amount(&self) -> f64;
}

/// Converts an entity into a user-facing display label.
pub trait Displayable {
    fn display_label(&self) -> String;
}

#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
/// Enumerates canonical billing cadences for recurring records.
pub enum Frequency {
    Daily,
    Weekly,
    Biweekly,
    #[default]
    Monthly,
    Quarterly,
    Annually,
}

impl Frequency {
    /// All cadences in display order.
    pub const ALL: [Frequency; 6] = [
        Frequency::Daily,
        Frequency::Weekly,
        Frequency::Biweekly,
        Frequency::Monthly,
        Frequency::Quarterly,
        Frequency::Annually,
    ];

    /// Parses a cadence label, folding anything unrecognized to `Monthly`.
    ///
    /// Upstream data sources carry cadences as free-form strings; treating
    /// a bad label as monthly keeps aggregation total instead of surfacing
    /// an error for a cosmetic data issue.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "daily" => Frequency::Daily,
            "weekly" => Frequency::Weekly,
            "biweekly" => Frequency::Biweekly,
            "monthly" => Frequency::Monthly,
            "quarterly" => Frequency::Quarterly,
            "annually" => Frequency::Annually,
            _ => Frequency::Monthly,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Frequency::Daily => "daily",
            Frequency::Weekly => "weekly",
            Frequency::Biweekly => "biweekly",
            Frequency::Monthly => "monthly",
            Frequency::Quarterly => "quarterly",
            Frequency::Annually => "annually",
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Frequency::Daily => "Daily",
            Frequency::Weekly => "Weekly",
            Frequency::Biweekly => "Bi-Weekly",
            Frequency::Monthly => "Monthly",
            Frequency::Quarterly => "Quarterly",
            Frequency::Annually => "Annually",
        };
        f.write_str(label)
    }
}

impl<'de> Deserialize<'de> for Frequency {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<String>::deserialize(deserializer)?;
        Ok(value
            .map(|v| Frequency::parse(&v))
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_all_canonical_labels() {
        for frequency in Frequency::ALL {
            assert_eq!(Frequency::parse(frequency.as_str()), frequency);
        }
    }

    #[test]
    fn parse_folds_unknown_labels_to_monthly() {
        assert_eq!(Frequency::parse("bogus"), Frequency::Monthly);
        assert_eq!(Frequency::parse(""), Frequency::Monthly);
        assert_eq!(Frequency::parse("  WEEKLY  "), Frequency::Weekly);
    }

    #[test]
    fn serde_round_trips_as_lowercase_strings() {
        let json = serde_json::to_string(&Frequency::Biweekly).unwrap();
        assert_eq!(json, "\"biweekly\"");
        let parsed: Frequency = serde_json::from_str("\"quarterly\"").unwrap();
        assert_eq!(parsed, Frequency::Quarterly);
    }

    #[test]
    fn serde_folds_unknown_strings_to_monthly() {
        let parsed: Frequency = serde_json::from_str("\"fortnightly\"").unwrap();
        assert_eq!(parsed, Frequency::Monthly);
    }
}
