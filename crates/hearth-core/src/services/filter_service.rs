//! Person-selection state for read-side views.

use serde::{Deserialize, Serialize};

use hearth_domain::BelongsToPerson;

use super::summary_service::SummaryService;

/// The currently selected member subset.
///
/// Either everything, or an explicit non-empty name set — the two arms
/// are mutually exclusive by construction, and the toggle rules below
/// never leave an explicit set empty.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase", tag = "kind", content = "names")]
pub enum PersonSelection {
    #[default]
    All,
    Persons(Vec<String>),
}

impl PersonSelection {
    /// Selects a single member explicitly.
    pub fn only(name: impl Into<String>) -> Self {
        PersonSelection::Persons(vec![name.into()])
    }

    /// Resets to the everything selection.
    pub fn select_all(&mut self) {
        *self = PersonSelection::All;
    }

    /// Toggles one member in or out of the selection.
    ///
    /// From `All`, narrows to just that member. Within an explicit set,
    /// adds the member, or removes them unless they are the last one
    /// remaining — deselecting the final member is a no-op, so a
    /// non-`All` selection never silently becomes empty (or "all").
    pub fn toggle(&mut self, name: &str) {
        match self {
            PersonSelection::All => {
                *self = PersonSelection::only(name);
            }
            PersonSelection::Persons(names) => {
                if let Some(position) = names.iter().position(|known| known == name) {
                    if names.len() > 1 {
                        names.remove(position);
                    }
                } else {
                    names.push(name.to_string());
                }
            }
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, PersonSelection::All)
    }

    pub fn is_selected(&self, name: &str) -> bool {
        match self {
            PersonSelection::All => true,
            PersonSelection::Persons(names) => names.iter().any(|known| known == name),
        }
    }

    /// Applies the selection to a record collection.
    pub fn filter<T>(&self, records: &[T]) -> Vec<T>
    where
        T: BelongsToPerson + Clone,
    {
        SummaryService::filter_by_persons(records, self)
    }
}
