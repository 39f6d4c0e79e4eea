//! Domain types for the household member registry.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::*;

fn default_is_active() -> bool {
    true
}

/// A registered household member.
///
/// Records reference members by exact `name` equality, not by id; the
/// registry exists for display and bookkeeping, never for joins.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Person {
    pub id: Uuid,
    pub name: String,
    #[serde(default = "default_is_active")]
    pub is_active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Person {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            is_active: true,
            description: None,
        }
    }
}

impl Identifiable for Person {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl NamedEntity for Person {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Displayable for Person {
    fn display_label(&self) -> String {
        self.name.clone()
    }
}
