//! hearth-domain
//!
//! Pure domain models (Household, Expense, Income, Person, Goal, Plan, etc.).
//! No I/O, no storage. Only data types and core enums.

pub mod common;
pub mod goal;
pub mod household;
pub mod person;
pub mod plan;
pub mod record;

pub use common::*;
pub use goal::*;
pub use household::*;
pub use person::*;
pub use plan::*;
pub use record::*;
