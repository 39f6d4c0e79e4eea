pub mod filter_service;
pub mod frequency_service;
pub mod goal_service;
pub mod income_service;
pub mod plan_service;
pub mod summary_service;

pub use filter_service::PersonSelection;
pub use frequency_service::FrequencyService;
pub use goal_service::{GoalProgress, GoalService};
pub use income_service::IncomeService;
pub use plan_service::{PersonEnabled, PlanImpact, PlanService, RecordKind};
pub use summary_service::{CategoryTotal, MonthBucket, PersonSummary, SummaryService};

use crate::error::CoreError;

pub type ServiceResult<T> = Result<T, CoreError>;
