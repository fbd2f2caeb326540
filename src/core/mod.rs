mod engine;
mod request;
mod types;

pub use engine::{
    CONSUMPTIVE_DEBT_SHARE, DEBT_RATE, FUTURE_FUND_RATE, INSURANCE_RATE, PRODUCTIVE_DEBT_SHARE,
    RELIGIOUS_OBLIGATION_RATE, SOCIAL_CONTRIBUTION_RATE, compute_allocation,
};
pub use request::{BudgetRequest, PersonalData, RawBudgetInput, validate_input};
pub use types::{
    AllocationBreakdown, BALANCE_TOLERANCE, BudgetStatus, IncomeInput, LineItem, MONTHS_PER_YEAR,
};
