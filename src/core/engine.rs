use super::types::AllocationBreakdown;

pub const RELIGIOUS_OBLIGATION_RATE: f64 = 0.025;
pub const SOCIAL_CONTRIBUTION_RATE: f64 = 0.075;
pub const DEBT_RATE: f64 = 0.35;
pub const PRODUCTIVE_DEBT_SHARE: f64 = 20.0 / 35.0;
pub const CONSUMPTIVE_DEBT_SHARE: f64 = 15.0 / 35.0;
pub const INSURANCE_RATE: f64 = 0.10;
pub const FUTURE_FUND_RATE: f64 = 0.10;

// Amounts stay unrounded; only display formatting rounds.
pub fn compute_allocation(total_income: f64) -> AllocationBreakdown {
    let religious_obligation = total_income * RELIGIOUS_OBLIGATION_RATE;
    let social_contribution = total_income * SOCIAL_CONTRIBUTION_RATE;

    let debt_total = total_income * DEBT_RATE;
    let productive_debt = debt_total * PRODUCTIVE_DEBT_SHARE;
    let consumptive_debt = debt_total * CONSUMPTIVE_DEBT_SHARE;

    let insurance_contribution = total_income * INSURANCE_RATE;
    let future_fund = total_income * FUTURE_FUND_RATE;

    let fixed_total = religious_obligation
        + social_contribution
        + debt_total
        + insurance_contribution
        + future_fund;

    // Residual category; anything the fixed rules do not claim lands here.
    let discretionary_spending = total_income - fixed_total;
    let grand_total = fixed_total + discretionary_spending;
    let surplus_or_deficit = total_income - grand_total;

    AllocationBreakdown {
        religious_obligation,
        social_contribution,
        debt_total,
        productive_debt,
        consumptive_debt,
        insurance_contribution,
        future_fund,
        fixed_total,
        discretionary_spending,
        grand_total,
        surplus_or_deficit,
    }
}
