use crate::error::{MAX_AGE, MIN_AGE, ValidationError};

use super::engine::compute_allocation;
use super::types::{AllocationBreakdown, IncomeInput};

#[derive(Debug, Clone, PartialEq)]
pub struct RawBudgetInput {
    pub name: String,
    pub age: u32,
    pub fixed_income: f64,
    pub variable_income: f64,
    pub gold_price_per_gram: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PersonalData {
    pub name: String,
    pub age: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BudgetRequest {
    pub person: PersonalData,
    pub income: IncomeInput,
}

impl BudgetRequest {
    pub fn allocate(&self) -> AllocationBreakdown {
        compute_allocation(self.income.total_income())
    }
}

// Order matters: name, age, amounts, then the zero-income guard.
pub fn validate_input(raw: RawBudgetInput) -> Result<BudgetRequest, ValidationError> {
    let name = raw.name.trim();
    if name.is_empty() {
        return Err(ValidationError::EmptyName);
    }

    if !(MIN_AGE..=MAX_AGE).contains(&raw.age) {
        return Err(ValidationError::AgeOutOfRange { age: raw.age });
    }

    check_amount("fixedIncome", raw.fixed_income)?;
    check_amount("variableIncome", raw.variable_income)?;
    check_amount("goldPricePerGram", raw.gold_price_per_gram)?;

    let income = IncomeInput {
        fixed_income: raw.fixed_income,
        variable_income: raw.variable_income,
        gold_price_per_gram: raw.gold_price_per_gram,
    };
    let total_income = income.total_income();
    if !total_income.is_finite() {
        return Err(ValidationError::InvalidAmount {
            field: "totalIncome",
        });
    }
    if total_income == 0.0 {
        return Err(ValidationError::ZeroIncome);
    }

    Ok(BudgetRequest {
        person: PersonalData {
            name: name.to_string(),
            age: raw.age,
        },
        income,
    })
}

fn check_amount(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() || value < 0.0 {
        return Err(ValidationError::InvalidAmount { field });
    }
    Ok(())
}
