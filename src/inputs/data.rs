//! Projection input parameters and their allowed ranges

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Inclusive range accepted for a single input field
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldBounds {
    pub field: &'static str,
    pub min: f64,
    pub max: f64,
}

impl FieldBounds {
    const fn new(field: &'static str, min: f64, max: f64) -> Self {
        Self { field, min, max }
    }

    /// Check a value against this range
    pub fn check(&self, value: f64) -> Result<(), ValidationError> {
        if !value.is_finite() {
            return Err(ValidationError::NotFinite { field: self.field, value });
        }
        if value < self.min || value > self.max {
            return Err(ValidationError::OutOfRange {
                field: self.field,
                value,
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }

    /// Coerce a value into this range (NaN becomes the lower bound)
    pub fn clamp(&self, value: f64) -> f64 {
        if value.is_nan() {
            self.min
        } else {
            value.max(self.min).min(self.max)
        }
    }
}

/// Projection timeline in months
pub const MONTHS: FieldBounds = FieldBounds::new("months", 1.0, 60.0);
/// Target market share percentage
pub const TARGET_PERCENTAGE: FieldBounds = FieldBounds::new("target_percentage", 0.0, 100.0);
/// Income tax rate percentage
pub const TAX_RATE: FieldBounds = FieldBounds::new("tax_rate", 0.0, 50.0);
/// App store fee percentage
pub const APPLE_TAX_RATE: FieldBounds = FieldBounds::new("apple_tax_rate", 0.0, 30.0);

const PRICE_PER_CUSTOMER: FieldBounds = FieldBounds::new("price_per_customer", 0.0, f64::MAX);
const AVG_SALARY: FieldBounds = FieldBounds::new("avg_salary", 0.0, f64::MAX);
const LLM_COST_PER_USER: FieldBounds = FieldBounds::new("llm_cost_per_user", 0.0, f64::MAX);
const FIXED_EXPENSES: FieldBounds = FieldBounds::new("fixed_expenses", 0.0, f64::MAX);

/// Business parameters for a single projection run
///
/// All monetary amounts are in the primary currency. Salaries, LLM costs and
/// fixed expenses are monthly figures; the engine scales them by `months`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectionInput {
    /// Projection period (1-60)
    pub months: u32,

    /// Total addressable customers
    pub total_customers: u64,

    /// Share of the addressable customers captured (0-100)
    pub target_percentage: f64,

    /// Monthly price charged per customer
    pub price_per_customer: f64,

    /// Headcount
    pub num_employees: u32,

    /// Average monthly salary per employee
    pub avg_salary: f64,

    /// Monthly LLM cost per active customer
    pub llm_cost_per_user: f64,

    /// Fixed monthly expenses
    pub fixed_expenses: f64,

    /// Estimated income tax rate (0-50)
    pub tax_rate: f64,

    /// App store fee levied on gross revenue (0-30)
    pub apple_tax_rate: f64,
}

impl Default for ProjectionInput {
    fn default() -> Self {
        Self {
            months: 12,
            total_customers: 1,
            target_percentage: 100.0,
            price_per_customer: 39.99,
            num_employees: 1,
            avg_salary: 1000.0,
            llm_cost_per_user: 1.0,
            fixed_expenses: 100.0,
            tax_rate: 20.0,
            apple_tax_rate: 30.0,
        }
    }
}

impl ProjectionInput {
    /// Verify every field lies within its range, reporting the first offender
    ///
    /// Counts are unsigned, so only `months` needs a range check among them.
    pub fn validate(&self) -> Result<(), ValidationError> {
        MONTHS.check(self.months as f64)?;
        TARGET_PERCENTAGE.check(self.target_percentage)?;
        PRICE_PER_CUSTOMER.check(self.price_per_customer)?;
        AVG_SALARY.check(self.avg_salary)?;
        LLM_COST_PER_USER.check(self.llm_cost_per_user)?;
        FIXED_EXPENSES.check(self.fixed_expenses)?;
        TAX_RATE.check(self.tax_rate)?;
        APPLE_TAX_RATE.check(self.apple_tax_rate)?;
        Ok(())
    }

    /// Copy of this input with every field coerced into range
    pub fn clamped(&self) -> Self {
        let clamped = Self {
            months: self.months.clamp(MONTHS.min as u32, MONTHS.max as u32),
            total_customers: self.total_customers,
            target_percentage: TARGET_PERCENTAGE.clamp(self.target_percentage),
            price_per_customer: PRICE_PER_CUSTOMER.clamp(self.price_per_customer),
            num_employees: self.num_employees,
            avg_salary: AVG_SALARY.clamp(self.avg_salary),
            llm_cost_per_user: LLM_COST_PER_USER.clamp(self.llm_cost_per_user),
            fixed_expenses: FIXED_EXPENSES.clamp(self.fixed_expenses),
            tax_rate: TAX_RATE.clamp(self.tax_rate),
            apple_tax_rate: APPLE_TAX_RATE.clamp(self.apple_tax_rate),
        };

        if clamped != *self {
            log::warn!("projection input clamped into range: {:?} -> {:?}", self, clamped);
        }

        clamped
    }
}
