pub mod expense;
pub mod income_source;
pub mod loan;
pub mod preferences;
pub mod savings_goal;
pub mod tuition;
pub mod user;

pub use expense::{Expense, NewExpense};
pub use income_source::{IncomeSource, NewIncomeSource};
pub use loan::{Loan, LoanDebtUpdate, NewLoan};
pub use preferences::Preferences;
pub use savings_goal::{NewSavingsGoal, SavingsGoal};
pub use tuition::{NewTuitionEntry, TuitionEntry, TuitionKind};
pub use user::{User, UserSummary};

use rust_decimal::Decimal;
use validator::ValidationError;

/// Money columns are NUMERIC(12, 2)
const MONEY_SCALE: u32 = 2;
const MONEY_LIMIT: i64 = 10_000_000_000;

/// Interest rates are NUMERIC(6, 3)
const RATE_SCALE: u32 = 3;
const RATE_LIMIT: i64 = 1_000;

fn invalid(code: &'static str, message: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(message.into());
    err
}

/// Rejects values the column would overflow on or silently round.
fn fits_column(value: &Decimal, scale: u32, limit: i64) -> bool {
    value.normalize().scale() <= scale && value.abs() < Decimal::from(limit)
}

fn money_fits(value: &Decimal) -> Result<(), ValidationError> {
    if fits_column(value, MONEY_SCALE, MONEY_LIMIT) {
        Ok(())
    } else {
        Err(invalid(
            "money",
            "must be below 10000000000 with at most 2 decimal places",
        ))
    }
}

/// Shared validator for money columns that must be strictly positive
pub(crate) fn positive_amount(value: &Decimal) -> Result<(), ValidationError> {
    if value.is_sign_positive() && !value.is_zero() {
        money_fits(value)
    } else {
        Err(invalid("positive", "must be greater than zero"))
    }
}

/// Shared validator for amounts that may be zero but not negative
pub(crate) fn non_negative_amount(value: &Decimal) -> Result<(), ValidationError> {
    if value.is_sign_negative() && !value.is_zero() {
        Err(invalid("non_negative", "must not be negative"))
    } else {
        money_fits(value)
    }
}

/// Annual interest rate in percent
pub(crate) fn interest_rate(value: &Decimal) -> Result<(), ValidationError> {
    if value.is_sign_negative() && !value.is_zero() {
        Err(invalid("non_negative", "must not be negative"))
    } else if fits_column(value, RATE_SCALE, RATE_LIMIT) {
        Ok(())
    } else {
        Err(invalid(
            "rate",
            "must be below 1000 with at most 3 decimal places",
        ))
    }
}

/// Postgres text columns cannot store NUL
pub(crate) fn plain_text(value: &str) -> Result<(), ValidationError> {
    if value.contains('\0') {
        Err(invalid("nul_byte", "must not contain NUL characters"))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn positive_amount_rejects_zero_and_negatives() {
        assert!(positive_amount(&Decimal::from_str("0.01").unwrap()).is_ok());
        assert!(positive_amount(&Decimal::ZERO).is_err());
        assert!(positive_amount(&Decimal::from_str("-5").unwrap()).is_err());
    }

    #[test]
    fn non_negative_amount_allows_zero() {
        assert!(non_negative_amount(&Decimal::ZERO).is_ok());
        assert!(non_negative_amount(&Decimal::from_str("-0.5").unwrap()).is_err());
    }

    #[test]
    fn amounts_must_fit_numeric_12_2() {
        let ok = ["9999999999.99", "1.50", "1.500", "0.01"];
        for raw in ok {
            assert!(positive_amount(&Decimal::from_str(raw).unwrap()).is_ok(), "{}", raw);
        }
        let too_big = Decimal::from_str("10000000000").unwrap();
        assert!(positive_amount(&too_big).is_err());
        assert!(non_negative_amount(&too_big).is_err());

        // Would round to 0.00 and trip the CHECK constraint
        let err = positive_amount(&Decimal::from_str("0.001").unwrap()).unwrap_err();
        assert_eq!(err.code, "money");
        assert!(non_negative_amount(&Decimal::from_str("5.125").unwrap()).is_err());
    }

    #[test]
    fn interest_rate_must_fit_numeric_6_3() {
        assert!(interest_rate(&Decimal::from_str("999.999").unwrap()).is_ok());
        assert!(interest_rate(&Decimal::ZERO).is_ok());
        assert!(interest_rate(&Decimal::from_str("1000").unwrap()).is_err());
        assert!(interest_rate(&Decimal::from_str("4.1234").unwrap()).is_err());
        assert!(interest_rate(&Decimal::from_str("-1").unwrap()).is_err());
    }

    #[test]
    fn plain_text_rejects_nul() {
        assert!(plain_text("groceries").is_ok());
        assert!(plain_text("bad\0notes").is_err());
    }
}
