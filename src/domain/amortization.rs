//! Amortization math for level-payment loans.
//!
//! All functions are pure and operate on nominal annual percentage rates
//! (e.g. `6.5` for 6.5%/year) compounded monthly. Degenerate loan terms are
//! valid inputs: a schedule that can never amortize is reported as `None`,
//! never as an error.

/// Rounds a currency value to 2 decimal places, half up.
///
/// The epsilon nudge counteracts binary floating-point representation error
/// before rounding (`1.005` would otherwise land on `1.00`). Every stored
/// currency value goes through this as its terminal step.
pub fn round_currency(value: f64) -> f64 {
    ((value + f64::EPSILON) * 100.0).round() / 100.0
}

/// Converts a nominal annual percentage rate to a monthly fractional rate.
///
/// Absent, zero, or NaN rates resolve to `0`: interest-free debts are valid
/// and carry no rate.
pub fn monthly_rate(annual_rate_pct: Option<f64>) -> f64 {
    let rate = annual_rate_pct.unwrap_or(0.0);
    if rate.is_nan() {
        return 0.0;
    }
    rate / 12.0 / 100.0
}

/// Applies one month of compound interest to a balance.
///
/// Models the accrual that happens before a scheduled installment is
/// subtracted. A rate resolving to `<= 0` leaves the balance unchanged apart
/// from currency rounding.
pub fn accrue_monthly_interest(balance: f64, annual_rate_pct: Option<f64>) -> f64 {
    let rate = monthly_rate(annual_rate_pct);
    if rate <= 0.0 {
        return round_currency(balance);
    }
    round_currency(balance * (1.0 + rate))
}

/// Solves the annuity identity for the number of months left on a schedule.
///
/// Returns `None` when no valid schedule exists: non-positive balance or
/// payment, or a payment that does not even cover one month of interest (the
/// debt would never amortize, and the closed form below would take the log of
/// a non-positive number). The result is fractional; callers round.
pub fn remaining_term(balance: f64, monthly_payment: f64, annual_rate_pct: Option<f64>) -> Option<f64> {
    if monthly_payment <= 0.0 || balance <= 0.0 {
        return None;
    }
    let rate = monthly_rate(annual_rate_pct);
    if rate <= 0.0 {
        return Some(balance / monthly_payment);
    }

    let interest_portion = rate * balance;
    if monthly_payment <= interest_portion {
        return None;
    }

    let numerator = (monthly_payment / (monthly_payment - interest_portion)).ln();
    let denominator = (1.0 + rate).ln();
    if !numerator.is_finite() || !denominator.is_finite() || denominator == 0.0 {
        return None;
    }
    Some(numerator / denominator)
}

/// Solves for the level monthly payment retiring `principal` over `months`.
///
/// Returns `0` for non-positive principal or term. Interest-free schedules
/// divide straight-line, as does the degenerate case where the compounding
/// factor collapses to exactly `1` (a rate too small to survive rounding).
pub fn level_payment(principal: f64, annual_rate_pct: Option<f64>, months: f64) -> f64 {
    if principal <= 0.0 || months <= 0.0 {
        return 0.0;
    }
    let rate = monthly_rate(annual_rate_pct);
    if rate <= 0.0 {
        return round_currency(principal / months);
    }

    let factor = (1.0 + rate).powf(months);
    if factor == 1.0 {
        return round_currency(principal / months);
    }
    round_currency(principal * (rate * factor) / (factor - 1.0))
}
