//! Loan balance report
//!
//! Derives a loan's remaining amount from its payment ledger. Any stored
//! remaining amount is ignored; the payments are the single source of truth.

use serde::Serialize;

use crate::models::{Loan, LoanStatus, Money};

/// Sum of all payments recorded against a loan
pub fn total_paid(loan: &Loan) -> Money {
    loan.payments.iter().map(|p| p.amount).sum()
}

/// Principal minus the sum of payments, floored at zero
///
/// Independent of payment order.
pub fn remaining_amount(loan: &Loan) -> Money {
    (loan.principal - total_paid(loan)).floor_zero()
}

/// Repayment progress of a single loan
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanBalance {
    pub principal: Money,
    pub total_paid: Money,
    pub remaining: Money,
    pub payment_count: usize,
    pub status: LoanStatus,
    /// Share of the principal repaid, 0-100
    pub percent_repaid: f64,
}

impl LoanBalance {
    /// Compute the balance of a loan
    pub fn for_loan(loan: &Loan) -> Self {
        let total_paid = total_paid(loan);
        let remaining = remaining_amount(loan);

        let percent_repaid = if loan.principal.is_positive() {
            let repaid = (loan.principal - remaining).minor_units() as f64;
            (repaid / loan.principal.minor_units() as f64) * 100.0
        } else {
            0.0
        };

        Self {
            principal: loan.principal,
            total_paid,
            remaining,
            payment_count: loan.payments.len(),
            status: loan.status,
            percent_repaid,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{loan, payment};

    fn loan_with_payments(principal: i64, payments: &[i64]) -> Loan {
        let mut loan = loan("alice", "bob", principal, LoanStatus::Active);
        loan.payments = payments.iter().map(|amount| payment(*amount, "bob")).collect();
        loan
    }

    #[test]
    fn test_partial_repayment() {
        let loan = loan_with_payments(1000, &[300, 250]);
        assert_eq!(remaining_amount(&loan), Money::from_major(450));
        assert_eq!(total_paid(&loan), Money::from_major(550));
    }

    #[test]
    fn test_no_payments() {
        let loan = loan_with_payments(1000, &[]);
        assert_eq!(remaining_amount(&loan), Money::from_major(1000));
    }

    #[test]
    fn test_overpayment_clamps_to_zero() {
        let loan = loan_with_payments(1000, &[600, 600]);
        assert_eq!(remaining_amount(&loan), Money::zero());
    }

    #[test]
    fn test_payments_beyond_i64_range_saturate() {
        let mut loan = loan_with_payments(1, &[]);
        loan.principal = Money::MAX;
        loan.payments = (0..10_000)
            .map(|_| {
                let mut p = payment(1, "bob");
                p.amount = Money::MAX;
                p
            })
            .collect();

        assert_eq!(total_paid(&loan), Money::from_minor(i64::MAX));
        assert_eq!(remaining_amount(&loan), Money::zero());
        assert!((LoanBalance::for_loan(&loan).percent_repaid - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_order_independent() {
        let forward = loan_with_payments(1000, &[100, 200, 300]);
        let backward = loan_with_payments(1000, &[300, 200, 100]);
        assert_eq!(remaining_amount(&forward), remaining_amount(&backward));
    }

    #[test]
    fn test_loan_balance() {
        let loan = loan_with_payments(1000, &[250]);
        let balance = LoanBalance::for_loan(&loan);

        assert_eq!(balance.remaining, Money::from_major(750));
        assert_eq!(balance.payment_count, 1);
        assert!((balance.percent_repaid - 25.0).abs() < f64::EPSILON);
    }
}
