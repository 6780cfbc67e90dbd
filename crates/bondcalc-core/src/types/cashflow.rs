//! Bond cash flow schedule.
//!
//! Present value, duration, convexity, and the amortization report all
//! walk the same period-indexed coupon series. Keeping that series behind
//! one iterator stops the discounting loops from drifting apart.

use serde::{Deserialize, Serialize};

/// A single scheduled bond cash flow.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cashflow {
    /// 1-based period index.
    pub period: u32,
    /// Payment time in years (period / payment frequency).
    pub time_years: f64,
    /// Payment amount: the periodic coupon, plus the face value at the
    /// final period.
    pub amount: f64,
}

/// Iterator over a bond's coupon schedule, period 1 through maturity.
#[derive(Debug, Clone)]
pub struct CashflowIter {
    next_period: u32,
    total_periods: u32,
    frequency: f64,
    coupon: f64,
    face_value: f64,
}

impl CashflowIter {
    /// Creates a schedule iterator.
    ///
    /// `total_periods` and `frequency` are validated upstream to be
    /// non-zero, so the schedule is never empty.
    #[must_use]
    pub fn new(total_periods: u32, frequency: u32, coupon: f64, face_value: f64) -> Self {
        Self {
            next_period: 1,
            total_periods,
            frequency: f64::from(frequency),
            coupon,
            face_value,
        }
    }
}

impl Iterator for CashflowIter {
    type Item = Cashflow;

    fn next(&mut self) -> Option<Cashflow> {
        if self.next_period > self.total_periods {
            return None;
        }
        let period = self.next_period;
        self.next_period += 1;

        let amount = if period == self.total_periods {
            self.coupon + self.face_value
        } else {
            self.coupon
        };

        Some(Cashflow {
            period,
            time_years: f64::from(period) / self.frequency,
            amount,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.total_periods + 1 - self.next_period) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for CashflowIter {}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_schedule_shape() {
        // 2 years, semi-annual, coupon 30, face 1000
        let flows: Vec<Cashflow> = CashflowIter::new(4, 2, 30.0, 1000.0).collect();

        assert_eq!(flows.len(), 4);
        assert_eq!(flows[0].period, 1);
        assert_relative_eq!(flows[0].time_years, 0.5);
        assert_relative_eq!(flows[0].amount, 30.0);
        assert_relative_eq!(flows[2].amount, 30.0);

        // Final period carries the redemption amount
        assert_eq!(flows[3].period, 4);
        assert_relative_eq!(flows[3].time_years, 2.0);
        assert_relative_eq!(flows[3].amount, 1030.0);
    }

    #[test]
    fn test_payment_sum_identity() {
        let flows = CashflowIter::new(10, 1, 50.0, 1000.0);
        let total: f64 = flows.map(|cf| cf.amount).sum();

        // coupon x periods + face
        assert_relative_eq!(total, 50.0 * 10.0 + 1000.0);
    }

    #[test]
    fn test_exact_size() {
        let mut flows = CashflowIter::new(6, 2, 25.0, 1000.0);
        assert_eq!(flows.len(), 6);
        flows.next();
        assert_eq!(flows.len(), 5);
    }
}
