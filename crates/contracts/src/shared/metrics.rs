//! Count/percentage pairs shown on summary cards.

use serde::{Deserialize, Serialize};

/// Integer percentage of `count` in `total`, rounded half-up.
///
/// A zero total yields 0 rather than NaN or infinity.
pub fn percentage(count: u64, total: u64) -> u32 {
    if total == 0 {
        return 0;
    }
    ((count as f64 / total as f64) * 100.0).round() as u32
}

/// Same as [`percentage`] for money amounts. `None` when either side is missing
/// or the denominator is zero.
pub fn ratio_percent(numerator: Option<f64>, denominator: Option<f64>) -> Option<f64> {
    let n = numerator?;
    let d = denominator?;
    if d == 0.0 || !d.is_finite() || !n.is_finite() {
        return None;
    }
    Some(n / d * 100.0)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CountPct {
    pub count: u64,
    pub total: u64,
    pub percentage: u32,
}

impl CountPct {
    pub fn of(count: Option<u64>, total: Option<u64>) -> Self {
        let count = count.unwrap_or(0);
        let total = total.unwrap_or(0);
        Self {
            count,
            total,
            percentage: percentage(count, total),
        }
    }

    /// "40 / 100"
    pub fn ratio_label(&self) -> String {
        format!("{} / {}", self.count, self.total)
    }

    /// "40%"
    pub fn percent_label(&self) -> String {
        format!("{}%", self.percentage)
    }
}

/// A labelled card on a summary dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricCard {
    pub key: &'static str,
    pub label: &'static str,
    pub value: CountPct,
}

impl MetricCard {
    pub fn new(key: &'static str, label: &'static str, count: Option<u64>, total: Option<u64>) -> Self {
        Self {
            key,
            label,
            value: CountPct::of(count, total),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentage_zero_total() {
        assert_eq!(percentage(0, 0), 0);
        assert_eq!(percentage(40, 0), 0);
    }

    #[test]
    fn test_percentage_rounds_half_up() {
        assert_eq!(percentage(40, 100), 40);
        assert_eq!(percentage(1, 3), 33);
        assert_eq!(percentage(2, 3), 67);
        assert_eq!(percentage(1, 8), 13);
        assert_eq!(percentage(3, 3), 100);
    }

    #[test]
    fn test_count_pct_missing_fields() {
        let v = CountPct::of(None, None);
        assert_eq!(v, CountPct::default());
        assert_eq!(v.ratio_label(), "0 / 0");
        assert_eq!(v.percent_label(), "0%");
    }

    #[test]
    fn test_ratio_percent_guards() {
        assert_eq!(ratio_percent(Some(50.0), Some(200.0)), Some(25.0));
        assert_eq!(ratio_percent(Some(50.0), Some(0.0)), None);
        assert_eq!(ratio_percent(None, Some(10.0)), None);
        assert_eq!(ratio_percent(Some(1.0), None), None);
    }
}
