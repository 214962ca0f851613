/// Slack used by every x-ordering and x-equality comparison.
pub const EPSILON: f64 = 1e-10;

pub fn approx_eq(lhs: f64, rhs: f64) -> bool {
    (lhs - rhs).abs() < EPSILON
}

/// `true` when `rhs` lies strictly to the right of `lhs` beyond the slack.
pub fn strictly_ascending(lhs: f64, rhs: f64) -> bool {
    rhs - lhs > EPSILON
}
