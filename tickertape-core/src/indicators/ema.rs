//! Exponential moving average with the span convention.
//!
//! alpha = 2 / (span + 1); recurrence seeded by the first input value:
//! ema[0] = v[0], ema[t] = alpha * v[t] + (1 - alpha) * ema[t-1].

/// Compute the span-based EMA of a series. Defined for every index; an
/// empty input yields an empty output.
pub fn ema_span(values: &[f64], span: usize) -> Vec<f64> {
    assert!(span >= 1, "EMA span must be >= 1");
    let n = values.len();
    let mut result = Vec::with_capacity(n);

    if n == 0 {
        return result;
    }

    let alpha = 2.0 / (span as f64 + 1.0);
    let mut prev = values[0];
    result.push(prev);

    for &v in &values[1..] {
        prev = alpha * v + (1.0 - alpha) * prev;
        result.push(prev);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::{assert_approx, DEFAULT_EPSILON};

    #[test]
    fn ema_span_1_equals_input() {
        let result = ema_span(&[100.0, 200.0, 300.0], 1);
        assert_approx(result[0], 100.0, DEFAULT_EPSILON);
        assert_approx(result[1], 200.0, DEFAULT_EPSILON);
        assert_approx(result[2], 300.0, DEFAULT_EPSILON);
    }

    #[test]
    fn ema_span_3_known_values() {
        // alpha = 2/(3+1) = 0.5, seeded with the first value
        // ema[0] = 10
        // ema[1] = 0.5*12 + 0.5*10 = 11
        // ema[2] = 0.5*14 + 0.5*11 = 12.5
        let result = ema_span(&[10.0, 12.0, 14.0], 3);
        assert_approx(result[0], 10.0, DEFAULT_EPSILON);
        assert_approx(result[1], 11.0, DEFAULT_EPSILON);
        assert_approx(result[2], 12.5, DEFAULT_EPSILON);
    }

    #[test]
    fn ema_constant_series_is_constant() {
        let result = ema_span(&[5.0; 40], 14);
        for &v in &result {
            assert_approx(v, 5.0, DEFAULT_EPSILON);
        }
    }

    #[test]
    fn ema_empty_input() {
        assert!(ema_span(&[], 14).is_empty());
    }
}
