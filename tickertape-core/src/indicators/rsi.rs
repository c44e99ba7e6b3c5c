//! Relative Strength Index (RSI).
//!
//! Gains and losses from close-to-close deltas, each smoothed with the
//! same span-based EMA recurrence (seeded by the first delta's gain and
//! loss). RSI = 100 - 100 / (1 + avg_gain / avg_loss).
//!
//! When avg_loss == 0 the ratio is infinite and RSI saturates to 100;
//! this is special-cased rather than left to float division.

/// RSI over a single ticker's close series. Index 0 has no prior close
/// and is NaN; every later index carries the recurrence output. The
/// engine masks the warm-up rows.
pub fn rsi(closes: &[f64], span: usize) -> Vec<f64> {
    assert!(span >= 1, "RSI span must be >= 1");
    let n = closes.len();
    let mut result = vec![f64::NAN; n];

    if n < 2 {
        return result;
    }

    let alpha = 2.0 / (span as f64 + 1.0);

    // Seed with the first delta's gain and loss
    let first_delta = closes[1] - closes[0];
    let mut avg_gain = first_delta.max(0.0);
    let mut avg_loss = (-first_delta).max(0.0);
    result[1] = rsi_value(avg_gain, avg_loss);

    for i in 2..n {
        let delta = closes[i] - closes[i - 1];
        let gain = delta.max(0.0);
        let loss = (-delta).max(0.0);

        avg_gain = alpha * gain + (1.0 - alpha) * avg_gain;
        avg_loss = alpha * loss + (1.0 - alpha) * avg_loss;

        result[i] = rsi_value(avg_gain, avg_loss);
    }

    result
}

fn rsi_value(avg_gain: f64, avg_loss: f64) -> f64 {
    if avg_loss == 0.0 {
        100.0
    } else {
        100.0 - 100.0 / (1.0 + avg_gain / avg_loss)
    }
}
