//! Descriptive statistics over consumption values.

/// Arithmetic mean; `0.0` for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample standard deviation (n - 1 denominator); `0.0` below two values.
pub fn sample_std(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let m = mean(values);
    let sq_sum: f64 = values.iter().map(|v| (v - m) * (v - m)).sum();
    (sq_sum / (values.len() - 1) as f64).sqrt()
}

/// Peak threshold `mean + sigma · std`.
pub fn outlier_threshold(values: &[f64], sigma: f64) -> f64 {
    mean(values) + sigma * sample_std(values)
}
