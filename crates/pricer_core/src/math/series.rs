//! Running sums and summary statistics over sample sequences.

use num_traits::Float;

/// Running cumulative sum: `out[i] = values[0] + ... + values[i]`.
///
/// # Examples
/// ```
/// use pricer_core::math::series::cumulative_sum;
///
/// assert_eq!(cumulative_sum(&[1.0_f64, -2.0, 4.0]), vec![1.0, -1.0, 3.0]);
/// ```
pub fn cumulative_sum<T: Float>(values: &[T]) -> Vec<T> {
    values
        .iter()
        .scan(T::zero(), |acc, &v| {
            *acc = *acc + v;
            Some(*acc)
        })
        .collect()
}

/// Arithmetic mean. Returns `None` for an empty slice.
pub fn mean<T: Float>(values: &[T]) -> Option<T> {
    if values.is_empty() {
        return None;
    }
    let n = T::from(values.len())?;
    let sum = values.iter().fold(T::zero(), |acc, &v| acc + v);
    Some(sum / n)
}

/// Sample standard deviation (n - 1 denominator).
///
/// Returns `None` when fewer than two samples are given.
pub fn sample_std_dev<T: Float>(values: &[T]) -> Option<T> {
    if values.len() < 2 {
        return None;
    }
    let m = mean(values)?;
    let ss = values.iter().fold(T::zero(), |acc, &v| acc + (v - m) * (v - m));
    let denom = T::from(values.len() - 1)?;
    Some((ss / denom).sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_cumulative_sum_empty() {
        assert!(cumulative_sum::<f64>(&[]).is_empty());
    }

    #[test]
    fn test_cumulative_sum_last_equals_total() {
        let xs = [0.5_f64, 1.25, -3.0, 7.0];
        let cs = cumulative_sum(&xs);
        assert_eq!(cs.len(), 4);
        assert_relative_eq!(cs[3], xs.iter().sum::<f64>(), epsilon = 1e-12);
    }

    #[test]
    fn test_mean() {
        assert_eq!(mean::<f64>(&[]), None);
        assert_relative_eq!(mean(&[1.0_f64, 2.0, 3.0, 4.0]).unwrap(), 2.5);
    }

    #[test]
    fn test_sample_std_dev() {
        assert_eq!(sample_std_dev(&[1.0_f64]), None);
        // var = ((−1.5)² + (−0.5)² + 0.5² + 1.5²) / 3 = 5/3
        let sd = sample_std_dev(&[1.0_f64, 2.0, 3.0, 4.0]).unwrap();
        assert_relative_eq!(sd, (5.0_f64 / 3.0).sqrt(), epsilon = 1e-12);
    }
}
