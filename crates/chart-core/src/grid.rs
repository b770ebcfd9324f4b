// File: crates/chart-core/src/grid.rs
// Summary: Grid/tick layout helpers (linspace, nice tick steps, tick label formatting).

/// `steps` evenly spaced values over the closed interval `[start, end]`.
/// The last value is exactly `end`.
pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    match steps {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (steps as f64 - 1.0);
            (0..steps)
                .map(|i| if i + 1 == steps { end } else { start + step * i as f64 })
                .collect()
        }
    }
}

const NICE_MULTIPLES: [f64; 5] = [1.0, 2.0, 2.5, 5.0, 10.0];

/// Smallest step of the form m * 10^k (m in 1, 2, 2.5, 5) that splits `span`
/// into at most `max_intervals` intervals.
pub fn nice_step(span: f64, max_intervals: usize) -> f64 {
    if !span.is_finite() || span <= 0.0 {
        return 1.0;
    }
    let raw = span / max_intervals.max(1) as f64;
    let mag = 10f64.powf(raw.log10().floor());
    NICE_MULTIPLES
        .iter()
        .map(|m| m * mag)
        .find(|s| *s >= raw * (1.0 - 1e-9))
        .unwrap_or(10.0 * mag)
}

/// Tick positions at multiples of a nice step lying inside `[min, max]`.
pub fn nice_ticks(min: f64, max: f64, max_intervals: usize) -> Vec<f64> {
    if !min.is_finite() || !max.is_finite() || max <= min {
        return vec![min];
    }
    let step = nice_step(max - min, max_intervals);
    let first = (min / step - 1e-9).ceil() as i64;
    let last = (max / step + 1e-9).floor() as i64;
    (first..=last)
        .map(|k| {
            let v = k as f64 * step;
            // snap tiny residues (and -0.0) to zero
            if v.abs() < step * 1e-9 { 0.0 } else { v }
        })
        .collect()
}

/// Decimals needed to print multiples of `step` without loss.
pub fn tick_decimals(step: f64) -> usize {
    if !step.is_finite() || step <= 0.0 {
        return 0;
    }
    (0..10)
        .find(|&d| {
            let s = step * 10f64.powi(d as i32);
            (s - s.round()).abs() < 1e-6 * s.max(1.0)
        })
        .unwrap_or(10)
}

/// Format every tick with the same number of decimals.
pub fn format_ticks(ticks: &[f64]) -> Vec<String> {
    let step = if ticks.len() >= 2 { ticks[1] - ticks[0] } else { 1.0 };
    let d = tick_decimals(step);
    ticks.iter().map(|t| format!("{:.*}", d, t)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linspace_includes_both_endpoints() {
        let v = linspace(0.0, 0.4, 200);
        assert_eq!(v.len(), 200);
        assert_eq!(v[0], 0.0);
        assert_eq!(v[199], 0.4);
        assert!(v.windows(2).all(|w| w[1] > w[0]));
    }

    #[test]
    fn linspace_degenerate_counts() {
        assert!(linspace(1.0, 2.0, 0).is_empty());
        assert_eq!(linspace(1.0, 2.0, 1), vec![1.0]);
        assert_eq!(linspace(0.9, 1.1, 5).len(), 5);
    }

    #[test]
    fn nice_steps() {
        assert!((nice_step(0.44, 8) - 0.1).abs() < 1e-12);
        assert!((nice_step(0.147, 8) - 0.02).abs() < 1e-12);
        assert!((nice_step(10.0, 4) - 2.5).abs() < 1e-12);
        assert!((nice_step(100.0, 10) - 10.0).abs() < 1e-9);
    }

    #[test]
    fn ticks_stay_inside_range() {
        let t = nice_ticks(-0.02, 0.42, 8);
        assert_eq!(t.len(), 5);
        assert_eq!(t[0], 0.0);
        assert!((t[4] - 0.4).abs() < 1e-12);
        assert_eq!(format_ticks(&t), vec!["0.0", "0.1", "0.2", "0.3", "0.4"]);
    }

    #[test]
    fn decimals_for_steps() {
        assert_eq!(tick_decimals(1.0), 0);
        assert_eq!(tick_decimals(0.02), 2);
        assert_eq!(tick_decimals(0.025), 3);
        assert_eq!(tick_decimals(50.0), 0);
    }

    #[test]
    fn degenerate_range_yields_single_tick() {
        assert_eq!(nice_ticks(1.0, 1.0, 8), vec![1.0]);
    }
}
