//! Annuity calculation and minimum-annuity selection

/// Levelized cost of a present value over `horizon_years` (currency per metre per year)
pub fn annuity(present_value: f64, horizon_years: f64, track_length_m: f64) -> f64 {
    present_value / track_length_m / horizon_years
}

/// Annuity of a renewal option: every rail plus the shared bucket
pub fn option_annuity(
    rail_present_values: impl IntoIterator<Item = f64>,
    shared_present_value: f64,
    horizon_years: f64,
    track_length_m: f64,
) -> f64 {
    let total = rail_present_values.into_iter().sum::<f64>() + shared_present_value;
    annuity(total, horizon_years, track_length_m)
}

/// Item with the smallest key; ties go to the first one seen
pub fn select_minimum<T>(items: &[T], key: impl Fn(&T) -> f64) -> Option<&T> {
    let mut best: Option<(&T, f64)> = None;
    for item in items {
        let value = key(item);
        match best {
            Some((_, current)) if value >= current => {}
            _ => best = Some((item, value)),
        }
    }
    best.map(|(item, _)| item)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_annuity_per_metre_and_year() {
        assert!((annuity(300_000.0, 30.0, 1_000.0) - 10.0).abs() < 1e-12);
    }

    #[test]
    fn test_option_annuity_matches_total_over_horizon() {
        let value = option_annuity([120.0, 80.0], 40.0, 2.0, 10.0);
        assert!((value - annuity(240.0, 2.0, 10.0)).abs() < 1e-12);
    }

    #[test]
    fn test_select_minimum_is_stable() {
        let items = [(0, 3.0), (1, 1.0), (2, 1.0), (3, 2.0)];
        let best = select_minimum(&items, |&(_, v)| v).unwrap();
        assert_eq!(best.0, 1);
        assert!(select_minimum(&[] as &[(u8, f64)], |&(_, v)| v).is_none());
    }
}
