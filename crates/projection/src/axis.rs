use crate::series::ChartSeries;

/// Smallest Y upper bound; small series are not stretched to fill the chart.
pub const Y_DOMAIN_FLOOR: f64 = 10.0;

pub const X_DOMAIN: [i32; 2] = [2000, 2030];

pub const X_TICK_STEP: usize = 5;

/// Largest present value across the three series, floored at zero.
pub fn max_value(series: &ChartSeries) -> f64 {
    series.values().fold(0.0, f64::max)
}

pub fn y_upper_bound(series: &ChartSeries) -> f64 {
    let max = max_value(series);
    if max > Y_DOMAIN_FLOOR {
        max.ceil()
    } else {
        Y_DOMAIN_FLOOR
    }
}

pub fn x_ticks() -> Vec<i32> {
    (X_DOMAIN[0]..=X_DOMAIN[1]).step_by(X_TICK_STEP).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series::{HistoricalPoint, ProjectedPoint};

    fn series_with(actual: &[Option<f64>], projected: &[f64]) -> ChartSeries {
        ChartSeries {
            historical: actual
                .iter()
                .map(|&actual| HistoricalPoint { year: 2010, actual })
                .collect(),
            out_of_sample: Vec::new(),
            projected: projected
                .iter()
                .map(|&value| ProjectedPoint {
                    year: 2020,
                    projected: Some(value),
                })
                .collect(),
        }
    }

    #[test]
    fn empty_series_use_the_floor() {
        let series = ChartSeries::default();
        assert!(max_value(&series).abs() < f64::EPSILON);
        assert!((y_upper_bound(&series) - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn bound_is_ceiling_of_maximum_above_floor() {
        let series = series_with(&[Some(3.0), None], &[42.7, 12.0]);
        assert!((y_upper_bound(&series) - 43.0).abs() < f64::EPSILON);
    }

    #[test]
    fn out_of_sample_values_count_toward_bound() {
        let mut series = series_with(&[Some(3.0)], &[]);
        series.out_of_sample.push(HistoricalPoint {
            year: 2024,
            actual: Some(17.2),
        });
        assert!((y_upper_bound(&series) - 18.0).abs() < f64::EPSILON);
    }

    #[test]
    fn small_values_stay_on_floor() {
        let series = series_with(&[Some(9.9), None], &[4.0]);
        assert!((y_upper_bound(&series) - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn ticks_every_five_years() {
        assert_eq!(x_ticks(), vec![2000, 2005, 2010, 2015, 2020, 2025, 2030]);
    }
}
