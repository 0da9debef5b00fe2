use serde::Serialize;

use crate::domain::{ModelType, Technology};

pub const DEFAULT_TRAIN_YEAR: i32 = 2015;

/// The only mutable state of the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Selection {
    pub technology: Technology,
    pub model: ModelType,
    pub train_year: Option<i32>,
    pub show_out_of_sample: bool,
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            technology: Technology::Wind,
            model: ModelType::Logistic,
            train_year: Some(DEFAULT_TRAIN_YEAR),
            show_out_of_sample: false,
        }
    }
}

impl Selection {
    /// Switches technology and re-resolves the training year against the
    /// years offered for it.
    pub fn set_technology(&mut self, technology: Technology, options: &[i32]) {
        self.technology = technology;
        self.train_year = self.train_year.and_then(|year| resolve_train_year(options, year));
        if self.train_year.is_none() {
            self.train_year = options.first().copied();
        }
    }

    /// Moves to the neighbouring training year, wrapping at either end.
    pub fn step_train_year(&mut self, options: &[i32], forward: bool) {
        if options.is_empty() {
            self.train_year = None;
            return;
        }

        let current = self
            .train_year
            .and_then(|year| options.iter().position(|&option| option == year));
        let len = options.len();
        let next = match (current, forward) {
            (None, _) => 0,
            (Some(index), true) => (index + 1) % len,
            (Some(0), false) => len - 1,
            (Some(index), false) => index - 1,
        };
        self.train_year = Some(options[next]);
    }

    pub fn toggle_out_of_sample(&mut self) {
        self.show_out_of_sample = !self.show_out_of_sample;
    }
}

/// Keeps `preferred` if offered, otherwise the nearest offered year. Ties go
/// to the earlier year.
pub fn resolve_train_year(options: &[i32], preferred: i32) -> Option<i32> {
    options
        .iter()
        .copied()
        .min_by_key(|&year| ((i64::from(year) - i64::from(preferred)).abs(), year))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_initial_view() {
        let selection = Selection::default();
        assert_eq!(selection.technology, Technology::Wind);
        assert_eq!(selection.model, ModelType::Logistic);
        assert_eq!(selection.train_year, Some(2015));
        assert!(!selection.show_out_of_sample);
    }

    #[test]
    fn resolve_keeps_offered_year() {
        assert_eq!(resolve_train_year(&[2010, 2015, 2020], 2015), Some(2015));
    }

    #[test]
    fn resolve_picks_nearest_and_prefers_earlier_on_tie() {
        assert_eq!(resolve_train_year(&[2010, 2018], 2016), Some(2018));
        assert_eq!(resolve_train_year(&[2010, 2020], 2015), Some(2010));
        assert_eq!(resolve_train_year(&[], 2015), None);
    }

    #[test]
    fn technology_change_snaps_to_available_year() {
        let mut selection = Selection::default();
        selection.set_technology(Technology::Solar, &[2012, 2018]);
        assert_eq!(selection.technology, Technology::Solar);
        assert_eq!(selection.train_year, Some(2012));

        selection.set_technology(Technology::Wind, &[]);
        assert_eq!(selection.train_year, None);

        selection.set_technology(Technology::Solar, &[2012, 2018]);
        assert_eq!(selection.train_year, Some(2012));
    }

    #[test]
    fn stepping_wraps_in_both_directions() {
        let options = [2010, 2015, 2020];
        let mut selection = Selection::default();

        selection.step_train_year(&options, true);
        assert_eq!(selection.train_year, Some(2020));
        selection.step_train_year(&options, true);
        assert_eq!(selection.train_year, Some(2010));
        selection.step_train_year(&options, false);
        assert_eq!(selection.train_year, Some(2020));
    }

    #[test]
    fn stepping_from_unknown_year_starts_at_first_option() {
        let mut selection = Selection {
            train_year: Some(1999),
            ..Selection::default()
        };
        selection.step_train_year(&[2010, 2015], false);
        assert_eq!(selection.train_year, Some(2010));
    }
}
