//! Selection state bound to the static dataset, and the derived model the
//! front ends draw from.

use serde::Serialize;

use crate::axis::{y_upper_bound, X_DOMAIN};
use crate::dataset::Dataset;
use crate::domain::{ModelType, Technology};
use crate::selection::Selection;
use crate::series::{build_series, ChartSeries, HistoricalPoint};

pub const CHART_TITLE: &str = "Projecting technology deployment using growth curve extrapolation";
pub const Y_AXIS_LABEL: &str = "Share of Global Electricity Generation (%)";
pub const OUT_OF_SAMPLE_RGB: (u8, u8, u8) = (0xB7, 0xC6, 0xCF);

/// Points per vertical guide; drawn as dots so the guide reads as dashed.
pub const GUIDE_STEPS: u32 = 24;

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartModel {
    pub selection: Selection,
    pub training_years: Vec<i32>,
    pub series: ChartSeries,
    pub y_max: f64,
}

impl ChartModel {
    /// Out-of-sample points, or nothing when the toggle is off.
    pub fn visible_out_of_sample(&self) -> &[HistoricalPoint] {
        if self.selection.show_out_of_sample {
            self.series.out_of_sample.as_slice()
        } else {
            &[]
        }
    }

    pub const fn train_year(&self) -> Option<i32> {
        self.selection.train_year
    }

    /// Values at `year`, the terminal stand-in for a hover tooltip.
    pub fn readout(&self, year: i32) -> Readout {
        let actual = self
            .series
            .historical
            .iter()
            .find(|point| point.year == year)
            .and_then(|point| point.actual);
        let out_of_sample = self
            .visible_out_of_sample()
            .iter()
            .find(|point| point.year == year)
            .and_then(|point| point.actual);
        let projected = self
            .series
            .projected
            .iter()
            .find(|point| point.year == year)
            .and_then(|point| point.projected);

        Readout {
            year,
            actual,
            out_of_sample,
            projected,
        }
    }

    /// Present values as `(year, percent)` pairs plus the two guides.
    pub fn plot_points(&self, inspect_year: i32) -> PlotPoints {
        let projected = self
            .series
            .projected
            .iter()
            .filter_map(|point| point.projected.map(|value| (f64::from(point.year), value)))
            .collect();
        let historical = actual_points(&self.series.historical);
        let out_of_sample = self
            .selection
            .show_out_of_sample
            .then(|| actual_points(&self.series.out_of_sample));
        let train_marker = self
            .train_year()
            .map(|year| vertical_guide(year, self.y_max))
            .unwrap_or_default();

        PlotPoints {
            projected,
            historical,
            out_of_sample,
            train_marker,
            cursor: vertical_guide(inspect_year, self.y_max),
        }
    }
}

fn actual_points(points: &[HistoricalPoint]) -> Vec<(f64, f64)> {
    points
        .iter()
        .filter_map(|point| point.actual.map(|value| (f64::from(point.year), value)))
        .collect()
}

/// Dots from the X axis up to `y_max` at `year`.
pub fn vertical_guide(year: i32, y_max: f64) -> Vec<(f64, f64)> {
    let x = f64::from(year);
    (0..=GUIDE_STEPS)
        .map(|step| (x, y_max * f64::from(step) / f64::from(GUIDE_STEPS)))
        .collect()
}

/// Chart coordinates for one frame, ready for a ratatui `Dataset`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PlotPoints {
    pub projected: Vec<(f64, f64)>,
    pub historical: Vec<(f64, f64)>,
    /// `None` while the toggle is off, so renderers add no legend entry.
    pub out_of_sample: Option<Vec<(f64, f64)>>,
    pub train_marker: Vec<(f64, f64)>,
    pub cursor: Vec<(f64, f64)>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Readout {
    pub year: i32,
    pub actual: Option<f64>,
    pub out_of_sample: Option<f64>,
    pub projected: Option<f64>,
}

pub fn format_percent(value: Option<f64>) -> String {
    value.map_or_else(|| "No data".to_string(), |value| format!("{value:.2}%"))
}

/// The four controls bound to the selection, in focus order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Technology,
    Model,
    TrainYear,
    OutOfSample,
}

impl Control {
    pub const ALL: [Self; 4] = [
        Self::Technology,
        Self::Model,
        Self::TrainYear,
        Self::OutOfSample,
    ];

    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Technology),
            1 => Some(Self::Model),
            2 => Some(Self::TrainYear),
            3 => Some(Self::OutOfSample),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Technology => "Technology",
            Self::Model => "Model",
            Self::TrainYear => "Training year",
            Self::OutOfSample => "Out-of-sample",
        }
    }
}

/// Owns the dataset and the selection; every mutation keeps the training
/// year consistent with what the dataset offers.
#[derive(Debug, Clone)]
pub struct ProjectionView {
    dataset: Dataset,
    selection: Selection,
}

impl ProjectionView {
    pub fn new(dataset: Dataset, selection: Selection) -> Self {
        let mut view = Self { dataset, selection };
        let options = view.training_years();
        if let Some(year) = view.selection.train_year {
            if !options.contains(&year) {
                tracing::debug!(year, "initial training year not offered, resolving");
                view.selection.set_technology(view.selection.technology, &options);
            }
        } else {
            view.selection.train_year = options.first().copied();
        }
        view
    }

    pub const fn selection(&self) -> &Selection {
        &self.selection
    }

    pub const fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn training_years(&self) -> Vec<i32> {
        self.dataset.training_years(self.selection.technology)
    }

    /// Where the inspection cursor starts: the training year, else the
    /// start of the X domain.
    pub fn initial_inspect_year(&self) -> i32 {
        self.selection.train_year.map_or(X_DOMAIN[0], clamp_year)
    }

    pub fn set_technology(&mut self, technology: Technology) {
        let options = self.dataset.training_years(technology);
        self.selection.set_technology(technology, &options);
    }

    pub fn cycle_technology(&mut self, forward: bool) {
        let next = cycle_index(self.selection.technology.index(), Technology::ALL.len(), forward);
        if let Some(technology) = Technology::from_index(next) {
            self.set_technology(technology);
        }
    }

    pub fn set_model(&mut self, model: ModelType) {
        self.selection.model = model;
    }

    pub fn cycle_model(&mut self, forward: bool) {
        let next = cycle_index(self.selection.model.index(), ModelType::ALL.len(), forward);
        if let Some(model) = ModelType::from_index(next) {
            self.selection.model = model;
        }
    }

    pub fn step_train_year(&mut self, forward: bool) {
        let options = self.training_years();
        self.selection.step_train_year(&options, forward);
    }

    pub fn toggle_out_of_sample(&mut self) {
        self.selection.toggle_out_of_sample();
    }

    /// Moves `control` to its next (or previous) option; the toggle flips
    /// either way.
    pub fn adjust(&mut self, control: Control, forward: bool) {
        match control {
            Control::Technology => self.cycle_technology(forward),
            Control::Model => self.cycle_model(forward),
            Control::TrainYear => self.step_train_year(forward),
            Control::OutOfSample => self.toggle_out_of_sample(),
        }
    }

    pub fn chart(&self) -> ChartModel {
        let series = build_series(&self.selection, &self.dataset);
        let y_max = y_upper_bound(&series);
        ChartModel {
            selection: self.selection,
            training_years: self.training_years(),
            series,
            y_max,
        }
    }
}

const fn cycle_index(index: usize, len: usize, forward: bool) -> usize {
    if len == 0 {
        return 0;
    }
    if forward {
        (index + 1) % len
    } else if index == 0 {
        len - 1
    } else {
        index - 1
    }
}

/// Clamps an inspection year to the X domain.
pub fn clamp_year(year: i32) -> i32 {
    year.clamp(X_DOMAIN[0], X_DOMAIN[1])
}
