use clap::Parser;
use projection_core::{ModelType, Selection, Technology};
use std::path::PathBuf;

use crate::config::AppConfig;

#[derive(Debug, Parser)]
#[command(name = "projection_tui", version, about = "Growth projection viewer")]
pub struct CliArgs {
    /// Print the derived series and exit
    #[arg(long)]
    pub headless: bool,

    /// Print headless output as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Directory holding the data files
    #[arg(long = "data-dir", value_name = "PATH")]
    pub data_dir: Option<PathBuf>,

    /// Historical data file name inside the data directory
    #[arg(long, value_name = "FILE")]
    pub historical: Option<String>,

    /// Projection data file name inside the data directory
    #[arg(long, value_name = "FILE")]
    pub projections: Option<String>,

    /// Initial technology (wind or solar)
    #[arg(long, value_parser = parse_technology, default_value = "wind")]
    pub technology: Technology,

    /// Initial growth model (logistic or exponential)
    #[arg(long, value_parser = parse_model, default_value = "logistic")]
    pub model: ModelType,

    /// Initial training year
    #[arg(long = "train-year", value_name = "YEAR")]
    pub train_year: Option<i32>,

    /// Start with out-of-sample data shown
    #[arg(long = "out-of-sample")]
    pub out_of_sample: bool,
}

impl CliArgs {
    pub fn apply_overrides(&self, config: &mut AppConfig) {
        if let Some(dir) = &self.data_dir {
            config.data_dir.clone_from(dir);
        }
        if let Some(file) = &self.historical {
            config.historical_file.clone_from(file);
        }
        if let Some(file) = &self.projections {
            config.projections_file.clone_from(file);
        }
        if self.debug {
            config.debug = true;
        }
    }

    pub fn initial_selection(&self) -> Selection {
        let defaults = Selection::default();
        Selection {
            technology: self.technology,
            model: self.model,
            train_year: self.train_year.or(defaults.train_year),
            show_out_of_sample: self.out_of_sample,
        }
    }
}

fn parse_technology(value: &str) -> Result<Technology, String> {
    Technology::parse(value).ok_or_else(|| format!("unknown technology '{value}' (wind, solar)"))
}

fn parse_model(value: &str) -> Result<ModelType, String> {
    ModelType::parse(value)
        .ok_or_else(|| format!("unknown model '{value}' (logistic, exponential)"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_give_default_selection() {
        let args = CliArgs::parse_from(["projection_tui"]);
        assert_eq!(args.initial_selection(), Selection::default());
    }

    #[test]
    fn selection_flags_are_parsed() {
        let args = CliArgs::parse_from([
            "projection_tui",
            "--technology",
            "Solar",
            "--model",
            "exponential",
            "--train-year",
            "2018",
            "--out-of-sample",
        ]);
        let selection = args.initial_selection();
        assert_eq!(selection.technology, Technology::Solar);
        assert_eq!(selection.model, ModelType::Exponential);
        assert_eq!(selection.train_year, Some(2018));
        assert!(selection.show_out_of_sample);
    }

    #[test]
    fn unknown_technology_is_rejected() {
        assert!(CliArgs::try_parse_from(["projection_tui", "--technology", "hydro"]).is_err());
    }

    #[test]
    fn path_flags_override_config() {
        let args = CliArgs::parse_from([
            "projection_tui",
            "--data-dir",
            "/tmp/data",
            "--projections",
            "fits.json",
            "--debug",
        ]);
        let mut config = AppConfig::default();
        args.apply_overrides(&mut config);
        assert_eq!(config.data_dir, PathBuf::from("/tmp/data"));
        assert_eq!(config.historical_file, "historical.json");
        assert_eq!(config.projections_file, "fits.json");
        assert!(config.debug);
    }
}
