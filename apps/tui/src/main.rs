use clap::Parser;
use color_eyre::Result;
use projection_tui::app::App;
use projection_tui::cli::CliArgs;
use projection_tui::config::init_app_config;
use projection_tui::data::load_dataset;
use projection_tui::logging::init_logging;
use projection_tui::{event, terminal};

#[tokio::main]
async fn main() -> Result<()> {
    // Setup error handling
    color_eyre::install()?;

    let args = CliArgs::parse();
    let mut config = init_app_config();
    args.apply_overrides(&mut config);

    // Not a terminal: print the series instead of drawing them
    let headless = args.headless || !is_terminal();
    init_logging(&config, headless);

    let (dataset, report) = load_dataset(&config).await?;
    let mut app = App::new(dataset, report, args.initial_selection());

    if headless {
        return event::run_headless(&app, args.json);
    }

    let mut terminal = terminal::setup_terminal()?;
    let result = event::run(&mut terminal, &mut app);
    terminal::cleanup_terminal_state(true, true);

    result
}

fn is_terminal() -> bool {
    atty::is(atty::Stream::Stdout)
}
