use anyhow::Context;
use clap::Parser;
use noteboard::cli::Cli;
use noteboard::config::Config;
use noteboard::logging::init_tracing;
use noteboard::ui::app::App;
use noteboard::ui::runtime;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => Config::load().with_context(|| {
            format!(
                "Failed to load config from {}",
                Config::config_path().display()
            )
        })?,
    };
    if let Some(owner) = cli.owner {
        config.ui.owner = owner;
    }
    if let Some(theme) = cli.theme {
        config.ui.theme = theme;
    }

    let app = App::from_config(&config);

    if cli.dump {
        let json = serde_json::to_string_pretty(&app.snapshot())?;
        println!("{json}");
        return Ok(());
    }

    runtime::run(app).context("Terminal UI failed")
}
