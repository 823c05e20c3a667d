use anyhow::Context;
use clap::Parser;
use dioxus::prelude::*;
use tracing::{info, Level};
use wizard_ui::{WizardConfig, WizardLayout};

const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Command line arguments for the demo wizard
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Path to a JSON wizard configuration
    #[clap(short = 'c', long = "config")]
    config_file: Option<String>,

    /// Enable debug logging
    #[clap(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let level = if args.verbose { Level::DEBUG } else { Level::INFO };
    dioxus::logger::init(level).context("failed to initialize logging")?;

    let config = match &args.config_file {
        Some(path) => WizardConfig::load(path)
            .with_context(|| format!("failed to load wizard configuration from {}", path))?,
        None => WizardConfig::default(),
    };
    info!(
        title = %config.title,
        steps = config.step_count(),
        "starting wizard"
    );

    dioxus::LaunchBuilder::new().with_context(config).launch(App);
    Ok(())
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        WizardLayout {}
    }
}
