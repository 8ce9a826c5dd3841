//! `gameyaml <URL>`: prints the catalogue record for one storefront page.
mod config;

use std::io::Write;

use anyhow::Context;
use clap::Parser;
use gameyaml_engine::{render_yaml, HookChain, ReqwestFetcher, Spider};
use log::LevelFilter;
use spider_logging::spider_info;

#[derive(clap::Parser)]
#[command(name = "gameyaml", version, about = "Extract a game catalogue record from an itch.io or Steam page")]
struct Cli {
    /// itch.io game page or Steam store app page
    url: String,
}

fn main() -> anyhow::Result<()> {
    spider_logging::initialize(LevelFilter::Warn);
    let cli = Cli::parse();

    let working_dir = std::env::current_dir().context("cannot determine working directory")?;
    let config = config::load_config(&working_dir);
    let fetcher = ReqwestFetcher::new(config.fetch_settings());
    let spider = Spider::new(fetcher, config, HookChain::new());

    let assembled = spider
        .run(&cli.url)
        .with_context(|| format!("failed to extract {}", cli.url))?;
    spider_info!("Thumbnail source: {}", assembled.thumbnail_url);

    let yaml = render_yaml(&assembled.record)?;
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(yaml.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
