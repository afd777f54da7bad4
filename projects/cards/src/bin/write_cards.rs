use anyhow::{Context, Result};
use projects_cards::cards::{collect_from_github, write_themes, Card};
use projects_cards::config::Config;
use tracing::info;
use utils_trace::tracing_init;

fn main() -> Result<()> {
    tracing_init("info").context("initializing tracing")?;

    let config = Config::from_env().context("loading configuration")?;
    info!(user = %config.username, output_dir = %config.output_dir.display(), "writing cards");

    for card in Card::ALL {
        let values = collect_from_github(&config, card)
            .with_context(|| format!("collecting {}", card.file_stem()))?;

        for path in write_themes(&config.output_dir, card, &values)? {
            info!("Wrote {}", path.display());
        }
    }

    Ok(())
}
