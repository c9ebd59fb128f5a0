use sqldaily::{Catalogue, Config, Dataset, Result};
use std::io::Write as _;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = Config::load()?;
    let dataset = Dataset::load(&config.dataset)?;
    let catalogue = Catalogue::new(config.cache_capacity);
    let html = catalogue.render(&dataset);

    match &config.output {
        Some(path) => {
            std::fs::write(path, html)?;
            info!("Wrote {} problems to {}", dataset.problems.len(), path.display());
        }
        None => std::io::stdout().lock().write_all(html.as_bytes())?,
    }
    Ok(())
}
