use anyhow::Context;
use buki_scraper::{
    configuration::get_configuration,
    services::{scrape_city, Termination, TutorSession},
};
use env_logger::{Env, Target};
use serde_json::Value;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Stdout)
        .init();

    let configuration = get_configuration().context("Failed to read configuration.")?;
    let settings = configuration.scraper;

    let session = TutorSession::new(&settings).context("Failed to build http session.")?;
    let report = scrape_city(&session, settings.city, settings.max_pages)
        .await
        .with_context(|| format!("Scraping {} failed", settings.city))?;

    if let Termination::FetchFailed { page, status } = report.ended {
        log::warn!(
            "Results are incomplete: page {} answered {}",
            page,
            status
        );
    }

    let items = report
        .mappings()
        .context("Failed to build output records.")?;
    for item in &items {
        log::debug!("{}", Value::Object(item.clone()));
    }
    log::info!("Collected {} tutors for {}", items.len(), report.city);

    Ok(())
}
