use reqwest::StatusCode;
use url::Url;

use crate::{
    domain::{results_page::ScrapedPage, selectors::ListingSelectors},
    error::ScrapeError,
    services::TutorSession,
};

pub enum PageOutcome {
    Fetched(ScrapedPage),
    /// The server answered with a non-2xx status. Nothing was parsed.
    FetchFailed { status: StatusCode },
}

pub async fn fetch_page(
    session: &TutorSession,
    selectors: &ListingSelectors,
    url: Url,
) -> Result<PageOutcome, ScrapeError> {
    log::debug!("GET {}", url);

    let res = session.client().get(url).send().await?;
    let status = res.status();
    if !status.is_success() {
        return Ok(PageOutcome::FetchFailed { status });
    }

    let html_content = res.text().await?;
    let page = ScrapedPage::parse(&html_content, selectors)?;

    Ok(PageOutcome::Fetched(page))
}
