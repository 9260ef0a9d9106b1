use reqwest::StatusCode;
use serde_json::{Map, Value};

use crate::{
    domain::{
        city::City,
        selectors::ListingSelectors,
        tutor::{into_mappings, Tutor},
    },
    error::ScrapeError,
    services::{fetch_page, PageOutcome, TutorSession},
};

#[derive(Debug, Clone, PartialEq)]
pub enum Termination {
    /// The active page was the last pagination link.
    Exhausted,
    /// A page answered with a non-2xx status; earlier pages are kept.
    FetchFailed { page: u32, status: StatusCode },
    /// `max_pages` pages were read and the site still reported a next page.
    PageLimit { next_page: u32 },
    /// The pagination control pointed at a page that was not after the
    /// current one.
    NotAdvancing { page: u32, next_page: u32 },
}

#[derive(Debug)]
pub struct ScrapeReport {
    pub city: City,
    pub tutors: Vec<Tutor>,
    pub pages: u32,
    pub ended: Termination,
}

impl ScrapeReport {
    /// The collected records as flat key-value mappings, in scrape order.
    pub fn mappings(&self) -> serde_json::Result<Vec<Map<String, Value>>> {
        into_mappings(&self.tutors)
    }
}

pub async fn scrape_city(
    session: &TutorSession,
    city: City,
    max_pages: Option<u32>,
) -> Result<ScrapeReport, ScrapeError> {
    log::info!("Start Buki parser for: {}", city);

    let selectors = ListingSelectors::new()?;
    let mut tutors: Vec<Tutor> = vec![];
    let mut pages = 0;
    let mut next_page = Some(1);

    let ended = loop {
        let Some(current_page) = next_page else {
            break Termination::Exhausted;
        };
        if let Some(limit) = max_pages.filter(|&limit| pages >= limit) {
            log::info!("Stopping at page limit {}", limit);
            break Termination::PageLimit {
                next_page: current_page,
            };
        }

        log::info!("Start parsing page: {}", current_page);
        let url = session.page_url(city, current_page)?;

        match fetch_page(session, &selectors, url).await? {
            PageOutcome::FetchFailed { status } => {
                log::warn!(
                    "Page {} answered {}, stopping with {} results",
                    current_page,
                    status,
                    tutors.len()
                );
                break Termination::FetchFailed {
                    page: current_page,
                    status,
                };
            }
            PageOutcome::Fetched(page) => {
                pages += 1;
                match page.tutors.first() {
                    Some(first) => log::info!(
                        ".. parsing done with {} results. First result is {:?}",
                        page.tutors.len(),
                        first
                    ),
                    None => log::warn!("Page {} has no results", current_page),
                }

                tutors.extend(page.tutors);

                match page.next_page {
                    Some(next) if next <= current_page => {
                        log::warn!(
                            "Page {} points back to page {}, stopping",
                            current_page,
                            next
                        );
                        break Termination::NotAdvancing {
                            page: current_page,
                            next_page: next,
                        };
                    }
                    next => next_page = next,
                }
            }
        }
    };

    log::info!(
        "Finished {} after {} pages with {} results ({:?})",
        city,
        pages,
        tutors.len(),
        ended
    );

    Ok(ScrapeReport {
        city,
        tutors,
        pages,
        ended,
    })
}
