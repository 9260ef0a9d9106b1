use scraper::Html;

use crate::{
    domain::{
        selectors::{parse_number, text_of, Field, ListingSelectors},
        tutor::Tutor,
    },
    error::ScrapeError,
};

/// Everything read from one successfully fetched results page.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrapedPage {
    pub tutors: Vec<Tutor>,
    pub next_page: Option<u32>,
}

impl ScrapedPage {
    pub fn parse(html: &str, selectors: &ListingSelectors) -> Result<ScrapedPage, ScrapeError> {
        let document = Html::parse_document(html);

        let tutors = selectors
            .all(document.root_element(), Field::ListingContainer)
            .enumerate()
            .map(|(index, element)| {
                Tutor::parse_element(element, selectors).map_err(|e| ScrapeError::Listing {
                    index,
                    source: Box::new(e),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let next_page = next_page(&document, selectors)?;

        Ok(ScrapedPage { tutors, next_page })
    }
}

/// Reads the pagination control: the page after the active one, or `None`
/// when the active page is the last link.
pub fn next_page(document: &Html, selectors: &ListingSelectors) -> Result<Option<u32>, ScrapeError> {
    let links: Vec<_> = selectors
        .all(document.root_element(), Field::PaginationLink)
        .collect();

    let active = links
        .iter()
        .find(|link| link.value().classes().any(|class| class == "active"))
        .ok_or(ScrapeError::MissingActivePage)?;
    let active_label = text_of(*active);

    match links.last() {
        Some(last) if text_of(*last) != active_label => {
            let current: u32 = parse_number(Field::PaginationLink, &active_label)?;
            let next = current
                .checked_add(1)
                .ok_or_else(|| ScrapeError::TypeCoercion {
                    field: Field::PaginationLink,
                    value: active_label.clone(),
                })?;
            Ok(Some(next))
        }
        _ => Ok(None),
    }
}
