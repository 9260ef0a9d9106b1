use itertools::Itertools;
use scraper::ElementRef;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::{
    domain::selectors::{parse_number, text_of, Field, ListingSelectors},
    error::ScrapeError,
};

/// Review score and the number of reviews behind it. The site shows both or
/// neither.
#[derive(Debug, Clone, PartialEq)]
pub struct Reviews {
    pub rating: f64,
    pub count: u32,
}

/// One tutor card from a results page.
#[derive(Debug, Clone, PartialEq)]
pub struct Tutor {
    pub name: String,
    pub education: Option<String>,
    pub experience: String,
    pub description: String,
    pub reviews: Option<Reviews>,
    pub price: u32,
    pub page_link: String,
    pub tags: String,
}

#[derive(Serialize)]
struct TutorRow<'a> {
    name: &'a str,
    education: Option<&'a str>,
    experience: &'a str,
    description: &'a str,
    rating: Option<f64>,
    reviews: Option<u32>,
    price: u32,
    page_link: &'a str,
    tags: &'a str,
}

impl Tutor {
    pub fn parse_element(
        element: ElementRef,
        selectors: &ListingSelectors,
    ) -> Result<Tutor, ScrapeError> {
        let name_wrap = selectors.required(element, Field::NameWrap)?;
        let name_link = selectors.required(name_wrap, Field::NameLink)?;
        let page_link = name_link
            .value()
            .attr("href")
            .ok_or(ScrapeError::StructuralMismatch {
                field: Field::NameLink,
            })?
            .to_string();

        let education = match selectors.optional(element, Field::Education) {
            Some(education) => Some(text_of(
                selectors.required(education, Field::EducationText)?,
            )),
            None => None,
        };

        let practices = text_of(selectors.required(element, Field::Practices)?);
        let experience = match practices.rsplit_once(": ") {
            Some((_, tail)) => tail.trim().to_string(),
            None => practices,
        };

        let reviews = match selectors.optional(element, Field::ReviewsMark) {
            Some(mark) => {
                let counter = text_of(selectors.required(element, Field::ReviewsCount)?);
                let count = counter.rsplit(": ").next().unwrap_or_default();

                Some(Reviews {
                    rating: parse_number(Field::ReviewsMark, &text_of(mark))?,
                    count: parse_number(Field::ReviewsCount, count)?,
                })
            }
            None => None,
        };

        let price = parse_number(
            Field::RateValue,
            &text_of(selectors.required(element, Field::RateValue)?),
        )?;

        Ok(Tutor {
            name: text_of(name_link),
            education,
            experience,
            description: text_of(selectors.required(element, Field::Description)?),
            reviews,
            price,
            page_link,
            tags: selectors
                .all(element, Field::TutorItem)
                .map(text_of)
                .join(","),
        })
    }

    pub fn rating(&self) -> Option<f64> {
        self.reviews.as_ref().map(|r| r.rating)
    }

    pub fn review_count(&self) -> Option<u32> {
        self.reviews.as_ref().map(|r| r.count)
    }

    /// Flat key-value view of the record; absent fields become `null`.
    pub fn to_mapping(&self) -> serde_json::Result<Map<String, Value>> {
        let row = TutorRow {
            name: &self.name,
            education: self.education.as_deref(),
            experience: &self.experience,
            description: &self.description,
            rating: self.rating(),
            reviews: self.review_count(),
            price: self.price,
            page_link: &self.page_link,
            tags: &self.tags,
        };

        serde_json::from_value(serde_json::to_value(row)?)
    }
}

pub fn into_mappings(tutors: &[Tutor]) -> serde_json::Result<Vec<Map<String, Value>>> {
    tutors.iter().map(Tutor::to_mapping).collect()
}
