use std::str::FromStr;

use scraper::{element_ref::Select, ElementRef, Selector};

use crate::error::ScrapeError;

/// Every piece of markup the scraper reads, keyed by what it holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    ListingContainer,
    PaginationLink,
    NameWrap,
    NameLink,
    Education,
    EducationText,
    Practices,
    Description,
    ReviewsMark,
    ReviewsCount,
    RateValue,
    TutorItem,
}

impl Field {
    pub const ALL: [Field; 12] = [
        Field::ListingContainer,
        Field::PaginationLink,
        Field::NameWrap,
        Field::NameLink,
        Field::Education,
        Field::EducationText,
        Field::Practices,
        Field::Description,
        Field::ReviewsMark,
        Field::ReviewsCount,
        Field::RateValue,
        Field::TutorItem,
    ];

    pub fn selector(self) -> &'static str {
        match self {
            Field::ListingContainer => ".user-item-wrapper",
            Field::PaginationLink => "._pages a",
            Field::NameWrap => ".name-wrap",
            Field::NameLink => "a",
            Field::Education => ".education",
            Field::EducationText => "span",
            Field::Practices => ".practices",
            Field::Description => ".description",
            Field::ReviewsMark => ".reviews-mark",
            Field::ReviewsCount => ".reviews_count button",
            Field::RateValue => ".rate-value",
            Field::TutorItem => ".tutor_item",
        }
    }
}

/// Compiled selectors for every [`Field`], built once per run.
///
/// All lookups go through [`ListingSelectors::required`] or
/// [`ListingSelectors::optional`], so the missing-element policy lives here
/// and nowhere else.
pub struct ListingSelectors {
    compiled: Vec<Selector>,
}

impl ListingSelectors {
    pub fn new() -> Result<Self, ScrapeError> {
        let compiled = Field::ALL
            .iter()
            .map(|field| {
                Selector::parse(field.selector())
                    .map_err(|_| ScrapeError::InvalidSelector(field.selector().to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ListingSelectors { compiled })
    }

    pub fn get(&self, field: Field) -> &Selector {
        // `Field::ALL` is in declaration order, so the discriminant is the index.
        &self.compiled[field as usize]
    }

    pub fn all<'a, 'b>(&'b self, scope: ElementRef<'a>, field: Field) -> Select<'a, 'b> {
        scope.select(self.get(field))
    }

    pub fn optional<'a>(&self, scope: ElementRef<'a>, field: Field) -> Option<ElementRef<'a>> {
        self.all(scope, field).next()
    }

    pub fn required<'a>(
        &self,
        scope: ElementRef<'a>,
        field: Field,
    ) -> Result<ElementRef<'a>, ScrapeError> {
        self.optional(scope, field)
            .ok_or(ScrapeError::StructuralMismatch { field })
    }
}

pub fn text_of(element: ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}

pub fn parse_number<T: FromStr>(field: Field, raw: &str) -> Result<T, ScrapeError> {
    raw.trim().parse().map_err(|_| ScrapeError::TypeCoercion {
        field,
        value: raw.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use scraper::Html;

    use super::*;

    #[test]
    fn every_field_compiles_to_its_own_selector() {
        let selectors = ListingSelectors::new().unwrap();
        let html = Html::parse_fragment(r#"<div class="rate-value">350</div><p class="description">Hi</p>"#);

        let rate = selectors.required(html.root_element(), Field::RateValue).unwrap();
        assert_eq!(text_of(rate), "350");

        let description = selectors.required(html.root_element(), Field::Description).unwrap();
        assert_eq!(text_of(description), "Hi");
    }

    #[test]
    fn required_reports_the_missing_field() {
        let selectors = ListingSelectors::new().unwrap();
        let html = Html::parse_fragment("<div></div>");

        let err = selectors
            .required(html.root_element(), Field::NameWrap)
            .unwrap_err();

        assert!(matches!(
            err,
            ScrapeError::StructuralMismatch {
                field: Field::NameWrap
            }
        ));
        assert!(selectors.optional(html.root_element(), Field::Education).is_none());
    }

    #[test]
    fn parse_number_trims_and_reports_bad_values() {
        assert_eq!(parse_number::<u32>(Field::RateValue, " 400\n").unwrap(), 400);

        let err = parse_number::<u32>(Field::RateValue, "free").unwrap_err();
        assert!(matches!(
            err,
            ScrapeError::TypeCoercion { field: Field::RateValue, ref value } if value == "free"
        ));
    }
}
