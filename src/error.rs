use thiserror::Error;

use crate::domain::selectors::Field;

#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("no element matched {field:?} (`{}`)", field.selector())]
    StructuralMismatch { field: Field },

    #[error("pagination has no active page marker")]
    MissingActivePage,

    #[error("could not convert {value:?} from {field:?} to a number")]
    TypeCoercion { field: Field, value: String },

    #[error("listing #{index} could not be parsed: {source}")]
    Listing {
        index: usize,
        #[source]
        source: Box<ScrapeError>,
    },

    #[error("invalid selector `{0}`")]
    InvalidSelector(String),

    #[error("base url `{0}` cannot take path segments")]
    InvalidBaseUrl(String),

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
}
