pub mod page_fetcher;
pub mod session;
pub mod tutor_scraper;

pub use page_fetcher::*;
pub use session::*;
pub use tutor_scraper::*;
