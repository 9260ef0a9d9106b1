use std::time::Duration;

use reqwest::Client;
use url::Url;

use crate::{configuration::ScraperSettings, domain::city::City, error::ScrapeError};

/// The HTTP session shared by every page request of one run. The User-Agent
/// is picked once here and kept for the whole run.
pub struct TutorSession {
    client: Client,
    base_url: Url,
    user_agent: String,
}

impl TutorSession {
    pub fn new(settings: &ScraperSettings) -> Result<Self, ScrapeError> {
        let user_agent = settings
            .user_agent
            .clone()
            .unwrap_or_else(|| fake_user_agent::get_rua().to_string());

        let mut builder = reqwest::Client::builder()
            .cookie_store(true)
            .user_agent(user_agent.clone());
        if let Some(secs) = settings.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        let base_url = Url::parse(&settings.base_url)
            .map_err(|_| ScrapeError::InvalidBaseUrl(settings.base_url.clone()))?;
        if base_url.cannot_be_a_base() {
            return Err(ScrapeError::InvalidBaseUrl(settings.base_url.clone()));
        }

        log::debug!("Session user agent: {}", user_agent);

        Ok(TutorSession {
            client: builder.build()?,
            base_url,
            user_agent,
        })
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// `<base_url>/<city>/<page>`
    pub fn page_url(&self, city: City, page: u32) -> Result<Url, ScrapeError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ScrapeError::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .push(city.slug())
            .push(&page.to_string());

        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(base_url: &str) -> ScraperSettings {
        ScraperSettings {
            base_url: base_url.to_string(),
            user_agent: Some("test-agent/1.0".to_string()),
            ..ScraperSettings::default()
        }
    }

    #[test]
    fn page_url_appends_city_and_page() {
        let session = TutorSession::new(&settings("https://buki.com.ua/tutors")).unwrap();

        assert_eq!(
            session.page_url(City::Chernivtsi, 3).unwrap().as_str(),
            "https://buki.com.ua/tutors/chernivtsi/3"
        );
    }

    #[test]
    fn trailing_slash_in_base_url_is_ignored() {
        let session = TutorSession::new(&settings("https://buki.com.ua/tutors/")).unwrap();

        assert_eq!(
            session.page_url(City::KamyanetsPodilskyy, 1).unwrap().as_str(),
            "https://buki.com.ua/tutors/Kamyanets-Podilskyy/1"
        );
    }

    #[test]
    fn configured_user_agent_wins_over_random_pick() {
        let session = TutorSession::new(&settings("https://buki.com.ua/tutors")).unwrap();
        assert_eq!(session.user_agent(), "test-agent/1.0");
    }

    #[test]
    fn random_user_agent_is_not_empty() {
        let mut settings = settings("https://buki.com.ua/tutors");
        settings.user_agent = None;

        let session = TutorSession::new(&settings).unwrap();
        assert!(!session.user_agent().is_empty());
    }

    #[test]
    fn rejects_unusable_base_url() {
        assert!(matches!(
            TutorSession::new(&settings("mailto:someone@example.com")),
            Err(ScrapeError::InvalidBaseUrl(_))
        ));
        assert!(matches!(
            TutorSession::new(&settings("not a url")),
            Err(ScrapeError::InvalidBaseUrl(_))
        ));
    }
}
