use serde::Deserialize;
use serde_aux::field_attributes::deserialize_option_number_from_string;

use crate::domain::city::City;

pub const DEFAULT_BASE_URL: &str = "https://buki.com.ua/tutors";

#[derive(Debug, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub scraper: ScraperSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScraperSettings {
    pub city: City,
    pub base_url: String,
    /// Fixed User-Agent; a random browser one is picked when unset.
    pub user_agent: Option<String>,
    #[serde(deserialize_with = "deserialize_option_number_from_string")]
    pub request_timeout_secs: Option<u64>,
    #[serde(deserialize_with = "deserialize_option_number_from_string")]
    pub max_pages: Option<u32>,
}

impl Default for ScraperSettings {
    fn default() -> Self {
        ScraperSettings {
            city: City::default(),
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: None,
            request_timeout_secs: None,
            max_pages: None,
        }
    }
}

/// Reads `configuration.yaml` from the working directory when present, then
/// `APP_`-prefixed environment variables, e.g. `APP_SCRAPER__CITY=khmelnytskyy`.
pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let base_path = std::env::current_dir().map_err(|e| config::ConfigError::Foreign(Box::new(e)))?;

    let settings = config::Config::builder()
        .add_source(config::File::from(base_path.join("configuration.yaml")).required(false))
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    settings.try_deserialize::<Settings>()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_yaml(yaml: &str) -> Settings {
        config::Config::builder()
            .add_source(config::File::from_str(yaml, config::FileFormat::Yaml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn empty_source_gives_defaults() {
        let settings = from_yaml("{}");

        assert_eq!(settings.scraper.city, City::Chernivtsi);
        assert_eq!(settings.scraper.base_url, DEFAULT_BASE_URL);
        assert_eq!(settings.scraper.request_timeout_secs, None);
        assert_eq!(settings.scraper.max_pages, None);
    }

    #[test]
    fn reads_city_and_numbers_given_as_strings() {
        let settings = from_yaml(
            r#"
scraper:
  city: Kamyanets-Podilskyy
  request_timeout_secs: "30"
  max_pages: 2
"#,
        );

        assert_eq!(settings.scraper.city, City::KamyanetsPodilskyy);
        assert_eq!(settings.scraper.request_timeout_secs, Some(30));
        assert_eq!(settings.scraper.max_pages, Some(2));
    }
}
