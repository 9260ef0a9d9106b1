use std::{fmt, str::FromStr};

use serde::Deserialize;

/// Cities the marketplace lists tutors for, as used in
/// `https://buki.com.ua/tutors/<slug>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum City {
    #[serde(rename = "Kamyanets-Podilskyy")]
    KamyanetsPodilskyy,
    #[serde(rename = "khmelnytskyy")]
    Khmelnytskyy,
    #[default]
    #[serde(rename = "chernivtsi")]
    Chernivtsi,
}

impl City {
    pub fn slug(self) -> &'static str {
        match self {
            City::KamyanetsPodilskyy => "Kamyanets-Podilskyy",
            City::Khmelnytskyy => "khmelnytskyy",
            City::Chernivtsi => "chernivtsi",
        }
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for City {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [City::KamyanetsPodilskyy, City::Khmelnytskyy, City::Chernivtsi]
            .into_iter()
            .find(|city| city.slug() == s)
            .ok_or_else(|| format!("unknown city `{}`", s))
    }
}
