//! User profile types
//!
//! `RequestCount` is the only value the user supplies; everything else is
//! read-only data decoded from the random user API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Smallest number of users that can be requested
pub const MIN_COUNT: u16 = 1;

/// Largest number of users that can be requested
pub const MAX_COUNT: u16 = 500;

// ─────────────────────────────────────────────────────────────────────────────
// Request Count
// ─────────────────────────────────────────────────────────────────────────────

/// Number of users to request, always within `MIN_COUNT..=MAX_COUNT`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestCount(u16);

impl RequestCount {
    /// Returns `None` when `value` is outside the allowed range
    pub fn new(value: u16) -> Option<Self> {
        (MIN_COUNT..=MAX_COUNT)
            .contains(&value)
            .then_some(Self(value))
    }

    pub fn get(self) -> u16 {
        self.0
    }
}

impl fmt::Display for RequestCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Why a string could not become a `RequestCount`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CountError {
    Empty,
    NotANumber(String),
    OutOfRange(u64),
}

impl fmt::Display for CountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "count is empty"),
            Self::NotANumber(s) => write!(f, "'{}' is not a whole number", s),
            Self::OutOfRange(n) => write!(
                f,
                "{} is out of range (expected {}-{})",
                n, MIN_COUNT, MAX_COUNT
            ),
        }
    }
}

impl std::error::Error for CountError {}

impl FromStr for RequestCount {
    type Err = CountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(CountError::Empty);
        }
        if !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(CountError::NotANumber(trimmed.to_string()));
        }

        // Digits only, so a parse failure can only mean overflow
        let value: u64 = trimmed.parse().unwrap_or(u64::MAX);
        u16::try_from(value)
            .ok()
            .and_then(Self::new)
            .ok_or(CountError::OutOfRange(value))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// User Record
// ─────────────────────────────────────────────────────────────────────────────

/// One randomly generated user profile
///
/// Field names follow the API payload; every field is required so a partial
/// record fails the whole response instead of rendering blanks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub name: PersonName,
    pub email: String,
    pub gender: String,
    pub dob: DateOfBirth,
    pub phone: String,
    pub cell: String,
    #[serde(rename = "nat")]
    pub nationality: String,
    #[serde(rename = "location")]
    pub address: Address,
    pub picture: Picture,
}

impl UserRecord {
    /// "Title First Last"
    pub fn full_name(&self) -> String {
        format!(
            "{} {} {}",
            self.name.title, self.name.first, self.name.last
        )
    }

    pub fn age(&self) -> u32 {
        self.dob.age
    }

    pub fn birth_date(&self) -> DateTime<Utc> {
        self.dob.date
    }

    pub fn picture_url(&self) -> &str {
        &self.picture.large
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonName {
    pub title: String,
    pub first: String,
    pub last: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateOfBirth {
    pub date: DateTime<Utc>,
    pub age: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub street: Street,
    pub city: String,
    pub state: String,
    pub country: String,
    pub postcode: Postcode,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Street {
    pub number: u32,
    pub name: String,
}

/// Postcodes are numeric for most countries but alphanumeric for some
/// (e.g. "K7L 3N6"), and the API emits whichever JSON type fits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Postcode {
    Numeric(u64),
    Text(String),
}

impl fmt::Display for Postcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeric(n) => write!(f, "{}", n),
            Self::Text(s) => f.write_str(s),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Picture {
    pub large: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::users::fixtures;

    #[test]
    fn request_count_enforces_bounds() {
        assert!(RequestCount::new(0).is_none());
        assert_eq!(RequestCount::new(1).map(RequestCount::get), Some(1));
        assert_eq!(RequestCount::new(500).map(RequestCount::get), Some(500));
        assert!(RequestCount::new(501).is_none());
    }

    #[test]
    fn request_count_parses_strings() {
        assert_eq!("42".parse::<RequestCount>().map(|c| c.get()), Ok(42));
        assert_eq!(" 7 ".parse::<RequestCount>().map(|c| c.get()), Ok(7));
        assert_eq!("".parse::<RequestCount>(), Err(CountError::Empty));
        assert_eq!(
            "4x".parse::<RequestCount>(),
            Err(CountError::NotANumber("4x".to_string()))
        );
        assert_eq!(
            "-3".parse::<RequestCount>(),
            Err(CountError::NotANumber("-3".to_string()))
        );
        assert_eq!("0".parse::<RequestCount>(), Err(CountError::OutOfRange(0)));
        assert_eq!(
            "501".parse::<RequestCount>(),
            Err(CountError::OutOfRange(501))
        );
        assert_eq!(
            "99999999999999999999999".parse::<RequestCount>(),
            Err(CountError::OutOfRange(u64::MAX))
        );
    }

    #[test]
    fn decodes_api_record() {
        let user: UserRecord = serde_json::from_value(fixtures::user_json(0)).unwrap();

        assert_eq!(user.full_name(), "Mr Liam Walker");
        assert_eq!(user.email, "liam.walker@example.com");
        assert_eq!(user.age(), 41);
        assert_eq!(user.nationality, "NZ");
        assert_eq!(user.address.street.number, 4512);
        assert_eq!(user.address.postcode, Postcode::Numeric(84521));
        assert_eq!(
            user.picture_url(),
            "https://randomuser.me/api/portraits/men/0.jpg"
        );
        assert_eq!(
            user.birth_date().to_rfc3339(),
            "1983-04-09T14:22:31.118+00:00"
        );
    }

    #[test]
    fn decodes_text_postcode() {
        let mut json = fixtures::user_json(1);
        json["location"]["postcode"] = serde_json::json!("K7L 3N6");

        let user: UserRecord = serde_json::from_value(json).unwrap();
        assert_eq!(user.address.postcode, Postcode::Text("K7L 3N6".to_string()));
        assert_eq!(user.address.postcode.to_string(), "K7L 3N6");
    }

    #[test]
    fn missing_field_is_rejected() {
        let mut json = fixtures::user_json(0);
        json.as_object_mut().unwrap().remove("email");

        let result: Result<UserRecord, _> = serde_json::from_value(json);
        let err = result.unwrap_err().to_string();
        assert!(err.contains("email"), "unexpected error: {}", err);
    }
}
