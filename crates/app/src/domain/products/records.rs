//! Product Records

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use jiff::civil::Date;
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use thiserror::Error;

/// Text form of an expiration date (`dd/mm/yyyy`).
pub const EXPIRATION_DATE_FORMAT: &str = "%d/%m/%Y";

/// Product ID
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(u64);

impl ProductId {
    /// The ID handed out when the catalog is empty.
    pub const FIRST: Self = Self(1);

    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }

    /// The ID following this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(&self.0, f)
    }
}

impl From<u64> for ProductId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// Calendar date after which a product expires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ExpirationDate(Date);

impl ExpirationDate {
    #[must_use]
    pub const fn from_date(date: Date) -> Self {
        Self(date)
    }

    #[must_use]
    pub const fn date(self) -> Date {
        self.0
    }
}

#[derive(Debug, Error)]
pub enum ExpirationDateError {
    #[error("not a dd/mm/yyyy calendar date: {0}")]
    Parse(#[from] jiff::Error),

    #[error("\"{0}\" is not zero-padded dd/mm/yyyy")]
    NotCanonical(String),
}

impl FromStr for ExpirationDate {
    type Err = ExpirationDateError;

    /// Parses `dd/mm/yyyy` exactly.
    ///
    /// `strptime` also takes unpadded fields, short years and signed years,
    /// so the parsed date must format back to the input.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let date = Date::strptime(EXPIRATION_DATE_FORMAT, value)?;

        if date.strftime(EXPIRATION_DATE_FORMAT).to_string() != value {
            return Err(ExpirationDateError::NotCanonical(value.to_string()));
        }

        Ok(Self(date))
    }
}

impl Display for ExpirationDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(&self.0.strftime(EXPIRATION_DATE_FORMAT), f)
    }
}

impl Serialize for ExpirationDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ExpirationDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;

        value.parse().map_err(de::Error::custom)
    }
}

/// Product Record
///
/// Field names double as the on-disk JSON contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub id: ProductId,
    pub name: String,
    pub quantity: i64,
    pub code_value: String,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_expiration_date"
    )]
    pub expiration_date: Option<ExpirationDate>,
    #[serde(default)]
    pub is_published: bool,
    pub price: f64,
}

/// Older files store a missing expiration as `""`.
fn deserialize_expiration_date<'de, D>(deserializer: D) -> Result<Option<ExpirationDate>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer)?
        .filter(|value| !value.trim().is_empty())
        .map(|value| value.parse().map_err(de::Error::custom))
        .transpose()
}
