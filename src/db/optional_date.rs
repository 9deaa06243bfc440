use std::fmt;

use rusqlite::types::{FromSql, ToSql};

use crate::error::TrackerError;

/// A possibly-absent `chrono::NaiveDate`. An absent date is a SQL `NULL` in
/// the store and an empty cell in CSV backups; a present one is always
/// ISO-8601 (`YYYY-MM-DD`). Absence is never represented by a sentinel date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct OptionalDate(pub Option<chrono::NaiveDate>);

impl OptionalDate {
    /// Parse user input for the date field named `field`. Blank input means
    /// the date was not supplied; anything else has to be `YYYY-MM-DD`.
    pub fn parse_field(field: &'static str, value: &str) -> Result<Self, TrackerError> {
        let value = value.trim();
        if value.is_empty() {
            return Ok(Self(None));
        }

        match value.parse::<chrono::NaiveDate>() {
            Ok(date) => Ok(Self(Some(date))),
            Err(_) => Err(TrackerError::Validation {
                field,
                value: value.to_owned(),
            }),
        }
    }
}

impl From<chrono::NaiveDate> for OptionalDate {
    fn from(value: chrono::NaiveDate) -> Self {
        Self(Some(value))
    }
}

impl From<Option<chrono::NaiveDate>> for OptionalDate {
    fn from(value: Option<chrono::NaiveDate>) -> Self {
        Self(value)
    }
}

impl std::ops::Deref for OptionalDate {
    type Target = Option<chrono::NaiveDate>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Display for OptionalDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            None => write!(f, "-"),
            Some(date) => date.fmt(f),
        }
    }
}

impl serde::Serialize for OptionalDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self.0 {
            None => serializer.serialize_str(""),
            Some(date) => serializer.serialize_str(&date.to_string()),
        }
    }
}

impl<'de> serde::Deserialize<'de> for OptionalDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct Visitor;

        impl serde::de::Visitor<'_> for Visitor {
            type Value = OptionalDate;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a YYYY-MM-DD date string, or an empty string")
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                if value.is_empty() {
                    return Ok(OptionalDate(None));
                }

                match value.parse::<chrono::NaiveDate>() {
                    Ok(date) => Ok(OptionalDate(Some(date))),
                    Err(parse_error) => Err(E::custom(parse_error)),
                }
            }
        }

        deserializer.deserialize_str(Visitor)
    }
}

impl ToSql for OptionalDate {
    fn to_sql(&self) -> rusqlite::Result<rusqlite::types::ToSqlOutput<'_>> {
        self.0.to_sql()
    }
}

impl FromSql for OptionalDate {
    fn column_result(value: rusqlite::types::ValueRef<'_>) -> rusqlite::types::FromSqlResult<Self> {
        <Option<chrono::NaiveDate> as FromSql>::column_result(value).map(OptionalDate)
    }
}
