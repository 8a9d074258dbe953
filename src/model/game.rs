use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::fmt;

use crate::error::AppError;

/// Identifier as handed out by the games api. Some records carry a number,
/// others a string; either way it is only ever echoed back into urls.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameId(String);

impl GameId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for GameId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Number(serde_json::Number),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(s) => Self(s),
            RawId::Number(n) => Self(n.to_string()),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Game {
    pub id: GameId,
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub image_url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub release: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub platforms: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub categories: Vec<String>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// True for the json values the api uses to say "nothing here".
#[must_use]
pub fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null | Value::Bool(false) => true,
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::Bool(true) => false,
    }
}

/// # Errors
///
/// Will return `Err` if the value is not empty and does not have the shape of a game record
pub fn decode_game(value: Value) -> Result<Option<Game>, AppError> {
    if is_empty_value(&value) {
        return Ok(None);
    }
    Ok(Some(serde_json::from_value(value)?))
}

/// # Errors
///
/// Will return `Err` if the value is not an array of game records
pub fn decode_games(value: Value) -> Result<Vec<Game>, AppError> {
    if value.is_null() {
        return Ok(Vec::new());
    }
    Ok(serde_json::from_value(value)?)
}
