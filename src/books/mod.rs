//! The book service domain: the `Book` record and its genre set.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ValidationError;
use crate::record::Record;

#[cfg(feature = "http")]
pub mod http;

/// The closed set of book categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Genre {
    #[serde(rename = "fiction")]
    Fiction,
    Motivational,
    SciFi,
    Romance,
}

impl Genre {
    /// Every accepted category string, in declaration order.
    pub const NAMES: [&'static str; 4] = ["fiction", "Motivational", "SciFi", "Romance"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Genre::Fiction => "fiction",
            Genre::Motivational => "Motivational",
            Genre::SciFi => "SciFi",
            Genre::Romance => "Romance",
        }
    }
}

impl FromStr for Genre {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fiction" => Ok(Genre::Fiction),
            "Motivational" => Ok(Genre::Motivational),
            "SciFi" => Ok(Genre::SciFi),
            "Romance" => Ok(Genre::Romance),
            _ => Err(()),
        }
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A catalogued book.
///
/// `book_id` is server-assigned at insert; a value supplied by the caller
/// is overwritten, not rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub book_id: String,
    pub name: String,
    pub price: f64,
    pub genre: Genre,
}

impl Record for Book {
    const ENTITY: &'static str = "Book";

    fn validate(input: &Value) -> Result<Self, ValidationError> {
        let mut err = ValidationError::new(Self::ENTITY);

        let name = match input.get("name") {
            Some(Value::String(s)) => Some(s.clone()),
            Some(_) => {
                err.reject("name", "must be a string");
                None
            }
            None => {
                err.reject("name", "required");
                None
            }
        };

        let price = match input.get("price") {
            Some(v) => match v.as_f64() {
                Some(p) => Some(p),
                None => {
                    err.reject("price", "must be a number");
                    None
                }
            },
            None => {
                err.reject("price", "required");
                None
            }
        };

        let genre = match input.get("genre") {
            Some(Value::String(s)) => match s.parse::<Genre>() {
                Ok(g) => Some(g),
                Err(()) => {
                    err.reject(
                        "genre",
                        format!("must be one of {}", Genre::NAMES.join(", ")),
                    );
                    None
                }
            },
            Some(_) => {
                err.reject("genre", "must be a string");
                None
            }
            None => {
                err.reject("genre", "required");
                None
            }
        };

        // A caller-supplied book_id is deliberately ignored here.
        match (name, price, genre) {
            (Some(name), Some(price), Some(genre)) => Ok(Book {
                book_id: String::new(),
                name,
                price,
                genre,
            }),
            _ => Err(err),
        }
    }

    fn id(&self) -> Option<&str> {
        Some(&self.book_id)
    }

    fn assign_id(&mut self, id: String) {
        self.book_id = id;
    }
}
