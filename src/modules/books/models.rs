use serde::{Deserialize, Deserializer, Serialize};

/// A catalog entry. Absent or `null` fields in a request body read as empty strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Title of the book
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    /// Author of the book
    #[serde(default, deserialize_with = "null_as_empty")]
    pub author: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl Book {
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
        }
    }
}
