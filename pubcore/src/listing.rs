use serde::{
    de::DeserializeOwned,
    Deserialize,
    Serialize,
};
use serde_json::Value;
use std::{
    fmt,
    str::FromStr,
};

use crate::error::{
    BackendError,
    ValueError,
};

/// One page of entities as returned by a list call.
///
/// `total` is the backend's `totalElements` when the response is paged,
/// otherwise the number of items received.
#[derive(Clone, Debug, PartialEq)]
pub struct Listing<T> {
    pub items: Vec<T>,
    pub total: u64,
}

impl<T> Default for Listing<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            total: 0,
        }
    }
}

impl<T> From<Vec<T>> for Listing<T> {
    fn from(items: Vec<T>) -> Self {
        let total = items.len() as u64;
        Self { items, total }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Page<T> {
    content: Vec<T>,
    total_elements: Option<u64>,
}

/// Strip the `{ success, message, data }` response envelope, if present.
pub fn unwrap_envelope(value: Value) -> Value {
    match value {
        Value::Object(mut map) if map.contains_key("data") => {
            map.remove("data").unwrap_or(Value::Null)
        }
        value => value,
    }
}

impl<T: DeserializeOwned> Listing<T> {
    /// Read a list response in any of the shapes the backend produces: a
    /// bare array or a paged `content` object, either of which may be
    /// wrapped in the response envelope.
    pub fn from_value(value: Value) -> Result<Self, BackendError> {
        match unwrap_envelope(value) {
            Value::Null => Ok(Self::default()),
            value @ Value::Array(_) => {
                Ok(serde_json::from_value::<Vec<T>>(value)?.into())
            }
            value @ Value::Object(_) if value.get("content").is_some() => {
                let page = serde_json::from_value::<Page<T>>(value)?;
                let total = page.total_elements
                    .unwrap_or(page.content.len() as u64);
                Ok(Self {
                    items: page.content,
                    total,
                })
            }
            value => Err(BackendError::UnexpectedResponse(
                format!("not a list: {value}")
            )),
        }
    }
}

/// Read a single entity response, bare or enveloped.
pub fn decode_entity<T: DeserializeOwned>(value: Value) -> Result<T, BackendError> {
    Ok(serde_json::from_value(unwrap_envelope(value))?)
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        })
    }
}

impl FromStr for SortDirection {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ASC" => Ok(SortDirection::Asc),
            "DESC" => Ok(SortDirection::Desc),
            _ => Err(ValueError::UnknownSortDirection(s.to_string())),
        }
    }
}

/// Parameters passed through to a list call; absent ones are not sent.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ListQuery {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    pub sort: Option<SortDirection>,
    pub sort_by: Option<String>,
    pub title: Option<String>,
}

impl ListQuery {
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }
        if let Some(page_size) = self.page_size {
            pairs.push(("size", page_size.to_string()));
        }
        if let Some(sort) = self.sort {
            pairs.push(("sortDirection", sort.to_string()));
        }
        if let Some(sort_by) = &self.sort_by {
            pairs.push(("sortBy", sort_by.clone()));
        }
        if let Some(title) = &self.title {
            pairs.push(("title", title.clone()));
        }
        pairs
    }
}
