use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

/// Methods the dispatcher knows how to send.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    /// Case-insensitive, whitespace-tolerant parse. `None` for anything else.
    pub fn parse(raw: &str) -> Option<HttpMethod> {
        match raw.trim().to_uppercase().as_str() {
            "GET" => Some(HttpMethod::Get),
            "POST" => Some(HttpMethod::Post),
            "PUT" => Some(HttpMethod::Put),
            "PATCH" => Some(HttpMethod::Patch),
            "DELETE" => Some(HttpMethod::Delete),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }
}

/// The editable fields of a request, in detail-view order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Field {
    #[default]
    Name,
    Method,
    Url,
    Body,
    Headers,
}

impl Field {
    pub const ALL: [Field; 5] = [Field::Name, Field::Method, Field::Url, Field::Body, Field::Headers];

    pub fn index(&self) -> usize {
        match self {
            Field::Name => 0,
            Field::Method => 1,
            Field::Url => 2,
            Field::Body => 3,
            Field::Headers => 4,
        }
    }

    /// Next field down, clamped at the last one.
    pub fn next(&self) -> Field {
        Field::ALL[(self.index() + 1).min(Field::ALL.len() - 1)]
    }

    /// Next field up, clamped at the first one.
    pub fn prev(&self) -> Field {
        Field::ALL[self.index().saturating_sub(1)]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Method => "Method",
            Field::Url => "URL",
            Field::Body => "Body",
            Field::Headers => "Headers",
        }
    }
}

/// One saved request as it lives in `requests.json`.
///
/// Every field tolerates being absent or `null` so files written by older
/// versions (notably ones without `headers`) still load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RequestRecord {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub method: String,
    #[serde(deserialize_with = "null_as_default")]
    pub body: String,
    #[serde(deserialize_with = "null_as_default")]
    pub headers: BTreeMap<String, String>,
}

impl RequestRecord {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            method: HttpMethod::Get.as_str().to_string(),
            ..Default::default()
        }
    }

    /// Current text of a scalar field. `Headers` has no single value.
    pub fn field_value(&self, field: Field) -> Option<&str> {
        match field {
            Field::Name => Some(&self.name),
            Field::Method => Some(&self.method),
            Field::Url => Some(&self.url),
            Field::Body => Some(&self.body),
            Field::Headers => None,
        }
    }

    /// Overwrite a scalar field. Returns `false` for `Headers`.
    pub fn set_field(&mut self, field: Field, value: String) -> bool {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Method => &mut self.method,
            Field::Url => &mut self.url,
            Field::Body => &mut self.body,
            Field::Headers => return false,
        };
        *slot = value;
        true
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
