//! # Schema-free records
//!
//! A [`Record`] is one item of any collection. The client knows five optional
//! text fields ([`Field`]) plus the server-assigned `_id`; every other key the
//! server sends is kept in [`Record::extra`] and written back untouched, so an
//! edit round-trips fields the form does not know about.
//!
//! A record without an id is a draft: submitting it creates a new item.
//!
//! ## Wire format
//!
//! ```json
//! { "_id": "42", "title": "Sports day", "content": "<p>...</p>", "name": "extra key" }
//! ```
//!
//! Numbers, booleans and `null` in known fields are read as text (or absent)
//! for the form, but the wire value is remembered: a field the form did not
//! change goes back exactly as it came. A known key holding anything else
//! (object, array) is left in `extra` verbatim, as is an empty `_id`, which
//! does not make the record persisted.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

const ID_KEY: &str = "_id";

/// Server-assigned record identity.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The fields the generic form edits, in form order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Title,
    Content,
    ImageUrl,
    Category,
    Date,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::Title,
        Field::Content,
        Field::ImageUrl,
        Field::Category,
        Field::Date,
    ];

    /// JSON key on the wire.
    pub fn key(&self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Content => "content",
            Field::ImageUrl => "image_url",
            Field::Category => "category",
            Field::Date => "date",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            Field::Title => "Title / Name",
            Field::Content => "Content / Description (HTML allowed)",
            Field::ImageUrl => "Image URL",
            Field::Category => "Category / Type",
            Field::Date => "Date (optional)",
        }
    }

    /// Rendered as a textarea spanning the full form width.
    pub fn is_long_text(&self) -> bool {
        matches!(self, Field::Title | Field::Content)
    }

    pub fn get<'a>(&self, record: &'a Record) -> Option<&'a str> {
        self.slot(record).as_deref()
    }

    pub fn set(&self, record: &mut Record, value: impl Into<String>) {
        *self.slot_mut(record) = Some(value.into());
    }

    fn slot<'a>(&self, record: &'a Record) -> &'a Option<String> {
        match self {
            Field::Title => &record.title,
            Field::Content => &record.content,
            Field::ImageUrl => &record.image_url,
            Field::Category => &record.category,
            Field::Date => &record.date,
        }
    }

    fn slot_mut<'a>(&self, record: &'a mut Record) -> &'a mut Option<String> {
        match self {
            Field::Title => &mut record.title,
            Field::Content => &mut record.content,
            Field::ImageUrl => &mut record.image_url,
            Field::Category => &mut record.category,
            Field::Date => &mut record.date,
        }
    }
}

/// One item of a collection.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Map<String, Value>", into = "Map<String, Value>")]
pub struct Record {
    pub id: Option<RecordId>,
    pub title: Option<String>,
    pub content: Option<String>,
    pub image_url: Option<String>,
    pub category: Option<String>,
    pub date: Option<String>,
    /// Keys the client does not model, passed through as received.
    pub extra: Map<String, Value>,
    /// Non-string wire values of known keys, as received.
    raw: Map<String, Value>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to set one form field.
    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        field.set(&mut self, value);
        self
    }

    /// Builder method to set the identity.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(RecordId::new(id));
        self
    }

    /// Not yet persisted on the server.
    pub fn is_draft(&self) -> bool {
        self.id.is_none()
    }

    /// The empty mapping: no id, no fields, no extra keys.
    pub fn is_empty(&self) -> bool {
        self.id.is_none() && Field::ALL.iter().all(|f| f.get(self).is_none()) && self.extra.is_empty()
    }

    /// Label for list cards: title, else `name`, else `key`, else "Item".
    pub fn display_name(&self) -> &str {
        [self.title.as_deref(), self.extra_text("name"), self.extra_text("key")]
            .into_iter()
            .flatten()
            .find(|s| !s.is_empty())
            .unwrap_or("Item")
    }

    fn extra_text(&self, key: &str) -> Option<&str> {
        self.extra.get(key).and_then(Value::as_str)
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

impl From<Map<String, Value>> for Record {
    fn from(mut map: Map<String, Value>) -> Self {
        let blank_id = matches!(map.get(ID_KEY), Some(Value::String(s)) if s.is_empty());
        let mut raw = Map::new();
        let mut take = |key: &str| -> Option<String> {
            let text = match map.get(key)? {
                Value::Null => None,
                value => Some(scalar_text(value)?),
            };
            if let Some(value) = map.remove(key) {
                if !value.is_string() {
                    raw.insert(key.to_string(), value);
                }
            }
            text
        };

        let id = if blank_id {
            None
        } else {
            take(ID_KEY).map(RecordId)
        };
        let title = take(Field::Title.key());
        let content = take(Field::Content.key());
        let image_url = take(Field::ImageUrl.key());
        let category = take(Field::Category.key());
        let date = take(Field::Date.key());

        Record {
            id,
            title,
            content,
            image_url,
            category,
            date,
            extra: map,
            raw,
        }
    }
}

impl From<Record> for Map<String, Value> {
    fn from(record: Record) -> Self {
        let mut map = record.extra;
        let mut raw = record.raw;
        let mut put = |key: &str, text: Option<String>| {
            let original = raw.remove(key);
            let value = match (text, original) {
                (Some(text), Some(original))
                    if scalar_text(&original).as_deref() == Some(text.as_str()) =>
                {
                    original
                }
                (Some(text), _) => Value::String(text),
                (None, Some(Value::Null)) => Value::Null,
                (None, _) => return,
            };
            map.insert(key.to_string(), value);
        };

        put(ID_KEY, record.id.map(|id| id.0));
        put(Field::Title.key(), record.title);
        put(Field::Content.key(), record.content);
        put(Field::ImageUrl.key(), record.image_url);
        put(Field::Category.key(), record.category);
        put(Field::Date.key(), record.date);
        map
    }
}
