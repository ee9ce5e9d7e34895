use crate::error::FlashcardError;
use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU32, Ordering};
use uuid::Uuid;

pub const ID_LEN: usize = 12;

// Five random bytes fixed for the lifetime of the process, as in a document-store ObjectId.
static PROCESS_BYTES: Lazy<[u8; 5]> = Lazy::new(|| {
    let random = Uuid::new_v4();
    let mut bytes = [0u8; 5];
    bytes.copy_from_slice(&random.as_bytes()[..5]);
    bytes
});

static COUNTER: AtomicU32 = AtomicU32::new(0);

/// Identifier of a stored flashcard.
///
/// Twelve bytes: big-endian unix seconds, a per-process random tag, and a
/// 24-bit counter. Rendered as 24 lowercase hex digits. Ids generated by the
/// same process sort in creation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FlashcardId([u8; ID_LEN]);

impl FlashcardId {
    pub fn generate() -> Self {
        Self::generate_at(Utc::now())
    }

    pub fn generate_at(at: DateTime<Utc>) -> Self {
        let secs = at.timestamp().clamp(0, u32::MAX as i64) as u32;
        let count = COUNTER.fetch_add(1, Ordering::Relaxed) & 0x00ff_ffff;

        let mut bytes = [0u8; ID_LEN];
        bytes[..4].copy_from_slice(&secs.to_be_bytes());
        bytes[4..9].copy_from_slice(&*PROCESS_BYTES);
        bytes[9..].copy_from_slice(&count.to_be_bytes()[1..]);
        Self(bytes)
    }
}

impl fmt::Display for FlashcardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

impl FromStr for FlashcardId {
    type Err = FlashcardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || FlashcardError::InvalidId(s.to_string());

        if s.len() != ID_LEN * 2 || !s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let mut bytes = [0u8; ID_LEN];
        for (i, byte) in bytes.iter_mut().enumerate() {
            let pair = &s[i * 2..i * 2 + 2];
            *byte = u8::from_str_radix(pair, 16).map_err(|_| invalid())?;
        }
        Ok(Self(bytes))
    }
}

impl Serialize for FlashcardId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for FlashcardId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Flashcard {
    #[serde(alias = "_id")]
    pub id: FlashcardId,
    pub term: String,
    pub definition: String,
    pub topic: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Flashcard {
    /// Builds a new record. Callers are expected to pass already validated fields.
    pub fn new(term: String, definition: String, topic: String) -> Self {
        let now = Utc::now();
        Self {
            id: FlashcardId::generate_at(now),
            term,
            definition,
            topic,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Body of a create request. Every field is optional on the wire so that
/// missing fields surface as validation errors rather than parse errors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlashcardDraft {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub term: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub definition: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
}

impl FlashcardDraft {
    pub fn new(term: impl Into<String>, definition: impl Into<String>) -> Self {
        Self {
            term: Some(term.into()),
            definition: Some(definition.into()),
            topic: None,
        }
    }

    pub fn with_topic(mut self, topic: impl Into<String>) -> Self {
        self.topic = Some(topic.into());
        self
    }
}

/// Body of an update request: only the provided fields are applied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlashcardPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub term: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub definition: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
}

/// Confirmation body returned by deletes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Confirmation {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_renders_as_24_hex_digits() {
        let id = FlashcardId::generate();
        let text = id.to_string();
        assert_eq!(text.len(), 24);
        assert!(text.chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(text.parse::<FlashcardId>().unwrap(), id);
    }

    #[test]
    fn parses_uppercase_hex() {
        let id: FlashcardId = "65A1B2C3D4E5F60718293A4B".parse().unwrap();
        assert_eq!(id.to_string(), "65a1b2c3d4e5f60718293a4b");
    }

    #[test]
    fn rejects_malformed_ids() {
        for raw in [
            "",
            "123",
            "zzzzzzzzzzzzzzzzzzzzzzzz",
            "000000000000000000000000ff",
            "é0000000000000000000000",
            "+0000000000000000000000f",
        ] {
            assert!(
                matches!(raw.parse::<FlashcardId>(), Err(FlashcardError::InvalidId(_))),
                "{raw:?} should be rejected"
            );
        }
    }

    #[test]
    fn ids_from_one_process_sort_in_creation_order() {
        let now = Utc::now();
        let first = FlashcardId::generate_at(now);
        let second = FlashcardId::generate_at(now);
        assert!(second > first);
    }

    #[test]
    fn serializes_camel_case_and_reads_underscore_id() {
        let card = Flashcard::new("Closure".into(), "A function".into(), "Js".into());
        let value = serde_json::to_value(&card).unwrap();
        assert_eq!(value["id"], card.id.to_string());
        assert!(value.get("createdAt").is_some());

        let mut legacy = value.clone();
        let obj = legacy.as_object_mut().unwrap();
        let id = obj.remove("id").unwrap();
        obj.insert("_id".into(), id);
        let parsed: Flashcard = serde_json::from_value(legacy).unwrap();
        assert_eq!(parsed, card);
    }

    #[test]
    fn draft_omits_missing_fields() {
        let draft = FlashcardDraft::new("a", "b");
        let value = serde_json::to_value(&draft).unwrap();
        assert!(value.get("topic").is_none());
    }
}
