pub mod card;
pub mod library;
pub mod project;
pub mod snippet;

pub use card::{CARD_FIELDS, CardConfig};
pub use library::{LIBRARY_KEY, Library};
pub use project::{Project, ProjectData};
pub use snippet::{PerStrategy, Snippet, SnippetFolder};

/// Serde helpers for ids written by older tools as JSON numbers.
pub(crate) mod ids {
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(i64),
    }

    impl From<RawId> for String {
        fn from(raw: RawId) -> Self {
            match raw {
                RawId::Text(s) => s,
                RawId::Number(n) => n.to_string(),
            }
        }
    }

    pub fn string_or_number<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
        RawId::deserialize(d).map(String::from)
    }

    pub fn optional_string_or_number<'de, D: Deserializer<'de>>(
        d: D,
    ) -> Result<Option<String>, D::Error> {
        Option::<RawId>::deserialize(d).map(|o| o.map(String::from))
    }
}

/// Milliseconds since the Unix epoch.
pub(crate) fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

pub(crate) fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
