//! Persisted ids.
//!
//! New ids are random UUIDs. Older data also carries short ids such as the
//! `"1"`, `"2"`, `"3"` of the first seeded columns; those map to a
//! name-based UUID, so the same legacy id always resolves to the same value
//! and references between records stay intact.

use serde::{Deserialize, Deserializer};
use uuid::Uuid;

const LEGACY_NAMESPACE: Uuid = Uuid::from_u128(0x5f1c_2a8e_93b4_4d07_a6e2_7c41_d9b0_3e58);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(i64),
}

impl RawId {
    fn resolve(self) -> Uuid {
        match self {
            RawId::Text(text) => parse_id(&text),
            RawId::Number(number) => parse_id(&number.to_string()),
        }
    }
}

/// A UUID as-is, anything else mapped into the legacy namespace.
pub fn parse_id(raw: &str) -> Uuid {
    let raw = raw.trim();
    Uuid::parse_str(raw).unwrap_or_else(|_| Uuid::new_v5(&LEGACY_NAMESPACE, raw.as_bytes()))
}

pub(crate) fn deserialize<'de, D>(deserializer: D) -> Result<Uuid, D::Error>
where
    D: Deserializer<'de>,
{
    RawId::deserialize(deserializer).map(RawId::resolve)
}

pub(crate) fn deserialize_vec<'de, D>(deserializer: D) -> Result<Vec<Uuid>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Vec::<RawId>::deserialize(deserializer)?;
    Ok(raw.into_iter().map(RawId::resolve).collect())
}
