//! Whole-application backup: every namespace bundled into one JSON
//! document, and restored from one.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::BackupError;
use crate::models::{Board, Tag};
use crate::repo::{codec, Namespace, Storage};

/// Namespaces that are always present in an export, as `[]` when empty.
const REQUIRED: [Namespace; 2] = [Namespace::Notes, Namespace::NoteTags];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportSummary {
    /// Backup fields that were written, in namespace order.
    pub imported: Vec<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageUsage {
    pub total_bytes: usize,
    pub namespaces: Vec<NamespaceUsage>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NamespaceUsage {
    pub field: &'static str,
    pub bytes: usize,
}

pub fn export(storage: &dyn Storage, now: DateTime<Utc>) -> Value {
    let mut document = Map::new();

    for namespace in Namespace::ALL {
        let Some(raw) = storage.load(namespace.key()) else {
            continue;
        };
        let value = if namespace.is_raw() {
            Value::String(raw)
        } else {
            match codec::decode::<Value>(&raw) {
                Ok(value) => value,
                Err(e) => {
                    tracing::warn!(
                        key = namespace.key(),
                        error = %e,
                        "skipping unreadable namespace in export"
                    );
                    continue;
                }
            }
        };
        document.insert(namespace.backup_field().to_string(), value);
    }

    for namespace in REQUIRED {
        document
            .entry(namespace.backup_field())
            .or_insert_with(|| Value::Array(Vec::new()));
    }

    document.insert(
        "exportDate".to_string(),
        Value::String(now.to_rfc3339_opts(SecondsFormat::Millis, true)),
    );
    Value::Object(document)
}

/// Restores a backup document.
///
/// `notes` and `tags` must be present. Kanban fields are decoded before
/// anything is written, so a backup the store could not load is rejected
/// whole. Namespaces absent from the document are left as they are.
pub fn import(storage: &dyn Storage, raw: &str) -> Result<ImportSummary, BackupError> {
    let document: Value = codec::decode(raw)?;
    let Value::Object(fields) = document else {
        return Err(BackupError::NotAnObject);
    };

    for namespace in REQUIRED {
        let field = namespace.backup_field();
        if fields.get(field).map_or(true, Value::is_null) {
            return Err(BackupError::MissingField(field));
        }
    }

    let mut writes = Vec::new();
    for namespace in Namespace::ALL {
        let field = namespace.backup_field();
        let Some(value) = fields.get(field).filter(|value| !value.is_null()) else {
            continue;
        };
        writes.push((namespace, encode_field(namespace, value)?));
    }

    let mut summary = ImportSummary::default();
    for (namespace, value) in writes {
        storage.save(namespace.key(), &value);
        summary.imported.push(namespace.backup_field());
    }

    tracing::info!(fields = ?summary.imported, "imported backup");
    Ok(summary)
}

fn encode_field(namespace: Namespace, value: &Value) -> Result<String, BackupError> {
    let field = namespace.backup_field();
    let malformed = move |source| BackupError::MalformedField { field, source };

    match namespace {
        Namespace::KanbanBoards => {
            Vec::<Board>::deserialize(value).map_err(malformed)?;
        }
        Namespace::KanbanTags => {
            Vec::<Tag>::deserialize(value).map_err(malformed)?;
        }
        _ => {}
    }

    if namespace.is_raw() {
        return value
            .as_str()
            .map(str::to_string)
            .ok_or(BackupError::NotAString(field));
    }
    codec::encode(value).map_err(malformed)
}

/// Removes every data namespace. The theme is a display preference, not
/// data, and survives.
pub fn clear_all(storage: &dyn Storage) {
    for namespace in Namespace::ALL {
        if namespace != Namespace::Theme {
            storage.remove(namespace.key());
        }
    }
    tracing::info!("cleared all stored data");
}

pub fn storage_usage(storage: &dyn Storage) -> StorageUsage {
    let namespaces: Vec<NamespaceUsage> = Namespace::ALL
        .into_iter()
        .filter(|namespace| *namespace != Namespace::Theme)
        .map(|namespace| NamespaceUsage {
            field: namespace.backup_field(),
            bytes: storage.load(namespace.key()).map_or(0, |raw| raw.len()),
        })
        .collect();

    StorageUsage {
        total_bytes: namespaces.iter().map(|usage| usage.bytes).sum(),
        namespaces,
    }
}
