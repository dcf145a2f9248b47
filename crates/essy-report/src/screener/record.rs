use super::domain::{Diagnostic, Outcome};
use super::registry::FieldRegistry;
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// Raw value marking an item the rater did not answer.
pub const UNANSWERED_SENTINEL: &str = "-99";

#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    #[error("screener record must be a JSON object, found {0}")]
    NotAnObject(&'static str),
}

/// One completed screener (one child, one rater), keyed by registered field code.
///
/// Keys are resolved through the registry when the record is built; anything the registry
/// does not recognise is left out and reported.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ScreenerRecord {
    values: BTreeMap<&'static str, Option<String>>,
}

impl ScreenerRecord {
    pub fn from_pairs<I, K, V>(registry: &FieldRegistry, pairs: I) -> Outcome<Self>
    where
        I: IntoIterator<Item = (K, Option<V>)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut record = Self::default();
        let mut diagnostics = Vec::new();

        for (key, value) in pairs {
            let key = key.as_ref();
            let Some(code) = registry.canonical_code(key) else {
                diagnostics.push(Diagnostic::UnregisteredField {
                    code: key.trim().to_string(),
                });
                continue;
            };

            let value = value.map(Into::into);
            match record.values.get(code) {
                Some(existing) => {
                    diagnostics.push(Diagnostic::DuplicateField {
                        code: code.to_string(),
                        source_key: key.trim().to_string(),
                    });
                    if is_unanswered(existing.as_deref()) {
                        record.values.insert(code, value);
                    }
                }
                None => {
                    record.values.insert(code, value);
                }
            }
        }

        Outcome::new(record, diagnostics)
    }

    /// Builds a record from a flat JSON object. Numbers and booleans are kept as their text.
    pub fn from_json(
        registry: &FieldRegistry,
        value: &Value,
    ) -> Result<Outcome<Self>, RecordError> {
        let Value::Object(map) = value else {
            return Err(RecordError::NotAnObject(json_kind(value)));
        };

        let pairs = map.iter().map(|(key, value)| {
            let text = match value {
                Value::Null => None,
                Value::String(text) => Some(text.clone()),
                other => Some(other.to_string()),
            };
            (key.as_str(), text)
        });

        Ok(Self::from_pairs(registry, pairs))
    }

    /// Stored value exactly as supplied.
    pub fn raw(&self, code: &str) -> Option<&str> {
        self.values.get(code).and_then(|value| value.as_deref())
    }

    pub fn codes(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.values.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn is_unanswered(value: Option<&str>) -> bool {
    match value {
        None => true,
        Some(raw) => {
            let trimmed = raw.trim();
            trimmed.is_empty() || trimmed == UNANSWERED_SENTINEL
        }
    }
}

/// The single place that decides whether a field holds an answer.
#[derive(Debug, Clone, Copy)]
pub struct RecordAccessor<'a> {
    registry: &'a FieldRegistry,
}

impl<'a> RecordAccessor<'a> {
    pub fn new(registry: &'a FieldRegistry) -> Self {
        Self { registry }
    }

    /// Returns the raw answer, or `None` when the field is unanswered (`null`, blank, `-99`).
    /// Asking for a code the registry does not know records a diagnostic and yields `None`.
    pub fn get<'r>(
        &self,
        record: &'r ScreenerRecord,
        code: &str,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> Option<&'r str> {
        if !self.registry.is_registered(code) {
            diagnostics.push(Diagnostic::UnregisteredField {
                code: code.to_string(),
            });
            return None;
        }

        let raw = record.raw(code);
        if is_unanswered(raw) {
            return None;
        }
        raw
    }
}
