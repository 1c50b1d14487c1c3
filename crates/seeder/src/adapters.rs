//! Source-shape adapters for translation data.
//!
//! Translation tables are authored in three shapes:
//!
//! - flat: `"group.key" => [(locale, value), ...]`
//! - nested: `group => locale => [(key, value), ...]`
//! - rows: `{ group, key, locale, value }`
//!
//! Every shape is turned into [`TranslationRecord`]s here, before any database
//! call, so the loader only ever sees one record type.

use std::collections::{BTreeMap, HashMap};

use serde::Deserialize;

use crate::{ResultSeed, SeedError, loader::key_part};

/// One localized string, keyed by (`locale`, `group`, `key`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TranslationRecord {
    pub locale: String,
    pub group: String,
    pub key: String,
    pub value: String,
}

impl TranslationRecord {
    pub fn new(locale: &str, group: &str, key: &str, value: &str) -> ResultSeed<Self> {
        Ok(Self {
            locale: key_part("locale", locale)?,
            group: key_part("group", group)?,
            key: key_part("key", key)?,
            value: value.to_string(),
        })
    }

    /// `group.key`, the form the UI asks for.
    pub fn dotted(&self) -> String {
        format!("{}.{}", self.group, self.key)
    }
}

/// What to do when one source defines the same translation twice.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicatePolicy {
    /// Reject the source.
    #[default]
    Fail,
    /// Log a warning and keep the later value.
    Warn,
}

/// `"group.key"` with its values per locale.
pub type FlatEntry<'a> = (&'a str, &'a [(&'a str, &'a str)]);

/// A locale with its `(key, value)` pairs.
pub type LocaleTable<'a> = (&'a str, &'a [(&'a str, &'a str)]);

/// A group with its per-locale tables.
pub type GroupTable<'a> = (&'a str, &'a [LocaleTable<'a>]);

#[derive(Clone, Copy, Debug)]
pub struct TranslationRow<'a> {
    pub group: &'a str,
    pub key: &'a str,
    pub locale: &'a str,
    pub value: &'a str,
}

/// Split `group.key` on the first dot.
pub fn split_dotted(full_key: &str) -> ResultSeed<(String, String)> {
    let Some((group, key)) = full_key.split_once('.') else {
        return Err(SeedError::Constraint(format!(
            "translation key \"{full_key}\" has no group prefix"
        )));
    };
    Ok((key_part("group", group)?, key_part("key", key)?))
}

pub fn from_flat(entries: &[FlatEntry<'_>]) -> ResultSeed<Vec<TranslationRecord>> {
    let mut records = Vec::new();
    for (full_key, values) in entries {
        let (group, key) = split_dotted(full_key)?;
        for (locale, value) in values.iter() {
            records.push(TranslationRecord {
                locale: key_part("locale", locale)?,
                group: group.clone(),
                key: key.clone(),
                value: value.to_string(),
            });
        }
    }
    Ok(records)
}

pub fn from_nested(groups: &[GroupTable<'_>]) -> ResultSeed<Vec<TranslationRecord>> {
    let mut records = Vec::new();
    for (group, locales) in groups {
        for (locale, pairs) in locales.iter() {
            for (key, value) in pairs.iter() {
                records.push(TranslationRecord::new(locale, group, key, value)?);
            }
        }
    }
    Ok(records)
}

pub fn from_rows(rows: &[TranslationRow<'_>]) -> ResultSeed<Vec<TranslationRecord>> {
    rows.iter()
        .map(|row| TranslationRecord::new(row.locale, row.group, row.key, row.value))
        .collect()
}

/// Parse a JSON document in the nested shape.
///
/// `{ "group": { "locale": { "key": "value" } } }`
pub fn from_json(source: &str, origin: &str) -> ResultSeed<Vec<TranslationRecord>> {
    let document: BTreeMap<String, BTreeMap<String, BTreeMap<String, String>>> =
        serde_json::from_str(source)
            .map_err(|err| SeedError::Source(format!("{origin}: {err}")))?;

    let mut records = Vec::new();
    for (group, locales) in &document {
        for (locale, pairs) in locales {
            for (key, value) in pairs {
                records.push(TranslationRecord::new(locale, group, key, value)?);
            }
        }
    }
    Ok(records)
}

/// Enforce one record per (`locale`, `group`, `key`) within a source.
///
/// Under [`DuplicatePolicy::Warn`] the later value replaces the earlier one in
/// place, so the record keeps its first position.
pub fn dedupe(
    records: Vec<TranslationRecord>,
    policy: DuplicatePolicy,
) -> ResultSeed<Vec<TranslationRecord>> {
    let mut positions: HashMap<(String, String, String), usize> = HashMap::new();
    let mut unique: Vec<TranslationRecord> = Vec::with_capacity(records.len());

    for record in records {
        let natural_key = (
            record.locale.clone(),
            record.group.clone(),
            record.key.clone(),
        );
        match positions.get(&natural_key) {
            None => {
                positions.insert(natural_key, unique.len());
                unique.push(record);
            }
            Some(&index) => match policy {
                DuplicatePolicy::Fail => {
                    return Err(SeedError::Constraint(format!(
                        "duplicate translation \"{}\" for locale \"{}\"",
                        record.dotted(),
                        record.locale
                    )));
                }
                DuplicatePolicy::Warn => {
                    tracing::warn!(
                        locale = %record.locale,
                        key = %record.dotted(),
                        previous = %unique[index].value,
                        value = %record.value,
                        "duplicate translation in source, keeping the later value"
                    );
                    unique[index] = record;
                }
            },
        }
    }

    Ok(unique)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FLAT: &[FlatEntry<'static>] = &[
        ("accounting.title", &[("vi", "Kế Toán"), ("en", "Accounting")]),
        ("accounting.balance", &[("vi", "Số Dư"), ("en", "Balance")]),
    ];

    const NESTED: &[GroupTable<'static>] = &[(
        "common",
        &[
            ("en", &[("save", "Save"), ("cancel", "Cancel")]),
            ("vi", &[("save", "Lưu"), ("cancel", "Hủy")]),
        ],
    )];

    const ROWS: &[TranslationRow<'static>] = &[TranslationRow {
        group: "errors",
        key: "not_found",
        locale: "en",
        value: "Not found",
    }];

    #[test]
    fn flat_keys_split_on_first_dot() {
        let records = from_flat(FLAT).unwrap();
        assert_eq!(records.len(), 4);
        assert_eq!(
            records[0],
            TranslationRecord {
                locale: "vi".to_string(),
                group: "accounting".to_string(),
                key: "title".to_string(),
                value: "Kế Toán".to_string(),
            }
        );

        let (group, key) = split_dotted("zalo.messages.sent").unwrap();
        assert_eq!(group, "zalo");
        assert_eq!(key, "messages.sent");
    }

    #[test]
    fn flat_key_without_group_is_rejected() {
        let entries: &[FlatEntry<'_>] = &[("title", &[("en", "Title")])];
        assert_eq!(
            from_flat(entries).unwrap_err(),
            SeedError::Constraint("translation key \"title\" has no group prefix".to_string())
        );

        let entries: &[FlatEntry<'_>] = &[("accounting.", &[("en", "Title")])];
        assert_eq!(
            from_flat(entries).unwrap_err(),
            SeedError::Constraint("key must not be empty".to_string())
        );
    }

    #[test]
    fn nested_and_rows_produce_the_same_record_shape() {
        let nested = from_nested(NESTED).unwrap();
        assert_eq!(nested.len(), 4);
        assert!(nested.contains(&TranslationRecord::new("vi", "common", "save", "Lưu").unwrap()));

        let rows = from_rows(ROWS).unwrap();
        assert_eq!(
            rows,
            vec![TranslationRecord::new("en", "errors", "not_found", "Not found").unwrap()]
        );
    }

    #[test]
    fn json_documents_use_the_nested_shape() {
        let source = r#"{
            "vocabulary": {
                "en": { "title": "Vocabulary", "word": "Word" },
                "vi": { "title": "Từ vựng", "word": "Từ" }
            }
        }"#;
        let records = from_json(source, "vocabulary.json").unwrap();
        assert_eq!(records.len(), 4);
        assert!(
            records.contains(&TranslationRecord::new("vi", "vocabulary", "title", "Từ vựng").unwrap())
        );
    }

    #[test]
    fn malformed_json_names_its_origin() {
        let err = from_json("{ not json", "broken.json").unwrap_err();
        assert!(matches!(err, SeedError::Source(message) if message.starts_with("broken.json:")));
    }

    #[test]
    fn duplicates_fail_by_default() {
        let entries: &[FlatEntry<'_>] = &[
            ("accounting.draft", &[("en", "Draft")]),
            ("accounting.all_types", &[("en", "All types")]),
            ("accounting.draft", &[("en", "Draft copy")]),
        ];
        let records = from_flat(entries).unwrap();
        assert_eq!(
            dedupe(records, DuplicatePolicy::Fail).unwrap_err(),
            SeedError::Constraint(
                "duplicate translation \"accounting.draft\" for locale \"en\"".to_string()
            )
        );
    }

    #[test]
    fn warn_policy_keeps_the_later_value_in_place() {
        let entries: &[FlatEntry<'_>] = &[
            ("accounting.draft", &[("en", "Draft")]),
            ("accounting.all_types", &[("en", "All types")]),
            ("accounting.draft", &[("en", "Draft copy")]),
        ];
        let records = dedupe(from_flat(entries).unwrap(), DuplicatePolicy::Warn).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].key, "draft");
        assert_eq!(records[0].value, "Draft copy");
    }

    #[test]
    fn same_key_in_another_locale_is_not_a_duplicate() {
        let records = dedupe(from_nested(NESTED).unwrap(), DuplicatePolicy::Fail).unwrap();
        assert_eq!(records.len(), 4);
    }
}
