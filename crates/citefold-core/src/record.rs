use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::Result;

/// One bibliographic citation as delivered by a provider connector.
///
/// Every field is optional except `title`, which may still be empty. Provider
/// payloads are heterogeneous, so deserialization is lenient: absent or
/// `null` fields become empty, and non-text scalars (a numeric `year`, say)
/// are coerced to their text representation instead of failing the whole
/// batch. Unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Record {
    #[serde(default, deserialize_with = "lenient_text")]
    pub title: String,

    /// Provider-supplied author order is preserved.
    #[serde(
        default,
        deserialize_with = "lenient_text_list",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub authors: Vec<String>,

    #[serde(
        default,
        deserialize_with = "lenient_opt_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub doi: Option<String>,

    #[serde(
        default,
        deserialize_with = "lenient_opt_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub journal: Option<String>,

    #[serde(
        default,
        deserialize_with = "lenient_opt_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub year: Option<String>,

    #[serde(
        default,
        deserialize_with = "lenient_opt_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub url: Option<String>,

    #[serde(
        rename = "abstract",
        default,
        deserialize_with = "lenient_opt_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub abstract_text: Option<String>,

    #[serde(
        default,
        deserialize_with = "lenient_opt_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub source: Option<String>,
}

impl Record {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    /// True if the record carries a usable (non-blank) DOI.
    pub fn has_doi(&self) -> bool {
        !is_blank(self.doi.as_deref())
    }

    /// Count of non-empty fields, used by the `most_complete` keep
    /// preference and as the `prefer_doi` tie-break.
    pub fn completeness(&self) -> usize {
        let mut score = 0usize;

        if !self.title.trim().is_empty() {
            score += 1;
        }
        if self.authors.iter().any(|a| !a.trim().is_empty()) {
            score += 1;
        }
        for field in [
            self.doi.as_deref(),
            self.journal.as_deref(),
            self.year.as_deref(),
            self.url.as_deref(),
            self.abstract_text.as_deref(),
            self.source.as_deref(),
        ] {
            if !is_blank(field) {
                score += 1;
            }
        }

        score
    }

    /// Back-fill every empty field from `other`. Fields already carrying a
    /// value are left alone, so across a duplicate group's history the first
    /// non-empty value wins.
    pub fn fill_missing_from(&mut self, other: &Record) {
        if self.title.trim().is_empty() && !other.title.trim().is_empty() {
            self.title = other.title.clone();
        }
        if self.authors.is_empty() && !other.authors.is_empty() {
            self.authors = other.authors.clone();
        }
        fill_opt(&mut self.doi, &other.doi);
        fill_opt(&mut self.journal, &other.journal);
        fill_opt(&mut self.year, &other.year);
        fill_opt(&mut self.url, &other.url);
        fill_opt(&mut self.abstract_text, &other.abstract_text);
        fill_opt(&mut self.source, &other.source);
    }
}

/// Parse the connector boundary format: an ordered JSON array of field-keyed
/// records.
pub fn records_from_json(input: &str) -> Result<Vec<Record>> {
    Ok(serde_json::from_str(input)?)
}

fn is_blank(field: Option<&str>) -> bool {
    field.map(str::trim).unwrap_or_default().is_empty()
}

fn fill_opt(target: &mut Option<String>, incoming: &Option<String>) {
    if is_blank(target.as_deref()) && !is_blank(incoming.as_deref()) {
        *target = incoming.clone();
    }
}

fn coerce(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        // Arrays/objects in a text slot: keep the JSON text rather than fail.
        other => Some(other.to_string()),
    }
}

fn lenient_text<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(coerce(value).unwrap_or_default())
}

fn lenient_opt_text<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(coerce(value))
}

fn lenient_text_list<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Null => Vec::new(),
        Value::Array(items) => items.into_iter().filter_map(coerce).collect(),
        single => coerce(single).into_iter().collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_fields_deserialize_as_empty() {
        let record: Record = serde_json::from_str(r#"{"title": "Only a Title"}"#).unwrap();
        assert_eq!(record.title, "Only a Title");
        assert!(record.authors.is_empty());
        assert!(record.doi.is_none());
    }

    #[test]
    fn null_fields_deserialize_as_empty() {
        let record: Record =
            serde_json::from_str(r#"{"title": null, "doi": null, "authors": null}"#).unwrap();
        assert_eq!(record.title, "");
        assert!(record.doi.is_none());
        assert!(record.authors.is_empty());
    }

    #[test]
    fn numeric_year_is_coerced_to_text() {
        let record: Record =
            serde_json::from_str(r#"{"title": "T", "year": 2021}"#).unwrap();
        assert_eq!(record.year.as_deref(), Some("2021"));
    }

    #[test]
    fn non_text_author_entries_are_coerced() {
        let record: Record =
            serde_json::from_str(r#"{"title": "T", "authors": ["Smith J", 42]}"#).unwrap();
        assert_eq!(record.authors, vec!["Smith J".to_string(), "42".to_string()]);
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let record: Record =
            serde_json::from_str(r#"{"title": "T", "issn": "1234-5678"}"#).unwrap();
        assert_eq!(record.title, "T");
    }

    #[test]
    fn abstract_key_maps_to_abstract_text() {
        let record: Record =
            serde_json::from_str(r#"{"title": "T", "abstract": "Background..."}"#).unwrap();
        assert_eq!(record.abstract_text.as_deref(), Some("Background..."));
    }

    #[test]
    fn completeness_counts_non_empty_fields() {
        let mut record = Record::new("T");
        assert_eq!(record.completeness(), 1);

        record.authors = vec!["Smith J".to_string()];
        record.doi = Some("10.1000/x".to_string());
        record.year = Some("2020".to_string());
        assert_eq!(record.completeness(), 4);

        // Blank values do not count.
        record.journal = Some("   ".to_string());
        assert_eq!(record.completeness(), 4);
    }

    #[test]
    fn fill_missing_copies_only_empty_fields() {
        let mut target = Record::new("Kept Title");
        target.doi = Some("10.1/a".to_string());

        let mut other = Record::new("Other Title");
        other.doi = Some("10.1/b".to_string());
        other.journal = Some("Nature".to_string());
        other.authors = vec!["Lee C".to_string()];

        target.fill_missing_from(&other);

        assert_eq!(target.title, "Kept Title");
        assert_eq!(target.doi.as_deref(), Some("10.1/a"));
        assert_eq!(target.journal.as_deref(), Some("Nature"));
        assert_eq!(target.authors, vec!["Lee C".to_string()]);
    }

    #[test]
    fn records_from_json_parses_ordered_array() {
        let records = records_from_json(
            r#"[{"title": "A"}, {"title": "B", "year": 1999}]"#,
        )
        .unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].year.as_deref(), Some("1999"));
    }

    #[test]
    fn records_from_json_rejects_malformed_input() {
        assert!(records_from_json("{not json").is_err());
    }
}
