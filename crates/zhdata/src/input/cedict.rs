//! Models and parses the JSON conversion of CC-CEDICT.
//! See <https://www.mdbg.net/chinese/dictionary?page=cc-cedict>

use eyre::WrapErr;
use serde::{de::IgnoredAny, Deserialize};
use serde_json::{Map, Value};
use std::{fs::File, io::BufReader, path::Path};
use zhconv::Mapping;

pub type Cedict = Vec<MaybeEntry>;

/// Only the script forms are used, the other fields (pinyin, definitions...) are ignored.
/// Only deserializes from an object, and either form being something other than a string
/// makes the whole entry invalid.
#[derive(Debug, Clone, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct Entry {
    pub simplified: Option<String>,
    pub traditional: Option<String>,
}

impl TryFrom<Map<String, Value>> for Entry {
    type Error = String;

    fn try_from(mut object: Map<String, Value>) -> Result<Self, Self::Error> {
        Ok(Self {
            simplified: string_field(&mut object, "simplified")?,
            traditional: string_field(&mut object, "traditional")?,
        })
    }
}

fn string_field(object: &mut Map<String, Value>, field: &str) -> Result<Option<String>, String> {
    match object.remove(field) {
        None => Ok(None),
        Some(Value::String(value)) => Ok(Some(value)),
        Some(other) => Err(format!("expected '{field}' to be a string, found {other}")),
    }
}

/// Lets a single malformed entry be skipped instead of failing the whole file.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum MaybeEntry {
    Entry(Entry),
    Malformed(IgnoredAny),
}

impl MaybeEntry {
    fn into_pair(self) -> Option<(String, String)> {
        match self {
            Self::Entry(Entry {
                simplified: Some(simplified),
                traditional: Some(traditional),
            }) => Some((simplified, traditional)),
            _ => None,
        }
    }
}

/// Creates the simplified to traditional mapping from the entries.
/// Entries missing either form are skipped, and later entries override earlier ones.
pub fn into_mapping(cedict: Cedict) -> Mapping {
    cedict
        .into_iter()
        .filter_map(MaybeEntry::into_pair)
        .collect()
}

pub fn load(path: &Path) -> eyre::Result<Mapping> {
    tracing::info!("loading CEDICT from {}", path.display());
    let file = File::open(path)
        .wrap_err_with(|| format!("Failed to open file at '{}'", path.display()))?;
    let cedict: Cedict = serde_json::from_reader(BufReader::new(file))
        .wrap_err_with(|| format!("Failed to deserialize CEDICT at '{}'", path.display()))?;
    let entries = cedict.len();
    let mapping = into_mapping(cedict);
    tracing::info!(
        "loaded {} mappings from {entries} CEDICT entries",
        mapping.len()
    );
    Ok(mapping)
}

/// Loads the mapping, logging any error and returning an empty mapping instead.
/// The caller is expected to treat an empty mapping as a failure.
pub fn load_or_empty(path: &Path) -> Mapping {
    match load(path) {
        Ok(mapping) => mapping,
        Err(err) => {
            tracing::error!("Error loading CEDICT: {err:#}");
            Mapping::new()
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::io::Write;

    fn parse(json: &str) -> Mapping {
        into_mapping(serde_json::from_str(json).unwrap())
    }

    #[test]
    fn maps_simplified_to_traditional() {
        let mapping = parse(
            r#"[
                {"traditional": "國", "simplified": "国", "pinyin": "guo2", "definitions": ["country"]},
                {"traditional": "中國", "simplified": "中国", "pinyin": "Zhong1 guo2"}
            ]"#,
        );
        assert_eq!(mapping.len(), 2);
        assert_eq!(mapping.get("国"), Some("國"));
        assert_eq!(mapping.get("中国"), Some("中國"));
    }

    #[test]
    fn skips_incomplete_and_malformed_entries() {
        let mapping = parse(
            r#"[
                {"simplified": "国"},
                {"traditional": "國"},
                {"simplified": 1, "traditional": "一"},
                {"simplified": "一", "traditional": null},
                "国",
                null,
                [],
                ["国", "國"],
                ["国", "國", "guo2"],
                {"simplified": "学", "traditional": "學"}
            ]"#,
        );
        assert_eq!(mapping.len(), 1);
        assert_eq!(mapping.get("学"), Some("學"));
    }

    #[test]
    fn entry_must_be_an_object() {
        let entry = serde_json::from_str::<Entry>(r#"["国", "國"]"#);
        assert!(entry.is_err());
        let entry = serde_json::from_str::<Entry>(r#"{"simplified": "国", "traditional": "國"}"#)
            .unwrap();
        assert_eq!(entry.simplified.as_deref(), Some("国"));
        assert_eq!(entry.traditional.as_deref(), Some("國"));
    }

    #[test]
    fn later_entries_override() {
        let mapping = parse(
            r#"[
                {"simplified": "干", "traditional": "乾"},
                {"simplified": "干", "traditional": "幹"}
            ]"#,
        );
        assert_eq!(mapping.get("干"), Some("幹"));
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"simplified": "国", "traditional": "國"}}]"#).unwrap();
        let mapping = load(file.path()).unwrap();
        assert_eq!(mapping.get("国"), Some("國"));
    }

    #[test]
    fn missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let mapping = load_or_empty(&dir.path().join("cedict.json"));
        assert!(mapping.is_empty());
    }

    #[test]
    fn non_array_is_empty() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"simplified": "国", "traditional": "國"}}"#).unwrap();
        assert!(load(file.path()).is_err());
        assert!(load_or_empty(file.path()).is_empty());
    }
}
