//! Adds traditional Chinese variants to the grammar patterns file.
//!
//! The patterns are handled as plain JSON so that every field this module doesn't know about
//! is written back exactly as it was read, in the same order.

use serde_json::{Map, Value};
use thiserror::Error;
use zhconv::{contains_hanzi, Converter};

pub type GrammarPatterns = Vec<Value>;

const CHINESE_TITLE: &str = "chineseTitle";
const TRADITIONAL_CHINESE_TITLE: &str = "traditionalChineseTitle";
const STRUCTURE: &str = "structure";
const TRADITIONAL_STRUCTURE: &str = "traditionalStructure";
const STRUCTURE_BREAKDOWN: &str = "structureBreakdown";
const EXAMPLES: &str = "examples";
const CHINESE_SENTENCE: &str = "chineseSentence";
const TRADITIONAL_CHINESE_SENTENCE: &str = "traditionalChineseSentence";
const BREAKDOWN_PARTS: &str = "breakdownParts";
const TEXT: &str = "text";
const TRADITIONAL_TEXT: &str = "traditionalText";

#[derive(Debug, Error)]
pub enum PatternError {
    #[error("pattern {pattern} is not an object")]
    PatternNotObject { pattern: usize },
    #[error("pattern {pattern}: an element of '{list}' is not an object")]
    ElementNotObject { pattern: usize, list: &'static str },
    #[error("pattern {pattern}: field '{field}' is not a string")]
    FieldNotString { pattern: usize, field: &'static str },
}

/// Decides when a chinese title gets a traditional variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TitleRule {
    /// Every title gets a traditional variant, even ones without any hanzi.
    #[default]
    Always,
    /// Titles only get a variant if they contain hanzi, like every other field.
    WhenHanzi,
}

impl TitleRule {
    pub fn applies_to(self, title: &Value) -> bool {
        match self {
            Self::Always => true,
            Self::WhenHanzi => title.as_str().is_some_and(contains_hanzi),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnrichmentReport {
    pub patterns: usize,
    pub fields_written: usize,
}

pub struct Enricher<'a> {
    converter: Converter<'a>,
    title_rule: TitleRule,
    fields_written: usize,
}

impl<'a> Enricher<'a> {
    pub fn new(converter: Converter<'a>, title_rule: TitleRule) -> Self {
        Self {
            converter,
            title_rule,
            fields_written: 0,
        }
    }

    /// Adds the traditional variants to every pattern in place.
    /// Existing variants are overwritten.
    pub fn enrich(
        mut self,
        patterns: &mut GrammarPatterns,
    ) -> Result<EnrichmentReport, PatternError> {
        let pattern_count = patterns.len();
        tracing::info!("found {pattern_count} grammar patterns to process");

        for (idx, pattern) in patterns.iter_mut().enumerate() {
            if idx % 10 == 0 {
                tracing::info!("processing pattern {}/{pattern_count}", idx + 1);
            }
            let pattern = pattern
                .as_object_mut()
                .ok_or(PatternError::PatternNotObject { pattern: idx })?;
            self.enrich_pattern(idx, pattern)?;
        }

        Ok(EnrichmentReport {
            patterns: pattern_count,
            fields_written: self.fields_written,
        })
    }

    fn enrich_pattern(
        &mut self,
        idx: usize,
        pattern: &mut Map<String, Value>,
    ) -> Result<(), PatternError> {
        let title_rule = self.title_rule;
        if pattern
            .get(CHINESE_TITLE)
            .is_some_and(|title| title_rule.applies_to(title))
        {
            self.add_variant(pattern, CHINESE_TITLE, TRADITIONAL_CHINESE_TITLE);
        }
        self.add_hanzi_variant(idx, pattern, STRUCTURE, TRADITIONAL_STRUCTURE)?;

        for part in objects_in(idx, pattern, STRUCTURE_BREAKDOWN)? {
            self.add_hanzi_variant(idx, part, TEXT, TRADITIONAL_TEXT)?;
        }

        for example in objects_in(idx, pattern, EXAMPLES)? {
            self.add_hanzi_variant(
                idx,
                example,
                CHINESE_SENTENCE,
                TRADITIONAL_CHINESE_SENTENCE,
            )?;
            for part in objects_in(idx, example, BREAKDOWN_PARTS)? {
                self.add_hanzi_variant(idx, part, TEXT, TRADITIONAL_TEXT)?;
            }
        }

        Ok(())
    }

    // adds the variant whenever the source field exists
    // values that aren't strings are copied over as is
    fn add_variant(&mut self, object: &mut Map<String, Value>, field: &str, variant_field: &str) {
        let Some(value) = object.get(field) else {
            return;
        };
        let variant = match value {
            Value::String(text) => Value::String(self.converter.convert(text)),
            other => other.clone(),
        };
        tracing::debug!("{variant_field}: {variant}");
        object.insert(variant_field.to_string(), variant);
        self.fields_written += 1;
    }

    // adds the variant only if the source field is a string containing hanzi
    fn add_hanzi_variant(
        &mut self,
        idx: usize,
        object: &mut Map<String, Value>,
        field: &'static str,
        variant_field: &str,
    ) -> Result<(), PatternError> {
        let Some(value) = object.get(field) else {
            return Ok(());
        };
        let text = value.as_str().ok_or(PatternError::FieldNotString {
            pattern: idx,
            field,
        })?;
        if contains_hanzi(text) {
            let traditional = self.converter.convert(text);
            tracing::debug!("{variant_field}: {traditional}");
            object.insert(variant_field.to_string(), Value::String(traditional));
            self.fields_written += 1;
        }
        Ok(())
    }
}

// the objects in the list at the given field, or nothing if there's no list
fn objects_in<'m>(
    idx: usize,
    object: &'m mut Map<String, Value>,
    list: &'static str,
) -> Result<Vec<&'m mut Map<String, Value>>, PatternError> {
    let Some(Value::Array(elements)) = object.get_mut(list) else {
        return Ok(Vec::new());
    };
    elements
        .iter_mut()
        .map(|element| {
            element
                .as_object_mut()
                .ok_or(PatternError::ElementNotObject { pattern: idx, list })
        })
        .collect()
}
