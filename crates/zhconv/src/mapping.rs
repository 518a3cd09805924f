//! Contains Mapping, the simplified to traditional lookup table.

use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct Mapping {
    simplified_to_traditional: HashMap<String, String>,
    // length of the longest key in chars
    longest_key: usize,
}

impl Mapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an entry. A later entry for the same simplified form replaces the earlier one.
    pub fn insert(&mut self, simplified: String, traditional: String) {
        self.longest_key = self.longest_key.max(simplified.chars().count());
        self.simplified_to_traditional
            .insert(simplified, traditional);
    }

    pub fn get(&self, simplified: &str) -> Option<&str> {
        self.simplified_to_traditional
            .get(simplified)
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.simplified_to_traditional.len()
    }

    pub fn is_empty(&self) -> bool {
        self.simplified_to_traditional.is_empty()
    }

    /// The length in chars of the longest simplified form in the mapping.
    pub fn longest_key(&self) -> usize {
        self.longest_key
    }
}

impl<S, T> FromIterator<(S, T)> for Mapping
where
    S: Into<String>,
    T: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (S, T)>>(iter: I) -> Self {
        let mut mapping = Mapping::new();
        mapping.extend(iter);
        mapping
    }
}

impl<S, T> Extend<(S, T)> for Mapping
where
    S: Into<String>,
    T: Into<String>,
{
    fn extend<I: IntoIterator<Item = (S, T)>>(&mut self, iter: I) {
        for (simplified, traditional) in iter {
            self.insert(simplified.into(), traditional.into());
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn last_entry_wins() {
        let mapping = Mapping::from_iter([("后", "後"), ("后", "后")]);
        assert_eq!(mapping.len(), 1);
        assert_eq!(mapping.get("后"), Some("后"));
    }

    #[test]
    fn tracks_longest_key_in_chars() {
        let mut mapping = Mapping::new();
        assert_eq!(mapping.longest_key(), 0);
        mapping.insert("国".to_string(), "國".to_string());
        assert_eq!(mapping.longest_key(), 1);
        mapping.insert("一路顺风".to_string(), "一路順風".to_string());
        assert_eq!(mapping.longest_key(), 4);
        mapping.insert("学".to_string(), "學".to_string());
        assert_eq!(mapping.longest_key(), 4);
    }

    #[test]
    fn missing_key() {
        let mapping = Mapping::from_iter([("国", "國")]);
        assert_eq!(mapping.get("國"), None);
        assert!(!mapping.is_empty());
        assert!(Mapping::new().is_empty());
    }
}
