//! Converts simplified Chinese text to traditional Chinese with a dictionary-derived mapping.

pub mod converter;
pub mod mapping;

pub use converter::Converter;
pub use mapping::Mapping;

pub fn is_hanzi(c: char) -> bool {
    // Unicode CJK Unified Ideographs
    ('\u{4E00}'..='\u{9FFF}').contains(&c)
}

/// Checks whether the text contains at least one hanzi.
/// Used to skip text like pinyin or punctuation that conversion would leave untouched anyway.
pub fn contains_hanzi(text: &str) -> bool {
    text.chars().any(is_hanzi)
}

pub fn hanzi_from_text(text: &str) -> impl Iterator<Item = &str> {
    text.char_indices()
        .filter(|(_, c)| crate::is_hanzi(*c))
        .map(|(i, c)| &text[i..i + c.len_utf8()])
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn recognises_hanzi() {
        assert!(!is_hanzi('n'));
        assert!(!is_hanzi('。'));
        assert!(!is_hanzi('え'));
        assert!(is_hanzi('一'));
        assert!(is_hanzi('国'));
        assert!(is_hanzi('\u{9FFF}'));
        assert!(!is_hanzi('\u{A000}'));
    }

    #[test]
    fn detects_hanzi_in_text() {
        assert!(contains_hanzi("我是学生"));
        assert!(contains_hanzi("A + 的 + B"));
        assert!(!contains_hanzi("nǐ hǎo"));
        assert!(!contains_hanzi("？！"));
        assert!(!contains_hanzi(""));
    }

    #[test]
    fn extracts_hanzi() {
        let hanzi = hanzi_from_text("Subj + 把 + Obj").collect::<Vec<_>>();
        assert_eq!(hanzi, &["把"]);
    }
}
