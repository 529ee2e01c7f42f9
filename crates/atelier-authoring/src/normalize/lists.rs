//! List and paragraph normalization.

use crate::input::{ListInput, TextBlockInput};

/// Normalize a tag-style list field to a trimmed, empty-filtered sequence.
///
/// Both input forms preserve relative order, and duplicates are kept.
pub fn normalize_string_list(input: &ListInput) -> Vec<String> {
    match input {
        ListInput::Joined(joined) => collect_trimmed(joined.split(',')),
        ListInput::Items(items) => collect_trimmed(items.iter().map(String::as_str)),
    }
}

/// Normalize a free-text block or paragraph array to an ordered sequence of
/// trimmed, non-empty paragraph strings.
pub fn normalize_paragraphs(input: &TextBlockInput) -> Vec<String> {
    match input {
        TextBlockInput::Block(block) => collect_trimmed(block.lines()),
        TextBlockInput::Paragraphs(paragraphs) => {
            collect_trimmed(paragraphs.iter().map(String::as_str))
        }
    }
}

fn collect_trimmed<'a>(parts: impl Iterator<Item = &'a str>) -> Vec<String> {
    parts
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joined_list_splits_and_trims() {
        let tags = normalize_string_list(&ListInput::Joined("a, b ,c".to_string()));
        assert_eq!(tags, vec!["a", "b", "c"]);
    }

    #[test]
    fn item_list_drops_blanks_but_keeps_duplicates() {
        let input = ListInput::Items(vec![
            "a".to_string(),
            "".to_string(),
            "b".to_string(),
            "a".to_string(),
        ]);
        assert_eq!(normalize_string_list(&input), vec!["a", "b", "a"]);
    }

    #[test]
    fn block_splits_on_line_breaks() {
        let input = TextBlockInput::Block("First paragraph.\n\n  Second.  \r\nThird.".to_string());
        assert_eq!(
            normalize_paragraphs(&input),
            vec!["First paragraph.", "Second.", "Third."]
        );
    }
}
