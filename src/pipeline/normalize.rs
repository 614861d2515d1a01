//! Text normalization and cell validation.
//!
//! Every piece of text that participates in tag identity goes through
//! [`normalize`] first; [`is_valid_tag`] decides whether a raw cell is
//! allowed to become a record at all.

/// Punctuation that, together with whitespace, makes a cell worthless as a
/// tag. Covers the Latin forms and their full-width CJK variants.
const FILLER_PUNCTUATION: &[char] = &[
    '.', ',', ';', ':', '!', '?', '，', '。', '；', '：', '！', '？',
];

/// Trim leading/trailing whitespace and collapse interior whitespace runs to
/// a single ASCII space. Pure; absent input is represented by `""`.
#[must_use]
pub fn normalize(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Whether a cell value is usable as a tag.
///
/// Empty cells and cells consisting entirely of whitespace and filler
/// punctuation (e.g. `"???"`, `"。。"`) are rejected.
#[must_use]
pub fn is_valid_tag(text: &str) -> bool {
    !text.is_empty()
        && !text
            .chars()
            .all(|c| c.is_whitespace() || FILLER_PUNCTUATION.contains(&c))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("  hand  ", "hand")]
    #[case("long\t\thair", "long hair")]
    #[case("a  b\nc", "a b c")]
    #[case("科幻 城市", "科幻 城市")]
    #[case("", "")]
    #[case("   ", "")]
    fn normalize_trims_and_collapses(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(normalize(input), expected);
    }

    #[rstest]
    #[case("hand", true)]
    #[case("科幻", true)]
    #[case("sci-fi", true)]
    #[case("hand.", true)]
    #[case("", false)]
    #[case("   ", false)]
    #[case("???", false)]
    #[case(".,;:!?", false)]
    #[case("，。；：！？", false)]
    #[case(" . ， ", false)]
    fn is_valid_tag_rejects_filler(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(is_valid_tag(input), expected);
    }
}
