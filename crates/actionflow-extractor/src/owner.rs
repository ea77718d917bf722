//! Owner detection

/// Find the owner of a sentence.
///
/// Names are tried in table order and the first one contained in the sentence
/// wins, wherever it appears in the text. Matching is a case-sensitive
/// substring test.
pub(crate) fn detect_owner<'a>(sentence: &str, names: &'a [String]) -> Option<&'a str> {
    names
        .iter()
        .map(String::as_str)
        .find(|name| sentence.contains(name))
}
