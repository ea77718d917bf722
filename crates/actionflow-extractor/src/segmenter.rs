//! Sentence segmentation

/// Splits notes into candidate sentences
///
/// Any run of `.`, `!`, `?` or newline characters is one boundary. Runs produce
/// empty pieces between adjacent delimiters, which the length filter drops, so
/// the result is the same as collapsing the run first.
#[derive(Debug, Clone, Copy)]
pub struct SentenceSegmenter {
    min_chars: usize,
}

impl SentenceSegmenter {
    /// Create a segmenter that keeps pieces longer than `min_chars` once trimmed
    pub fn new(min_chars: usize) -> Self {
        Self { min_chars }
    }

    /// Segment the given text
    ///
    /// Returned slices are untrimmed and keep their original case.
    pub fn segment<'a>(&self, text: &'a str) -> Vec<&'a str> {
        text.split(is_boundary)
            .filter(|piece| piece.trim().chars().count() > self.min_chars)
            .collect()
    }
}

fn is_boundary(c: char) -> bool {
    matches!(c, '.' | '!' | '?' | '\n')
}
