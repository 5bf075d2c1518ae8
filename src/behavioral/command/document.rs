//! In-memory character buffer mutated exclusively through its own operations.
//!
//! All positions and ranges are character indices, not byte offsets. An
//! out-of-range index is a programming error and panics; nothing in this
//! module catches it.

/// Mutable text buffer for one editing session.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Document {
    content: String,
}

impl Document {
    pub fn new() -> Self {
        Self {
            content: String::new(),
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Length in characters.
    pub fn len(&self) -> usize {
        self.content.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Splices `text` into the buffer at `position`.
    ///
    /// # Panics
    ///
    /// Panics if `position > len()`.
    pub fn insert_at(&mut self, position: usize, text: &str) {
        let at = self.byte_offset(position);
        self.content.insert_str(at, text);
    }

    /// Removes the characters in `[start, end)`.
    ///
    /// # Panics
    ///
    /// Panics if `start > end` or `end > len()`.
    pub fn delete_range(&mut self, start: usize, end: usize) {
        assert!(
            start <= end,
            "invalid range: start {start} is past end {end}"
        );
        let from = self.byte_offset(start);
        let to = self.byte_offset(end);
        self.content.replace_range(from..to, "");
    }

    /// Returns a copy of the characters in `[start, end)` without mutating.
    ///
    /// # Panics
    ///
    /// Panics if `start > end` or `end > len()`.
    pub fn slice(&self, start: usize, end: usize) -> String {
        assert!(
            start <= end,
            "invalid range: start {start} is past end {end}"
        );
        let from = self.byte_offset(start);
        let to = self.byte_offset(end);
        self.content[from..to].to_string()
    }

    /// Replaces every non-overlapping occurrence of `from` with `to` in a
    /// single left-to-right pass. Replaced text is never rescanned. Returns
    /// the number of replacements; zero when `from` is absent or empty.
    pub fn replace_all(&mut self, from: &str, to: &str) -> usize {
        if from.is_empty() {
            return 0;
        }
        let count = self.content.matches(from).count();
        if count > 0 {
            self.content = self.content.replace(from, to);
        }
        count
    }

    /// Empties the buffer.
    pub fn clear(&mut self) {
        self.content.clear();
    }

    /// Maps a character position to its byte offset, panicking past the end.
    fn byte_offset(&self, position: usize) -> usize {
        if position == 0 {
            return 0;
        }
        self.content
            .char_indices()
            .map(|(at, _)| at)
            .chain(std::iter::once(self.content.len()))
            .nth(position)
            .unwrap_or_else(|| {
                panic!(
                    "position {position} out of range for document of length {}",
                    self.len()
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_at_start_middle_end() {
        let mut doc = Document::new();
        doc.insert_at(0, "World");
        doc.insert_at(0, "Hello ");
        doc.insert_at(doc.len(), "!");
        assert_eq!(doc.content(), "Hello World!");
    }

    #[test]
    fn test_delete_range_shrinks_buffer() {
        let mut doc = Document::new();
        doc.insert_at(0, "Hello World");
        doc.delete_range(5, 11);
        assert_eq!(doc.content(), "Hello");
        assert_eq!(doc.len(), 5);
    }

    #[test]
    fn test_delete_empty_range_is_noop() {
        let mut doc = Document::new();
        doc.insert_at(0, "abc");
        doc.delete_range(1, 1);
        assert_eq!(doc.content(), "abc");
    }

    #[test]
    fn test_slice_reads_without_mutation() {
        let mut doc = Document::new();
        doc.insert_at(0, "Hello World");
        assert_eq!(doc.slice(6, 11), "World");
        assert_eq!(doc.content(), "Hello World");
    }

    #[test]
    fn test_replace_all_single_pass() {
        let mut doc = Document::new();
        doc.insert_at(0, "aaa");
        // "aa" matches once at 0; the trailing 'a' does not combine with
        // replacement output to form another match.
        assert_eq!(doc.replace_all("aa", "b"), 1);
        assert_eq!(doc.content(), "ba");
    }

    #[test]
    fn test_replace_all_absent_needle() {
        let mut doc = Document::new();
        doc.insert_at(0, "Hello");
        assert_eq!(doc.replace_all("xyz", "abc"), 0);
        assert_eq!(doc.content(), "Hello");
    }

    #[test]
    fn test_replace_all_empty_needle() {
        let mut doc = Document::new();
        doc.insert_at(0, "Hello");
        assert_eq!(doc.replace_all("", "x"), 0);
        assert_eq!(doc.content(), "Hello");
    }

    #[test]
    fn test_positions_are_character_indices() {
        let mut doc = Document::new();
        doc.insert_at(0, "héllo");
        assert_eq!(doc.len(), 5);
        doc.insert_at(2, "X");
        assert_eq!(doc.content(), "héXllo");
        assert_eq!(doc.slice(1, 3), "éX");
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_insert_past_end_panics() {
        let mut doc = Document::new();
        doc.insert_at(1, "x");
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_delete_past_end_panics() {
        let mut doc = Document::new();
        doc.insert_at(0, "ab");
        doc.delete_range(0, 3);
    }

    #[test]
    #[should_panic(expected = "past end")]
    fn test_inverted_range_panics() {
        let mut doc = Document::new();
        doc.insert_at(0, "abcd");
        doc.delete_range(3, 1);
    }
}
