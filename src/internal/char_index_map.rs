use log::debug;

/// Translation table from logical character indices to byte offsets.
///
/// For input consisting only of single-byte characters the table is not allocated and every
/// character index is its own byte offset. Otherwise the table holds the starting byte offset of
/// each character, followed by one trailing entry with the byte length of the input, so that
/// the end of the last character is addressable as well.
#[derive(Debug, Clone, Default)]
pub(crate) struct CharIndexMap {
    char_count: usize,
    byte_len: usize,
    // Empty in identity mode.
    offsets: Vec<usize>,
}

impl CharIndexMap {
    pub(crate) fn new(source: &str) -> Self {
        let char_count = source.chars().count();
        let byte_len = source.len();
        let offsets = if char_count == byte_len {
            Vec::new()
        } else {
            let mut offsets = Vec::with_capacity(char_count + 1);
            let mut offset = 0;
            for c in source.chars() {
                offsets.push(offset);
                offset += c.len_utf8();
            }
            offsets.push(offset);
            offsets
        };
        debug!(
            "Index map: {} chars, {} bytes, multi-byte: {}",
            char_count,
            byte_len,
            !offsets.is_empty()
        );
        Self {
            char_count,
            byte_len,
            offsets,
        }
    }

    #[inline]
    pub(crate) fn char_count(&self) -> usize {
        self.char_count
    }

    #[inline]
    pub(crate) fn is_multi_byte(&self) -> bool {
        !self.offsets.is_empty()
    }

    /// Byte offset of the character at `index`. Indices at or past the end map to the byte
    /// length of the input.
    #[inline]
    pub(crate) fn byte_offset(&self, index: usize) -> usize {
        if index >= self.char_count {
            self.byte_len
        } else if self.offsets.is_empty() {
            index
        } else {
            self.offsets[index]
        }
    }

    /// Logical length of `text`.
    ///
    /// Must only be used for text taken from the mapped input when the map is in identity mode,
    /// because then the byte length is returned unchecked.
    #[inline]
    pub(crate) fn char_length(&self, text: &str) -> usize {
        if self.offsets.is_empty() {
            text.len()
        } else {
            text.chars().count()
        }
    }
}
