//! Form field entity and its edit buffer.

/// A labeled form field.
///
/// `value` always holds the real characters, including for hidden fields;
/// masking happens only when the field is rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub label: String,
    pub value: String,
    pub multiline: bool,
    pub hidden: bool,
    pub default_value: String,
}

impl Field {
    /// Create a single-line field
    pub fn single(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: String::new(),
            multiline: false,
            hidden: false,
            default_value: String::new(),
        }
    }

    /// Create a multi-line field; Enter inserts a newline into it
    pub fn multiline(label: impl Into<String>) -> Self {
        Self {
            multiline: true,
            ..Self::single(label)
        }
    }

    /// Create a single-line field rendered with the mask glyph
    pub fn hidden(label: impl Into<String>) -> Self {
        Self {
            hidden: true,
            ..Self::single(label)
        }
    }

    /// Set the initial buffer contents
    pub fn with_default(mut self, value: impl Into<String>) -> Self {
        self.default_value = value.into();
        self.value = self.default_value.clone();
        self
    }

    /// Append a character to the buffer
    pub fn push(&mut self, c: char) {
        self.value.push(c);
    }

    /// Remove the last character; no-op on an empty buffer
    pub fn backspace(&mut self) {
        self.value.pop();
    }

    /// Restore the initial buffer contents
    pub fn reset(&mut self) {
        self.value = self.default_value.clone();
    }

    /// Number of characters in the buffer
    pub fn char_len(&self) -> usize {
        self.value.chars().count()
    }

    /// Text shown on screen: the buffer, or one mask glyph per character
    pub fn display_value(&self, mask: char) -> String {
        if self.hidden {
            std::iter::repeat(mask).take(self.char_len()).collect()
        } else {
            self.value.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edit_buffer() {
        let mut field = Field::single("Username");
        field.push('a');
        field.push('b');
        assert_eq!(field.value, "ab");

        field.backspace();
        field.backspace();
        assert_eq!(field.value, "");

        // Empty buffer stays empty
        field.backspace();
        assert_eq!(field.value, "");
    }

    #[test]
    fn test_hidden_field_masks_only_on_display() {
        let mut field = Field::hidden("Password");
        for c in "hunter2".chars() {
            field.push(c);
        }
        assert_eq!(field.value, "hunter2");
        assert_eq!(field.display_value('*'), "*******");

        field.push('!');
        assert_eq!(field.char_len(), 8);
        assert_eq!(field.display_value('*').chars().count(), 8);
    }

    #[test]
    fn test_default_value_is_editable() {
        let mut field = Field::single("Country").with_default("US");
        assert_eq!(field.value, "US");
        field.backspace();
        field.push('K');
        assert_eq!(field.value, "UK");
        field.reset();
        assert_eq!(field.value, "US");
    }
}
