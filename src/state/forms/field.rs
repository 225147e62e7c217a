//! Form field value objects

/// Single-line text input with its label
#[derive(Debug, Clone)]
pub struct FormField {
    pub label: String,
    pub value: String,
}

impl FormField {
    /// Create a new empty field
    pub fn new(label: &str) -> Self {
        Self {
            label: label.to_string(),
            value: String::new(),
        }
    }

    pub fn as_text(&self) -> &str {
        &self.value
    }

    pub fn push_char(&mut self, c: char) {
        self.value.push(c);
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        self.value.pop();
    }
}
