//! Catalog elements that could not be read as tickets.
//!
//! A bad element does not fail the whole load. It is kept here so the
//! status bar can count it and the log can name it.

/// An element of the `tickets` array that failed to deserialize.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedTicket {
    index: usize,
    error_message: String,
}

impl MalformedTicket {
    /// Create a new malformed ticket record.
    ///
    /// # Arguments
    ///
    /// * `index` - Position in the `tickets` array (0-based)
    /// * `error_message` - Human-readable deserialization error
    pub fn new(index: usize, error_message: impl Into<String>) -> Self {
        Self {
            index,
            error_message: error_message.into(),
        }
    }

    /// Position in the `tickets` array.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Deserialization error message.
    pub fn error_message(&self) -> &str {
        &self.error_message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_return_constructor_values() {
        let bad = MalformedTicket::new(4, "missing field `price`");
        assert_eq!(bad.index(), 4);
        assert_eq!(bad.error_message(), "missing field `price`");
    }
}
