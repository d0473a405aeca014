//! Origin/destination text input (pure state transitions).
//!
//! The cursor counts characters, not bytes, so multi-byte city names edit
//! correctly. Every function takes the state by value and returns the next
//! state; none of them touch filter criteria directly.

/// Which route input is being edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouteField {
    /// Departure city.
    Origin,
    /// Arrival city.
    Destination,
}

impl RouteField {
    /// Input label.
    pub fn label(self) -> &'static str {
        match self {
            RouteField::Origin => "From",
            RouteField::Destination => "To",
        }
    }
}

/// Route input state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RouteEdit {
    /// No input focused.
    #[default]
    Idle,
    /// Typing into `field`.
    Editing {
        /// Field being edited.
        field: RouteField,
        /// Current text.
        buffer: String,
        /// Cursor position in characters.
        cursor: usize,
        /// Value before the edit began, restored on cancel.
        original: String,
    },
}

impl RouteEdit {
    /// Field under edit, if any.
    pub fn field(&self) -> Option<RouteField> {
        match self {
            RouteEdit::Editing { field, .. } => Some(*field),
            RouteEdit::Idle => None,
        }
    }

    /// Text being typed, if any.
    pub fn buffer(&self) -> Option<&str> {
        match self {
            RouteEdit::Editing { buffer, .. } => Some(buffer),
            RouteEdit::Idle => None,
        }
    }

    /// Cursor position in characters, if editing.
    pub fn cursor(&self) -> Option<usize> {
        match self {
            RouteEdit::Editing { cursor, .. } => Some(*cursor),
            RouteEdit::Idle => None,
        }
    }

    /// Whether an input is focused.
    pub fn is_editing(&self) -> bool {
        matches!(self, RouteEdit::Editing { .. })
    }
}

fn byte_offset(text: &str, char_index: usize) -> usize {
    text.char_indices()
        .nth(char_index)
        .map(|(i, _)| i)
        .unwrap_or(text.len())
}

/// Start editing `field`, seeded with its `current` value.
///
/// Places the cursor at the end. No-op while another edit is in progress.
pub fn begin_edit(state: RouteEdit, field: RouteField, current: &str) -> RouteEdit {
    match state {
        RouteEdit::Idle => RouteEdit::Editing {
            field,
            buffer: current.to_string(),
            cursor: current.chars().count(),
            original: current.to_string(),
        },
        other => other,
    }
}

/// Insert `ch` at the cursor and advance it.
pub fn handle_char(state: RouteEdit, ch: char) -> RouteEdit {
    match state {
        RouteEdit::Editing {
            field,
            mut buffer,
            cursor,
            original,
        } => {
            let at = byte_offset(&buffer, cursor);
            buffer.insert(at, ch);
            RouteEdit::Editing {
                field,
                buffer,
                cursor: cursor + 1,
                original,
            }
        }
        other => other,
    }
}

/// Delete the character before the cursor.
pub fn handle_backspace(state: RouteEdit) -> RouteEdit {
    match state {
        RouteEdit::Editing {
            field,
            mut buffer,
            cursor,
            original,
        } if cursor > 0 => {
            let at = byte_offset(&buffer, cursor - 1);
            buffer.remove(at);
            RouteEdit::Editing {
                field,
                buffer,
                cursor: cursor - 1,
                original,
            }
        }
        other => other,
    }
}

/// Delete the character under the cursor.
pub fn handle_delete(state: RouteEdit) -> RouteEdit {
    match state {
        RouteEdit::Editing {
            field,
            mut buffer,
            cursor,
            original,
        } if cursor < buffer.chars().count() => {
            let at = byte_offset(&buffer, cursor);
            buffer.remove(at);
            RouteEdit::Editing {
                field,
                buffer,
                cursor,
                original,
            }
        }
        other => other,
    }
}

/// Move the cursor one character left. Saturates at 0.
pub fn cursor_left(state: RouteEdit) -> RouteEdit {
    match state {
        RouteEdit::Editing {
            field,
            buffer,
            cursor,
            original,
        } => RouteEdit::Editing {
            field,
            buffer,
            cursor: cursor.saturating_sub(1),
            original,
        },
        other => other,
    }
}

/// Move the cursor one character right. Saturates at the end.
pub fn cursor_right(state: RouteEdit) -> RouteEdit {
    match state {
        RouteEdit::Editing {
            field,
            buffer,
            cursor,
            original,
        } => {
            let max = buffer.chars().count();
            RouteEdit::Editing {
                field,
                buffer,
                cursor: (cursor + 1).min(max),
                original,
            }
        }
        other => other,
    }
}

/// Finish editing and keep the typed value.
///
/// Returns the field and its final value so the caller can store it.
pub fn commit_edit(state: RouteEdit) -> (RouteEdit, Option<(RouteField, String)>) {
    match state {
        RouteEdit::Editing { field, buffer, .. } => (RouteEdit::Idle, Some((field, buffer))),
        RouteEdit::Idle => (RouteEdit::Idle, None),
    }
}

/// Abandon editing.
///
/// Returns the field and the value it had before the edit began.
pub fn cancel_edit(state: RouteEdit) -> (RouteEdit, Option<(RouteField, String)>) {
    match state {
        RouteEdit::Editing {
            field, original, ..
        } => (RouteEdit::Idle, Some((field, original))),
        RouteEdit::Idle => (RouteEdit::Idle, None),
    }
}

#[cfg(test)]
#[path = "route_input_tests.rs"]
mod tests;
