//! User input sanitization.

/// Default character budget for a single user message.
pub const MAX_INPUT_CHARS: usize = 2000;

/// Strip surrounding whitespace and cap the result at `max_chars` characters.
///
/// Purely a length/whitespace guard: no escaping, no content filtering.
/// Truncation counts characters rather than bytes, so multi-byte input is
/// never split mid-scalar.
pub fn sanitize_input(text: &str, max_chars: usize) -> String {
    text.trim().chars().take(max_chars).collect()
}
