//! Heuristic token estimation.

/// Rough characters-per-token ratio for English text.
pub const CHARS_PER_TOKEN: usize = 4;

/// Estimate the token count of a set of texts for cost awareness.
///
/// Total character count divided by [`CHARS_PER_TOKEN`], floored. Monotonic
/// in input length and fully deterministic. Display heuristic only, never
/// used to enforce provider limits.
pub fn approximate_tokens<'a, I>(texts: I) -> u32
where
    I: IntoIterator<Item = &'a str>,
{
    let chars: usize = texts.into_iter().map(|t| t.chars().count()).sum();
    (chars / CHARS_PER_TOKEN) as u32
}
