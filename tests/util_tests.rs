//! Tests for input sanitization and token estimation.

use pretty_assertions::assert_eq;

use palaver::util::text::{sanitize_input, MAX_INPUT_CHARS};
use palaver::util::tokens::{approximate_tokens, CHARS_PER_TOKEN};

#[test]
fn sanitize_strips_surrounding_whitespace() {
    assert_eq!(sanitize_input("  hello world  \n", MAX_INPUT_CHARS), "hello world");
}

#[test]
fn sanitize_preserves_interior_whitespace() {
    assert_eq!(
        sanitize_input("line one\n\nline two", MAX_INPUT_CHARS),
        "line one\n\nline two"
    );
}

#[test]
fn sanitize_truncates_to_the_character_budget() {
    let long = "a".repeat(MAX_INPUT_CHARS + 500);
    let cleaned = sanitize_input(&long, MAX_INPUT_CHARS);
    assert_eq!(cleaned.chars().count(), MAX_INPUT_CHARS);
}

#[test]
fn sanitize_counts_characters_not_bytes() {
    // Four-byte scalars: a byte-indexed cut would split one of these.
    let emoji = "🦀".repeat(10);
    let cleaned = sanitize_input(&emoji, 5);
    assert_eq!(cleaned, "🦀🦀🦀🦀🦀");
}

#[test]
fn sanitize_trims_before_truncating() {
    // Leading whitespace must not consume the budget.
    let input = format!("   {}", "x".repeat(6));
    assert_eq!(sanitize_input(&input, 4), "xxxx");
}

#[test]
fn sanitize_collapses_whitespace_only_input_to_empty() {
    assert_eq!(sanitize_input("   \t\n  ", MAX_INPUT_CHARS), "");
}

#[test]
fn input_budget_is_two_thousand_characters() {
    assert_eq!(MAX_INPUT_CHARS, 2000);
}

#[test]
fn token_estimate_is_total_chars_over_four() {
    assert_eq!(CHARS_PER_TOKEN, 4);
    // 11 + 5 = 16 chars -> 4 tokens
    assert_eq!(approximate_tokens(["hello world", "again"]), 4);
}

#[test]
fn token_estimate_floors_the_division() {
    assert_eq!(approximate_tokens(["aaaa"]), 1);
    assert_eq!(approximate_tokens(["aaa"]), 0);
    // 7 chars -> 1 token, not 2
    assert_eq!(approximate_tokens(["sevench"]), 1);
}

#[test]
fn token_estimate_sums_before_dividing() {
    // Three 3-char texts: per-text flooring would give 0, the total gives 2.
    assert_eq!(approximate_tokens(["abc", "def", "ghi"]), 2);
}

#[test]
fn token_estimate_of_nothing_is_zero() {
    assert_eq!(approximate_tokens([]), 0);
    assert_eq!(approximate_tokens([""]), 0);
}

#[test]
fn token_estimate_counts_scalars_not_bytes() {
    // Eight 4-byte scalars: 32 bytes but 8 chars -> 2 tokens.
    let crabs = "🦀".repeat(8);
    assert_eq!(approximate_tokens([crabs.as_str()]), 2);
}

#[test]
fn token_estimate_is_monotonic_in_length() {
    let short = approximate_tokens(["hello"]);
    let long = approximate_tokens(["hello there, this is quite a bit longer"]);
    assert!(long >= short);
}
