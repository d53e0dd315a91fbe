//! Emoji-to-text mapping.
//!
//! Replaces every emoji sequence in a string with its English short name
//! wrapped in colons (`😀` becomes `:grinning_face:`). Names come from the
//! Unicode emoji table bundled with the `emojis` crate. Text that is not an
//! emoji is copied through unchanged.

use std::iter;

use emojis::Emoji;

/// Longest emoji sequence in code points (kiss and couple sequences with two skin tones).
const MAX_SEQUENCE_CHARS: usize = 10;

const VARIATION_SELECTOR_16: char = '\u{FE0F}';

/// Convert every emoji in `input` to its `:short_name:` form.
///
/// Sequences are matched greedily, longest first, so `👍🏽` maps as one
/// skin-toned emoji rather than a thumb followed by a modifier.
pub fn demojize(input: &str) -> String {
    let boundaries: Vec<usize> = input
        .char_indices()
        .map(|(i, _)| i)
        .chain(iter::once(input.len()))
        .collect();
    let last = boundaries.len() - 1;

    let mut out = String::with_capacity(input.len());
    let mut i = 0;
    while i < last {
        match longest_match(input, &boundaries, i) {
            Some((emoji, end)) => {
                out.push(':');
                out.push_str(&short_name(emoji.name()));
                out.push(':');
                i = end;
                // A stray presentation selector belongs to the emoji just replaced.
                if i < last && input[boundaries[i]..].starts_with(VARIATION_SELECTOR_16) {
                    i += 1;
                }
            }
            None => {
                out.push_str(&input[boundaries[i]..boundaries[i + 1]]);
                i += 1;
            }
        }
    }

    out
}

/// Longest emoji starting at char index `start`, with the char index just past it.
fn longest_match(
    input: &str,
    boundaries: &[usize],
    start: usize,
) -> Option<(&'static Emoji, usize)> {
    let from = boundaries[start];
    let max_end = (start + MAX_SEQUENCE_CHARS).min(boundaries.len() - 1);
    // Digits, `#` and `*` only count as emoji when followed by a keycap.
    let min_end = if input.as_bytes()[from].is_ascii() {
        start + 2
    } else {
        start + 1
    };

    (min_end..=max_end)
        .rev()
        .find_map(|end| emojis::get(&input[from..boundaries[end]]).map(|emoji| (emoji, end)))
}

/// `flag: United States` -> `United_States`, `thumbs up: medium skin tone` -> `thumbs_up_medium_skin_tone`.
fn short_name(name: &str) -> String {
    name.strip_prefix("flag: ")
        .unwrap_or(name)
        .chars()
        .filter(|c| !matches!(c, ':' | ','))
        .map(|c| if c == ' ' { '_' } else { c })
        .collect()
}
