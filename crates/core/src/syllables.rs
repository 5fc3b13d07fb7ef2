// crates/core/src/syllables.rs
//! Heuristic syllable estimation.
//!
//! Each contiguous run of vowels (`a e i o u y`, case-insensitive) is one
//! syllable, except that a lone trailing `e` is silent unless the word has
//! no other syllable.

#[inline]
const fn is_vowel(c: char) -> bool {
    matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u' | 'y')
}

/// Count the syllables in a single word.
#[must_use]
pub fn count_syllables(word: &str) -> usize {
    let mut syllables = 0usize;
    let mut new_syllable = true;
    let mut chars = word.chars().peekable();

    while let Some(c) = chars.next() {
        let is_last = chars.peek().is_none();

        // Silent trailing 'e': checked before this char's own increment.
        if is_last && c.eq_ignore_ascii_case(&'e') && new_syllable && syllables > 0 {
            syllables -= 1;
        }

        if is_vowel(c) {
            if new_syllable {
                syllables += 1;
                new_syllable = false;
            }
        } else {
            new_syllable = true;
        }
    }

    syllables
}
