//! Sentence boundary scanning

/// Check if a character terminates a sentence
#[inline]
fn is_terminal(ch: char) -> bool {
    matches!(ch, '.' | '!' | '?')
}

/// Split text into sentences.
///
/// A sentence ends at a terminal character (`.`, `!`, `?`) that is
/// immediately followed by whitespace, or at the end of the text. The
/// terminal stays attached to its sentence; the separating whitespace is
/// dropped. Each piece is trimmed and empty pieces are discarded, so text
/// without any terminal comes back as a single sentence.
///
/// Abbreviations are deliberately not special-cased: "Mr. Smith" splits
/// after "Mr.".
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut prev_was_terminal = false;

    for (idx, ch) in text.char_indices() {
        if prev_was_terminal && ch.is_whitespace() {
            push_trimmed(&mut sentences, &text[start..idx]);
            start = idx;
        }
        prev_was_terminal = is_terminal(ch);
    }
    push_trimmed(&mut sentences, &text[start..]);

    sentences
}

fn push_trimmed<'a>(sentences: &mut Vec<&'a str>, piece: &'a str) {
    let piece = piece.trim();
    if !piece.is_empty() {
        sentences.push(piece);
    }
}
