//! Paragraph grouping

/// Join consecutive sentences into paragraphs of `group_size`.
///
/// Grouping is strictly sequential: `[0..k)`, `[k..2k)`, and so on, with
/// the final paragraph possibly holding fewer than `group_size` sentences
/// (never zero, never dropped). Sentences within a paragraph are joined by
/// single spaces.
///
/// # Panics
///
/// Panics if `group_size` is zero; callers validate via
/// [`ReflowOptions::validate`](crate::ReflowOptions::validate).
pub fn group_sentences(sentences: &[&str], group_size: usize) -> Vec<String> {
    debug_assert!(group_size > 0, "group_size validated by the caller");
    sentences
        .chunks(group_size)
        .map(|chunk| chunk.join(" "))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_in_appearance_order() {
        let sentences = ["A.", "B.", "C.", "D.", "E."];
        let paragraphs = group_sentences(&sentences, 2);
        assert_eq!(paragraphs, vec!["A. B.", "C. D.", "E."]);
    }

    #[test]
    fn last_paragraph_may_be_short_but_never_empty() {
        let sentences = ["A.", "B.", "C.", "D."];
        let paragraphs = group_sentences(&sentences, 3);
        assert_eq!(paragraphs, vec!["A. B. C.", "D."]);
    }

    #[test]
    fn exact_multiple_leaves_no_remainder_paragraph() {
        let sentences = ["A.", "B.", "C.", "D."];
        let paragraphs = group_sentences(&sentences, 2);
        assert_eq!(paragraphs, vec!["A. B.", "C. D."]);
    }

    #[test]
    fn group_size_one_gives_one_sentence_per_paragraph() {
        let sentences = ["A.", "B."];
        let paragraphs = group_sentences(&sentences, 1);
        assert_eq!(paragraphs, vec!["A.", "B."]);
    }

    #[test]
    fn group_size_larger_than_input_gives_a_single_paragraph() {
        let sentences = ["A.", "B."];
        let paragraphs = group_sentences(&sentences, 10);
        assert_eq!(paragraphs, vec!["A. B."]);
    }

    #[test]
    fn no_sentences_gives_no_paragraphs() {
        let paragraphs = group_sentences(&[], 3);
        assert!(paragraphs.is_empty());
    }
}
