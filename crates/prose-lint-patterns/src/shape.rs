//! Paragraph shapes and the ordered classifier.

use regex::Regex;

use crate::classes::CharClasses;

/// The recognized shapes of a single doc-comment paragraph.
///
/// A paragraph matching any shape is a valid paragraph of the block
/// patterns. Shapes are tried in the order of [`ParagraphShape::ORDER`];
/// `Code` goes first so a fence line is never handed to the
/// character-class shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParagraphShape {
    /// A fenced code block delimited by triple-backtick lines.
    Code,
    /// One or more English sentences, one per line, each ending with a
    /// period.
    English,
    /// A paragraph opening with a character outside the sentence-start set,
    /// typically markdown structure such as a heading or list marker.
    SpecialBeginning,
    /// A paragraph containing, after its first character, a character
    /// outside the mid-sentence set, typically inline markdown.
    SpecialRest,
}

impl ParagraphShape {
    /// Classification order. `Code` must stay first; the remaining order
    /// resolves ties when a paragraph satisfies several shapes.
    pub const ORDER: [Self; 4] = [
        Self::Code,
        Self::English,
        Self::SpecialBeginning,
        Self::SpecialRest,
    ];

    /// Returns the shape's name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Code => "code",
            Self::English => "english",
            Self::SpecialBeginning => "special-beginning",
            Self::SpecialRest => "special-rest",
        }
    }
}

/// Compiled shape predicates for one set of character classes.
///
/// Built once per pattern; holds no mutable state and is safe to share
/// across threads.
#[derive(Debug)]
pub(crate) struct ShapeClassifier {
    english: Regex,
    special_beginning: Regex,
    special_rest: Regex,
}

impl ShapeClassifier {
    /// Compiles the shape predicates from character classes.
    pub(crate) fn new(classes: &CharClasses) -> Self {
        let start = classes.start_members();
        let middle = classes.middle_members();

        let sentence = format!("[{start}][{middle}]*\\.");
        Self {
            english: compile(&format!("^(?:{sentence}\\n)*{sentence}$")),
            special_beginning: compile(&format!("^[^{start}a-z\\n]")),
            special_rest: compile(&format!("(?s)^.+[^{middle}\\n]")),
        }
    }

    /// Classifies a paragraph, trying shapes in [`ParagraphShape::ORDER`].
    ///
    /// Whitespace-only paragraphs match no shape.
    pub(crate) fn classify(&self, paragraph: &str) -> Option<ParagraphShape> {
        if paragraph.trim().is_empty() {
            return None;
        }
        ParagraphShape::ORDER
            .into_iter()
            .find(|shape| self.matches_shape(*shape, paragraph))
    }

    fn matches_shape(&self, shape: ParagraphShape, paragraph: &str) -> bool {
        match shape {
            ParagraphShape::Code => is_code_block(paragraph),
            ParagraphShape::English => self.english.is_match(paragraph),
            ParagraphShape::SpecialBeginning => self.special_beginning.is_match(paragraph),
            ParagraphShape::SpecialRest => self.special_rest.is_match(paragraph),
        }
    }
}

/// Compiles an assembled expression.
///
/// Class members are escaped before interpolation, so the assembled
/// expression is always syntactically valid.
#[allow(clippy::expect_used)]
fn compile(source: &str) -> Regex {
    Regex::new(source).expect("assembled pattern is a valid expression")
}

/// Recognizes a well-formed fenced code block.
///
/// The opening line starts with a triple-backtick delimiter, optionally
/// followed by an info string. Content lines must not open another fence;
/// single blank lines between content lines are tolerated. The closing line
/// is a bare delimiter, and at least one content line must be present.
pub(crate) fn is_code_block(paragraph: &str) -> bool {
    let mut lines = paragraph.split('\n');
    match lines.next() {
        Some(open) if open.starts_with("```") => {}
        _ => return false,
    }

    let rest: Vec<&str> = lines.collect();
    let Some((close, content)) = rest.split_last() else {
        return false;
    };
    if *close != "```" || content.is_empty() {
        return false;
    }

    let mut previous_blank = true; // a blank directly after the opener is invalid
    for line in content {
        if line.is_empty() {
            if previous_blank {
                return false;
            }
            previous_blank = true;
        } else {
            if line.starts_with("```") {
                return false;
            }
            previous_blank = false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classifier() -> ShapeClassifier {
        ShapeClassifier::new(&CharClasses::default())
    }

    #[test]
    fn english_single_sentence() {
        assert_eq!(
            classifier().classify("This is a sentence."),
            Some(ParagraphShape::English)
        );
    }

    #[test]
    fn english_multiple_sentence_lines() {
        assert_eq!(
            classifier().classify("First sentence.\nSecond sentence."),
            Some(ParagraphShape::English)
        );
    }

    #[test]
    fn english_allows_inline_markup_characters() {
        assert_eq!(
            classifier().classify("Wraps `Option` in a {@link} tag, see #4."),
            Some(ParagraphShape::English)
        );
    }

    #[test]
    fn lowercase_start_matches_no_shape() {
        assert_eq!(classifier().classify("this starts lowercase."), None);
    }

    #[test]
    fn missing_period_matches_no_shape() {
        assert_eq!(classifier().classify("This has no period"), None);
    }

    #[test]
    fn heading_is_special_beginning() {
        assert_eq!(
            classifier().classify("# Heading"),
            Some(ParagraphShape::SpecialBeginning)
        );
    }

    #[test]
    fn list_marker_is_special_beginning() {
        assert_eq!(
            classifier().classify("- item one\n- item two"),
            Some(ParagraphShape::SpecialBeginning)
        );
    }

    #[test]
    fn inline_markdown_is_special_rest() {
        assert_eq!(
            classifier().classify("See [the docs] for details."),
            Some(ParagraphShape::SpecialRest)
        );
    }

    #[test]
    fn leading_special_char_classifies_as_beginning() {
        // A special character in the first position belongs to the
        // beginning shape even though later characters would also trigger
        // the rest shape.
        assert_eq!(
            classifier().classify("*emphasis* everywhere"),
            Some(ParagraphShape::SpecialBeginning)
        );
    }

    #[test]
    fn whitespace_only_matches_no_shape() {
        assert_eq!(classifier().classify("   "), None);
        assert_eq!(classifier().classify("\t"), None);
    }

    #[test]
    fn code_block_is_code() {
        assert_eq!(
            classifier().classify("```rust\nlet x = 1;\n```"),
            Some(ParagraphShape::Code)
        );
    }

    #[test]
    fn unterminated_fence_matches_no_shape() {
        // The backtick sits in the sentence-start set, so a malformed fence
        // cannot fall back to the special-beginning shape.
        assert_eq!(classifier().classify("```text\nplain words"), None);
    }

    #[test]
    fn code_block_tolerates_single_blank_lines() {
        assert!(is_code_block("```\nfn main() {}\n\nfn other() {}\n```"));
    }

    #[test]
    fn code_block_rejects_double_blank_lines() {
        assert!(!is_code_block("```\nfn main() {}\n\n\nfn other() {}\n```"));
    }

    #[test]
    fn code_block_rejects_blank_after_opener() {
        assert!(!is_code_block("```\n\nfn main() {}\n```"));
    }

    #[test]
    fn code_block_requires_content() {
        assert!(!is_code_block("```\n```"));
    }

    #[test]
    fn code_block_rejects_nested_opener() {
        assert!(!is_code_block("```\n```rust\n```"));
    }

    #[test]
    fn extended_middle_class_widens_english() {
        let classes = CharClasses::new().with_extra_middle("()/");
        let shapes = ShapeClassifier::new(&classes);
        assert_eq!(
            shapes.classify("Calls `f()` and/or `g()`."),
            Some(ParagraphShape::English)
        );
    }
}
