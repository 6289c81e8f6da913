//! The three derived classification patterns.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::classes::CharClasses;
use crate::shape::{ParagraphShape, ShapeClassifier};

/// Which comment context a [`ProsePattern`] classifies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternKind {
    /// An entire comment body of one or more paragraphs.
    Block,
    /// A comment body optionally preceded by a single lead line.
    BlockWithLead,
    /// Exactly one lead line: a short label that does not end in a period.
    LeadOnly,
}

/// A compiled, full-input classification pattern for doc-comment prose.
///
/// Construction is infallible and happens once; a pattern is immutable
/// afterwards and may be shared freely between threads. Classification is a
/// pure boolean test: the input either matches in full or it does not, and a
/// non-match carries no further diagnosis.
#[derive(Debug)]
pub struct ProsePattern {
    kind: PatternKind,
    shapes: ShapeClassifier,
    lead: Regex,
}

impl ProsePattern {
    /// Builds the block pattern from the default character classes.
    #[must_use]
    pub fn block() -> Self {
        Self::with_classes(PatternKind::Block, &CharClasses::default())
    }

    /// Builds the block pattern with an optional lead line.
    #[must_use]
    pub fn block_with_lead() -> Self {
        Self::with_classes(PatternKind::BlockWithLead, &CharClasses::default())
    }

    /// Builds the lead-only pattern.
    #[must_use]
    pub fn lead_only() -> Self {
        Self::with_classes(PatternKind::LeadOnly, &CharClasses::default())
    }

    /// Builds a pattern of the given kind from explicit character classes.
    #[must_use]
    pub fn with_classes(kind: PatternKind, classes: &CharClasses) -> Self {
        let start = classes.start_members();
        // A lead line opens with a sentence-start character or a digit,
        // spans at least two characters, and must not end in a period.
        let lead = format!("^[{start}0-9][^\\n]*[^.\\n]$");
        Self {
            kind,
            shapes: ShapeClassifier::new(classes),
            lead: compile(&lead),
        }
    }

    /// Returns which context this pattern classifies.
    #[must_use]
    pub fn kind(&self) -> PatternKind {
        self.kind
    }

    /// Tests whether the whole input matches this pattern.
    ///
    /// Empty input never matches.
    #[must_use]
    pub fn is_match(&self, text: &str) -> bool {
        match self.kind {
            PatternKind::Block => self.matches_block(text),
            PatternKind::BlockWithLead => {
                self.matches_block(text)
                    || text.split_once('\n').is_some_and(|(first, rest)| {
                        self.lead.is_match(first) && self.matches_block(rest)
                    })
            }
            PatternKind::LeadOnly => self.lead.is_match(text),
        }
    }

    /// Classifies a single paragraph by shape.
    ///
    /// Returns `None` when the paragraph matches no shape, including for
    /// whitespace-only input.
    #[must_use]
    pub fn classify_paragraph(&self, paragraph: &str) -> Option<ParagraphShape> {
        self.shapes.classify(paragraph)
    }

    /// Matches a body of one or more paragraphs separated by single blank
    /// lines, with an optional single trailing line break.
    fn matches_block(&self, text: &str) -> bool {
        if text.is_empty() {
            return false;
        }
        let body = text.strip_suffix('\n').unwrap_or(text);
        if body.is_empty() {
            return false;
        }
        let Some(paragraphs) = split_paragraphs(body) else {
            return false;
        };
        paragraphs
            .iter()
            .all(|p| self.shapes.classify(p).is_some())
    }
}

/// Class members are escaped before interpolation, so the assembled
/// expression is always syntactically valid.
#[allow(clippy::expect_used)]
fn compile(source: &str) -> Regex {
    Regex::new(source).expect("assembled pattern is a valid expression")
}

/// Splits a comment body into paragraphs.
///
/// Paragraphs are separated by exactly one blank line. A paragraph opening
/// with a fence delimiter extends to its closing delimiter, so blank lines
/// inside fenced code do not split it. Returns `None` for structural
/// failures: an empty paragraph, an unterminated fence, a nested fence
/// opener, content directly after a closing fence, or a trailing blank line.
fn split_paragraphs(body: &str) -> Option<Vec<String>> {
    let lines: Vec<&str> = body.split('\n').collect();
    let mut paragraphs = Vec::new();
    let mut i = 0;

    loop {
        let first = *lines.get(i)?;
        if first.is_empty() {
            return None;
        }

        let paragraph = if first.starts_with("```") {
            let start = i;
            i += 1;
            loop {
                let line = *lines.get(i)?;
                if line == "```" {
                    break;
                }
                if line.starts_with("```") {
                    return None;
                }
                i += 1;
            }
            i += 1;
            lines[start..i].join("\n")
        } else {
            let start = i;
            while i < lines.len() && !lines[i].is_empty() {
                i += 1;
            }
            lines[start..i].join("\n")
        };
        paragraphs.push(paragraph);

        if i == lines.len() {
            return Some(paragraphs);
        }
        if !lines[i].is_empty() {
            // Content directly after a closing fence.
            return None;
        }
        i += 1;
        if i == lines.len() {
            // A separator with no paragraph after it.
            return None;
        }
    }
}

static BLOCK: Lazy<ProsePattern> = Lazy::new(ProsePattern::block);
static BLOCK_WITH_LEAD: Lazy<ProsePattern> = Lazy::new(ProsePattern::block_with_lead);
static LEAD_ONLY: Lazy<ProsePattern> = Lazy::new(ProsePattern::lead_only);

/// The process-wide block pattern built from the default classes.
#[must_use]
pub fn block_pattern() -> &'static ProsePattern {
    &BLOCK
}

/// The process-wide block-with-optional-lead pattern.
#[must_use]
pub fn block_with_lead_pattern() -> &'static ProsePattern {
    &BLOCK_WITH_LEAD
}

/// The process-wide lead-only pattern.
#[must_use]
pub fn lead_only_pattern() -> &'static ProsePattern {
    &LEAD_ONLY
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_matches_single_sentence() {
        assert!(block_pattern().is_match("Returns the current value."));
    }

    #[test]
    fn block_matches_multi_sentence_paragraph() {
        assert!(block_pattern().is_match("Reads the header. Then reads the body."));
    }

    #[test]
    fn block_matches_two_paragraphs() {
        assert!(block_pattern().is_match("First paragraph.\n\nSecond paragraph."));
    }

    #[test]
    fn block_allows_single_trailing_newline() {
        assert!(block_pattern().is_match("First paragraph.\n\nSecond paragraph.\n"));
        assert!(!block_pattern().is_match("First paragraph.\n\nSecond paragraph.\n\n"));
    }

    #[test]
    fn block_rejects_empty_input() {
        assert!(!block_pattern().is_match(""));
        assert!(!block_pattern().is_match("\n"));
    }

    #[test]
    fn block_rejects_whitespace_paragraph() {
        assert!(!block_pattern().is_match("Fine paragraph.\n\n   \n\nAlso fine."));
    }

    #[test]
    fn block_rejects_double_blank_separator() {
        assert!(!block_pattern().is_match("First.\n\n\nSecond."));
    }

    #[test]
    fn block_rejects_lowercase_continuation() {
        // Two valid sentences followed by a lowercase-starting line in the
        // same paragraph fail as a whole.
        assert!(!block_pattern().is_match(
            "One valid sentence.\nAnother valid sentence.\nlowercase tail."
        ));
    }

    #[test]
    fn block_rejects_lowercase_start_anywhere() {
        assert!(!block_pattern().is_match("lowercase start."));
        assert!(!block_pattern().is_match("Fine paragraph.\n\nlowercase paragraph."));
    }

    #[test]
    fn block_matches_fenced_code_alone() {
        assert!(block_pattern().is_match("```rust\nlet x = compute();\n```"));
    }

    #[test]
    fn block_rejects_unterminated_fence() {
        assert!(!block_pattern().is_match("```rust\nlet x = compute();"));
    }

    #[test]
    fn block_matches_prose_then_code() {
        let text = "Runs the example below.\n\n```sh\nprose-lint check .\n```";
        assert!(block_pattern().is_match(text));
    }

    #[test]
    fn block_keeps_blank_lines_inside_fences() {
        let text = "```\nfn a() {}\n\nfn b() {}\n```\n\nTrailing prose.";
        assert!(block_pattern().is_match(text));
    }

    #[test]
    fn block_rejects_content_touching_closing_fence() {
        assert!(!block_pattern().is_match("```\ncode\n```\nNo separator."));
    }

    #[test]
    fn block_accepts_markdown_shaped_paragraphs() {
        assert!(block_pattern().is_match("# Heading\n\nThen a real sentence."));
        assert!(block_pattern().is_match("See [link] for details."));
    }

    #[test]
    fn lead_only_matches_unterminated_label() {
        assert!(lead_only_pattern().is_match("Returns the current value"));
    }

    #[test]
    fn lead_only_rejects_trailing_period() {
        assert!(!lead_only_pattern().is_match("Returns the current value."));
    }

    #[test]
    fn lead_only_rejects_lowercase_start() {
        assert!(!lead_only_pattern().is_match("returns the current value"));
    }

    #[test]
    fn lead_only_accepts_digit_start() {
        assert!(lead_only_pattern().is_match("3rd field of the header"));
    }

    #[test]
    fn lead_only_rejects_multiple_lines() {
        assert!(!lead_only_pattern().is_match("Title line\nBody line"));
    }

    #[test]
    fn lead_only_rejects_single_character() {
        assert!(!lead_only_pattern().is_match("A"));
    }

    #[test]
    fn block_with_lead_accepts_bare_block() {
        assert!(block_with_lead_pattern().is_match("Just a body sentence."));
    }

    #[test]
    fn block_with_lead_accepts_title_then_body() {
        let text = "Streaming decode example\nFeeds chunks to the decoder.";
        assert!(block_with_lead_pattern().is_match(text));
        assert!(!block_pattern().is_match(text));
    }

    #[test]
    fn block_with_lead_rejects_lowercase_lead() {
        assert!(!block_with_lead_pattern().is_match("bad title\nFine body."));
    }

    #[test]
    fn construction_is_idempotent() {
        let a = ProsePattern::block();
        let b = ProsePattern::block();
        for sample in [
            "Valid sentence.",
            "invalid sentence.",
            "# Heading",
            "```\ncode\n```",
            "Unterminated\n",
            "",
        ] {
            assert_eq!(a.is_match(sample), b.is_match(sample), "sample: {sample:?}");
        }
    }

    #[test]
    fn patterns_report_their_kind() {
        assert_eq!(block_pattern().kind(), PatternKind::Block);
        assert_eq!(block_with_lead_pattern().kind(), PatternKind::BlockWithLead);
        assert_eq!(lead_only_pattern().kind(), PatternKind::LeadOnly);
    }
}
