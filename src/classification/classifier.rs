//! First-match-wins keyword classifier.
//!
//! A single Aho-Corasick automaton is built over every taxonomy keyword;
//! each pattern remembers its (category, subcategory) precedence rank. A
//! lookup scans all overlapping occurrences in the lowercased bilingual text
//! and keeps the lowest rank, which is exactly "the first subcategory in
//! taxonomy order with any matching keyword".
//!
//! Matching is plain substring, not token-boundary-aware: "arm" matches
//! inside "warm". That mirrors the source data this catalog was built
//! against and must not be tightened without reclassifying existing output.

use aho_corasick::{AhoCorasick, AhoCorasickBuilder, BuildError, MatchKind};
use once_cell::sync::Lazy;

use super::taxonomy::{FALLBACK_MAIN, FALLBACK_SUB, Taxonomy};

/// Where a keyword pattern sits in the taxonomy.
#[derive(Debug, Clone, Copy)]
struct PatternSlot {
    rank: (usize, usize),
    main: &'static str,
    sub: &'static str,
}

/// Compiled classifier over an injected [`Taxonomy`].
#[derive(Debug)]
pub struct Classifier {
    automaton: AhoCorasick,
    slots: Vec<PatternSlot>,
}

impl Classifier {
    pub fn new(taxonomy: &Taxonomy) -> Result<Self, BuildError> {
        let mut patterns = Vec::new();
        let mut slots = Vec::new();
        for (category_rank, category) in taxonomy.categories().iter().enumerate() {
            for (sub_rank, sub) in category.subcategories.iter().enumerate() {
                for keyword in sub.keywords {
                    patterns.push(*keyword);
                    slots.push(PatternSlot {
                        rank: (category_rank, sub_rank),
                        main: category.name,
                        sub: sub.name,
                    });
                }
            }
        }

        let automaton = AhoCorasickBuilder::new()
            .match_kind(MatchKind::Standard)
            .build(&patterns)?;

        Ok(Self { automaton, slots })
    }

    /// Classify a tag by its bilingual text.
    ///
    /// Returns the (main category, subcategory) pair of the highest-
    /// precedence keyword occurring in `"{text_en} {text_cn}"` lowercased,
    /// or the fallback pair when nothing matches.
    #[must_use]
    pub fn classify(&self, text_en: &str, text_cn: &str) -> (&'static str, &'static str) {
        let haystack = format!("{text_en} {text_cn}").to_lowercase();
        let mut best: Option<PatternSlot> = None;

        for mat in self.automaton.find_overlapping_iter(&haystack) {
            let slot = self.slots[mat.pattern().as_usize()];
            if best.is_none_or(|current| slot.rank < current.rank) {
                best = Some(slot);
            }
        }

        best.map_or((FALLBACK_MAIN, FALLBACK_SUB), |slot| (slot.main, slot.sub))
    }
}

/// Classifier over the built-in taxonomy, compiled once per process.
static BUILTIN_CLASSIFIER: Lazy<Classifier> = Lazy::new(|| {
    Classifier::new(&Taxonomy::builtin()).expect("built-in taxonomy compiles")
});

/// Shared classifier for the built-in taxonomy.
#[must_use]
pub fn builtin_classifier() -> &'static Classifier {
    &BUILTIN_CLASSIFIER
}
