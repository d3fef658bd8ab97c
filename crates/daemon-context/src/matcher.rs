//! Aligns text against a grammar and exposes the raw slot tokens.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::grammar::{CURRENT_GRAMMAR, Field, Grammar, GrammarGeneration, LEGACY_GRAMMAR};

static LEGACY_MATCHER: Lazy<Regex> = Lazy::new(|| compile(&LEGACY_GRAMMAR));
static CURRENT_MATCHER: Lazy<Regex> = Lazy::new(|| compile(&CURRENT_GRAMMAR));

#[expect(
    clippy::expect_used,
    reason = "grammar tables are static and every generation is compiled in tests"
)]
fn compile(grammar: &Grammar) -> Regex {
    Regex::new(&grammar.pattern()).expect("static grammar pattern should compile")
}

fn matcher_for(generation: GrammarGeneration) -> &'static Regex {
    match generation {
        GrammarGeneration::Legacy => &LEGACY_MATCHER,
        GrammarGeneration::Current => &CURRENT_MATCHER,
    }
}

/// Tokens captured by one successful alignment, in slot order.
///
/// Optional slots that were not present hold `None`, never an empty string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawCaptures<'t> {
    generation: GrammarGeneration,
    tokens: Vec<(Field, Option<&'t str>)>,
}

impl<'t> RawCaptures<'t> {
    /// The generation whose grammar produced these captures.
    #[must_use]
    pub const fn generation(&self) -> GrammarGeneration {
        self.generation
    }

    /// Returns the token captured for `field`.
    ///
    /// `None` means the slot was absent or the grammar has no such slot.
    #[must_use]
    pub fn get(&self, field: Field) -> Option<&'t str> {
        self.tokens
            .iter()
            .find(|(slot_field, _)| *slot_field == field)
            .and_then(|(_, token)| *token)
    }

    /// Captured tokens in slot order.
    #[must_use]
    pub fn tokens(&self) -> &[(Field, Option<&'t str>)] {
        &self.tokens
    }
}

/// Aligns the whole of `text` with `grammar`.
///
/// Returns `None` when the text does not have the grammar's shape; that is
/// an ordinary outcome while scanning unrelated log lines.
#[must_use]
pub fn match_text<'t>(grammar: &Grammar, text: &'t str) -> Option<RawCaptures<'t>> {
    let captures = matcher_for(grammar.generation()).captures(text)?;
    let tokens = grammar
        .slots()
        .iter()
        .map(|slot| {
            let token = captures.name(slot.group_name()).map(|m| m.as_str());
            (slot.field(), token)
        })
        .collect();
    Some(RawCaptures {
        generation: grammar.generation(),
        tokens,
    })
}
