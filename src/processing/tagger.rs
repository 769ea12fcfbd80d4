//! Lightweight language analysis: tokenization, part-of-speech tagging and
//! named-entity recognition.
//!
//! The tagger is heuristic. Input is expected to be normalized (lower-case),
//! so capitalization cues are not available; tags come from closed-class
//! word lists, gazetteers, suffix rules and the previous token's tag. Tag
//! names follow the Penn Treebank set (`NN`, `NNS`, `NNP`, `VB`, `JJ`, ...).

use crate::error::{Result, ResumeAnalyzerError};
use crate::processing::lexicon;
use unicode_segmentation::UnicodeSegmentation;

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub text: String,
    pub tag: &'static str,
    /// Byte offset of the token in the parsed text.
    pub start: usize,
}

impl Token {
    pub fn end(&self) -> usize {
        self.start + self.text.len()
    }

    pub fn is_noun(&self) -> bool {
        self.tag.starts_with("NN")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityLabel {
    Organization,
    Location,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    pub text: String,
    pub label: EntityLabel,
}

/// A parsed document exposing tagged tokens and recognized entities.
#[derive(Debug, Clone)]
pub struct TaggedDocument {
    tokens: Vec<Token>,
    entities: Vec<Entity>,
}

impl TaggedDocument {
    /// Tokenize, tag and run entity recognition over `text`.
    ///
    /// Fails on blank input and on input without any word token.
    pub fn parse(text: &str) -> Result<Self> {
        if text.trim().is_empty() {
            return Err(ResumeAnalyzerError::TextProcessing(
                "Cannot parse an empty document".to_string(),
            ));
        }

        let mut tokens = tokenize(text);
        if !tokens.iter().any(|t| is_word(&t.text)) {
            return Err(ResumeAnalyzerError::TextProcessing(
                "Document contains no word tokens".to_string(),
            ));
        }

        tag_tokens(&mut tokens);
        let spans = recognize_entities(&tokens);

        let mut entities = Vec::with_capacity(spans.len());
        for (first, last, label) in spans {
            for token in &mut tokens[first..=last] {
                if token.is_noun() || token.tag == "JJ" {
                    token.tag = "NNP";
                }
            }
            entities.push(Entity {
                text: text[tokens[first].start..tokens[last].end()].to_string(),
                label,
            });
        }

        Ok(Self { tokens, entities })
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }
}

fn tokenize(text: &str) -> Vec<Token> {
    text.split_word_bound_indices()
        .filter(|(_, segment)| !segment.trim().is_empty())
        .map(|(start, segment)| Token {
            text: segment.to_string(),
            tag: "",
            start,
        })
        .collect()
}

fn is_word(text: &str) -> bool {
    text.chars().any(|c| c.is_alphabetic())
}

fn is_number(text: &str) -> bool {
    text.chars().any(|c| c.is_ascii_digit()) && !text.chars().any(|c| c.is_alphabetic())
}

fn tag_tokens(tokens: &mut [Token]) {
    let mut previous: &'static str = "";

    for idx in 0..tokens.len() {
        let next_is_number = tokens
            .get(idx + 1)
            .map(|t| is_number(&t.text))
            .unwrap_or(false);

        let tag = tag_word(&tokens[idx].text, previous, next_is_number);
        tokens[idx].tag = tag;
        previous = tag;
    }
}

fn tag_word(word: &str, previous: &str, next_is_number: bool) -> &'static str {
    if is_number(word) {
        return "CD";
    }
    if !is_word(word) {
        return punctuation_tag(word);
    }

    if lexicon::MONTHS.contains(&word) && (word != "may" || next_is_number) {
        return "NNP";
    }
    if word == "to" {
        return "TO";
    }
    if matches!(word, "my" | "our" | "your" | "his" | "her" | "their" | "its") {
        return "PRP$";
    }
    if lexicon::PRONOUNS.contains(&word) {
        return "PRP";
    }
    if lexicon::DETERMINERS.contains(&word) {
        return "DT";
    }
    if lexicon::PREPOSITIONS.contains(&word) {
        return "IN";
    }
    if lexicon::CONJUNCTIONS.contains(&word) {
        return "CC";
    }
    if lexicon::MODALS.contains(&word) {
        return "MD";
    }
    if lexicon::ADVERBS.contains(&word) {
        return "RB";
    }
    if lexicon::ORGANIZATIONS.contains(&word) || lexicon::LOCATIONS.contains(&word) {
        return "NNP";
    }

    // After "to" or a modal, an open-class word is read as a verb.
    if matches!(previous, "TO" | "MD") && !lexicon::ADJECTIVES.contains(&word) {
        return "VB";
    }

    let follows_modifier = matches!(previous, "DT" | "JJ" | "PRP$" | "IN");

    if lexicon::VERBS.contains(&word) {
        return match word {
            "is" | "has" | "does" => "VBZ",
            "are" | "am" => "VBP",
            "been" | "done" | "written" => "VBN",
            "was" | "were" | "had" | "did" | "got" | "made" | "led" | "built" | "ran"
            | "wrote" | "drove" | "grew" | "spent" | "took" | "became" => "VBD",
            _ if word.ends_with("ed") => "VBD",
            // "the work", "my design": a verb form after a modifier is a noun.
            _ if follows_modifier => "NN",
            _ => "VB",
        };
    }
    if lexicon::ADJECTIVES.contains(&word) {
        return "JJ";
    }

    tag_by_suffix(word, follows_modifier)
}

fn tag_by_suffix(word: &str, follows_modifier: bool) -> &'static str {
    const NOUN_SUFFIXES: &[&str] = &[
        "tion", "sion", "ment", "ness", "ity", "ship", "ance", "ence", "ism", "ist", "er",
        "or", "ogy", "ure", "age",
    ];
    const ADJECTIVE_SUFFIXES: &[&str] = &[
        "ous", "ful", "ive", "able", "ible", "al", "ic", "less", "ary",
    ];

    let len = word.chars().count();

    if len > 4 && word.ends_with("ly") {
        return "RB";
    }
    if len > 4 && word.ends_with("ing") {
        return if follows_modifier { "NN" } else { "VBG" };
    }
    if len > 3 && word.ends_with("ed") {
        return if follows_modifier { "JJ" } else { "VBD" };
    }
    if NOUN_SUFFIXES.iter().any(|s| word.ends_with(s)) {
        return "NN";
    }
    if len > 3 && NOUN_SUFFIXES.iter().any(|s| word.ends_with(&format!("{}s", s))) {
        return "NNS";
    }
    if len > 4 && ADJECTIVE_SUFFIXES.iter().any(|s| word.ends_with(s)) {
        return "JJ";
    }
    if len > 3
        && word.ends_with('s')
        && !word.ends_with("ss")
        && !word.ends_with("us")
        && !word.ends_with("is")
    {
        return "NNS";
    }

    "NN"
}

fn punctuation_tag(text: &str) -> &'static str {
    match text {
        "." | "!" | "?" => ".",
        "," => ",",
        ":" | ";" => ":",
        "(" | "[" | "{" => "(",
        ")" | "]" | "}" => ")",
        "-" | "\u{2013}" | "\u{2014}" => ":",
        _ => "SYM",
    }
}

/// Returns inclusive token spans with their labels, in document order.
fn recognize_entities(tokens: &[Token]) -> Vec<(usize, usize, EntityLabel)> {
    let mut spans = Vec::new();
    let mut idx = 0;

    while idx < tokens.len() {
        if let Some(span) = match_location(tokens, idx)
            .or_else(|| match_organization(tokens, idx))
        {
            idx = span.1 + 1;
            spans.push(span);
        } else {
            idx += 1;
        }
    }

    spans
}

fn match_location(tokens: &[Token], idx: usize) -> Option<(usize, usize, EntityLabel)> {
    if let Some(next) = tokens.get(idx + 1) {
        let pair = format!("{} {}", tokens[idx].text, next.text);
        if lexicon::LOCATIONS.contains(&pair.as_str()) {
            return Some((idx, idx + 1, EntityLabel::Location));
        }
    }
    if lexicon::LOCATIONS.contains(&tokens[idx].text.as_str()) {
        return Some((idx, idx, EntityLabel::Location));
    }
    None
}

fn match_organization(tokens: &[Token], idx: usize) -> Option<(usize, usize, EntityLabel)> {
    let word = tokens[idx].text.as_str();

    if lexicon::ORGANIZATIONS.contains(&word) {
        return Some((idx, idx, EntityLabel::Organization));
    }

    // "<name> corp", "<name> labs", "<name> university": up to three name
    // tokens ending in an organization suffix.
    if is_name_token(&tokens[idx]) {
        let limit = (idx + 4).min(tokens.len());
        for end in idx + 1..limit {
            let candidate = suffix_at(tokens, end);
            if let Some(suffix_end) = candidate {
                return Some((idx, extend_with_of(tokens, suffix_end), EntityLabel::Organization));
            }
            if !is_name_token(&tokens[end]) {
                break;
            }
        }
    }

    // "university of california"
    if is_institution_head(word) {
        let end = extend_with_of(tokens, idx);
        if end > idx {
            return Some((idx, end, EntityLabel::Organization));
        }
    }

    None
}

/// If the token at `idx` is an organization suffix, return the index of its
/// last token ("corp" or "corp" + ".").
fn suffix_at(tokens: &[Token], idx: usize) -> Option<usize> {
    let text = tokens[idx].text.as_str();
    if let Some(dot) = tokens.get(idx + 1).filter(|t| t.text == ".") {
        let joined = format!("{}{}", text, dot.text);
        if lexicon::ORGANIZATION_SUFFIXES.contains(&joined.as_str()) {
            return Some(idx + 1);
        }
    }
    lexicon::ORGANIZATION_SUFFIXES
        .contains(&text)
        .then_some(idx)
}

fn is_name_token(token: &Token) -> bool {
    is_word(&token.text)
        && matches!(token.tag, "NN" | "NNS" | "NNP" | "JJ")
        && !lexicon::ORGANIZATION_SUFFIXES.contains(&token.text.as_str())
}

fn is_institution_head(word: &str) -> bool {
    matches!(word, "university" | "institute" | "college" | "school" | "academy")
}

/// Extend an institution name over a trailing "of <name> [<name>]".
fn extend_with_of(tokens: &[Token], idx: usize) -> usize {
    if !is_institution_head(&tokens[idx].text) {
        return idx;
    }
    match tokens.get(idx + 1) {
        Some(of) if of.text == "of" => {}
        _ => return idx,
    }

    let mut end = idx + 1;
    for (offset, token) in tokens.iter().enumerate().skip(idx + 2).take(2) {
        if is_name_token(token) {
            end = offset;
        } else {
            break;
        }
    }

    if end == idx + 1 {
        idx
    } else {
        end
    }
}
