//! Rule table data shape and compiled matcher.

use crate::error::RuleTableError;
use crate::model::classification::{ClassificationResult, RuleMatch};
use regex::Regex;
use serde::{Deserialize, Serialize};

/// How a keyword is located inside the case-folded text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    /// Plain substring containment (`"exam"` matches `"examination"`).
    #[default]
    Substring,
    /// Keyword must be bounded by non-word characters or the text edges.
    Word,
}

/// One ordered rule: any keyword hit yields `category`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordRule<C> {
    pub category: C,
    pub keywords: Vec<String>,
}

impl<C> KeywordRule<C> {
    pub fn new(category: C, keywords: &[&str]) -> Self {
        Self {
            category,
            keywords: keywords.iter().map(|value| value.to_string()).collect(),
        }
    }
}

/// Declarative rule table, loadable from config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleTable<C> {
    #[serde(default)]
    pub match_mode: MatchMode,
    pub rules: Vec<KeywordRule<C>>,
    pub fallback: C,
}

impl<C: Clone> RuleTable<C> {
    pub fn new(rules: Vec<KeywordRule<C>>, fallback: C) -> Self {
        Self {
            match_mode: MatchMode::Substring,
            rules,
            fallback,
        }
    }

    pub fn with_match_mode(mut self, match_mode: MatchMode) -> Self {
        self.match_mode = match_mode;
        self
    }

    /// Validates the table and builds its matcher.
    ///
    /// # Errors
    /// - `EmptyKeywords` when a rule has no keywords.
    /// - `BlankKeyword` when a keyword is blank after trim.
    /// - `InvalidPattern` when a whole-word matcher cannot be built.
    pub fn compile(&self) -> Result<CompiledRules<C>, RuleTableError> {
        let mut rules = Vec::with_capacity(self.rules.len());
        for (rule_index, rule) in self.rules.iter().enumerate() {
            if rule.keywords.is_empty() {
                return Err(RuleTableError::EmptyKeywords { rule_index });
            }
            let mut keywords = Vec::with_capacity(rule.keywords.len());
            for raw in &rule.keywords {
                let text = raw.trim().to_lowercase();
                if text.is_empty() {
                    return Err(RuleTableError::BlankKeyword { rule_index });
                }
                let word = match self.match_mode {
                    MatchMode::Substring => None,
                    MatchMode::Word => Some(word_pattern(&text)?),
                };
                keywords.push(CompiledKeyword { text, word });
            }
            rules.push(CompiledRule {
                category: rule.category.clone(),
                keywords,
            });
        }

        Ok(CompiledRules {
            match_mode: self.match_mode,
            rules,
            fallback: self.fallback.clone(),
        })
    }
}

fn word_pattern(keyword: &str) -> Result<Regex, RuleTableError> {
    // `\b` never matches beside a non-word edge such as the `+` in `c++`.
    Regex::new(&format!(r"(?:^|\W){}(?:\W|$)", regex::escape(keyword))).map_err(|err| {
        RuleTableError::InvalidPattern {
            keyword: keyword.to_string(),
            message: err.to_string(),
        }
    })
}

#[derive(Debug, Clone)]
struct CompiledKeyword {
    text: String,
    word: Option<Regex>,
}

impl CompiledKeyword {
    fn is_in(&self, folded: &str) -> bool {
        match &self.word {
            Some(pattern) => pattern.is_match(folded),
            None => folded.contains(self.text.as_str()),
        }
    }
}

#[derive(Debug, Clone)]
struct CompiledRule<C> {
    category: C,
    keywords: Vec<CompiledKeyword>,
}

/// Validated, ready-to-evaluate rule table.
#[derive(Debug, Clone)]
pub struct CompiledRules<C> {
    match_mode: MatchMode,
    rules: Vec<CompiledRule<C>>,
    fallback: C,
}

impl<C: Clone> CompiledRules<C> {
    /// Classifies `text` and reports which rule fired.
    pub fn classify(&self, text: &str) -> ClassificationResult<C> {
        match self.first_hit(text) {
            Some((rule_index, rule, keyword)) => ClassificationResult {
                category: rule.category.clone(),
                matched: Some(RuleMatch {
                    rule_index,
                    keyword: keyword.to_string(),
                }),
            },
            None => ClassificationResult {
                category: self.fallback.clone(),
                matched: None,
            },
        }
    }
}

impl<C> CompiledRules<C> {
    /// Returns the winning category by reference, without building a result.
    pub fn resolve(&self, text: &str) -> &C {
        self.first_hit(text)
            .map(|(_, rule, _)| &rule.category)
            .unwrap_or(&self.fallback)
    }

    pub fn fallback(&self) -> &C {
        &self.fallback
    }

    pub fn match_mode(&self) -> MatchMode {
        self.match_mode
    }

    /// Categories in evaluation order, fallback excluded.
    pub fn categories(&self) -> impl Iterator<Item = &C> {
        self.rules.iter().map(|rule| &rule.category)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    fn first_hit(&self, text: &str) -> Option<(usize, &CompiledRule<C>, &str)> {
        let folded = text.to_lowercase();
        self.rules.iter().enumerate().find_map(|(index, rule)| {
            rule.keywords
                .iter()
                .find(|keyword| keyword.is_in(&folded))
                .map(|keyword| (index, rule, keyword.text.as_str()))
        })
    }
}
