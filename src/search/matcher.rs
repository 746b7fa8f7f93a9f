//! Query normalization and term matching rules

use crate::types::Term;

use super::index::PreprocessedTerm;

/// Queries shorter than this (after trimming) match nothing
pub const MIN_QUERY_CHARS: usize = 3;

/// How a term satisfied a query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind<'a> {
    /// Every token occurs in the name
    Primary,
    /// Every token occurs in the full text; carries the best snippet
    Secondary(&'a str),
}

/// Strip surrounding whitespace
pub fn normalize(query: &str) -> &str {
    query.trim()
}

/// Check if a normalized query is too short to search
pub fn is_degenerate(query: &str) -> bool {
    query.chars().count() < MIN_QUERY_CHARS
}

/// Lowercase whitespace-separated tokens
pub fn tokenize(query: &str) -> Vec<String> {
    query
        .to_lowercase()
        .split_whitespace()
        .map(|s| s.to_string())
        .collect()
}

/// Check if every token is a substring of `haystack`
pub fn contains_all(haystack: &str, tokens: &[String]) -> bool {
    tokens.iter().all(|token| haystack.contains(token.as_str()))
}

/// Number of tokens found in a candidate; a copy of the term name scores 0
pub fn candidate_score(candidate: &str, name: &str, tokens: &[String]) -> usize {
    if candidate == name {
        return 0;
    }
    let lowered = candidate.to_lowercase();
    tokens
        .iter()
        .filter(|token| lowered.contains(token.as_str()))
        .count()
}

/// Synonym or definition sharing the most tokens with the query
///
/// Synonyms are considered in declaration order and the definition last;
/// the first candidate with the highest score wins.
pub fn best_snippet<'a>(term: &'a Term, tokens: &[String]) -> &'a str {
    let mut best = term.definition.as_str();
    let mut best_score = None;

    for candidate in term
        .synonym_descriptions()
        .chain(std::iter::once(term.definition.as_str()))
    {
        let score = candidate_score(candidate, &term.name, tokens);
        if best_score.map_or(true, |current| score > current) {
            best = candidate;
            best_score = Some(score);
        }
    }

    best
}

/// Classify a non-obsolete term against query tokens
pub fn classify<'a>(
    entry: &PreprocessedTerm,
    term: &'a Term,
    tokens: &[String],
) -> Option<MatchKind<'a>> {
    if contains_all(&entry.name_lower, tokens) {
        return Some(MatchKind::Primary);
    }

    if !term.synonyms.is_empty() && contains_all(&entry.full_text, tokens) {
        return Some(MatchKind::Secondary(best_snippet(term, tokens)));
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Synonym;

    fn tokens(query: &str) -> Vec<String> {
        tokenize(query)
    }

    fn weight_loss() -> Term {
        let mut term = Term::new("HP:0001824", "Weight loss");
        term.definition = "Rapid decrease in body mass.".to_string();
        term.synonyms = vec![Synonym::new("Weight loss"), Synonym::new("Weight reduction")];
        term
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let once = normalize("  truncal obesity \t");
        assert_eq!(once, "truncal obesity");
        assert_eq!(normalize(once), once);
    }

    #[test]
    fn test_degenerate_queries() {
        assert!(is_degenerate(""));
        assert!(is_degenerate("ab"));
        assert!(!is_degenerate("abc"));
        // Counted in characters, not bytes
        assert!(is_degenerate("äö"));
    }

    #[test]
    fn test_tokenize_lowercases_and_splits() {
        assert_eq!(tokens("Truncal  OBESITY"), vec!["truncal", "obesity"]);
    }

    #[test]
    fn test_candidate_equal_to_name_scores_zero() {
        let t = tokens("weight");
        assert_eq!(candidate_score("Weight loss", "Weight loss", &t), 0);
        assert_eq!(candidate_score("Weight reduction", "Weight loss", &t), 1);
    }

    #[test]
    fn test_best_snippet_tie_goes_to_first_declared() {
        // "Weight loss" is deprioritized; "Weight reduction" and the
        // definition both score 1, the synonym is declared first.
        let term = weight_loss();
        assert_eq!(best_snippet(&term, &tokens("weight rapid")), "Weight reduction");
    }

    #[test]
    fn test_best_snippet_prefers_definition_with_more_tokens() {
        let term = weight_loss();
        assert_eq!(
            best_snippet(&term, &tokens("rapid decrease")),
            "Rapid decrease in body mass."
        );
    }

    #[test]
    fn test_classify() {
        let term = weight_loss();
        let entry = PreprocessedTerm::from_term(0, &term);

        assert_eq!(classify(&entry, &term, &tokens("loss")), Some(MatchKind::Primary));
        assert_eq!(
            classify(&entry, &term, &tokens("weight rapid")),
            Some(MatchKind::Secondary("Weight reduction"))
        );
        assert_eq!(classify(&entry, &term, &tokens("height")), None);
    }

    #[test]
    fn test_secondary_requires_synonyms() {
        let mut term = Term::new("HP:0000002", "Abnormality of body height");
        term.definition = "Deviation from the norm of height.".to_string();
        let entry = PreprocessedTerm::from_term(0, &term);

        assert_eq!(classify(&entry, &term, &tokens("deviation")), None);
    }
}
