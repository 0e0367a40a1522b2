use crate::models::CatalogItem;
use crate::synonyms::ExpandedQuery;
use crate::text;

const NAME_TOKEN_WEIGHT: i32 = 3;
const DESCRIPTION_TOKEN_WEIGHT: i32 = 1;
const FULL_QUERY_BONUS: i32 = 10;
const MATCH_THRESHOLD: i32 = 2;

/// Scores one catalog item against the expanded token set and the raw
/// normalized query.
pub fn score_item(query: &ExpandedQuery, item: &CatalogItem) -> i32 {
    let name = text::normalize(&item.name);
    let description = text::normalize(&item.description);

    let mut score = 0;
    for token in &query.tokens {
        if name.contains(token.as_str()) {
            score += NAME_TOKEN_WEIGHT;
        }
        if description.contains(token.as_str()) {
            score += DESCRIPTION_TOKEN_WEIGHT;
        }
    }

    if !query.normalized.is_empty() && name.contains(query.normalized.as_str()) {
        score += FULL_QUERY_BONUS;
    }

    score
}

/// Returns the highest-scoring catalog item, or None when nothing clears the
/// threshold. Earlier items win ties since later ones only replace on strict
/// improvement.
pub fn find_best_match<'a>(
    query: &ExpandedQuery,
    catalog: &'a [CatalogItem],
) -> Option<&'a CatalogItem> {
    let mut best_item = None;
    let mut best_score = 0;

    for item in catalog {
        let score = score_item(query, item);
        if score > best_score {
            best_score = score;
            best_item = Some(item);
        }
    }

    if best_score >= MATCH_THRESHOLD {
        best_item
    } else {
        None
    }
}
