//! Client-side search filtering
//!
//! Pure functions over record slices. Filtering never mutates the loaded
//! rows; the table renders from the filtered view while the state keeps
//! the full list, so clearing the query restores everything.
//!
//! Matching is case-insensitive and diacritic-insensitive: "Cafe" finds
//! "Café". Only fields the schema marks searchable are inspected.

use crate::entity::EntitySchema;
use crate::record::EntityRecord;

/// Fold a string for search comparison
///
/// Lowercases and strips the Latin-1/Latin Extended-A diacritics that show
/// up in menu and brand names. Unknown characters pass through unchanged.
pub fn fold_for_search(input: &str) -> String {
    input
        .chars()
        .flat_map(|c| c.to_lowercase())
        .map(|c| match c {
            'à'..='å' | 'ā' | 'ă' | 'ą' => 'a',
            'ç' | 'ć' | 'ĉ' | 'ċ' | 'č' => 'c',
            'è'..='ë' | 'ē' | 'ĕ' | 'ė' | 'ę' | 'ě' => 'e',
            'ì'..='ï' | 'ĩ' | 'ī' | 'ĭ' | 'į' | 'ı' => 'i',
            'ñ' | 'ń' | 'ņ' | 'ň' => 'n',
            'ò'..='ö' | 'ø' | 'ō' | 'ŏ' | 'ő' => 'o',
            'ù'..='ü' | 'ũ' | 'ū' | 'ŭ' | 'ů' | 'ű' | 'ų' => 'u',
            'ý' | 'ÿ' => 'y',
            'ś' | 'ŝ' | 'ş' | 'š' => 's',
            'ź' | 'ż' | 'ž' => 'z',
            other => other,
        })
        .collect()
}

/// Check whether one record matches a search query
///
/// An empty or whitespace-only query matches everything.
pub fn record_matches(schema: &EntitySchema, record: &EntityRecord, query: &str) -> bool {
    let needle = fold_for_search(query.trim());
    if needle.is_empty() {
        return true;
    }
    schema.searchable_fields().any(|field| {
        record
            .get_str(&field.name)
            .map(|value| fold_for_search(&value).contains(&needle))
            .unwrap_or(false)
    })
}

/// Filter records by query, preserving order
///
/// Returns owned clones of the matching rows; the input slice is untouched.
pub fn filter_records(
    schema: &EntitySchema,
    records: &[EntityRecord],
    query: &str,
) -> Vec<EntityRecord> {
    records
        .iter()
        .filter(|record| record_matches(schema, record, query))
        .cloned()
        .collect()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::{EntityKind, schema};
    use pretty_assertions::assert_eq;

    fn sample_products() -> Vec<EntityRecord> {
        vec![
            EntityRecord::from_pairs([("Id", "1"), ("Name", "Café Latte"), ("Brand", "Acme")]),
            EntityRecord::from_pairs([("Id", "2"), ("Name", "Espresso"), ("Brand", "Bonn")]),
            EntityRecord::from_pairs([("Id", "3"), ("Name", "Flat White"), ("Brand", "Acme")]),
        ]
    }

    #[test]
    fn test_fold_strips_diacritics_and_case() {
        assert_eq!(fold_for_search("Café"), "cafe");
        assert_eq!(fold_for_search("CRÈME BRÛLÉE"), "creme brulee");
        assert_eq!(fold_for_search("plain"), "plain");
    }

    #[test]
    fn test_query_matches_across_diacritics() {
        let product_schema = schema(EntityKind::Product);
        let products = sample_products();

        let hits = filter_records(&product_schema, &products, "cafe");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].get_str("Name"), Some("Café Latte".to_string()));

        // And the other direction
        let hits = filter_records(&product_schema, &products, "Café");
        assert_eq!(hits.len(), 1);
    }

    #[test]
    fn test_empty_query_matches_everything() {
        let product_schema = schema(EntityKind::Product);
        let products = sample_products();
        assert_eq!(filter_records(&product_schema, &products, "").len(), 3);
        assert_eq!(filter_records(&product_schema, &products, "   ").len(), 3);
    }

    #[test]
    fn test_only_searchable_fields_are_inspected() {
        let brand_schema = schema(EntityKind::Brand);
        let brands = vec![EntityRecord::from_pairs([
            ("ID", "1"),
            ("Brand Name", "Acme"),
            ("Logo", "https://example.com/secret-path.png"),
        ])];
        // Logo is not searchable
        assert!(filter_records(&brand_schema, &brands, "secret-path").is_empty());
        assert_eq!(filter_records(&brand_schema, &brands, "acme").len(), 1);
    }

    #[test]
    fn test_filtering_does_not_mutate_input() {
        let product_schema = schema(EntityKind::Product);
        let products = sample_products();
        let before = products.clone();

        let _ = filter_records(&product_schema, &products, "espresso");
        let _ = filter_records(&product_schema, &products, "no such thing");

        assert_eq!(products, before);
    }

    #[test]
    fn test_product_id_is_searchable() {
        let product_schema = schema(EntityKind::Product);
        let products = sample_products();
        let hits = filter_records(&product_schema, &products, "2");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].get_str("Name"), Some("Espresso".to_string()));
    }
}
