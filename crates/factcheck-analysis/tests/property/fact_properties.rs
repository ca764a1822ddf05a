use factcheck_analysis::conflicts::context_similarity;
use factcheck_analysis::facts::context_key::MAX_KEY_LEN;
use factcheck_analysis::facts::types::format_number;
use factcheck_analysis::facts::{build_context_key, normalize_currency, normalize_numeral, FactExtractor};
use proptest::prelude::*;

fn magnitude() -> impl Strategy<Value = (&'static str, f64)> {
    prop::sample::select(vec![
        ("", 1.0),
        ("k", 1_000.0),
        ("thousand", 1_000.0),
        ("M", 1_000_000.0),
        ("million", 1_000_000.0),
    ])
}

/// `$` amount of arbitrary width, with or without separators, fraction and magnitude.
fn amount() -> impl Strategy<Value = String> {
    (
        10u64..10_000_000_000,
        prop::bool::ANY,
        prop::option::of(0u32..100),
        prop::bool::ANY,
        magnitude(),
    )
        .prop_map(|(n, separated, cents, space, (suffix, _))| {
            let whole = if separated { format_number(n as f64) } else { n.to_string() };
            let fraction = cents.map(|c| format!(".{:02}", c)).unwrap_or_default();
            let gap = if space && !suffix.is_empty() { " " } else { "" };
            format!("${}{}{}{}", whole, fraction, gap, suffix)
        })
}

proptest! {
    #[test]
    fn numeral_scales_by_magnitude(n in 0u64..10_000_000, (suffix, multiplier) in magnitude()) {
        let value = normalize_numeral(&n.to_string(), Some(suffix));
        prop_assert_eq!(value, Some(n as f64 * multiplier));
    }

    #[test]
    fn separated_numeral_matches_plain(n in 0u64..1_000_000_000) {
        let separated = format_number(n as f64);
        prop_assert_eq!(normalize_numeral(&separated, None), Some(n as f64));
    }

    #[test]
    fn currency_scales_by_magnitude(
        n in 0u64..100_000,
        space in prop::bool::ANY,
        (suffix, multiplier) in magnitude(),
    ) {
        let raw = format!("${}{}{}", n, if space { " " } else { "" }, suffix);
        prop_assert_eq!(normalize_currency(&raw), Some(n as f64 * multiplier));
    }

    #[test]
    fn keys_are_masked_and_bounded(text in ".{0,200}", start in 0usize..260, len in 0usize..20) {
        let key = build_context_key(&text, start, start + len);
        prop_assert!(!key.chars().any(|c| c.is_ascii_digit()), "digit in {:?}", key);
        prop_assert!(!key.contains('$'));
        prop_assert!(key.len() <= MAX_KEY_LEN);
        prop_assert!(key.chars().all(|c| c.is_ascii_lowercase() || c == '#' || c == ' '));
        prop_assert!(!key.starts_with(' ') && !key.ends_with(' ') && !key.contains("  "));
    }

    #[test]
    fn amounts_of_any_width_share_a_key(
        prefix in "[a-z ]{20,60}",
        suffix in "[a-z ]{0,60}",
        a in amount(),
        b in amount(),
    ) {
        let extractor = FactExtractor::new(1, 1 << 20);
        let text_a = format!("{} {} raised {}", prefix, a, suffix);
        let text_b = format!("{} {} raised {}", prefix, b, suffix);

        let facts_a = extractor.extract(&text_a, "a.md");
        let facts_b = extractor.extract(&text_b, "b.md");
        prop_assert_eq!(facts_a.len(), 1, "{:?}", text_a);
        prop_assert_eq!(facts_b.len(), 1, "{:?}", text_b);
        prop_assert_eq!(facts_a[0].context_key(), facts_b[0].context_key());
    }

    #[test]
    fn similarity_is_symmetric_and_bounded(a in "[a-z# ]{0,80}", b in "[a-z# ]{0,80}") {
        let ab = context_similarity(&a, &b);
        let ba = context_similarity(&b, &a);
        prop_assert_eq!(ab, ba);
        prop_assert!((0.0..=1.0).contains(&ab));
    }

    #[test]
    fn key_is_fully_similar_to_itself(key in "[a-z]{2,8}( [a-z#]{1,8}){0,8}") {
        prop_assert_eq!(context_similarity(&key, &key), 1.0);
    }

    #[test]
    fn extracted_facts_respect_invariants(
        text in "([a-z ]{0,40}(\\$[0-9]{1,6}( million| k)?|[0-9]{1,3} (dogs|acres|vehicles))){0,6}[a-z ]{0,40}",
    ) {
        let extractor = FactExtractor::default();
        for fact in extractor.extract(&text, "doc.md") {
            prop_assert!(fact.context_key().len() >= extractor.min_context_key_len());
            prop_assert!(fact.value().is_finite() && fact.value() >= 0.0);
            prop_assert!(!fact.context_key().chars().any(|c| c.is_ascii_digit()));
            prop_assert_eq!(fact.source_document(), "doc.md");
        }
    }
}
