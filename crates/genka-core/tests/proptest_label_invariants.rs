//! Property-based invariant tests for the label layout engine.
//!
//! Verifies:
//! 1. wrapping never loses, reorders or splits an ingredient name
//! 2. every wrapped line fits, unless it is a single oversize name
//! 3. no wrapped line ends with the separator or is empty
//! 4. fragment baselines strictly descend and share the text column
//! 5. layout is deterministic for a fixed date

use chrono::NaiveDate;
use genka_core::label::{wrap_ingredients, FontChoice, LabelLayoutEngine, MonospaceMetrics, TextMeasure};
use genka_core::types::LabelRequest;
use proptest::prelude::*;

const SEPARATOR: &str = "、";
const SIZE: f64 = 8.0;

// ── Strategy helpers ──────────────────────────────────────────────────

fn arb_name() -> impl Strategy<Value = String> {
    prop_oneof![
        "[A-Za-z]{1,14}",
        "[あ-ん]{1,8}",
        "[一-龥]{1,6}",
    ]
}

fn arb_names() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(arb_name(), 1..12)
}

// ── Properties ────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn wrap_preserves_names(names in arb_names(), available in 5.0f64..60.0) {
        let metrics = MonospaceMetrics::default();
        let lines = wrap_ingredients(&names, available, SIZE, &metrics);
        prop_assert_eq!(lines.join(SEPARATOR), names.join(SEPARATOR));
    }

    #[test]
    fn wrapped_lines_fit_or_hold_one_name(names in arb_names(), available in 5.0f64..60.0) {
        let metrics = MonospaceMetrics::default();
        for line in wrap_ingredients(&names, available, SIZE, &metrics) {
            prop_assert!(!line.is_empty());
            prop_assert!(!line.ends_with(SEPARATOR));
            let fits = metrics.text_width(&line, SIZE) < available;
            let single = !line.contains(SEPARATOR);
            prop_assert!(fits || single, "line {:?} overflows {}", line, available);
        }
    }

    #[test]
    fn baselines_descend(names in arb_names(), price in 0.0f64..100_000.0, include_price: bool) {
        let engine = LabelLayoutEngine::new(MonospaceMetrics::default(), FontChoice::fallback());
        let request = LabelRequest {
            product_name: "テスト".to_string(),
            ingredient_names: names,
            price: Some(price),
            manufacture_date: None,
        };
        let layout = engine.layout_on(&request, include_price, NaiveDate::from_ymd_opt(2024, 1, 1));

        let text_x = engine.geometry().text_x();
        prop_assert!(layout.fragments.iter().all(|f| f.x == text_x));
        for pair in layout.fragments.windows(2) {
            prop_assert!(pair[1].y < pair[0].y);
        }
    }

    #[test]
    fn layout_is_deterministic(names in arb_names(), include_price: bool) {
        let engine = LabelLayoutEngine::new(MonospaceMetrics::default(), FontChoice::fallback());
        let request = LabelRequest {
            product_name: "Scone".to_string(),
            ingredient_names: names,
            price: Some(350.0),
            manufacture_date: NaiveDate::from_ymd_opt(2024, 5, 1),
        };
        prop_assert_eq!(
            engine.layout(&request, include_price, true),
            engine.layout(&request, include_price, true)
        );
    }
}
