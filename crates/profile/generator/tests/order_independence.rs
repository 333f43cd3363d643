//! Property tests: the generated table does not depend on input order.

use profile_generator::generate;
use profile_schema::{SchemaValidator, ValidatedDocument};
use proptest::prelude::*;
use serde_json::{json, Value};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// One profile entry; `base` points at an earlier index so the graph is acyclic.
fn arb_entry(index: usize) -> impl Strategy<Value = Value> {
    (
        prop::option::of(0..index.max(1)),
        1u32..8192,
        any::<bool>(),
        prop::sample::subsequence(vec!["VK_KHR_a", "VK_KHR_b", "VK_KHR_c"], 0..3),
    )
        .prop_map(move |(base, dim, clamp, exts)| {
            let mut entry = json!({
                "name": format!("VP_GEN_{}", index),
                "version": 1,
                "apiVersion": "1.3.0",
                "extensions": exts
                    .iter()
                    .map(|name| json!({ "name": name, "minVersion": 1 }))
                    .collect::<Vec<_>>(),
                "capabilities": {
                    "VkPhysicalDeviceFeatures": { "depthClamp": clamp },
                    "VkPhysicalDeviceLimits": { "maxImageDimension2D": dim }
                }
            });
            if let Some(base) = base.filter(|&b| b < index) {
                entry["inherits"] = json!({ "name": format!("VP_GEN_{}", base) });
            }
            entry
        })
}

fn arb_entries() -> impl Strategy<Value = Vec<Value>> {
    (1usize..8).prop_flat_map(|n| (0..n).map(arb_entry).collect::<Vec<_>>())
}

fn documents(entries: &[Value], split: usize) -> Vec<ValidatedDocument> {
    let validator = SchemaValidator::new().unwrap();
    let split = split.min(entries.len());
    [&entries[..split], &entries[split..]]
        .iter()
        .enumerate()
        .map(|(i, chunk)| {
            validator
                .validate_named(
                    format!("doc{}.json", i),
                    json!({ "schemaVersion": 1, "profiles": chunk }),
                )
                .unwrap()
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Property Tests
// ---------------------------------------------------------------------------

proptest! {
    /// Shuffling entries and moving them between documents never changes the table.
    #[test]
    fn table_is_independent_of_declaration_order(
        (entries, shuffled) in arb_entries()
            .prop_flat_map(|e| (Just(e.clone()), Just(e).prop_shuffle())),
        split_a in 0usize..8,
        split_b in 0usize..8,
    ) {
        let mut forward = documents(&entries, split_a);
        let expected = generate(&forward).unwrap();

        let mut reordered = documents(&shuffled, split_b);
        reordered.reverse();
        prop_assert_eq!(&generate(&reordered).unwrap(), &expected);

        forward.reverse();
        prop_assert_eq!(&generate(&forward).unwrap(), &expected);
    }
}
