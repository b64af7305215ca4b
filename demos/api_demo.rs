//! Demo of the fluent assertion chain and comparison-strategy swapping.

use expectant::{expect, expect_maybe, FieldwiseEquality};
use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Serialize)]
struct Character {
    name: String,
    age: u32,
    #[serde(skip)]
    revision: u64,
}

impl PartialEq for Character {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.age == other.age && self.revision == other.revision
    }
}

fn main() {
    // Example 1: chained checks, panicking on the first failure
    println!("=== Chained Assertions Example ===");
    let port = Some(8080_u16);
    expect(&port).to_be_present().to_contain(&8080).has_value(&8080);
    println!("Chained assertions passed");

    // Example 2: non-panicking evaluation with failure classification
    println!("\n=== Evaluation Example ===");
    let result = expect(&port).evaluate_contains(&9090);
    println!(
        "evaluate_contains(9090): {}",
        if result.passed { "PASS" } else { "FAIL" }
    );
    if let (Some(kind), Some(reason)) = (result.kind, result.reason) {
        println!("  kind: {kind}");
        println!("  reason: {reason}");
    }

    // Example 3: swapping the comparison strategy mid-chain
    println!("\n=== Strategy Swap Example ===");
    let frodo = Character {
        name: "Frodo".to_string(),
        age: 33,
        revision: 1,
    };
    let frodo_clone = Character {
        name: "Frodo".to_string(),
        age: 33,
        revision: 2,
    };
    let character = Some(frodo);

    let native = expect(&character).evaluate_contains(&frodo_clone);
    println!(
        "native equality: {}",
        if native.passed { "PASS" } else { "FAIL" }
    );

    let fieldwise = expect(&character)
        .using_field_by_field_value_comparator()
        .evaluate_contains(&frodo_clone);
    println!(
        "field-by-field: {}",
        if fieldwise.passed { "PASS" } else { "FAIL" }
    );

    let ignoring_age = expect(&character)
        .using_comparison_strategy(FieldwiseEquality::new().ignoring("age"))
        .evaluate_contains(&Character {
            name: "Frodo".to_string(),
            age: 50,
            revision: 3,
        });
    println!(
        "ignoring \"age\": {}",
        if ignoring_age.passed { "PASS" } else { "FAIL" }
    );

    // Example 4: a missing container is not the same as an empty one
    println!("\n=== Missing Container Example ===");
    let mut responses: HashMap<&str, Option<u16>> = HashMap::new();
    responses.insert("GET /health", Some(200));
    responses.insert("GET /metrics", None);

    for route in ["GET /health", "GET /metrics", "GET /admin"] {
        let result = expect_maybe(responses.get(route)).evaluate_present();
        let outcome = match result.kind {
            None => "present".to_string(),
            Some(kind) => format!("failed ({kind})"),
        };
        println!("{route}: {outcome}");
    }
}
