//! Validates a few Avengers roster entries and prints the failures.
//!
//! Run with `RUST_LOG=fieldguard=trace` to see every check the validator
//! makes, including skipped ones.

use fieldguard::prelude::*;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Record)]
struct AvengersMember {
    #[validate(required, maxLen = 50, rename = "Name")]
    name: String,
    #[validate(min = 18, max = 100, rename = "Age")]
    age: i32,
    #[validate(required, email, rename = "Email")]
    email: String,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let roster = [
        AvengersMember {
            name: "Iron Man".into(),
            age: 45,
            email: "ironman@example.com".into(),
        },
        AvengersMember {
            name: String::new(),
            age: 150,
            email: "invalid-email".into(),
        },
    ];

    for member in &roster {
        let results = validate(member);
        if all_valid(&results) {
            println!("{member:?} is valid");
            continue;
        }
        for failure in failures(&results) {
            println!("Validation Error: {}", failure.message);
        }
    }
}
