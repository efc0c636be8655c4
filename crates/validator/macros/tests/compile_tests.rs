//! Compile-time tests for fieldguard-macros.
//!
//! These use trybuild to check that the derive expands to code that
//! compiles against the runtime crate for the supported struct shapes.

#[test]
fn test_record_derive() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/record_pass.rs");
}

#[test]
fn test_record_derive_generics() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/record_generics_pass.rs");
}
