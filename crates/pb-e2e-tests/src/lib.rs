//! Test-only crate. All content lives under `tests/`.
