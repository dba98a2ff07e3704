//! End-to-end tests for docassist; see `tests/`
