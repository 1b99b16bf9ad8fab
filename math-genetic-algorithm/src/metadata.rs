//! Tests for metadata-driven optimization examples
