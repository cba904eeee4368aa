//! Tests for storefront notices
