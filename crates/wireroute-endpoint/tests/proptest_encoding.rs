// crates/wireroute-endpoint/tests/proptest_encoding.rs
// ============================================================================
// Module: Encoding Property-Based Tests
// Description: Property tests for query encoding round trips.
// Purpose: Detect value corruption across wide input ranges.
// ============================================================================

//! Property-based tests for endpoint query encoding invariants.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only assertions and helpers are permitted."
)]

use std::collections::BTreeMap;

use proptest::prelude::*;
use url::form_urlencoded;
use wireroute_endpoint::EndpointParams;

/// Strategy producing property keys valid for unencoded query transport.
fn key_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z][a-zA-Z0-9._-]{0,15}"
}

proptest! {
    #[test]
    fn arbitrary_values_survive_render_and_parse(
        pairs in prop::collection::btree_map(key_strategy(), ".*", 0 .. 8)
    ) {
        let mut params = EndpointParams::new();
        params.url("segment");
        for (key, value) in &pairs {
            params.property(key.as_str(), value.as_str());
        }
        let uri = params.to_uri("wire").map_err(|err| {
            TestCaseError::fail(format!("assembly failed: {err}"))
        })?;

        let decoded: BTreeMap<String, String> = match uri.encoded_query() {
            Some(encoded) => form_urlencoded::parse(encoded.as_bytes())
                .map(|(key, value)| (key.into_owned(), value.into_owned()))
                .collect(),
            None => BTreeMap::new(),
        };
        prop_assert_eq!(decoded, pairs);
    }

    #[test]
    fn rendering_is_deterministic(
        pairs in prop::collection::vec((key_strategy(), ".*"), 0 .. 8)
    ) {
        let mut forward = EndpointParams::new();
        forward.url("segment");
        for (key, value) in &pairs {
            forward.property(key.as_str(), value.as_str());
        }

        let mut reverse = EndpointParams::new();
        reverse.url("segment");
        for (key, value) in pairs.iter().rev() {
            reverse.property(key.as_str(), value.as_str());
        }

        let forward_uri = forward.to_uri("wire").map_err(|err| {
            TestCaseError::fail(format!("assembly failed: {err}"))
        })?;
        let reverse_uri = reverse.to_uri("wire").map_err(|err| {
            TestCaseError::fail(format!("assembly failed: {err}"))
        })?;
        let forward_keys: Vec<&str> =
            forward_uri.query_pairs().iter().map(|(key, _)| key.as_str()).collect();
        let reverse_keys: Vec<&str> =
            reverse_uri.query_pairs().iter().map(|(key, _)| key.as_str()).collect();
        prop_assert_eq!(forward_keys, reverse_keys);
    }
}
