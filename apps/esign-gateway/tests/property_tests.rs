//! Property-based tests for the gateway's translation rules
//!
//! Covers the best-effort extraction of the normalized envelope response
//! and the optional-field behavior of the DocuSeal wire types.

use proptest::prelude::*;
use serde_json::json;

use esign_gateway::models::{CreateEnvelopeResponse, CreateSubmissionRequest, Submitter};

/// Plausible signing-link values
fn signing_url() -> impl Strategy<Value = String> {
    "https://[a-z]{3,10}\\.example/[a-z0-9]{1,12}"
}

fn email() -> impl Strategy<Value = String> {
    "[a-z]{1,10}@[a-z]{1,8}\\.com"
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // ============================================================
    // Envelope response extraction
    // ============================================================

    #[test]
    fn string_id_is_always_extracted(id in "[a-zA-Z0-9_-]{1,24}") {
        let value = json!({ "id": id.clone() });
        let resp = CreateEnvelopeResponse::from_upstream(&value);

        prop_assert_eq!(resp.envelope_id, id);
        prop_assert_eq!(resp.signing_url, "");
    }

    #[test]
    fn non_string_id_yields_empty(id in any::<i64>(), url in signing_url()) {
        let value = json!({ "id": id, "url": url.clone() });
        let resp = CreateEnvelopeResponse::from_upstream(&value);

        prop_assert_eq!(resp.envelope_id, "");
        prop_assert_eq!(resp.signing_url, url);
    }

    #[test]
    fn top_level_url_wins_over_nested(url in signing_url(), nested in signing_url()) {
        let value = json!({
            "id": "env",
            "url": url.clone(),
            "data": { "url": nested }
        });
        let resp = CreateEnvelopeResponse::from_upstream(&value);

        prop_assert_eq!(resp.signing_url, url);
    }

    #[test]
    fn nested_url_used_when_top_level_missing(nested in signing_url()) {
        let value = json!({
            "id": "env",
            "data": { "url": nested.clone() }
        });
        let resp = CreateEnvelopeResponse::from_upstream(&value);

        prop_assert_eq!(resp.signing_url, nested);
    }

    #[test]
    fn empty_top_level_url_falls_back(nested in signing_url()) {
        let value = json!({
            "id": "env",
            "url": "",
            "data": { "url": nested.clone() }
        });
        let resp = CreateEnvelopeResponse::from_upstream(&value);

        prop_assert_eq!(resp.signing_url, nested);
    }

    #[test]
    fn extraction_never_fails(id in any::<i64>(), flag in any::<bool>()) {
        // Whatever the upstream shape, extraction produces a response
        let value = json!({ "id": id, "url": flag, "data": id });
        let resp = CreateEnvelopeResponse::from_upstream(&value);

        prop_assert_eq!(resp.envelope_id, "");
        prop_assert_eq!(resp.signing_url, "");
    }

    // ============================================================
    // DocuSeal wire types
    // ============================================================

    #[test]
    fn submitter_role_key_tracks_presence(
        email in email(),
        role in proptest::option::of("[A-Za-z]{1,12}")
    ) {
        let submitter = Submitter { email, role: role.clone() };
        let encoded = serde_json::to_value(&submitter).unwrap();

        match role {
            Some(role) => prop_assert_eq!(encoded["role"].as_str(), Some(role.as_str())),
            None => prop_assert!(encoded.get("role").is_none()),
        }
    }

    #[test]
    fn submission_fields_survive_the_relay_serialization(
        template_id in any::<i64>(),
        emails in proptest::collection::vec(email(), 0..5)
    ) {
        let submitters = emails
            .iter()
            .map(|email| Submitter { email: email.clone(), role: None })
            .collect();
        let req = CreateSubmissionRequest { template_id, submitters };

        // The handler re-serializes the decoded request as the upstream payload
        let payload = serde_json::to_vec(&req).unwrap();
        let decoded: CreateSubmissionRequest = serde_json::from_slice(&payload).unwrap();

        prop_assert_eq!(decoded.template_id, template_id);
        prop_assert_eq!(
            decoded.submitters.iter().map(|s| s.email.clone()).collect::<Vec<_>>(),
            emails
        );
    }
}
