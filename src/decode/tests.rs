//! Tests for the decode module

use super::*;
use crate::error::Error;
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn test_bare_list_unchanged() {
    let body = json!([{"id": 3}, {"id": 1}, {"id": 2}]);
    let shape = classify(body.clone()).unwrap();
    assert_eq!(
        shape,
        ResponseShape::BareList(body.as_array().unwrap().clone())
    );
}

#[test]
fn test_empty_bare_list() {
    assert_eq!(
        classify(json!([])).unwrap(),
        ResponseShape::BareList(vec![])
    );
}

#[test]
fn test_paginated_envelope() {
    let body = json!({
        "num_pages": 3,
        "page": 1,
        "num_results": 450,
        "results": [{"id": 1}, {"id": 2}]
    });

    match classify(body).unwrap() {
        ResponseShape::Paginated(envelope) => {
            assert_eq!(envelope.num_pages, 3);
            assert_eq!(envelope.page, 1);
            assert_eq!(envelope.num_results, 450);
            assert_eq!(envelope.results.len(), 2);
            assert!(!envelope.is_single_page());
        }
        other => panic!("Expected Paginated, got {other:?}"),
    }
}

#[test]
fn test_paginated_envelope_zero_pages() {
    let body = json!({"num_pages": 0, "page": 1, "num_results": 0, "results": []});
    match classify(body).unwrap() {
        ResponseShape::Paginated(envelope) => assert!(envelope.is_single_page()),
        other => panic!("Expected Paginated, got {other:?}"),
    }
}

#[test]
fn test_paginated_envelope_without_num_results() {
    let body = json!({"num_pages": 1, "page": 1, "results": [1, 2]});
    match classify(body).unwrap() {
        ResponseShape::Paginated(envelope) => assert_eq!(envelope.num_results, 0),
        other => panic!("Expected Paginated, got {other:?}"),
    }
}

#[test]
fn test_malformed_envelope_is_unexpected_shape() {
    let body = json!({"num_pages": "three", "page": 1, "results": []});
    let err = classify(body).unwrap_err();
    match err {
        Error::UnexpectedResponseShape { body } => assert!(body.contains("three")),
        other => panic!("Expected UnexpectedResponseShape, got {other:?}"),
    }
}

#[test]
fn test_single_entity_unwrapped() {
    let body = json!({
        "export_version": "1.0",
        "assessment": {"assessment_id": 42, "title": "Unit 1"}
    });
    assert_eq!(
        classify(body).unwrap(),
        ResponseShape::SingleEntity(json!({"assessment_id": 42, "title": "Unit 1"}))
    );
}

#[test]
fn test_assessment_without_export_version_is_unexpected() {
    let body = json!({"assessment": {"assessment_id": 42}});
    assert!(matches!(
        classify(body),
        Err(Error::UnexpectedResponseShape { .. })
    ));
}

#[test]
fn test_results_without_num_pages_is_unexpected() {
    let body = json!({"results": []});
    assert!(matches!(
        classify(body),
        Err(Error::UnexpectedResponseShape { .. })
    ));
}

#[test]
fn test_scalar_is_unexpected_with_raw_body() {
    match classify(json!("hello")).unwrap_err() {
        Error::UnexpectedResponseShape { body } => assert_eq!(body, "\"hello\""),
        other => panic!("Expected UnexpectedResponseShape, got {other:?}"),
    }
}

#[test]
fn test_expect_envelope() {
    let envelope =
        expect_envelope(Some(json!({"num_pages": 2, "page": 2, "results": [1]}))).unwrap();
    assert_eq!(envelope.page, 2);

    assert!(matches!(
        expect_envelope(None),
        Err(Error::UnexpectedResponseShape { .. })
    ));

    match expect_envelope(Some(json!([1, 2]))).unwrap_err() {
        Error::UnexpectedResponseShape { body } => assert!(body.contains("bare list")),
        other => panic!("Expected UnexpectedResponseShape, got {other:?}"),
    }
}
