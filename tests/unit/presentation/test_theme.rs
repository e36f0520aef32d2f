use onemap_client::prelude::*;
use serde_json::json;

#[test]
fn test_single_metadata_record_has_no_results() {
    let results = ThemeResults::from_response(json!({"SrchResults": [{"FeatCount": 0}]}));
    assert_eq!(results.metadata(), Some(&json!({"FeatCount": 0})));
    assert!(results.results().is_empty());
}

#[test]
fn test_non_array_results_are_left_alone() {
    let response = json!({"SrchResults": "none"});
    assert_eq!(
        ThemeResults::from_response(response.clone()),
        ThemeResults::Raw(response)
    );
}
