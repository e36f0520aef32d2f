use crate::common::create_test_client;
use onemap_client::prelude::*;

#[tokio::test]
#[ignore]
async fn test_planning_area_names() {
    let client = create_test_client().await;
    let names = client.get_all_planning_areas(None, true).await.unwrap();
    assert!(names.as_array().is_some_and(|areas| !areas.is_empty()));
}

#[tokio::test]
#[ignore]
async fn test_age_groups_for_bedok() {
    let client = create_test_client().await;
    let result = client
        .get_population_data(PopulationDataType::Age, 2020, "Bedok")
        .await
        .unwrap();
    assert!(!result.is_null());
}
