use crate::common::create_test_client;
use onemap_client::prelude::*;

#[tokio::test]
#[ignore]
async fn test_kindergartens_are_available() {
    let client = create_test_client().await;
    let themes = client.get_list_of_available_themes().await.unwrap();
    assert!(themes.iter().any(|theme| theme == "kindergartens"));

    let bbox = BoundingBox::new((1.291789, 103.7796), (1.3290461, 103.82));
    let results = client.retrieve_theme("kindergartens", Some(bbox)).await.unwrap();
    assert!(results.metadata().is_some());
}
