use crate::support::*;
use assert_json_diff::assert_json_eq;
use mockito::{Matcher, Server};
use onemap_client::prelude::*;
use serde_json::json;

#[tokio::test]
async fn test_age_query_for_bedok() {
    let mut server = Server::new_async().await;
    let login = mock_login(&mut server, 1).await;
    let body = json!([{"planning_area": "Bedok", "year": 2020, "age_0_4": 10000}]);
    let stats = server
        .mock("GET", "/privateapi/popapi/getPopulationAgeGroup")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("token".into(), TOKEN.into()),
            Matcher::UrlEncoded("year".into(), "2020".into()),
            Matcher::UrlEncoded("planningArea".into(), "Bedok".into()),
        ]))
        .with_status(200)
        .with_body(body.to_string())
        .create_async()
        .await;

    let client = test_client(&server);
    let result = client
        .get_population_data(PopulationDataType::Age, 2020, "Bedok")
        .await
        .unwrap();
    assert_json_eq!(result, body);

    login.assert_async().await;
    stats.assert_async().await;
}

#[tokio::test]
async fn test_query_by_name_resolves_endpoint() {
    let mut server = Server::new_async().await;
    let login = mock_login(&mut server, 1).await;
    let stats = server
        .mock("GET", "/privateapi/popapi/getTypeOfDwellingHousehold")
        .match_query(private_query(&[("year", "2015"), ("planningArea", "Tampines")]))
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;

    let client = test_client(&server);
    client
        .population()
        .query_by_name("dwelling_type_household", 2015, "Tampines")
        .await
        .unwrap();

    login.assert_async().await;
    stats.assert_async().await;
}

#[tokio::test]
async fn test_unsupported_data_type_makes_no_request() {
    let mut server = Server::new_async().await;
    let login = mock_login(&mut server, 0).await;
    let any = mock_any_get(&mut server).await;

    let client = test_client(&server);
    let err = client
        .population()
        .query_by_name("salary", 2020, "Bedok")
        .await
        .unwrap_err();

    match err {
        AppError::Validation(msg) => {
            assert!(msg.contains("salary"));
            assert!(msg.contains("economic"));
            assert!(msg.contains("dwelling_type_population"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
    login.assert_async().await;
    any.assert_async().await;
}

#[tokio::test]
async fn test_empty_planning_area_makes_no_request() {
    let mut server = Server::new_async().await;
    let login = mock_login(&mut server, 0).await;
    let any = mock_any_get(&mut server).await;

    let client = test_client(&server);
    let err = client
        .get_population_data(PopulationDataType::Religion, 2020, " ")
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Validation(_)));
    login.assert_async().await;
    any.assert_async().await;
}

#[tokio::test]
async fn test_gender_breakdown() {
    let mut server = Server::new_async().await;
    let login = mock_login(&mut server, 1).await;
    let stats = server
        .mock("GET", "/privateapi/popapi/getMaritalStatus")
        .match_query(private_query(&[
            ("year", "2020"),
            ("planningArea", "Bedok"),
            ("gender", "female"),
        ]))
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;

    let client = test_client(&server);
    client
        .get_population_by_gender(PopulationDataType::Marital, 2020, "Bedok", Some(Gender::Female))
        .await
        .unwrap();

    login.assert_async().await;
    stats.assert_async().await;
}

#[tokio::test]
async fn test_gender_omitted_when_none() {
    let mut server = Server::new_async().await;
    let login = mock_login(&mut server, 1).await;
    let stats = server
        .mock("GET", "/privateapi/popapi/getEconomicStatus")
        .match_query(Matcher::Regex(format!(
            "^token={TOKEN}&year=2020&planningArea=Bedok$"
        )))
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;

    let client = test_client(&server);
    client
        .get_population_by_gender(PopulationDataType::Economic, 2020, "Bedok", None)
        .await
        .unwrap();

    login.assert_async().await;
    stats.assert_async().await;
}

#[tokio::test]
async fn test_gender_on_undocumented_type_is_still_sent() {
    let mut server = Server::new_async().await;
    let login = mock_login(&mut server, 1).await;
    let stats = server
        .mock("GET", "/privateapi/popapi/getReligion")
        .match_query(private_query(&[("gender", "male")]))
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;

    let client = test_client(&server);
    client
        .get_population_by_gender(PopulationDataType::Religion, 2020, "Bedok", Some(Gender::Male))
        .await
        .unwrap();

    login.assert_async().await;
    stats.assert_async().await;
}
