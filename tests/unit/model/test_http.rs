use crate::support::*;
use mockito::Server;
use onemap_client::model::http::parse_response;
use onemap_client::prelude::*;
use reqwest::StatusCode;

#[tokio::test]
async fn test_url_joins_base_and_path() {
    let server = Server::new_async().await;
    let client = HttpClient::new(test_config(&server)).unwrap();

    assert_eq!(
        client.url("/commonapi/search"),
        format!("{}/commonapi/search", server.url())
    );
    assert_eq!(
        client.url("commonapi/search"),
        format!("{}/commonapi/search", server.url())
    );
    assert_eq!(client.url("https://other.example/x"), "https://other.example/x");
}

#[tokio::test]
async fn test_parse_response_by_status() {
    let mut server = Server::new_async().await;
    let ok = server
        .mock("GET", "/ok")
        .with_status(200)
        .with_body(r#"{"a":1}"#)
        .create_async()
        .await;
    let missing = server
        .mock("GET", "/missing")
        .with_status(404)
        .with_body("not here")
        .create_async()
        .await;

    let response = reqwest::get(format!("{}/ok", server.url())).await.unwrap();
    assert_eq!(parse_response(response).await.unwrap()["a"], 1);

    let response = reqwest::get(format!("{}/missing", server.url())).await.unwrap();
    match parse_response(response).await.unwrap_err() {
        AppError::Api { status, body } => {
            assert_eq!(status, StatusCode::NOT_FOUND);
            assert_eq!(body, "not here");
        }
        other => panic!("unexpected error: {other:?}"),
    }

    ok.assert_async().await;
    missing.assert_async().await;
}

#[tokio::test]
async fn test_private_requests_put_the_token_first() {
    let mut server = Server::new_async().await;
    let login = mock_login(&mut server, 1).await;
    let route = server
        .mock("GET", "/private")
        .match_query(mockito::Matcher::Regex(format!("^token={TOKEN}&a=1$")))
        .match_header("authorization", format!("Bearer {TOKEN}").as_str())
        .with_status(200)
        .with_body("{}")
        .create_async()
        .await;

    let client = HttpClient::new(test_config(&server)).unwrap();
    client
        .get_with_token("/private", vec![("a", "1".to_string())])
        .await
        .unwrap();

    login.assert_async().await;
    route.assert_async().await;
}
