use crate::support::*;
use mockito::{Matcher, Server};
use onemap_client::prelude::*;
use reqwest::StatusCode;
use serde_json::json;
use std::io::Write;
use std::sync::Arc;

#[tokio::test]
async fn test_first_request_logs_in_once() {
    let mut server = Server::new_async().await;
    let login = mock_login(&mut server, 1).await;
    let search = server
        .mock("GET", "/commonapi/search")
        .match_query(Matcher::Any)
        .match_header("authorization", format!("Bearer {TOKEN}").as_str())
        .with_status(200)
        .with_body(r#"{"found":0,"totalNumPages":0,"pageNum":1,"results":[]}"#)
        .expect(2)
        .create_async()
        .await;

    let client = test_client(&server);
    assert!(!client.is_authenticated().await);

    client.search(&SearchRequest::new("revenue house")).await.unwrap();
    assert!(client.is_authenticated().await);
    assert_eq!(client.token().await.as_deref(), Some(TOKEN));

    client.search(&SearchRequest::new("revenue house")).await.unwrap();

    login.assert_async().await;
    search.assert_async().await;
}

#[tokio::test]
async fn test_services_share_one_session() {
    let mut server = Server::new_async().await;
    let login = mock_login(&mut server, 1).await;
    let names = server
        .mock("GET", "/privateapi/popapi/getPlanningareaNames")
        .match_query(private_query(&[("year", "2014")]))
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;
    let themes = server
        .mock("GET", "/privateapi/themesvc/getAllThemesInfo")
        .match_query(private_query(&[("moreInfo", "N")]))
        .with_status(200)
        .with_body(r#"{"Theme_Names":[]}"#)
        .create_async()
        .await;

    let client = test_client(&server);
    client.planning_areas().get_all_planning_areas(None, true).await.unwrap();
    client.themes().get_all_themes_info(false).await.unwrap();

    login.assert_async().await;
    names.assert_async().await;
    themes.assert_async().await;
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_first_use_logs_in_once() {
    let mut server = Server::new_async().await;
    let login = mock_login(&mut server, 1).await;
    let areas = server
        .mock("GET", "/privateapi/popapi/getPlanningarea")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"[{"pln_area_n":"QUEENSTOWN"}]"#)
        .expect(8)
        .create_async()
        .await;

    let client = Arc::new(test_client(&server));
    let mut handles = Vec::new();
    for _ in 0..8 {
        let client = client.clone();
        handles.push(tokio::spawn(async move {
            client.find_planning_area(1.3, 103.8, Some(2019)).await
        }));
    }
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    login.assert_async().await;
    areas.assert_async().await;
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_failed_login_is_shared() {
    let mut server = Server::new_async().await;
    let login = server
        .mock("POST", LOGIN_PATH)
        .with_status(401)
        .with_chunked_body(|w| {
            // Keep the attempt in flight until every task is queued on it
            std::thread::sleep(std::time::Duration::from_millis(200));
            w.write_all(br#"{"error":"Invalid credentials"}"#)
        })
        .expect(1)
        .create_async()
        .await;
    let areas = server
        .mock("GET", "/privateapi/popapi/getPlanningarea")
        .match_query(Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let client = Arc::new(test_client(&server));
    let mut handles = Vec::new();
    for _ in 0..8 {
        let client = client.clone();
        handles.push(tokio::spawn(async move {
            client.find_planning_area(1.3, 103.8, Some(2019)).await
        }));
    }
    for handle in handles {
        let err = handle.await.unwrap().unwrap_err();
        assert!(matches!(
            err,
            AppError::Authentication { status, .. } if status == StatusCode::UNAUTHORIZED
        ));
    }

    assert!(!client.is_authenticated().await);
    login.assert_async().await;
    areas.assert_async().await;
}

#[tokio::test]
async fn test_later_caller_retries_after_failed_login() {
    let mut server = Server::new_async().await;
    let login = server
        .mock("POST", LOGIN_PATH)
        .with_status(401)
        .with_body(r#"{"error":"Invalid credentials"}"#)
        .expect(2)
        .create_async()
        .await;

    let client = test_client(&server);
    assert!(client.authenticate().await.is_err());
    assert!(client.authenticate().await.is_err());

    login.assert_async().await;
}

#[tokio::test]
async fn test_authenticated_state_is_kept() {
    let mut server = Server::new_async().await;
    let login = mock_login(&mut server, 1).await;

    let client = test_client(&server);
    client.authenticate().await.unwrap();
    let token = client.token().await;

    for _ in 0..3 {
        client.authenticate().await.unwrap();
        assert!(client.is_authenticated().await);
        assert_eq!(client.token().await, token);
    }
    login.assert_async().await;
}

#[tokio::test]
async fn test_eager_client_logs_in_on_construction() {
    let mut server = Server::new_async().await;
    let login = mock_login(&mut server, 1).await;

    let client = Client::new(test_config(&server)).await.unwrap();
    assert!(client.is_authenticated().await);

    // Already authenticated, nothing to do
    client.authenticate().await.unwrap();
    login.assert_async().await;
}

#[tokio::test]
async fn test_missing_credentials_never_reach_the_network() {
    let mut server = Server::new_async().await;
    let login = mock_login(&mut server, 0).await;
    let any = mock_any_get(&mut server).await;

    let config = Config::with_credentials("user@example.com", "").base_url(&server.url());
    let client = Client::new_lazy(config).unwrap();
    let err = client.search(&SearchRequest::new("a")).await.unwrap_err();

    assert!(matches!(err, AppError::MissingCredentials));
    login.assert_async().await;
    any.assert_async().await;
}

#[tokio::test]
async fn test_rejected_login_is_an_authentication_error() {
    let mut server = Server::new_async().await;
    let login = server
        .mock("POST", LOGIN_PATH)
        .with_status(401)
        .with_body(r#"{"error":"Invalid credentials"}"#)
        .create_async()
        .await;

    let client = test_client(&server);
    let err = client.authenticate().await.unwrap_err();

    match err {
        AppError::Authentication { status, body } => {
            assert_eq!(status, StatusCode::UNAUTHORIZED);
            assert!(body.contains("Invalid credentials"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(!client.is_authenticated().await);
    login.assert_async().await;
}

#[tokio::test]
async fn test_login_without_token_is_an_authentication_error() {
    let mut server = Server::new_async().await;
    let login = server
        .mock("POST", LOGIN_PATH)
        .with_status(200)
        .with_body(json!({"expiry_timestamp": "1760000000"}).to_string())
        .create_async()
        .await;
    let any = mock_any_get(&mut server).await;

    let client = test_client(&server);
    let err = client
        .reverse_geocode(&ReverseGeocodeRequest::from_latlng((1.3, 103.8)))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        AppError::Authentication { status, .. } if status == StatusCode::OK
    ));
    assert!(!client.is_authenticated().await);
    login.assert_async().await;
    any.assert_async().await;
}

#[tokio::test]
async fn test_login_response_is_cached_to_file() {
    let mut server = Server::new_async().await;
    let login = mock_login(&mut server, 1).await;

    let path = std::env::temp_dir().join(format!("onemap-token-{}.json", std::process::id()));
    let config = test_config(&server).token_cache_path(path.to_string_lossy());
    let client = Client::new_lazy(config).unwrap();
    client.authenticate().await.unwrap();

    let cached: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(cached["access_token"], TOKEN);

    std::fs::remove_file(&path).ok();
    login.assert_async().await;
}

#[tokio::test]
async fn test_unwritable_token_cache_does_not_fail_login() {
    let mut server = Server::new_async().await;
    let login = mock_login(&mut server, 1).await;

    let path = std::env::temp_dir()
        .join("onemap-missing-dir")
        .join("nested")
        .join("token.json");
    let config = test_config(&server).token_cache_path(path.to_string_lossy());
    let client = Client::new_lazy(config).unwrap();

    client.authenticate().await.unwrap();
    assert!(client.is_authenticated().await);
    login.assert_async().await;
}

#[tokio::test]
async fn test_unreachable_host_is_a_network_error() {
    let config = Config::with_credentials(EMAIL, PASSWORD)
        .base_url("http://127.0.0.1:1")
        .timeout(2);
    let client = Client::new_lazy(config).unwrap();

    let err = client.authenticate().await.unwrap_err();
    assert!(matches!(err, AppError::Network(_)));
    assert!(err.is_retryable());
}
