//! Tests for user data and profile operations.

mod common;

use common::{mock_endpoint, mock_json, mock_niceday_error, sample_user_data, setup_mock_server};
use niceday::{Error, NicedayClient, USER_PROFILE_KEYS};
use wiremock::ResponseTemplate;

#[tokio::test]
async fn test_get_profile() {
    let server = setup_mock_server().await;
    mock_endpoint(&server, "GET", "/userdata/12345", mock_json(sample_user_data())).await;

    let client = NicedayClient::with_url(server.uri());
    let profile = client.profiles().get(12345).await.unwrap();

    assert_eq!(
        serde_json::to_value(&profile).unwrap(),
        serde_json::json!({
            "firstName": "Test",
            "lastName": "McTesterson",
            "location": "Pyteststad",
            "birthDate": "1894-01-22",
            "gender": "MALE"
        })
    );
}

#[tokio::test]
async fn test_get_profile_drops_other_keys() {
    let server = setup_mock_server().await;
    mock_endpoint(&server, "GET", "/userdata/12345", mock_json(sample_user_data())).await;

    let client = NicedayClient::with_url(server.uri());
    let profile = client.profiles().get(12345).await.unwrap();

    let map = profile.as_map();
    assert!(!map.contains_key("id"));
    assert!(!map.contains_key("userProfile"));
    assert!(!map.contains_key("networks"));
    for key in USER_PROFILE_KEYS {
        assert!(profile.get(key).unwrap().is_string());
    }
}

#[tokio::test]
async fn test_raw_user_data() {
    let server = setup_mock_server().await;
    mock_endpoint(&server, "GET", "/userdata/12345", mock_json(sample_user_data())).await;

    let client = NicedayClient::with_url(server.uri());
    let data = client.profiles().raw(12345).await.unwrap();

    assert_eq!(data, sample_user_data());
}

#[tokio::test]
async fn test_get_profile_missing_user_profile() {
    let server = setup_mock_server().await;
    mock_endpoint(
        &server,
        "GET",
        "/userdata/12345",
        mock_json(serde_json::json!({"id": 12345, "networks": []})),
    )
    .await;

    let client = NicedayClient::with_url(server.uri());
    let err = client.profiles().get(12345).await.unwrap_err();

    assert!(
        matches!(err, Error::MalformedResponse(ref msg) if msg.contains("userProfile")),
        "got: {:?}",
        err
    );
}

#[tokio::test]
async fn test_get_profile_missing_key() {
    let mut data = sample_user_data();
    data["userProfile"]
        .as_object_mut()
        .unwrap()
        .remove("birthDate");

    let server = setup_mock_server().await;
    mock_endpoint(&server, "GET", "/userdata/12345", mock_json(data)).await;

    let client = NicedayClient::with_url(server.uri());
    let err = client.profiles().get(12345).await.unwrap_err();

    match err {
        Error::MalformedResponse(msg) => assert!(msg.contains("\"birthDate\""), "{}", msg),
        other => panic!("expected MalformedResponse, got {:?}", other),
    }
}

#[tokio::test]
async fn test_get_profile_non_json() {
    let server = setup_mock_server().await;
    mock_endpoint(
        &server,
        "GET",
        "/userdata/12345",
        ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"),
    )
    .await;

    let client = NicedayClient::with_url(server.uri());
    let err = client.profiles().get(12345).await.unwrap_err();

    assert!(matches!(err, Error::NonJsonResponse(_)), "got: {:?}", err);
}

#[tokio::test]
async fn test_get_profile_unauthorized() {
    let server = setup_mock_server().await;
    mock_endpoint(
        &server,
        "GET",
        "/userdata/12345",
        mock_niceday_error("Unauthorized error"),
    )
    .await;

    let client = NicedayClient::with_url(server.uri());
    let err = client.profiles().get(12345).await.unwrap_err();

    match err {
        Error::Unauthorized(msg) => {
            assert!(msg.contains("Details provided: details from the Senseserver"));
        }
        other => panic!("expected Unauthorized, got {:?}", other),
    }
}

#[tokio::test]
async fn test_get_profile_not_found() {
    let server = setup_mock_server().await;
    mock_endpoint(
        &server,
        "GET",
        "/userdata/99999",
        mock_niceday_error("The requested resource could not be found"),
    )
    .await;

    let client = NicedayClient::with_url(server.uri());
    let err = client.profiles().get(99999).await.unwrap_err();

    assert!(matches!(err, Error::NotFound(_)), "got: {:?}", err);
}

#[tokio::test]
async fn test_get_profile_http_error() {
    let server = setup_mock_server().await;
    mock_endpoint(
        &server,
        "GET",
        "/userdata/12345",
        ResponseTemplate::new(500).set_body_string("not json at all"),
    )
    .await;

    let client = NicedayClient::with_url(server.uri());
    let err = client.profiles().get(12345).await.unwrap_err();

    assert!(
        matches!(err, Error::Transport { status: 500, ref body } if body == "not json at all"),
        "got: {:?}",
        err
    );
}

#[tokio::test]
async fn test_connection_refused() {
    // Use a port that's almost certainly not in use
    let client = NicedayClient::with_url("http://127.0.0.1:59999");

    let err = client.profiles().get(12345).await.unwrap_err();
    assert!(
        err.to_string().contains("Could not connect to the niceday-api"),
        "Expected connection refused error, got: {}",
        err
    );
}
