//! Common test utilities for niceday-api tests.

use serde::Serialize;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Start a new mock server for testing.
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Create a 200 response with a JSON body.
pub fn mock_json<T: Serialize>(body: T) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(body)
}

/// Create a 200 response carrying a niceday error message.
#[allow(dead_code)] // Not all test files use this
pub fn mock_niceday_error(message: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(serde_json::json!({
        "message": message,
        "details": {"body": "details from the Senseserver"}
    }))
}

/// Mount a mock for one endpoint, expecting a single JSON-accepting call.
#[allow(dead_code)]
pub async fn mock_endpoint(
    server: &MockServer,
    http_method: &str,
    endpoint: &str,
    response: ResponseTemplate,
) {
    Mock::given(method(http_method))
        .and(path(endpoint))
        .and(header("accept", "application/json"))
        .respond_with(response)
        .expect(1)
        .mount(server)
        .await;
}

/// User data as stored for the test user on the Senseserver.
#[allow(dead_code)]
pub fn sample_user_data() -> serde_json::Value {
    serde_json::json!({
        "id": 12345,
        "networks": [{
            "networkMemberId": 123456,
            "networkId": 112233,
            "role": "patient",
            "createdAt": "2021-04-28T10:53:44.438Z",
            "isActive": true,
            "deletedAt": null,
            "deletedBy": null
        }],
        "userProfile": {
            "firstName": "Test",
            "lastName": "McTesterson",
            "bio": "",
            "location": "Pyteststad",
            "birthDate": "1894-01-22",
            "gender": "MALE",
            "image": null,
            "preferredLanguage": "en",
            "settings": {
                "app": {
                    "version": 1,
                    "settings": {
                        "trackerOrder": [-1, -2, -3, -4, -5, 1],
                        "appOpenedCount": 10
                    }
                }
            }
        },
        "user": {
            "username": "test.test@test.nl",
            "email": "test.test@test.nl",
            "isActive": true,
            "dateJoined": "2020-05-13T18:49:12.025Z",
            "isPublic": true,
            "hashId": "testtesttest",
            "id": 12345
        }
    })
}
