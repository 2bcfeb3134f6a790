mod conversions;

use serde_json::{json, Value};
use wiremock::{MockServer, ResponseTemplate};

use crate::api::{Credentials, PorkbunClient};

pub(crate) const API_KEY: &str =
    "pk1_0123456789abcdef0123456789abcdef0123456789abcdef0123456789abcdef";
pub(crate) const SECRET_API_KEY: &str =
    "sk1_fedcba9876543210fedcba9876543210fedcba9876543210fedcba9876543210";

/// Client pointed at the mock server, with the test key pair.
pub(crate) fn client_for(server: &MockServer) -> PorkbunClient {
    PorkbunClient::with_base_url(
        reqwest::Client::new(),
        Credentials::new(API_KEY, SECRET_API_KEY),
        format!("{}/api/json/v3", server.uri()),
    )
}

/// Full mock path for an endpoint.
pub(crate) fn api_path(endpoint: &str) -> String {
    format!("/api/json/v3/{}", endpoint)
}

/// `SUCCESS` envelope with `fields` merged in.
pub(crate) fn success(fields: Value) -> ResponseTemplate {
    let mut body = json!({ "status": "SUCCESS" });
    if let (Some(body), Value::Object(fields)) = (body.as_object_mut(), fields) {
        body.extend(fields);
    }
    ResponseTemplate::new(200).set_body_json(body)
}

pub(crate) fn failure(message: &str) -> ResponseTemplate {
    ResponseTemplate::new(400).set_body_json(json!({ "status": "ERROR", "message": message }))
}

pub(crate) fn credentials_json() -> Value {
    json!({ "apikey": API_KEY, "secretapikey": SECRET_API_KEY })
}

pub(crate) fn wire_domain(name: &str) -> Value {
    json!({
        "domain": name,
        "status": "ACTIVE",
        "TLD": "com",
        "createDate": "2020-01-01 00:00:00",
        "expireDate": "2030-01-01 00:00:00",
        "securityLock": "1",
        "whoisPrivacy": "1",
        "autoRenew": "0",
        "notLocal": 0
    })
}
