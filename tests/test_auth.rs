// Authentication and transport tests
// Author: Gabriel Demetrios Lafis

mod common;

use common::MockService;
use mockall::Sequence;
use rust_analytics_client::{
    auth::{parse_key_values, AuthError, AuthMethod, OAuth2, RefreshCredentials},
    transport::{strip_tags, HttpRequest, HttpResponse, Method},
    utils::{AppError, Config},
    AnalyticsClient,
};

fn credentials() -> RefreshCredentials {
    RefreshCredentials {
        client_id: "client".to_string(),
        client_secret: "shh".to_string(),
        refresh_token: "refresh".to_string(),
    }
}

#[test]
fn test_oauth2_refresh_grant() {
    let config = Config::default();
    let token_url = config.service.oauth2_token_url.clone();

    let mut transport = MockService::new();
    transport
        .expect_request()
        .withf(move |request| {
            let form = request.form.clone().unwrap_or_default();
            request.url == token_url
                && request.method() == Method::Post
                && form.contains(&("grant_type".to_string(), "refresh_token".to_string()))
                && form.contains(&("refresh_token".to_string(), "refresh".to_string()))
        })
        .times(1)
        .returning(|_| {
            Ok(HttpResponse::new(
                200,
                r#"{"access_token": "ya29.fresh", "token_type": "Bearer", "expires_in": 3600}"#,
            ))
        });

    let mut auth = OAuth2::with_refresh_token(credentials(), &config.service);
    assert_eq!(auth.token(), None);
    assert!(matches!(auth.header(), Err(AuthError::NoToken)));

    assert_eq!(auth.fetch_token(&transport).unwrap(), "ya29.fresh");
    assert_eq!(auth.token(), Some("ya29.fresh"));
    assert_eq!(auth.header().unwrap().value, "Bearer ya29.fresh");
    assert_eq!(auth.header().unwrap().name, "Authorization");
}

#[test]
fn test_oauth2_response_without_token() {
    let mut transport = MockService::new();
    transport
        .expect_request()
        .times(1)
        .returning(|_| Ok(HttpResponse::new(200, r#"{"error": "invalid_grant"}"#)));

    let config = Config::default();
    let mut auth = OAuth2::with_refresh_token(credentials(), &config.service);

    match auth.fetch_token(&transport) {
        Err(AuthError::MissingCredential { field, .. }) => assert_eq!(field, "access_token"),
        other => panic!("expected a missing credential error, got {:?}", other),
    }
}

#[test]
fn test_oauth2_without_refresh_credentials() {
    let transport = MockService::new();
    let config = Config::default();
    let mut auth = OAuth2::with_access_token("abc", &config.service);

    assert!(matches!(
        auth.fetch_token(&transport),
        Err(AuthError::Unsupported(_))
    ));
    assert_eq!(auth.token(), Some("abc"));
}

#[test]
fn test_revoke_and_token_info() {
    let config = Config::default();
    let revoke_url = config.service.oauth2_revoke_url.clone();
    let info_url = config.service.oauth2_token_info_url.clone();

    let mut seq = Sequence::new();
    let mut transport = MockService::new();
    transport
        .expect_request()
        .withf(move |request| {
            request.url == info_url && request.query_value("access_token") == Some("abc")
        })
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| {
            Ok(HttpResponse::new(
                200,
                r#"{
                    "issued_to": "client.apps.example.com",
                    "audience": "client.apps.example.com",
                    "scope": "https://www.googleapis.com/auth/analytics.readonly",
                    "expires_in": 3599,
                    "access_type": "offline"
                }"#,
            ))
        });
    transport
        .expect_request()
        .withf(move |request| {
            request.url == revoke_url
                && request.method() == Method::Get
                && request.query_value("token") == Some("abc")
        })
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| Ok(HttpResponse::new(200, "")));

    let auth = OAuth2::with_access_token("abc", &config.service);
    let mut client = AnalyticsClient::new(config, auth, transport);

    let info = client.token_info().unwrap();
    assert_eq!(info.expires_in, Some(3599));
    assert_eq!(info.access_type.as_deref(), Some("offline"));
    assert_eq!(info.email, None);

    client.revoke_token().unwrap();
    assert_eq!(client.auth_token(), None);
    assert!(matches!(
        client.token_info(),
        Err(AppError::Authentication(AuthError::NoToken))
    ));
}

#[test]
fn test_parse_key_values() {
    let values = parse_key_values("SID=abc\nLSID=def\nAuth=x%3Dy\nnot a pair\n");

    assert_eq!(values.get("SID").map(String::as_str), Some("abc"));
    assert_eq!(values.get("LSID").map(String::as_str), Some("def"));
    assert_eq!(values.get("Auth").map(String::as_str), Some("x=y"));
    assert_eq!(values.len(), 3);
}

#[test]
fn test_strip_tags() {
    let body = "<html>\n<body>\n<h1>Forbidden</h1>\n\n<p>Access denied</p>\n</body>\n</html>";
    assert_eq!(strip_tags(body), "Forbidden\nAccess denied");
    assert_eq!(strip_tags("plain text"), "plain text");
}

#[test]
fn test_request_url_and_status() {
    let request = HttpRequest::get("https://example.com/data").with_query(vec![
        ("ids".to_string(), "ga:1".to_string()),
        ("filters".to_string(), "ga%3Avisits%3E5".to_string()),
    ]);

    assert_eq!(request.method(), Method::Get);
    assert_eq!(
        request.full_url(),
        "https://example.com/data?ids=ga:1&filters=ga%3Avisits%3E5"
    );
    assert_eq!(
        HttpRequest::get("https://example.com").full_url(),
        "https://example.com"
    );

    assert!(HttpResponse::new(200, "").is_success());
    assert!(HttpResponse::new(204, "").is_success());
    assert!(!HttpResponse::new(302, "").is_success());
    assert!(!HttpResponse::new(500, "").is_success());
}
