//! Tests for the auth module

use super::*;
use pretty_assertions::assert_eq;
use url::Url;

fn twitter_credentials() -> OAuth1Credentials {
    OAuth1Credentials::new(
        "xvz1evFS4wEEPTGEFPHBog",
        "kAcSOqF21Fu85e7zjz7ZN2U4ZRhfV3WpwPAoE3Z7kBw",
        "370773112-GmHxMAgYyLbNEtIKZeRNFsMKPR9EyMZeS9weJAEb",
        "LswwdoUaIvS8ltyTt5jkRh4J50vUPVVHtR2YPi5kE",
    )
}

fn test_credentials() -> OAuth1Credentials {
    OAuth1Credentials::new("ckey", "csecret", "atoken", "asecret")
}

#[test]
fn test_percent_encode() {
    assert_eq!(percent_encode("abc-._~"), "abc-._~");
    assert_eq!(percent_encode("a b"), "a%20b");
    assert_eq!(percent_encode("Ladies + Gentlemen"), "Ladies%20%2B%20Gentlemen");
    assert_eq!(percent_encode("a=b&c"), "a%3Db%26c");
    assert_eq!(percent_encode("é"), "%C3%A9");
}

#[test]
fn test_signature_known_vector() {
    // Published OAuth1 example request
    let auth = Authenticator::new(twitter_credentials());
    let url = Url::parse("https://api.twitter.com/1.1/statuses/update.json").unwrap();
    let params: Vec<(String, String)> = [
        ("include_entities", "true"),
        (
            "status",
            "Hello Ladies + Gentlemen, a signed OAuth request!",
        ),
        ("oauth_consumer_key", "xvz1evFS4wEEPTGEFPHBog"),
        ("oauth_nonce", "kYjzVBB8Y0ZFabxSWbWovY3uYSQ2pTgmZeNu2VS4cg"),
        ("oauth_signature_method", "HMAC-SHA1"),
        ("oauth_timestamp", "1318622958"),
        (
            "oauth_token",
            "370773112-GmHxMAgYyLbNEtIKZeRNFsMKPR9EyMZeS9weJAEb",
        ),
        ("oauth_version", "1.0"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect();

    assert_eq!(
        auth.signature("POST", &url, &params),
        "hCtSmYh+iHYCEqBWrE7C7hYmtUk="
    );
}

#[test]
fn test_signature_base_string_sorts_and_encodes() {
    let url = Url::parse("https://Example.com:8443/a b?ignored=1").unwrap();
    let params = vec![
        ("z".to_string(), "1".to_string()),
        ("a".to_string(), "x y".to_string()),
    ];

    let base = signature_base_string("get", &url, &params);
    assert_eq!(
        base,
        "GET&https%3A%2F%2Fexample.com%3A8443%2Fa%2520b&a%3Dx%2520y%26z%3D1"
    );
}

#[test]
fn test_signature_base_string_drops_default_port() {
    let url = Url::parse("https://district.illuminateed.com:443/live/rest_server.php/Api/Sites")
        .unwrap();
    let base = signature_base_string("GET", &url, &[]);
    assert!(base.starts_with(
        "GET&https%3A%2F%2Fdistrict.illuminateed.com%2Flive%2Frest_server.php%2FApi%2FSites&"
    ));
}

#[test]
fn test_authorization_header_fields() {
    let auth = Authenticator::new(test_credentials());
    let url = Url::parse("https://example.com/Api/Students?limit=200").unwrap();

    let header = auth.authorization_header("GET", &url, "nonce123", "1700000000");

    assert!(header.starts_with("OAuth "));
    assert!(header.contains("oauth_consumer_key=\"ckey\""));
    assert!(header.contains("oauth_token=\"atoken\""));
    assert!(header.contains("oauth_nonce=\"nonce123\""));
    assert!(header.contains("oauth_timestamp=\"1700000000\""));
    assert!(header.contains("oauth_signature_method=\"HMAC-SHA1\""));
    assert!(header.contains("oauth_version=\"1.0\""));
    assert!(header.contains("oauth_signature=\""));
    assert!(!header.contains("csecret"));
    assert!(!header.contains("asecret"));
}

#[test]
fn test_authorization_header_covers_query() {
    let auth = Authenticator::new(test_credentials());
    let a = Url::parse("https://example.com/Api/Students?limit=200").unwrap();
    let b = Url::parse("https://example.com/Api/Students?limit=100").unwrap();

    let header_a = auth.authorization_header("GET", &a, "n", "1");
    let header_b = auth.authorization_header("GET", &b, "n", "1");
    assert_ne!(header_a, header_b);

    // Same inputs, same signature
    assert_eq!(header_a, auth.authorization_header("GET", &a, "n", "1"));
}

#[test]
fn test_sign_request_sets_header() {
    let auth = Authenticator::new(test_credentials());
    let client = reqwest::Client::new();
    let mut request = client
        .get("https://example.com/Api/Sites")
        .query(&[("limit", "200")])
        .build()
        .unwrap();

    auth.sign(&mut request).unwrap();

    let value = request
        .headers()
        .get("Authorization")
        .unwrap()
        .to_str()
        .unwrap();
    assert!(value.starts_with("OAuth "));
    assert!(value.contains("oauth_signature="));
}

#[test]
fn test_sign_uses_fresh_nonce() {
    let auth = Authenticator::new(test_credentials());
    let client = reqwest::Client::new();
    let mut first = client.get("https://example.com/Api/Sites").build().unwrap();
    let mut second = client.get("https://example.com/Api/Sites").build().unwrap();

    auth.sign(&mut first).unwrap();
    auth.sign(&mut second).unwrap();

    assert_ne!(
        first.headers().get("Authorization"),
        second.headers().get("Authorization")
    );
}

#[test]
fn test_credentials_debug_redacts_secrets() {
    let debug = format!("{:?}", test_credentials());
    assert!(debug.contains("ckey"));
    assert!(!debug.contains("csecret"));
    assert!(!debug.contains("asecret"));
}

#[test]
fn test_credentials_missing_fields() {
    let creds = OAuth1Credentials::new("key", "", "token", " ");
    assert_eq!(
        creds.missing_fields(),
        vec!["consumer_secret", "access_token_secret"]
    );
    assert!(test_credentials().missing_fields().is_empty());
}
