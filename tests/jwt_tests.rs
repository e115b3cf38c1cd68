//! 会话令牌集成测试

use chrono::Duration;
use shop_admin::auth::jwt::{JwtService, TokenError};

const SECRET: &[u8] = b"test-secret-key-for-testing-only-min-32-chars";
const OTHER_SECRET: &[u8] = b"another-secret-key-also-at-least-32-chars";

#[test]
fn test_token_has_three_segments() {
    let service = JwtService::new(SECRET).unwrap();
    let token = service.issue("ana@example.com", Duration::minutes(60)).unwrap();

    let segments: Vec<&str> = token.split('.').collect();
    assert_eq!(segments.len(), 3);
    assert!(segments.iter().all(|s| !s.is_empty()));
}

#[test]
fn test_round_trip_subject() {
    let service = JwtService::new(SECRET).unwrap();
    let token = service.issue("ana@example.com", Duration::minutes(60)).unwrap();

    let claims = service.verify(&token).unwrap();
    assert_eq!(claims.sub, "ana@example.com");
    assert!(claims.exp > chrono::Utc::now().timestamp());
}

#[test]
fn test_tampered_payload_is_bad_signature() {
    let service = JwtService::new(SECRET).unwrap();
    let token = service.issue("ana@example.com", Duration::minutes(60)).unwrap();

    let parts: Vec<&str> = token.split('.').collect();
    let mut payload: Vec<char> = parts[1].chars().collect();
    // 替换载荷首字符，仍是合法的 base64url 字符
    payload[0] = if payload[0] == 'e' { 'f' } else { 'e' };
    let payload: String = payload.into_iter().collect();
    let tampered = format!("{}.{}.{}", parts[0], payload, parts[2]);

    assert_eq!(service.verify(&tampered), Err(TokenError::BadSignature));
}

#[test]
fn test_other_key_is_bad_signature() {
    let issuer = JwtService::new(OTHER_SECRET).unwrap();
    let verifier = JwtService::new(SECRET).unwrap();
    let token = issuer.issue("ana@example.com", Duration::minutes(60)).unwrap();

    assert_eq!(verifier.verify(&token), Err(TokenError::BadSignature));
}

#[test]
fn test_structurally_invalid_is_malformed() {
    let service = JwtService::new(SECRET).unwrap();

    assert_eq!(service.verify("abc"), Err(TokenError::Malformed));
    assert_eq!(service.verify("a.b"), Err(TokenError::Malformed));
    assert_eq!(service.verify("not.a.jwt"), Err(TokenError::Malformed));
}

#[tokio::test]
async fn test_token_expires_after_ttl() {
    let service = JwtService::new(SECRET).unwrap();
    let token = service.issue("ana@example.com", Duration::seconds(1)).unwrap();

    assert!(service.verify(&token).is_ok());

    tokio::time::sleep(std::time::Duration::from_secs(2)).await;

    assert_eq!(service.verify(&token), Err(TokenError::Expired));
}
