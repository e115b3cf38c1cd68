//! Session cookie reading and writing

use crate::{config::SecurityConfig, error::AppError};
use axum::http::{header, HeaderMap, HeaderValue};

/// Name of the cookie carrying the session token
pub const ACCESS_TOKEN_COOKIE: &str = "access_token";

/// Read a cookie value by name from every `Cookie` header on the request
pub fn read_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|raw| raw.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.trim_matches('"').to_string())
        .filter(|value| !value.is_empty())
}

/// Build the `Set-Cookie` value for a freshly issued session token.
///
/// `Secure` is only added when `security.cookie_secure` is on.
pub fn session_cookie(token: &str, security: &SecurityConfig) -> Result<HeaderValue, AppError> {
    let mut cookie = format!(
        "{}={}; HttpOnly; SameSite=Lax; Path=/; Max-Age={}",
        ACCESS_TOKEN_COOKIE, token, security.session_cookie_max_age_secs
    );
    if security.cookie_secure {
        cookie.push_str("; Secure");
    }

    HeaderValue::from_str(&cookie)
        .map_err(|e| AppError::Internal(format!("Invalid session cookie: {}", e)))
}

/// Build the `Set-Cookie` value that makes the client drop its session
pub fn clear_session_cookie(security: &SecurityConfig) -> HeaderValue {
    if security.cookie_secure {
        HeaderValue::from_static("access_token=; HttpOnly; SameSite=Lax; Path=/; Max-Age=0; Secure")
    } else {
        HeaderValue::from_static("access_token=; HttpOnly; SameSite=Lax; Path=/; Max-Age=0")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::Secret;

    fn security(cookie_secure: bool) -> SecurityConfig {
        SecurityConfig {
            jwt_secret: Secret::new("test_secret_key_32_characters_long!".to_string()),
            access_token_exp_secs: 3600,
            session_cookie_max_age_secs: 86400,
            cookie_secure,
        }
    }

    #[test]
    fn test_read_cookie_among_others() {
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, "theme=dark; access_token=abc.def.ghi; lang=es".parse().unwrap());

        assert_eq!(read_cookie(&headers, ACCESS_TOKEN_COOKIE), Some("abc.def.ghi".to_string()));
        assert_eq!(read_cookie(&headers, "lang"), Some("es".to_string()));
    }

    #[test]
    fn test_read_cookie_across_headers() {
        let mut headers = HeaderMap::new();
        headers.append(header::COOKIE, "theme=dark".parse().unwrap());
        headers.append(header::COOKIE, "access_token=tok".parse().unwrap());

        assert_eq!(read_cookie(&headers, ACCESS_TOKEN_COOKIE), Some("tok".to_string()));
    }

    #[test]
    fn test_read_cookie_missing_or_empty() {
        let mut headers = HeaderMap::new();
        assert_eq!(read_cookie(&headers, ACCESS_TOKEN_COOKIE), None);

        headers.insert(header::COOKIE, "access_token=; other=1".parse().unwrap());
        assert_eq!(read_cookie(&headers, ACCESS_TOKEN_COOKIE), None);

        // 前缀相同的 cookie 名不能误匹配
        headers.insert(header::COOKIE, "access_token_old=stale".parse().unwrap());
        assert_eq!(read_cookie(&headers, ACCESS_TOKEN_COOKIE), None);
    }

    #[test]
    fn test_session_cookie_attributes() {
        let value = session_cookie("abc.def.ghi", &security(false)).unwrap();
        let value = value.to_str().unwrap();

        assert!(value.starts_with("access_token=abc.def.ghi;"));
        assert!(value.contains("HttpOnly"));
        assert!(value.contains("SameSite=Lax"));
        assert!(value.contains("Max-Age=86400"));
        assert!(!value.contains("Secure"));

        let secure = session_cookie("abc.def.ghi", &security(true)).unwrap();
        assert!(secure.to_str().unwrap().ends_with("; Secure"));
    }

    #[test]
    fn test_clear_session_cookie() {
        let value = clear_session_cookie(&security(false));
        let value = value.to_str().unwrap();

        assert!(value.starts_with("access_token=;"));
        assert!(value.contains("Max-Age=0"));
    }
}
