//! JWT 토큰 관리 서비스 구현
//!
//! 공유 비밀키(HS256) 기반의 액세스 토큰 발급과 검증을 담당합니다.
//! 리프레시 토큰과 토큰 폐기는 지원하지 않습니다.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::config::JwtConfig;
use crate::domain::models::token::TokenClaims;
use crate::errors::{AppError, AppResult, ErrorContext};

/// 토큰이 없을 때의 응답 메시지
pub const MISSING_TOKEN_MESSAGE: &str = "jwt must be provided";
/// 서명 불일치, 만료, 형식 오류를 구분하지 않는 응답 메시지
pub const INVALID_TOKEN_MESSAGE: &str = "invalid token";

#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    lifetime: Duration,
}

impl TokenService {
    pub fn new(secret: &str) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            lifetime: Duration::seconds(JwtConfig::expiration_seconds()),
        }
    }

    /// `JWT_SECRET_KEY` 환경 변수로 서비스를 구성합니다.
    pub fn from_env() -> Self {
        Self::new(&JwtConfig::secret())
    }

    /// 이메일을 담은 액세스 토큰을 발급합니다. 수명은 1시간입니다.
    pub fn generate_token(&self, email: &str) -> AppResult<String> {
        let now = Utc::now();

        let claims = TokenClaims {
            email: email.to_string(),
            iat: now.timestamp(),
            exp: (now + self.lifetime).timestamp(),
        };

        log::debug!("토큰 발급: {}", email);

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .context("JWT 토큰 생성 실패")
    }

    /// 토큰 서명과 만료 시간을 검증합니다.
    ///
    /// 실패 원인은 로그에만 남기고 호출자에게는 동일한 메시지를 반환합니다.
    pub fn verify_token(&self, token: &str) -> AppResult<TokenClaims> {
        let validation = Validation::new(Algorithm::HS256);

        decode::<TokenClaims>(token, &self.decoding_key, &validation)
            .map(|token_data| token_data.claims)
            .map_err(|e| {
                log::warn!("토큰 검증 실패: {:?}", e.kind());
                AppError::AuthenticationError(INVALID_TOKEN_MESSAGE.to_string())
            })
    }

    /// `Authorization` 헤더 값을 검증합니다.
    ///
    /// `Bearer <jwt>` 형식과 토큰만 있는 형식을 모두 허용합니다.
    pub fn authenticate_header(&self, header: Option<&str>) -> AppResult<TokenClaims> {
        let token = header
            .map(Self::extract_bearer_token)
            .filter(|token| !token.is_empty())
            .ok_or_else(|| {
                log::warn!("Authorization 헤더 없음");
                AppError::AuthenticationError(MISSING_TOKEN_MESSAGE.to_string())
            })?;

        self.verify_token(token)
    }

    pub fn extract_bearer_token(auth_header: &str) -> &str {
        let trimmed = auth_header.trim();
        match trimmed.strip_prefix("Bearer") {
            Some(rest) if rest.is_empty() || rest.starts_with(char::is_whitespace) => rest.trim(),
            _ => trimmed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_and_verify_token() {
        let service = TokenService::new("test-secret");
        let token = service.generate_token("alice@example.com").unwrap();

        let claims = service.verify_token(&token).unwrap();

        assert_eq!(claims.email, "alice@example.com");
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn test_bearer_prefix_is_optional() {
        let service = TokenService::new("test-secret");
        let token = service.generate_token("alice@example.com").unwrap();

        assert!(service.authenticate_header(Some(&token)).is_ok());
        assert!(service.authenticate_header(Some(&format!("Bearer {}", token))).is_ok());
    }

    #[test]
    fn test_foreign_signature_is_rejected() {
        let token = TokenService::new("other-secret").generate_token("alice@example.com").unwrap();
        let service = TokenService::new("test-secret");

        match service.verify_token(&token) {
            Err(AppError::AuthenticationError(msg)) => assert_eq!(msg, INVALID_TOKEN_MESSAGE),
            other => panic!("unexpected result: {:?}", other.map(|c| c.email)),
        }
    }

    #[test]
    fn test_expired_token_has_same_message_as_garbage() {
        let service = TokenService::new("test-secret");
        let past = Utc::now() - Duration::hours(3);
        let claims = TokenClaims {
            email: "alice@example.com".to_string(),
            iat: past.timestamp(),
            exp: (past + Duration::hours(1)).timestamp(),
        };
        let expired = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(b"test-secret"),
        )
        .unwrap();

        let expired_err = service.verify_token(&expired).unwrap_err();
        let garbage_err = service.verify_token("not.a.jwt").unwrap_err();

        assert_eq!(expired_err.message(), garbage_err.message());
    }

    #[test]
    fn test_missing_header() {
        let service = TokenService::new("test-secret");

        for header in [None, Some(""), Some("Bearer ")] {
            let err = service.authenticate_header(header).unwrap_err();
            assert_eq!(err.message(), MISSING_TOKEN_MESSAGE);
        }
    }
}
