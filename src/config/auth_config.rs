//! # Authentication Configuration Module
//!
//! JWT 서명 비밀키와 토큰 수명을 관리합니다.
//!
//! ```bash
//! export JWT_SECRET_KEY="your-super-secret-jwt-key"
//! ```
//!
//! 토큰 수명은 1시간으로 고정되어 있으며 환경 변수로 바꿀 수 없습니다.

use std::env;

/// JWT 토큰 설정
pub struct JwtConfig;

impl JwtConfig {
    /// 액세스 토큰 수명 (시간)
    pub const EXPIRATION_HOURS: i64 = 1;

    /// JWT 서명에 사용할 공유 비밀키를 반환합니다.
    ///
    /// `JWT_SECRET_KEY`가 없으면 경고를 남기고 개발용 기본값을 사용합니다.
    pub fn secret() -> String {
        env::var("JWT_SECRET_KEY").unwrap_or_else(|_| {
            log::warn!("JWT_SECRET_KEY not set, using default (not secure for production!)");
            "your-secret-key".to_string()
        })
    }

    /// 토큰 수명을 초 단위로 반환합니다.
    pub fn expiration_seconds() -> i64 {
        Self::EXPIRATION_HOURS * 3600
    }
}
