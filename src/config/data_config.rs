//! 데이터 및 서버 설정 관리 모듈
//!
//! 데이터베이스, 캐시, 서버, 비밀번호 해싱 관련 설정을 관리합니다.

use std::env;

/// 패스워드 해싱 설정
pub struct PasswordConfig;

impl PasswordConfig {
    /// bcrypt work factor
    ///
    /// 환경에 따라 바뀌지 않는 고정값입니다.
    pub const BCRYPT_COST: u32 = 10;
}

/// 서버 바인딩 설정
pub struct ServerConfig;

impl ServerConfig {
    /// 서버가 바인딩할 포트를 반환합니다.
    ///
    /// # Environment Variables
    ///
    /// - `PORT`: 커스텀 포트 설정 (기본값: 8080)
    pub fn port() -> u16 {
        env::var("PORT")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(8080)
    }

    /// 서버가 바인딩할 호스트 주소를 반환합니다.
    ///
    /// # Environment Variables
    ///
    /// - `HOST`: 커스텀 호스트 설정 (기본값: "0.0.0.0")
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string())
    }
}

/// MongoDB 연결 설정
pub struct DatabaseConfig;

impl DatabaseConfig {
    /// MongoDB 연결 URI (`MONGODB_URI`, 기본값: `mongodb://localhost:27017`)
    pub fn uri() -> String {
        env::var("MONGODB_URI").unwrap_or_else(|_| "mongodb://localhost:27017".to_string())
    }

    /// 사용할 데이터베이스 이름 (`DATABASE_NAME`, 기본값: `user_auth`)
    pub fn database_name() -> String {
        env::var("DATABASE_NAME").unwrap_or_else(|_| "user_auth".to_string())
    }
}

/// Redis 캐시 설정
///
/// `REDIS_HOST`와 `REDIS_PORT`가 모두 있어야 캐시가 활성화됩니다.
/// 하나라도 없으면 캐시 없이 매번 저장소를 직접 조회합니다.
///
/// ```bash
/// REDIS_HOST=127.0.0.1
/// REDIS_PORT=6379
/// CACHE_TTL=60   # 초 단위, 선택사항
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CacheConfig {
    pub host: String,
    pub port: String,
    /// 캐시 엔트리 만료 시간 (초)
    pub ttl: Option<u64>,
}

impl CacheConfig {
    /// 환경 변수에서 캐시 설정을 읽습니다.
    ///
    /// 캐시 백엔드가 설정되지 않은 경우 `None`을 반환합니다.
    pub fn from_env() -> Option<Self> {
        Self::from_values(
            env::var("REDIS_HOST").ok(),
            env::var("REDIS_PORT").ok(),
            env::var("CACHE_TTL").ok(),
        )
    }

    /// 원시 문자열 값으로부터 캐시 설정을 구성합니다.
    pub fn from_values(host: Option<String>, port: Option<String>, ttl: Option<String>) -> Option<Self> {
        let host = host.filter(|h| !h.trim().is_empty())?;
        let port = port.filter(|p| !p.trim().is_empty())?;

        Some(Self {
            host,
            port,
            ttl: Self::parse_ttl(ttl.as_deref()),
        })
    }

    /// Redis 연결 URL
    pub fn url(&self) -> String {
        format!("redis://{}:{}", self.host, self.port)
    }

    fn parse_ttl(raw: Option<&str>) -> Option<u64> {
        let raw = raw?;
        match raw.trim().parse::<u64>() {
            Ok(0) => None,
            Ok(seconds) => Some(seconds),
            Err(e) => {
                log::warn!("CACHE_TTL 파싱 실패 ({}): {}. ttl 없이 저장합니다", raw, e);
                None
            }
        }
    }
}
