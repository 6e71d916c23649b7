//! 캐시 백엔드 추상화
//!
//! 읽기 관통 캐시는 구체적인 저장소(Redis 등)를 몰라도 되도록
//! 연결 생성과 문자열 GET/SET 두 단계의 trait으로 백엔드를 분리합니다.

use std::sync::Arc;
use async_trait::async_trait;
use thiserror::Error;

/// 캐시 백엔드 에러
#[derive(Error, Debug)]
pub enum CacheError {
    /// 연결 수립 실패
    #[error("cache connection failed: {0}")]
    Connection(String),

    /// 연결 후 명령 실행 실패
    #[error("cache command failed: {0}")]
    Command(String),

    /// 캐시 값 직렬화/역직렬화 실패
    #[error("cache serialization failed: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for CacheError {
    fn from(e: serde_json::Error) -> Self {
        CacheError::Serialization(e.to_string())
    }
}

/// 캐시 백엔드에 대한 연결을 만드는 팩토리
///
/// 프로세스 수명 동안 최대 한 번만 호출됩니다.
#[async_trait]
pub trait CacheConnector: Send + Sync {
    async fn connect(&self) -> Result<Arc<dyn CacheConnection>, CacheError>;
}

/// 수립된 캐시 연결
///
/// 값은 JSON 문자열로 저장됩니다.
#[async_trait]
pub trait CacheConnection: Send + Sync {
    /// 키에 해당하는 값을 조회합니다. 없으면 `None`.
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError>;

    /// 값을 저장합니다. `ttl`이 있으면 초 단위 만료 시간을 적용합니다.
    async fn set(&self, key: &str, value: String, ttl: Option<u64>) -> Result<(), CacheError>;
}
