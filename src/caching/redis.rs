//! # Redis 캐시 백엔드
//!
//! [`CacheConnector`]/[`CacheConnection`]의 Redis 구현입니다.
//!
//! Redis 연결은 멀티플렉싱을 사용하여 단일 TCP 연결에서
//! 여러 동시 요청을 처리합니다. 커넥션 핸들은 복제해도 같은
//! TCP 연결을 공유합니다.

use std::sync::Arc;
use async_trait::async_trait;
use redis::{AsyncCommands, Client, aio::MultiplexedConnection};

use super::backend::{CacheConnection, CacheConnector, CacheError};
use crate::config::CacheConfig;

impl From<redis::RedisError> for CacheError {
    fn from(e: redis::RedisError) -> Self {
        if e.is_connection_refusal() || e.is_io_error() || e.is_timeout() {
            CacheError::Connection(e.to_string())
        } else {
            CacheError::Command(e.to_string())
        }
    }
}

/// Redis 연결 팩토리
///
/// ```rust,ignore
/// let connector = RedisConnector::new(&config)?;
/// let connection = connector.connect().await?;
/// connection.set("GET_USERS", json, Some(60)).await?;
/// ```
#[derive(Clone)]
pub struct RedisConnector {
    client: Client,
}

impl RedisConnector {
    /// 캐시 설정으로부터 Redis 클라이언트를 준비합니다.
    ///
    /// 이 단계에서는 네트워크 연결을 맺지 않고 URL만 검증합니다.
    pub fn new(config: &CacheConfig) -> Result<Self, CacheError> {
        let client = Client::open(config.url())
            .map_err(|e| CacheError::Connection(e.to_string()))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl CacheConnector for RedisConnector {
    async fn connect(&self) -> Result<Arc<dyn CacheConnection>, CacheError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;

        // PING으로 서버 가용성 확인
        redis::cmd("PING").query_async::<()>(&mut conn).await?;

        log::info!("✅ Redis 연결 성공");

        Ok(Arc::new(RedisConnection { conn }))
    }
}

/// 멀티플렉싱된 Redis 연결
pub struct RedisConnection {
    conn: MultiplexedConnection,
}

#[async_trait]
impl CacheConnection for RedisConnection {
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        let mut conn = self.conn.clone();
        let value: Option<String> = conn.get(key).await?;
        Ok(value)
    }

    async fn set(&self, key: &str, value: String, ttl: Option<u64>) -> Result<(), CacheError> {
        let mut conn = self.conn.clone();
        match ttl {
            Some(seconds) if seconds > 0 => {
                let _: () = conn.set_ex(key, value, seconds).await?;
            }
            _ => {
                let _: () = conn.set(key, value).await?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connector_accepts_configured_url() {
        let config = CacheConfig {
            host: "127.0.0.1".to_string(),
            port: "6379".to_string(),
            ttl: None,
        };

        assert!(RedisConnector::new(&config).is_ok());
    }
}
