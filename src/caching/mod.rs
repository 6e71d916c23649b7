//! 캐싱 계층 모듈
//!
//! 사용자 목록 조회에 쓰이는 읽기 관통 캐시와 Redis 백엔드를 제공합니다.
//!
//! # 구성
//!
//! - [`backend`] - 백엔드 연결 추상화 (`CacheConnector`, `CacheConnection`)
//! - [`redis`] - 멀티플렉싱 연결 기반 Redis 구현
//! - [`read_through`] - 지연 연결, 실패 시 우회하는 읽기 관통 캐시
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::caching::ReadThroughCache;
//!
//! let cache = ReadThroughCache::from_config(CacheConfig::from_env().as_ref());
//! let users = cache
//!     .get_or_load("GET_USERS", Some(60), || async { store.find_all().await })
//!     .await?;
//! ```
//!
//! # 환경 설정
//!
//! ```bash
//! REDIS_HOST=localhost
//! REDIS_PORT=6379
//! CACHE_TTL=60
//! ```

pub mod backend;
pub mod redis;
pub mod read_through;

pub use backend::{CacheConnection, CacheConnector, CacheError};
pub use read_through::ReadThroughCache;
