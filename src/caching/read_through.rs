//! 읽기 관통(read-through) 캐시
//!
//! 키를 먼저 캐시에서 찾고, 없으면 로더로 값을 계산해 캐시에 기록한 뒤 반환합니다.
//!
//! ## 연결 수명
//!
//! - 백엔드 연결은 첫 사용 시점에 한 번만 맺어지며 이후 모든 요청이 공유합니다.
//! - 동시에 여러 요청이 들어와도 연결 시도는 한 번뿐입니다.
//! - 연결에 실패하면 캐시는 영구적으로 비활성화되고 이후 요청은 로더를 직접 호출합니다.
//!
//! ## 실패 처리
//!
//! | 상황 | 동작 |
//! |------|------|
//! | 캐시 미설정 | 로더 직접 호출 |
//! | 연결 실패 | 경고 로그 후 로더 직접 호출, 재연결하지 않음 |
//! | GET 실패 / 캐시 값 손상 | 경고 로그 후 로더 호출, 캐시 기록 생략 |
//! | SET 실패 | 경고 로그 후 계산된 값 그대로 반환 |
//! | 로더 실패 | 에러를 그대로 호출자에게 전달 |

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use serde::{Serialize, de::DeserializeOwned};
use tokio::sync::OnceCell;

use super::backend::{CacheConnection, CacheConnector, CacheError};
use super::redis::RedisConnector;
use crate::config::CacheConfig;

/// 한 번의 조회가 어떤 경로로 처리되었는지
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CacheOutcome {
    /// 캐시 적중
    Hit,
    /// 캐시 미스, 로더 결과를 캐시에 기록함
    Computed,
    /// 캐시 조회 실패, 로더 결과를 기록하지 않음
    Degraded,
    /// 캐시 비활성 상태
    Bypassed,
}

/// 프로세스 전역에서 공유되는 읽기 관통 캐시
pub struct ReadThroughCache {
    connector: Option<Arc<dyn CacheConnector>>,
    connection: OnceCell<Arc<dyn CacheConnection>>,
    poisoned: AtomicBool,
}

impl ReadThroughCache {
    /// 캐시 없이 항상 로더를 호출하는 인스턴스
    pub fn disabled() -> Self {
        Self {
            connector: None,
            connection: OnceCell::new(),
            poisoned: AtomicBool::new(false),
        }
    }

    /// 주어진 백엔드를 사용하는 인스턴스
    ///
    /// 실제 연결은 첫 조회 때 맺어집니다.
    pub fn new(connector: Arc<dyn CacheConnector>) -> Self {
        Self {
            connector: Some(connector),
            connection: OnceCell::new(),
            poisoned: AtomicBool::new(false),
        }
    }

    /// 캐시 설정으로부터 인스턴스를 만듭니다.
    ///
    /// 설정이 없거나 Redis URL이 잘못되었으면 비활성 캐시를 반환합니다.
    pub fn from_config(config: Option<&CacheConfig>) -> Self {
        let Some(config) = config else {
            log::info!("캐시 설정 없음: 저장소를 직접 조회합니다");
            return Self::disabled();
        };

        match RedisConnector::new(config) {
            Ok(connector) => {
                log::info!("캐시 활성화: {}:{} (ttl: {:?})", config.host, config.port, config.ttl);
                Self::new(Arc::new(connector))
            }
            Err(e) => {
                log::warn!("Redis 클라이언트 생성 실패, 캐시 비활성화: {}", e);
                Self::disabled()
            }
        }
    }

    /// 캐시가 설정되어 있고 아직 연결 실패를 겪지 않았는지
    pub fn is_enabled(&self) -> bool {
        self.connector.is_some() && !self.poisoned.load(Ordering::Acquire)
    }

    /// 캐시에서 값을 찾고, 없으면 `loader`로 계산해 기록합니다.
    ///
    /// `ttl`은 초 단위 만료 시간이며 `None`이면 만료 없이 저장합니다.
    pub async fn get_or_load<T, E, F, Fut>(&self, key: &str, ttl: Option<u64>, loader: F) -> Result<T, E>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        let (value, outcome) = self.lookup(key, ttl, loader).await?;
        log::debug!("cache {} -> {:?}", key, outcome);
        Ok(value)
    }

    pub(crate) async fn lookup<T, E, F, Fut>(
        &self,
        key: &str,
        ttl: Option<u64>,
        loader: F,
    ) -> Result<(T, CacheOutcome), E>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        let Some(connection) = self.connection().await else {
            return Ok((loader().await?, CacheOutcome::Bypassed));
        };

        match read_entry::<T>(connection.as_ref(), key).await {
            Ok(Some(value)) => return Ok((value, CacheOutcome::Hit)),
            Ok(None) => {}
            Err(e) => {
                log::warn!("캐시 조회 실패 ({}): {}", key, e);
                return Ok((loader().await?, CacheOutcome::Degraded));
            }
        }

        let value = loader().await?;

        if let Err(e) = write_entry(connection.as_ref(), key, &value, ttl).await {
            log::warn!("캐시 저장 실패 ({}): {}", key, e);
        }

        Ok((value, CacheOutcome::Computed))
    }

    /// 공유 연결을 반환합니다. 첫 호출 시 한 번만 연결을 시도합니다.
    async fn connection(&self) -> Option<Arc<dyn CacheConnection>> {
        let connector = self.connector.as_ref()?;
        if self.poisoned.load(Ordering::Acquire) {
            return None;
        }

        let result = self
            .connection
            .get_or_try_init(|| async {
                // 앞선 대기자의 연결 시도가 실패한 경우
                if self.poisoned.load(Ordering::Acquire) {
                    return Err(CacheError::Connection("cache disabled".to_string()));
                }

                connector.connect().await.inspect_err(|e| {
                    log::warn!("캐시 연결 실패, 이후 캐시 없이 동작합니다: {}", e);
                    self.poisoned.store(true, Ordering::Release);
                })
            })
            .await;

        result.ok().cloned()
    }
}

async fn read_entry<T: DeserializeOwned>(
    connection: &dyn CacheConnection,
    key: &str,
) -> Result<Option<T>, CacheError> {
    match connection.get(key).await? {
        Some(raw) => Ok(Some(decode(&raw)?)),
        None => Ok(None),
    }
}

async fn write_entry<T: Serialize>(
    connection: &dyn CacheConnection,
    key: &str,
    value: &T,
    ttl: Option<u64>,
) -> Result<(), CacheError> {
    let raw = serde_json::to_string(value)?;
    connection.set(key, raw, ttl).await
}

fn decode<T: DeserializeOwned>(raw: &str) -> Result<T, CacheError> {
    Ok(serde_json::from_str(raw)?)
}
