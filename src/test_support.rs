//! 테스트 전용 인메모리 저장소와 캐시 백엔드

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use actix_web::web;
use async_trait::async_trait;
use mongodb::bson::{oid::ObjectId, DateTime};

use crate::caching::{CacheConnection, CacheConnector, CacheError, ReadThroughCache};
use crate::core::AppState;
use crate::domain::entities::users::{User, UserChanges};
use crate::errors::{AppError, AppResult};
use crate::repositories::users::UserStore;
use crate::services::auth::TokenService;

pub const TEST_SECRET: &str = "test-secret";

/// 캐시 비활성 상태의 인메모리 애플리케이션 상태
pub fn test_state() -> web::Data<AppState> {
    test_state_with(Arc::new(InMemoryUserStore::new()), ReadThroughCache::disabled())
}

pub fn test_state_with(store: Arc<InMemoryUserStore>, cache: ReadThroughCache) -> web::Data<AppState> {
    web::Data::new(AppState::build(store, cache, Some(60), TokenService::new(TEST_SECRET)))
}

/// `users` 컬렉션의 유니크 인덱스를 흉내 내는 인메모리 저장소
#[derive(Default)]
pub struct InMemoryUserStore {
    users: Mutex<Vec<User>>,
    lookups: Mutex<Vec<String>>,
    find_all_calls: AtomicUsize,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn users(&self) -> Vec<User> {
        self.users.lock().unwrap().clone()
    }

    /// 식별번호 조회 기록 (`"accountNumber:..."`, `"identityNumber:..."`)
    pub fn lookups(&self) -> Vec<String> {
        self.lookups.lock().unwrap().clone()
    }

    pub fn find_all_calls(&self) -> usize {
        self.find_all_calls.load(Ordering::SeqCst)
    }

    fn find_where(&self, predicate: impl Fn(&User) -> bool) -> Option<User> {
        self.users.lock().unwrap().iter().find(|u| predicate(u)).cloned()
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn insert(&self, mut user: User) -> AppResult<User> {
        let mut users = self.users.lock().unwrap();

        let duplicate = users.iter().any(|u| {
            u.email == user.email
                || u.account_number == user.account_number
                || u.identity_number == user.identity_number
        });
        if duplicate {
            return Err(AppError::ConflictError(format!("E11000 duplicate key error: {}", user.email)));
        }

        user.id = Some(ObjectId::new());
        users.push(user.clone());
        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        Ok(self.find_where(|u| u.email == email))
    }

    async fn find_by_account_number(&self, account_number: &str) -> AppResult<Option<User>> {
        self.lookups.lock().unwrap().push(format!("accountNumber:{}", account_number));
        Ok(self.find_where(|u| u.account_number == account_number))
    }

    async fn find_by_identity_number(&self, identity_number: &str) -> AppResult<Option<User>> {
        self.lookups.lock().unwrap().push(format!("identityNumber:{}", identity_number));
        Ok(self.find_where(|u| u.identity_number == identity_number))
    }

    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<User>> {
        Ok(self.find_where(|u| u.id == Some(*id)))
    }

    async fn update_by_id(&self, id: &ObjectId, changes: UserChanges) -> AppResult<Option<User>> {
        let mut users = self.users.lock().unwrap();

        if let Some(email) = &changes.email {
            if users.iter().any(|u| u.id != Some(*id) && &u.email == email) {
                return Err(AppError::ConflictError(format!("E11000 duplicate key error: {}", email)));
            }
        }

        let Some(user) = users.iter_mut().find(|u| u.id == Some(*id)) else {
            return Ok(None);
        };
        let previous = user.clone();

        if !changes.is_empty() {
            if let Some(email) = changes.email {
                user.email = email;
            }
            if let Some(username) = changes.username {
                user.username = username;
            }
            user.updated_at = DateTime::now();
        }

        Ok(Some(previous))
    }

    async fn delete_by_id(&self, id: &ObjectId) -> AppResult<Option<User>> {
        let mut users = self.users.lock().unwrap();
        let position = users.iter().position(|u| u.id == Some(*id));
        Ok(position.map(|index| users.remove(index)))
    }

    async fn find_all(&self) -> AppResult<Vec<User>> {
        self.find_all_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.users())
    }
}

#[derive(Default)]
struct FakeCacheState {
    entries: Mutex<HashMap<String, (String, Option<u64>)>>,
    connects: AtomicUsize,
    sets: AtomicUsize,
    fail_connect: AtomicBool,
    fail_get: AtomicBool,
    fail_set: AtomicBool,
}

/// 연결/조회/기록 실패를 주입할 수 있는 캐시 백엔드
///
/// 복제본은 같은 상태를 공유하므로 캐시에 넘긴 뒤에도 검사할 수 있습니다.
#[derive(Clone, Default)]
pub struct FakeCacheConnector {
    state: Arc<FakeCacheState>,
}

impl FakeCacheConnector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_connect(&self, fail: bool) {
        self.state.fail_connect.store(fail, Ordering::SeqCst);
    }

    pub fn fail_get(&self, fail: bool) {
        self.state.fail_get.store(fail, Ordering::SeqCst);
    }

    pub fn fail_set(&self, fail: bool) {
        self.state.fail_set.store(fail, Ordering::SeqCst);
    }

    pub fn insert_raw(&self, key: &str, raw: &str) {
        self.state
            .entries
            .lock()
            .unwrap()
            .insert(key.to_string(), (raw.to_string(), None));
    }

    /// 저장된 키의 ttl. 키가 없으면 `None`.
    pub fn stored_ttl(&self, key: &str) -> Option<Option<u64>> {
        self.state.entries.lock().unwrap().get(key).map(|(_, ttl)| *ttl)
    }

    pub fn connect_count(&self) -> usize {
        self.state.connects.load(Ordering::SeqCst)
    }

    pub fn set_count(&self) -> usize {
        self.state.sets.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CacheConnector for FakeCacheConnector {
    async fn connect(&self) -> Result<Arc<dyn CacheConnection>, CacheError> {
        self.state.connects.fetch_add(1, Ordering::SeqCst);

        // 동시 요청이 연결 수립 중에 겹치도록 지연
        actix_web::rt::time::sleep(Duration::from_millis(10)).await;

        if self.state.fail_connect.load(Ordering::SeqCst) {
            return Err(CacheError::Connection("connection refused".to_string()));
        }

        Ok(Arc::new(FakeCacheConnection { state: self.state.clone() }))
    }
}

struct FakeCacheConnection {
    state: Arc<FakeCacheState>,
}

#[async_trait]
impl CacheConnection for FakeCacheConnection {
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        if self.state.fail_get.load(Ordering::SeqCst) {
            return Err(CacheError::Command("GET failed".to_string()));
        }
        Ok(self.state.entries.lock().unwrap().get(key).map(|(raw, _)| raw.clone()))
    }

    async fn set(&self, key: &str, value: String, ttl: Option<u64>) -> Result<(), CacheError> {
        if self.state.fail_set.load(Ordering::SeqCst) {
            return Err(CacheError::Command("SET failed".to_string()));
        }
        self.state.sets.fetch_add(1, Ordering::SeqCst);
        self.state.entries.lock().unwrap().insert(key.to_string(), (value, ttl));
        Ok(())
    }
}
