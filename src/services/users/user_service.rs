//! # 사용자 관리 서비스 구현
//!
//! 사용자 등록, 로그인 검증, 식별번호 조회, 목록 조회, 수정, 삭제를 담당합니다.
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │                 UserService                  │
//! │  register / verify_password                  │
//! │  find_by_identifier  (계좌번호 → 신원번호)       │
//! │  list_users          (GET_USERS 읽기 관통 캐시)  │
//! │  update_user / delete_user                   │
//! └──────────────────────────────────────────────┘
//!            │                       │
//!            ▼                       ▼
//!   dyn UserStore (MongoDB)   ReadThroughCache (Redis)
//! ```
//!
//! ## 보안
//!
//! - 비밀번호는 bcrypt(cost 10)로 해시한 뒤에만 저장합니다.
//! - 응답에는 비밀번호 해시가 포함되지 않습니다.
//! - 존재하지 않는 이메일과 틀린 비밀번호는 같은 에러로 응답합니다.
//!
//! 쓰기 작업 후 사용자 목록 캐시는 무효화하지 않으며, ttl 만료까지 이전 목록이 반환될 수 있습니다.

use std::sync::Arc;
use bcrypt::hash;
use mongodb::bson::oid::ObjectId;
use uuid::Uuid;
use validator::Validate;

use crate::{
    caching::ReadThroughCache,
    config::PasswordConfig,
    domain::{
        dto::users::{CreateUserRequest, LoginRequest, MessageResponse, UserResponse},
        entities::users::{User, UserChanges},
    },
    errors::{AppError, AppResult, ErrorContext},
    repositories::users::UserStore,
};

/// 사용자 목록 캐시 키
pub const USERS_CACHE_KEY: &str = "GET_USERS";
/// 로그인 실패 시 공통 메시지
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid Credentials";
/// 목록이 비었거나 수정/삭제 대상이 없을 때의 메시지
pub const USERS_NOT_FOUND_MESSAGE: &str = "users not found";

pub struct UserService {
    store: Arc<dyn UserStore>,
    cache: Arc<ReadThroughCache>,
    /// 사용자 목록 캐시 만료 시간 (초)
    cache_ttl: Option<u64>,
}

impl UserService {
    pub fn new(store: Arc<dyn UserStore>, cache: Arc<ReadThroughCache>, cache_ttl: Option<u64>) -> Self {
        Self { store, cache, cache_ttl }
    }

    /// 새 사용자를 등록합니다.
    ///
    /// 계좌번호와 신원번호는 서로 독립적인 UUID v4로 생성됩니다.
    /// 이메일이나 식별번호가 중복되면 `ConflictError`를 반환합니다.
    pub async fn register(&self, request: CreateUserRequest) -> AppResult<UserResponse> {
        request
            .validate()
            .map_err(|e| AppError::ValidationError(e.to_string()))?;

        log::info!("register:: 사용자 생성 시작 ({})", request.email);

        let password_hash = hash(&request.password, PasswordConfig::BCRYPT_COST)
            .context("비밀번호 해싱 실패")?;

        let user = User::new(
            request.username,
            request.email,
            password_hash,
            Uuid::new_v4().to_string(),
            Uuid::new_v4().to_string(),
        );

        let created = self.store.insert(user).await?;
        log::info!("register:: 사용자 생성 완료 (id: {})", created.id_string());

        Ok(UserResponse::from(created))
    }

    /// 계좌번호 또는 신원번호로 사용자를 조회합니다.
    ///
    /// 계좌번호로 먼저 찾고, 없을 때만 신원번호로 다시 찾습니다.
    pub async fn find_by_identifier(&self, identifier: &str) -> AppResult<UserResponse> {
        let user = match self.store.find_by_account_number(identifier).await? {
            Some(user) => Some(user),
            None => self.store.find_by_identity_number(identifier).await?,
        };

        user.map(UserResponse::from).ok_or_else(|| {
            AppError::NotFound(format!(
                "user with account number / identity number {} not found",
                identifier
            ))
        })
    }

    /// 전체 사용자 목록을 조회합니다.
    ///
    /// `GET_USERS` 키로 캐시되며, 목록이 비어 있으면 `NotFound`입니다.
    pub async fn list_users(&self) -> AppResult<Vec<UserResponse>> {
        let users: Vec<UserResponse> = self
            .cache
            .get_or_load(USERS_CACHE_KEY, self.cache_ttl, || async {
                let users = self.store.find_all().await?;
                Ok::<_, AppError>(users.into_iter().map(UserResponse::from).collect::<Vec<_>>())
            })
            .await?;

        if users.is_empty() {
            return Err(AppError::NotFound(USERS_NOT_FOUND_MESSAGE.to_string()));
        }

        Ok(users)
    }

    /// 이메일과 사용자명을 수정하고 수정된 전체 레코드를 반환합니다.
    pub async fn update_user(&self, id: &str, changes: UserChanges) -> AppResult<UserResponse> {
        let object_id = parse_object_id(id)?;

        let previous = self.store.update_by_id(&object_id, changes).await?;
        if previous.is_none() {
            return Err(AppError::NotFound(USERS_NOT_FOUND_MESSAGE.to_string()));
        }

        self.store
            .find_by_id(&object_id)
            .await?
            .map(UserResponse::from)
            .ok_or_else(|| AppError::NotFound(USERS_NOT_FOUND_MESSAGE.to_string()))
    }

    pub async fn delete_user(&self, id: &str) -> AppResult<MessageResponse> {
        let object_id = parse_object_id(id)?;

        match self.store.delete_by_id(&object_id).await? {
            Some(_) => Ok(MessageResponse::new(format!("user with id {} successfully deleted", id))),
            None => Err(AppError::NotFound(USERS_NOT_FOUND_MESSAGE.to_string())),
        }
    }

    /// 로그인 요청을 검증한 뒤 사용자를 인증합니다.
    pub async fn login(&self, request: LoginRequest) -> AppResult<User> {
        request
            .validate()
            .map_err(|e| AppError::ValidationError(e.to_string()))?;

        log::info!("login:: 로그인 시도 ({})", request.email);

        self.verify_password(&request.email, &request.password).await
    }

    /// 이메일과 비밀번호로 사용자를 인증합니다.
    ///
    /// 실패 원인(이메일 없음, 비밀번호 불일치)은 로그에만 남습니다.
    pub async fn verify_password(&self, email: &str, password: &str) -> AppResult<User> {
        let invalid = || AppError::AuthenticationError(INVALID_CREDENTIALS_MESSAGE.to_string());

        let Some(user) = self.store.find_by_email(email).await? else {
            log::warn!("login:: 존재하지 않는 이메일: {}", email);
            return Err(invalid());
        };

        let is_valid = bcrypt::verify(password, &user.password)
            .context("비밀번호 검증 실패")?;

        if !is_valid {
            log::warn!("login:: 비밀번호 불일치: {}", email);
            return Err(invalid());
        }

        Ok(user)
    }
}

fn parse_object_id(id: &str) -> AppResult<ObjectId> {
    ObjectId::parse_str(id)
        .map_err(|_| AppError::ValidationError(format!("유효하지 않은 ID 형식입니다: {}", id)))
}
