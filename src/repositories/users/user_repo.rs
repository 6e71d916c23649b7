//! # 사용자 리포지토리 구현
//!
//! 사용자 엔티티의 데이터 액세스 계층입니다.
//!
//! - [`UserStore`] - 서비스 계층이 의존하는 저장소 추상화
//! - [`MongoUserRepository`] - `users` 컬렉션 기반 MongoDB 구현
//!
//! ## 데이터 무결성
//!
//! `email`, `accountNumber`, `identityNumber`에 유니크 인덱스가 걸려 있으며,
//! 중복 키 에러(코드 11000)는 [`AppError::ConflictError`]로 변환됩니다.

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId, DateTime, Document},
    error::{ErrorKind, WriteFailure},
    options::{IndexOptions, ReturnDocument},
    Collection, IndexModel,
};

use crate::{
    db::Database,
    domain::entities::users::{User, UserChanges},
    errors::{AppError, AppResult},
};

/// MongoDB 중복 키 에러 코드
const DUPLICATE_KEY_CODE: i32 = 11000;

/// 사용자 저장소 추상화
///
/// 조회 메서드는 대상이 없으면 `Ok(None)`을 반환합니다.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// 새 사용자를 저장하고 `_id`가 채워진 엔티티를 반환합니다.
    async fn insert(&self, user: User) -> AppResult<User>;

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    async fn find_by_account_number(&self, account_number: &str) -> AppResult<Option<User>>;

    async fn find_by_identity_number(&self, identity_number: &str) -> AppResult<Option<User>>;

    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<User>>;

    /// 변경 사항을 적용합니다.
    ///
    /// 대상이 존재했다면 변경 전 문서를, 없었다면 `None`을 반환합니다.
    async fn update_by_id(&self, id: &ObjectId, changes: UserChanges) -> AppResult<Option<User>>;

    /// 삭제된 문서를 반환합니다. 대상이 없었다면 `None`.
    async fn delete_by_id(&self, id: &ObjectId) -> AppResult<Option<User>>;

    async fn find_all(&self) -> AppResult<Vec<User>>;
}

/// MongoDB 기반 사용자 리포지토리
///
/// ```rust,ignore
/// let repo = MongoUserRepository::new(&database);
/// repo.create_indexes().await?;
///
/// let user = repo.find_by_account_number("0b6c...").await?;
/// ```
#[derive(Clone)]
pub struct MongoUserRepository {
    collection: Collection<User>,
}

impl MongoUserRepository {
    pub const COLLECTION_NAME: &'static str = "users";

    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.get_database().collection::<User>(Self::COLLECTION_NAME),
        }
    }

    /// 유니크 인덱스를 생성합니다. 이미 있으면 아무 일도 하지 않습니다.
    pub async fn create_indexes(&self) -> AppResult<()> {
        let unique = |field: &str, name: &str| {
            let mut keys = Document::new();
            keys.insert(field, 1);

            IndexModel::builder()
                .keys(keys)
                .options(IndexOptions::builder()
                    .unique(true)
                    .name(name.to_string())
                    .build())
                .build()
        };

        self.collection
            .create_indexes([
                unique("email", "email_unique"),
                unique("accountNumber", "account_number_unique"),
                unique("identityNumber", "identity_number_unique"),
            ])
            .await
            .map_err(map_mongo_error)?;

        log::info!("users 컬렉션 인덱스 준비 완료");
        Ok(())
    }

    async fn find_one_by(&self, filter: Document) -> AppResult<Option<User>> {
        self.collection
            .find_one(filter)
            .await
            .map_err(map_mongo_error)
    }
}

#[async_trait]
impl UserStore for MongoUserRepository {
    async fn insert(&self, mut user: User) -> AppResult<User> {
        let result = self.collection
            .insert_one(&user)
            .await
            .map_err(map_mongo_error)?;

        let id = result.inserted_id.as_object_id().ok_or_else(|| {
            AppError::InternalError("삽입된 문서의 ID를 확인할 수 없습니다".to_string())
        })?;
        user.id = Some(id);

        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        self.find_one_by(doc! { "email": email }).await
    }

    async fn find_by_account_number(&self, account_number: &str) -> AppResult<Option<User>> {
        self.find_one_by(doc! { "accountNumber": account_number }).await
    }

    async fn find_by_identity_number(&self, identity_number: &str) -> AppResult<Option<User>> {
        self.find_one_by(doc! { "identityNumber": identity_number }).await
    }

    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<User>> {
        self.find_one_by(doc! { "_id": *id }).await
    }

    async fn update_by_id(&self, id: &ObjectId, changes: UserChanges) -> AppResult<Option<User>> {
        if changes.is_empty() {
            return self.find_by_id(id).await;
        }

        let mut set = doc! { "updatedAt": DateTime::now() };
        if let Some(email) = changes.email {
            set.insert("email", email);
        }
        if let Some(username) = changes.username {
            set.insert("username", username);
        }

        self.collection
            .find_one_and_update(doc! { "_id": *id }, doc! { "$set": set })
            .return_document(ReturnDocument::Before)
            .await
            .map_err(map_mongo_error)
    }

    async fn delete_by_id(&self, id: &ObjectId) -> AppResult<Option<User>> {
        self.collection
            .find_one_and_delete(doc! { "_id": *id })
            .await
            .map_err(map_mongo_error)
    }

    async fn find_all(&self) -> AppResult<Vec<User>> {
        let cursor = self.collection
            .find(doc! {})
            .await
            .map_err(map_mongo_error)?;

        cursor.try_collect().await.map_err(map_mongo_error)
    }
}

/// MongoDB 에러를 AppError로 변환합니다.
///
/// 중복 키 위반은 `ConflictError`, 그 외는 `DatabaseError`입니다.
pub(crate) fn map_mongo_error(e: mongodb::error::Error) -> AppError {
    let duplicate = match e.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_error)) => {
            (write_error.code == DUPLICATE_KEY_CODE).then(|| write_error.message.clone())
        }
        ErrorKind::Command(command_error) => {
            (command_error.code == DUPLICATE_KEY_CODE).then(|| command_error.message.clone())
        }
        _ => None,
    };

    match duplicate {
        Some(message) => AppError::ConflictError(message),
        None => AppError::DatabaseError(e.to_string()),
    }
}
