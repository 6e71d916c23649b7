//! User Entity Implementation
//!
//! `users` 컬렉션에 저장되는 사용자 문서입니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 사용자 엔티티
///
/// `email`, `account_number`, `identity_number`는 각각 전역적으로 유일합니다.
/// 두 식별번호는 가입 시 서버에서 생성되며 이후 변경되지 않습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub username: String,
    /// 사용자 이메일 (unique)
    pub email: String,
    /// bcrypt 해시 (평문은 저장하지 않음)
    pub password: String,
    /// 계좌번호 (unique, UUID v4)
    pub account_number: String,
    /// 신원번호 (unique, UUID v4)
    pub identity_number: String,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl User {
    /// 새 사용자 생성
    ///
    /// `password_hash`는 이미 해시된 값이어야 합니다.
    pub fn new(
        username: String,
        email: String,
        password_hash: String,
        account_number: String,
        identity_number: String,
    ) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            username,
            email,
            password: password_hash,
            account_number,
            identity_number,
            created_at: now,
            updated_at: now,
        }
    }

    /// 문서 ID를 16진수 문자열로 반환합니다. 저장 전이면 빈 문자열.
    pub fn id_string(&self) -> String {
        self.id.map(|id| id.to_hex()).unwrap_or_default()
    }
}

/// 사용자 부분 수정 내용
///
/// `None`인 필드는 변경하지 않습니다.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserChanges {
    pub email: Option<String>,
    pub username: Option<String>,
}

impl UserChanges {
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.username.is_none()
    }
}
