//! 사용자 수정 요청 DTO
//!
//! `PATCH /user/{id}` 본문입니다. 누락되었거나 빈 문자열인 필드는 수정하지 않습니다.
use serde::Deserialize;

use crate::domain::entities::users::UserChanges;
use crate::utils::string_utils::deserialize_non_empty_string;

#[derive(Debug, Default, Deserialize)]
pub struct UpdateUserRequest {
    #[serde(default, deserialize_with = "deserialize_non_empty_string")]
    pub email: Option<String>,

    #[serde(default, deserialize_with = "deserialize_non_empty_string")]
    pub username: Option<String>,
}

impl From<UpdateUserRequest> for UserChanges {
    fn from(request: UpdateUserRequest) -> Self {
        Self {
            email: request.email,
            username: request.username,
        }
    }
}
