//! # User Management HTTP Handlers
//!
//! `/user` 스코프의 핸들러입니다. 모든 요청은 [`AuthMiddleware`](crate::middlewares::AuthMiddleware)를
//! 통과한 뒤에만 도달합니다.
//!
//! | 메서드 | 경로 | 설명 | 실패 |
//! |--------|------|------|------|
//! | `GET` | `/user` | 전체 사용자 목록 (캐시) | 404 `{"error": "users not found"}` |
//! | `GET` | `/user/{id}` | 계좌번호/신원번호로 조회 | 404 `{"error": ...}` |
//! | `PATCH` | `/user/{id}` | 이메일/사용자명 수정 | 404 `{"error": "users not found"}` |
//! | `DELETE` | `/user/{id}` | 사용자 삭제 | 404 `{"error": "users not found"}` |
//!
//! 그 외 모든 실패는 `500 {"err": ...}`로 응답합니다.

use actix_web::{delete, get, patch, web, HttpResponse};

use crate::core::AppState;
use crate::domain::dto::users::UpdateUserRequest;
use crate::domain::models::auth::AuthenticatedUser;
use crate::errors::AppError;

#[get("")]
pub async fn list_users(
    state: web::Data<AppState>,
    caller: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    log::info!("getUsers:: 전체 사용자 조회 (요청자: {})", caller.email);

    let users = state.user_service.list_users().await?;

    Ok(HttpResponse::Ok().json(users))
}

/// 경로의 `id`는 계좌번호 또는 신원번호입니다.
#[get("/{id}")]
pub async fn get_user(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    log::info!("getUserByPin:: 계좌번호 / 신원번호 {} 조회", id);

    let user = state.user_service.find_by_identifier(&id).await?;

    Ok(HttpResponse::Ok().json(user))
}

/// 경로의 `id`는 문서 ID입니다.
#[patch("/{id}")]
pub async fn update_user(
    state: web::Data<AppState>,
    id: web::Path<String>,
    payload: web::Json<UpdateUserRequest>,
) -> Result<HttpResponse, AppError> {
    log::info!("updateUserById:: 사용자 {} 수정", id);

    let user = state
        .user_service
        .update_user(&id, payload.into_inner().into())
        .await?;

    Ok(HttpResponse::Ok().json(user))
}

#[delete("/{id}")]
pub async fn delete_user(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    log::info!("deleteUserById:: 사용자 {} 삭제", id);

    let response = state.user_service.delete_user(&id).await?;

    Ok(HttpResponse::Ok().json(response))
}
