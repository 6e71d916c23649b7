//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 모든 핸들러 에러를
//! HTTP 경계에서 일관된 JSON 응답으로 변환합니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 응답 본문 |
//! |----------|-------------|-----------|
//! | `NotFound` | 404 Not Found | `{"error": "..."}` |
//! | 그 외 모든 에러 | 500 Internal Server Error | `{"err": "..."}` |
//!
//! 인증 실패, 유니크 제약 위반, 입력값 오류도 500으로 응답합니다.
//! 클라이언트는 실패 종류를 상태 코드가 아닌 메시지로만 구분할 수 있습니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::AppError;
//!
//! let user = store.find_by_id(&id).await?
//!     .ok_or_else(|| AppError::NotFound("users not found".to_string()))?;
//! ```

use actix_web::http::StatusCode;
use thiserror::Error;

/// 애플리케이션 전역 에러 타입
#[derive(Error, Debug)]
pub enum AppError {
    /// 데이터베이스 관련 에러 (500)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 입력값 검증 에러 (500)
    ///
    /// 요청 본문 파싱 실패, 잘못된 ObjectId 형식 등
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 리소스 찾을 수 없음 에러 (404)
    #[error("Not found: {0}")]
    NotFound(String),

    /// 유니크 제약 위반 (500)
    ///
    /// 이메일, 계좌번호, 신원번호 중복 시 발생합니다.
    #[error("Conflict error: {0}")]
    ConflictError(String),

    /// 인증 실패 에러 (500)
    ///
    /// 토큰 누락, 서명 불일치, 만료, 잘못된 로그인 정보를 모두 포함합니다.
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// 내부 서버 에러 (500)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 접두사 없이 원본 메시지만 반환합니다.
    ///
    /// 응답 본문에는 이 메시지가 그대로 담깁니다.
    pub fn message(&self) -> &str {
        match self {
            AppError::DatabaseError(msg)
            | AppError::ValidationError(msg)
            | AppError::NotFound(msg)
            | AppError::ConflictError(msg)
            | AppError::AuthenticationError(msg)
            | AppError::InternalError(msg) => msg,
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// 에러를 JSON 응답으로 변환합니다.
    ///
    /// - `NotFound` → `{"error": message}`
    /// - 나머지 → `{"err": message}`
    fn error_response(&self) -> actix_web::HttpResponse {
        let body = match self {
            AppError::NotFound(msg) => serde_json::json!({ "error": msg }),
            other => {
                log::error!("요청 처리 실패: {}", other);
                serde_json::json!({ "err": other.message() })
            }
        };

        actix_web::HttpResponse::build(self.status_code()).json(body)
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}

/// JSON 요청 본문 파싱 실패를 AppError로 변환하는 actix 설정
///
/// `App::app_data(json_config())`로 등록하면 잘못된 본문도
/// `{"err": ...}` 형식으로 응답됩니다.
pub fn json_config() -> actix_web::web::JsonConfig {
    actix_web::web::JsonConfig::default().error_handler(|err, _req| {
        AppError::ValidationError(err.to_string()).into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;
    use actix_web::body::MessageBody;

    fn body_json(error: &AppError) -> serde_json::Value {
        let bytes = error
            .error_response()
            .into_body()
            .try_into_bytes()
            .expect("in-memory body");
        serde_json::from_slice(&bytes).expect("json body")
    }

    #[test]
    fn test_not_found_error_response() {
        let error = AppError::NotFound("users not found".to_string());

        assert_eq!(error.error_response().status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(&error), serde_json::json!({ "error": "users not found" }));
    }

    #[test]
    fn test_authentication_error_is_server_error() {
        let error = AppError::AuthenticationError("invalid token".to_string());

        assert_eq!(error.error_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(&error), serde_json::json!({ "err": "invalid token" }));
    }

    #[test]
    fn test_conflict_error_keeps_underlying_message() {
        let error = AppError::ConflictError("email already exists".to_string());

        assert_eq!(error.error_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(&error)["err"], "email already exists");
    }

    #[test]
    fn test_error_context_trait() {
        let result: Result<(), &str> = Err("original error");
        let app_result = result.context("Additional context");

        if let Err(AppError::InternalError(msg)) = app_result {
            assert!(msg.contains("Additional context"));
            assert!(msg.contains("original error"));
        } else {
            panic!("Expected InternalError");
        }
    }
}
