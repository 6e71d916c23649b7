//! 미들웨어 모듈
//!
//! # 제공 미들웨어
//!
//! ### 인증 미들웨어 (AuthMiddleware)
//! - `Authorization` 헤더의 JWT 검증 (`Bearer` 접두사는 선택)
//! - 검증된 호출자를 request extension에 [`AuthenticatedUser`](crate::domain::models::auth::AuthenticatedUser)로 저장
//! - 실패 시 핸들러를 호출하지 않고 `500 {"err": ...}`로 응답
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! App::new()
//!     .app_data(state)
//!     .service(
//!         web::scope("/user")
//!             .wrap(AuthMiddleware)
//!             .route("", web::get().to(list_users))
//!     )
//! ```

pub mod auth_middleware;
mod auth_inner;

// 미들웨어 재export
pub use auth_middleware::AuthMiddleware;
