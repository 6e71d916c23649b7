//! # Domain Layer Module
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── Entities      - MongoDB에 저장되는 사용자 문서
//! ├── DTOs          - HTTP 요청/응답 본문
//! └── Models        - 인증된 호출자, JWT 클레임
//! ```
//!
//! 응답 DTO는 비밀번호 해시를 포함하지 않으며, 캐시에도 응답 DTO 형태로 저장됩니다.

pub mod entities;
pub mod dto;
pub mod models;

pub use entities::users::{User, UserChanges};
pub use dto::users::{CreateUserRequest, LoginRequest, MessageResponse, TokenResponse, UpdateUserRequest, UserResponse};
pub use models::auth::AuthenticatedUser;
pub use models::token::TokenClaims;
