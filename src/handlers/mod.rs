//! # HTTP Handlers
//!
//! - [`auth`] - 공개 엔드포인트 (등록, 로그인)
//! - [`users`] - 토큰이 필요한 사용자 관리 엔드포인트

pub mod users;
pub mod auth;
