//! # Service Layer
//!
//! - [`users`] - 사용자 등록/조회/수정/삭제, 로그인 검증
//! - [`auth`] - JWT 발급과 검증

pub mod users;
pub mod auth;
