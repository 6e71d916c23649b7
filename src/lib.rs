//! 사용자 인증 서비스
//!
//! 사용자 등록, 로그인, 토큰으로 보호되는 사용자 관리 API를 제공하는 Rust 서비스입니다.
//!
//! # Features
//!
//! - **사용자 관리**: 등록, 계좌번호/신원번호 조회, 목록 조회, 수정, 삭제
//! - **JWT 인증**: HS256 공유 비밀키 기반 1시간짜리 액세스 토큰
//! - **읽기 관통 캐시**: Redis 기반 사용자 목록 캐시, 장애 시 저장소 직접 조회
//! - **MongoDB**: 사용자 데이터 영구 저장
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트 + AuthMiddleware
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 비즈니스 로직 (UserService, TokenService)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐     ┌──────────────────┐
//! │  Repositories   │     │ ReadThroughCache │
//! └─────────────────┘     └──────────────────┘
//!          │                       │
//!          ▼                       ▼
//!       MongoDB                  Redis
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use user_auth_service::core::AppState;
//!
//! let state = web::Data::new(AppState::build(store, cache, ttl, TokenService::from_env()));
//!
//! let user = state.user_service.register(request).await?;
//! let token = state.token_service.generate_token(&user.email)?;
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod caching;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod errors;
pub mod middlewares;

#[cfg(test)]
mod test_support;
