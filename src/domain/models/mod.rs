//! 인증 관련 도메인 모델
//!
//! - [`auth`] - 미들웨어가 검증한 호출자 정보
//! - [`token`] - JWT 클레임

pub mod auth;
pub mod token;
