//! 에러 처리 모듈
//!
//! 애플리케이션 전역에서 사용하는 [`AppError`](errors::AppError)와
//! 관련 헬퍼를 제공합니다.

pub mod errors;

pub use errors::*;
