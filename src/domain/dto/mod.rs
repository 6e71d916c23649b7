//! # Data Transfer Objects
//!
//! API 경계에서 주고받는 요청/응답 구조체입니다.

pub mod users;

pub use users::*;
