//! Users Entity Module
//!
//! 사용자 도메인의 영속 엔티티를 정의합니다.

pub mod user;

pub use user::{User, UserChanges};
