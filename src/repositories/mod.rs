//! # Repository Layer
//!
//! 영속성 계층입니다. 서비스는 [`users::UserStore`] trait에만 의존하고,
//! 실제 구현은 `main`에서 주입됩니다.

pub mod users;
