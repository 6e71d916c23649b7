//! # Domain Entities Module
//!
//! MongoDB 문서와 직접 매핑되는 엔티티들을 정의합니다.
//!
//! ```text
//! entities/
//! └── users/
//!     └── user.rs     ← User 엔티티, UserChanges
//! ```

pub mod users;
