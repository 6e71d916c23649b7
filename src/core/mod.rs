//! 애플리케이션 코어
//!
//! 요청 간에 공유되는 상태를 정의합니다.

pub mod state;

pub use state::AppState;
