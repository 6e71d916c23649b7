//! # Configuration Module
//!
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 서버, MongoDB, Redis 캐시, 비밀번호 해싱 설정
//! - [`auth_config`] - JWT 관련 설정
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버 설정
//! export HOST="0.0.0.0"
//! export PORT="8080"
//!
//! # 저장소
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="user_auth"
//!
//! # 캐시 (둘 중 하나라도 없으면 캐시 비활성화)
//! export REDIS_HOST="127.0.0.1"
//! export REDIS_PORT="6379"
//! export CACHE_TTL="60"
//!
//! # JWT
//! export JWT_SECRET_KEY="your-super-secret-key"
//! ```

pub mod data_config;
pub mod auth_config;

pub use data_config::*;
pub use auth_config::*;
