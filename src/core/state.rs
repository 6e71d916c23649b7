//! 애플리케이션 공유 상태
//!
//! `main`에서 한 번 구성되어 `web::Data<AppState>`로 모든 워커에 공유됩니다.

use std::sync::Arc;

use crate::caching::ReadThroughCache;
use crate::repositories::users::UserStore;
use crate::services::auth::TokenService;
use crate::services::users::UserService;

pub struct AppState {
    pub user_service: UserService,
    pub token_service: TokenService,
}

impl AppState {
    pub fn new(user_service: UserService, token_service: TokenService) -> Self {
        Self { user_service, token_service }
    }

    /// 저장소, 캐시, 토큰 설정으로 상태를 조립합니다.
    pub fn build(
        store: Arc<dyn UserStore>,
        cache: ReadThroughCache,
        cache_ttl: Option<u64>,
        token_service: TokenService,
    ) -> Self {
        let user_service = UserService::new(store, Arc::new(cache), cache_ttl);
        Self::new(user_service, token_service)
    }
}
