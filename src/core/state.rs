//! 애플리케이션 공유 상태
//!
//! 기동 시 한 번 구성되어 `web::Data<AppState>`로 모든 워커에 공유됩니다.
//! 핸들러와 인증 미들웨어는 전역 조회 없이 이 상태에서 서비스를 꺼내 씁니다.

use std::sync::Arc;
use crate::repositories::users::UserStore;
use crate::services::auth::TokenService;
use crate::services::users::UserService;

/// 요청 처리에 필요한 서비스 묶음
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<UserService>,
    pub tokens: Arc<TokenService>,
}

impl AppState {
    /// 저장소와 토큰 서비스로 상태를 구성합니다.
    ///
    /// ```rust,ignore
    /// let store: Arc<dyn UserStore> = Arc::new(MongoUserRepository::new(&database));
    /// let state = AppState::new(store, TokenService::from_config()?, PasswordConfig::bcrypt_cost());
    /// ```
    pub fn new(store: Arc<dyn UserStore>, tokens: TokenService, bcrypt_cost: u32) -> Self {
        let tokens = Arc::new(tokens);
        let users = Arc::new(UserService::new(store, tokens.clone(), bcrypt_cost));

        Self { users, tokens }
    }
}
