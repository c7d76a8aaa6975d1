//! # 사용자 관리 서비스 구현
//!
//! 사용자 계정에 대한 비즈니스 로직을 구현합니다.
//!
//! ## 서비스 아키텍처
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                         UserService                             │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────┐  │
//! │  │  Registration   │  │  Status Toggle  │  │  Geo / Listing  │  │
//! │  │ • Input Valid   │  │ • Single Update │  │ • Haversine     │  │
//! │  │ • Duplicate Chk │  │                 │  │ • Weekday Group │  │
//! │  │ • Password Hash │  │                 │  │                 │  │
//! │  │ • Token Issue   │  │                 │  │                 │  │
//! │  └─────────────────┘  └─────────────────┘  └─────────────────┘  │
//! └─────────────────────────────────────────────────────────────────┘
//!                 │                                  │
//!                 ▼                                  ▼
//! ┌───────────────────────────────┐  ┌──────────────────────────────┐
//! │  UserStore (Mongo / Memory)   │  │        TokenService          │
//! └───────────────────────────────┘  └──────────────────────────────┘
//! ```
//!
//! ## 보안 설계 원칙
//!
//! - **bcrypt 해싱**: 환경별 cost (기본 10, 테스트 4)
//! - **민감 정보 제거**: 응답 변환 시 비밀번호 해시 제외
//! - **중복 방지**: 사전 조회 + 유니크 인덱스 이중 확인

use std::sync::Arc;
use bcrypt::hash;
use crate::core::errors::AppError;
use crate::domain::dto::users::request::{DistanceQuery, ListingQuery, RegisterUserRequest};
use crate::domain::dto::users::response::{RegisterResponse, RegisteredUser};
use crate::domain::entities::users::User;
use crate::domain::models::auth::AuthenticatedUser;
use crate::domain::models::listing::WeekdayGroups;
use crate::repositories::users::UserStore;
use crate::services::auth::TokenService;
use crate::utils::distance::haversine_km;

/// 사용자 관리 비즈니스 로직 서비스
///
/// 저장소와 토큰 서비스를 생성 시점에 주입받습니다.
/// 모든 메서드는 `Result<T, AppError>`를 반환하며 500 응답 메시지는
/// 핸들러 경계에서 정해집니다.
///
/// ## 사용 예제
///
/// ```rust,ignore
/// let service = UserService::new(store, tokens, PasswordConfig::bcrypt_cost());
/// let response = service.register(request).await?;
/// println!("{}", response.data.token);
/// ```
pub struct UserService {
    store: Arc<dyn UserStore>,
    tokens: Arc<TokenService>,
    bcrypt_cost: u32,
}

impl UserService {
    pub fn new(store: Arc<dyn UserStore>, tokens: Arc<TokenService>, bcrypt_cost: u32) -> Self {
        Self {
            store,
            tokens,
            bcrypt_cost,
        }
    }

    /// 새 사용자 계정 생성
    ///
    /// # 처리 과정
    ///
    /// 1. **입력 검증**: 6개 필드 모두 존재해야 함
    /// 2. **중복 검사**: 같은 이메일이 있으면 거부 (저장 없음)
    /// 3. **비밀번호 해싱**: bcrypt
    /// 4. **저장**: 상태 `active`, 가입 시각은 현재 시각
    /// 5. **토큰 발급**: 새 레코드 ID로 세션 토큰 발급
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - `"All fields are required"`
    /// * `AppError::ConflictError` - `"Email already used"`
    /// * `AppError::InternalError` / `DatabaseError` - 해싱, 저장, 서명 실패
    pub async fn register(&self, request: RegisterUserRequest) -> Result<RegisterResponse, AppError> {
        let start_time = std::time::Instant::now();
        let fields = request.into_fields()?;

        if self.store.find_by_email(&fields.email).await?.is_some() {
            log::info!("중복 가입 시도: {}", fields.email);
            return Err(AppError::ConflictError("Email already used".to_string()));
        }

        let hash_start = std::time::Instant::now();
        let password_hash = hash(&fields.password, self.bcrypt_cost)
            .map_err(|e| AppError::internal("Password hashing failed", e))?;
        log::debug!("Password hashing took: {:?}", hash_start.elapsed());

        let user = User::new(
            fields.name,
            fields.email,
            password_hash,
            fields.address,
            fields.latitude,
            fields.longitude,
        );

        let created_user = self.store.create(user).await?;
        let token = self.tokens.issue_token(&created_user)?;

        log::info!(
            "사용자 등록 완료: {} ({:?})",
            created_user.email,
            start_time.elapsed()
        );

        Ok(RegisterResponse::ok(RegisteredUser::new(created_user, token)))
    }

    /// 모든 사용자의 상태를 반전합니다.
    ///
    /// 호출자와 무관하게 전체 레코드가 대상입니다.
    pub async fn toggle_all_statuses(&self) -> Result<u64, AppError> {
        let modified = self.store.toggle_all_statuses().await?;
        log::info!("사용자 상태 토글: {}건", modified);

        Ok(modified)
    }

    /// 인증된 사용자의 저장 좌표에서 목적지까지의 거리(km)
    ///
    /// 숫자로 해석되지 않는 좌표는 `NaN` 거리가 됩니다.
    pub fn distance_from(&self, caller: &AuthenticatedUser, query: &DistanceQuery) -> Result<f64, AppError> {
        let (destination_lat, destination_long) = query.destination()?;
        let (latitude, longitude) = caller.coordinates();

        Ok(haversine_km(latitude, longitude, destination_lat, destination_long))
    }

    /// 요청 요일 번호별로 가입 사용자를 묶습니다.
    pub async fn list_by_weekdays(&self, query: &ListingQuery) -> Result<WeekdayGroups, AppError> {
        let requested = query.week_numbers()?;

        self.store.list_by_weekdays(&requested).await
    }

    /// 토큰의 사용자 ID로 현재 사용자 레코드를 조회합니다.
    pub async fn resolve_user(&self, user_id: &str) -> Result<Option<User>, AppError> {
        self.store.find_by_id(user_id).await
    }
}
