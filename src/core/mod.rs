//! # Core Module
//!
//! 애플리케이션 전역에서 쓰이는 기반 타입을 제공합니다.
//!
//! ## 모듈 구성
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: 애플리케이션 전역 에러 타입 정의
//! - **HTTP 통합**: Actix-Web ResponseError 구현
//! - **ErrorContext**: 핸들러 경계에서 500 메시지 지정
//!
//! ### [`state`] - 의존성 주입
//! - **AppState**: 기동 시 구성되어 `web::Data`로 공유되는 서비스 묶음
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use geo_user_service::core::{AppState, ErrorContext};
//!
//! #[get("/listing", wrap = "AuthMiddleware")]
//! async fn listing(
//!     state: web::Data<AppState>,
//!     query: web::Query<ListingQuery>,
//! ) -> Result<HttpResponse, AppError> {
//!     let groups = state.users.list_by_weekdays(&query).await.context("Listing error")?;
//!     Ok(HttpResponse::Ok().json(ListingResponse::ok(groups)))
//! }
//! ```

pub mod errors;
pub mod state;

pub use errors::*;
pub use state::*;
