//! # User HTTP Handlers
//!
//! `/api/users` 아래의 엔드포인트를 처리하는 핸들러 함수들입니다.
//!
//! ## 엔드포인트
//!
//! | 메서드 | 경로 | 인증 | 설명 |
//! |--------|------|------|------|
//! | `POST` | `/register` | - | 가입 및 토큰 발급 |
//! | `PATCH` | `/toggle-status` | Bearer | 전체 사용자 상태 반전 |
//! | `GET` | `/distance` | Bearer | 호출자 좌표에서 목적지까지 거리(km) |
//! | `GET` | `/listing` | Bearer | 가입 요일별 사용자 목록 |
//! | `GET` | `/test` | - | 라우터 동작 확인 |
//!
//! 서버 측 실패는 핸들러마다 정해진 메시지로 500 응답합니다.

use actix_web::{get, patch, post, web, HttpResponse};
use crate::core::{AppError, AppState, ErrorContext};
use crate::domain::dto::users::request::{DistanceQuery, ListingQuery, RegisterUserRequest};
use crate::domain::dto::users::response::{DistanceResponse, ListingResponse, MessageResponse};
use crate::domain::models::auth::AuthenticatedUser;
use crate::middlewares::AuthMiddleware;

/// 사용자 가입
///
/// ```bash
/// curl -X POST http://localhost:3000/api/users/register \
///   -H "Content-Type: application/json" \
///   -d '{"name":"Ann","email":"ann@example.com","password":"pw","address":"Seoul","latitude":37.56,"longitude":126.97}'
/// ```
#[post("/register")]
pub async fn register(
    state: web::Data<AppState>,
    payload: web::Json<RegisterUserRequest>,
) -> Result<HttpResponse, AppError> {
    let response = state.users
        .register(payload.into_inner())
        .await
        .context("Server error")?;

    Ok(HttpResponse::Ok().json(response))
}

/// 모든 사용자의 `active`/`inactive` 상태를 반전합니다.
#[patch("/toggle-status", wrap = "AuthMiddleware")]
pub async fn toggle_status(
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    state.users
        .toggle_all_statuses()
        .await
        .context("Error toggling status")?;

    Ok(HttpResponse::Ok().json(MessageResponse::ok("All users' status toggled")))
}

/// 호출자의 저장 좌표에서 목적지까지의 거리
///
/// ```bash
/// curl "http://localhost:3000/api/users/distance?destination_lat=35.17&destination_long=129.07" \
///   -H "Authorization: Bearer <token>"
/// ```
#[get("/distance", wrap = "AuthMiddleware")]
pub async fn distance(
    state: web::Data<AppState>,
    caller: AuthenticatedUser,
    query: web::Query<DistanceQuery>,
) -> Result<HttpResponse, AppError> {
    let distance = state.users
        .distance_from(&caller, &query)
        .context("Distance error")?;

    Ok(HttpResponse::Ok().json(DistanceResponse::ok(distance)))
}

/// 가입 요일별 사용자 목록
///
/// `week_number`는 쉼표로 구분한 요일 번호(0=일요일 .. 6=토요일)입니다.
#[get("/listing", wrap = "AuthMiddleware")]
pub async fn listing(
    state: web::Data<AppState>,
    query: web::Query<ListingQuery>,
) -> Result<HttpResponse, AppError> {
    let groups = state.users
        .list_by_weekdays(&query)
        .await
        .context("Listing error")?;

    Ok(HttpResponse::Ok().json(ListingResponse::ok(groups)))
}

#[get("/test")]
pub async fn test_route() -> HttpResponse {
    log::info!("Test route hit");
    HttpResponse::Ok().body("Test route is working")
}
