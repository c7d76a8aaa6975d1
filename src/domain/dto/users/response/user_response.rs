//! 사용자 API 성공 응답 DTO
//!
//! 모든 성공 응답은 `status_code`(문자열)와 `message`를 포함합니다.

use chrono::{DateTime, Utc};
use serde::Serialize;
use crate::domain::entities::users::{User, UserStatus};
use crate::domain::models::listing::WeekdayGroups;

const OK: &str = "200";

/// 가입 응답의 사용자 공개 정보와 발급된 토큰
///
/// 비밀번호 해시는 포함하지 않습니다.
#[derive(Debug, Clone, Serialize)]
pub struct RegisteredUser {
    pub name: String,
    pub email: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    pub status: UserStatus,
    pub register_at: DateTime<Utc>,
    pub token: String,
}

impl RegisteredUser {
    pub fn new(user: User, token: String) -> Self {
        let register_at = user.registered_at();
        let User {
            name,
            email,
            address,
            latitude,
            longitude,
            status,
            ..
        } = user;

        Self {
            name,
            email,
            address,
            latitude,
            longitude,
            status,
            register_at,
            token,
        }
    }
}

/// `POST /api/users/register` 응답
#[derive(Debug, Clone, Serialize)]
pub struct RegisterResponse {
    pub status_code: String,
    pub message: String,
    pub data: RegisteredUser,
}

impl RegisterResponse {
    pub fn ok(data: RegisteredUser) -> Self {
        Self {
            status_code: OK.to_string(),
            message: "User registered successfully".to_string(),
            data,
        }
    }
}

/// 본문 데이터 없는 확인 응답
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub status_code: String,
    pub message: String,
}

impl MessageResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            status_code: OK.to_string(),
            message: message.into(),
        }
    }
}

/// `GET /api/users/distance` 응답
///
/// 거리 단위는 킬로미터입니다. 계산 불가(`NaN`)는 `null`로 직렬화됩니다.
#[derive(Debug, Clone, Serialize)]
pub struct DistanceResponse {
    pub status_code: String,
    pub message: String,
    pub distance: f64,
}

impl DistanceResponse {
    pub fn ok(distance: f64) -> Self {
        Self {
            status_code: OK.to_string(),
            message: "Distance calculated".to_string(),
            distance,
        }
    }
}

/// `GET /api/users/listing` 응답
#[derive(Debug, Clone, Serialize)]
pub struct ListingResponse {
    pub status_code: String,
    pub message: String,
    pub data: WeekdayGroups,
}

impl ListingResponse {
    pub fn ok(data: WeekdayGroups) -> Self {
        Self {
            status_code: OK.to_string(),
            message: "Users grouped by day".to_string(),
            data,
        }
    }
}
