//! 인증이 필요한 조회 API의 쿼리 문자열 DTO

use serde::{Deserialize, Serialize};
use crate::core::errors::AppError;
use crate::domain::models::listing::WeekNumber;

/// `GET /api/users/distance` 쿼리
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DistanceQuery {
    pub destination_lat: Option<String>,
    pub destination_long: Option<String>,
}

impl DistanceQuery {
    /// 목적지 좌표 `(위도, 경도)`를 반환합니다.
    ///
    /// 두 값 모두 있어야 하며, 숫자로 해석되지 않는 값은 `NaN`이 되어
    /// 거리 계산 결과도 `NaN`(JSON `null`)이 됩니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 좌표가 없거나 빈 문자열인 경우
    pub fn destination(&self) -> Result<(f64, f64), AppError> {
        match (non_blank(&self.destination_lat), non_blank(&self.destination_long)) {
            (Some(lat), Some(long)) => Ok((parse_or_nan(lat), parse_or_nan(long))),
            _ => Err(AppError::ValidationError("Destination coordinates required".to_string())),
        }
    }
}

/// `GET /api/users/listing` 쿼리
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListingQuery {
    /// 쉼표로 구분한 요일 번호 (0=일요일 .. 6=토요일)
    pub week_number: Option<String>,
}

impl ListingQuery {
    /// 요청된 요일 번호 목록을 요청 순서대로 반환합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - `week_number`가 없거나 빈 경우
    pub fn week_numbers(&self) -> Result<Vec<WeekNumber>, AppError> {
        let raw = non_blank(&self.week_number)
            .ok_or_else(|| AppError::ValidationError("week_number required".to_string()))?;

        Ok(raw.split(',').map(WeekNumber::parse).collect())
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

fn parse_or_nan(value: &str) -> f64 {
    value.trim().parse::<f64>().unwrap_or(f64::NAN)
}
