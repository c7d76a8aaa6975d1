//! 사용자 등록 요청 DTO
//!
//! 회원가입 요청 본문을 정의합니다. 모든 필드가 필수이며,
//! 누락 여부는 역직렬화가 아닌 `validator` 검증 단계에서 판단하여
//! 일관된 400 응답을 돌려줍니다.

use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;
use crate::core::errors::AppError;

/// 필수 필드 누락 시 응답 메시지
pub const ALL_FIELDS_REQUIRED: &str = "All fields are required";

/// 사용자 등록 요청
///
/// 좌표는 JSON 숫자 또는 숫자 문자열(`"37.56"`)을 모두 허용합니다.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct RegisterUserRequest {
    #[validate(required(message = "All fields are required"), length(min = 1, message = "All fields are required"))]
    pub name: Option<String>,

    #[validate(required(message = "All fields are required"), length(min = 1, message = "All fields are required"))]
    pub email: Option<String>,

    /// 평문 비밀번호 (저장 전 해싱됨)
    #[validate(required(message = "All fields are required"), length(min = 1, message = "All fields are required"))]
    pub password: Option<String>,

    #[validate(required(message = "All fields are required"), length(min = 1, message = "All fields are required"))]
    pub address: Option<String>,

    #[serde(default, deserialize_with = "lenient_coordinate")]
    #[validate(required(message = "All fields are required"))]
    pub latitude: Option<f64>,

    #[serde(default, deserialize_with = "lenient_coordinate")]
    #[validate(required(message = "All fields are required"))]
    pub longitude: Option<f64>,
}

/// 검증을 통과한 등록 입력값
#[derive(Debug, Clone)]
pub struct RegistrationFields {
    pub name: String,
    pub email: String,
    pub password: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl RegisterUserRequest {
    /// 요청을 검증하고 필수값이 채워진 입력으로 변환합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 하나라도 누락되거나 비어 있는 경우
    pub fn into_fields(self) -> Result<RegistrationFields, AppError> {
        self.validate()
            .map_err(|_| AppError::ValidationError(ALL_FIELDS_REQUIRED.to_string()))?;

        let missing = || AppError::ValidationError(ALL_FIELDS_REQUIRED.to_string());

        Ok(RegistrationFields {
            name: self.name.ok_or_else(missing)?,
            email: self.email.ok_or_else(missing)?,
            password: self.password.ok_or_else(missing)?,
            address: self.address.ok_or_else(missing)?,
            latitude: self.latitude.ok_or_else(missing)?,
            longitude: self.longitude.ok_or_else(missing)?,
        })
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Coordinate {
    Number(f64),
    Text(String),
}

/// 숫자 또는 숫자 문자열 좌표를 받아들입니다. 빈 문자열과 `null`은 누락으로 처리합니다.
fn lenient_coordinate<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Coordinate>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Coordinate::Number(value)) => Ok(Some(value)),
        Some(Coordinate::Text(text)) if text.trim().is_empty() => Ok(None),
        Some(Coordinate::Text(text)) => text
            .trim()
            .parse::<f64>()
            .map(Some)
            .map_err(|_| serde::de::Error::custom(format!("invalid coordinate: {}", text))),
    }
}
