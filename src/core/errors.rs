//! # Application Error Handling System
//!
//! 서비스 전역의 에러 타입과 HTTP 응답 변환을 담당합니다.
//! `thiserror`로 에러를 정의하고 `actix_web::ResponseError`를 구현하여
//! 핸들러가 `Result<HttpResponse, AppError>`를 반환하기만 하면
//! 일관된 JSON 에러 응답이 만들어집니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 사용 시나리오 |
//! |----------|-------------|---------------|
//! | `ValidationError` | 400 Bad Request | 필수 입력 누락, 잘못된 본문 |
//! | `ConflictError` | 400 Bad Request | 이메일 중복 |
//! | `AuthenticationError` | 401 Unauthorized | 토큰 누락/위조/만료, 사용자 없음 |
//! | `DatabaseError` | 500 Internal Server Error | MongoDB 오류 |
//! | `InternalError` | 500 Internal Server Error | 핸들러 경계에서 분류된 예기치 못한 오류 |
//!
//! ## 응답 형식
//!
//! ```json
//! { "status_code": "400", "message": "All fields are required" }
//! { "status_code": "500", "message": "Listing error", "error": "Database error: ..." }
//! ```
//!
//! `error` 필드는 500 응답에만 포함됩니다.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

/// 500 응답의 기본 메시지
pub const DEFAULT_INTERNAL_MESSAGE: &str = "Server error";

/// 애플리케이션 전역 에러 타입
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AppError {
    /// 입력값 검증 에러 (400)
    #[error("{0}")]
    ValidationError(String),

    /// 충돌/중복 에러 (400)
    ///
    /// 이메일 중복은 기존 API 계약에 따라 409가 아닌 400으로 응답합니다.
    #[error("{0}")]
    ConflictError(String),

    /// 인증 실패 에러 (401)
    #[error("{0}")]
    AuthenticationError(String),

    /// 데이터베이스 관련 에러 (500)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 내부 서버 에러 (500)
    ///
    /// `message`는 클라이언트에게 보이는 요약, `error`는 원인 메시지입니다.
    #[error("{message}: {error}")]
    InternalError { message: String, error: String },
}

impl AppError {
    /// 원인 메시지를 그대로 전달하는 내부 에러를 생성합니다.
    pub fn internal(message: impl Into<String>, error: impl ToString) -> Self {
        AppError::InternalError {
            message: message.into(),
            error: error.to_string(),
        }
    }

    /// 클라이언트 오류가 아닌 에러에 핸들러별 메시지를 붙입니다.
    ///
    /// 4xx 에러는 그대로 유지됩니다.
    pub fn with_context(self, message: &str) -> Self {
        match self {
            AppError::DatabaseError(cause) => {
                AppError::internal(message, format!("Database error: {}", cause))
            }
            AppError::InternalError { error, .. } => AppError::InternalError {
                message: message.to_string(),
                error,
            },
            other => other,
        }
    }

    fn public_parts(&self) -> (String, Option<String>) {
        match self {
            AppError::ValidationError(msg)
            | AppError::ConflictError(msg)
            | AppError::AuthenticationError(msg) => (msg.clone(), None),
            AppError::DatabaseError(_) => (DEFAULT_INTERNAL_MESSAGE.to_string(), Some(self.to_string())),
            AppError::InternalError { message, error } => (message.clone(), Some(error.clone())),
        }
    }
}

/// 에러 응답 본문
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub status_code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) | AppError::ConflictError(_) => StatusCode::BAD_REQUEST,
            AppError::AuthenticationError(_) => StatusCode::UNAUTHORIZED,
            AppError::DatabaseError(_) | AppError::InternalError { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// 각 에러 타입을 상태 코드와 JSON 본문으로 변환합니다.
    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let (message, error) = self.public_parts();

        if status.is_server_error() {
            log::error!("{}", self);
        }

        HttpResponse::build(status).json(ErrorBody {
            status_code: status.as_u16().to_string(),
            message,
            error,
        })
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 핸들러 경계에서 500 메시지를 지정하는 확장 trait
pub trait ErrorContext<T> {
    /// 서버 측 에러를 `InternalError { message: msg, .. }`로 바꿉니다.
    fn context(self, msg: &str) -> AppResult<T>;
}

impl<T> ErrorContext<T> for AppResult<T> {
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| e.with_context(msg))
    }
}
