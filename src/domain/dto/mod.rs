//! # Data Transfer Objects
//!
//! HTTP 요청/응답 본문과 쿼리 문자열의 타입을 정의합니다.
//! 느슨한 JSON 본문 대신 핸들러별 명시적 구조체로 입력을 받고,
//! 사용 전에 검증합니다.

pub mod users;

pub use users::*;
