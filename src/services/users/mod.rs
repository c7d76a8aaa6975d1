//! 사용자 관리 서비스 모듈
//!
//! 가입, 전체 상태 토글, 거리 계산, 가입 요일별 목록을 구현합니다.
//!
//! # Security
//!
//! - bcrypt 비밀번호 해싱
//! - 이메일 중복 방지

pub mod user_service;

pub use user_service::UserService;
