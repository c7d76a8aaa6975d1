//! # Domain Models Module
//!
//! 영속성 엔티티와 구별되는 값 객체를 정의합니다.
//!
//! - [`auth`] - Auth Guard가 요청에 부착하는 인증된 사용자 컨텍스트
//! - [`token`] - 세션 토큰(JWT) 클레임
//! - [`listing`] - 요일 번호와 요일별 사용자 그룹

pub mod auth;
pub mod token;
pub mod listing;
