//! 공통 유틸리티 함수 모듈
//!
//! # Modules
//!
//! - [`distance`] - haversine 대권 거리 계산

pub mod distance;
