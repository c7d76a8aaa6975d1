//! 요일별 사용자 목록 관련 값 객체

pub mod weekday;

pub use weekday::{store_weekdays, UserSummary, WeekNumber, WeekdayGroups, WeekdayUser, DAY_NAMES};
