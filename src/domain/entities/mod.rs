//! # Domain Entities
//!
//! MongoDB에 직접 저장되는 영속성 엔티티를 정의합니다.
//! 현재 서비스는 `users` 컬렉션 하나만 사용합니다.

pub mod users;
