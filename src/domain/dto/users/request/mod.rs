//! 사용자 API 요청 DTO

pub mod register_user_request;
pub mod user_queries;

pub use register_user_request::{RegisterUserRequest, RegistrationFields};
pub use user_queries::{DistanceQuery, ListingQuery};
