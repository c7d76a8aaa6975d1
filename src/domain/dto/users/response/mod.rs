//! 사용자 API 응답 DTO

pub mod user_response;

pub use user_response::{
    DistanceResponse, ListingResponse, MessageResponse, RegisterResponse, RegisteredUser,
};
