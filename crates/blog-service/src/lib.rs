//! # blog-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

pub use dto::{
    CommentViewResponse, CreateCommentRequest, HealthResponse, LikesInfoResponse,
    ReadinessResponse, UpdateLikeStatusRequest, UserResponse,
};
pub use services::{
    CommentService, ReactionChange, ReactionLedger, RecountService, ServiceContext,
    ServiceContextBuilder, ServiceError, ServiceResult, UserService,
};
