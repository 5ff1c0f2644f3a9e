//! # banner-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

pub use dto::requests::{CreateBannerRequest, LoginRequest, UpdateBannerRequest};
pub use dto::responses::{
    AdminResponse, AuthResponse, BannerResponse, HealthChecks, HealthResponse, ReadinessResponse,
};
pub use services::{
    AuthService, BannerService, ServiceContext, ServiceContextBuilder, ServiceError, ServiceResult,
};
