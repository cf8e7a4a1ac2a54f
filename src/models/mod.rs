//! 业务模型
//!
//! 请求/响应结构与业务实体，存储层实体见 [`crate::entity`]。

pub mod attendance;
pub mod auth;
pub mod common;
pub mod courses;
pub mod payrolls;
pub mod salaries;
pub mod students;
pub mod users;

pub use common::response::ApiResponse;

use serde::Serialize;

/// 业务错误码
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,

    // 通用错误
    BadRequest = 1000,
    Unauthorized = 1001,
    Forbidden = 1003,
    NotFound = 1004,
    Conflict = 1009,
    InternalServerError = 1500,
}
