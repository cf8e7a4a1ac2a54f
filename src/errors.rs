//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。
//! 存储层与服务层统一返回 [`Result`]，路由层通过 [`HWSystemError::into_response`] 转换为 HTTP 响应。

use std::fmt;

use actix_web::HttpResponse;
use actix_web::http::StatusCode;
use tracing::error;

use crate::models::{ApiResponse, ErrorCode};

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_hwsystem_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum HWSystemError {
            $($variant(String),)*
        }

        impl HWSystemError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(HWSystemError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(HWSystemError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(HWSystemError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl HWSystemError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        HWSystemError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_hwsystem_errors! {
    DatabaseConfig("E001", "Database Configuration Error"),
    DatabaseConnection("E002", "Database Connection Error"),
    DatabaseOperation("E003", "Database Operation Error"),
    FileOperation("E004", "File Operation Error"),
    Validation("E005", "Validation Error"),
    NotFound("E006", "Resource Not Found"),
    Conflict("E007", "Resource Conflict"),
    Serialization("E008", "Serialization Error"),
    DateParse("E009", "Date Parse Error"),
    Authentication("E010", "Authentication Error"),
    Authorization("E011", "Authorization Error"),
    Internal("E012", "Internal Server Error"),
}

impl HWSystemError {
    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }

    /// 是否属于服务端内部故障（对外只暴露通用信息）
    pub fn is_persistence(&self) -> bool {
        matches!(
            self,
            HWSystemError::DatabaseConfig(_)
                | HWSystemError::DatabaseConnection(_)
                | HWSystemError::DatabaseOperation(_)
                | HWSystemError::FileOperation(_)
                | HWSystemError::Internal(_)
        )
    }

    /// 对应的 HTTP 状态码
    pub fn status_code(&self) -> StatusCode {
        match self {
            HWSystemError::Validation(_)
            | HWSystemError::DateParse(_)
            | HWSystemError::Serialization(_) => StatusCode::BAD_REQUEST,
            HWSystemError::NotFound(_) => StatusCode::NOT_FOUND,
            HWSystemError::Conflict(_) => StatusCode::CONFLICT,
            HWSystemError::Authentication(_) => StatusCode::UNAUTHORIZED,
            HWSystemError::Authorization(_) => StatusCode::FORBIDDEN,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// 对应的业务错误码
    pub fn error_code(&self) -> ErrorCode {
        match self {
            HWSystemError::Validation(_)
            | HWSystemError::DateParse(_)
            | HWSystemError::Serialization(_) => ErrorCode::BadRequest,
            HWSystemError::NotFound(_) => ErrorCode::NotFound,
            HWSystemError::Conflict(_) => ErrorCode::Conflict,
            HWSystemError::Authentication(_) => ErrorCode::Unauthorized,
            HWSystemError::Authorization(_) => ErrorCode::Forbidden,
            _ => ErrorCode::InternalServerError,
        }
    }

    /// 转换为统一的 JSON 错误响应
    ///
    /// 存储层错误只记录日志，不把内部细节返回给客户端。
    pub fn into_response(self) -> HttpResponse {
        let message = if self.is_persistence() {
            error!("{}", self.format_simple());
            "Internal server error".to_string()
        } else {
            self.message().to_string()
        };

        HttpResponse::build(self.status_code())
            .json(ApiResponse::error_empty(self.error_code(), message))
    }
}

impl fmt::Display for HWSystemError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for HWSystemError {}

// 为常见的错误类型实现 From trait
impl From<sea_orm::DbErr> for HWSystemError {
    fn from(err: sea_orm::DbErr) -> Self {
        HWSystemError::DatabaseOperation(err.to_string())
    }
}

impl From<std::io::Error> for HWSystemError {
    fn from(err: std::io::Error) -> Self {
        HWSystemError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for HWSystemError {
    fn from(err: serde_json::Error) -> Self {
        HWSystemError::Serialization(err.to_string())
    }
}

impl From<chrono::ParseError> for HWSystemError {
    fn from(err: chrono::ParseError) -> Self {
        HWSystemError::DateParse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, HWSystemError>;
