//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。

use std::fmt;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_ecole_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum EcoleError {
            $($variant(String),)*
        }

        impl EcoleError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(EcoleError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(EcoleError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(EcoleError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl EcoleError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        EcoleError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_ecole_errors! {
    CacheConnection("E001", "Cache Connection Error"),
    DatabaseConfig("E003", "Database Configuration Error"),
    DatabaseConnection("E004", "Database Connection Error"),
    DatabaseOperation("E005", "Database Operation Error"),
    FileOperation("E006", "File Operation Error"),
    Validation("E007", "Validation Error"),
    NotFound("E008", "Resource Not Found"),
    Serialization("E009", "Serialization Error"),
    DateParse("E011", "Date Parse Error"),
    Authentication("E012", "Authentication Error"),
    Authorization("E013", "Authorization Error"),
    TenantMismatch("E014", "Tenant Mismatch"),
    Conflict("E015", "Resource Conflict"),
}

impl EcoleError {
    /// 格式化为彩色输出（用于开发环境）
    #[cfg(debug_assertions)]
    pub fn format_colored(&self) -> String {
        format!(
            "\x1b[1;31m[ERROR]\x1b[0m \x1b[33m{}\x1b[0m \x1b[31m{}\x1b[0m\n  {}",
            self.code(),
            self.error_type(),
            self.message()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }

    /// 是否为唯一约束冲突（不同数据库的报错文本不同）
    pub fn is_unique_violation(&self) -> bool {
        if matches!(self, EcoleError::Conflict(_)) {
            return true;
        }
        let msg = self.message();
        msg.contains("UNIQUE constraint failed")
            || msg.contains("duplicate key value")
            || msg.contains("Duplicate entry")
    }
}

impl fmt::Display for EcoleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for EcoleError {}

// 为常见的错误类型实现 From trait
impl From<sea_orm::DbErr> for EcoleError {
    fn from(err: sea_orm::DbErr) -> Self {
        EcoleError::DatabaseOperation(err.to_string())
    }
}

impl From<std::io::Error> for EcoleError {
    fn from(err: std::io::Error) -> Self {
        EcoleError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for EcoleError {
    fn from(err: serde_json::Error) -> Self {
        EcoleError::Serialization(err.to_string())
    }
}

impl From<csv::Error> for EcoleError {
    fn from(err: csv::Error) -> Self {
        EcoleError::Serialization(err.to_string())
    }
}

impl From<chrono::ParseError> for EcoleError {
    fn from(err: chrono::ParseError) -> Self {
        EcoleError::DateParse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, EcoleError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(EcoleError::cache_connection("test").code(), "E001");
        assert_eq!(EcoleError::database_config("test").code(), "E003");
        assert_eq!(EcoleError::validation("test").code(), "E007");
        assert_eq!(EcoleError::tenant_mismatch("test").code(), "E014");
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            EcoleError::conflict("test").error_type(),
            "Resource Conflict"
        );
        assert_eq!(
            EcoleError::validation("test").error_type(),
            "Validation Error"
        );
    }

    #[test]
    fn test_format_simple() {
        let err = EcoleError::validation("Invalid phone");
        let formatted = err.format_simple();
        assert!(formatted.contains("Validation Error"));
        assert!(formatted.contains("Invalid phone"));
    }

    #[test]
    fn test_unique_violation_detection() {
        assert!(
            EcoleError::database_operation("UNIQUE constraint failed: schools.code")
                .is_unique_violation()
        );
        assert!(EcoleError::conflict("dup").is_unique_violation());
        assert!(!EcoleError::database_operation("no such table").is_unique_violation());
    }
}
