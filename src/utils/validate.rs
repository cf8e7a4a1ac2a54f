use chrono::{NaiveDate, NaiveTime};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::{self, HWSystemError};
use crate::models::salaries::entities::SalaryPeriod;

static USERNAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("Invalid username regex"));

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Z|a-z]{2,}$").expect("Invalid email regex")
});

pub fn validate_username(username: &str) -> Result<(), &'static str> {
    // 用户名长度校验：5 <= x <= 16
    if username.len() < 5 || username.len() > 16 {
        return Err("Username length must be between 5 and 16 characters");
    }
    // 用户名格式校验：只能包含字母、数字、下划线或连字符
    if !USERNAME_RE.is_match(username) {
        return Err("Username must contain only letters, numbers, underscores or hyphens");
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), &'static str> {
    // 邮箱格式校验：必须包含 @ 和 .
    if !EMAIL_RE.is_match(email) {
        return Err("Email format is invalid");
    }
    Ok(())
}

/// 密码策略验证结果
#[derive(Debug, Clone)]
pub struct PasswordValidationResult {
    pub is_valid: bool,
    pub errors: Vec<&'static str>,
}

impl PasswordValidationResult {
    pub fn error_message(&self) -> String {
        self.errors.join("; ")
    }
}

/// 验证密码是否符合安全策略
///
/// 策略要求：
/// - 最小长度：8 字符
/// - 必须包含：大写字母 + 小写字母 + 数字
/// - 可选：特殊字符（增强安全性）
pub fn validate_password(password: &str) -> PasswordValidationResult {
    let mut errors = Vec::new();

    // 1. 长度检查：至少 8 个字符
    if password.len() < 8 {
        errors.push("Password must be at least 8 characters long");
    }

    // 2. 大写字母检查
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        errors.push("Password must contain at least one uppercase letter");
    }

    // 3. 小写字母检查
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        errors.push("Password must contain at least one lowercase letter");
    }

    // 4. 数字检查
    if !password.chars().any(|c| c.is_ascii_digit()) {
        errors.push("Password must contain at least one digit");
    }

    // 5. 常见弱密码检查
    let weak_passwords = [
        "password",
        "12345678",
        "123456789",
        "qwerty123",
        "admin123",
        "password1",
        "Password1",
        "Qwerty123",
        "Abcd1234",
    ];
    if weak_passwords
        .iter()
        .any(|&weak| password.eq_ignore_ascii_case(weak))
    {
        errors.push("Password is too common, please choose a stronger password");
    }

    PasswordValidationResult {
        is_valid: errors.is_empty(),
        errors,
    }
}

/// 简化的密码验证（返回 Result）
pub fn validate_password_simple(password: &str) -> Result<(), String> {
    let result = validate_password(password);
    if result.is_valid {
        Ok(())
    } else {
        Err(result.error_message())
    }
}

/// 解析 YYYY-MM-DD 日期
pub fn parse_date(value: &str, field: &str) -> errors::Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| {
        HWSystemError::validation(format!("Invalid {field}: '{value}', expected YYYY-MM-DD"))
    })
}

/// 解析可选的 HH:MM 或 HH:MM:SS 时间，空字符串视为未填写
pub fn parse_optional_time(value: Option<&str>, field: &str) -> errors::Result<Option<NaiveTime>> {
    let Some(raw) = value.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(None);
    };
    NaiveTime::parse_from_str(raw, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M"))
        .map(Some)
        .map_err(|_| HWSystemError::validation(format!("Invalid {field}: '{raw}', expected HH:MM")))
}

/// 校验结算周期：月份 1..=12，年份 1970..=9999
pub fn validate_period(month: i64, year: i64) -> errors::Result<SalaryPeriod> {
    if !(1..=12).contains(&month) {
        return Err(HWSystemError::validation(format!(
            "Invalid month: {month}, expected 1-12"
        )));
    }
    if !(1970..=9999).contains(&year) {
        return Err(HWSystemError::validation(format!(
            "Invalid year: {year}, expected 1970-9999"
        )));
    }
    Ok(SalaryPeriod {
        month: month as i32,
        year: year as i32,
    })
}

/// 去掉首尾空白，空串转为 None
pub fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("1999-05-02", "dob").unwrap(),
            NaiveDate::from_ymd_opt(1999, 5, 2).unwrap()
        );
        assert!(parse_date("02/05/1999", "dob").is_err());
        assert!(parse_date("1999-02-30", "dob").is_err());
        let err = parse_date("", "dob").unwrap_err();
        assert_eq!(err.code(), "E005");
    }

    #[test]
    fn test_parse_optional_time() {
        assert_eq!(parse_optional_time(None, "start_time").unwrap(), None);
        assert_eq!(parse_optional_time(Some("  "), "start_time").unwrap(), None);
        assert_eq!(
            parse_optional_time(Some("18:30"), "start_time").unwrap(),
            NaiveTime::from_hms_opt(18, 30, 0)
        );
        assert!(parse_optional_time(Some("25:00"), "start_time").is_err());
    }

    #[test]
    fn test_validate_period() {
        assert_eq!(
            validate_period(4, 2024).unwrap(),
            SalaryPeriod {
                month: 4,
                year: 2024
            }
        );
        assert!(validate_period(0, 2024).is_err());
        assert!(validate_period(13, 2024).is_err());
        assert!(validate_period(4, 1969).is_err());
        assert!(validate_period(4, 10000).is_err());
    }

    #[test]
    fn test_email() {
        assert!(validate_email("teacher@center.edu.vn").is_ok());
        assert!(validate_email("teacher@").is_err());
    }

    #[test]
    fn test_valid_password() {
        assert!(validate_password("SecureP@ss1").is_valid);
        assert!(validate_password("MyP@ssw0rd").is_valid);
        assert!(validate_password("SecurePass123").is_valid);
    }

    #[test]
    fn test_short_password() {
        let result = validate_password("Ab1");
        assert!(!result.is_valid);
        assert!(
            result
                .errors
                .contains(&"Password must be at least 8 characters long")
        );
    }

    #[test]
    fn test_no_uppercase() {
        let result = validate_password("abcd1234");
        assert!(!result.is_valid);
        assert!(
            result
                .errors
                .contains(&"Password must contain at least one uppercase letter")
        );
    }

    #[test]
    fn test_no_lowercase() {
        let result = validate_password("ABCD1234");
        assert!(!result.is_valid);
        assert!(
            result
                .errors
                .contains(&"Password must contain at least one lowercase letter")
        );
    }

    #[test]
    fn test_no_digit() {
        let result = validate_password("AbcdEfgh");
        assert!(!result.is_valid);
        assert!(
            result
                .errors
                .contains(&"Password must contain at least one digit")
        );
    }

    #[test]
    fn test_common_password() {
        let result = validate_password("Password1");
        assert!(!result.is_valid);
        assert!(
            result
                .errors
                .contains(&"Password is too common, please choose a stronger password")
        );
    }
}
