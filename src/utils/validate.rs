use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid email regex"));

static TIME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([01][0-9]|2[0-3]):[0-5][0-9]$").expect("Invalid time regex"));

/// 电话号码至少包含的数字个数
pub const MIN_PHONE_DIGITS: usize = 8;

/// 字段级校验错误
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/validation.ts")]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

pub fn validate_email(email: &str) -> Result<(), &'static str> {
    if !EMAIL_RE.is_match(email) {
        return Err("Email format is invalid");
    }
    Ok(())
}

/// 电话号码：只允许数字、`+`、空格、`-`、括号，且至少 8 位数字
pub fn validate_phone(phone: &str) -> Result<(), &'static str> {
    let allowed = |c: char| c.is_ascii_digit() || matches!(c, '+' | ' ' | '-' | '(' | ')');
    if !phone.chars().all(allowed) {
        return Err("Phone number contains invalid characters");
    }
    if phone.chars().filter(|c| c.is_ascii_digit()).count() < MIN_PHONE_DIGITS {
        return Err("Phone number must contain at least 8 digits");
    }
    Ok(())
}

/// 24 小时制 "HH:MM"
pub fn validate_time(time: &str) -> Result<(), &'static str> {
    if !TIME_RE.is_match(time) {
        return Err("Time must use the HH:MM format");
    }
    Ok(())
}

/// 开始时间必须早于结束时间
pub fn validate_time_range(start: &str, end: &str) -> Result<(), &'static str> {
    validate_time(start)?;
    validate_time(end)?;
    // 两位补零格式下字典序即时间顺序
    if start >= end {
        return Err("Start time must be before end time");
    }
    Ok(())
}

/// 日期 "YYYY-MM-DD"
pub fn validate_date(date: &str) -> Result<chrono::NaiveDate, &'static str> {
    chrono::NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|_| "Date must use YYYY-MM-DD")
}

/// 逐项收集字段错误的校验器
#[derive(Debug, Default)]
pub struct Validator {
    errors: Vec<FieldError>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn required(&mut self, field: &str, value: &str) -> &mut Self {
        if value.trim().is_empty() {
            self.errors
                .push(FieldError::new(field, format!("{field} is required")));
        }
        self
    }

    /// 可选字段仅在非空时校验
    pub fn email(&mut self, field: &str, value: Option<&str>) -> &mut Self {
        self.check(field, value, validate_email)
    }

    pub fn phone(&mut self, field: &str, value: Option<&str>) -> &mut Self {
        self.check(field, value, validate_phone)
    }

    pub fn rule(&mut self, field: &str, result: Result<(), &str>) -> &mut Self {
        if let Err(message) = result {
            self.errors.push(FieldError::new(field, message));
        }
        self
    }

    fn check(
        &mut self,
        field: &str,
        value: Option<&str>,
        rule: fn(&str) -> Result<(), &'static str>,
    ) -> &mut Self {
        if let Some(value) = value.map(str::trim).filter(|v| !v.is_empty()) {
            self.rule(field, rule(value));
        }
        self
    }

    pub fn finish(&mut self) -> Result<(), Vec<FieldError>> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(std::mem::take(&mut self.errors))
        }
    }
}

/// 将字段错误拼接为单条提示文案（首个错误在前）
pub fn join_field_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_pattern() {
        assert!(validate_email("awa@ecole.sn").is_ok());
        assert!(validate_email("a.b+c@sub.domain.org").is_ok());
        assert!(validate_email("awa@ecole").is_err());
        assert!(validate_email("awa ecole@x.sn").is_err());
        assert!(validate_email("@ecole.sn").is_err());
        assert!(validate_email("awa@@ecole.sn").is_err());
    }

    #[test]
    fn test_phone_rule() {
        assert!(validate_phone("70000000").is_ok());
        assert!(validate_phone("+221 77 123 45 67").is_ok());
        assert!(validate_phone("(221) 33-820-00").is_ok());
        assert!(validate_phone("7000000").is_err());
        assert!(validate_phone("+- () 1234567").is_err());
        assert!(validate_phone("7000000a0").is_err());
    }

    #[test]
    fn test_time_range() {
        assert!(validate_time_range("08:00", "10:00").is_ok());
        assert!(validate_time_range("10:00", "10:00").is_err());
        assert!(validate_time_range("8:00", "10:00").is_err());
        assert!(validate_time_range("08:00", "24:00").is_err());
    }

    #[test]
    fn test_validator_collects_in_order() {
        let errors = Validator::new()
            .required("nom", "  ")
            .email("email", Some("not-an-email"))
            .phone("telephone", Some(""))
            .finish()
            .unwrap_err();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].field, "nom");
        assert_eq!(errors[1].field, "email");
        assert_eq!(join_field_errors(&errors), "nom is required; Email format is invalid");
    }
}
