//! 安全的日志记录工具
//!
//! 提供敏感信息脱敏功能，确保日志中不会泄露 Gemini API key。

use std::fmt;

/// 脱敏后的 API key 表示
///
/// 只显示前 8 个字符，其余替换为 `***`
///
/// ```
/// use kasha_site::logging::SensitiveApiKey;
///
/// let sanitized = SensitiveApiKey::new("AIzaSyD-0123456789abcdef");
/// assert_eq!(format!("{}", sanitized), "AIzaSyD-***");
/// ```
#[derive(Clone, Debug)]
pub struct SensitiveApiKey<'a> {
    inner: &'a str,
}

impl<'a> SensitiveApiKey<'a> {
    pub fn new(key: &'a str) -> Self {
        Self { inner: key }
    }
}

impl<'a> fmt::Display for SensitiveApiKey<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.inner.get(..8) {
            // key 太短时全部脱敏
            Some(visible) if self.inner.len() > 8 => write!(f, "{}***", visible),
            _ => write!(f, "***"),
        }
    }
}

/// 用于 `config show`：保留前 7 位和后 4 位
///
/// Example: "AIzaSyD0123456789abcdef" -> "AIzaSyD...cdef"
pub fn mask_api_key(key: &str) -> String {
    if key.len() <= 11 {
        return "***".to_string();
    }

    match (key.get(..7), key.get(key.len() - 4..)) {
        (Some(prefix), Some(suffix)) => format!("{}...{}", prefix, suffix),
        _ => "***".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sensitive_api_key_display() {
        assert_eq!(
            SensitiveApiKey::new("AIzaSyD-0123456789abcdef").to_string(),
            "AIzaSyD-***"
        );
        assert_eq!(SensitiveApiKey::new("short").to_string(), "***");
        assert_eq!(SensitiveApiKey::new("12345678").to_string(), "***");
    }

    #[test]
    fn test_mask_api_key() {
        assert_eq!(mask_api_key("AIzaSyD0123456789abcdef"), "AIzaSyD...cdef");
        assert_eq!(mask_api_key("AIza-short"), "***");
        assert_eq!(mask_api_key(""), "***");
    }
}
