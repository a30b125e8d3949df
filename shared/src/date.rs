//! 时间类型模块
//!
//! 后端所有时间字段（到期时间、创建时间、流量重置时间等）均以毫秒时间戳传输。

use chrono::{DateTime, Local, TimeZone, Utc};
use serde::{Deserialize, Serialize};

// =========================================================
// Timestamp - 可传输的时间戳类型
// =========================================================

/// 毫秒时间戳，用于序列化传输
///
/// 内部存储为 `i64`，表示自 Unix 纪元以来的毫秒数
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Timestamp(i64);

impl Timestamp {
    /// 创建新的时间戳
    #[inline]
    pub const fn new(ms: i64) -> Self {
        Self(ms)
    }

    /// 转换为 UTC 时间，超出 chrono 可表示范围时返回 None
    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_millis_opt(self.0).single()
    }

    /// 按本地时区格式化为 `YYYY-MM-DD HH:MM`
    ///
    /// 无法表示的时间戳显示为 `-`。
    pub fn format_local(&self) -> String {
        match self.to_datetime() {
            Some(dt) => dt
                .with_timezone(&Local)
                .format("%Y-%m-%d %H:%M")
                .to_string(),
            None => "-".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_transparent_millis() {
        let ts: Timestamp = serde_json::from_str("1700000000000").unwrap();
        assert_eq!(ts, Timestamp::new(1_700_000_000_000));
        assert_eq!(
            ts.to_datetime().unwrap().timestamp(),
            1_700_000_000
        );
    }

    #[test]
    fn test_format_local_shape_and_fallback() {
        let formatted = Timestamp::new(1_700_000_000_000).format_local();
        assert_eq!(formatted.len(), "2023-11-14 22:13".len());
        assert_eq!(Timestamp::new(i64::MAX).format_local(), "-");
    }
}
