//! 时间工具函数
//!
//! 时间戳统一使用 Unix millis (i64)，repository 层只接收 `i64`。

use chrono::Utc;

/// 当前 Unix 时间戳 (毫秒)
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}
