// ==========================================
// 排班决策支持核心 - 领域类型定义
// ==========================================
// 职责: 草案状态枚举、时段令牌拆分等基础类型
// 时段令牌格式: "HH:MM-HH:MM"（左闭右开）
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

/// 时段令牌分隔符
pub const INTERVAL_SEPARATOR: char = '-';

// ==========================================
// 草案状态 (Draft Status)
// ==========================================
// 红线: 核心只读写 Draft，不改变已发布/已归档草案的状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DraftStatus {
    Draft,     // 草稿
    Published, // 已发布
    Archived,  // 已归档
}

impl DraftStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DraftStatus::Draft => "draft",
            DraftStatus::Published => "published",
            DraftStatus::Archived => "archived",
        }
    }
}

impl fmt::Display for DraftStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for DraftStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "draft" => Ok(DraftStatus::Draft),
            "published" => Ok(DraftStatus::Published),
            "archived" => Ok(DraftStatus::Archived),
            other => Err(format!("未知草案状态: {}", other)),
        }
    }
}

// ==========================================
// 时段令牌工具
// ==========================================

/// 拆分时段令牌为 (开始时间, 结束时间)
///
/// 只按第一个分隔符拆分；缺少分隔符时结束时间为 None（不校验格式）。
///
/// # 示例
/// ```
/// use workforce_scheduler::domain::types::split_interval;
/// assert_eq!(split_interval("08:00-12:00"), ("08:00".to_string(), Some("12:00".to_string())));
/// assert_eq!(split_interval("0800"), ("0800".to_string(), None));
/// ```
pub fn split_interval(token: &str) -> (String, Option<String>) {
    match token.split_once(INTERVAL_SEPARATOR) {
        Some((start, end)) => (start.to_string(), Some(end.to_string())),
        None => (token.to_string(), None),
    }
}

/// 时段令牌的开始时间前缀
pub fn interval_start(token: &str) -> &str {
    token
        .split_once(INTERVAL_SEPARATOR)
        .map(|(start, _)| start)
        .unwrap_or(token)
}
