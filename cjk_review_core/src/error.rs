//! 错误类型。
//!
//! 约定：
//! - 查不到字符描述**不是**错误，返回 `Ok(None)`；
//! - 只有 locale 本身没有数据（且已经没有可退回的英文）才是 `LocaleUnavailable`；
//! - 调用方（朗读/盲文增强）负责把错误降级为宿主默认行为。
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReviewError {
    /// 该 locale 没有任何字符描述数据
    #[error("no character description data for locale {0:?}")]
    LocaleUnavailable(String),

    /// 文本不是恰好一个字符，无法换算码位
    #[error("expected a single character, got {0:?}")]
    InvalidCharacter(String),

    /// 盲文区域更新失败（通常是所属对象已被销毁）
    #[error("braille region update failed: {0}")]
    RegionUpdate(String),
}

pub type Result<T> = std::result::Result<T, ReviewError>;
