//! `cjk_review_core`：CJK 字符回顾的纯逻辑层，不做任何 I/O。
//!
//! 设计目标：
//! - **宿主无关**：语音、盲文、回顾光标、词典都通过 trait 注入，输出一律是 `Action`
//! - **分层清晰**：session -> processor -> (describe / spelling / braille / composition) -> `Action`
//! - **状态集中**：唯一的 `ReviewState` 由 `ReviewSession` 持有，激活时创建、停用时丢弃
pub mod braille;
pub mod commands;
pub mod composition;
pub mod config;
pub mod context;
pub mod describe;
pub mod dictionary;
pub mod error;
pub mod event;
pub mod hooks;
pub mod host;
pub mod locale;
pub mod processor;
pub mod review;
pub mod session;
pub mod speech;
pub mod spelling;
pub mod state;
pub mod text;

pub use error::{Result, ReviewError};
