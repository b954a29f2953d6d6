//! `braille`：包装宿主的盲文区域刷新。
//!
//! 先执行默认的“更新区域 + 滚动到光标”序列，再做 Auto 模式的自动描述：
//! - 刷新后的区域原始文本与上次相同、但光标位置变了：显示光标处字符的描述
//! - 否则把这次的原始文本记为比较基准
//! - 无论哪种情况都记下最新光标位置
//!
//! 已知局限：用“原始文本相等”近似“同一区域”，两个不同区域恰好文本相同时会被当成同一区域。
use tracing::debug;

use crate::{
    config::BrailleReview,
    context::ReviewContext,
    dictionary::CharacterDictionary,
    error::Result,
    event::Action,
};

/// 宿主的盲文区域。
pub trait BrailleRegion {
    /// 所属对象是否仍然存活
    fn is_alive(&self) -> bool {
        true
    }

    /// 重新生成区域内容；对象已销毁时返回错误
    fn update(&mut self) -> Result<()>;

    /// 取走“待滚动到光标”的标记
    fn take_pending_caret_update(&mut self) -> bool;

    fn raw_text(&self) -> &str;

    /// 光标在 `raw_text` 中的字符偏移
    fn cursor_pos(&self) -> Option<usize>;
}

/// 一次刷新的结果。
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RegionRefresh {
    /// 宿主需要滚动到光标的区域下标
    pub scroll_to: Option<usize>,
    pub actions: Vec<Action>,
}

/// 默认刷新序列：逐个更新待刷新区域。
///
/// 已失效或更新失败的区域记 debug 日志后跳过，不影响其余区域；
/// 返回最后一个带“待滚动”标记的区域下标。
pub fn update_regions<R: BrailleRegion>(pending: &mut [R]) -> Option<usize> {
    let mut scroll_to = None;
    for (index, region) in pending.iter_mut().enumerate() {
        if !region.is_alive() {
            debug!("跳过已失效对象的盲文区域 #{index}");
            continue;
        }
        if let Err(e) = region.update() {
            debug!("盲文区域 #{index} 更新失败，对象可能已销毁：{e}");
            continue;
        }
        if region.take_pending_caret_update() {
            scroll_to = Some(index);
        }
    }
    scroll_to
}

/// 刷新全部待更新区域，并对“滚动目标（没有则最后一个区域）”做 Auto 模式的自动描述。
pub fn handle_pending_update<R: BrailleRegion>(
    ctx: &mut ReviewContext,
    dictionary: &dyn CharacterDictionary,
    pending: &mut [R],
) -> RegionRefresh {
    if pending.is_empty() {
        return RegionRefresh::default();
    }
    let scroll_to = update_regions(pending);
    let target = scroll_to.unwrap_or(pending.len() - 1);
    let actions = auto_review(ctx, dictionary, &pending[target]).into_iter().collect();
    RegionRefresh { scroll_to, actions }
}

/// Auto 模式：同一段文本内光标移动时显示新位置字符的描述。
pub fn auto_review<R: BrailleRegion + ?Sized>(
    ctx: &mut ReviewContext,
    dictionary: &dyn CharacterDictionary,
    region: &R,
) -> Option<Action> {
    let raw_text = region.raw_text();
    let cursor_pos = region.cursor_pos();
    let state = &ctx.state;

    let mut action = None;
    if ctx.config.braille_review == BrailleReview::Auto
        && state.previous_raw_text.as_deref() == Some(raw_text)
        && state.previous_cursor_pos != cursor_pos
    {
        // 光标越界或查不到描述：保持默认显示
        action = raw_text
            .chars()
            .nth(cursor_pos.unwrap_or(0))
            .and_then(|c| ctx.braille_description(dictionary, &c.to_string()))
            .map(Action::Braille);
    } else {
        ctx.state.previous_raw_text = Some(raw_text.to_owned());
    }
    ctx.state.previous_cursor_pos = cursor_pos;
    action
}
