//! `ReviewContext`：processor 链共享的唯一上下文（状态 + 设置）。
use std::ops::{Deref, DerefMut};

use tracing::debug;

use crate::{
    config::ReviewConfig,
    dictionary::CharacterDictionary,
    state::{Direction, ReviewState},
};

#[derive(Debug, Clone)]
pub struct ReviewContext {
    pub state: ReviewState,
    pub config: ReviewConfig,
}

impl ReviewContext {
    pub fn new(locale: impl Into<String>, config: ReviewConfig) -> Self {
        Self {
            state: ReviewState::new(locale),
            config,
        }
    }

    /// 进入一次逐条描述命令：设置方向与 review 标志，作用域结束时恢复。
    pub fn review_scope(&mut self, direction: Direction) -> ReviewScope<'_> {
        self.state.direction = direction;
        self.state.is_review_character = true;
        ReviewScope { ctx: self }
    }

    /// 点显器上的描述行：`字 描述1 描述2 …`。
    ///
    /// 用 `state.locale` 一次性查询（不推进循环）；查不到或出错返回 `None`。
    pub fn braille_description(&self, dictionary: &dyn CharacterDictionary, character: &str) -> Option<String> {
        let lowered = character.to_lowercase();
        match dictionary.character_description(&self.state.locale, &lowered) {
            Ok(Some(desc)) => Some(format!("{character} {}", desc.join(" "))),
            Ok(None) => None,
            Err(e) => {
                debug!("盲文描述查询失败：{e}");
                None
            }
        }
    }
}

/// 逐条描述命令的作用域守卫；`Drop` 时把瞬时字段恢复为中性值（包括提前返回的路径）。
pub struct ReviewScope<'a> {
    ctx: &'a mut ReviewContext,
}

impl Deref for ReviewScope<'_> {
    type Target = ReviewContext;

    fn deref(&self) -> &ReviewContext {
        self.ctx
    }
}

impl DerefMut for ReviewScope<'_> {
    fn deref_mut(&mut self) -> &mut ReviewContext {
        self.ctx
    }
}

impl Drop for ReviewScope<'_> {
    fn drop(&mut self) {
        self.ctx.state.direction = Direction::Idle;
        self.ctx.state.is_review_character = false;
    }
}
