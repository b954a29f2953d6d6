//! `ReviewState`：插件生命周期内唯一的回顾状态记录。
//!
//! 约定：
//! - `direction != Idle` 时 `desc_index` 总是上一次取到的描述列表的合法下标（按欧几里得取余寻址）
//! - `direction` / `is_review_character` 是“瞬时”字段，只在一次循环命令内有效，
//!   通过 [`ReviewScope`](crate::context::ReviewScope) 设置并在离开作用域时恢复，错误路径也一样
//! - `previous_raw_text` / `previous_cursor_pos` 只给盲文 Auto 模式做比较用

/// 描述列表的遍历方向。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// 不在循环中
    #[default]
    Idle,
    Forward,
    Backward,
}

impl Direction {
    /// 每步对 `desc_index` 的增量：-1 / 0 / +1
    pub fn delta(self) -> i32 {
        match self {
            Self::Idle => 0,
            Self::Forward => 1,
            Self::Backward => -1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewState {
    /// 当前语言标签（激活时取自宿主）
    pub locale: String,
    /// 正在循环描述的字符；空串表示没有循环上下文
    pub previous_character: String,
    pub direction: Direction,
    /// 描述列表下标，可为负（反向循环）
    pub desc_index: i32,
    /// 仅在“逐条描述”命令执行期间为 true
    pub is_review_character: bool,
    /// 上次盲文区域的原始文本
    pub previous_raw_text: Option<String>,
    /// 上次盲文区域的光标位置
    pub previous_cursor_pos: Option<usize>,
}

impl ReviewState {
    pub fn new(locale: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            previous_character: String::new(),
            direction: Direction::Idle,
            desc_index: 0,
            is_review_character: false,
            previous_raw_text: None,
            previous_cursor_pos: None,
        }
    }

    /// 光标移动后丢弃循环上下文，下一次查询从第一条描述开始。
    pub fn forget_character(&mut self) {
        self.previous_character.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_is_idle() {
        let state = ReviewState::new("zh_TW");
        assert_eq!(state.locale, "zh_TW");
        assert_eq!(state.direction, Direction::Idle);
        assert_eq!(state.desc_index, 0);
        assert!(!state.is_review_character);
        assert_eq!(state.previous_raw_text, None);
        assert_eq!(state.previous_cursor_pos, None);
    }

    #[test]
    fn direction_deltas() {
        assert_eq!(Direction::Forward.delta(), 1);
        assert_eq!(Direction::Backward.delta(), -1);
        assert_eq!(Direction::Idle.delta(), 0);
    }
}
