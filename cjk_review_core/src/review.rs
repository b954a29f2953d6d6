//! 内存中的单行回顾光标（CLI 与测试用的宿主实现）。

use crate::host::{ReviewCursor, Step};

#[derive(Debug, Clone, Default)]
pub struct LineCursor {
    line: Vec<char>,
    offset: usize,
    locked: bool,
}

impl LineCursor {
    pub fn new(line: &str) -> Self {
        Self {
            line: line.chars().collect(),
            offset: 0,
            locked: false,
        }
    }

    /// 换一行文本，光标回到行首。
    pub fn set_line(&mut self, line: &str) {
        self.line = line.chars().collect();
        self.offset = 0;
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    /// 超出行尾时钳到最后一个字符。
    pub fn set_offset(&mut self, offset: usize) {
        self.offset = offset.min(self.line.len().saturating_sub(1));
    }

    pub fn set_locked(&mut self, locked: bool) {
        self.locked = locked;
    }
}

impl ReviewCursor for LineCursor {
    fn character(&self) -> Option<String> {
        self.line.get(self.offset).map(|c| c.to_string())
    }

    fn step(&mut self, step: Step) -> bool {
        match step {
            Step::Previous if self.offset > 0 => {
                self.offset -= 1;
                true
            }
            Step::Next if self.offset + 1 < self.line.len() => {
                self.offset += 1;
                true
            }
            _ => false,
        }
    }

    fn is_locked(&self) -> bool {
        self.locked
    }
}
