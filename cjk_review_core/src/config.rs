//! 用户设置：朗读回顾模式与盲文回顾模式。
//!
//! 宿主负责持久化；这里只定义取值、默认值与切换顺序。
//! 序列化键名沿用宿主配置里的 `speechReview` / `brailleReview`，取值为 `"Off"` / `"On"` / `"Auto"`。
use std::fmt;

use serde::{Deserialize, Serialize};

/// 朗读回顾模式：开启时逐条朗读字符描述。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SpeechReview {
    Off,
    #[default]
    On,
}

impl SpeechReview {
    /// Off -> On -> Off
    pub fn toggled(self) -> Self {
        match self {
            Self::Off => Self::On,
            Self::On => Self::Off,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Off => "Off",
            Self::On => "On",
        }
    }
}

impl fmt::Display for SpeechReview {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// 盲文回顾模式。
///
/// - `Off`：宿主默认盲文行为
/// - `On`：按“逐条描述”命令时在点显器上显示描述
/// - `Auto`：在同一段文本内移动光标即自动显示描述
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BrailleReview {
    Off,
    #[default]
    On,
    Auto,
}

impl BrailleReview {
    /// Off -> On -> Auto -> Off
    pub fn next(self) -> Self {
        match self {
            Self::Off => Self::On,
            Self::On => Self::Auto,
            Self::Auto => Self::Off,
        }
    }

    /// `On` 或 `Auto`
    pub fn is_enabled(self) -> bool {
        !matches!(self, Self::Off)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Off => "Off",
            Self::On => "On",
            Self::Auto => "Auto",
        }
    }
}

impl fmt::Display for BrailleReview {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewConfig {
    #[serde(rename = "speechReview", default)]
    pub speech_review: SpeechReview,

    #[serde(rename = "brailleReview", default)]
    pub braille_review: BrailleReview,

    /// 描述循环的最后一项是否为码位（十进制 + 逐字符十六进制）
    ///
    /// 只读不写：保存的设置只有上面两个键。
    #[serde(rename = "codePointInCycle", default = "default_true", skip_serializing)]
    pub code_point_in_cycle: bool,
}

impl Default for ReviewConfig {
    fn default() -> Self {
        Self {
            speech_review: SpeechReview::default(),
            braille_review: BrailleReview::default(),
            code_point_in_cycle: true,
        }
    }
}

fn default_true() -> bool {
    true
}
