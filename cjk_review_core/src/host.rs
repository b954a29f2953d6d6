//! 宿主边界：插件只“消费”的宿主能力。
//!
//! 宿主负责语音合成、盲文点显器、回顾光标与配置存储；
//! 这里只声明插件需要查询的部分，输出一律以 [`Action`](crate::event::Action) 交回宿主执行。

/// 合成器相关的大写提示与拼读设置。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthSettings {
    pub say_cap_for_capitals: bool,
    /// 大写字母的音高偏移（合成器不支持音高时忽略）
    pub cap_pitch_change: i32,
    pub beep_for_capitals: bool,
    /// 拼读时使用合成器的逐字模式
    pub use_spelling_functionality: bool,
    pub supports_pitch: bool,
}

impl Default for SynthSettings {
    fn default() -> Self {
        Self {
            say_cap_for_capitals: false,
            cap_pitch_change: 30,
            beep_for_capitals: false,
            use_spelling_functionality: true,
            supports_pitch: true,
        }
    }
}

impl SynthSettings {
    /// 实际生效的音高偏移
    pub fn effective_cap_pitch_change(&self) -> i32 {
        if self.supports_pitch { self.cap_pitch_change } else { 0 }
    }
}

/// 宿主的全局设置（只读）。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostSettings {
    pub auto_language_switching: bool,
    pub auto_dialect_switching: bool,
    pub speak_typed_characters: bool,
    pub speak_typed_words: bool,
    pub synth: SynthSettings,
}

impl Default for HostSettings {
    fn default() -> Self {
        Self {
            auto_language_switching: true,
            auto_dialect_switching: false,
            speak_typed_characters: true,
            speak_typed_words: false,
            synth: SynthSettings::default(),
        }
    }
}

/// 宿主提供的查询接口。
pub trait Host {
    /// 当前朗读语言（`language[_COUNTRY]`）
    fn current_language(&self) -> &str;

    fn settings(&self) -> &HostSettings;

    /// 宿主默认的符号朗读（例如把 `，` 念成“逗號”）；默认原样返回。
    fn process_symbol(&self, _locale: &str, symbol: &str) -> String {
        symbol.to_owned()
    }

    /// 连字语言的按簇切分：`(簇, 描述列表)`；默认逐字符、无描述。
    fn conjunct_descriptions(&self, text: &str, _locale: &str) -> Vec<(String, Option<Vec<String>>)> {
        text.chars().map(|c| (c.to_string(), None)).collect()
    }
}

/// 回顾光标移动一步的方向。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Previous,
    Next,
}

/// 宿主的回顾光标（只在当前行内按字符移动）。
pub trait ReviewCursor {
    /// 光标处的字符（已展开到字符单位）；空行返回 `None`
    fn character(&self) -> Option<String>;

    /// 移动一个字符；已在行首/行尾时不动并返回 `false`
    fn step(&mut self, step: Step) -> bool;

    /// 回顾对象位于锁屏之下，不能朗读其内容
    fn is_locked(&self) -> bool {
        false
    }
}
