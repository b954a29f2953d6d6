use crate::{commands::Command, config::ReviewConfig, speech::SpeechSequence};

/// 宿主派发给插件的事件（逻辑事件）。
///
/// 说明：
/// - 插件只关心“语义事件”，不关心具体按键或宿主对象
/// - 宿主负责把手势/光标/输入法变化转换成这些事件
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostEvent {
    /// 用户命令；`repeat` 是宿主统计的连按次数（首次为 0）
    Command { command: Command, repeat: u32 },
    /// 宿主请求拼读一段文本（光标移动、逐字朗读等都会走到这里）
    Spell {
        text: String,
        locale: Option<String>,
        use_character_descriptions: bool,
    },
    /// 系统光标或回顾光标移动了：循环上下文失效
    CaretMoved,
    /// 输入法组字窗口内容变化
    CompositionChanged { old: String, new: String },
}

impl HostEvent {
    pub fn command(command: Command) -> Self {
        Self::Command { command, repeat: 0 }
    }

    pub fn spell(text: impl Into<String>) -> Self {
        Self::Spell {
            text: text.into(),
            locale: None,
            use_character_descriptions: false,
        }
    }
}

/// 插件输出动作（对宿主的“副作用”请求）。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// 送入语音队列的拼读序列
    Speak(SpeechSequence),
    /// 普通提示（例如模式切换）
    Message(String),
    /// 回顾类提示（例如“Left”）
    ReviewMessage(String),
    /// 按“全部符号”级别朗读一段文本
    SpeakText(String),
    /// 直接朗读一句话（不拼读）
    SpeakMessage(String),
    /// 在点显器上显示一条消息
    Braille(String),
    /// 设置已变更，宿主应保存
    StoreConfig(ReviewConfig),
}
