//! 朗读序列：交给宿主语音队列的结构化命令。

/// 大写提示的默认蜂鸣（频率 Hz，时长 ms）。
pub const CAP_BEEP: (u32, u32) = (2000, 50);

/// “cap %s” 的前后两段。
const CAP_MESSAGE_BEFORE: &str = "cap ";
const CAP_MESSAGE_AFTER: &str = "";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpeechCommand {
    Text(String),
    /// 切换朗读语言
    LangChange(String),
    /// 一个拼读单元结束
    EndUtterance,
    /// 合成器逐字模式开/关
    CharacterMode(bool),
    /// 相对音高偏移；0 表示恢复
    Pitch(i32),
    Beep { hz: u32, length_ms: u32 },
}

impl SpeechCommand {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }
}

pub type SpeechSequence = Vec<SpeechCommand>;

/// 一个拼读单元加上大写提示（念 cap / 升调 / 蜂鸣）。
pub fn spelling_char_with_cap_notification(
    speak_as: &str,
    say_cap: bool,
    cap_pitch_change: i32,
    beep: bool,
) -> SpeechSequence {
    let mut seq = Vec::new();
    if cap_pitch_change != 0 {
        seq.push(SpeechCommand::Pitch(cap_pitch_change));
    }
    if beep {
        let (hz, length_ms) = CAP_BEEP;
        seq.push(SpeechCommand::Beep { hz, length_ms });
    }
    if say_cap && !CAP_MESSAGE_BEFORE.is_empty() {
        seq.push(SpeechCommand::text(CAP_MESSAGE_BEFORE));
    }
    seq.push(SpeechCommand::text(speak_as));
    if say_cap && !CAP_MESSAGE_AFTER.is_empty() {
        seq.push(SpeechCommand::text(CAP_MESSAGE_AFTER));
    }
    if cap_pitch_change != 0 {
        seq.push(SpeechCommand::Pitch(0));
    }
    seq
}

/// 单字符文本前打开逐字模式，多字符文本前关闭。
pub fn add_character_mode(seq: SpeechSequence) -> SpeechSequence {
    let mut out = Vec::with_capacity(seq.len() + 2);
    let mut char_mode = false;
    for item in seq {
        if let SpeechCommand::Text(text) = &item {
            let single = text.chars().count() == 1;
            if single != char_mode {
                char_mode = single;
                out.push(SpeechCommand::CharacterMode(char_mode));
            }
        }
        out.push(item);
    }
    out
}
