//! 插件暴露给宿主的六个用户命令（手势、说明、分类）。

/// 命令在宿主“输入帮助”里的分类。
pub const CATEGORY: &str = "CJK Enhanced UI";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    ToggleSpeechReview,
    ToggleBrailleReview,
    ReviewPreviousCharacter,
    ReviewNextCharacter,
    ForwardReviewCharacter,
    ReverseReviewCharacter,
}

/// 注册到宿主的脚本信息。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScriptInfo {
    pub name: &'static str,
    pub gestures: &'static [&'static str],
    pub description: &'static str,
    pub category: &'static str,
}

impl Command {
    pub const ALL: [Command; 6] = [
        Command::ToggleSpeechReview,
        Command::ToggleBrailleReview,
        Command::ReviewPreviousCharacter,
        Command::ReviewNextCharacter,
        Command::ForwardReviewCharacter,
        Command::ReverseReviewCharacter,
    ];

    pub fn info(self) -> ScriptInfo {
        let (name, gestures, description): (&str, &[&str], &str) = match self {
            Command::ToggleSpeechReview => (
                "ToggleSpeechReview",
                &["kb:nvda+0"],
                "Toggle on or off the CJK enhanced UI speech review mode.",
            ),
            Command::ToggleBrailleReview => (
                "ToggleBrailleReview",
                &["kb:nvda+="],
                "Toggle the Braille review mode between Review, Auto, and Off.",
            ),
            Command::ReviewPreviousCharacter => (
                "review_previousCharacter",
                &["kb:numpad1", "kb(laptop):NVDA+leftArrow", "ts(text):flickLeft"],
                "Moves the review cursor to the previous character of the current navigator object and speaks it",
            ),
            Command::ReviewNextCharacter => (
                "review_nextCharacter",
                &["kb:numPad3", "kb(laptop):nvda+rightarrow"],
                "Moves the review cursor to the next character of the current navigator object and speaks it",
            ),
            Command::ForwardReviewCharacter => (
                "forward_review_currentCharacter",
                &["kb:numPad2", "kb(laptop):NVDA+."],
                "Enumerates in forward order through the list of character descriptions in the dictionary.",
            ),
            Command::ReverseReviewCharacter => (
                "reverse_review_currentCharacter",
                &["kb:Shift+numPad2", "kb(laptop):NVDA+Shift+."],
                "Enumerates in reverse order through the list of character descriptions in the dictionary.",
            ),
        };
        ScriptInfo {
            name,
            gestures,
            description,
            category: CATEGORY,
        }
    }

    /// 按手势查命令（不区分大小写）。
    pub fn from_gesture(gesture: &str) -> Option<Command> {
        Self::ALL.into_iter().find(|command| {
            command
                .info()
                .gestures
                .iter()
                .any(|g| g.eq_ignore_ascii_case(gesture))
        })
    }
}
