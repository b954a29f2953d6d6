//! 命令行演示宿主：把 REPL 输入翻译成宿主事件，驱动 `ReviewSession`。
use cjk_review_core::{
    Result,
    braille::{self, BrailleRegion},
    commands::{CATEGORY, Command},
    event::{Action, HostEvent},
    hooks::{HookPoint, HookTable},
    host::{Host, HostSettings},
    processor::Env,
    review::LineCursor,
    session::ReviewSession,
    speech::SpeechCommand,
    text::calculate_inserted_chars,
};
use cjk_review_dict::DescriptionDictionary;
use tracing::debug;

pub const HELP: &str = "\
:text <行>      设置回顾行
h / l           回顾上一个 / 下一个字符
n / p           正向 / 反向逐条朗读描述（连按计数）
:speech         切换朗读回顾模式
:braille        切换盲文回顾模式
:spell <文本>   拼读
:type <组字串>  输入法组字变为 <组字串>
:caret          通知光标移动
:refresh <位置> 盲文区域光标移到 <位置> 并刷新
:help           显示本帮助
:q              退出";

/// 宿主“输入帮助”里的命令列表：`分类` 下每行 `脚本名 [手势…]: 说明`。
pub fn command_help() -> String {
    let mut lines = vec![format!("{CATEGORY}:")];
    for command in Command::ALL {
        let info = command.info();
        lines.push(format!("  {} [{}]: {}", info.name, info.gestures.join(", "), info.description));
    }
    lines.join("\n")
}

/// 一行 REPL 输入。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    Quit,
    Help,
    Text(String),
    Command(Command),
    Spell(String),
    Type(String),
    Caret,
    Refresh(usize),
    Unknown(String),
}

pub fn parse_line(input: &str) -> Line {
    let (head, rest) = match input.split_once(' ') {
        Some((head, rest)) => (head, rest),
        None => (input, ""),
    };
    match head {
        ":q" | ":quit" | ":exit" => Line::Quit,
        ":help" => Line::Help,
        ":text" => Line::Text(rest.to_owned()),
        "h" => Line::Command(Command::ReviewPreviousCharacter),
        "l" => Line::Command(Command::ReviewNextCharacter),
        "n" => Line::Command(Command::ForwardReviewCharacter),
        "p" => Line::Command(Command::ReverseReviewCharacter),
        ":speech" => Line::Command(Command::ToggleSpeechReview),
        ":braille" => Line::Command(Command::ToggleBrailleReview),
        ":spell" => Line::Spell(rest.to_owned()),
        ":type" => Line::Type(rest.to_owned()),
        ":caret" => Line::Caret,
        ":refresh" => match rest.trim().parse() {
            Ok(offset) => Line::Refresh(offset),
            Err(_) => Line::Unknown(input.to_owned()),
        },
        _ => Line::Unknown(input.to_owned()),
    }
}

/// 动作的输出行；`StoreConfig` 由调用方保存，不打印。
pub fn format_action(action: &Action) -> Option<String> {
    let line = match action {
        Action::Speak(seq) => format!("speech: {}", render_speech(seq)),
        Action::SpeakText(text) => format!("speech: {text}"),
        Action::Message(m) | Action::ReviewMessage(m) | Action::SpeakMessage(m) => format!("message: {m}"),
        Action::Braille(text) => format!("braille: {text}"),
        Action::StoreConfig(_) => return None,
    };
    Some(line)
}

fn render_speech(seq: &[SpeechCommand]) -> String {
    let mut units = Vec::new();
    let mut current = String::new();
    for command in seq {
        match command {
            SpeechCommand::Text(text) => current.push_str(text),
            SpeechCommand::LangChange(locale) => current.push_str(&format!("[{locale}]")),
            SpeechCommand::Pitch(0) => current.push_str("[/pitch]"),
            SpeechCommand::Pitch(p) => current.push_str(&format!("[pitch {p:+}]")),
            SpeechCommand::Beep { hz, .. } => current.push_str(&format!("[beep {hz}]")),
            SpeechCommand::CharacterMode(_) => {}
            SpeechCommand::EndUtterance => units.push(std::mem::take(&mut current)),
        }
    }
    if !current.is_empty() {
        units.push(current);
    }
    units.join(" | ")
}

pub struct DemoHost {
    locale: String,
    settings: HostSettings,
}

impl DemoHost {
    pub fn new(locale: impl Into<String>) -> Self {
        let mut settings = HostSettings::default();
        // 终端里没有语言切换可言
        settings.auto_language_switching = false;
        Self {
            locale: locale.into(),
            settings,
        }
    }
}

impl Host for DemoHost {
    fn current_language(&self) -> &str {
        &self.locale
    }

    fn settings(&self) -> &HostSettings {
        &self.settings
    }

    fn process_symbol(&self, _locale: &str, symbol: &str) -> String {
        match symbol {
            " " => "space".to_owned(),
            "\u{3000}" => "ideographic space".to_owned(),
            "，" => "comma".to_owned(),
            "。" => "period".to_owned(),
            _ => symbol.to_owned(),
        }
    }
}

/// 单行盲文区域，内容与回顾行一致。
#[derive(Debug, Clone, Default)]
pub struct DemoRegion {
    raw_text: String,
    cursor: usize,
    pending_caret: bool,
}

impl BrailleRegion for DemoRegion {
    fn update(&mut self) -> Result<()> {
        let len = self.raw_text.chars().count();
        self.cursor = self.cursor.min(len.saturating_sub(1));
        Ok(())
    }

    fn take_pending_caret_update(&mut self) -> bool {
        std::mem::take(&mut self.pending_caret)
    }

    fn raw_text(&self) -> &str {
        &self.raw_text
    }

    fn cursor_pos(&self) -> Option<usize> {
        (!self.raw_text.is_empty()).then_some(self.cursor)
    }
}

pub struct Demo {
    session: ReviewSession,
    host: DemoHost,
    dictionary: DescriptionDictionary,
    cursor: LineCursor,
    region: DemoRegion,
    composition: String,
    last_command: Option<(Command, u32)>,
}

impl Demo {
    pub fn new(session: ReviewSession, host: DemoHost, dictionary: DescriptionDictionary) -> Self {
        Self {
            session,
            host,
            dictionary,
            cursor: LineCursor::default(),
            region: DemoRegion::default(),
            composition: String::new(),
            last_command: None,
        }
    }

    pub fn into_session(self) -> ReviewSession {
        self.session
    }

    /// 执行一行输入；`hooks` 决定各回调点走增强实现还是宿主默认实现。
    pub fn execute(&mut self, hooks: &HookTable, line: Line) -> Vec<Action> {
        let repeat = match line {
            Line::Command(command) => self.repeat_count(command),
            _ => {
                self.last_command = None;
                0
            }
        };
        match line {
            Line::Text(text) => {
                self.cursor.set_line(&text);
                self.region = DemoRegion {
                    raw_text: text,
                    ..DemoRegion::default()
                };
                self.dispatch(HostEvent::CaretMoved)
            }
            Line::Command(command) => self.dispatch(HostEvent::Command { command, repeat }),
            Line::Spell(text) if hooks.is_enhanced(HookPoint::Spelling) => self.dispatch(HostEvent::spell(text)),
            Line::Spell(text) => vec![Action::SpeakText(text)],
            Line::Type(new) => {
                let old = std::mem::replace(&mut self.composition, new.clone());
                if hooks.is_enhanced(HookPoint::CompositionReport) {
                    self.dispatch(HostEvent::CompositionChanged { old, new })
                } else {
                    vec![Action::SpeakText(calculate_inserted_chars(&old, &new))]
                }
            }
            Line::Caret => self.dispatch(HostEvent::CaretMoved),
            Line::Refresh(offset) => {
                self.region.cursor = offset;
                self.region.pending_caret = true;
                let pending = std::slice::from_mut(&mut self.region);
                if hooks.is_enhanced(HookPoint::BrailleUpdate) {
                    let refresh = self.session.handle_pending_update(&self.dictionary, pending);
                    debug!("盲文滚动到区域 {:?}", refresh.scroll_to);
                    refresh.actions
                } else {
                    braille::update_regions(pending);
                    Vec::new()
                }
            }
            Line::Quit | Line::Help => Vec::new(),
            Line::Unknown(input) => vec![Action::Message(format!("无法识别：{input}（:help 查看用法）"))],
        }
    }

    /// 与上一行是同一命令时连按计数加一。
    fn repeat_count(&mut self, command: Command) -> u32 {
        let repeat = match self.last_command {
            Some((last, count)) if last == command => count + 1,
            _ => 0,
        };
        self.last_command = Some((command, repeat));
        repeat
    }

    fn dispatch(&mut self, event: HostEvent) -> Vec<Action> {
        let mut env = Env {
            host: &self.host,
            dictionary: &self.dictionary,
            cursor: &mut self.cursor,
        };
        self.session.handle(&mut env, event)
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use cjk_review_core::config::ReviewConfig;
    use cjk_review_core::hooks::InstalledHooks;
    use pretty_assertions::assert_eq;

    use super::*;

    fn demo(config: ReviewConfig) -> Demo {
        let asset = Path::new(env!("CARGO_MANIFEST_DIR")).join("asset");
        let dictionary = DescriptionDictionary::from_dir(asset).unwrap();
        Demo::new(ReviewSession::activate("zh_TW", config), DemoHost::new("zh_TW"), dictionary)
    }

    fn run(demo: &mut Demo, hooks: &HookTable, input: &str) -> Vec<String> {
        demo.execute(hooks, parse_line(input))
            .iter()
            .filter_map(format_action)
            .collect()
    }

    #[test]
    fn parses_repl_lines() {
        assert_eq!(parse_line(":q"), Line::Quit);
        assert_eq!(parse_line(":text 測量"), Line::Text("測量".to_owned()));
        assert_eq!(parse_line("n"), Line::Command(Command::ForwardReviewCharacter));
        assert_eq!(parse_line(":refresh 4"), Line::Refresh(4));
        assert_eq!(parse_line(":refresh x"), Line::Unknown(":refresh x".to_owned()));
        assert_eq!(parse_line(":type 測 "), Line::Type("測 ".to_owned()));
    }

    #[test]
    fn command_help_lists_script_names() {
        let help = command_help();
        assert!(help.starts_with("CJK Enhanced UI:"));
        assert_eq!(help.lines().count(), 1 + Command::ALL.len());
        assert!(help.contains("  forward_review_currentCharacter [kb:numPad2, kb(laptop):NVDA+.]: "));
        assert!(help.contains("  ToggleSpeechReview [kb:nvda+0]: "));
    }

    #[test]
    fn speech_rendering_marks_units() {
        let seq = vec![
            SpeechCommand::CharacterMode(true),
            SpeechCommand::Pitch(30),
            SpeechCommand::text("A"),
            SpeechCommand::Pitch(0),
            SpeechCommand::EndUtterance,
            SpeechCommand::text("b"),
            SpeechCommand::EndUtterance,
        ];
        assert_eq!(render_speech(&seq), "[pitch +30]A[/pitch] | b");
    }

    #[test]
    fn cycling_session_over_bundled_dictionary() {
        let mut table = HookTable::default();
        let hooks = InstalledHooks::install(&mut table);
        let mut demo = demo(ReviewConfig {
            braille_review: cjk_review_core::config::BrailleReview::Off,
            code_point_in_cycle: false,
            ..ReviewConfig::default()
        });

        run(&mut demo, &hooks, ":text 測量");
        assert_eq!(run(&mut demo, &hooks, "n"), ["speech: 測 to measure"]);
        assert_eq!(run(&mut demo, &hooks, "n"), ["speech: to survey"]);
        assert_eq!(run(&mut demo, &hooks, "n"), ["speech: to measure"]);
        assert_eq!(run(&mut demo, &hooks, "l"), ["speech: 量 quantity"]);
        assert_eq!(run(&mut demo, &hooks, "l"), ["message: Right", "speech: 量 quantity"]);
    }

    #[test]
    fn repeat_count_resets_on_other_input() {
        let mut demo = demo(ReviewConfig::default());
        assert_eq!(demo.repeat_count(Command::ForwardReviewCharacter), 0);
        assert_eq!(demo.repeat_count(Command::ForwardReviewCharacter), 1);
        assert_eq!(demo.repeat_count(Command::ReverseReviewCharacter), 0);
    }

    #[test]
    fn host_defaults_apply_without_hooks() {
        let table = HookTable::default();
        let mut demo = demo(ReviewConfig::default());
        assert_eq!(run(&mut demo, &table, ":spell 測"), ["speech: 測"]);
        assert_eq!(run(&mut demo, &table, ":type 測"), ["speech: 測"]);
        run(&mut demo, &table, ":text 我們要測量");
        assert!(run(&mut demo, &table, ":refresh 3").is_empty());
        assert!(run(&mut demo, &table, ":refresh 4").is_empty());
    }

    #[test]
    fn braille_auto_follows_refreshes() {
        let mut table = HookTable::default();
        let hooks = InstalledHooks::install(&mut table);
        let mut demo = demo(ReviewConfig {
            braille_review: cjk_review_core::config::BrailleReview::Auto,
            ..ReviewConfig::default()
        });
        run(&mut demo, &hooks, ":text 我們要測量");
        assert!(run(&mut demo, &hooks, ":refresh 3").is_empty());
        assert_eq!(run(&mut demo, &hooks, ":refresh 4"), ["braille: 量 quantity to weigh"]);
    }

    #[test]
    fn toggles_request_storage() {
        let table = HookTable::default();
        let mut demo = demo(ReviewConfig::default());
        let actions = demo.execute(&table, Line::Command(Command::ToggleBrailleReview));
        assert_eq!(actions[0], Action::Message("Braille review mode Auto".to_owned()));
        assert!(matches!(actions[1], Action::StoreConfig(c) if c.braille_review.is_enabled()));
        assert_eq!(format_action(&actions[1]), None);
    }
}
