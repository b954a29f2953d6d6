//! `processor`：宿主事件处理链。
//!
//! 按顺序处理 `HostEvent`，对 `ReviewContext` 做状态变更，并产生 `Action`（朗读、盲文、提示）。
//!
//! 当前链路（`ReviewSession::activate` 默认组装）：
//! - `ToggleProcessor`：切换朗读/盲文回顾模式
//! - `CursorProcessor`：回顾光标移到上一个/下一个字符
//! - `CycleProcessor`：逐条（正向/反向）朗读字符描述
//! - `SpellingProcessor`：宿主的拼读请求与光标移动
//! - `CompositionProcessor`：输入法组字变化
use tracing::debug;

use crate::{
    commands::Command,
    composition::report_new_text,
    config::{BrailleReview, SpeechReview},
    context::ReviewContext,
    dictionary::CharacterDictionary,
    event::{Action, HostEvent},
    host::{Host, ReviewCursor, Step},
    spelling::spelling_speech,
    state::Direction,
    text::{code_point, hex, is_alphanumeric},
};

/// 回顾对象在锁屏之下时的提示。
pub const LOCKED_MESSAGE: &str = "Action unavailable while Windows is locked";

/// 给 processors 的宿主接口集合（避免在 processors 层引入泛型）。
pub struct Env<'a> {
    pub host: &'a dyn Host,
    pub dictionary: &'a dyn CharacterDictionary,
    pub cursor: &'a mut dyn ReviewCursor,
}

/// Processor 执行结果：是否“消费”了本次事件。
///
/// - `Consume`：本 processor 已处理该事件，后续 processor 不再执行
/// - `Continue`：本 processor 不处理该事件，交给下一个 processor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessStatus {
    Consume,
    Continue,
}

pub trait Processor {
    fn process(
        &mut self,
        env: &mut Env<'_>,
        ctx: &mut ReviewContext,
        event: &HostEvent,
    ) -> (ProcessStatus, Vec<Action>);
}

/// 模式切换：切换后提示新模式，并请求宿主保存设置。
pub struct ToggleProcessor;

impl Processor for ToggleProcessor {
    fn process(
        &mut self,
        _env: &mut Env<'_>,
        ctx: &mut ReviewContext,
        event: &HostEvent,
    ) -> (ProcessStatus, Vec<Action>) {
        let message = match *event {
            HostEvent::Command {
                command: Command::ToggleSpeechReview,
                ..
            } => {
                ctx.config.speech_review = ctx.config.speech_review.toggled();
                format!("Speech review mode {}", ctx.config.speech_review)
            }
            HostEvent::Command {
                command: Command::ToggleBrailleReview,
                ..
            } => {
                ctx.config.braille_review = ctx.config.braille_review.next();
                format!("Braille review mode {}", ctx.config.braille_review)
            }
            _ => return (ProcessStatus::Continue, Vec::new()),
        };
        (
            ProcessStatus::Consume,
            vec![Action::Message(message), Action::StoreConfig(ctx.config)],
        )
    }
}

/// 回顾光标左右移动一个字符并朗读（拼读路径会念出第一条描述）。
pub struct CursorProcessor;

impl CursorProcessor {
    fn review_move(env: &mut Env<'_>, ctx: &mut ReviewContext, step: Step) -> Vec<Action> {
        let mut actions = Vec::new();
        if !env.cursor.step(step) {
            let edge = match step {
                Step::Previous => "Left",
                Step::Next => "Right",
            };
            actions.push(Action::ReviewMessage(edge.to_owned()));
        }
        if env.cursor.is_locked() {
            actions.push(Action::ReviewMessage(LOCKED_MESSAGE.to_owned()));
            return actions;
        }
        let Some(character) = env.cursor.character() else {
            return actions;
        };
        actions.push(Action::Speak(spelling_speech(
            env.host,
            env.dictionary,
            ctx,
            &character,
            None,
            false,
        )));

        let lowered = character.to_lowercase();
        if !is_alphanumeric(&lowered) && ctx.config.braille_review == BrailleReview::Auto {
            if let Some(line) = ctx.braille_description(env.dictionary, &lowered) {
                actions.push(Action::Braille(line));
            }
        }
        actions
    }
}

impl Processor for CursorProcessor {
    fn process(
        &mut self,
        env: &mut Env<'_>,
        ctx: &mut ReviewContext,
        event: &HostEvent,
    ) -> (ProcessStatus, Vec<Action>) {
        let step = match *event {
            HostEvent::Command {
                command: Command::ReviewPreviousCharacter,
                ..
            } => Step::Previous,
            HostEvent::Command {
                command: Command::ReviewNextCharacter,
                ..
            } => Step::Next,
            _ => return (ProcessStatus::Continue, Vec::new()),
        };
        (ProcessStatus::Consume, Self::review_move(env, ctx, step))
    }
}

/// 逐条朗读当前回顾字符的描述。
pub struct CycleProcessor;

impl CycleProcessor {
    fn forward(env: &mut Env<'_>, ctx: &mut ReviewContext, repeat: u32) -> Vec<Action> {
        if env.cursor.is_locked() {
            return vec![Action::ReviewMessage(LOCKED_MESSAGE.to_owned())];
        }
        let Some(character) = env.cursor.character() else {
            return Vec::new();
        };
        let mut actions = Vec::new();
        let braille_enabled = ctx.config.braille_review.is_enabled();
        if braille_enabled {
            if let Some(line) = ctx.braille_description(env.dictionary, &character.to_lowercase()) {
                actions.push(Action::Braille(line));
            }
        }

        if ctx.config.speech_review == SpeechReview::On {
            let mut scope = ctx.review_scope(Direction::Forward);
            actions.push(Action::Speak(spelling_speech(
                env.host,
                env.dictionary,
                &mut scope,
                &character,
                None,
                true,
            )));
            return actions;
        }

        // 回顾关闭：宿主默认的连按行为
        let host = env.host;
        let dictionary = env.dictionary;
        match repeat {
            0 => actions.push(Action::Speak(spelling_speech(host, dictionary, ctx, &character, None, false))),
            1 => actions.push(Action::Speak(spelling_speech(host, dictionary, ctx, &character, None, true))),
            _ => match code_point(&character) {
                Ok(c) => {
                    actions.push(Action::SpeakMessage(format!("{c},")));
                    actions.push(Action::Speak(spelling_speech(host, dictionary, ctx, &hex(c), None, false)));
                    if !braille_enabled {
                        actions.push(Action::Braille(format!("{c}, {}", hex(c))));
                    }
                }
                Err(e) => {
                    debug!("无法计算码位：{e}");
                    actions.push(Action::Speak(spelling_speech(host, dictionary, ctx, &character, None, false)));
                }
            },
        }
        actions
    }

    fn reverse(env: &mut Env<'_>, ctx: &mut ReviewContext) -> Vec<Action> {
        let Some(character) = env.cursor.character() else {
            return Vec::new();
        };
        let mut scope = ctx.review_scope(Direction::Backward);
        vec![Action::Speak(spelling_speech(
            env.host,
            env.dictionary,
            &mut scope,
            &character,
            None,
            true,
        ))]
    }
}

impl Processor for CycleProcessor {
    fn process(
        &mut self,
        env: &mut Env<'_>,
        ctx: &mut ReviewContext,
        event: &HostEvent,
    ) -> (ProcessStatus, Vec<Action>) {
        match *event {
            HostEvent::Command {
                command: Command::ForwardReviewCharacter,
                repeat,
            } => (ProcessStatus::Consume, Self::forward(env, ctx, repeat)),
            HostEvent::Command {
                command: Command::ReverseReviewCharacter,
                ..
            } => (ProcessStatus::Consume, Self::reverse(env, ctx)),
            _ => (ProcessStatus::Continue, Vec::new()),
        }
    }
}

/// 宿主拼读请求（光标移动后的逐字朗读等）与光标移动通知。
pub struct SpellingProcessor;

impl Processor for SpellingProcessor {
    fn process(
        &mut self,
        env: &mut Env<'_>,
        ctx: &mut ReviewContext,
        event: &HostEvent,
    ) -> (ProcessStatus, Vec<Action>) {
        match event {
            HostEvent::Spell {
                text,
                locale,
                use_character_descriptions,
            } => {
                let seq = spelling_speech(
                    env.host,
                    env.dictionary,
                    ctx,
                    text,
                    locale.as_deref(),
                    *use_character_descriptions,
                );
                (ProcessStatus::Consume, vec![Action::Speak(seq)])
            }
            HostEvent::CaretMoved => {
                ctx.state.forget_character();
                (ProcessStatus::Consume, Vec::new())
            }
            _ => (ProcessStatus::Continue, Vec::new()),
        }
    }
}

pub struct CompositionProcessor;

impl Processor for CompositionProcessor {
    fn process(
        &mut self,
        env: &mut Env<'_>,
        ctx: &mut ReviewContext,
        event: &HostEvent,
    ) -> (ProcessStatus, Vec<Action>) {
        match event {
            HostEvent::CompositionChanged { old, new } => (
                ProcessStatus::Consume,
                report_new_text(env.host, env.dictionary, ctx, old, new),
            ),
            _ => (ProcessStatus::Continue, Vec::new()),
        }
    }
}
