//! `composition`：包装宿主的输入法组字变化通知。
//!
//! 只在开启了“朗读输入字符/单词”时生效；新插入恰好一个非字母数字字符时：
//! - 朗读回顾开启：念该字的描述（循环函数的第一条），代替字符本身
//! - 盲文回顾为 On/Auto：在点显器上显示 `字 描述…`
//! - 其余情况按默认方式念出新输入的文本
use tracing::debug;

use crate::{
    config::SpeechReview,
    context::ReviewContext,
    describe::next_description,
    dictionary::CharacterDictionary,
    event::Action,
    host::Host,
    text::{IDEOGRAPHIC_SPACE, calculate_inserted_chars, is_alphanumeric},
};

pub fn report_new_text(
    host: &dyn Host,
    dictionary: &dyn CharacterDictionary,
    ctx: &mut ReviewContext,
    old: &str,
    new: &str,
) -> Vec<Action> {
    let settings = host.settings();
    if !(settings.speak_typed_characters || settings.speak_typed_words) {
        return Vec::new();
    }
    let new_text = calculate_inserted_chars(
        old.trim_matches(IDEOGRAPHIC_SPACE),
        new.trim_matches(IDEOGRAPHIC_SPACE),
    );
    let single = new_text.chars().count() == 1 && !is_alphanumeric(&new_text);

    let mut speech_text = None;
    if single && ctx.config.speech_review == SpeechReview::On {
        let locale = ctx.state.locale.clone();
        match next_description(dictionary, &ctx.config, &mut ctx.state, &locale, &new_text) {
            Ok(desc) => speech_text = desc.map(|d| d.into_text()),
            Err(e) => debug!("输入字符描述查询失败：{e}"),
        }
    }

    let mut actions = Vec::new();
    match speech_text {
        Some(text) => actions.push(Action::ReviewMessage(text)),
        None if !new_text.is_empty() => actions.push(Action::SpeakText(new_text.clone())),
        None => {}
    }
    if single && ctx.config.braille_review.is_enabled() {
        if let Some(line) = ctx.braille_description(dictionary, &new_text) {
            actions.push(Action::Braille(line));
        }
    }
    actions
}
