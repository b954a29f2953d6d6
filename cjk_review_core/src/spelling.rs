//! `spelling`：替换宿主的拼读朗读。
//!
//! 对每个拼读单元：
//! - 连字语言：用宿主的按簇切分结果（簇 + 描述）
//! - 其余语言：
//!   - 朗读回顾关闭且要求描述：一次性取全部描述
//!   - 字母数字且不在逐条描述命令中：清掉循环上下文，走默认拼读
//!   - 朗读回顾开启：逐条取描述（见 [`next_description`]）
//! - 没有描述时交给宿主的符号朗读
use tracing::debug;

use crate::{
    config::SpeechReview,
    context::ReviewContext,
    describe::{Description, next_description},
    dictionary::CharacterDictionary,
    host::Host,
    locale::{effective_locale, has_conjuncts},
    speech::{SpeechCommand, SpeechSequence, add_character_mode, spelling_char_with_cap_notification},
    text::{IDEOGRAPHIC_COMMA, is_alphanumeric, is_upper},
};

/// 空文本时念的提示。
pub const BLANK: &str = "blank";

/// 生成 `text` 的拼读序列；合成器开启逐字模式时加上逐字模式切换命令。
pub fn spelling_speech(
    host: &dyn Host,
    dictionary: &dyn CharacterDictionary,
    ctx: &mut ReviewContext,
    text: &str,
    locale: Option<&str>,
    use_character_descriptions: bool,
) -> SpeechSequence {
    let seq = spelling_speech_without_char_mode(host, dictionary, ctx, text, locale, use_character_descriptions);
    if host.settings().synth.use_spelling_functionality {
        add_character_mode(seq)
    } else {
        seq
    }
}

fn spelling_speech_without_char_mode(
    host: &dyn Host,
    dictionary: &dyn CharacterDictionary,
    ctx: &mut ReviewContext,
    text: &str,
    locale: Option<&str>,
    use_character_descriptions: bool,
) -> SpeechSequence {
    let settings = host.settings();
    let locale = effective_locale(locale, host.current_language(), settings.auto_dialect_switching).to_owned();

    if text.is_empty() {
        return vec![SpeechCommand::text(BLANK)];
    }
    let text = if text.chars().all(char::is_whitespace) { text } else { text.trim_end() };
    let text_length = text.chars().count();

    let conjuncts = has_conjuncts(&locale);
    let units: Vec<(String, Option<Vec<String>>)> = if conjuncts {
        host.conjunct_descriptions(text, &locale)
    } else {
        text.chars().map(|c| (c.to_string(), None)).collect()
    };

    let synth = &settings.synth;
    let cap_pitch_change = synth.effective_cap_pitch_change();
    let mut seq = Vec::new();
    for (unit, conjunct_desc) in units {
        let desc = if conjuncts {
            conjunct_desc.map(Description::All)
        } else {
            describe_unit(dictionary, ctx, &locale, &unit, use_character_descriptions)
        };
        let speak_as = match desc.and_then(|d| render(d, ctx.config.speech_review, text_length)) {
            Some(rendered) => rendered,
            None => host.process_symbol(&locale, &unit),
        };

        let uppercase = is_upper(&speak_as);
        if settings.auto_language_switching {
            seq.push(SpeechCommand::LangChange(locale.clone()));
        }
        seq.extend(spelling_char_with_cap_notification(
            &speak_as,
            uppercase && synth.say_cap_for_capitals,
            if uppercase { cap_pitch_change } else { 0 },
            uppercase && synth.beep_for_capitals,
        ));
        seq.push(SpeechCommand::EndUtterance);
    }
    seq
}

fn describe_unit(
    dictionary: &dyn CharacterDictionary,
    ctx: &mut ReviewContext,
    locale: &str,
    unit: &str,
    use_character_descriptions: bool,
) -> Option<Description> {
    let lowered = unit.to_lowercase();
    let review = ctx.config.speech_review;
    if review == SpeechReview::Off && use_character_descriptions {
        return match dictionary.character_description(locale, &lowered) {
            Ok(desc) => desc.map(Description::All),
            Err(e) => {
                debug!("字符描述查询失败：{e}");
                None
            }
        };
    }
    if is_alphanumeric(unit) && !ctx.state.is_review_character {
        // 字母数字不念描述，并让下一次回到第一条
        ctx.state.forget_character();
        return None;
    }
    if review == SpeechReview::On {
        return match next_description(dictionary, &ctx.config, &mut ctx.state, locale, &lowered) {
            Ok(desc) => desc,
            Err(e) => {
                debug!("字符描述查询失败：{e}");
                None
            }
        };
    }
    None
}

/// 回顾开启：一条描述（或连字簇的全部描述直接拼接）；
/// 回顾关闭：多字符文本只念第一条，单字符念全部并以表意逗号隔开。
fn render(desc: Description, review: SpeechReview, text_length: usize) -> Option<String> {
    match desc {
        Description::Step(text) => Some(text),
        Description::All(list) if list.is_empty() => None,
        Description::All(list) if review == SpeechReview::On => Some(list.concat()),
        Description::All(mut list) if text_length > 1 => Some(list.swap_remove(0)),
        Description::All(list) => Some(list.join(&IDEOGRAPHIC_COMMA.to_string())),
    }
}
