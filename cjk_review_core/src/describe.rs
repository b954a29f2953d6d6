//! `describe`：字符描述的逐条循环。
//!
//! 同一个字符连续执行“下一条/上一条描述”时沿列表前进/后退，首尾相接；
//! 换了字符（或没有方向）时回到第一条，非字母数字字符先念字符本身。
use tracing::debug;

use crate::{
    config::{ReviewConfig, SpeechReview},
    dictionary::CharacterDictionary,
    error::Result,
    state::ReviewState,
    text::{code_point, code_point_entry, is_alphanumeric},
};

/// 一次描述查询的结果。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Description {
    /// 朗读回顾关闭：原样返回整个描述列表（宿主默认行为）
    All(Vec<String>),
    /// 朗读回顾开启：一次只给一条
    Step(String),
}

impl Description {
    /// 单条直接返回；整表以空格连接。
    pub fn into_text(self) -> String {
        match self {
            Self::All(list) => list.join(" "),
            Self::Step(text) => text,
        }
    }
}

/// 取 `character` 的下一条描述并推进 `state`。
///
/// - 本 locale 查不到时退回英文；英文数据也不存在时返回错误
/// - 朗读回顾关闭：`All(原列表)`，不修改状态
/// - 朗读回顾开启但没有描述：`None`（调用方改走符号朗读）
/// - 否则在列表末尾临时追加码位条目（可配置），按 `state.direction` 推进 `desc_index`
///
/// 临时条目只存在于本次调用的副本里，词典中的列表长度不变。
pub fn next_description(
    dictionary: &dyn CharacterDictionary,
    config: &ReviewConfig,
    state: &mut ReviewState,
    locale: &str,
    character: &str,
) -> Result<Option<Description>> {
    let found = dictionary.character_description(locale, character)?;
    if config.speech_review == SpeechReview::Off {
        return Ok(found.map(Description::All));
    }
    let Some(mut desc) = found.filter(|d| !d.is_empty()) else {
        return Ok(None);
    };

    if config.code_point_in_cycle {
        match code_point(character) {
            Ok(c) => desc.push(code_point_entry(c)),
            Err(e) => {
                debug!("跳过描述循环：{e}");
                return Ok(None);
            }
        }
    }

    let len = desc.len() as i32;
    let mut prefix: Option<&str> = None;
    if state.direction.delta() != 0 && state.previous_character == character {
        state.desc_index += state.direction.delta();
        if state.desc_index.abs() >= len {
            state.desc_index = 0;
        }
    } else {
        // 光标换了位置：从第一条开始，并记住这个字符
        state.previous_character = character.to_owned();
        state.desc_index = 0;
        if !is_alphanumeric(character) {
            prefix = Some(character);
        }
    }

    let entry = &desc[state.desc_index.rem_euclid(len) as usize];
    let text = match prefix {
        Some(c) => format!("{c} {entry}"),
        None => entry.clone(),
    };
    Ok(Some(Description::Step(text)))
}
