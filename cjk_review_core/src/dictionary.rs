use crate::error::{ReviewError, Result};
use crate::locale::{ENGLISH, is_english};

/// 字符描述词典抽象：core 不关心词典来自文件/内存/宿主。
///
/// 约定：
/// - locale 没有数据：`Err(ReviewError::LocaleUnavailable)`
/// - locale 有数据但没有这个字符：`Ok(None)`
/// - 返回的列表是副本，调用方可以随意追加/删除，不影响词典本身
pub trait CharacterDictionary {
    /// 在 `locale` 的数据里查 `character` 的描述（不做英文兜底）。
    fn lookup(&self, locale: &str, character: &str) -> Result<Option<Vec<String>>>;

    /// 一次性查询（宿主默认的描述查询）：本 locale 查不到时退回英文。
    ///
    /// 只有英文数据也缺失时才返回错误；不修改任何状态，可重复调用。
    fn character_description(&self, locale: &str, character: &str) -> Result<Option<Vec<String>>> {
        let found = match self.lookup(locale, character) {
            Ok(found) => found,
            Err(ReviewError::LocaleUnavailable(_)) if !is_english(locale) => {
                return self.character_description(ENGLISH, character);
            }
            Err(e) => return Err(e),
        };
        match found {
            Some(desc) if !desc.is_empty() => Ok(Some(desc)),
            _ if !is_english(locale) => self.character_description(ENGLISH, character),
            _ => Ok(None),
        }
    }
}
