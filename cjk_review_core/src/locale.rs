//! locale 工具：`language[_COUNTRY]` 形式的语言标签。

/// 英文兜底 locale。
pub const ENGLISH: &str = "en";

/// 含“连字”（相邻字符组合发音）的语言，拼读时交给宿主按簇切分。
pub const LANGS_WITH_CONJUNCT_CHARS: &[&str] = &[
    "hi", "as", "bn", "gu", "kn", "ml", "mr", "or", "pa", "ta", "te", "ur",
];

/// 取语言部分：`zh_TW` -> `zh`。
pub fn language(locale: &str) -> &str {
    match locale.split_once('_') {
        Some((lang, _)) => lang,
        None => locale,
    }
}

pub fn is_english(locale: &str) -> bool {
    locale.starts_with(ENGLISH)
}

pub fn has_conjuncts(locale: &str) -> bool {
    LANGS_WITH_CONJUNCT_CHARS.contains(&language(locale))
}

/// 拼读时实际使用的 locale。
///
/// - 未指定 locale：用当前朗读语言
/// - 关闭了方言自动切换，且与当前朗读语言同属一种语言：仍用当前朗读语言（不切方言）
/// - 其余情况用指定的 locale
pub fn effective_locale<'a>(
    requested: Option<&'a str>,
    current: &'a str,
    auto_dialect_switching: bool,
) -> &'a str {
    match requested {
        Some(locale) if !locale.is_empty() => {
            if !auto_dialect_switching && language(locale) == language(current) {
                current
            } else {
                locale
            }
        }
        _ => current,
    }
}
