use std::{
    collections::BTreeMap,
    fs, io,
    path::{Path, PathBuf},
};

use cjk_review_core::{ReviewError, dictionary::CharacterDictionary, locale::language};
use thiserror::Error;
use tracing::debug;

/// 每个 locale 目录下的词典文件名。
pub const FILE_NAME: &str = "characterDescriptions.dic";

#[derive(Debug, Error)]
pub enum DictError {
    #[error("无法读取 {}：{source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("词典第 {line} 行缺少字符或描述")]
    Parse { line: usize },
}

pub type Result<T> = std::result::Result<T, DictError>;

/// 单个 locale 的字符描述表。
///
/// TSV 格式：
///
/// - `char<TAB>desc1[<TAB>desc2 …]`
/// - 空行与 `#` 开头的注释行忽略
/// - 同一字符出现多次时以最后一行为准
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocaleTable {
    map: BTreeMap<String, Vec<String>>,
}

impl LocaleTable {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let s = fs::read_to_string(path).map_err(|source| DictError::Io {
            path: path.to_owned(),
            source,
        })?;
        Self::from_tsv_str(&s)
    }

    pub fn from_tsv_str(s: &str) -> Result<Self> {
        let mut map = BTreeMap::new();
        for (idx, line) in s.lines().enumerate() {
            // 字符本身可能是全角空格，只去掉行尾
            let line = line.trim_end_matches(['\r', '\n']);
            if line.trim().is_empty() || line.starts_with('#') {
                continue;
            }
            let mut it = line.split('\t');
            let character = it.next().unwrap_or("");
            let descriptions: Vec<String> = it
                .map(str::trim)
                .filter(|d| !d.is_empty())
                .map(str::to_owned)
                .collect();
            if character.is_empty() || descriptions.is_empty() {
                return Err(DictError::Parse { line: idx + 1 });
            }
            map.insert(character.to_owned(), descriptions);
        }
        Ok(Self { map })
    }

    pub fn get(&self, character: &str) -> Option<&[String]> {
        self.map.get(character).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

/// 按 locale 组织的字符描述词典。
#[derive(Debug, Clone, Default)]
pub struct DescriptionDictionary {
    locales: BTreeMap<String, LocaleTable>,
}

impl DescriptionDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// 读取 `root/<locale>/characterDescriptions.dic`；没有词典文件的子目录跳过。
    pub fn from_dir(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref();
        let io_err = |source| DictError::Io {
            path: root.to_owned(),
            source,
        };
        let mut dict = Self::new();
        for entry in fs::read_dir(root).map_err(io_err)? {
            let entry = entry.map_err(io_err)?;
            let dir = entry.path();
            if !dir.is_dir() {
                continue;
            }
            let Some(locale) = entry.file_name().to_str().map(str::to_owned) else {
                debug!("跳过非 UTF-8 目录名：{}", dir.display());
                continue;
            };
            let file = dir.join(FILE_NAME);
            if !file.is_file() {
                debug!("{locale} 没有 {FILE_NAME}，跳过");
                continue;
            }
            let table = LocaleTable::from_path(&file)?;
            debug!("已加载 {locale}：{} 个字符", table.len());
            dict.insert_locale(locale, table);
        }
        Ok(dict)
    }

    pub fn insert_locale(&mut self, locale: impl Into<String>, table: LocaleTable) {
        self.locales.insert(locale.into(), table);
    }

    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.locales.keys().map(String::as_str)
    }

    /// 先找完整 locale，再找基础语言（`zh_TW` -> `zh`）。
    pub fn table(&self, locale: &str) -> Option<&LocaleTable> {
        self.locales
            .get(locale)
            .or_else(|| self.locales.get(language(locale)))
    }
}

impl CharacterDictionary for DescriptionDictionary {
    fn lookup(&self, locale: &str, character: &str) -> cjk_review_core::Result<Option<Vec<String>>> {
        let table = self
            .table(locale)
            .ok_or_else(|| ReviewError::LocaleUnavailable(locale.to_owned()))?;
        Ok(table.get(character).map(<[String]>::to_vec))
    }
}
