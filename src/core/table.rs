//! # Translation Table Module / 翻译表模块
//!
//! The pure part of an export: filter the decoded rows by key prefix, spread each
//! matched row across the locale columns, and serialize the result as nested JSON.
//!
//! 导出过程中的纯逻辑部分：按键前缀过滤解码后的行，将每个匹配行分散到各语言列，
//! 并将结果序列化为嵌套 JSON。
//!
//! ## Output Shape / 输出结构
//!
//! ```text
//! {"en_US":{"hello":"Hello"},"fr_FR":{"hello":"Bonjour"}}
//! ```
//!
//! Locales appear in locale-order order, keys in the order their rows were matched.
//! 语言按语言顺序排列，键按其所在行被匹配的顺序排列。

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::HashMap;

use crate::core::error::{ExportError, Result};
use crate::core::locale::LocaleOrder;

/// One decoded spreadsheet row. Column 0 is the key.
pub type Row = Vec<String>;

/// A row whose key matched the prefix; `key` has the prefix removed.
/// 键匹配前缀的行；`key` 已去除前缀。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilteredEntry {
    pub key: String,
    pub row: Row,
}

/// The result of prefix filtering.
/// 前缀过滤的结果。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterOutcome {
    /// Matched entries, in the order their first occurrence was seen.
    pub entries: Vec<FilteredEntry>,
    /// Rows examined after the header rows were dropped.
    pub data_rows: usize,
    /// Keys that appeared more than once; the later row's cells replaced the earlier.
    pub duplicates: Vec<String>,
}

/// Drops `header_rows` leading rows, then keeps every row whose first cell starts
/// with `key_prefix`.
///
/// Rows that do not match, including rows without any cell, are discarded without
/// error. A repeated key keeps the position of its first occurrence and takes the
/// cells of the last one, so keys stay unique in the emitted objects.
///
/// 丢弃前 `header_rows` 行，然后保留首个单元格以 `key_prefix` 开头的所有行。
/// 重复的键保留首次出现的位置，采用最后一次出现的单元格内容。
pub fn filter_rows<I>(rows: I, header_rows: usize, key_prefix: &str) -> FilterOutcome
where
    I: IntoIterator<Item = Row>,
{
    let mut outcome = FilterOutcome::default();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for row in rows.into_iter().skip(header_rows) {
        outcome.data_rows += 1;

        let Some(key) = row
            .first()
            .and_then(|raw| raw.strip_prefix(key_prefix))
            .map(str::to_string)
        else {
            continue;
        };

        match positions.get(&key) {
            Some(&index) => {
                outcome.entries[index].row = row;
                outcome.duplicates.push(key);
            }
            None => {
                positions.insert(key.clone(), outcome.entries.len());
                outcome.entries.push(FilteredEntry { key, row });
            }
        }
    }

    outcome
}

/// The key/value pairs emitted for one locale.
/// 单个语言输出的键值对。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleTable {
    locale: String,
    entries: Vec<(String, String)>,
}

impl LocaleTable {
    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl Serialize for LocaleTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Locale identifier -> translation key -> translated string, in a fixed order.
/// 语言标识符 -> 翻译键 -> 翻译文本，顺序固定。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationTable {
    locales: Vec<LocaleTable>,
}

impl TranslationTable {
    /// Builds one [`LocaleTable`] per emitted locale of `order`.
    ///
    /// A locale at 1-based position `i` reads cell `i` of every entry's row. A row
    /// too short for that column fails with [`ExportError::DataShape`]; cells are
    /// never padded.
    ///
    /// 为 `order` 中每个要输出的语言构建一个 [`LocaleTable`]。
    /// 位于第 `i` 位（从 1 开始）的语言读取每行的第 `i` 个单元格；行过短时返回
    /// [`ExportError::DataShape`]，不会填充缺失单元格。
    pub fn build(entries: &[FilteredEntry], order: &LocaleOrder) -> Result<Self> {
        if let Some(locale) = order.first_duplicate() {
            return Err(ExportError::InvalidConfig(format!(
                "locale '{locale}' appears more than once in the locale order"
            )));
        }

        let locales = order
            .columns()
            .map(|column| {
                let entries = entries
                    .iter()
                    .map(|entry| {
                        let value = entry.row.get(column.column).ok_or_else(|| {
                            ExportError::DataShape {
                                key: entry.key.clone(),
                                locale: column.locale.to_string(),
                                column: column.column,
                                width: entry.row.len(),
                            }
                        })?;
                        Ok((entry.key.clone(), value.clone()))
                    })
                    .collect::<Result<Vec<_>>>()?;

                Ok(LocaleTable {
                    locale: column.locale.to_string(),
                    entries,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { locales })
    }

    pub fn locales(&self) -> impl Iterator<Item = &LocaleTable> {
        self.locales.iter()
    }

    pub fn locale(&self, locale: &str) -> Option<&LocaleTable> {
        self.locales.iter().find(|t| t.locale == locale)
    }

    pub fn get(&self, locale: &str, key: &str) -> Option<&str> {
        self.locale(locale).and_then(|t| t.get(key))
    }

    pub fn locale_count(&self) -> usize {
        self.locales.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locales.is_empty()
    }

    /// Compact JSON, e.g. `{"en_US":{"hello":"Hello"}}`.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Serialize for TranslationTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.locales.len()))?;
        for table in &self.locales {
            map.serialize_entry(&table.locale, table)?;
        }
        map.end()
    }
}

/// Counts gathered while turning raw rows into a table, for reporting.
/// 从原始行构建翻译表时收集的统计信息，用于报告。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildReport {
    pub data_rows: usize,
    pub matched: usize,
    pub duplicates: Vec<String>,
    pub skipped_slots: usize,
}

/// Filters `rows` and builds the table in one step.
pub fn build_from_rows<I>(
    rows: I,
    order: &LocaleOrder,
    header_rows: usize,
    key_prefix: &str,
) -> Result<(TranslationTable, BuildReport)>
where
    I: IntoIterator<Item = Row>,
{
    let outcome = filter_rows(rows, header_rows, key_prefix);
    let table = TranslationTable::build(&outcome.entries, order)?;
    let report = BuildReport {
        data_rows: outcome.data_rows,
        matched: outcome.entries.len(),
        duplicates: outcome.duplicates,
        skipped_slots: order.skipped_count(),
    };
    Ok((table, report))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Row {
        cells.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn empty_row_is_not_a_match() {
        let outcome = filter_rows(vec![Vec::new(), row(&["web.a", "A"])], 0, "web.");
        assert_eq!(outcome.data_rows, 2);
        assert_eq!(outcome.entries.len(), 1);
        assert_eq!(outcome.entries[0].key, "a");
    }

    #[test]
    fn duplicate_key_keeps_first_position_and_last_cells() {
        let rows = vec![
            row(&["web.a", "first"]),
            row(&["web.b", "B"]),
            row(&["web.a", "second"]),
        ];
        let outcome = filter_rows(rows, 0, "web.");
        let keys: Vec<_> = outcome.entries.iter().map(|e| e.key.as_str()).collect();
        assert_eq!(keys, ["a", "b"]);
        assert_eq!(outcome.entries[0].row[1], "second");
        assert_eq!(outcome.duplicates, ["a"]);
    }

    #[test]
    fn duplicate_locale_is_rejected() {
        let order = LocaleOrder::parse("en_US SKIP en_US");
        let err = TranslationTable::build(&[], &order).unwrap_err();
        assert!(matches!(err, ExportError::InvalidConfig(_)));
    }
}
