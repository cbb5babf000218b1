//! # Locale Order Module / 语言顺序模块
//!
//! Describes how spreadsheet columns map onto locale identifiers. Every slot of a
//! [`LocaleOrder`] occupies exactly one data column (column 0 is the key column),
//! including `SKIP` slots, which keep the alignment but emit nothing.
//!
//! 描述表格列如何映射到语言标识符。[`LocaleOrder`] 中的每个槽位恰好占用一个数据列
//! （第 0 列是键列），`SKIP` 槽位同样占位但不输出任何内容。

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The sentinel token marking a column that is present in the export but not emitted.
/// 标记导出中存在但不输出的列的哨兵值。
pub const SKIP_TOKEN: &str = "SKIP";

/// A single position in the locale order.
/// 语言顺序中的单个位置。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LocaleSlot {
    /// A locale whose column is emitted, e.g. `en_US`.
    Locale(String),
    /// A column that is consumed but not emitted.
    Skip,
}

impl LocaleSlot {
    /// Returns the locale identifier, or `None` for a skipped slot.
    pub fn locale(&self) -> Option<&str> {
        match self {
            LocaleSlot::Locale(id) => Some(id),
            LocaleSlot::Skip => None,
        }
    }

    pub fn is_skip(&self) -> bool {
        matches!(self, LocaleSlot::Skip)
    }
}

impl From<String> for LocaleSlot {
    fn from(token: String) -> Self {
        if token == SKIP_TOKEN {
            LocaleSlot::Skip
        } else {
            LocaleSlot::Locale(token)
        }
    }
}

impl From<&str> for LocaleSlot {
    fn from(token: &str) -> Self {
        LocaleSlot::from(token.to_string())
    }
}

impl From<LocaleSlot> for String {
    fn from(slot: LocaleSlot) -> Self {
        match slot {
            LocaleSlot::Locale(id) => id,
            LocaleSlot::Skip => SKIP_TOKEN.to_string(),
        }
    }
}

impl fmt::Display for LocaleSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocaleSlot::Locale(id) => f.write_str(id),
            LocaleSlot::Skip => f.write_str(SKIP_TOKEN),
        }
    }
}

/// A locale that will be emitted, together with the data column it reads from.
/// 将被输出的语言及其读取的数据列。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocaleColumn<'a> {
    pub locale: &'a str,
    /// Index into a row; always `>= 1` because column 0 holds the key.
    pub column: usize,
}

/// The ordered list of locale slots, positionally aligned with the export columns.
///
/// Deserializes either from a list of tokens (`["en_US", "SKIP", "ar"]`) or from a
/// single space-separated string (`"en_US SKIP ar"`).
///
/// 按位置与导出列对齐的语言槽位有序列表。
/// 可以从令牌列表或以空格分隔的单个字符串反序列化。
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "LocaleOrderRepr", into = "Vec<LocaleSlot>")]
pub struct LocaleOrder {
    slots: Vec<LocaleSlot>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LocaleOrderRepr {
    List(Vec<LocaleSlot>),
    Spaced(String),
}

impl From<LocaleOrderRepr> for LocaleOrder {
    fn from(repr: LocaleOrderRepr) -> Self {
        match repr {
            LocaleOrderRepr::List(slots) => LocaleOrder { slots },
            LocaleOrderRepr::Spaced(s) => LocaleOrder::parse(&s),
        }
    }
}

impl From<LocaleOrder> for Vec<LocaleSlot> {
    fn from(order: LocaleOrder) -> Self {
        order.slots
    }
}

impl<S: Into<LocaleSlot>> FromIterator<S> for LocaleOrder {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        LocaleOrder {
            slots: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl FromStr for LocaleOrder {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(LocaleOrder::parse(s))
    }
}

impl LocaleOrder {
    pub fn new(slots: Vec<LocaleSlot>) -> Self {
        Self { slots }
    }

    /// Parses a whitespace-separated token list such as `"en_US SKIP SKIP ar"`.
    pub fn parse(tokens: &str) -> Self {
        tokens.split_whitespace().collect()
    }

    pub fn slots(&self) -> &[LocaleSlot] {
        &self.slots
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn skipped_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_skip()).count()
    }

    /// Yields every emitted locale with its resolved column, in order.
    /// Skipped slots advance the column counter without yielding.
    ///
    /// 按顺序产出每个将被输出的语言及其对应列。跳过的槽位只推进列计数。
    pub fn columns(&self) -> impl Iterator<Item = LocaleColumn<'_>> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(position, slot)| {
                slot.locale().map(|locale| LocaleColumn {
                    locale,
                    column: position + 1,
                })
            })
    }

    /// The minimum row width needed to read every emitted locale.
    pub fn required_width(&self) -> usize {
        self.columns().last().map_or(1, |c| c.column + 1)
    }

    /// Returns the first locale identifier that appears more than once, if any.
    pub fn first_duplicate(&self) -> Option<&str> {
        let mut seen = std::collections::HashSet::new();
        self.columns()
            .map(|c| c.locale)
            .find(|locale| !seen.insert(*locale))
    }
}
