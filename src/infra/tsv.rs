//! # TSV Decoding Module / TSV 解码模块
//!
//! Turns the text of a spreadsheet export into rows of cells. Quoted cells may
//! contain tabs and line breaks; rows may have differing widths. A blank line is
//! a row with no cells, so header counting sees every physical record.
//!
//! 将表格导出的文本转换为单元格行。带引号的单元格可以包含制表符和换行；各行宽度可以不同。
//! 空行会作为没有单元格的行保留，表头计数因此与实际记录一致。

use crate::core::error::Result;
use crate::core::table::Row;

/// Strips a leading UTF-8 byte order mark, if present.
pub fn strip_bom(text: &str) -> &str {
    text.strip_prefix('\u{feff}').unwrap_or(text)
}

/// Decodes tab-separated text into rows. Header rows are kept; dropping them is
/// the table builder's job.
///
/// The `csv` reader skips blank lines, so the bytes between two records are
/// inspected and one empty row is emitted per blank line found there.
///
/// 将制表符分隔的文本解码为行。表头行会被保留，由翻译表构建器负责丢弃。
/// `csv` 读取器会跳过空行，因此会检查两条记录之间的字节，每个空行补一个空行。
pub fn parse_rows(text: &str) -> Result<Vec<Row>> {
    let body = strip_bom(text).as_bytes();
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .from_reader(body);

    let mut rows = Vec::new();
    let mut record = csv::StringRecord::new();
    let mut consumed = 0;
    let mut previous_end: Option<usize> = None;

    loop {
        let more = reader.read_record(&mut record)?;
        let end = usize::try_from(reader.position().byte())
            .unwrap_or(body.len())
            .clamp(consumed, body.len());
        let span = &body[consumed..end];

        let start = if more {
            consumed + leading_break_len(span)
        } else {
            body.len()
        };
        let breaks = count_line_breaks(&body[previous_end.unwrap_or(0)..start]);
        // The first break after a record terminates it; any further break is a blank line.
        let blank_lines = match previous_end {
            Some(_) => breaks.saturating_sub(1),
            None => breaks,
        };
        rows.extend(std::iter::repeat_with(Row::new).take(blank_lines));

        if !more {
            break;
        }
        rows.push(record.iter().map(str::to_string).collect());
        previous_end = Some(end - trailing_break_len(span));
        consumed = end;
    }
    Ok(rows)
}

fn is_line_break(byte: &u8) -> bool {
    matches!(byte, b'\r' | b'\n')
}

fn leading_break_len(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| is_line_break(b)).count()
}

fn trailing_break_len(bytes: &[u8]) -> usize {
    bytes.iter().rev().take_while(|b| is_line_break(b)).count()
}

/// Counts `\n`, `\r` and `\r\n` line breaks, the latter as one.
fn count_line_breaks(bytes: &[u8]) -> usize {
    let mut count = 0;
    let mut iter = bytes.iter().peekable();
    while let Some(&byte) = iter.next() {
        match byte {
            b'\n' => count += 1,
            b'\r' => {
                count += 1;
                iter.next_if_eq(&&b'\n');
            }
            _ => {}
        }
    }
    count
}
