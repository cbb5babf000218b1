//! # Table Module Unit Tests / Table 模块单元测试
//!
//! Tests for prefix filtering, locale column resolution and JSON serialization
//! of the translation table.
//!
//! 测试前缀过滤、语言列解析以及翻译表的 JSON 序列化。

use sheet_translations::core::error::ExportError;
use sheet_translations::core::locale::LocaleOrder;
use sheet_translations::table::{build_from_rows, filter_rows, Row, TranslationTable};

fn row(cells: &[&str]) -> Row {
    cells.iter().map(|c| c.to_string()).collect()
}

fn headers() -> Vec<Row> {
    vec![row(&["title"]), row(&["note"]), row(&[]), row(&["key", "en", "x", "fr"])]
}

fn with_headers(data: Vec<Row>) -> Vec<Row> {
    let mut rows = headers();
    rows.extend(data);
    rows
}

#[cfg(test)]
mod filter_tests {
    use super::*;

    #[test]
    fn test_header_rows_are_dropped_even_when_they_match() {
        let rows = vec![
            row(&["web.header", "H"]),
            row(&["web.a", "A"]),
        ];
        let outcome = filter_rows(rows, 1, "web.");
        assert_eq!(outcome.data_rows, 1);
        assert_eq!(outcome.entries.len(), 1);
        assert_eq!(outcome.entries[0].key, "a");
    }

    #[test]
    fn test_prefix_is_stripped_once_and_row_kept_whole() {
        let rows = with_headers(vec![row(&["web.web.nested", "N", "-", "n"])]);
        let outcome = filter_rows(rows, 4, "web.");
        assert_eq!(outcome.entries[0].key, "web.nested");
        assert_eq!(outcome.entries[0].row, row(&["web.web.nested", "N", "-", "n"]));
    }

    #[test]
    fn test_non_matching_rows_never_appear() {
        let rows = with_headers(vec![
            row(&["android.x", "Y", "-", "Z"]),
            row(&["WEB.upper", "U", "-", "u"]),
            row(&[" web.space", "S", "-", "s"]),
            row(&["web.ok", "O", "-", "o"]),
        ]);
        let order = LocaleOrder::parse("en_US SKIP fr_FR");
        let (table, report) = build_from_rows(rows, &order, 4, "web.").unwrap();

        assert_eq!(report.data_rows, 4);
        assert_eq!(report.matched, 1);
        for locale in table.locales() {
            let keys: Vec<_> = locale.keys().collect();
            assert_eq!(keys, ["ok"]);
        }
    }

    #[test]
    fn test_fewer_rows_than_headers() {
        let outcome = filter_rows(vec![row(&["web.a", "A"])], 4, "web.");
        assert_eq!(outcome.data_rows, 0);
        assert!(outcome.entries.is_empty());
    }

    #[test]
    fn test_empty_prefix_matches_every_row() {
        let outcome = filter_rows(vec![row(&["a", "1"]), row(&["b", "2"])], 0, "");
        let keys: Vec<_> = outcome.entries.iter().map(|e| e.key.as_str()).collect();
        assert_eq!(keys, ["a", "b"]);
    }
}

#[cfg(test)]
mod build_tests {
    use super::*;

    #[test]
    fn test_skip_slot_consumes_a_column() {
        let rows = with_headers(vec![
            row(&["web.hello", "Hello", "(skipped)", "Bonjour"]),
            row(&["other.x", "Y", "-", "Z"]),
        ]);
        let order = LocaleOrder::parse("en_US SKIP fr_FR");
        let (table, _) = build_from_rows(rows, &order, 4, "web.").unwrap();

        assert_eq!(table.get("en_US", "hello"), Some("Hello"));
        assert_eq!(table.get("fr_FR", "hello"), Some("Bonjour"));
        assert_eq!(table.locale("SKIP"), None);
        assert_eq!(
            table.to_json().unwrap(),
            r#"{"en_US":{"hello":"Hello"},"fr_FR":{"hello":"Bonjour"}}"#
        );
    }

    #[test]
    fn test_row_without_skipped_column_is_a_data_shape_error() {
        let rows = with_headers(vec![
            row(&["web.hello", "Hello", "Bonjour"]),
            row(&["other.x", "Y", "Z"]),
        ]);
        let order = LocaleOrder::parse("en_US SKIP fr_FR");
        let err = build_from_rows(rows, &order, 4, "web.").unwrap_err();

        match err {
            ExportError::DataShape { key, locale, column, width } => {
                assert_eq!(key, "hello");
                assert_eq!(locale, "fr_FR");
                assert_eq!(column, 3);
                assert_eq!(width, 3);
            }
            other => panic!("expected DataShape, got {other:?}"),
        }
    }

    #[test]
    fn test_short_non_matching_rows_are_not_checked() {
        let rows = with_headers(vec![row(&["web.a", "A", "-", "a"]), row(&["misc"])]);
        let order = LocaleOrder::parse("en_US SKIP fr_FR");
        assert!(build_from_rows(rows, &order, 4, "web.").is_ok());
    }

    #[test]
    fn test_value_matches_cell_at_locale_position() {
        let entries_rows = vec![
            row(&["web.a", "c1", "c2", "c3", "c4", "c5"]),
            row(&["web.b", "d1", "d2", "d3", "d4", "d5"]),
        ];
        let order = LocaleOrder::parse("l1 SKIP l3 SKIP l5");
        let outcome = filter_rows(entries_rows.clone(), 0, "web.");
        let table = TranslationTable::build(&outcome.entries, &order).unwrap();

        for (position, slot) in order.slots().iter().enumerate() {
            let Some(locale) = slot.locale() else { continue };
            for source in &entries_rows {
                let key = source[0].strip_prefix("web.").unwrap();
                assert_eq!(table.get(locale, key), Some(source[position + 1].as_str()));
            }
        }
    }

    #[test]
    fn test_every_locale_has_the_same_keys_in_filtered_order() {
        let rows = with_headers(vec![
            row(&["web.z", "1", "-", "2"]),
            row(&["web.a", "3", "-", "4"]),
            row(&["web.m", "5", "-", "6"]),
        ]);
        let order = LocaleOrder::parse("en_US SKIP fr_FR");
        let (table, _) = build_from_rows(rows, &order, 4, "web.").unwrap();

        let key_lists: Vec<Vec<&str>> = table.locales().map(|t| t.keys().collect()).collect();
        assert_eq!(key_lists.len(), 2);
        for keys in key_lists {
            assert_eq!(keys, ["z", "a", "m"]);
        }
    }

    #[test]
    fn test_empty_cells_are_emitted_as_empty_strings() {
        let rows = vec![row(&["web.a", "", "-", "x"])];
        let order = LocaleOrder::parse("en_US SKIP fr_FR");
        let (table, _) = build_from_rows(rows, &order, 0, "web.").unwrap();
        assert_eq!(table.get("en_US", "a"), Some(""));
    }
}

#[cfg(test)]
mod serialize_tests {
    use super::*;

    #[test]
    fn test_no_matching_rows_gives_empty_objects() {
        let rows = with_headers(vec![row(&["other.x", "Y", "-", "Z"])]);
        let order = LocaleOrder::parse("en_US SKIP fr_FR");
        let (table, report) = build_from_rows(rows, &order, 4, "web.").unwrap();
        assert_eq!(report.matched, 0);
        assert_eq!(table.to_json().unwrap(), r#"{"en_US":{},"fr_FR":{}}"#);
    }

    #[test]
    fn test_only_skip_tokens_gives_empty_object() {
        let rows = with_headers(vec![row(&["web.a", "A"])]);
        let order = LocaleOrder::parse("SKIP SKIP");
        let (table, _) = build_from_rows(rows, &order, 4, "web.").unwrap();
        assert!(table.is_empty());
        assert_eq!(table.to_json().unwrap(), "{}");
    }

    #[test]
    fn test_cells_are_json_escaped() {
        let rows = vec![row(&["web.k", "quote \" back \\ tab \t nl \n"])];
        let order = LocaleOrder::parse("en");
        let (table, _) = build_from_rows(rows, &order, 0, "web.").unwrap();
        let json = table.to_json().unwrap();
        assert_eq!(json, r#"{"en":{"k":"quote \" back \\ tab \t nl \n"}}"#);

        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["en"]["k"], "quote \" back \\ tab \t nl \n");
    }

    #[test]
    fn test_locale_order_is_preserved_not_sorted() {
        let rows = vec![row(&["web.k", "z", "a"])];
        let order = LocaleOrder::parse("zh_CN ar");
        let (table, _) = build_from_rows(rows, &order, 0, "web.").unwrap();
        assert_eq!(table.to_json().unwrap(), r#"{"zh_CN":{"k":"z"},"ar":{"k":"a"}}"#);
    }

    #[test]
    fn test_output_is_deterministic() {
        let make_rows = || {
            with_headers(vec![
                row(&["web.b", "B", "-", "b"]),
                row(&["web.a", "A", "-", "a"]),
                row(&["web.b", "B2", "-", "b2"]),
            ])
        };
        let order = LocaleOrder::parse("en_US SKIP fr_FR");
        let first = build_from_rows(make_rows(), &order, 4, "web.").unwrap().0.to_json().unwrap();
        let second = build_from_rows(make_rows(), &order, 4, "web.").unwrap().0.to_json().unwrap();
        assert_eq!(first, second);
        assert_eq!(first, r#"{"en_US":{"b":"B2","a":"A"},"fr_FR":{"b":"b2","a":"a"}}"#);
    }

    #[test]
    fn test_pretty_output_parses_to_the_same_value() {
        let rows = vec![row(&["web.k", "v"])];
        let order = LocaleOrder::parse("en");
        let (table, _) = build_from_rows(rows, &order, 0, "web.").unwrap();
        let compact: serde_json::Value = serde_json::from_str(&table.to_json().unwrap()).unwrap();
        let pretty: serde_json::Value =
            serde_json::from_str(&table.to_json_pretty().unwrap()).unwrap();
        assert_eq!(compact, pretty);
        assert!(table.to_json_pretty().unwrap().contains('\n'));
    }
}
