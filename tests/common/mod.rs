// Shared test helpers for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// The four header rows of a spreadsheet export, followed by data rows.
/// Columns: key, en_US, comment (skipped), fr_FR, de_DE.
pub const SAMPLE_TSV: &str = "\
Translation sheet\t\t\t\t
Do not edit the key column\t\t\t\t
\t\t\t\t
key\ten_US\tcomment\tfr_FR\tde_DE
web.hello\tHello\tgreeting\tBonjour\tHallo
android.hello\tHi\t\tSalut\tHi
web.bye\tGoodbye\t\tAu revoir\tTschüss
web.quote\t\"Say \"\"hi\"\"\"\t\tC:\\chemin\t\"Sag \"\"hi\"\"\"
";

/// The document `SAMPLE_TSV` renders to with `SAMPLE_LOCALE_ORDER` and prefix `web.`.
pub const SAMPLE_JSON: &str = r#"{"en_US":{"hello":"Hello","bye":"Goodbye","quote":"Say \"hi\""},"fr_FR":{"hello":"Bonjour","bye":"Au revoir","quote":"C:\\chemin"},"de_DE":{"hello":"Hallo","bye":"Tschüss","quote":"Sag \"hi\""}}"#;

pub const SAMPLE_LOCALE_ORDER: &str = r#"["en_US", "SKIP", "fr_FR", "de_DE"]"#;

/// Writes a configuration pointing at `destination` with the sample locale order.
pub fn write_config(temp_dir: &TempDir, destination: &PathBuf) -> PathBuf {
    write_config_with(temp_dir, destination, SAMPLE_LOCALE_ORDER)
}

pub fn write_config_with(temp_dir: &TempDir, destination: &PathBuf, locale_order: &str) -> PathBuf {
    let config_path = temp_dir.path().join("Translations.toml");
    let content = format!(
        r#"
language = "en"
source_url = "http://127.0.0.1:9/unused"
destination = {destination:?}
key_prefix = "web."
header_rows = 4
locale_order = {locale_order}
"#,
        destination = destination.display().to_string(),
    );
    fs::write(&config_path, content).expect("Failed to write config");
    config_path
}

pub fn write_input(temp_dir: &TempDir, contents: &str) -> PathBuf {
    let input_path = temp_dir.path().join("export.tsv");
    fs::write(&input_path, contents).expect("Failed to write input");
    input_path
}

/// Serves exactly one HTTP response on a local port and returns its URL.
pub async fn serve_once(status_line: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Listener has no address");

    tokio::spawn(async move {
        let Ok((mut socket, _)) = listener.accept().await else {
            return;
        };

        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            match socket.read(&mut buf).await {
                Ok(0) | Err(_) => break,
                Ok(n) => request.extend_from_slice(&buf[..n]),
            }
        }

        let response = format!(
            "HTTP/1.1 {status_line}\r\nContent-Type: text/tab-separated-values\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        let _ = socket.write_all(response.as_bytes()).await;
        let _ = socket.shutdown().await;
    });

    format!("http://{addr}/export?format=tsv")
}
