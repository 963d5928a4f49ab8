use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use assert_cmd::Command;
use predicates::prelude::*;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

const FEED: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0">
  <channel>
    <title>Local</title>
    <link>http://127.0.0.1/</link>
    <description>Local feed</description>
    <item>
      <title>台積電大漲創高 - 鉅亨網</title>
      <link>http://127.0.0.1/news/1</link>
    </item>
    <item>
      <title>大盤跌停</title>
      <link>http://127.0.0.1/news/2</link>
    </item>
  </channel>
</rss>
"#;

static TEMP_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn write_temp_config(contents: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    let suffix = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);
    path.push(format!(
        "newspulse-cli-test-{nanos}-{}-{suffix}.toml",
        std::process::id()
    ));
    fs::write(&path, contents).expect("write temp config");
    path
}

fn newspulse() -> Command {
    let mut cmd = Command::cargo_bin("newspulse").expect("binary builds");
    for var in ["HTTP_PROXY", "http_proxy", "HTTPS_PROXY", "https_proxy", "ALL_PROXY", "all_proxy"] {
        cmd.env_remove(var);
    }
    cmd.env("NO_PROXY", "127.0.0.1");
    cmd
}

/// Serve `body` as an RSS document to every connection until the test ends.
async fn serve_feed(body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        loop {
            let Ok((mut socket, _)) = listener.accept().await else {
                return;
            };
            tokio::spawn(async move {
                let mut buf = [0u8; 2048];
                let _ = socket.read(&mut buf).await;
                let response = format!(
                    "HTTP/1.1 200 OK\r\nContent-Type: application/rss+xml; charset=utf-8\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                    body.len()
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            });
        }
    });
    format!("http://{addr}/feed.xml")
}

#[test]
fn score_traces_headline_as_json() {
    let output = newspulse()
        .args(["--json", "score", "台積電大漲創高 - 鉅亨網"])
        .output()
        .expect("run newspulse");
    assert!(output.status.success());

    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is one JSON document");
    assert_eq!(value["title"]["text"], "台積電大漲創高");
    assert_eq!(value["relevance"]["verdict"], "relevant");
    assert_eq!(value["breakdown"]["score"], "5.0");
    assert_eq!(value["category"], "instrument");
    assert_eq!(value["breakdown"]["hits"].as_array().map(Vec::len), Some(2));
}

#[test]
fn score_reports_blacklisted_headline() {
    newspulse()
        .args(["--json", "score", "台股券商大舉徵才"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"verdict\":\"blacklisted\""))
        .stdout(predicate::str::contains("\"category\":null"));
}

#[test]
fn score_human_output_shows_total() {
    newspulse()
        .args(["score", "大盤不跌停"])
        .assert()
        .success()
        .stdout(predicate::str::contains("大盤不跌停"))
        .stdout(predicate::str::contains("2.0"));
}

#[test]
fn check_config_accepts_valid_file() {
    let path = write_temp_config(
        "[[sources]]\nid = \"cnyes\"\nurl = \"https://news.cnyes.com/rss\"\n",
    );
    let assert = newspulse()
        .args(["check", "config", "--config"])
        .arg(&path)
        .assert();
    let _ = fs::remove_file(&path);

    assert
        .success()
        .stdout(predicate::str::contains("Configuration file is valid"));
}

#[test]
fn check_config_json_reports_counts() {
    let path = write_temp_config(concat!(
        "[[sources]]\nid = \"a\"\nurl = \"https://a.example.com/rss\"\n",
        "[[sources]]\nid = \"b\"\nurl = \"https://b.example.com/rss\"\nenabled = false\n",
        "[terms]\nwhitelist = [\"台股\", \"Fed\"]\n",
    ));
    let output = newspulse()
        .args(["--json", "check", "config", "-c"])
        .arg(&path)
        .output()
        .expect("run newspulse");
    let _ = fs::remove_file(&path);

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json");
    assert_eq!(value["valid"], true);
    assert_eq!(value["sources"]["total"], 2);
    assert_eq!(value["sources"]["enabled"], 1);
    assert_eq!(value["terms"]["whitelist"], 2);
}

#[test]
fn cli_returns_nonzero_on_config_error() {
    let path = write_temp_config(concat!(
        "[[sources]]\nid = \"a\"\nurl = \"https://a.example.com/rss\"\n",
        "[fetch]\ntimeout_ms = 0\n",
    ));
    let output = newspulse()
        .args(["check", "config", "--config"])
        .arg(&path)
        .output()
        .expect("run newspulse");
    let _ = fs::remove_file(&path);

    assert!(!output.status.success(), "Expected nonzero exit code");

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    let combined = format!("{stdout}{stderr}");
    assert!(
        combined.contains("invalid value for timeout_ms"),
        "Expected error message about invalid config.\nstdout: {stdout}\nstderr: {stderr}"
    );
}

#[test]
fn missing_config_file_fails() {
    newspulse()
        .args(["check", "config", "--config", "/no/such/newspulse.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read config file"));
}

#[test]
fn run_rejects_zero_max_age_override() {
    let path = write_temp_config("[[sources]]\nid = \"a\"\nurl = \"https://a.example.com/rss\"\n");
    let assert = newspulse()
        .args(["run", "--max-age-hours", "0", "--config"])
        .arg(&path)
        .assert();
    let _ = fs::remove_file(&path);

    assert
        .failure()
        .stderr(predicate::str::contains("max_age_hours"));
}

#[tokio::test(flavor = "multi_thread")]
async fn run_json_prints_a_single_report_document() {
    let url = serve_feed(FEED).await;
    let path = write_temp_config(&format!(
        "[[sources]]\nid = \"local\"\nurl = \"{url}\"\n\n[fetch]\ntimeout_ms = 5000\n"
    ));

    let config = path.clone();
    let output = tokio::task::spawn_blocking(move || {
        newspulse()
            .args(["--json", "run", "--config"])
            .arg(&config)
            .output()
    })
    .await
    .expect("join")
    .expect("run newspulse");
    let _ = fs::remove_file(&path);

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is one JSON document");
    assert_eq!(value["summary"]["raw_items"], 2);
    assert_eq!(value["summary"]["surviving"], 2);
    assert_eq!(value["net_score"], "2.5");
    assert_eq!(value["mood"], "bullish");
    assert_eq!(
        value["buckets"]["bullish_instrument"][0]["title"],
        "台積電大漲創高"
    );
    assert_eq!(value["buckets"]["bearish_market"][0]["score"], "-2.5");
}

#[tokio::test(flavor = "multi_thread")]
async fn run_human_output_shows_mood_and_buckets() {
    let url = serve_feed(FEED).await;
    let path = write_temp_config(&format!(
        "[[sources]]\nid = \"local\"\nurl = \"{url}\"\n"
    ));

    let config = path.clone();
    let output = tokio::task::spawn_blocking(move || {
        newspulse().args(["run", "--config"]).arg(&config).output()
    })
    .await
    .expect("join")
    .expect("run newspulse");
    let _ = fs::remove_file(&path);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("bullish"), "stdout: {stdout}");
    assert!(stdout.contains("+5.0"), "stdout: {stdout}");
    assert!(stdout.contains("大盤跌停"), "stdout: {stdout}");
}
