//! Stream loop test - a request script through `serve_lines`

use serde_json::Value;
use tokio::io::BufReader;

use flashplay::adapter::{serve_lines, Adapter, AdapterConfig, ServeStats};

#[tokio::test]
async fn test_serve_script() {
    let script = [
        r#"{"type":"generate","seq":1,"gameType":"association","terms":[{"term":"a","definition":"x"},{"term":"b","definition":"y"}]}"#,
        "",
        r#"{"type":"score","seq":2,"gameType":"association","gameData":{"totalTerms":2,"correctAssociations":2,"timeInSeconds":240}}"#,
        "not json",
        r#"{"type":"generate","seq":4,"gameType":"memory","terms":[]}"#,
    ]
    .join("\n");

    let mut adapter = Adapter::new(AdapterConfig {
        seed: Some(1),
        ..AdapterConfig::default()
    });
    let mut out: Vec<u8> = Vec::new();
    let stats = serve_lines(BufReader::new(script.as_bytes()), &mut out, &mut adapter)
        .await
        .unwrap();
    assert_eq!(
        stats,
        ServeStats {
            requests: 4,
            errors: 2
        }
    );

    let text = String::from_utf8(out).unwrap();
    let replies: Vec<Value> = text
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    let types: Vec<&str> = replies.iter().map(|v| v["type"].as_str().unwrap()).collect();
    assert_eq!(types, vec!["game", "score", "error", "error"]);

    assert_eq!(replies[0]["gameType"], "association");
    assert_eq!(replies[1]["score"], 600);
    assert_eq!(replies[2]["code"], "invalid_request");
    assert_eq!(replies[3]["seq"], 4);
    assert_eq!(replies[3]["code"], "validation_error");
}

#[tokio::test]
async fn test_serve_empty_input() {
    let mut adapter = Adapter::new(AdapterConfig::default());
    let mut out: Vec<u8> = Vec::new();
    let stats = serve_lines(BufReader::new(&b""[..]), &mut out, &mut adapter)
        .await
        .unwrap();
    assert_eq!(stats, ServeStats::default());
    assert!(out.is_empty());
}
