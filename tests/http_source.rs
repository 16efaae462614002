//! HTTP acquisition against a local stub server.

#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use lirik_sentimen::acquisition::http::CatalogEntry;
use lirik_sentimen::acquisition::{acquire, AcquisitionQuery, HttpSource};

fn entry(title: &str, artist: &str) -> CatalogEntry {
    CatalogEntry { title: title.into(), artist: artist.into() }
}

/// Serve `{"lyrics": ...}` for known paths and 404 for everything else.
async fn spawn_stub() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        loop {
            let Ok((mut stream, _)) = listener.accept().await else { break };
            tokio::spawn(async move {
                let mut buf = Vec::new();
                let mut chunk = [0u8; 1024];
                while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
                    match stream.read(&mut chunk).await {
                        Ok(0) | Err(_) => return,
                        Ok(n) => buf.extend_from_slice(&chunk[..n]),
                    }
                }
                let request = String::from_utf8_lossy(&buf);
                let path = request.split_whitespace().nth(1).unwrap_or_default().to_string();

                let (status, body) = match path.as_str() {
                    "/v1/Senja%20Kala/Pagi%20Cerah" => {
                        ("200 OK", r#"{"lyrics": "So happy, the sun is shining"}"#)
                    }
                    "/v1/Rumah%20Kaca/Hujan" => ("200 OK", r#"{"lyrics": "tears and pain"}"#),
                    "/v1/Rumah%20Kaca/Rusak" => ("200 OK", "not json"),
                    _ => ("404 Not Found", r#"{"error": "No lyrics found"}"#),
                };
                let response = format!(
                    "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                    body.len()
                );
                let _ = stream.write_all(response.as_bytes()).await;
                let _ = stream.shutdown().await;
            });
        }
    });

    format!("http://{addr}/v1")
}

#[tokio::test]
async fn failed_items_are_skipped_and_the_rest_kept() {
    let base = spawn_stub().await;
    let catalog = vec![
        entry("Pagi Cerah", "Senja Kala"),
        entry("Hilang", "Senja Kala"),
        entry("Rusak", "Rumah Kaca"),
        entry("Hujan", "Rumah Kaca"),
    ];
    let source = HttpSource::new(&base, catalog).unwrap();

    let records = acquire(&source, &AcquisitionQuery::all(10)).await.unwrap();
    let titles: Vec<_> = records.iter().map(|r| r.title()).collect();
    assert_eq!(titles, vec!["Pagi Cerah", "Hujan"]);
    assert_eq!(records[0].lyrics(), "So happy, the sun is shining");
}

#[tokio::test]
async fn cap_counts_successful_items() {
    let base = spawn_stub().await;
    let catalog = vec![
        entry("Hilang", "Senja Kala"),
        entry("Pagi Cerah", "Senja Kala"),
        entry("Hujan", "Rumah Kaca"),
    ];
    let source = HttpSource::new(&base, catalog).unwrap();

    let records = acquire(&source, &AcquisitionQuery::all(1)).await.unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].title(), "Pagi Cerah");
}

#[tokio::test]
async fn artist_filter_limits_requests() {
    let base = spawn_stub().await;
    let catalog = vec![entry("Pagi Cerah", "Senja Kala"), entry("Hujan", "Rumah Kaca")];
    let source = HttpSource::new(&base, catalog).unwrap();

    let records = acquire(&source, &AcquisitionQuery::artist("rumah kaca", 10)).await.unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].artist(), "Rumah Kaca");
}
