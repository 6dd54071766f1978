// SPDX-License-Identifier: MPL-2.0
//! Exercises the HTTP uploader against a throwaway local server.

use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use wavedrop::application::port::AudioUploader;
use wavedrop::domain::audio::TranscodedAudio;
use wavedrop::domain::error::UploadError;
use wavedrop::infrastructure::HttpUploader;

/// Accepts one connection, captures the full request and answers with
/// `status`. Returns the endpoint URL and a receiver for the raw request.
async fn one_shot_server(status: u16, reason: &'static str) -> (String, oneshot::Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    let (tx, rx) = oneshot::channel();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.expect("accept");
        let request = read_request(&mut socket).await;
        let response =
            format!("HTTP/1.1 {status} {reason}\r\ncontent-length: 0\r\nconnection: close\r\n\r\n");
        socket
            .write_all(response.as_bytes())
            .await
            .expect("write response");
        let _ = socket.shutdown().await;
        let _ = tx.send(request);
    });

    (format!("http://{addr}/decode"), rx)
}

/// Reads headers, then exactly `content-length` bytes of body.
async fn read_request(socket: &mut tokio::net::TcpStream) -> String {
    let mut data = Vec::new();
    let mut chunk = [0u8; 4096];

    let header_end = loop {
        let n = socket.read(&mut chunk).await.expect("read");
        assert!(n > 0, "client closed before sending headers");
        data.extend_from_slice(&chunk[..n]);
        if let Some(pos) = data.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos + 4;
        }
    };

    let headers = String::from_utf8_lossy(&data[..header_end]).to_ascii_lowercase();
    let content_length = headers
        .lines()
        .find_map(|line| line.strip_prefix("content-length:"))
        .and_then(|value| value.trim().parse::<usize>().ok())
        .expect("multipart body has a content-length");

    while data.len() < header_end + content_length {
        let n = socket.read(&mut chunk).await.expect("read body");
        assert!(n > 0, "client closed mid-body");
        data.extend_from_slice(&chunk[..n]);
    }

    String::from_utf8_lossy(&data).into_owned()
}

fn sample_audio() -> TranscodedAudio {
    TranscodedAudio {
        file_name: "my_song.mp3.wav".to_string(),
        media_type: "audio/wav",
        bytes: b"RIFF\0\0\0\0WAVEfake".to_vec(),
    }
}

#[tokio::test]
async fn posts_single_file_multipart() {
    let (endpoint, request) = one_shot_server(200, "OK").await;
    let uploader = HttpUploader::new(&endpoint, "audio", Duration::from_secs(10)).expect("uploader");

    let receipt = uploader.upload(sample_audio()).await.expect("upload succeeds");
    assert_eq!(receipt.status, 200);

    let request = request.await.expect("request captured");
    assert!(request.starts_with("POST /decode HTTP/1.1"), "{request}");
    assert!(request
        .to_ascii_lowercase()
        .contains("content-type: multipart/form-data; boundary="));
    assert!(request.contains(r#"name="audio"; filename="my_song.mp3.wav""#), "{request}");
    assert!(request.contains("Content-Type: audio/wav"), "{request}");
    assert!(request.contains("RIFF"));
}

#[tokio::test]
async fn custom_field_name_is_used() {
    let (endpoint, request) = one_shot_server(201, "Created").await;
    let uploader = HttpUploader::new(&endpoint, "file", Duration::from_secs(10)).expect("uploader");

    let receipt = uploader.upload(sample_audio()).await.expect("2xx is success");
    assert_eq!(receipt.status, 201);
    assert!(request
        .await
        .expect("request captured")
        .contains(r#"name="file"; filename="#));
}

#[tokio::test]
async fn server_error_is_rejected_with_status() {
    let (endpoint, _request) = one_shot_server(500, "Internal Server Error").await;
    let uploader = HttpUploader::new(&endpoint, "audio", Duration::from_secs(10)).expect("uploader");

    let err = uploader.upload(sample_audio()).await.unwrap_err();
    assert_eq!(err, UploadError::Rejected { status: 500 });
    assert!(err.to_string().contains("500"));
}

#[tokio::test]
async fn silent_server_times_out() {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let endpoint = format!("http://{}/decode", listener.local_addr().expect("addr"));
    tokio::spawn(async move {
        // Accept and hold the connection without answering.
        let (_socket, _) = listener.accept().await.expect("accept");
        tokio::time::sleep(Duration::from_secs(30)).await;
    });

    let uploader =
        HttpUploader::new(&endpoint, "audio", Duration::from_millis(200)).expect("uploader");
    let err = uploader.upload(sample_audio()).await.unwrap_err();
    assert_eq!(err, UploadError::Timeout);
}
