//! Tests for filename derivation and the artifact store.

use crate::artifacts::{ArtifactStore, image_filename};
use crate::error::DownloadError;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn assert_filename_shape(name: &str, prefix: &str) {
    assert!(
        name.starts_with(prefix),
        "'{name}' should start with '{prefix}'"
    );
    assert!(name.ends_with(".png"), "'{name}' should end with .png");
    let timestamp = &name[prefix.len()..name.len() - ".png".len()];
    assert!(
        timestamp
            .chars()
            .all(|c| c.is_ascii_digit() || c == '-'),
        "timestamp part '{timestamp}' should be digits and dashes"
    );
}

#[test]
fn filename_collapses_punctuation_and_case() {
    let name = image_filename("A Cute! Robot", 1, 42);
    assert_filename_shape(&name, "a_cute_robot_42_1_");
}

#[test]
fn filename_collapses_whitespace_runs() {
    let name = image_filename("a\t b \n  c", 0, 7);
    assert_filename_shape(&name, "a_b_c_7_0_");
}

#[test]
fn filename_truncates_slug_to_fifty_chars() {
    let prompt = "word ".repeat(30);
    let name = image_filename(&prompt, 2, 9);
    let slug = name.split("_9_2_").next().unwrap();
    assert_eq!(slug.len(), 50);
}

#[test]
fn filename_with_no_usable_chars_keeps_suffix() {
    let name = image_filename("!!!", 0, 1);
    assert_filename_shape(&name, "_1_0_");
}

#[test]
fn filename_handles_negative_seed() {
    let name = image_filename("dog", 3, -5);
    assert!(name.starts_with("dog_-5_3_"));
}

#[tokio::test]
async fn download_writes_remote_body_to_disk() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/files/cat.png"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"png-bytes".to_vec()))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let store = ArtifactStore::new(dir.path());
    let url = format!("{}/files/cat.png", server.uri());

    let saved = store.download(&url, "cat_42_0_x.png").await.unwrap();
    assert_eq!(saved, dir.path().join("cat_42_0_x.png"));
    assert_eq!(std::fs::read(&saved).unwrap(), b"png-bytes");
}

#[tokio::test]
async fn download_creates_output_directory() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![1, 2, 3]))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("out").join("images");
    let store = ArtifactStore::new(&nested);
    let url = format!("{}/a.png", server.uri());

    store.download(&url, "a.png").await.unwrap();
    store.download(&url, "b.png").await.unwrap();
    assert!(nested.join("a.png").exists());
    assert!(nested.join("b.png").exists());
}

#[tokio::test]
async fn download_non_success_status_leaves_no_file() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/gone.png"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let store = ArtifactStore::new(dir.path());
    let url = format!("{}/gone.png", server.uri());

    let err = store.download(&url, "gone.png").await.unwrap_err();
    assert!(matches!(err, DownloadError::Status { status_code: 404, .. }));
    assert!(!dir.path().join("gone.png").exists());
}

#[tokio::test]
async fn download_decodes_data_url_without_network() {
    let dir = tempfile::tempdir().unwrap();
    let store = ArtifactStore::new(dir.path());

    // "hello" base64-encoded
    let url = "data:image/png;base64,aGVsbG8=";
    let saved = store.download(url, "inline.png").await.unwrap();
    assert_eq!(std::fs::read(&saved).unwrap(), b"hello");
}

#[tokio::test]
async fn download_rejects_data_url_without_base64_payload() {
    let dir = tempfile::tempdir().unwrap();
    let store = ArtifactStore::new(dir.path());

    let err = store
        .download("data:image/png,plain-text", "bad.png")
        .await
        .unwrap_err();
    assert!(matches!(err, DownloadError::DataUrl(_)));
}

#[tokio::test]
async fn download_rejects_malformed_base64_payload() {
    let dir = tempfile::tempdir().unwrap();
    let store = ArtifactStore::new(dir.path());

    let err = store
        .download("data:image/png;base64,@@not-base64@@", "bad.png")
        .await
        .unwrap_err();
    assert!(matches!(err, DownloadError::DataUrl(_)));
}
