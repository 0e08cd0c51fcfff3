//! CA certificate cache behavior against a local HTTP fixture server.

use safariextz_bundler::packager::{Error, signer};
use sha2::{Digest, Sha256};

fn sha256_hex(bytes: &[u8]) -> String {
    format!("{:x}", Sha256::digest(bytes))
}

#[tokio::test]
async fn absent_certificate_is_fetched_and_sidecar_written() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/AppleWWDRCA.cer")
        .with_status(200)
        .with_body(b"der bytes")
        .create_async()
        .await;

    let dir = tempfile::tempdir().unwrap();
    let url = format!("{}/AppleWWDRCA.cer", server.url());

    let path = signer::provision(dir.path(), "AppleWWDRCA.cer", &url)
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(std::fs::read(&path).unwrap(), b"der bytes");

    let sidecar = std::fs::read_to_string(dir.path().join("AppleWWDRCA.cer.sha256")).unwrap();
    assert_eq!(sidecar, sha256_hex(b"der bytes"));
}

#[tokio::test]
async fn valid_cache_entry_is_not_refetched() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/cert.cer")
        .expect(0)
        .create_async()
        .await;

    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("cert.cer"), b"cached").unwrap();
    std::fs::write(dir.path().join("cert.cer.sha256"), sha256_hex(b"cached")).unwrap();

    let url = format!("{}/cert.cer", server.url());
    signer::provision(dir.path(), "cert.cer", &url).await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn corrupted_cache_entry_is_refetched() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/cert.cer")
        .with_status(200)
        .with_body(b"fresh")
        .create_async()
        .await;

    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("cert.cer"), b"tampered").unwrap();
    std::fs::write(dir.path().join("cert.cer.sha256"), sha256_hex(b"original")).unwrap();

    let url = format!("{}/cert.cer", server.url());
    let path = signer::provision(dir.path(), "cert.cer", &url).await.unwrap();

    mock.assert_async().await;
    assert_eq!(std::fs::read(&path).unwrap(), b"fresh");
    let sidecar = std::fs::read_to_string(dir.path().join("cert.cer.sha256")).unwrap();
    assert_eq!(sidecar, sha256_hex(b"fresh"));
}

#[tokio::test]
async fn http_failure_surfaces_download_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/cert.cer")
        .with_status(404)
        .create_async()
        .await;

    let dir = tempfile::tempdir().unwrap();
    let url = format!("{}/cert.cer", server.url());

    let err = signer::provision(dir.path(), "cert.cer", &url)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Download { .. }));
    assert!(!dir.path().join("cert.cer").exists());
}
