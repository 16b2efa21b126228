//! End-to-end tests for the FileService facade.

use async_trait::async_trait;
use parking_lot::Mutex;
use planroom_files::{
    encoding, FileOutcome, FileService, LocalFilesystemBridge, Payload, RecordingDownloadBridge,
    ShareBridge, StorageRequest,
};
use planroom_platform::{DirectoryResolver, LogicalDirectory, PlatformContext};
use std::io;
use std::path::Path;
use std::sync::Arc;
use tempfile::TempDir;

#[derive(Default)]
struct RecordingShareBridge {
    calls: Mutex<Vec<Vec<String>>>,
}

#[async_trait]
impl ShareBridge for RecordingShareBridge {
    async fn share(&self, paths: &[String], _title: Option<&str>) -> io::Result<()> {
        self.calls.lock().push(paths.to_vec());
        Ok(())
    }
}

fn native_service(base: &Path) -> (FileService, Arc<RecordingShareBridge>) {
    let share = Arc::new(RecordingShareBridge::default());
    let service = FileService::new(
        PlatformContext::native_shell(),
        DirectoryResolver::rooted_at(base),
        Arc::new(LocalFilesystemBridge::new()),
        Arc::new(RecordingDownloadBridge::new()),
    )
    .with_share_bridge(share.clone());
    (service, share)
}

fn web_service(downloads: Arc<RecordingDownloadBridge>) -> FileService {
    FileService::new(
        PlatformContext::browser(),
        DirectoryResolver::platform_default(),
        Arc::new(LocalFilesystemBridge::new()),
        downloads,
    )
    .with_share_bridge(Arc::new(RecordingShareBridge::default()))
}

#[tokio::test]
async fn native_save_then_read_round_trips() {
    let tmp = TempDir::new().unwrap();
    let (service, _) = native_service(tmp.path());

    let request = StorageRequest::new(
        "hello.txt",
        Payload::Text("hello world".into()),
        LogicalDirectory::Documents,
    )
    .unwrap();

    let saved = service.save_file(&request).await.ok().unwrap();
    let locator = saved.resource_locator.expect("native save returns a URI");
    assert!(!locator.is_empty());

    let text = service
        .read_file("hello.txt", LogicalDirectory::Documents)
        .await;
    assert_eq!(text, FileOutcome::Ok("hello world".to_string()));
}

#[tokio::test]
async fn native_binary_save_reads_back_as_base64() {
    let tmp = TempDir::new().unwrap();
    let (service, _) = native_service(tmp.path());

    let bytes: Vec<u8> = (0..=255).collect();
    let request = StorageRequest::new(
        "blueprint.bin",
        Payload::Binary(bytes.clone()),
        LogicalDirectory::Data,
    )
    .unwrap();
    assert!(service.save_file(&request).await.is_ok());

    let encoded = service
        .read_file("blueprint.bin", LogicalDirectory::Data)
        .await
        .ok()
        .unwrap();
    assert_eq!(encoding::base64_to_binary(&encoded).unwrap(), bytes);
}

#[tokio::test]
async fn native_list_and_delete() {
    let tmp = TempDir::new().unwrap();
    let (service, _) = native_service(tmp.path());

    for name in ["a.txt", "b.txt"] {
        let request =
            StorageRequest::new(name, Payload::Text("x".into()), LogicalDirectory::Cache).unwrap();
        assert!(service.save_file(&request).await.is_ok());
    }

    let names = service.list_files("", LogicalDirectory::Cache).await;
    assert_eq!(
        names,
        FileOutcome::Ok(vec!["a.txt".to_string(), "b.txt".to_string()])
    );

    assert!(service
        .delete_file("a.txt", LogicalDirectory::Cache)
        .await
        .is_ok());
    // Deleting the already-absent path still succeeds.
    assert!(service
        .delete_file("a.txt", LogicalDirectory::Cache)
        .await
        .is_ok());

    let names = service.list_files("", LogicalDirectory::Cache).await;
    assert_eq!(names, FileOutcome::Ok(vec!["b.txt".to_string()]));
}

#[tokio::test]
async fn listing_absent_directory_is_empty_not_an_error() {
    let tmp = TempDir::new().unwrap();
    let (service, _) = native_service(tmp.path());

    let names = service
        .list_files("never-created", LogicalDirectory::Documents)
        .await;
    assert_eq!(names, FileOutcome::Ok(Vec::new()));
}

#[tokio::test]
async fn native_share_goes_through_the_bridge() {
    let tmp = TempDir::new().unwrap();
    let (service, share) = native_service(tmp.path());

    let outcome = service
        .share_file("file:///tmp/report.pdf", Some("Weekly report"))
        .await;
    assert!(outcome.is_ok());
    assert_eq!(share.calls.lock().len(), 1);
}

#[tokio::test]
async fn web_save_triggers_download_without_locator() {
    let downloads = Arc::new(RecordingDownloadBridge::new());
    let service = web_service(downloads.clone());

    let request = StorageRequest::new(
        "photo.jpg",
        Payload::Binary(vec![0xd8; 12_345]),
        LogicalDirectory::Downloads,
    )
    .unwrap()
    .with_mime_type("image/jpeg");

    let saved = service.save_file(&request).await.ok().unwrap();
    assert_eq!(saved.resource_locator, None);

    // No leaked object URL.
    assert_eq!(downloads.created_urls(), 1);
    assert_eq!(downloads.revoked_urls(), 1);
    assert_eq!(downloads.downloads()[0].1.bytes.len(), 12_345);
}

#[tokio::test]
async fn web_reports_everything_else_unavailable() {
    let service = web_service(Arc::new(RecordingDownloadBridge::new()));

    assert!(service
        .read_file("hello.txt", LogicalDirectory::Documents)
        .await
        .is_unavailable());
    assert!(service
        .delete_file("hello.txt", LogicalDirectory::Documents)
        .await
        .is_unavailable());
    assert!(service
        .list_files("", LogicalDirectory::Documents)
        .await
        .is_unavailable());
    assert!(service
        .share_file("hello.txt", None)
        .await
        .is_unavailable());
}

#[tokio::test]
async fn web_save_failure_never_panics_and_releases_the_url() {
    let downloads = Arc::new(RecordingDownloadBridge::failing_clicks());
    let service = web_service(downloads.clone());

    let request = StorageRequest::new(
        "doomed.txt",
        Payload::Text("x".into()),
        LogicalDirectory::Documents,
    )
    .unwrap();

    let outcome = service.save_file(&request).await;
    assert!(!outcome.is_ok());
    assert!(!outcome.is_unavailable());
    assert_eq!(downloads.created_urls(), downloads.revoked_urls());
}

#[tokio::test]
async fn share_without_a_bridge_is_unavailable() {
    let tmp = TempDir::new().unwrap();
    let service = FileService::new(
        PlatformContext::native_shell(),
        DirectoryResolver::rooted_at(tmp.path()),
        Arc::new(LocalFilesystemBridge::new()),
        Arc::new(RecordingDownloadBridge::new()),
    );

    assert!(service.share_file("report.pdf", None).await.is_unavailable());
}

#[tokio::test]
async fn late_capability_registration_switches_dispatch() {
    use planroom_platform::{capabilities, ShellProbe};

    let tmp = TempDir::new().unwrap();
    let probe = Arc::new(ShellProbe::new());
    let downloads = Arc::new(RecordingDownloadBridge::new());
    let service = FileService::new(
        PlatformContext::new(probe.clone()),
        DirectoryResolver::rooted_at(tmp.path()),
        Arc::new(LocalFilesystemBridge::new()),
        downloads.clone(),
    );

    let request = StorageRequest::new(
        "late.txt",
        Payload::Text("x".into()),
        LogicalDirectory::Documents,
    )
    .unwrap();

    // Filesystem plugin not loaded yet: save falls back to a download.
    let saved = service.save_file(&request).await.ok().unwrap();
    assert_eq!(saved.resource_locator, None);
    assert_eq!(downloads.created_urls(), 1);

    probe.register(capabilities::FILESYSTEM);

    // Same service instance now writes natively.
    let saved = service.save_file(&request).await.ok().unwrap();
    assert!(saved.resource_locator.is_some());
    assert_eq!(downloads.created_urls(), 1);
}
