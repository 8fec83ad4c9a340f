use kiosk::config::StaticFilesConfig;
use kiosk::server::static_files::{self, MAX_FILE_SIZE, Resolution};

fn config_for(dir: &tempfile::TempDir) -> StaticFilesConfig {
    StaticFilesConfig {
        root: dir.path().to_str().unwrap().to_string(),
    }
}

#[tokio::test]
async fn test_resolve_blocks_traversal_to_an_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().join("public");
    std::fs::create_dir(&root).unwrap();
    std::fs::write(dir.path().join("secret.txt"), "classified").unwrap();
    let cfg = StaticFilesConfig {
        root: root.to_str().unwrap().to_string(),
    };

    // The target exists one level above the root; the guard fires anyway.
    let outcome = static_files::resolve(&cfg, "/../secret.txt").await;

    assert!(matches!(outcome, Resolution::Blocked));
}

#[tokio::test]
async fn test_resolve_blocks_traversal_with_no_root_at_all() {
    let cfg = StaticFilesConfig {
        root: "/definitely/not/a/root".to_string(),
    };

    let outcome = static_files::resolve(&cfg, "/../../etc/passwd").await;

    assert!(matches!(outcome, Resolution::Blocked));
}

#[tokio::test]
async fn test_resolve_blocks_dotdot_anywhere_in_the_path() {
    // Substring check, not segment-wise: a filename containing ".." is
    // refused even though it never escapes the root.
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("notes..txt"), "fine really").unwrap();
    let cfg = config_for(&dir);

    let outcome = static_files::resolve(&cfg, "/notes..txt").await;

    assert!(matches!(outcome, Resolution::Blocked));
}

#[tokio::test]
async fn test_resolve_serves_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("hello.txt"), "hello world").unwrap();
    let cfg = config_for(&dir);

    match static_files::resolve(&cfg, "/hello.txt").await {
        Resolution::Found { file, path } => {
            assert!(path.ends_with("/hello.txt"));
            let contents = static_files::read_contents(file).await.unwrap();
            assert_eq!(contents, b"hello world");
        }
        other => panic!("expected Found, got {:?}", other),
    }
}

#[tokio::test]
async fn test_resolve_missing_file_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = config_for(&dir);

    let outcome = static_files::resolve(&cfg, "/missing.txt").await;

    assert!(matches!(outcome, Resolution::NotFound));
}

#[tokio::test]
async fn test_resolve_root_path_falls_back_to_index() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("index.html"), "<h1>home</h1>").unwrap();
    let cfg = config_for(&dir);

    match static_files::resolve(&cfg, "/").await {
        Resolution::Found { path, .. } => assert!(path.ends_with("/index.html")),
        other => panic!("expected Found, got {:?}", other),
    }
}

#[tokio::test]
async fn test_resolve_directory_with_index() {
    let dir = tempfile::tempdir().unwrap();
    let docs = dir.path().join("docs");
    std::fs::create_dir(&docs).unwrap();
    std::fs::write(docs.join("index.html"), "docs home").unwrap();
    let cfg = config_for(&dir);

    // Without and with the trailing slash.
    match static_files::resolve(&cfg, "/docs").await {
        Resolution::Found { path, .. } => assert!(path.ends_with("/docs/index.html")),
        other => panic!("expected Found, got {:?}", other),
    }
    match static_files::resolve(&cfg, "/docs/").await {
        Resolution::Found { path, .. } => assert!(path.ends_with("/docs/index.html")),
        other => panic!("expected Found, got {:?}", other),
    }
}

#[tokio::test]
async fn test_resolve_directory_without_index_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir(dir.path().join("docs")).unwrap();
    let cfg = config_for(&dir);

    let outcome = static_files::resolve(&cfg, "/docs").await;

    assert!(matches!(outcome, Resolution::NotFound));
}

#[tokio::test]
async fn test_resolve_retries_exactly_once() {
    // index.html under /d is itself a directory holding a real index.html.
    // The single fallback lands on the directory and stops; a second
    // fallback would have found the nested file.
    let dir = tempfile::tempdir().unwrap();
    let inner = dir.path().join("d").join("index.html");
    std::fs::create_dir_all(&inner).unwrap();
    std::fs::write(inner.join("index.html"), "too deep").unwrap();
    let cfg = config_for(&dir);

    let outcome = static_files::resolve(&cfg, "/d").await;

    assert!(matches!(outcome, Resolution::NotFound));
}

#[tokio::test]
async fn test_resolve_skips_index_append_on_overlong_paths() {
    // Three 200-char segments push the resolved path well past the length
    // bound, so the fallback never appends the index name even though the
    // index file is sitting right there.
    let dir = tempfile::tempdir().unwrap();
    let segment = "a".repeat(200);
    let request_path = format!("/{0}/{0}/{0}", segment);
    let deep = dir.path().join(&segment).join(&segment).join(&segment);
    std::fs::create_dir_all(&deep).unwrap();
    std::fs::write(deep.join("index.html"), "unreachable").unwrap();
    let cfg = config_for(&dir);

    let outcome = static_files::resolve(&cfg, &request_path).await;

    assert!(matches!(outcome, Resolution::NotFound));
}

#[tokio::test]
async fn test_read_contents_empty_file() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("empty"), "").unwrap();
    let cfg = config_for(&dir);

    let file = match static_files::resolve(&cfg, "/empty").await {
        Resolution::Found { file, .. } => file,
        other => panic!("expected Found, got {:?}", other),
    };
    let contents = static_files::read_contents(file).await.unwrap();

    assert!(contents.is_empty());
}

#[tokio::test]
async fn test_read_contents_truncates_large_files() {
    let dir = tempfile::tempdir().unwrap();
    let big = vec![0x42u8; MAX_FILE_SIZE + 4096];
    std::fs::write(dir.path().join("big.bin"), &big).unwrap();
    let cfg = config_for(&dir);

    let file = match static_files::resolve(&cfg, "/big.bin").await {
        Resolution::Found { file, .. } => file,
        other => panic!("expected Found, got {:?}", other),
    };
    let contents = static_files::read_contents(file).await.unwrap();

    assert_eq!(contents.len(), MAX_FILE_SIZE);
    assert!(contents.iter().all(|&b| b == 0x42));
}
