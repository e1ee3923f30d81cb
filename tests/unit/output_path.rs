//! Unit tests for filename building and directory handling

use std::path::PathBuf;
use switchtube_dl::output::{build_filename, channel_folder, create_video_file, should_skip};
use switchtube_dl::DownloadOptions;

#[test]
fn builds_a_plain_filename() {
    let opts = DownloadOptions::default();
    assert_eq!(
        build_filename("My Video", "video/mp4", "", &opts),
        PathBuf::from("My_Video.mp4")
    );
}

#[test]
fn extension_comes_from_the_media_type() {
    let opts = DownloadOptions::default();
    assert_eq!(
        build_filename("clip", "video/webm", "", &opts),
        PathBuf::from("clip.webm")
    );
}

#[test]
fn malformed_media_types_fall_back_to_mp4() {
    let opts = DownloadOptions::default();
    assert_eq!(
        build_filename("clip", "not-a-mime-type", "", &opts),
        PathBuf::from("clip.mp4")
    );
    assert_eq!(
        build_filename("clip", "a/b/c", "", &opts),
        PathBuf::from("clip.mp4")
    );
}

#[test]
fn episode_prefix_requires_flag_and_tag() {
    let mut opts = DownloadOptions {
        use_episode: true,
        ..Default::default()
    };

    assert_eq!(
        build_filename("OR Mapping", "video/mp4", "01", &opts),
        PathBuf::from("01_OR_Mapping.mp4")
    );

    // Empty episode tag: no prefix even with the flag set.
    assert_eq!(
        build_filename("OR Mapping", "video/mp4", "", &opts),
        PathBuf::from("OR_Mapping.mp4")
    );

    // Flag unset: tag is ignored.
    opts.use_episode = false;
    assert_eq!(
        build_filename("OR Mapping", "video/mp4", "01", &opts),
        PathBuf::from("OR_Mapping.mp4")
    );
}

#[test]
fn titles_are_sanitized() {
    let opts = DownloadOptions::default();
    assert_eq!(
        build_filename("What? A/B Test*", "video/mp4", "", &opts),
        PathBuf::from("What_A-B_Test.mp4")
    );
}

#[test]
fn filenames_join_the_output_directory() {
    let opts = DownloadOptions {
        output_dir: Some(PathBuf::from("downloads")),
        ..Default::default()
    };
    assert_eq!(
        build_filename("clip", "video/mp4", "", &opts),
        PathBuf::from("downloads/clip.mp4")
    );
}

#[test]
fn channel_folder_is_created_with_safe_name() {
    let dir = tempfile::tempdir().unwrap();
    let opts = DownloadOptions {
        output_dir: Some(dir.path().to_path_buf()),
        ..Default::default()
    };

    let folder = channel_folder("Algorithms/2024", &opts).unwrap();

    assert_eq!(folder, dir.path().join("Algorithms - 2024"));
    assert!(folder.is_dir());
}

#[test]
fn force_never_skips() {
    let dir = tempfile::tempdir().unwrap();
    let existing = dir.path().join("clip.mp4");
    std::fs::write(&existing, b"data").unwrap();

    let opts = DownloadOptions {
        force: true,
        ..Default::default()
    };
    assert!(!should_skip(&existing, &opts));
}

#[test]
fn skip_flag_skips_existing_files() {
    let dir = tempfile::tempdir().unwrap();
    let existing = dir.path().join("clip.mp4");
    std::fs::write(&existing, b"data").unwrap();

    let opts = DownloadOptions {
        skip: true,
        ..Default::default()
    };
    assert!(should_skip(&existing, &opts));
}

#[test]
fn missing_files_are_never_skipped() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.mp4");

    let opts = DownloadOptions {
        skip: true,
        ..Default::default()
    };
    assert!(!should_skip(&missing, &opts));
}

#[tokio::test]
async fn create_video_file_makes_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("channel").join("clip.mp4");

    let file = create_video_file(&nested).await.unwrap();
    drop(file);

    assert!(nested.is_file());
}
