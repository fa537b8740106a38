// Integration testing can be done either by calling library functions directly or by invoking your CLI as a subprocess.
use flate2::read::GzDecoder;
use std::{fs, io::Read};

#[test]
fn compresses_default_tree() {
    let temp = tempfile::tempdir().unwrap();

    fs::create_dir_all(temp.path().join("data_src")).unwrap();
    fs::write(temp.path().join("data_src/index.html"), "<html></html>").unwrap();

    let mut cmd = assert_cmd::Command::cargo_bin("gzpack").unwrap();

    cmd.current_dir(temp.path());

    cmd.assert().success().stdout(predicates::str::contains(
        "Compressed: data_src/index.html → data/index.html.gz",
    ));

    let artifact = fs::File::open(temp.path().join("data/index.html.gz")).unwrap();
    let mut decoder = GzDecoder::new(artifact);
    let mut contents = String::new();
    decoder.read_to_string(&mut contents).unwrap();

    assert_eq!(contents, "<html></html>");
}

#[test]
fn missing_source_root_is_benign() {
    let temp = tempfile::tempdir().unwrap();

    let mut cmd = assert_cmd::Command::cargo_bin("gzpack").unwrap();

    cmd.current_dir(temp.path());

    cmd.assert().success().stdout(predicates::str::contains(
        "No 'data_src/' folder found, skipping compression.",
    ));

    assert!(!temp.path().join("data").exists());
}
