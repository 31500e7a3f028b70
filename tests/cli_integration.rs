use assert_cmd::Command;
use predicates::prelude::*;

const DOC: &str = "# Title\n\n## Overview\n\nOld overview.\n\n### Details\n\nOld details.\n\n## Next\n\nOther.\n";

fn mdsplice(config_dir: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("mdsplice").unwrap();
    cmd.env("MDSPLICE_CONFIG_DIR", config_dir);
    cmd
}

#[test]
fn replace_prints_updated_document_to_stdout() {
    let temp_dir = tempfile::tempdir().unwrap();
    let doc_path = temp_dir.path().join("doc.md");
    std::fs::write(&doc_path, DOC).unwrap();

    mdsplice(temp_dir.path())
        .arg("replace")
        .arg(&doc_path)
        .arg("--heading")
        .arg("Overview")
        .arg("--with")
        .arg("New overview\n\n- Item")
        .assert()
        .success()
        .stdout(predicate::str::contains("## Overview\n\nNew overview"))
        .stdout(predicate::str::contains("## Next"))
        .stdout(predicate::str::contains("Old overview").not());

    // stdout mode must not touch the input file
    assert_eq!(std::fs::read_to_string(&doc_path).unwrap(), DOC);
}

#[test]
fn replace_in_place_rewrites_the_file() {
    let temp_dir = tempfile::tempdir().unwrap();
    let doc_path = temp_dir.path().join("doc.md");
    std::fs::write(&doc_path, DOC).unwrap();

    let repl_path = temp_dir.path().join("new.md");
    std::fs::write(&repl_path, "Fresh content.\n").unwrap();

    mdsplice(temp_dir.path())
        .arg("replace")
        .arg(&doc_path)
        .arg("--heading")
        .arg("Overview")
        .arg("--from")
        .arg(&repl_path)
        .arg("--in-place")
        .assert()
        .success()
        .stdout(predicate::str::contains("Replaced section"));

    let updated = std::fs::read_to_string(&doc_path).unwrap();
    assert!(updated.contains("## Overview\n\nFresh content."));
    assert!(!updated.contains("Old overview"));
    assert!(updated.contains("## Next"));
}

#[test]
fn replace_output_flag_writes_elsewhere() {
    let temp_dir = tempfile::tempdir().unwrap();
    let doc_path = temp_dir.path().join("doc.md");
    let out_path = temp_dir.path().join("out.md");
    std::fs::write(&doc_path, DOC).unwrap();

    mdsplice(temp_dir.path())
        .arg("replace")
        .arg(&doc_path)
        .arg("--heading")
        .arg("Next")
        .arg("--with")
        .arg("Changed.")
        .arg("-o")
        .arg(&out_path)
        .assert()
        .success();

    assert_eq!(std::fs::read_to_string(&doc_path).unwrap(), DOC);
    let out = std::fs::read_to_string(&out_path).unwrap();
    assert!(out.contains("## Next\n\nChanged."));
}

#[test]
fn replace_missing_heading_fails() {
    let temp_dir = tempfile::tempdir().unwrap();
    let doc_path = temp_dir.path().join("doc.md");
    std::fs::write(&doc_path, DOC).unwrap();

    mdsplice(temp_dir.path())
        .arg("replace")
        .arg(&doc_path)
        .arg("--heading")
        .arg("NoSuchHeading")
        .arg("--with")
        .arg("x")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Section heading not found: NoSuchHeading",
        ));

    assert_eq!(std::fs::read_to_string(&doc_path).unwrap(), DOC);
}

#[test]
fn split_reads_stdin_and_separates_chunks() {
    let temp_dir = tempfile::tempdir().unwrap();

    mdsplice(temp_dir.path())
        .arg("split")
        .arg("-")
        .arg("--chunk-bytes")
        .arg("10")
        .write_stdin("aaaaaaaa\n\nbbbbbbbb\n\ncccccccc")
        .assert()
        .success()
        .stdout(predicate::str::contains("aaaaaaaa"))
        .stdout(predicate::str::contains("--------8<--------"))
        .stdout(predicate::str::contains("cccccccc"));
}

#[test]
fn split_out_dir_writes_numbered_files_in_order() {
    let temp_dir = tempfile::tempdir().unwrap();
    let doc_path = temp_dir.path().join("big.md");
    std::fs::write(&doc_path, "first para\n\nsecond para\n\nthird para").unwrap();
    let out_dir = temp_dir.path().join("chunks");

    mdsplice(temp_dir.path())
        .arg("split")
        .arg(&doc_path)
        .arg("--chunk-bytes")
        .arg("11")
        .arg("--out-dir")
        .arg(&out_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("3 chunk(s)"));

    let first = std::fs::read_to_string(out_dir.join("big.0001.md")).unwrap();
    let second = std::fs::read_to_string(out_dir.join("big.0002.md")).unwrap();
    let third = std::fs::read_to_string(out_dir.join("big.0003.md")).unwrap();
    assert_eq!(first, "first para\n");
    assert_eq!(second, "second para\n");
    assert_eq!(third, "third para\n");
}

#[test]
fn limits_emits_json_with_default_budget() {
    let temp_dir = tempfile::tempdir().unwrap();

    let output = mdsplice(temp_dir.path())
        .arg("limits")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let parsed: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(parsed["defaultChunkBytes"], 30000);
    assert_eq!(parsed["effectiveChunkBytes"], 30000);
}

#[test]
fn configured_chunk_bytes_applies_until_overridden() {
    let temp_dir = tempfile::tempdir().unwrap();

    mdsplice(temp_dir.path())
        .arg("config")
        .arg("chunk-bytes")
        .arg("8")
        .assert()
        .success()
        .stdout(predicate::str::contains("chunk-bytes set to 8"));

    // Two paragraphs no longer fit into one chunk under the configured budget.
    mdsplice(temp_dir.path())
        .arg("split")
        .arg("-")
        .write_stdin("aaaa\n\nbbbb")
        .assert()
        .success()
        .stdout(predicate::str::contains("--------8<--------"));

    // A flag override restores single-chunk output.
    mdsplice(temp_dir.path())
        .arg("split")
        .arg("-")
        .arg("--chunk-bytes")
        .arg("100")
        .write_stdin("aaaa\n\nbbbb")
        .assert()
        .success()
        .stdout(predicate::str::contains("--------8<--------").not());
}

#[test]
fn config_show_reports_defaults() {
    let temp_dir = tempfile::tempdir().unwrap();

    mdsplice(temp_dir.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("chunk-bytes = 30000"));
}
