//! Command-line behaviour of the `pdfren` binary.

use std::fs;
use std::io::Read;
use std::path::Path;

use assert_cmd::Command;
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Object, Stream};
use predicates::prelude::*;
use zip::ZipArchive;

fn pdfren() -> Command {
    Command::cargo_bin("pdfren").unwrap()
}

/// Write a single-page PDF with one text object per line.
fn write_pdf(path: &Path, lines: &[&str]) {
    let mut doc = lopdf::Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
    });

    let mut operations = Vec::new();
    for (i, line) in lines.iter().enumerate() {
        operations.push(Operation::new("BT", vec![]));
        operations.push(Operation::new("Tf", vec!["F1".into(), 11.into()]));
        operations.push(Operation::new("Td", vec![50.into(), (780 - 16 * i as i64).into()]));
        operations.push(Operation::new("Tj", vec![Object::string_literal(*line)]));
        operations.push(Operation::new("ET", vec![]));
    }
    let content = Content { operations };
    let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "Contents" => content_id,
        "Resources" => dictionary! { "Font" => dictionary! { "F1" => font_id } },
        "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
    });
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => vec![page_id.into()],
            "Count" => 1,
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc.save(path).unwrap();
}

fn zip_names(path: &Path) -> Vec<String> {
    let mut archive = ZipArchive::new(fs::File::open(path).unwrap()).unwrap();
    (0..archive.len())
        .map(|i| archive.by_index(i).unwrap().name().to_string())
        .collect()
}

#[test]
fn test_help_lists_commands() {
    pdfren()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("rename"))
        .stdout(predicate::str::contains("inspect"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn test_rename_requires_inputs() {
    pdfren().arg("rename").assert().failure();
}

#[test]
fn test_dry_run_prints_mapping() {
    let dir = tempfile::tempdir().unwrap();
    write_pdf(&dir.path().join("scan.pdf"), &["Customer Number: ABC123"]);
    write_pdf(&dir.path().join("blank.pdf"), &["Thank you"]);

    pdfren()
        .arg("rename")
        .arg(dir.path().join("*.pdf").to_str().unwrap())
        .arg("--dry-run")
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("CTI-ABC123.pdf"))
        .stdout(predicate::str::contains("blank.pdf = blank.pdf"));

    assert!(!dir.path().join("renamed.zip").exists());
}

#[test]
fn test_rename_writes_archive() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("order.pdf");
    let output = dir.path().join("out.zip");
    write_pdf(&input, &["Order Number: SV004455", "Ship To:", "Acme Corp 123 Main St"]);
    let original = fs::read(&input).unwrap();

    pdfren()
        .arg("rename")
        .arg(&input)
        .args(["--policy", "sales-order", "--output"])
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Archive written"));

    assert_eq!(zip_names(&output), vec!["CTI Sales Order SV004455 Acme Corp.pdf"]);

    let mut archive = ZipArchive::new(fs::File::open(&output).unwrap()).unwrap();
    let mut content = Vec::new();
    archive.by_index(0).unwrap().read_to_end(&mut content).unwrap();
    assert_eq!(content, original);
}

#[test]
fn test_missing_input_is_skipped() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("invoice.pdf");
    let output = dir.path().join("renamed.zip");
    write_pdf(&input, &["Invoice Number: 9988"]);

    pdfren()
        .arg("rename")
        .arg(&input)
        .arg(dir.path().join("missing.pdf"))
        .args(["--policy", "invoice", "-o"])
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Skipped files"));

    assert_eq!(zip_names(&output), vec!["CTI-9988.pdf"]);
}

#[test]
fn test_output_dir_and_summary() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("a.pdf");
    let out_dir = dir.path().join("out");
    let summary = dir.path().join("summary.csv");
    write_pdf(&input, &["Customer Number: ABC123", "Invoice Number: 9988"]);

    pdfren()
        .arg("rename")
        .arg(&input)
        .args(["--policy", "customer-invoice", "--output-dir"])
        .arg(&out_dir)
        .arg("--summary")
        .arg(&summary)
        .assert()
        .success();

    assert!(out_dir.join("CTI-ABC123-9988.pdf").exists());

    let csv = fs::read_to_string(&summary).unwrap();
    let mut lines = csv.lines();
    assert_eq!(
        lines.next(),
        Some("original_filename,filename,source,customer_number,invoice_number,order_number,ship_to_name")
    );
    assert_eq!(lines.next(), Some("a.pdf,CTI-ABC123-9988.pdf,fields,ABC123,9988,,"));
}

#[test]
fn test_output_dir_never_overwrites() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("blank.pdf");
    write_pdf(&input, &["Thank you"]);
    let original = fs::read(&input).unwrap();
    fs::write(dir.path().join("CTI-9988.pdf"), b"existing").unwrap();

    pdfren()
        .arg("rename")
        .arg(&input)
        .args(["--policy", "invoice", "--output-dir"])
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Refusing to overwrite"))
        .stderr(predicate::str::contains("blank.pdf"));

    assert_eq!(fs::read(&input).unwrap(), original);
    assert_eq!(fs::read(dir.path().join("CTI-9988.pdf")).unwrap(), b"existing");
}

#[test]
fn test_inspect_json() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("scan.pdf");
    write_pdf(&input, &["Customer Number: ABC123"]);

    pdfren()
        .arg("inspect")
        .arg(&input)
        .args(["--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""customer_number": "ABC123""#))
        .stdout(predicate::str::contains(r#""proposed_name": "CTI-ABC123.pdf""#));
}

#[test]
fn test_config_file_is_used() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.json");
    let input = dir.path().join("scan.pdf");
    fs::write(&config, r#"{"naming": {"prefix": "ACME", "default_policy": "by_invoice"}}"#).unwrap();
    write_pdf(&input, &["Invoice Number: 42"]);

    pdfren()
        .arg("--config")
        .arg(&config)
        .arg("rename")
        .arg(&input)
        .arg("--dry-run")
        .assert()
        .success()
        .stdout(predicate::str::contains("ACME-42.pdf"));
}

#[test]
fn test_invalid_config_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.json");
    fs::write(&config, r#"{"naming": {"prefix": "A/B"}}"#).unwrap();

    pdfren()
        .arg("--config")
        .arg(&config)
        .args(["config", "show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("naming.prefix"));
}

#[test]
fn test_config_init_and_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pdfren.json");

    pdfren()
        .args(["config", "init", "--output"])
        .arg(&path)
        .assert()
        .success();
    assert!(path.exists());

    pdfren()
        .args(["config", "init", "--output"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    pdfren()
        .arg("--config")
        .arg(&path)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("exists"));
}
