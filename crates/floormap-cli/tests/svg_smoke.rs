use assert_cmd::Command;
use std::path::PathBuf;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("fixtures")
        .join(name)
}

#[test]
fn renders_fixture_to_svg_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let out = dir.path().join("map.svg");

    Command::cargo_bin("floormap-cli")
        .expect("binary")
        .arg("--input")
        .arg(fixture("products.json"))
        .arg("--out")
        .arg(&out)
        .assert()
        .success();

    let svg = std::fs::read_to_string(&out).expect("svg written");
    assert!(svg.contains("<svg"));
    assert!(svg.contains(r#"viewBox="0 0 900 700""#));
    assert!(svg.contains("product-marker"));
    assert!(svg.contains(r#"<a href="/product/LAPTOP123">"#));
}

#[test]
fn custom_detail_prefix_flows_into_marker_links() {
    let assert = Command::cargo_bin("floormap-cli")
        .expect("binary")
        .arg("--input")
        .arg(fixture("products.json"))
        .arg("--detail-prefix")
        .arg("/inventory/item/")
        .assert()
        .success();

    let svg = String::from_utf8(assert.get_output().stdout.clone()).expect("utf8");
    assert!(svg.contains(r#"<a href="/inventory/item/MOUSE456">"#));
}

#[test]
fn rejects_unknown_arguments() {
    Command::cargo_bin("floormap-cli")
        .expect("binary")
        .arg("--bogus")
        .assert()
        .failure();
}
