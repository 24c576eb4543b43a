use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn mvnbom_cmd() -> Command {
    Command::cargo_bin("mvnbom").unwrap()
}

const POM: &str = r#"<project>
    <groupId>org.example</groupId>
    <artifactId>demo</artifactId>
    <version>1.0.0</version>
    <dependencies>
        <dependency>
            <groupId>junit</groupId>
            <artifactId>junit</artifactId>
            <version>4.13.2</version>
        </dependency>
    </dependencies>
</project>"#;

#[test]
fn scan_without_manifest_fails() {
    let tmp = TempDir::new().unwrap();

    mvnbom_cmd()
        .current_dir(tmp.path())
        .args(["scan", "--manifest-only"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Manifest error"));
}

#[test]
fn scan_emits_json_module_list() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("pom.xml"), POM).unwrap();

    mvnbom_cmd()
        .current_dir(tmp.path())
        .args(["scan", "--manifest-only"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"name\":\"demo\""))
        .stdout(predicate::str::contains("\"name\":\"junit\""))
        .stdout(predicate::str::contains("\"root\":true"));
}

#[test]
fn tree_prints_root_and_children() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("pom.xml"), POM).unwrap();

    mvnbom_cmd()
        .current_dir(tmp.path())
        .args(["tree", "--manifest-only"])
        .assert()
        .success()
        .stdout(predicate::str::contains("demo:1.0.0"))
        .stdout(predicate::str::contains("junit:4.13.2"));
}

#[test]
fn help_lists_commands() {
    mvnbom_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("scan"))
        .stdout(predicate::str::contains("tree"));
}
