// crates/isolate_tests/tests/integration_cli.rs

use assert_cmd::Command;
use assert_fs::prelude::*;
use assert_fs::TempDir;
use predicates::prelude::*;
use std::fs;
use std::path::Path;

/// Sorted names of the files directly inside `dir`.
fn listing(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().map(|t| t.is_file()).unwrap_or(false))
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

fn isolate_tests() -> Command {
    let mut cmd = Command::cargo_bin("isolate_tests").unwrap();
    cmd.env_remove("ISOLATE_TESTS_OUTPUT_DIR")
        .env_remove("ISOLATE_TESTS_ENCODING")
        .env_remove("ISOLATE_TESTS_UNTERMINATED");
    cmd
}

#[test]
fn named_mode_writes_ordinal_file() {
    let input = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    input
        .child("Foo.cpp")
        .write_str("BOOST_AUTO_TEST_CASE(Foo)\n{\n\tchar const* text = R\"(\n\t\tcontract C {\n\t\t}\n\t)\";\n}\n")
        .unwrap();

    isolate_tests()
        .current_dir(out.path())
        .arg(input.child("Foo.cpp").path())
        .arg("--named")
        .assert()
        .success();

    assert_eq!(listing(out.path()), vec!["001_Foo.sol"]);
    assert_eq!(
        fs::read_to_string(out.path().join("001_Foo.sol")).unwrap(),
        "contract C {\n}\n"
    );
}

#[test]
fn docs_mode_strips_indent_and_names_by_hash() {
    let input = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    input
        .child("docs/types.rst")
        .write_str(concat!(
            "Value Types\n",
            "===========\n",
            "\n",
            ".. code-block:: solidity\n",
            "    :force:\n",
            "\n",
            "    pragma solidity ^0.8.0;\n",
            "    contract C {\n",
            "        uint x;\n",
            "    }\n",
            "\n",
            "Shell::\n",
            "\n",
            "    solc --bin C.sol\n",
        ))
        .unwrap();

    isolate_tests()
        .arg(input.path())
        .arg("docs")
        .arg("--output-dir")
        .arg(out.path())
        .assert()
        .success();

    let files = listing(out.path());
    assert_eq!(files.len(), 1);
    assert!(files[0].starts_with("test_"));
    assert!(files[0].ends_with("_types_rst.sol"));
    assert_eq!(
        fs::read_to_string(out.path().join(&files[0])).unwrap(),
        "pragma solidity ^0.8.0;\ncontract C {\n    uint x;\n}\n\n"
    );
}

#[test]
fn docs_mode_aborts_on_misindented_code() {
    let input = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    input
        .child("bad.rst")
        .write_str("Example::\n\n  contract Broken {\n  }\n\nEnd.\n")
        .unwrap();

    isolate_tests()
        .current_dir(out.path())
        .arg(input.child("bad.rst").path())
        .arg("docs")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("Indentation error in"))
        .stdout(predicate::str::contains("bad.rst"))
        .stdout(predicate::str::contains("  contract Broken {"));

    assert!(listing(out.path()).is_empty());
}

#[test]
fn hash_mode_is_deterministic_across_runs() {
    let input = TempDir::new().unwrap();
    input
        .child("test/EndToEnd.cpp")
        .write_str("R\"(\ncontract A {}\n)\";\nR\"X(\ncontract B {}\n)X\";\n")
        .unwrap();
    input.child("test/Plain.sol").write_str("contract P {}\n").unwrap();
    input
        .child("test/compilationTests/Big.cpp")
        .write_str("R\"(\ncontract Skipped {}\n)\";\n")
        .unwrap();

    let first = TempDir::new().unwrap();
    let second = TempDir::new().unwrap();
    for out in [&first, &second] {
        isolate_tests()
            .arg(input.path())
            .env("ISOLATE_TESTS_OUTPUT_DIR", out.path())
            .assert()
            .success();
    }

    let names = listing(first.path());
    assert_eq!(names.len(), 3);
    assert_eq!(names, listing(second.path()));
    for name in &names {
        assert_eq!(
            fs::read(first.path().join(name)).unwrap(),
            fs::read(second.path().join(name)).unwrap()
        );
    }
    assert_eq!(names.iter().filter(|n| n.ends_with("_endtoend_cpp.sol")).count(), 2);
    assert_eq!(names.iter().filter(|n| n.ends_with("_plain_sol.sol")).count(), 1);
}

#[test]
fn strict_unterminated_literal_fails() {
    let input = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    input
        .child("Open.cpp")
        .write_str("R\"(\ncontract Open {}\n")
        .unwrap();

    isolate_tests()
        .current_dir(out.path())
        .arg(input.child("Open.cpp").path())
        .args(["--unterminated", "error"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Unterminated raw literal"));

    isolate_tests()
        .current_dir(out.path())
        .arg(input.child("Open.cpp").path())
        .assert()
        .success();
    assert!(listing(out.path()).is_empty());
}

#[test]
fn unknown_mode_argument_is_rejected() {
    let input = TempDir::new().unwrap();
    input.child("a.cpp").write_str("").unwrap();
    isolate_tests()
        .arg(input.child("a.cpp").path())
        .arg("html")
        .assert()
        .failure();
}
