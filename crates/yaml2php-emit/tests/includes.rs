//! Cross-file `!include` behavior, exercised against real files.

use std::fs;
use std::path::Path;
use tempfile::TempDir;
use yaml2php_emit::{EmitOptions, Error, from_file, from_string, from_string_with_base};

fn write(dir: &TempDir, name: &str, content: &str) {
    fs::write(dir.path().join(name), content).unwrap();
}

fn convert(dir: &TempDir, name: &str, options: &EmitOptions) -> Result<String, Error> {
    from_file(dir.path().join(name), options)
}

#[test]
fn include_splices_scalar_content() {
    let dir = TempDir::new().unwrap();
    write(&dir, "answer.yaml", "42");
    write(&dir, "root.yaml", "value: !include answer.yaml");

    let with_include = convert(&dir, "root.yaml", &EmitOptions::default()).unwrap();
    let inline = from_string("value: 42", &EmitOptions::default()).unwrap();
    assert_eq!(with_include, inline);
}

#[test]
fn include_splices_map_at_inclusion_depth() {
    let options = EmitOptions {
        pretty: true,
        indent: 4,
    };

    let dir = TempDir::new().unwrap();
    write(&dir, "db.yaml", "host: localhost\nport: 5432");
    write(&dir, "root.yaml", "db: !include db.yaml");

    let with_include = convert(&dir, "root.yaml", &options).unwrap();
    let inline = from_string("db:\n  host: localhost\n  port: 5432", &options).unwrap();
    assert_eq!(with_include, inline);
}

#[test]
fn include_inside_sequence() {
    let dir = TempDir::new().unwrap();
    write(&dir, "item.yaml", "42");
    write(&dir, "root.yaml", "- 1\n- !include item.yaml\n- 3");

    let php = convert(&dir, "root.yaml", &EmitOptions::default()).unwrap();
    assert_eq!(php, "<?php\nreturn array(1, 42, 3);");
}

#[test]
fn includes_chain_recursively() {
    let dir = TempDir::new().unwrap();
    write(&dir, "c.yaml", "leaf");
    write(&dir, "b.yaml", "inner: !include c.yaml");
    write(&dir, "a.yaml", "outer: !include b.yaml");

    let php = convert(&dir, "a.yaml", &EmitOptions::default()).unwrap();
    assert_eq!(
        php,
        "<?php\nreturn array('outer' => array('inner' => 'leaf'));"
    );
}

#[test]
fn nested_includes_resolve_against_root_directory() {
    // b.yaml lives in a subdirectory but its own include still resolves
    // against the originally loaded file's directory.
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("sub")).unwrap();
    write(&dir, "c.yaml", "99");
    write(&dir, "sub/b.yaml", "deep: !include c.yaml");
    write(&dir, "root.yaml", "top: !include sub/b.yaml");

    let php = convert(&dir, "root.yaml", &EmitOptions::default()).unwrap();
    assert_eq!(php, "<?php\nreturn array('top' => array('deep' => 99));");
}

#[test]
fn empty_included_document_becomes_empty_array() {
    let dir = TempDir::new().unwrap();
    write(&dir, "empty.yaml", "");
    write(&dir, "root.yaml", "section: !include empty.yaml");

    let php = convert(&dir, "root.yaml", &EmitOptions::default()).unwrap();
    assert_eq!(php, "<?php\nreturn array('section' => array());");
}

#[test]
fn missing_include_reports_attempted_path() {
    let dir = TempDir::new().unwrap();
    write(&dir, "root.yaml", "value: !include missing.yaml");

    let err = convert(&dir, "root.yaml", &EmitOptions::default()).unwrap_err();
    match err {
        Error::Load { path, .. } => assert!(path.ends_with("missing.yaml"), "path was {path:?}"),
        other => panic!("expected Load error, got {other:?}"),
    }
}

#[test]
fn malformed_include_reports_attempted_path() {
    let dir = TempDir::new().unwrap();
    write(&dir, "broken.yaml", "key: [unterminated");
    write(&dir, "root.yaml", "value: !include broken.yaml");

    let err = convert(&dir, "root.yaml", &EmitOptions::default()).unwrap_err();
    match err {
        Error::Parse { path, .. } => assert!(path.ends_with("broken.yaml"), "path was {path:?}"),
        other => panic!("expected Parse error, got {other:?}"),
    }
}

#[test]
fn self_include_is_a_cycle() {
    let dir = TempDir::new().unwrap();
    write(&dir, "me.yaml", "again: !include me.yaml");

    let err = convert(&dir, "me.yaml", &EmitOptions::default()).unwrap_err();
    assert!(matches!(err, Error::IncludeCycle { .. }), "got {err:?}");
}

#[test]
fn mutual_includes_are_a_cycle() {
    let dir = TempDir::new().unwrap();
    write(&dir, "a.yaml", "x: !include b.yaml");
    write(&dir, "b.yaml", "y: !include a.yaml");

    let err = convert(&dir, "a.yaml", &EmitOptions::default()).unwrap_err();
    match err {
        Error::IncludeCycle { path, .. } => assert!(path.ends_with("a.yaml"), "path was {path:?}"),
        other => panic!("expected IncludeCycle, got {other:?}"),
    }
}

#[test]
fn diamond_includes_are_not_a_cycle() {
    // The same file included twice along different branches is fine; only
    // revisiting a file still on the active chain is a cycle.
    let dir = TempDir::new().unwrap();
    write(&dir, "shared.yaml", "7");
    write(&dir, "root.yaml", "a: !include shared.yaml\nb: !include shared.yaml");

    let php = convert(&dir, "root.yaml", &EmitOptions::default()).unwrap();
    assert_eq!(php, "<?php\nreturn array('a' => 7, 'b' => 7);");
}

#[test]
fn string_input_with_base_resolves_includes() {
    let dir = TempDir::new().unwrap();
    write(&dir, "answer.yaml", "42");

    let php = from_string_with_base(
        "value: !include answer.yaml",
        dir.path(),
        &EmitOptions::default(),
    )
    .unwrap();
    assert_eq!(php, "<?php\nreturn array('value' => 42);");
}

#[test]
fn from_file_reports_missing_root() {
    let missing = Path::new("definitely/not/here.yaml");
    let err = from_file(missing, &EmitOptions::default()).unwrap_err();
    match err {
        Error::Load { path, .. } => assert_eq!(path, missing),
        other => panic!("expected Load error, got {other:?}"),
    }
}
