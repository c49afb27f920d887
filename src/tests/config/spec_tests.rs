//! Tests for StrategySpec parsing and building.

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use crate::{InMemorySink, OutputStrategy, StrategySpec};

#[test]
fn parse_short_forms() {
    assert_eq!(StrategySpec::parse("console"), Some(StrategySpec::Console));
    assert_eq!(StrategySpec::parse("Consola"), Some(StrategySpec::Console));
    assert_eq!(
        StrategySpec::parse("file"),
        Some(StrategySpec::File { path: None })
    );
    assert_eq!(
        StrategySpec::parse("file:log/out.txt"),
        Some(StrategySpec::File {
            path: Some(PathBuf::from("log/out.txt"))
        })
    );
    #[cfg(feature = "json")]
    assert_eq!(StrategySpec::parse("JSON"), Some(StrategySpec::Json));
}

#[test]
fn parse_rejects_unknown_forms() {
    assert_eq!(StrategySpec::parse("xml"), None);
    assert_eq!(StrategySpec::parse("file:"), None);
    assert_eq!(StrategySpec::parse("console:extra"), None);
}

#[cfg(feature = "json")]
#[test]
fn deserialize_tagged_specs() {
    let specs: Vec<StrategySpec> = serde_json::from_str(
        r#"[{"kind": "console"}, {"kind": "json"}, {"kind": "file"}, {"kind": "file", "path": "a.txt"}]"#,
    )
    .unwrap();

    assert_eq!(
        specs,
        vec![
            StrategySpec::Console,
            StrategySpec::Json,
            StrategySpec::File { path: None },
            StrategySpec::File {
                path: Some(PathBuf::from("a.txt"))
            },
        ]
    );
}

#[test]
fn built_strategies_write_to_given_console() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("spec.txt");
    let sink = InMemorySink::new("console");

    StrategySpec::Console
        .build_with_console(Arc::new(sink.clone()))
        .display("hola")
        .unwrap();
    StrategySpec::File {
        path: Some(path.clone()),
    }
    .build_with_console(Arc::new(sink.clone()))
    .display("hola")
    .unwrap();

    assert_eq!(
        sink.contents_string(),
        format!("Consola: hola\nMensaje guardado en {}\n", path.display())
    );
    assert_eq!(fs::read_to_string(&path).unwrap(), "hola\n");
}
