//! JsonStrategy tests.

use std::sync::Arc;

use serde_json::Value;

use crate::{InMemorySink, JsonStrategy, OutputStrategy};

fn render(message: &str) -> String {
    let sink = InMemorySink::new("console");
    JsonStrategy::new()
        .with_console(Arc::new(sink.clone()))
        .display(message)
        .unwrap();
    sink.contents_string()
}

fn only_message(output: &str) -> String {
    let value: Value = serde_json::from_str(output).expect("output is valid JSON");
    let object = value.as_object().expect("output is a JSON object");
    assert_eq!(object.len(), 1);
    object["mensaje"].as_str().expect("mensaje is a string").to_string()
}

#[test]
fn json_is_pretty_printed() {
    assert_eq!(render("hola"), "{\n  \"mensaje\": \"hola\"\n}\n");
}

#[test]
fn json_round_trips_special_characters() {
    let cases = [
        "con \"comillas\"",
        "barra \\ invertida",
        "varias\nlíneas\r\n",
        "control \u{0001}\u{001f}",
        "patrón ñ 日本語 🚀",
        "",
    ];

    for message in cases {
        assert_eq!(only_message(&render(message)), message);
    }
}
