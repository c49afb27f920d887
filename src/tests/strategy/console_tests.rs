//! ConsoleStrategy tests.

use std::sync::Arc;

use crate::{ConsoleStrategy, InMemorySink, OutputStrategy};

fn captured() -> (ConsoleStrategy, InMemorySink) {
    let sink = InMemorySink::new("console");
    let strategy = ConsoleStrategy::new().with_console(Arc::new(sink.clone()));
    (strategy, sink)
}

#[test]
fn console_prefixes_message() {
    let (strategy, sink) = captured();

    strategy.display("hola").unwrap();

    assert_eq!(sink.contents_string(), "Consola: hola\n");
}

#[test]
fn console_writes_message_verbatim() {
    let (strategy, sink) = captured();
    let message = "comillas \" barra \\ y\tñandú 🚀";

    strategy.display(message).unwrap();

    assert_eq!(sink.contents_string(), format!("Consola: {message}\n"));
}

#[test]
fn console_is_reusable() {
    let (strategy, sink) = captured();

    strategy.display("uno").unwrap();
    strategy.display("").unwrap();

    assert_eq!(sink.contents_string(), "Consola: uno\nConsola: \n");
}
