//! Tests for the OutputStrategy blanket implementations.

use std::sync::Arc;

use crate::{ConsoleStrategy, InMemorySink, OutputStrategy};

#[test]
fn boxed_and_shared_strategies_delegate() {
    let sink = InMemorySink::new("console");
    let console = ConsoleStrategy::new().with_console(Arc::new(sink.clone()));

    let boxed: Box<dyn OutputStrategy> = Box::new(console.clone());
    let shared: Arc<dyn OutputStrategy> = Arc::new(console);

    boxed.display("caja").unwrap();
    shared.display("compartida").unwrap();

    assert_eq!(sink.contents_string(), "Consola: caja\nConsola: compartida\n");
}
