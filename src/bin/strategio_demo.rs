use log::info;
use strategio::{ConsoleStrategy, FileStrategy, JsonStrategy, MessageContext, OutputError};

const MESSAGE: &str = "Hola, este es un mensaje con el patrón Strategy";

fn run() -> Result<(), OutputError> {
    let mut context = MessageContext::new(ConsoleStrategy::new());
    context.show_message(MESSAGE)?;

    context.set_strategy(JsonStrategy::new());
    context.show_message(MESSAGE)?;

    context.set_strategy(FileStrategy::default());
    context.show_message(MESSAGE)?;

    info!("demo finished");
    Ok(())
}

fn main() {
    env_logger::Builder::from_default_env().init();

    if let Err(e) = run() {
        eprintln!("strategio_demo error: {e}");
        std::process::exit(1);
    }
}
