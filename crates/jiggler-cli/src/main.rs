use std::io;

use clap::Parser;
use jiggler_core::{shutdown_signal, write_banner, EnigoPointer, JiggleConfig, Jiggler, Outcome};

mod logging;

#[derive(Parser)]
#[command(
    name = "mouse-jiggler",
    version,
    about = "Keeps the desktop awake by nudging the mouse pointer every 15 seconds"
)]
struct Cli {}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let _cli = Cli::parse();
    logging::init();

    let code = run(JiggleConfig::default()).await;
    std::process::exit(code);
}

async fn run(config: JiggleConfig) -> i32 {
    if let Err(e) = write_banner(&mut io::stdout(), &config) {
        tracing::warn!(error = %e, "could not write banner");
    }

    let pointer = match EnigoPointer::connect() {
        Ok(pointer) => pointer,
        Err(e) => return fail(e.into()),
    };

    let mut jiggler = match Jiggler::new(pointer, io::stdout(), config) {
        Ok(jiggler) => jiggler,
        Err(e) => return fail(e),
    };

    jiggler.run_until(shutdown_signal()).await.exit_code()
}

fn fail(err: jiggler_core::CoreError) -> i32 {
    tracing::error!(error = %err, "startup failed");
    let outcome = Outcome::Failed(err);
    if let Err(e) = outcome.write_to(&mut io::stdout()) {
        tracing::warn!(error = %e, "could not write error line");
    }
    outcome.exit_code()
}
