use clap::Parser;
use roost_core::application::{config::Args, startup};
use tracing::error;

fn main() {
    let args = Args::parse();
    if let Err(error) = startup::run(args) {
        error!("command failed: {error}");
        std::process::exit(1);
    }
}
