use comanda_core::init_logging;

mod app;
pub(crate) mod color;
mod commands;
mod render;
mod repl;
mod table;

fn main() {
    let app = app::build_cli();
    let matches = app.get_matches();

    // Handle --no-color before any output
    if matches.get_flag("no-color") {
        color::set_no_color();
    }

    let verbose = matches.get_flag("verbose");
    init_logging(!verbose);

    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("{}", color::error(&format!("❌ Failed to start runtime: {}", e)));
            std::process::exit(1);
        }
    };

    if let Err(e) = runtime.block_on(commands::run_command(&matches)) {
        // Error already printed to the user by the command handler.
        drop(e);
        std::process::exit(1);
    }
}
