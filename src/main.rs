use clap::Parser;
use color_eyre::Result;

use dcol::cli::Cli;
use dcol::palette::PaletteStore;
use dcol::tui::Terminal;
use dcol::{logging, report, App, Config};

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    logging::init()?;

    let store = PaletteStore::dracula();

    if cli.list {
        for name in store.names() {
            println!("{name}");
        }
        return Ok(());
    }

    if let Some(query) = &cli.print {
        print!("{}", report::print_query(store, query)?);
        return Ok(());
    }

    // Load configuration
    let config = Config::load(cli.config.as_deref())?;

    // Initialize terminal
    let terminal = Terminal::new()?;

    // Create and run application
    let mut app = App::with_store(config, store);
    app.run(terminal)?;

    Ok(())
}
