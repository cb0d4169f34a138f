include!("../../lib.rs");
use std::io;
use crate::console::menu::run;
use crate::console::prompt::Console;
use crate::core::controller::AppState;
use crate::core::domain::Configuration;
use crate::core::library::LibraryError;
use crate::utils::logs::setup_tracing;

fn main() -> Result<(), LibraryError> {
    let config = Configuration::from_env();
    setup_tracing(&config);

    let mut state = AppState::new(config);
    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout());
    run(&mut state, &mut console)
}
