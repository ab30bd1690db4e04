// Module exports for CLI subcommands.
//
// Each module handles a specific subcommand; main.rs stays focused on
// parsing and dispatch.

pub mod plan;
pub mod vehicles;
