//! utility modules of the calculator binary
/// settings from a TOML file and command line flags
pub mod config;
/// set up logging to the terminal and to a file
pub mod logger;
