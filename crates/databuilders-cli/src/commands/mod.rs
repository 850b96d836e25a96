pub mod check;
pub mod config_resolver;
pub mod generate;
pub mod init;
pub mod manifest_loader;
pub mod run_common;

#[cfg(test)]
mod generate_tests;
#[cfg(test)]
mod manifest_loader_tests;
#[cfg(test)]
mod run_common_tests;
