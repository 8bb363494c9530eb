//! Integration test harness for the folio CLI.

mod helpers;

mod cli_test;
mod config_test;
mod export_test;
mod print_test;
