//! Integration tests for tabtheme.

mod helpers;

mod apply_test;
mod cli_test;
mod config_test;
mod resolver_props_test;
