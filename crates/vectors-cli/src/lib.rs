//! vectors-cli: command-line front end for the `vectors` crate.
//!
//! Evaluates a single vector operation per invocation on vectors given as
//! text (`1,2,3` or `"[ 1 2 3 ]"`) and prints the result in the vector's
//! display form.
pub mod commands;
pub mod config;
pub mod parse;
