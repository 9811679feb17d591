// SPDX-License-Identifier: MIT

pub mod accession;
pub mod errors;
pub mod filter;
pub mod seq;
pub mod targets;

mod runner;

use crate::errors::SiftError;

pub fn run() -> Result<(), SiftError> {
    runner::run()
}
