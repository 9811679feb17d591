// SPDX-License-Identifier: MIT

pub mod fasta;
pub mod record;
