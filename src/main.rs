// SPDX-License-Identifier: MIT

use fastasift::errors::SiftError;

fn main() -> Result<(), SiftError> {
    fastasift::run()
}
