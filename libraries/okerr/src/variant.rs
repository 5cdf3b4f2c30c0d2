// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright okerr Contributors 2026.

//! Payload-free tag naming the side a `Result` holds.

use core::fmt;

/// Which of the two variants a [`Result`](crate::Result) is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Variant {
    /// The success side.
    Ok,
    /// The error side.
    Err,
}

impl Variant {
    /// The variant's name, as used in misuse messages.
    pub fn name(self) -> &'static str {
        match self {
            Variant::Ok => "Ok",
            Variant::Err => "Err",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod test {
    use super::Variant;

    #[test]
    fn test_display() {
        assert_eq!(Variant::Ok.to_string(), "Ok");
        assert_eq!(Variant::Err.to_string(), "Err");
    }
}
