// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Construction errors.

use core::fmt;

/// Error returned when a rating widget cannot be built from its inputs.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ConfigurationError {
    /// The icon set was empty, so there is no rating level to choose.
    EmptyIconSet,
}

impl fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyIconSet => f.write_str("a rating widget needs at least one icon"),
        }
    }
}

impl core::error::Error for ConfigurationError {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn display_names_the_problem() {
        assert_eq!(
            ConfigurationError::EmptyIconSet.to_string(),
            "a rating widget needs at least one icon"
        );
    }
}
