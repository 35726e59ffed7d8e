/*
 * // Copyright 2024 (c) the Radzivon Bartoshyk. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */

//! Errors reported by the structural parts of the crate.
//!
//! Numeric domain is never validated: a negative luminance simply flows
//! through the formulas. Only wrong component counts and unknown table keys
//! are reported as errors.

/// A wrong number of components.
///
/// Colour values are exactly three components wide. Interleaved buffers must
/// hold a whole number of triples, and source and destination must agree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShapeError {
    pub expected: usize,
    pub actual: usize,
}

impl ShapeError {
    /// Create a new shape error.
    pub fn new(expected: usize, actual: usize) -> Self {
        Self { expected, actual }
    }
}

impl std::fmt::Display for ShapeError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_fmt(format_args!(
            "expected {} components but got {}",
            self.expected, self.actual
        ))
    }
}

impl std::error::Error for ShapeError {}

// ====================================================================================================================

/// A failed lookup in the standard illuminant table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IlluminantError {
    /// The observer name is not one of the CIE standard observers, e.g.
    /// `CIE 1931 2 Degree Standard Observer`.
    UnknownObserver(String),

    /// The illuminant name is not in the table, e.g. `D51`.
    UnknownIlluminant(String),
}

impl std::fmt::Display for IlluminantError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::UnknownObserver(name) => {
                f.write_fmt(format_args!("unknown standard observer \"{}\"", name))
            }
            Self::UnknownIlluminant(name) => {
                f.write_fmt(format_args!("unknown illuminant \"{}\"", name))
            }
        }
    }
}

impl std::error::Error for IlluminantError {}
