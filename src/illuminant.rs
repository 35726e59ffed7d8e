/*
 * // Copyright 2024 (c) the Radzivon Bartoshyk. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */

//! Standard illuminant white points.
//!
//! Chromaticity coordinates of the CIE standard illuminants for both
//! standard observers. The table is fixed reference data.
use crate::error::IlluminantError;
use crate::Chromaticity;
use std::str::FromStr;

/// CIE standard observer the colour matching functions belong to
#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StandardObserver {
    #[default]
    Cie1931TwoDegree,
    Cie1964TenDegree,
}

impl StandardObserver {
    pub const fn name(&self) -> &'static str {
        match self {
            StandardObserver::Cie1931TwoDegree => "CIE 1931 2 Degree Standard Observer",
            StandardObserver::Cie1964TenDegree => "CIE 1964 10 Degree Standard Observer",
        }
    }
}

impl FromStr for StandardObserver {
    type Err = IlluminantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [
            StandardObserver::Cie1931TwoDegree,
            StandardObserver::Cie1964TenDegree,
        ]
        .into_iter()
        .find(|observer| observer.name() == s)
        .ok_or_else(|| IlluminantError::UnknownObserver(s.to_string()))
    }
}

impl std::fmt::Display for StandardObserver {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// CIE standard illuminants
#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Illuminant {
    A,
    B,
    C,
    D50,
    D55,
    D60,
    D65,
    D75,
    E,
    F1,
    F2,
    F3,
    F4,
    F5,
    F6,
    F7,
    F8,
    F9,
    F10,
    F11,
    F12,
}

impl Illuminant {
    pub const ALL: [Illuminant; 21] = [
        Illuminant::A,
        Illuminant::B,
        Illuminant::C,
        Illuminant::D50,
        Illuminant::D55,
        Illuminant::D60,
        Illuminant::D65,
        Illuminant::D75,
        Illuminant::E,
        Illuminant::F1,
        Illuminant::F2,
        Illuminant::F3,
        Illuminant::F4,
        Illuminant::F5,
        Illuminant::F6,
        Illuminant::F7,
        Illuminant::F8,
        Illuminant::F9,
        Illuminant::F10,
        Illuminant::F11,
        Illuminant::F12,
    ];

    pub const fn name(&self) -> &'static str {
        match self {
            Illuminant::A => "A",
            Illuminant::B => "B",
            Illuminant::C => "C",
            Illuminant::D50 => "D50",
            Illuminant::D55 => "D55",
            Illuminant::D60 => "D60",
            Illuminant::D65 => "D65",
            Illuminant::D75 => "D75",
            Illuminant::E => "E",
            Illuminant::F1 => "F1",
            Illuminant::F2 => "F2",
            Illuminant::F3 => "F3",
            Illuminant::F4 => "F4",
            Illuminant::F5 => "F5",
            Illuminant::F6 => "F6",
            Illuminant::F7 => "F7",
            Illuminant::F8 => "F8",
            Illuminant::F9 => "F9",
            Illuminant::F10 => "F10",
            Illuminant::F11 => "F11",
            Illuminant::F12 => "F12",
        }
    }

    /// White point of this illuminant as seen by `observer`
    pub const fn chromaticity(&self, observer: StandardObserver) -> Chromaticity {
        match observer {
            StandardObserver::Cie1931TwoDegree => match self {
                Illuminant::A => Chromaticity::new(0.44757, 0.40745),
                Illuminant::B => Chromaticity::new(0.34842, 0.35161),
                Illuminant::C => Chromaticity::new(0.31006, 0.31616),
                Illuminant::D50 => Chromaticity::new(0.34567, 0.35850),
                Illuminant::D55 => Chromaticity::new(0.33242, 0.34743),
                Illuminant::D60 => Chromaticity::new(0.32168, 0.33767),
                Illuminant::D65 => Chromaticity::new(0.31271, 0.32902),
                Illuminant::D75 => Chromaticity::new(0.29902, 0.31485),
                Illuminant::E => Chromaticity::new(0.3333333333333333, 0.3333333333333333),
                Illuminant::F1 => Chromaticity::new(0.31310, 0.33727),
                Illuminant::F2 => Chromaticity::new(0.37208, 0.37529),
                Illuminant::F3 => Chromaticity::new(0.40910, 0.39430),
                Illuminant::F4 => Chromaticity::new(0.44018, 0.40329),
                Illuminant::F5 => Chromaticity::new(0.31379, 0.34531),
                Illuminant::F6 => Chromaticity::new(0.37790, 0.38835),
                Illuminant::F7 => Chromaticity::new(0.31292, 0.32933),
                Illuminant::F8 => Chromaticity::new(0.34588, 0.35875),
                Illuminant::F9 => Chromaticity::new(0.37417, 0.37281),
                Illuminant::F10 => Chromaticity::new(0.34609, 0.35986),
                Illuminant::F11 => Chromaticity::new(0.38052, 0.37713),
                Illuminant::F12 => Chromaticity::new(0.43695, 0.40441),
            },
            StandardObserver::Cie1964TenDegree => match self {
                Illuminant::A => Chromaticity::new(0.45117, 0.40594),
                Illuminant::B => Chromaticity::new(0.34980, 0.35270),
                Illuminant::C => Chromaticity::new(0.31039, 0.31905),
                Illuminant::D50 => Chromaticity::new(0.34773, 0.35952),
                Illuminant::D55 => Chromaticity::new(0.33411, 0.34877),
                Illuminant::D60 => Chromaticity::new(0.32299, 0.33912),
                Illuminant::D65 => Chromaticity::new(0.31382, 0.33100),
                Illuminant::D75 => Chromaticity::new(0.29968, 0.31740),
                Illuminant::E => Chromaticity::new(0.3333333333333333, 0.3333333333333333),
                Illuminant::F1 => Chromaticity::new(0.31811, 0.33559),
                Illuminant::F2 => Chromaticity::new(0.37925, 0.36733),
                Illuminant::F3 => Chromaticity::new(0.41761, 0.38324),
                Illuminant::F4 => Chromaticity::new(0.44920, 0.39074),
                Illuminant::F5 => Chromaticity::new(0.31975, 0.34246),
                Illuminant::F6 => Chromaticity::new(0.38660, 0.37847),
                Illuminant::F7 => Chromaticity::new(0.31569, 0.32960),
                Illuminant::F8 => Chromaticity::new(0.34902, 0.35939),
                Illuminant::F9 => Chromaticity::new(0.37829, 0.37045),
                Illuminant::F10 => Chromaticity::new(0.35090, 0.35444),
                Illuminant::F11 => Chromaticity::new(0.38541, 0.37123),
                Illuminant::F12 => Chromaticity::new(0.44256, 0.39717),
            },
        }
    }
}

impl FromStr for Illuminant {
    type Err = IlluminantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Illuminant::ALL
            .into_iter()
            .find(|illuminant| illuminant.name() == s)
            .ok_or_else(|| IlluminantError::UnknownIlluminant(s.to_string()))
    }
}

impl std::fmt::Display for Illuminant {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// D50 white point, CIE 1931 2 degree observer. Default reference for U*V*W*
pub const D50_ILLUMINANT: Chromaticity =
    Illuminant::D50.chromaticity(StandardObserver::Cie1931TwoDegree);

/// D65 white point, CIE 1931 2 degree observer
pub const D65_ILLUMINANT: Chromaticity =
    Illuminant::D65.chromaticity(StandardObserver::Cie1931TwoDegree);

/// Looks up a white point by observer and illuminant name,
/// e.g. `("CIE 1931 2 Degree Standard Observer", "D50")`
pub fn illuminant_chromaticity(
    observer: &str,
    illuminant: &str,
) -> Result<Chromaticity, IlluminantError> {
    let observer = observer.parse::<StandardObserver>()?;
    let illuminant = illuminant.parse::<Illuminant>()?;
    Ok(illuminant.chromaticity(observer))
}
