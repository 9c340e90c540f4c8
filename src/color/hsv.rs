// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Dirgraph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Dirgraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Hue in degrees `[0, 360)`, saturation and value in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsv {
    pub h: f64,
    pub s: f64,
    pub v: f64,
}

impl Hsv {
    pub const WHITE: Self = Self {
        h: 0.0,
        s: 0.0,
        v: 1.0,
    };

    pub fn new(h: f64, s: f64, v: f64) -> Self {
        Self { h, s, v }
    }

    pub fn to_rgb(self) -> Rgb {
        hsv_to_rgb(self.h, self.s, self.v)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Self = Self { r: 0, g: 0, b: 0 };
    pub const WHITE: Self = Self {
        r: 255,
        g: 255,
        b: 255,
    };

    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// Clamps `n` to `[lo, hi]` and maps it linearly onto `[tlo, thi]`.
pub fn scale(n: f64, lo: f64, hi: f64, tlo: f64, thi: f64) -> f64 {
    let n = n.clamp(lo, hi);
    (n - lo) / (hi - lo) * (thi - tlo) + tlo
}

/// Standard HSV to RGB conversion. Out-of-range input yields black.
pub fn hsv_to_rgb(h: f64, s: f64, v: f64) -> Rgb {
    if !(0.0..360.0).contains(&h) || !(0.0..=1.0).contains(&s) || !(0.0..=1.0).contains(&v) {
        return Rgb::BLACK;
    }

    let c = v * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = v - c;

    let (r, g, b) = match (h / 60.0).floor() as u8 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        5 => (c, 0.0, x),
        sector => unreachable!("hue {h} fell into sector {sector}"),
    };

    Rgb {
        r: channel(r + m),
        g: channel(g + m),
        b: channel(b + m),
    }
}

fn channel(value: f64) -> u8 {
    (value * 255.0).round() as u8
}
