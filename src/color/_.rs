// Copyright (C) 2023 Aaron Yeoh Cruz <zeyonaut@gmail.com>
// SPDX-License-Identifier: MPL-2.0

// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

pub mod convert;
pub mod hex;
mod hsl;
mod rgb;

use std::fmt;

pub use self::{hex::HexColor, hsl::HslColor, rgb::RgbColor};

// A color in either of the two supported spaces.
#[derive(Clone, Copy, PartialEq, Debug, derive_more::From)]
pub enum Color {
	Rgb(RgbColor),
	Hsl(HslColor),
}

impl Color {
	pub fn to_rgb(self) -> RgbColor {
		match self {
			Self::Rgb(rgb) => rgb,
			Self::Hsl(hsl) => hsl.to_rgb(),
		}
	}

	pub fn to_hsl(self) -> HslColor {
		match self {
			Self::Rgb(rgb) => rgb.to_hsl(),
			Self::Hsl(hsl) => hsl,
		}
	}
}

impl Default for Color {
	fn default() -> Self {
		Self::Hsl(HslColor::default())
	}
}

impl From<HexColor> for Color {
	fn from(HexColor(rgb): HexColor) -> Self {
		Self::Rgb(rgb)
	}
}

impl fmt::Display for Color {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Rgb(rgb) => fmt::Display::fmt(rgb, f),
			Self::Hsl(hsl) => fmt::Display::fmt(hsl, f),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn conversions_pass_through_the_native_space() {
		let rgb = RgbColor::new(120, 160, 200);
		assert_eq!(Color::from(rgb).to_rgb(), rgb);
		assert_eq!(Color::from(rgb).to_hsl(), rgb.to_hsl());

		let hsl = HslColor::new(210, 0.42, 0.63);
		assert_eq!(Color::from(hsl).to_hsl(), hsl);
		assert_eq!(Color::from(hsl).to_rgb(), hsl.to_rgb());
	}

	#[test]
	fn equality_respects_the_color_space() {
		let red = RgbColor::new(255, 0, 0);
		assert_eq!(Color::from(red), Color::from(HexColor(red)));
		assert_ne!(Color::from(red), Color::from(red.to_hsl()));
	}

	#[test]
	fn displays_in_its_own_space() {
		assert_eq!(Color::from(RgbColor::new(1, 2, 3)).to_string(), "RGB(1, 2, 3)");
		assert_eq!(Color::default().to_string(), "HSL (0, 0.00, 0.00)");
	}
}
