// Copyright (C) 2023 Aaron Yeoh Cruz <zeyonaut@gmail.com>
// SPDX-License-Identifier: MPL-2.0

// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::fmt;

use super::{convert::hsl_to_rgb, RgbColor};

// Hue in whole degrees within [0, 360); saturation and lightness within [0, 1].
#[derive(Clone, Copy, Default, PartialEq, Debug)]
pub struct HslColor {
	hue: u16,
	saturation: f64,
	lightness: f64,
}

// Hues wrap around the color wheel in both directions.
fn normalize_hue(hue: i32) -> u16 {
	hue.rem_euclid(360) as u16
}

// Saturation and lightness saturate at the nearest bound.
fn normalize_unit(value: f64) -> f64 {
	if value.is_nan() {
		0.
	} else {
		value.clamp(0., 1.)
	}
}

impl HslColor {
	pub fn new(hue: i32, saturation: f64, lightness: f64) -> Self {
		Self {
			hue: normalize_hue(hue),
			saturation: normalize_unit(saturation),
			lightness: normalize_unit(lightness),
		}
	}

	pub fn hue(self) -> u16 {
		self.hue
	}

	pub fn saturation(self) -> f64 {
		self.saturation
	}

	pub fn lightness(self) -> f64 {
		self.lightness
	}

	pub fn set_hue(&mut self, hue: i32) {
		self.hue = normalize_hue(hue);
	}

	pub fn set_saturation(&mut self, saturation: f64) {
		self.saturation = normalize_unit(saturation);
	}

	pub fn set_lightness(&mut self, lightness: f64) {
		self.lightness = normalize_unit(lightness);
	}

	pub fn set_color(&mut self, hue: i32, saturation: f64, lightness: f64) {
		*self = Self::new(hue, saturation, lightness);
	}

	// Rotates the hue by some (possibly negative) number of degrees.
	pub fn increment_hue(&mut self, degrees: i32) {
		self.hue = normalize_hue(i32::from(self.hue) + degrees.rem_euclid(360));
	}

	// Same color with its hue rotated.
	pub fn rotated(mut self, degrees: i32) -> Self {
		self.increment_hue(degrees);
		self
	}

	pub fn to_rgb(self) -> RgbColor {
		hsl_to_rgb(i32::from(self.hue), self.saturation, self.lightness)
	}
}

impl fmt::Display for HslColor {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "HSL ({}, {:.2}, {:.2})", self.hue, self.saturation, self.lightness)
	}
}
