// Copyright (C) 2023 Aaron Yeoh Cruz <zeyonaut@gmail.com>
// SPDX-License-Identifier: MPL-2.0

// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::fmt;

use super::{convert::rgb_to_hsl, HslColor};

// Red, green and blue channels in [0, 255].
#[repr(transparent)]
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Debug, derive_more::Index, derive_more::IndexMut, derive_more::From, derive_more::Into)]
pub struct RgbColor(pub [u8; 3]);

// Negative channels clamp to zero, large ones wrap around.
fn normalize_channel(value: i32) -> u8 {
	(value.max(0) % 256) as u8
}

impl RgbColor {
	pub fn new(red: i32, green: i32, blue: i32) -> Self {
		Self([red, green, blue].map(normalize_channel))
	}

	pub fn red(self) -> u8 {
		self[0]
	}

	pub fn green(self) -> u8 {
		self[1]
	}

	pub fn blue(self) -> u8 {
		self[2]
	}

	pub fn set_red(&mut self, red: i32) {
		self[0] = normalize_channel(red);
	}

	pub fn set_green(&mut self, green: i32) {
		self[1] = normalize_channel(green);
	}

	pub fn set_blue(&mut self, blue: i32) {
		self[2] = normalize_channel(blue);
	}

	pub fn set_color(&mut self, red: i32, green: i32, blue: i32) {
		*self = Self::new(red, green, blue);
	}

	pub fn to_hsl(self) -> HslColor {
		let Self([red, green, blue]) = self;
		rgb_to_hsl(red, green, blue)
	}
}

impl fmt::Display for RgbColor {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "RGB({}, {}, {})", self.red(), self.green(), self.blue())
	}
}
