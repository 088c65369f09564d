// Copyright (C) 2023 Aaron Yeoh Cruz <zeyonaut@gmail.com>
// SPDX-License-Identifier: MPL-2.0

// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::color::HslColor;

pub fn generate(start: HslColor) -> Vec<HslColor> {
	vec![start.rotated(180)]
}

#[cfg(test)]
mod tests {
	use super::super::{tests::assert_palette_near, Palette};
	use crate::color::{HslColor, RgbColor};

	#[test]
	fn opposite_hue_keeps_saturation_and_lightness() {
		let base = HslColor::new(300, 0.25, 0.75);
		let complements = super::generate(base);
		assert_eq!(complements.len(), 1);
		let complement = complements[0];
		assert_eq!(complement.hue(), 120);
		assert_eq!(complement.saturation(), base.saturation());
		assert_eq!(complement.lightness(), base.lightness());
	}

	#[test]
	fn complements_of_known_colors() {
		let fixtures = [
			([0, 0, 0], [[0, 0, 0], [0, 0, 0]]),
			([255, 0, 0], [[255, 0, 0], [0, 255, 255]]),
			([0, 255, 0], [[0, 255, 0], [255, 0, 255]]),
			([0, 0, 255], [[0, 0, 255], [255, 255, 0]]),
			([120, 120, 0], [[120, 120, 0], [0, 0, 122]]),
			([120, 0, 120], [[120, 0, 120], [0, 122, 0]]),
			([0, 120, 120], [[0, 120, 120], [122, 0, 0]]),
		];
		for (base, expected) in fixtures {
			assert_palette_near(&Palette::complementary(RgbColor(base)), &expected);
		}
		assert_eq!(Palette::complementary(RgbColor([255, 0, 0])).color(1).map(|color| color.to_rgb()), Some(RgbColor([0, 255, 255])));
	}
}
