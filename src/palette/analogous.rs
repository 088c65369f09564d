// Copyright (C) 2023 Aaron Yeoh Cruz <zeyonaut@gmail.com>
// SPDX-License-Identifier: MPL-2.0

// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::color::HslColor;

use super::MAX_ANALOGOUS_OFFSET;

// Rotates forwards first, then backwards.
pub fn generate(start: HslColor, offset: i32) -> Vec<HslColor> {
	vec![start.rotated(offset), start.rotated(-offset)]
}

pub fn generate_triad(start: HslColor) -> Vec<HslColor> {
	generate(start, MAX_ANALOGOUS_OFFSET)
}

#[cfg(test)]
mod tests {
	use super::super::{tests::assert_palette_near, Palette};
	use crate::color::{HslColor, RgbColor};

	#[test]
	fn rotates_both_ways_around_the_wheel() {
		let hues: Vec<u16> = super::generate(HslColor::new(10, 0.5, 0.5), 30).into_iter().map(HslColor::hue).collect();
		assert_eq!(hues, [40, 340]);
	}

	#[test]
	fn analogous_colors_of_known_colors() {
		let fixtures = [
			([0, 0, 0], [[0, 0, 0], [0, 0, 0], [0, 0, 0]]),
			([255, 0, 0], [[255, 0, 0], [0, 255, 0], [0, 0, 255]]),
			([120, 0, 40], [[120, 0, 40], [41, 122, 0], [0, 41, 122]]),
			([60, 120, 180], [[60, 120, 180], [180, 60, 120], [120, 180, 60]]),
			([40, 100, 150], [[40, 100, 150], [149, 40, 100], [100, 149, 40]]),
		];
		for (base, expected) in fixtures {
			assert_palette_near(&Palette::analogous(RgbColor(base), 120), &expected);
		}
	}

	#[test]
	fn small_offsets_stay_close_to_the_base() {
		assert_palette_near(&Palette::analogous(RgbColor([60, 120, 180]), 30), &[[60, 120, 180], [60, 60, 180], [60, 180, 180]]);
	}

	#[test]
	fn triads_of_known_colors() {
		let fixtures = [
			([0, 0, 0], [[0, 0, 0], [0, 0, 0], [0, 0, 0]]),
			([255, 0, 0], [[255, 0, 0], [0, 255, 0], [0, 0, 255]]),
			([0, 255, 0], [[0, 255, 0], [0, 0, 255], [255, 0, 0]]),
			([0, 0, 255], [[0, 0, 255], [255, 0, 0], [0, 255, 0]]),
			([120, 120, 0], [[120, 120, 0], [0, 122, 122], [122, 0, 122]]),
			([120, 0, 120], [[120, 0, 120], [122, 122, 0], [0, 122, 122]]),
			([0, 120, 120], [[0, 120, 120], [122, 0, 122], [122, 122, 0]]),
		];
		for (base, expected) in fixtures {
			assert_palette_near(&Palette::triad(RgbColor(base)), &expected);
		}
		let rgb: Vec<RgbColor> = Palette::triad(RgbColor([255, 0, 0])).rgb_colors().collect();
		assert_eq!(rgb, [RgbColor([255, 0, 0]), RgbColor([0, 255, 0]), RgbColor([0, 0, 255])]);
	}
}
