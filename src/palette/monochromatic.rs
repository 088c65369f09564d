// Copyright (C) 2023 Aaron Yeoh Cruz <zeyonaut@gmail.com>
// SPDX-License-Identifier: MPL-2.0

// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::color::HslColor;

// Steps lightness by 1/count, wrapping past white back to black.
// Each color takes its hue and saturation from the color before it.
pub fn generate(start: HslColor, count: i32) -> Vec<HslColor> {
	let count = usize::try_from(count).unwrap_or(0);
	if count < 2 {
		return Vec::new();
	}
	let step = 1. / count as f64;

	let mut lightness = start.lightness();
	let mut previous = start;
	(1..count)
		.map(|_| {
			lightness = (lightness + step) % 1.;
			previous = HslColor::new(i32::from(previous.hue()), previous.saturation(), lightness);
			previous
		})
		.collect()
}
