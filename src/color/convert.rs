// Copyright (C) 2023 Aaron Yeoh Cruz <zeyonaut@gmail.com>
// SPDX-License-Identifier: MPL-2.0

// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::{HslColor, RgbColor};

// Converts 8-bit channels to hue, saturation and lightness.
// The hue is the polar angle of the color on the chromaticity plane, truncated to whole degrees.
pub fn rgb_to_hsl(red: u8, green: u8, blue: u8) -> HslColor {
	let [r, g, b] = [red, green, blue].map(|channel| f64::from(channel) / 255.);

	let max = r.max(g).max(b);
	let min = r.min(g).min(b);

	let lightness = (max + min) / 2.;

	let saturation = if max == min {
		0.
	} else if lightness < 0.5 {
		(max - min) / (max + min)
	} else {
		(max - min) / (2. - (max + min))
	};

	// Cartesian coordinates on the chromaticity plane, with red along the y axis.
	let x = 0.5 * 3f64.sqrt() * (g - b);
	let y = 0.5 * (2. * r - g - b);
	let hue = (x.atan2(y).to_degrees() + 360.) % 360.;

	HslColor::new(hue as i32, saturation, lightness)
}

// Converts hue, saturation and lightness to 8-bit channels, rounding to the nearest value.
pub fn hsl_to_rgb(hue: i32, saturation: f64, lightness: f64) -> RgbColor {
	let hsl = HslColor::new(hue, saturation, lightness);
	let (saturation, lightness) = (hsl.saturation(), hsl.lightness());

	if saturation == 0. {
		return RgbColor([unit_to_channel(lightness); 3]);
	}

	let t1 = if lightness < 0.5 { lightness * (1. + saturation) } else { lightness + saturation - lightness * saturation };
	let t2 = 2. * lightness - t1;

	// Green sits at the hue itself; red and blue are a third of a turn to either side.
	let h = f64::from(hsl.hue()) / 360.;
	RgbColor([h + 1. / 3., h, h - 1. / 3.].map(|f| unit_to_channel(interpolate_channel(t1, t2, wrap_unit(f)))))
}

fn wrap_unit(f: f64) -> f64 {
	if f < 0. {
		f + 1.
	} else if f > 1. {
		f - 1.
	} else {
		f
	}
}

// Piecewise-linear ramp around the wheel: rising, plateau, falling, floor.
fn interpolate_channel(t1: f64, t2: f64, f: f64) -> f64 {
	if f * 6. < 1. {
		t2 + (t1 - t2) * 6. * f
	} else if f * 2. < 1. {
		t1
	} else if f * 3. < 2. {
		t2 + (t1 - t2) * (4. - 6. * f)
	} else {
		t2
	}
}

fn unit_to_channel(value: f64) -> u8 {
	(value * 255.).round().clamp(0., 255.) as u8
}
