// Copyright (C) 2023 Aaron Yeoh Cruz <zeyonaut@gmail.com>
// SPDX-License-Identifier: MPL-2.0

// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

mod analogous;
mod complementary;
mod monochromatic;
mod split_complementary;

use std::{
	fmt,
	fs::File,
	io::{BufWriter, Write},
	iter,
	path::Path,
};

use crate::{
	color::{hex, Color, HslColor, RgbColor},
	error::Result,
};

pub const MAX_ANALOGOUS_OFFSET: i32 = 120;

// Parameters used when a scheme is named without one.
pub const DEFAULT_ANALOGOUS_OFFSET: i32 = 30;
pub const DEFAULT_SPLIT_COMPLEMENTARY_OFFSET: i32 = 150;
pub const DEFAULT_MONOCHROMATIC_COUNT: i32 = 5;

// The rule a palette derives its colors with.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Scheme {
	// The opposite hue.
	Complementary,
	// Hue plus and minus an offset in [0, 120] degrees.
	Analogous { offset: i32 },
	// Analogous with the offset fixed at 120 degrees.
	Triad,
	// Two accents rotated by a non-negative offset.
	SplitComplementary { offset: i32 },
	// `count` colors stepping through lightness.
	Monochromatic { count: i32 },
}

impl Scheme {
	// Brings the parameter into the range the scheme accepts.
	pub fn normalized(self) -> Self {
		match self {
			Self::Analogous { offset } => Self::Analogous { offset: offset.unsigned_abs().min(MAX_ANALOGOUS_OFFSET as u32) as i32 },
			Self::SplitComplementary { offset } => Self::SplitComplementary { offset: offset.max(0) },
			Self::Monochromatic { count } => Self::Monochromatic { count: count.max(0) },
			scheme @ (Self::Complementary | Self::Triad) => scheme,
		}
	}

	// Inverse of `name`; schemes that take no parameter ignore one if given.
	pub fn from_name(name: &str, parameter: Option<i32>) -> Option<Self> {
		let scheme = match name {
			"complementary" => Self::Complementary,
			"analogous" => Self::Analogous { offset: parameter.unwrap_or(DEFAULT_ANALOGOUS_OFFSET) },
			"triad" => Self::Triad,
			"split-complementary" => Self::SplitComplementary { offset: parameter.unwrap_or(DEFAULT_SPLIT_COMPLEMENTARY_OFFSET) },
			"monochromatic" => Self::Monochromatic { count: parameter.unwrap_or(DEFAULT_MONOCHROMATIC_COUNT) },
			_ => return None,
		};
		Some(scheme.normalized())
	}

	pub fn name(self) -> &'static str {
		match self {
			Self::Complementary => "complementary",
			Self::Analogous { .. } => "analogous",
			Self::Triad => "triad",
			Self::SplitComplementary { .. } => "split-complementary",
			Self::Monochromatic { .. } => "monochromatic",
		}
	}

	fn generate(self, start: HslColor) -> Vec<HslColor> {
		match self {
			Self::Complementary => complementary::generate(start),
			Self::Analogous { offset } => analogous::generate(start, offset),
			Self::Triad => analogous::generate_triad(start),
			Self::SplitComplementary { offset } => split_complementary::generate(start, offset),
			Self::Monochromatic { count } => monochromatic::generate(start, count),
		}
	}
}

// A starting color followed by the colors its scheme derives from it.
// Colors are generated once, on construction.
#[derive(Clone, Debug)]
pub struct Palette {
	scheme: Scheme,
	colors: Vec<Color>,
}

impl Palette {
	pub fn new(starting_color: impl Into<Color>, scheme: Scheme) -> Self {
		let starting_color = starting_color.into();
		let scheme = scheme.normalized();

		let derived = scheme.generate(starting_color.to_hsl());
		for color in derived.iter() {
			log::trace!("{} palette of {starting_color} derived {color}", scheme.name());
		}

		let colors: Vec<Color> = iter::once(starting_color).chain(derived.into_iter().map(Color::Hsl)).collect();
		log::debug!("generated {} palette of {} colors from {starting_color}", scheme.name(), colors.len());

		Self { scheme, colors }
	}

	pub fn complementary(starting_color: impl Into<Color>) -> Self {
		Self::new(starting_color, Scheme::Complementary)
	}

	pub fn analogous(starting_color: impl Into<Color>, offset: i32) -> Self {
		Self::new(starting_color, Scheme::Analogous { offset })
	}

	pub fn triad(starting_color: impl Into<Color>) -> Self {
		Self::new(starting_color, Scheme::Triad)
	}

	pub fn split_complementary(starting_color: impl Into<Color>, offset: i32) -> Self {
		Self::new(starting_color, Scheme::SplitComplementary { offset })
	}

	pub fn monochromatic(starting_color: impl Into<Color>, count: i32) -> Self {
		Self::new(starting_color, Scheme::Monochromatic { count })
	}

	pub fn scheme(&self) -> Scheme {
		self.scheme
	}

	pub fn starting_color(&self) -> Color {
		self.colors[0]
	}

	pub fn colors(&self) -> &[Color] {
		&self.colors
	}

	pub fn color(&self, index: usize) -> Option<Color> {
		self.colors.get(index).copied()
	}

	pub fn len(&self) -> usize {
		self.colors.len()
	}

	// Always false; the starting color is part of every palette.
	pub fn is_empty(&self) -> bool {
		self.colors.is_empty()
	}

	pub fn rgb_colors(&self) -> impl Iterator<Item = RgbColor> + '_ {
		self.colors.iter().map(|color| color.to_rgb())
	}

	pub fn hsl_colors(&self) -> impl Iterator<Item = HslColor> + '_ {
		self.colors.iter().map(|color| color.to_hsl())
	}

	pub fn hex_codes(&self) -> impl Iterator<Item = String> + '_ {
		self.rgb_colors().map(hex::format)
	}

	// Writes one HSL color per line, replacing whatever the file held before.
	pub fn write_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
		let path = path.as_ref();
		let mut file = BufWriter::new(File::create(path)?);

		for color in self.hsl_colors() {
			writeln!(file, "{color}")?;
		}
		file.flush()?;

		log::info!("wrote {} palette of {} colors to {}", self.scheme.name(), self.len(), path.display());
		Ok(())
	}
}

impl Default for Palette {
	fn default() -> Self {
		Self::complementary(HslColor::default())
	}
}

// Palettes are equal when they hold equal colors in the same order, whatever scheme produced them.
impl PartialEq for Palette {
	fn eq(&self, other: &Self) -> bool {
		self.colors == other.colors
	}
}

impl fmt::Display for Palette {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "[")?;
		for (index, color) in self.colors.iter().enumerate() {
			if index > 0 {
				write!(f, ", ")?;
			}
			write!(f, "{color}")?;
		}
		write!(f, "]\nTotal colors: {}.", self.len())
	}
}
