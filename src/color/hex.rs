// Copyright (C) 2023 Aaron Yeoh Cruz <zeyonaut@gmail.com>
// SPDX-License-Identifier: MPL-2.0

// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::{fmt, str::FromStr, sync::LazyLock};

use regex::Regex;

use super::RgbColor;
use crate::error::{Error, Result};

// Three or six hex digits, optionally behind a single '#'.
static HEX_CODE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^#?([0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").expect("hex code pattern is valid"));

pub fn is_parseable(code: &str) -> bool {
	HEX_CODE.is_match(code.trim())
}

// Accepts `#rgb`, `rgb`, `#rrggbb` and `rrggbb` in any case, with surrounding whitespace.
// Shorthand digits are repeated, so `e` reads as `ee`.
pub fn parse(code: &str) -> Result<RgbColor> {
	let unparseable = || Error::Format(code.to_owned());

	let digits = HEX_CODE.captures(code.trim()).and_then(|captures| captures.get(1)).ok_or_else(unparseable)?.as_str().to_ascii_lowercase();
	let digits = if digits.len() == 3 { digits.chars().flat_map(|digit| [digit, digit]).collect() } else { digits };

	let channel = |index: usize| u8::from_str_radix(&digits[2 * index..2 * index + 2], 16).map_err(|_| unparseable());
	Ok(RgbColor([channel(0)?, channel(1)?, channel(2)?]))
}

// Six lowercase digits, no leading '#'.
pub fn format(color: RgbColor) -> String {
	let RgbColor([red, green, blue]) = color;
	format!("{red:02x}{green:02x}{blue:02x}")
}

// An RGB color that reads and writes as a hex code.
// The code is derived from the channels whenever it is asked for, so it cannot go stale.
#[repr(transparent)]
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Debug, derive_more::From, derive_more::Into, derive_more::Deref, derive_more::DerefMut)]
pub struct HexColor(pub RgbColor);

impl HexColor {
	pub fn new(red: i32, green: i32, blue: i32) -> Self {
		Self(RgbColor::new(red, green, blue))
	}

	pub fn code(&self) -> String {
		format(self.0)
	}

	pub fn set_code(&mut self, code: &str) -> Result<()> {
		self.0 = parse(code)?;
		Ok(())
	}
}

impl FromStr for HexColor {
	type Err = Error;

	fn from_str(code: &str) -> Result<Self> {
		parse(code).map(Self)
	}
}

impl fmt::Display for HexColor {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "#{}", self.code())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const PARSEABLE: [(&str, [u8; 3]); 10] = [
		("000   ", [0, 0, 0]),
		(" \n000000", [0, 0, 0]),
		("#fff\n", [255, 255, 255]),
		("#Ff0000\t", [255, 0, 0]),
		("0ea", [0, 238, 170]),
		("789aBc", [120, 154, 188]),
		("#bCa", [187, 204, 170]),
		("AFDB01", [175, 219, 1]),
		("69EFaa", [105, 239, 170]),
		("#ab3", [170, 187, 51]),
	];

	const UNPARSEABLE: [&str; 9] = ["0000", "#gaa", "asdf #123", "-1-2-3", "#aabbzz", "7017234", "##fff", "", "# fff"];

	#[test]
	fn parses_every_accepted_form() {
		for (code, expected) in PARSEABLE {
			assert!(is_parseable(code), "{code:?} should be parseable");
			assert_eq!(parse(code).ok(), Some(RgbColor(expected)), "parsing {code:?}");
		}
	}

	#[test]
	fn rejects_malformed_codes() {
		for code in UNPARSEABLE {
			assert!(!is_parseable(code), "{code:?} should not be parseable");
			assert!(matches!(parse(code), Err(Error::Format(input)) if input == code), "parsing {code:?}");
		}
	}

	#[test]
	fn formats_as_six_lowercase_digits() {
		let fixtures = [([0, 0, 0], "000000"), ([255, 0, 0], "ff0000"), ([0, 255, 0], "00ff00"), ([0, 0, 255], "0000ff"), ([120, 160, 200], "78a0c8"), ([60, 120, 4], "3c7804")];
		for (channels, code) in fixtures {
			assert_eq!(format(RgbColor(channels)), code);
		}
	}

	#[test]
	fn formatting_a_parsed_code_canonicalizes_it() {
		let canonical = ["000000", "000000", "ffffff", "ff0000", "00eeaa", "789abc", "bbccaa", "afdb01", "69efaa", "aabb33"];
		for ((code, _), expected) in PARSEABLE.into_iter().zip(canonical) {
			assert_eq!(parse(code).map(format).ok().as_deref(), Some(expected));
		}
	}

	#[test]
	fn hex_color_code_follows_its_channels() {
		let mut color = HexColor::new(60, 120, 180);
		assert_eq!(color.code(), "3c78b4");
		color.set_red(257);
		color.set_blue(-4);
		assert_eq!(color.code(), "017800");
		assert_eq!(color.to_string(), "#017800");
		assert!(color.set_code("#ab3").is_ok());
		assert_eq!(*color, RgbColor([170, 187, 51]));
		assert!(color.set_code("##fff").is_err());
		assert_eq!(color.code(), "aabb33");
	}

	#[test]
	fn hex_color_from_str() {
		assert_eq!("#Ff0000".parse::<HexColor>().ok(), Some(HexColor::new(255, 0, 0)));
		assert!("7017234".parse::<HexColor>().is_err());
	}
}
