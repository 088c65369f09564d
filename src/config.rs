// Copyright (C) 2023 Aaron Yeoh Cruz <zeyonaut@gmail.com>
// SPDX-License-Identifier: MPL-2.0

// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::{fs::File, path::PathBuf};

use kdl::{KdlDocument, KdlValue};

use crate::{
	color::{hex, Color, RgbColor},
	palette::Scheme,
	APP_NAME,
};

pub struct Config {
	pub base_color: Color,
	pub scheme: Scheme,
	pub export_path: Option<PathBuf>,
}

impl Default for Config {
	fn default() -> Self {
		Self {
			base_color: Color::default(),
			scheme: Scheme::Complementary,
			export_path: None,
		}
	}
}

impl Config {
	// Reads the config file, creating an empty one (and returning `None`) if there is none yet.
	pub fn load() -> Option<Self> {
		let mut config_file_path = dirs::config_dir()?;
		config_file_path.push(APP_NAME);
		if !config_file_path.exists() {
			std::fs::create_dir_all(&config_file_path).ok()?;
		}
		config_file_path.push(format!("{APP_NAME}.kdl"));
		if !config_file_path.exists() {
			File::create(&config_file_path).ok()?;
			log::debug!("created empty config file at {}", config_file_path.display());
			return None;
		}

		let config_file_data = std::fs::read_to_string(&config_file_path).ok()?;
		Self::from_kdl(&config_file_data)
	}

	// Settings that are missing or malformed keep their default.
	pub fn from_kdl(config_file_data: &str) -> Option<Self> {
		let config_document = config_file_data.parse::<KdlDocument>().map_err(|error| log::warn!("could not parse config: {error}")).ok()?;

		let default = Self::default();

		let base_color = parse_setting(&config_document, "base-color", parse_kdl_hex).map(Color::Rgb).unwrap_or(default.base_color);
		let scheme = parse_setting(&config_document, "palette", parse_kdl_scheme).unwrap_or(default.scheme);
		let export_path = parse_setting(&config_document, "export-path", parse_kdl_string).map(PathBuf::from).or(default.export_path);
		Some(Config {
			base_color,
			scheme,
			export_path,
		})
	}
}

fn parse_setting<'a, T>(document: &'a KdlDocument, name: &str, parse: impl FnOnce(&[&'a KdlValue]) -> Option<T>) -> Option<T> {
	let values = document.get_args(name);
	if values.is_empty() {
		return None;
	}
	let setting = parse(&values);
	match setting {
		Some(_) => log::debug!("applied config setting {name}"),
		None => log::warn!("ignoring malformed config setting {name}"),
	}
	setting
}

fn parse_kdl_string<'a>(values: &[&'a KdlValue]) -> Option<&'a str> {
	let [value] = values else { return None };
	value.as_string()
}

fn parse_kdl_hex(values: &[&KdlValue]) -> Option<RgbColor> {
	hex::parse(parse_kdl_string(values)?).ok()
}

// A scheme name, optionally followed by its integer parameter.
fn parse_kdl_scheme(values: &[&KdlValue]) -> Option<Scheme> {
	let (name, parameter) = match values {
		[name] => (name.as_string()?, None),
		[name, parameter] => (name.as_string()?, Some(i32::try_from(parameter.as_i64()?).ok()?)),
		_ => return None,
	};
	Scheme::from_name(name, parameter)
}
