// Copyright (C) 2023 Aaron Yeoh Cruz <zeyonaut@gmail.com>
// SPDX-License-Identifier: MPL-2.0

// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::process::ExitCode;

use huewheel::{Config, Palette};

// Program entry point.
fn main() -> ExitCode {
	// Set up the event logger.
	env_logger::init();

	// Missing or unreadable config files fall back to the defaults.
	let config = Config::load().unwrap_or_default();

	let palette = Palette::new(config.base_color, config.scheme);

	match config.export_path {
		Some(export_path) => {
			if let Err(error) = palette.write_to_file(export_path) {
				log::error!("{error}");
				return ExitCode::FAILURE;
			}
		},
		None => {
			for code in palette.hex_codes() {
				println!("#{code}");
			}
		},
	}

	ExitCode::SUCCESS
}
