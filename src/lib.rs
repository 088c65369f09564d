// Copyright (C) 2023 Aaron Yeoh Cruz <zeyonaut@gmail.com>
// SPDX-License-Identifier: MPL-2.0

// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

#[path = "color/_.rs"]
pub mod color;
pub mod config;
pub mod error;
#[path = "palette/_.rs"]
pub mod palette;

pub use self::{
	color::{Color, HexColor, HslColor, RgbColor},
	config::Config,
	error::{Error, Result},
	palette::{Palette, Scheme},
};

pub const APP_NAME: &str = "huewheel";
