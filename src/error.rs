// Copyright (C) 2023 Aaron Yeoh Cruz <zeyonaut@gmail.com>
// SPDX-License-Identifier: MPL-2.0

// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::io;

// Every way an operation in this crate can fail.
// Numeric constructors never fail; they normalize their input instead.
#[derive(Debug, derive_more::Display)]
pub enum Error {
	// The input does not look like `#rgb`, `rgb`, `#rrggbb` or `rrggbb`.
	#[display(fmt = "unparseable hex color code {:?}", _0)]
	Format(String),
	// Writing a palette to disk failed.
	#[display(fmt = "could not write palette: {}", _0)]
	Io(io::Error),
}

impl std::error::Error for Error {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self {
			Self::Format(_) => None,
			Self::Io(error) => Some(error),
		}
	}
}

impl From<io::Error> for Error {
	fn from(error: io::Error) -> Self {
		Self::Io(error)
	}
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
