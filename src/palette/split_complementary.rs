// Copyright (C) 2023 Aaron Yeoh Cruz <zeyonaut@gmail.com>
// SPDX-License-Identifier: MPL-2.0

// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::color::HslColor;

// Both accents take the same forward rotation, so they come out identical.
pub fn generate(start: HslColor, offset: i32) -> Vec<HslColor> {
	let accent = start.rotated(offset);
	vec![accent, accent]
}
