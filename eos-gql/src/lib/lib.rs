// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

pub mod config;
pub mod error;
pub mod http;
pub mod node;
pub mod state;

pub use crate::error::Error;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub type Result<T, E = Error> = core::result::Result<T, E>;
