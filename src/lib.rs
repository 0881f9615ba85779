// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod app;
pub mod breakdown;
pub mod catalog;
pub mod cli;
pub mod commands;
pub mod db;
pub mod errors;
pub mod format;
pub mod logging;
pub mod models;
pub mod register;
pub mod storage;
pub mod summary;
pub mod utils;
