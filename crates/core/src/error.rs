// SPDX-FileCopyrightText: 2025 Knitli Inc. <knitli@knit.li>
// SPDX-FileContributor: Adam Poulemanos <adam@knit.li>
// SPDX-License-Identifier: MIT OR Apache-2.0
//! A `thiserror`-derived error type paired with a crate-local `Result`
//! alias.
//!
//! It's empty because every failure mode a
//! [`crate::session::Session`] operation can hit is already handled
//! elsewhere in this core — allocation/ID-space exhaustion exits the
//! process immediately via `joc_utils::exit_*`, and lexical malformation is
//! reported as data through [`joc_diagnostics`], not returned as an `Err`.
//! This type exists so a future fallible operation at the session boundary
//! has somewhere to land without a breaking API change.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {}

pub type Result<T> = std::result::Result<T, CoreError>;
