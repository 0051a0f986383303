// SPDX-FileCopyrightText: 2025 Knitli Inc. <knitli@knit.li>
// SPDX-FileContributor: Adam Poulemanos <adam@knit.li>
// SPDX-License-Identifier: MIT OR Apache-2.0
#![allow(unused_imports)]

#[cfg(feature = "hashers")]
mod hash_help;
#[cfg(feature = "hashers")]
pub use hash_help::hash_bytes;

mod fatal;
pub use fatal::{exit_impl_limit_exceeded, exit_out_of_memory};
