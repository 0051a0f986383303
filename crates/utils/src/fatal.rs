// SPDX-FileCopyrightText: 2025 Knitli Inc. <knitli@knit.li>
// SPDX-FileContributor: Adam Poulemanos <adam@knit.li>
// SPDX-License-Identifier: MIT OR Apache-2.0
//! Environmental/fatal conditions that terminate the process immediately.
//!
//! Every arena, interner, and source-manager buffer in the front-end core is
//! addressed by a `u32` ID that is baked into every other data structure as
//! soon as it is handed out. There is no way to recover from allocation
//! failure or 32-bit address-space exhaustion partway through a session
//! without leaving dangling IDs, so — exactly like `out_of_memory` and
//! `translation_limit_exceeded` in the original `prelude.h` — these print a
//! short diagnostic to stderr and exit the process rather than unwind.

/// Exits because an allocation failed.
pub fn exit_out_of_memory() -> ! {
    tracing::error!("fatal error: out of memory");
    eprintln!("fatal error: out of memory");
    std::process::exit(1)
}

/// Exits because a 32-bit ID/address-space limit was exceeded.
pub fn exit_impl_limit_exceeded() -> ! {
    tracing::error!("fatal error: implementation limit exceeded");
    eprintln!("fatal error: implementation limit exceeded");
    std::process::exit(1)
}
