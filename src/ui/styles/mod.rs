// SPDX-License-Identifier: MPL-2.0
//! Centralized styles shared by the pages.

pub mod button;
