// SPDX-License-Identifier: MPL-2.0
//! Custom Iced widgets.

pub mod wheel_gate;

pub use wheel_gate::wheel_gate;
