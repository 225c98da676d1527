//! Input adapters for the viewer.
//!
//! This module contains adapters that receive input from the windowing system
//! and translate it into per-frame input snapshots.

pub mod gui;
