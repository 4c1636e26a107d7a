// ABOUTME: Domain model module wiring for the Plateful core crate
// ABOUTME: Re-exports meals, user profiles, and preference signals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Plateful

//! Core domain models shared across the platform.

mod meal;
mod preference;
mod profile;

pub use meal::Meal;
pub use preference::PreferenceSignal;
pub use profile::{ActivityLevel, HealthGoal, Sex, UserProfile};
