// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! Localization uses the Fluent system with `.ftl` files embedded from
//! `assets/i18n/`. The locale is picked from the CLI, the config, or the
//! system settings, falling back to `en-US`.

pub mod fluent;

pub use fluent::{I18n, DEFAULT_LOCALE};
