//! Core library for the embedhello demo.
//!
//! Provides the [`assets::AssetStore`], a process-wide read-only store of text and CSV
//! files compiled into the binary, along with the [`greeting::hello`] operation that the
//! `embedhello` binary prints before the assets.
//!
//! Assets come in two fixed [`group::AssetGroup`]s, selected by glob when the crate is built:
//! - [`group::AssetGroup::Text`] — every `assets/*.txt`
//! - [`group::AssetGroup::Csv`] — every `assets/*.csv`
//!
//! `assets/hello.txt` is additionally exposed on its own through [`assets::bound_asset`].

pub mod assets;
pub mod error;
pub mod greeting;
pub mod group;
