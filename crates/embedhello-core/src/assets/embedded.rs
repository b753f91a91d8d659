//! Compile-time embedded assets.
//!
//! Everything here is loaded from the workspace-level `assets/` directory. The
//! bound asset uses [`include_bytes!`], whose path is relative to this source
//! file (`crates/embedhello-core/src/assets/embedded.rs`). The groups use
//! [`rust_embed`], whose `folder` is relative to the crate manifest.
//!
//! ## Adding a new asset
//!
//! 1. Drop a `.txt` or `.csv` file into `assets/`
//! 2. Rebuild; the file joins the group whose glob matches it
//!
//! `build.rs` watches `assets/`, so adding or removing a file re-runs the embed
//! derive on the next build.
//!
//! ## Warning
//!
//! Do NOT rename or move `assets/hello.txt` without updating [`HELLO_TXT`].
//! `debug-embed` is enabled so debug builds never read `assets/` at runtime.

use std::borrow::Cow;

use rust_embed::Embed;

use crate::group::AssetGroup;

/// Raw bytes of `assets/hello.txt`.
pub const HELLO_TXT: &[u8] = include_bytes!("../../../../assets/hello.txt");

/// Name of the bound asset inside the text group.
pub const HELLO_TXT_NAME: &str = "hello.txt";

#[derive(Embed)]
#[folder = "../../assets/"]
#[include = "*.txt"]
struct TextFiles;

#[derive(Embed)]
#[folder = "../../assets/"]
#[include = "*.csv"]
struct CsvFiles;

/// All `(name, content)` pairs compiled into `group`.
pub(crate) fn entries(group: AssetGroup) -> Vec<(String, Cow<'static, [u8]>)> {
    match group {
        AssetGroup::Text => collect::<TextFiles>(),
        AssetGroup::Csv => collect::<CsvFiles>(),
    }
}

fn collect<E: Embed>() -> Vec<(String, Cow<'static, [u8]>)> {
    E::iter()
        .filter_map(|name| E::get(&name).map(|file| (name.into_owned(), file.data)))
        .collect()
}
