//! Read-only store of assets bundled into the binary.
//!
//! Asset bytes are compiled in via the [`embedded`] module. On first access
//! they are indexed by group and name into a single process-wide
//! [`AssetStore`]; after that the store is never mutated, so any number of
//! threads may read from it without locking.
//!
//! ## Lookup rules
//!
//! - Names are relative paths inside `assets/` (e.g. `hello.txt`)
//! - Lookups are exact-match; globs only apply when the binary is built
//! - A name outside its group (`greetings.csv` in [`AssetGroup::Text`]) is not found
//!
//! ## Usage
//!
//! ```ignore
//! use embedhello_core::assets;
//! use embedhello_core::group::AssetGroup;
//!
//! let bound = assets::bound_asset();
//! let same = assets::read_asset(AssetGroup::Text, "hello.txt")?;
//! assert_eq!(bound, same);
//! ```

pub mod embedded;

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::sync::OnceLock;

use sha2::{Digest, Sha256};

use crate::error::{AssetError, Result};
use crate::group::AssetGroup;

/// An immutable named byte sequence bundled with the program.
#[derive(Debug, Clone)]
pub struct Asset {
    name: String,
    group: AssetGroup,
    content: Cow<'static, [u8]>,
}

impl Asset {
    /// Relative path of the asset inside `assets/`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Group the asset was registered in.
    pub fn group(&self) -> AssetGroup {
        self.group
    }

    /// Raw content, exactly as bundled.
    pub fn as_bytes(&self) -> &[u8] {
        &self.content
    }

    /// Size of the content in bytes.
    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Borrow the content as UTF-8 text.
    pub fn to_str(&self) -> Result<&str> {
        std::str::from_utf8(&self.content).map_err(|source| AssetError::NotUtf8 {
            name: self.name.clone(),
            source,
        })
    }

    /// Lowercase hex SHA-256 of the content.
    pub fn sha256(&self) -> String {
        hex::encode(Sha256::digest(&self.content))
    }
}

/// Name-keyed index over every embedded asset, partitioned by group.
#[derive(Debug)]
pub struct AssetStore {
    groups: BTreeMap<AssetGroup, BTreeMap<String, Asset>>,
}

static STORE: OnceLock<AssetStore> = OnceLock::new();

impl AssetStore {
    /// The process-wide store, materialized on first call.
    pub fn global() -> &'static AssetStore {
        STORE.get_or_init(Self::load)
    }

    fn load() -> Self {
        let groups = AssetGroup::ALL
            .into_iter()
            .map(|group| {
                let members: BTreeMap<String, Asset> = embedded::entries(group)
                    .into_iter()
                    .map(|(name, content)| {
                        let asset = Asset {
                            name: name.clone(),
                            group,
                            content,
                        };
                        (name, asset)
                    })
                    .collect();
                tracing::debug!(%group, assets = members.len(), "materialized asset group");
                (group, members)
            })
            .collect();

        Self { groups }
    }

    /// Look up the full [`Asset`] record for `name` in `group`.
    pub fn get(&self, group: AssetGroup, name: &str) -> Result<&Asset> {
        tracing::trace!(%group, name, "asset lookup");
        self.groups
            .get(&group)
            .and_then(|members| members.get(name))
            .ok_or_else(|| {
                tracing::debug!(%group, name, "asset not found");
                AssetError::NotFound {
                    name: name.to_string(),
                    group,
                }
            })
    }

    /// Full content of `name` in `group`.
    pub fn read(&self, group: AssetGroup, name: &str) -> Result<&[u8]> {
        self.get(group, name).map(Asset::as_bytes)
    }

    pub fn contains(&self, group: AssetGroup, name: &str) -> bool {
        self.groups
            .get(&group)
            .is_some_and(|members| members.contains_key(name))
    }

    /// Member names of `group`, sorted.
    pub fn names(&self, group: AssetGroup) -> Vec<&str> {
        self.groups
            .get(&group)
            .map(|members| members.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Number of assets in `group`.
    pub fn len(&self, group: AssetGroup) -> usize {
        self.groups.get(&group).map_or(0, BTreeMap::len)
    }
}

/// Content of the bound asset, `hello.txt`.
pub fn bound_asset() -> &'static [u8] {
    embedded::HELLO_TXT
}

/// Read `name` from `group` in the process-wide store.
pub fn read_asset(group: AssetGroup, name: &str) -> Result<&'static [u8]> {
    AssetStore::global().read(group, name)
}

/// Read `name` from `group` as UTF-8 text.
pub fn read_asset_to_string(group: AssetGroup, name: &str) -> Result<&'static str> {
    AssetStore::global().get(group, name)?.to_str()
}

/// The fixed set of asset groups.
pub fn list_asset_groups() -> &'static [AssetGroup] {
    &AssetGroup::ALL
}
