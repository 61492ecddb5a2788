//! Built-in artwork and background catalogs.
//!
//! Static name → constructor tables, initialized once on first use. Every
//! entry builds its node tree from scratch per export pass; nothing here is
//! a persistent document.

mod backgrounds;
mod beacon;
mod corona;
mod gate;
mod triskel;

use std::collections::BTreeMap;
use std::sync::OnceLock;

use emblem_core::Node;

/// Constructor for a catalog entry.
pub type NodeFactory = fn() -> Node;

static ARTWORK: OnceLock<BTreeMap<&'static str, NodeFactory>> = OnceLock::new();
static BACKGROUNDS: OnceLock<BTreeMap<&'static str, NodeFactory>> = OnceLock::new();

/// Named artwork pieces.
pub fn artwork() -> &'static BTreeMap<&'static str, NodeFactory> {
    ARTWORK.get_or_init(|| {
        BTreeMap::from([
            ("beacon", beacon::build as NodeFactory),
            ("corona", corona::build as NodeFactory),
            ("gate", gate::build as NodeFactory),
            ("triskel", triskel::build as NodeFactory),
        ])
    })
}

/// Named background gradients.
pub fn backgrounds() -> &'static BTreeMap<&'static str, NodeFactory> {
    BACKGROUNDS.get_or_init(|| {
        BTreeMap::from([
            ("dawn", backgrounds::dawn as NodeFactory),
            ("slate", backgrounds::slate as NodeFactory),
            ("tide", backgrounds::tide as NodeFactory),
        ])
    })
}
