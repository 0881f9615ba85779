// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Static category reference data. Order matters: breakdowns are emitted in
//! catalog order.

use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Category {
    pub key: &'static str,
    pub name: &'static str,
    pub color: &'static str,
    pub icon: &'static str,
}

pub static CATEGORIES: [Category; 6] = [
    Category {
        key: "purchases",
        name: "Compras",
        color: "#5636D3",
        icon: "shopping-bag",
    },
    Category {
        key: "food",
        name: "Alimentação",
        color: "#FF872C",
        icon: "coffee",
    },
    Category {
        key: "transport",
        name: "Transporte",
        color: "#E83F5B",
        icon: "crosshair",
    },
    Category {
        key: "salary",
        name: "Salário",
        color: "#12A454",
        icon: "dollar-sign",
    },
    Category {
        key: "leisure",
        name: "Lazer",
        color: "#26195C",
        icon: "heart",
    },
    Category {
        key: "studies",
        name: "Estudos",
        color: "#9C001A",
        icon: "book",
    },
];

static BY_KEY: Lazy<HashMap<&'static str, &'static Category>> =
    Lazy::new(|| CATEGORIES.iter().map(|c| (c.key, c)).collect());

pub fn categories() -> &'static [Category] {
    &CATEGORIES
}

pub fn find(key: &str) -> Option<&'static Category> {
    BY_KEY.get(key).copied()
}

/// Display name for a key, falling back to the raw key for unknown ones.
pub fn display_name(key: &str) -> &str {
    find(key).map(|c| c.name).unwrap_or(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_matches_catalog_order() {
        for c in categories() {
            assert_eq!(find(c.key), Some(c));
        }
        assert!(find("category").is_none());
        assert_eq!(display_name("gifts"), "gifts");
        assert_eq!(display_name("food"), "Alimentação");
    }
}
