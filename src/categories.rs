// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use once_cell::sync::Lazy;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Category {
    pub key: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
}

// Order matters: breakdowns are emitted in catalog order.
static CATALOG: Lazy<Vec<Category>> = Lazy::new(|| {
    vec![
        Category { key: "purchases", name: "Compras", icon: "shopping-bag", color: "#5636D3" },
        Category { key: "food", name: "Alimentação", icon: "coffee", color: "#FF872C" },
        Category { key: "housing", name: "Casa", icon: "home", color: "#3A86FF" },
        Category { key: "salary", name: "Salário", icon: "dollar-sign", color: "#12A454" },
        Category { key: "car", name: "Carro", icon: "crosshair", color: "#E83F5B" },
        Category { key: "leisure", name: "Lazer", icon: "heart", color: "#26195C" },
        Category { key: "studies", name: "Estudos", icon: "book", color: "#9C001A" },
    ]
});

pub fn all() -> &'static [Category] {
    &CATALOG
}

pub fn find(key: &str) -> Option<&'static Category> {
    CATALOG.iter().find(|c| c.key == key)
}

pub fn contains(key: &str) -> bool {
    find(key).is_some()
}
