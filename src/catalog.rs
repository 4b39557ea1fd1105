//! Product catalog: which warehouse stocks a product and what one unit weighs.

use std::collections::HashMap;

use serde::Serialize;

use crate::route::Location;
use crate::traits::ProductCatalog;

/// A stocked product.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    pub code: String,
    /// Home warehouse; every product is stocked in exactly one.
    pub warehouse: Location,
    /// Unit weight in kilograms.
    pub unit_weight: f64,
}

/// In-memory catalog keyed by product code.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: HashMap<String, Product>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a product, returning the previous entry for the code.
    pub fn insert(&mut self, product: Product) -> Option<Product> {
        self.products.insert(product.code.clone(), product)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn products(&self) -> impl Iterator<Item = &Product> {
        self.products.values()
    }
}

impl ProductCatalog for Catalog {
    fn product(&self, code: &str) -> Option<&Product> {
        self.products.get(code)
    }
}

impl FromIterator<Product> for Catalog {
    fn from_iter<I: IntoIterator<Item = Product>>(iter: I) -> Self {
        let mut catalog = Catalog::new();
        for product in iter {
            catalog.insert(product);
        }
        catalog
    }
}
