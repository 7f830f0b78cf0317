use std::sync::Arc;

use crate::model::operation::{Addition, Multiplication, Operation};

/// A named operation offered on the main menu.
#[derive(Debug, Clone)]
pub struct CatalogEntry {
    name: String,
    operation: Arc<dyn Operation>,
}

impl CatalogEntry {
    #[must_use]
    pub fn new(name: impl Into<String>, operation: Arc<dyn Operation>) -> Self {
        Self {
            name: name.into(),
            operation,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn operation(&self) -> &dyn Operation {
        self.operation.as_ref()
    }
}

/// Ordered set of operations a quiz can be run with.
///
/// Order is menu order. Indices are 0-based; front ends that show 1-based
/// positions convert before calling into the controller.
#[derive(Debug, Clone, Default)]
pub struct OperationCatalog {
    entries: Vec<CatalogEntry>,
}

impl OperationCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Addition then Multiplication.
    #[must_use]
    pub fn standard() -> Self {
        Self::new()
            .with_operation("Addition", Arc::new(Addition))
            .with_operation("Multiplication", Arc::new(Multiplication))
    }

    #[must_use]
    pub fn with_operation(mut self, name: impl Into<String>, operation: Arc<dyn Operation>) -> Self {
        self.entries.push(CatalogEntry::new(name, operation));
        self
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&CatalogEntry> {
        self.entries.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.iter()
    }

    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(CatalogEntry::name).collect()
    }
}
