//! # Catalog Module
//!
//! The registry of installable services and the contract the browser and the
//! CLI use to reach it.
//!
//! ## Contract
//!
//! | Operation | Method |
//! |-----------|--------|
//! | list all services | [`Catalog::services`] |
//! | category display order | [`Catalog::category_order`] |
//! | installed check | [`Catalog::is_installed`] |
//! | install action lookup | [`Catalog::installer_for`] |
//!
//! The browser only ever reads from the catalog. Installation happens after
//! the browser has exited, through the [`Installer`] returned by
//! [`Catalog::installer_for`].
//!
//! ## Built-in Catalog
//!
//! [`BuiltinCatalog`] is backed by the static table in [`registry`]. Each
//! service carries a [`Probe`] for its installed check and a [`Recipe`] of
//! external commands for its install action.

pub mod executor;
pub mod probe;
pub mod recipe;
pub mod registry;

pub use probe::Probe;
pub use recipe::{Recipe, Step, StepAction};
pub use registry::{BuiltinCatalog, CATEGORY_ORDER};

use thiserror::Error;

/// Errors surfaced by the catalog's lookup and install operations.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Service {0} is not supported yet")]
    UnknownService(String),

    #[error("failed to {step}: exited with status {code}")]
    StepFailed { step: String, code: i32 },

    #[error("failed to run `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

/// Display data for one catalog service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceInfo {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: String,
}

impl ServiceInfo {
    pub fn new(id: &str, name: &str, description: &str, category: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            category: category.to_string(),
        }
    }
}

/// The zero-argument install action for one service.
#[derive(Debug, Clone)]
pub struct Installer {
    id: String,
    recipe: &'static Recipe,
}

impl Installer {
    pub fn new(id: &str, recipe: &'static Recipe) -> Self {
        Self {
            id: id.to_string(),
            recipe,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn recipe(&self) -> &'static Recipe {
        self.recipe
    }

    /// Run the recipe to completion with the terminal handed to the child
    /// processes. Must only be called once the browser has released the
    /// terminal.
    pub async fn run(&self) -> Result<(), CatalogError> {
        executor::run_recipe(&self.id, self.recipe).await
    }
}

/// Read access to a registry of installable services.
pub trait Catalog {
    /// All services, in the registry's native order.
    fn services(&self) -> Vec<ServiceInfo>;

    /// Category labels in display order.
    fn category_order(&self) -> Vec<String>;

    /// Whether the service is already present on this host.
    ///
    /// Never fails: anything that prevents the check from running counts as
    /// "not installed".
    fn is_installed(&self, id: &str) -> bool;

    /// Resolve the install action for `id`.
    fn installer_for(&self, id: &str) -> Result<Installer, CatalogError>;
}
