//! Builds the flat, category-grouped entry list the browser works on.

use crate::catalog::{Catalog, ServiceInfo};
use tracing::debug;

/// One catalog service as the browser sees it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: String,
    /// Sampled once when the entry list is built.
    pub installed: bool,
}

/// Order `services` by `category_order`, keeping the catalog's own order
/// inside each category. Services whose category is not in the order list
/// are dropped.
pub fn group_by_category(services: &[ServiceInfo], category_order: &[String]) -> Vec<ServiceInfo> {
    let mut grouped = Vec::with_capacity(services.len());
    for category in category_order {
        grouped.extend(
            services
                .iter()
                .filter(|s| &s.category == category)
                .cloned(),
        );
    }

    if grouped.len() < services.len() {
        debug!(
            omitted = services.len() - grouped.len(),
            "services with unordered categories are hidden"
        );
    }

    grouped
}

/// Build the entry list from `catalog`, running each installed check once.
pub fn build_entries<C: Catalog + ?Sized>(catalog: &C) -> Vec<Entry> {
    let services = catalog.services();
    let order = catalog.category_order();

    group_by_category(&services, &order)
        .into_iter()
        .map(|service| {
            let installed = catalog.is_installed(&service.id);
            Entry {
                id: service.id,
                name: service.name,
                description: service.description,
                category: service.category,
                installed,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CatalogError, Installer};
    use std::cell::RefCell;

    struct FakeCatalog {
        services: Vec<ServiceInfo>,
        order: Vec<String>,
        installed: Vec<&'static str>,
        checks: RefCell<Vec<String>>,
    }

    impl Catalog for FakeCatalog {
        fn services(&self) -> Vec<ServiceInfo> {
            self.services.clone()
        }

        fn category_order(&self) -> Vec<String> {
            self.order.clone()
        }

        fn is_installed(&self, id: &str) -> bool {
            self.checks.borrow_mut().push(id.to_string());
            self.installed.iter().any(|i| *i == id)
        }

        fn installer_for(&self, id: &str) -> Result<Installer, CatalogError> {
            Err(CatalogError::UnknownService(id.to_string()))
        }
    }

    fn fake() -> FakeCatalog {
        FakeCatalog {
            services: vec![
                ServiceInfo::new("redis", "Redis", "cache", "Databases"),
                ServiceInfo::new("nginx", "Nginx", "web", "Web Servers"),
                ServiceInfo::new("postgresql", "PostgreSQL", "sql", "Databases"),
                ServiceInfo::new("orphan", "Orphan", "no order", "Misc"),
                ServiceInfo::new("caddy", "Caddy", "web", "Web Servers"),
            ],
            order: vec![
                "Web Servers".to_string(),
                "Storage".to_string(),
                "Databases".to_string(),
            ],
            installed: vec!["postgresql"],
            checks: RefCell::new(Vec::new()),
        }
    }

    #[test]
    fn test_grouping_follows_category_order() {
        let entries = build_entries(&fake());
        let ids: Vec<&str> = entries.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["nginx", "caddy", "redis", "postgresql"]);
    }

    #[test]
    fn test_unordered_category_is_omitted() {
        let entries = build_entries(&fake());
        assert!(entries.iter().all(|e| e.category != "Misc"));
    }

    #[test]
    fn test_installed_flag_cached_from_single_check() {
        let catalog = fake();
        let entries = build_entries(&catalog);

        let pg = entries
            .iter()
            .find(|e| e.id == "postgresql")
            .expect("postgresql entry");
        assert!(pg.installed);
        assert!(entries.iter().filter(|e| e.id != "postgresql").all(|e| !e.installed));

        // Exactly one check per shown entry
        assert_eq!(catalog.checks.borrow().len(), entries.len());
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = FakeCatalog {
            services: Vec::new(),
            order: vec!["Databases".to_string()],
            installed: Vec::new(),
            checks: RefCell::new(Vec::new()),
        };
        assert!(build_entries(&catalog).is_empty());
    }
}
