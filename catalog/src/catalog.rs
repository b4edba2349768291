//! The fixed list of services the company offers.

/// Every service sold by the company, in display order.
///
/// The order here is the order the carousel renders; nothing downstream
/// re-sorts it.
pub const BUILTIN_SERVICES: [&str; 12] = [
    "Condo complex management",
    "Industrial property management",
    "Property inspections",
    "Property investment management",
    "Property maintenance",
    "Property management",
    "Property sales",
    "Real estate valuation",
    "Rent collection",
    "Rental property management",
    "Repairs & maintenance",
    "Tenant management",
];

/// An ordered, immutable set of service display names.
///
/// Built once at startup and only ever read afterwards. Alternate content
/// sources (tests, a future CMS feed) go through [`Catalog::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    services: Vec<String>,
}

impl Catalog {
    /// The production catalog.
    pub fn builtin() -> Self {
        Self::new(BUILTIN_SERVICES)
    }

    pub fn new<I, S>(services: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            services: services.into_iter().map(Into::into).collect(),
        }
    }

    pub fn services(&self) -> &[String] {
        &self.services
    }

    pub fn len(&self) -> usize {
        self.services.len()
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_has_twelve_services_in_display_order() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.len(), 12);
        assert_eq!(catalog.services()[0], "Condo complex management");
        assert_eq!(catalog.services()[11], "Tenant management");
    }

    #[test]
    fn new_preserves_input_order() {
        let catalog = Catalog::new(["b", "a", "c"]);
        assert_eq!(catalog.services(), ["b", "a", "c"]);
        assert!(!catalog.is_empty());
    }
}
