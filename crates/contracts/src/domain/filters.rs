//! Category / brand / SKU filter context shared by the list views.

/// Sentinel option meaning "no constraint" in the category and brand selects.
pub const ALL_OPTION: &str = "Todas";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListFilter {
    pub categoria: String,
    pub marca: String,
    pub sku: String,
}

impl Default for ListFilter {
    fn default() -> Self {
        Self {
            categoria: ALL_OPTION.to_string(),
            marca: ALL_OPTION.to_string(),
            sku: String::new(),
        }
    }
}

impl ListFilter {
    /// Query parameters for the active constraints only: "Todas" and blank
    /// SKU input contribute nothing.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if self.categoria != ALL_OPTION && !self.categoria.is_empty() {
            pairs.push(("categoria", self.categoria.clone()));
        }
        if self.marca != ALL_OPTION && !self.marca.is_empty() {
            pairs.push(("marca", self.marca.clone()));
        }
        let sku = self.sku.trim();
        if !sku.is_empty() {
            pairs.push(("sku", sku.to_string()));
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filter_has_no_constraints() {
        assert!(ListFilter::default().query_pairs().is_empty());
    }

    #[test]
    fn only_active_constraints_are_emitted() {
        let filter = ListFilter {
            categoria: "Electro".to_string(),
            marca: ALL_OPTION.to_string(),
            sku: "  12345  ".to_string(),
        };
        assert_eq!(
            filter.query_pairs(),
            vec![
                ("categoria", "Electro".to_string()),
                ("sku", "12345".to_string()),
            ]
        );
    }
}
