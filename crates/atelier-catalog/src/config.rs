/// Configuration for the catalog service.
///
/// Passed explicitly at construction; the service never reads ambient
/// environment state.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Currency assigned to plans whose input carries none.
    pub default_currency: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            default_currency: "USD".to_string(),
        }
    }
}
