#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("unsupported feature: {feature}")]
    UnknownFeature { feature: String },
}
