/// Errors preparing an uploaded image for lookup.
///
/// The cascade itself never fails: a lookup that matches nothing is a
/// `LookupOutcome::NotFound`, not an error.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("lookup.image_empty")]
    ImageEmpty,
    #[error("lookup.image_dimensions_mismatch")]
    DimensionsMismatch,
    #[error("lookup.image_invalid")]
    ImageInvalid,
    #[error("lookup.image_storage")]
    ImageStorage(#[from] std::io::Error),
}
