use thiserror::Error;

/// Failures surfaced by a peer-window registry implementation.
///
/// The simulation core never produces these; storage-backed registries map
/// platform failures into them instead of panicking.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("shared storage unavailable")]
    StorageUnavailable,
    #[error("failed to read registry state: {0}")]
    Read(String),
    #[error("failed to persist registry state: {0}")]
    Write(String),
}
