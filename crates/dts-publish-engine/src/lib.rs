pub mod io;
pub mod normalize;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use io::*;
pub use normalize::{
    CatchAllPlacement, NamespaceName, NormalizeError, NormalizeOptions, normalize, scan,
};
