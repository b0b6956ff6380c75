// Library exports for pkgver
pub mod manifest;
pub mod resolver;
pub mod walk;

pub use resolver::{ResolveError, Resolution, package_version, package_version_from, resolve};
