pub mod geometry_provider;
pub mod spherical;

pub use geometry_provider::GeometryProvider;
pub use spherical::SphericalGeometry;
