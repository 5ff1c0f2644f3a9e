//! Repository traits (ports) implemented by the infrastructure layer

mod repositories;

pub use repositories::{AdminRepository, BannerFilter, BannerRepository, RepoResult};
