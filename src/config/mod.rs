//! Configuration module

mod site;

pub use site::AddressScheme;
pub use site::Grouping;
pub use site::IndexConfig;
pub use site::ServerConfig;
pub use site::SiteConfig;
