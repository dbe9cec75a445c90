mod coordinate_adjuster;
mod portal_client;

pub use coordinate_adjuster::CoordinateAdjuster;
pub use portal_client::PortalClient;
