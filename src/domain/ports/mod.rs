mod geo_provider;
mod json_transport;
mod position_source;
mod reverse_geocoder;
mod self_address;

pub use geo_provider::GeoProvider;
pub use json_transport::JsonTransport;
pub use position_source::PositionSource;
pub use reverse_geocoder::ReverseGeocoder;
pub use self_address::SelfAddressLookup;
