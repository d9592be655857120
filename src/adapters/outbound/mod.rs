mod bigdatacloud_reverse_geocoder;
mod ip_api_com_provider;
mod ipapi_co_provider;
mod ipify_self_address;
mod ipwhois_provider;
mod json_fields;
mod reqwest_transport;

pub use bigdatacloud_reverse_geocoder::{BigDataCloudReverseGeocoder, BIGDATACLOUD_URL};
pub use ip_api_com_provider::{IpApiComProvider, IP_API_COM_URL};
pub use ipapi_co_provider::{IpapiCoProvider, IPAPI_CO_URL};
pub use ipify_self_address::{IpifySelfAddress, IPIFY_URL};
pub use ipwhois_provider::{IpWhoisProvider, IPWHOIS_URL};
pub use reqwest_transport::ReqwestTransport;
