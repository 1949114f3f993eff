/// Location data for a public IP address.
///
/// Every field other than `ip` may be empty when the geo-IP service omits it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeoRecord {
    pub ip: String,
    pub country: String,
    pub country_code: String,
    pub city: String,
    pub isp: String,
}
