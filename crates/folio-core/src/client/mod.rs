//! Client metadata extracted from request headers.
//!
//! All parsing here is best-effort heuristics over untrusted header
//! strings; unknown values collapse to literal "Unknown" labels.

mod device;
mod geo;
mod referer;

pub use device::{DeviceInfo, DeviceType};
pub use geo::{flag_emoji, is_lookup_candidate, resolve_location, Location};
pub use referer::SourcePlatform;

/// Everything we know about the caller of a tracked request.
#[derive(Debug, Clone)]
pub struct ClientInfo {
    /// Raw client IP, possibly a comma-separated forwarding chain.
    pub ip: String,
    pub user_agent: String,
    pub referer: String,
    pub device: DeviceInfo,
}

impl ClientInfo {
    /// Build from raw header values. Missing headers should be passed as
    /// their conventional defaults ("unknown" / "Direct visit").
    pub fn from_headers(ip: String, user_agent: String, referer: String) -> Self {
        let device = DeviceInfo::parse(&user_agent);
        Self {
            ip,
            user_agent,
            referer,
            device,
        }
    }

    /// The address to geolocate: first hop of a forwarding chain.
    pub fn lookup_ip(&self) -> &str {
        self.ip.split(',').next().unwrap_or("").trim()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_ip_takes_first_forwarded_hop() {
        let info = ClientInfo::from_headers(
            "203.0.113.7, 10.0.0.1".to_string(),
            "unknown".to_string(),
            "Direct visit".to_string(),
        );
        assert_eq!(info.lookup_ip(), "203.0.113.7");
    }
}
