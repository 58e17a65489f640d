//! Coarse geolocation via the ipapi.co free endpoint.
//!
//! Lookup is best-effort: loopback and private addresses are skipped,
//! and any failure collapses to the default "Unknown location".

use serde::Deserialize;
use tracing::debug;

/// Resolved location for notification messages.
#[derive(Debug, Clone)]
pub struct Location {
    /// "City, Country" label.
    pub label: String,
    /// Country flag, 🌍 when unknown.
    pub flag: String,
}

impl Default for Location {
    fn default() -> Self {
        Self {
            label: "Unknown location".to_string(),
            flag: "🌍".to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct GeoResponse {
    city: Option<String>,
    country_name: Option<String>,
    country_code: Option<String>,
}

/// Whether an address is worth sending to the lookup service.
///
/// Loopback and RFC 1918 private ranges never resolve to anything
/// useful, so they are filtered out before the outbound call.
pub fn is_lookup_candidate(ip: &str) -> bool {
    if ip.is_empty() || ip == "unknown" {
        return false;
    }
    if ip == "::1" || ip.starts_with("127.") {
        return false;
    }
    if ip.starts_with("10.") || ip.starts_with("192.168.") {
        return false;
    }
    // 172.16.0.0/12
    if let Some(rest) = ip.strip_prefix("172.") {
        if let Some(second) = rest.split('.').next() {
            if let Ok(n) = second.parse::<u8>() {
                if (16..=31).contains(&n) {
                    return false;
                }
            }
        }
    }
    true
}

/// Resolve a client address to a coarse location.
pub async fn resolve_location(client: &reqwest::Client, ip: &str) -> Location {
    let ip = ip.trim();
    if !is_lookup_candidate(ip) {
        return Location::default();
    }

    let url = format!("https://ipapi.co/{}/json/", ip);
    let geo: GeoResponse = match client.get(&url).send().await {
        Ok(response) if response.status().is_success() => match response.json().await {
            Ok(geo) => geo,
            Err(e) => {
                debug!("Geolocation response for {} unparseable: {}", ip, e);
                return Location::default();
            }
        },
        Ok(response) => {
            debug!("Geolocation lookup for {} returned {}", ip, response.status());
            return Location::default();
        }
        Err(e) => {
            debug!("Geolocation lookup for {} failed: {}", ip, e);
            return Location::default();
        }
    };

    Location {
        label: format!(
            "{}, {}",
            geo.city.as_deref().unwrap_or("Unknown"),
            geo.country_name.as_deref().unwrap_or("Unknown")
        ),
        flag: geo
            .country_code
            .as_deref()
            .map(flag_emoji)
            .unwrap_or_else(|| "🌍".to_string()),
    }
}

/// Convert an ISO 3166 alpha-2 country code to its flag emoji.
///
/// Each ASCII letter maps to a regional indicator symbol; two of those
/// together render as a flag.
pub fn flag_emoji(country_code: &str) -> String {
    let flag: String = country_code
        .chars()
        .filter(|c| c.is_ascii_alphabetic())
        .filter_map(|c| char::from_u32(0x1F1E6 + (c.to_ascii_uppercase() as u32 - 'A' as u32)))
        .collect();
    if flag.is_empty() {
        "🌍".to_string()
    } else {
        flag
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loopback_and_unknown_are_skipped() {
        assert!(!is_lookup_candidate("unknown"));
        assert!(!is_lookup_candidate(""));
        assert!(!is_lookup_candidate("::1"));
        assert!(!is_lookup_candidate("127.0.0.1"));
    }

    #[test]
    fn test_private_ranges_are_skipped() {
        assert!(!is_lookup_candidate("10.1.2.3"));
        assert!(!is_lookup_candidate("192.168.1.10"));
        assert!(!is_lookup_candidate("172.16.0.1"));
        assert!(!is_lookup_candidate("172.31.255.254"));
    }

    #[test]
    fn test_public_addresses_are_candidates() {
        assert!(is_lookup_candidate("203.0.113.7"));
        assert!(is_lookup_candidate("172.32.0.1"));
        assert!(is_lookup_candidate("2001:db8::1"));
    }

    #[test]
    fn test_flag_emoji() {
        assert_eq!(flag_emoji("EG"), "🇪🇬");
        assert_eq!(flag_emoji("us"), "🇺🇸");
        assert_eq!(flag_emoji(""), "🌍");
    }

    #[tokio::test]
    async fn test_resolve_skips_private_without_network() {
        // Private address short-circuits before any outbound call.
        let client = reqwest::Client::new();
        let location = resolve_location(&client, "127.0.0.1").await;
        assert_eq!(location.label, "Unknown location");
        assert_eq!(location.flag, "🌍");
    }
}
