//! Device, OS, and browser classification from the user-agent string.

use once_cell::sync::Lazy;
use regex::Regex;

static MOBILE_MARKERS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"Mobile|iP(hone|od)|Android|BlackBerry|IEMobile|Kindle|Silk-Accelerated|(hpw|web)OS|Opera M(obi|ini)")
        .unwrap()
});
static TABLET_MARKERS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)tablet|ipad|playbook|silk").unwrap());

static MACOS_VERSION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Mac OS X (\d+[._]\d+([._]\d+)?)").unwrap());
static ANDROID_VERSION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Android (\d+(\.\d+)?)").unwrap());
static IOS_VERSION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"OS (\d+[._]\d+([._]\d+)?)").unwrap());
static EDGE_VERSION: Lazy<Regex> = Lazy::new(|| Regex::new(r"Edg/(\d+(\.\d+)?)").unwrap());
static CHROME_VERSION: Lazy<Regex> = Lazy::new(|| Regex::new(r"Chrome/(\d+(\.\d+)?)").unwrap());
static FIREFOX_VERSION: Lazy<Regex> = Lazy::new(|| Regex::new(r"Firefox/(\d+(\.\d+)?)").unwrap());
static SAFARI_VERSION: Lazy<Regex> = Lazy::new(|| Regex::new(r"Version/(\d+(\.\d+)?)").unwrap());
static IPHONE_MODEL: Lazy<Regex> = Lazy::new(|| Regex::new(r"iPhone\s?(\w+)?").unwrap());
static ANDROID_MODEL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Android.*;\s*([^)]+)\s*Build").unwrap());

/// Coarse device class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceType {
    Desktop,
    Tablet,
    Mobile,
}

impl DeviceType {
    /// Display label with the icon used in notification messages.
    pub fn label(&self) -> &'static str {
        match self {
            DeviceType::Desktop => "🖥️ Desktop",
            DeviceType::Tablet => "📱 Tablet",
            DeviceType::Mobile => "📱 Mobile",
        }
    }
}

/// Parsed device information.
#[derive(Debug, Clone)]
pub struct DeviceInfo {
    pub device_type: DeviceType,
    /// OS with version where detectable, e.g. "macOS 14.2".
    pub os: String,
    /// Browser with version where detectable, e.g. "Chrome 120".
    pub browser: String,
    /// Device model for mobile/tablet, otherwise the device type label.
    pub device_name: String,
    /// The raw user-agent string.
    pub user_agent: String,
}

impl DeviceInfo {
    /// Classify a raw user-agent string. Never fails; anything
    /// unrecognized yields "Unknown" labels.
    pub fn parse(user_agent: &str) -> Self {
        let ua = user_agent.to_lowercase();

        // Tablet check first: Android tablets carry "Android" without
        // "Mobile", which the mobile regex would otherwise miss anyway.
        let device_type = if TABLET_MARKERS.is_match(user_agent)
            || (ua.contains("android") && !ua.contains("mobi"))
        {
            DeviceType::Tablet
        } else if MOBILE_MARKERS.is_match(user_agent) {
            DeviceType::Mobile
        } else {
            DeviceType::Desktop
        };

        let (os, os_version) = detect_os(&ua, user_agent);
        let (browser, browser_version) = detect_browser(&ua, user_agent);
        let model = detect_model(device_type, &ua, user_agent);

        let os_info = match os_version {
            Some(v) => format!("{} {}", os, v),
            None => os.to_string(),
        };
        let browser_info = match browser_version {
            Some(v) => format!("{} {}", browser, v),
            None => browser.to_string(),
        };
        let device_name = model.unwrap_or_else(|| device_type.label().to_string());

        Self {
            device_type,
            os: os_info,
            browser: browser_info,
            device_name,
            user_agent: user_agent.to_string(),
        }
    }
}

fn detect_os(ua: &str, raw: &str) -> (&'static str, Option<String>) {
    if ua.contains("windows nt 10.0") {
        ("Windows 10/11", None)
    } else if ua.contains("windows nt 6.3") {
        ("Windows 8.1", None)
    } else if ua.contains("windows nt 6.2") {
        ("Windows 8", None)
    } else if ua.contains("windows nt 6.1") {
        ("Windows 7", None)
    } else if ua.contains("mac os x") {
        let version = MACOS_VERSION
            .captures(raw)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str().replace('_', "."));
        ("macOS", version)
    } else if ua.contains("android") {
        let version = ANDROID_VERSION
            .captures(raw)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str().to_string());
        ("Android", version)
    } else if ua.contains("iphone") || ua.contains("ipad") {
        let version = IOS_VERSION
            .captures(raw)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str().replace('_', "."));
        if ua.contains("iphone") {
            ("iOS (iPhone)", version)
        } else {
            ("iOS (iPad)", version)
        }
    } else if ua.contains("linux") {
        ("Linux", None)
    } else {
        ("Unknown OS", None)
    }
}

fn detect_browser(ua: &str, raw: &str) -> (&'static str, Option<String>) {
    let capture = |re: &Regex| {
        re.captures(raw)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str().to_string())
    };

    if ua.contains("edg/") {
        ("Edge", capture(&EDGE_VERSION))
    } else if ua.contains("chrome/") && !ua.contains("edg") {
        ("Chrome", capture(&CHROME_VERSION))
    } else if ua.contains("firefox/") {
        ("Firefox", capture(&FIREFOX_VERSION))
    } else if ua.contains("safari/") && !ua.contains("chrome") {
        ("Safari", capture(&SAFARI_VERSION))
    } else if ua.contains("opera/") || ua.contains("opr/") {
        ("Opera", None)
    } else {
        ("Unknown Browser", None)
    }
}

fn detect_model(device_type: DeviceType, ua: &str, raw: &str) -> Option<String> {
    if device_type == DeviceType::Desktop {
        return None;
    }
    if ua.contains("iphone") {
        return Some(
            IPHONE_MODEL
                .find(raw)
                .map(|m| m.as_str().trim().to_string())
                .unwrap_or_else(|| "iPhone".to_string()),
        );
    }
    if ua.contains("ipad") {
        return Some("iPad".to_string());
    }
    if ua.contains("android") {
        return ANDROID_MODEL
            .captures(raw)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str().trim().to_string());
    }
    None
}
