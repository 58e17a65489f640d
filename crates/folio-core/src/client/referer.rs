//! Referring-page classification for visit tracking.

/// Named source platform derived from the referer header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourcePlatform {
    pub platform: &'static str,
    pub emoji: &'static str,
    /// The referring URL worth reporting, or "No referer".
    pub profile_url: String,
}

impl SourcePlatform {
    /// Classify a referer header value into a known platform.
    pub fn detect(referer: &str) -> Self {
        let lower = referer.to_lowercase();

        if lower.contains("linkedin.com") {
            // Profile links get their query string stripped.
            let url = if referer.contains("/in/") {
                referer.split('?').next().unwrap_or(referer).to_string()
            } else {
                referer.to_string()
            };
            return Self {
                platform: "LinkedIn",
                emoji: "💼",
                profile_url: url,
            };
        }
        if lower.contains("twitter.com") || lower.contains("x.com") {
            return Self::named("Twitter/X", "🐦", referer);
        }
        if lower.contains("facebook.com") {
            return Self::named("Facebook", "📘", referer);
        }
        if lower.contains("instagram.com") {
            return Self::named("Instagram", "📸", referer);
        }
        if lower.contains("github.com") {
            return Self::named("GitHub", "⚡", referer);
        }
        if lower.contains("reddit.com") {
            return Self::named("Reddit", "🔶", referer);
        }
        if lower.contains("google.com") {
            return Self::named("Google Search", "🔍", referer);
        }
        if !referer.is_empty() && referer != "Direct visit" {
            return Self::named("Other Website", "🌐", referer);
        }

        Self {
            platform: "Direct Visit",
            emoji: "🔗",
            profile_url: "No referer".to_string(),
        }
    }

    fn named(platform: &'static str, emoji: &'static str, url: &str) -> Self {
        Self {
            platform,
            emoji,
            profile_url: url.to_string(),
        }
    }

    /// Whether this came through a referring page at all.
    pub fn is_direct(&self) -> bool {
        self.platform == "Direct Visit"
    }
}
