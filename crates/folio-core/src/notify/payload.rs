//! Message bodies for the notification sinks.

use chrono::{DateTime, Utc};
use serde_json::{json, Value};

use crate::client::{ClientInfo, Location, SourcePlatform};
use crate::notify::{DownloadEvent, VisitEvent};

const VISIT_COLOR: u32 = 0x10b981;
const DOWNLOAD_COLOR: u32 = 0x6366f1;

/// Render a client-supplied ISO-8601 timestamp for humans, falling back
/// to the raw string when it does not parse.
pub fn format_timestamp(timestamp: &str) -> String {
    DateTime::parse_from_rfc3339(timestamp)
        .map(|dt| dt.with_timezone(&Utc).format("%Y-%m-%d %H:%M:%S UTC").to_string())
        .unwrap_or_else(|_| timestamp.to_string())
}

fn truncate(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

/// Discord embed for a page visit.
pub fn visit_embed(
    event: &VisitEvent,
    client: &ClientInfo,
    location: &Location,
    source: &SourcePlatform,
) -> Value {
    let page = if event.page.is_empty() { "/" } else { event.page.as_str() };
    let mut fields = vec![
        json!({ "name": format!("{} Source", source.emoji), "value": format!("**{}**", source.platform), "inline": true }),
        json!({ "name": format!("{} Location", location.flag), "value": &location.label, "inline": true }),
        json!({ "name": "🌐 IP Address", "value": &client.ip, "inline": false }),
        json!({ "name": "📄 Page Visited", "value": page, "inline": true }),
        json!({ "name": format!("{} Device", client.device.device_type.label()), "value": &client.device.device_name, "inline": true }),
        json!({ "name": "🖥️ Operating System", "value": &client.device.os, "inline": true }),
        json!({ "name": "🌐 Browser", "value": &client.device.browser, "inline": true }),
        json!({ "name": "⏰ Visit Time", "value": format_timestamp(&event.timestamp), "inline": true }),
    ];

    // Referring URL is only worth a field for real referrals.
    if !source.is_direct() && source.profile_url != "No referer" {
        fields.insert(
            3,
            json!({ "name": "🔗 Referer URL", "value": truncate(&source.profile_url, 1000), "inline": false }),
        );
    }

    json!({
        "embeds": [{
            "title": "👀 New Visitor to Your Portfolio!",
            "color": VISIT_COLOR,
            "fields": fields,
            "timestamp": &event.timestamp,
            "footer": { "text": "Portfolio Visitor Tracking" }
        }]
    })
}

/// Discord embed for a CV download.
pub fn download_embed(event: &DownloadEvent, client: &ClientInfo, location: &Location) -> Value {
    json!({
        "embeds": [{
            "title": "📥 CV Downloaded!",
            "color": DOWNLOAD_COLOR,
            "fields": [
                { "name": "👤 Name", "value": &event.name, "inline": true },
                { "name": "📍 Location", "value": &location.label, "inline": true },
                { "name": "🌐 IP Address", "value": &client.ip, "inline": false },
                { "name": format!("{} Device", client.device.device_type.label()), "value": &client.device.device_name, "inline": true },
                { "name": "🖥️ Operating System", "value": &client.device.os, "inline": true },
                { "name": "🌐 Browser", "value": &client.device.browser, "inline": true },
                { "name": "⏰ Time", "value": format_timestamp(&event.timestamp), "inline": false },
                { "name": "🔗 Referer", "value": &client.referer, "inline": true },
                { "name": "📱 Full User Agent", "value": format!("{}...", truncate(&client.user_agent, 100)), "inline": false },
            ],
            "timestamp": &event.timestamp,
            "footer": { "text": "Portfolio Notification System" }
        }]
    })
}

/// Subject line for the download notification email.
pub fn download_email_subject(location: &Location) -> String {
    format!("🔔 CV Downloaded - {}", location.label)
}

/// HTML body for the download notification email.
pub fn download_email_html(
    event: &DownloadEvent,
    client: &ClientInfo,
    location: &Location,
) -> String {
    format!(
        r#"<div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto; padding: 20px; background: #f9fafb; border-radius: 10px;">
  <h2 style="color: #6366f1; margin-bottom: 20px;">📥 CV Download Notification</h2>

  <div style="background: white; padding: 20px; border-radius: 8px; margin-bottom: 15px;">
    <h3 style="margin-top: 0; color: #1a1a1a;">User Information</h3>
    <p><strong>Provided Name:</strong> {name}</p>
    <p><strong>IP Address:</strong> {ip}</p>
    <p><strong>Location:</strong> {location}</p>
  </div>

  <div style="background: white; padding: 20px; border-radius: 8px; margin-bottom: 15px;">
    <h3 style="margin-top: 0; color: #1a1a1a;">Device Information</h3>
    <p><strong>{device_type} Device:</strong> {device_name}</p>
    <p><strong>Operating System:</strong> {os}</p>
    <p><strong>Browser:</strong> {browser}</p>
  </div>

  <div style="background: white; padding: 20px; border-radius: 8px; margin-bottom: 15px;">
    <h3 style="margin-top: 0; color: #1a1a1a;">Technical Details</h3>
    <p><strong>Time:</strong> {time}</p>
    <p><strong>Referer:</strong> {referer}</p>
    <p><strong>User Agent:</strong> {user_agent}</p>
  </div>

  <p style="color: #6b7280; font-size: 14px; margin-top: 20px;">
    This notification was sent from your portfolio website.
  </p>
</div>"#,
        name = event.name,
        ip = client.ip,
        location = location.label,
        device_type = client.device.device_type.label(),
        device_name = client.device.device_name,
        os = client.device.os,
        browser = client.device.browser,
        time = format_timestamp(&event.timestamp),
        referer = client.referer,
        user_agent = client.user_agent,
    )
}

/// Markdown message for the Telegram bot sink.
pub fn download_telegram_text(
    event: &DownloadEvent,
    client: &ClientInfo,
    location: &Location,
) -> String {
    format!(
        "📥 *CV Downloaded*\n\n👤 *Name:* {}\n📍 *Location:* {}\n🌐 *IP:* {}\n\n{} *Device:* {}\n🖥️ *OS:* {}\n🌐 *Browser:* {}\n\n⏰ *Time:* {}\n🔗 *Referer:* {}",
        event.name,
        location.label,
        client.ip,
        client.device.device_type.label(),
        client.device.device_name,
        client.device.os,
        client.device.browser,
        format_timestamp(&event.timestamp),
        client.referer,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::SourcePlatform;

    fn client() -> ClientInfo {
        ClientInfo::from_headers(
            "203.0.113.7".to_string(),
            "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36".to_string(),
            "https://www.linkedin.com/in/someone/?trk=x".to_string(),
        )
    }

    #[test]
    fn test_format_timestamp_parses_iso8601() {
        assert_eq!(
            format_timestamp("2026-08-28T10:30:00Z"),
            "2026-08-28 10:30:00 UTC"
        );
        // Offsets normalize to UTC.
        assert_eq!(
            format_timestamp("2026-08-28T12:30:00+02:00"),
            "2026-08-28 10:30:00 UTC"
        );
    }

    #[test]
    fn test_format_timestamp_passes_garbage_through() {
        assert_eq!(format_timestamp("not a time"), "not a time");
    }

    #[test]
    fn test_visit_embed_includes_referer_field_for_social_sources() {
        let event = VisitEvent {
            timestamp: "2026-08-28T10:30:00Z".to_string(),
            page: "/".to_string(),
        };
        let info = client();
        let source = SourcePlatform::detect(&info.referer);
        let embed = visit_embed(&event, &info, &Location::default(), &source);

        let fields = embed["embeds"][0]["fields"].as_array().unwrap();
        assert_eq!(fields.len(), 9);
        assert_eq!(fields[3]["name"], "🔗 Referer URL");
        assert_eq!(fields[3]["value"], "https://www.linkedin.com/in/someone/");
    }

    #[test]
    fn test_visit_embed_omits_referer_field_for_direct_visits() {
        let event = VisitEvent {
            timestamp: "2026-08-28T10:30:00Z".to_string(),
            page: "/cv".to_string(),
        };
        let info = ClientInfo::from_headers(
            "unknown".to_string(),
            "unknown".to_string(),
            "Direct visit".to_string(),
        );
        let source = SourcePlatform::detect(&info.referer);
        let embed = visit_embed(&event, &info, &Location::default(), &source);

        let fields = embed["embeds"][0]["fields"].as_array().unwrap();
        assert_eq!(fields.len(), 8);
        assert_eq!(fields[0]["value"], "**Direct Visit**");
    }

    #[test]
    fn test_download_embed_truncates_user_agent() {
        let event = DownloadEvent {
            name: "Recruiter".to_string(),
            timestamp: "2026-08-28T10:30:00Z".to_string(),
        };
        let info = client();
        let embed = download_embed(&event, &info, &Location::default());

        let fields = embed["embeds"][0]["fields"].as_array().unwrap();
        let ua_field = fields.last().unwrap()["value"].as_str().unwrap();
        assert!(ua_field.ends_with("..."));
        assert!(ua_field.chars().count() <= 103);
    }

    #[test]
    fn test_email_body_names_all_sections() {
        let event = DownloadEvent {
            name: "Recruiter".to_string(),
            timestamp: "2026-08-28T10:30:00Z".to_string(),
        };
        let info = client();
        let html = download_email_html(&event, &info, &Location::default());
        assert!(html.contains("Recruiter"));
        assert!(html.contains("203.0.113.7"));
        assert!(html.contains("Unknown location"));
        assert!(html.contains("macOS 10.15.7"));
    }

    #[test]
    fn test_telegram_text_is_markdown() {
        let event = DownloadEvent {
            name: "Recruiter".to_string(),
            timestamp: "2026-08-28T10:30:00Z".to_string(),
        };
        let text = download_telegram_text(&event, &client(), &Location::default());
        assert!(text.starts_with("📥 *CV Downloaded*"));
        assert!(text.contains("*Name:* Recruiter"));
    }
}
