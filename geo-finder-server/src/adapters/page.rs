use std::fmt::{Display, Write};

use axum::{
    extract::{Query, State},
    response::Html,
};
use ipgeo_rs::GeolocationRecord;
use serde::Deserialize;

use crate::application::services::lookup_service::LookupView;

use super::app_state::AppState;

const PLACEHOLDER: &str = "N/A";

const STYLE: &str = "
body { font-family: sans-serif; max-width: 48rem; margin: 2rem auto; }
.main-title { color: #2a5ef4; font-size: 2.5rem; font-weight: bold; }
.sub-title { color: #32cd32; font-size: 1.8rem; font-weight: bold; margin-top: 1.5rem; }
.columns { display: flex; gap: 2rem; }
.column { flex: 1; background: #f0f8ff; border-radius: 10px; padding: 1.25rem; }
.info-title { color: #ff1493; font-size: 1.2rem; font-weight: bold; }
.error { background: #ffe4e4; color: #a00000; border-radius: 6px; padding: 0.75rem 1rem; margin: 1rem 0; }
";

#[derive(Debug, Deserialize)]
pub struct PageQuery {
    /// Value of the IP input control; absent on initial load.
    pub ip: Option<String>,
    /// Public IP resolved earlier in the session, carried by the form.
    pub current: Option<String>,
}

/// Serves the lookup page. The input control submits on its `change` event, so every
/// committed edit comes back here as a fresh request.
pub async fn lookup_page(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Html<String> {
    let view = state.lookup_service.view(query.ip, query.current).await;
    Html(render_page(&view))
}

pub fn render_page(view: &LookupView) -> String {
    let mut html = String::with_capacity(4096);
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str("<title>IP Geolocation Finder</title>\n");
    let _ = write!(html, "<style>{STYLE}</style>\n</head>\n<body>\n");
    html.push_str("<div class=\"main-title\">🌍 IP Geolocation Finder 🌎</div>\n");

    match &view.current_ip {
        Ok(ip) => {
            let _ = writeln!(
                html,
                "<h3 id=\"current-ip\">📡 Your current public IP: {}</h3>",
                escape_html(ip)
            );
        }
        Err(e) => push_error(&mut html, &format!("Error getting current IP: {e}")),
    }

    html.push_str("<p>Enter any IP address to find its geolocation 📍:</p>\n");
    html.push_str("<form method=\"get\" action=\"/\">\n");
    html.push_str("<label for=\"ip\">IP Address</label>\n");
    let _ = writeln!(
        html,
        "<input id=\"ip\" name=\"ip\" type=\"text\" value=\"{}\" onchange=\"this.form.submit()\">",
        escape_html(&view.input)
    );
    if let Ok(ip) = &view.current_ip {
        let _ = writeln!(
            html,
            "<input type=\"hidden\" name=\"current\" value=\"{}\">",
            escape_html(ip)
        );
    }
    html.push_str("</form>\n");

    match &view.lookup {
        Some(Ok(record)) => push_record(&mut html, &view.input, record),
        Some(Err(e)) => push_error(&mut html, e.message()),
        None => {}
    }

    html.push_str("</body>\n</html>\n");
    html
}

fn push_record(html: &mut String, input: &str, record: &GeolocationRecord) {
    let _ = writeln!(
        html,
        "<div class=\"sub-title\">📍 Geolocation for IP: {}</div>",
        escape_html(input)
    );
    html.push_str("<div class=\"columns\">\n<div class=\"column\" id=\"location\">\n");
    push_field(html, "🌆 City", record.city.as_deref());
    push_field(html, "🏙️ State", record.state.as_deref());
    push_field(html, "🌍 Country", record.country.as_deref());
    html.push_str("</div>\n<div class=\"column\" id=\"network\">\n");
    push_field(html, "🌐 Latitude", record.latitude);
    push_field(html, "🌐 Longitude", record.longitude);
    push_field(html, "💻 ISP", record.isp.as_deref());
    html.push_str("</div>\n</div>\n");
}

fn push_field<T: Display>(html: &mut String, label: &str, value: Option<T>) {
    let value = value
        .map(|v| escape_html(&v.to_string()))
        .unwrap_or_else(|| PLACEHOLDER.to_string());
    let _ = writeln!(html, "<div class=\"info-title\">{label}:</div> <p>{value}</p>");
}

fn push_error(html: &mut String, message: &str) {
    let _ = writeln!(
        html,
        "<div class=\"error\" role=\"alert\">{}</div>",
        escape_html(message)
    );
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use ipgeo_rs::LookupError;

    use super::*;
    use crate::application::services::lookup_service::tests::mountain_view;

    #[test]
    fn renders_both_field_groups() {
        let view = LookupView {
            current_ip: Ok("8.8.8.8".to_string()),
            input: "8.8.8.8".to_string(),
            lookup: Some(Ok(mountain_view())),
        };

        let html = render_page(&view);

        assert!(html.contains("Your current public IP: 8.8.8.8"));
        assert!(html.contains("Geolocation for IP: 8.8.8.8"));
        assert!(html.contains("<p>Mountain View</p>"));
        assert!(html.contains("<p>California</p>"));
        assert!(html.contains("<p>United States</p>"));
        assert!(html.contains("<p>37.4056</p>"));
        assert!(html.contains("<p>-122.0775</p>"));
        assert!(html.contains("<p>Google LLC</p>"));
        assert!(html.contains("name=\"current\" value=\"8.8.8.8\""));

        let location = html.find("id=\"location\"").unwrap();
        let network = html.find("id=\"network\"").unwrap();
        let city = html.find("Mountain View").unwrap();
        let isp = html.find("Google LLC").unwrap();
        assert!(location < city && city < network && network < isp);
    }

    #[test]
    fn absent_fields_render_placeholder() {
        let record = GeolocationRecord {
            ip: "10.1.2.3".to_string(),
            city: None,
            state: None,
            country: Some("Nowhere".to_string()),
            latitude: None,
            longitude: None,
            isp: None,
        };
        let view = LookupView {
            current_ip: Ok("8.8.8.8".to_string()),
            input: "10.1.2.3".to_string(),
            lookup: Some(Ok(record)),
        };

        let html = render_page(&view);

        assert_eq!(html.matches("<p>N/A</p>").count(), 5);
        assert!(!html.contains("<p>0</p>"));
    }

    #[test]
    fn current_ip_failure_shows_banner_and_empty_input() {
        let view = LookupView {
            current_ip: Err(LookupError::transport(
                "Failed to get current IP: request failed: dns error",
            )),
            input: String::new(),
            lookup: None,
        };

        let html = render_page(&view);

        assert!(html.contains("role=\"alert\">Error getting current IP: Failed to get current IP"));
        assert!(html.contains("name=\"ip\" type=\"text\" value=\"\""));
        assert!(!html.contains("name=\"current\""));
        assert!(!html.contains("Geolocation for IP"));
    }

    #[test]
    fn lookup_failure_replaces_results() {
        let view = LookupView {
            current_ip: Ok("8.8.8.8".to_string()),
            input: "bogus".to_string(),
            lookup: Some(Err(LookupError::upstream_rejection(
                "Invalid IP address or unable to fetch geolocation",
            ))),
        };

        let html = render_page(&view);

        assert!(html.contains("Invalid IP address or unable to fetch geolocation"));
        assert!(!html.contains("Geolocation for IP"));
    }

    #[test]
    fn user_input_is_escaped() {
        let view = LookupView {
            current_ip: Ok("8.8.8.8".to_string()),
            input: "\"><script>alert(1)</script>".to_string(),
            lookup: None,
        };

        let html = render_page(&view);

        assert!(!html.contains("<script>"));
        assert!(html.contains("&quot;&gt;&lt;script&gt;alert(1)&lt;/script&gt;"));
    }
}
