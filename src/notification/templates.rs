//! Branded HTML rendering.
//!
//! Pure string composition: a shared wrapper (logo, title, footer, optional
//! pickup-info block) around a variant-specific content fragment. Every
//! caller-supplied value must pass through `escape_html` before it reaches
//! the wrapper; free-text notes go through `multiline_html`.

/// Fixed branding applied to every user-facing message.
///
/// Injected into the dispatcher rather than read from process globals so
/// tests can substitute their own values.
#[derive(Debug, Clone)]
pub struct TemplateConfig {
    pub library_name: String,
    pub logo_url: String,
    pub pickup_location: String,
    pub pickup_hours: String,
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            library_name: "Sunny Shelf Toy Library".to_string(),
            logo_url: "https://sunnyshelf.org/assets/logo.png".to_string(),
            pickup_location: "12 Orchard Lane, Maplewood".to_string(),
            pickup_hours: "Saturdays 9:00am - 12:00pm".to_string(),
        }
    }
}

/// A subject/body pair, produced once per event and consumed exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedMessage {
    pub subject: String,
    pub html: String,
}

impl TemplateConfig {
    /// Wrap a content fragment in the branded shell.
    ///
    /// `content` must already be escaped; `title` is escaped here.
    pub fn render_branded(&self, title: &str, content: &str, show_pickup_info: bool) -> String {
        let pickup_info = if show_pickup_info {
            format!(
                "<div style=\"background:#fef9e7;border-radius:8px;padding:12px 16px;margin-top:16px;\">\
                 <h3 style=\"margin:0 0 8px;\">Pickup Information</h3>\
                 <p style=\"margin:0;\">{location}</p>\
                 <p style=\"margin:0;\">{hours}</p>\
                 </div>",
                location = escape_html(&self.pickup_location),
                hours = escape_html(&self.pickup_hours),
            )
        } else {
            String::new()
        };

        format!(
            "<div style=\"font-family:Arial,sans-serif;max-width:600px;margin:0 auto;color:#333;\">\
             <img src=\"{logo}\" alt=\"{name}\" style=\"max-height:60px;margin:16px 0;\"/>\
             <h2 style=\"color:#2c6e49;\">{title}</h2>\
             {content}\
             {pickup_info}\
             <hr style=\"border:none;border-top:1px solid #ddd;margin:24px 0 12px;\"/>\
             <p style=\"font-size:12px;color:#888;\">{name}</p>\
             </div>",
            logo = escape_html(&self.logo_url),
            name = escape_html(&self.library_name),
            title = escape_html(title),
            content = content,
            pickup_info = pickup_info,
        )
    }
}

/// Escape a value for interpolation into HTML.
pub fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Escape a free-text value and convert newlines to `<br>`.
///
/// Leading/trailing whitespace is trimmed before conversion.
pub fn multiline_html(value: &str) -> String {
    escape_html(value.trim())
        .replace("\r\n", "\n")
        .replace('\n', "<br>")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<script>alert("hi")</script>"#),
            "&lt;script&gt;alert(&quot;hi&quot;)&lt;/script&gt;"
        );
        assert_eq!(escape_html("Tom & Jerry's"), "Tom &amp; Jerry&#39;s");
        assert_eq!(escape_html("plain text"), "plain text");
    }

    #[test]
    fn test_multiline_html_converts_newlines() {
        assert_eq!(
            multiline_html("  first line\nsecond line  "),
            "first line<br>second line"
        );
        assert_eq!(multiline_html("a\r\nb"), "a<br>b");
    }

    #[test]
    fn test_branded_wrapper_with_pickup_info() {
        let config = TemplateConfig::default();
        let html = config.render_branded("Your Toy is Ready for Pickup", "<p>Hi there,</p>", true);

        assert!(html.contains("Pickup Information"));
        assert!(html.contains(&escape_html(&config.pickup_location)));
        assert!(html.contains("Your Toy is Ready for Pickup"));
        assert!(html.contains("<p>Hi there,</p>"));
        assert!(html.contains(&config.logo_url));
    }

    #[test]
    fn test_branded_wrapper_without_pickup_info() {
        let config = TemplateConfig::default();
        let html = config.render_branded("Thank You", "<p>Bye.</p>", false);

        assert!(!html.contains("Pickup Information"));
        assert!(html.contains("Thank You"));
    }
}
