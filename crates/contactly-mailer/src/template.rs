//! Email message templates.
//!
//! Rendering is pure: a template struct plus `render()` producing the HTML
//! body, with no I/O involved.

/// The password-reset notification email.
#[derive(Debug, Clone)]
pub struct ResetPasswordEmail<'a> {
    /// Recipient's display name.
    pub name: &'a str,
    /// Full reset link including the signed token.
    pub link: &'a str,
}

impl ResetPasswordEmail<'_> {
    /// Subject line for this message.
    pub fn subject(&self) -> &'static str {
        "Reset your password"
    }

    /// Renders the HTML body.
    pub fn render(&self) -> String {
        format!(
            "<html>\
             <body>\
             <p>Hello {name},</p>\
             <p>We received a request to reset the password for your Contactly account.</p>\
             <p><a href=\"{link}\">Click here to reset your password</a></p>\
             <p>This link expires in 5 minutes. If you did not request a reset, you can ignore this email.</p>\
             </body>\
             </html>",
            name = escape_html(self.name),
            link = self.link,
        )
    }
}

/// Minimal HTML escaping for user-supplied values interpolated into bodies.
fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_contains_name_and_link() {
        let email = ResetPasswordEmail {
            name: "Alice",
            link: "https://app.example.com/reset-password?token=abc",
        };
        let html = email.render();
        assert!(html.contains("Hello Alice"));
        assert!(html.contains("reset-password?token=abc"));
    }

    #[test]
    fn test_name_is_escaped() {
        let email = ResetPasswordEmail {
            name: "<script>alert(1)</script>",
            link: "https://x",
        };
        assert!(!email.render().contains("<script>"));
    }
}
