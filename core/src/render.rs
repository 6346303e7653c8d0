//! Formatting a `User` into a profile card and inserting it into the page.

use crate::mount::{InsertPosition, MountPoint};
use crate::types::User;

/// Class given to every card; callers may add one more.
pub const CARD_CLASS: &str = "user-card";

/// Render the card fragment for `user`.
///
/// Every field is HTML-escaped. Empty fields still produce a well-formed
/// card, just with an empty attribute or heading.
pub fn card_html(user: &User, class_name: &str) -> String {
    let class = match class_name.trim() {
        "" => CARD_CLASS.to_string(),
        extra => format!("{CARD_CLASS} {}", escape(extra)),
    };
    format!(
        concat!(
            "<div class=\"{class}\">\n",
            "    <img src=\"{image}\" alt=\"Profile Image\">\n",
            "    <h3>{first}</h3>\n",
            "    <h3>{last}</h3>\n",
            "    <p class=\"email\">{email}</p>\n",
            "    <button class=\"btn\">View Profile</button>\n",
            "</div>",
        ),
        class = class,
        image = escape(&user.image),
        first = escape(&user.first_name),
        last = escape(&user.last_name),
        email = escape(&user.email),
    )
}

/// Escape text for use in HTML content or a quoted attribute.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Appends profile cards to one mount point.
#[derive(Debug, Clone)]
pub struct CardRenderer {
    mount: MountPoint,
}

impl CardRenderer {
    pub fn new(mount: MountPoint) -> Self {
        Self { mount }
    }

    pub fn mount(&self) -> &MountPoint {
        &self.mount
    }

    /// Insert one card for `user`. Never replaces existing content.
    pub fn render(&self, user: &User, position: InsertPosition, class_name: &str) {
        let html = card_html(user, class_name);
        self.mount.insert_adjacent_html(position, &html);
        tracing::debug!(user_id = user.id, %position, "rendered user card");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn jane() -> User {
        User {
            id: 2,
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            email: "jane@x.com".to_string(),
            image: "http://x/img.png".to_string(),
        }
    }

    #[test]
    fn card_has_fixed_shape() {
        let html = card_html(&jane(), "user");
        assert_eq!(
            html,
            "<div class=\"user-card user\">\n\
             \x20   <img src=\"http://x/img.png\" alt=\"Profile Image\">\n\
             \x20   <h3>Jane</h3>\n\
             \x20   <h3>Doe</h3>\n\
             \x20   <p class=\"email\">jane@x.com</p>\n\
             \x20   <button class=\"btn\">View Profile</button>\n\
             </div>"
        );
    }

    #[test]
    fn empty_class_leaves_base_class_only() {
        let html = card_html(&jane(), "");
        assert!(html.starts_with("<div class=\"user-card\">"));
    }

    #[test]
    fn fields_are_escaped() {
        let mut user = jane();
        user.first_name = "<script>alert(1)</script>".to_string();
        user.image = "x\" onerror=\"evil()".to_string();
        user.email = "a&b@x.com".to_string();
        let html = card_html(&user, "");
        assert!(!html.contains("<script>"));
        assert!(html.contains("<h3>&lt;script&gt;alert(1)&lt;/script&gt;</h3>"));
        assert!(html.contains("src=\"x&quot; onerror=&quot;evil()\""));
        assert!(html.contains("a&amp;b@x.com"));
    }

    #[test]
    fn missing_image_degrades_to_empty_src() {
        let mut user = jane();
        user.image.clear();
        assert!(card_html(&user, "").contains("<img src=\"\" alt=\"Profile Image\">"));
    }

    #[test]
    fn escape_leaves_plain_text_alone() {
        assert_eq!(escape("Jane Doe"), "Jane Doe");
        assert_eq!(escape("it's"), "it&#39;s");
    }

    #[test]
    fn rendering_twice_appends_twice() {
        let renderer = CardRenderer::new(MountPoint::card_container());
        renderer.render(&jane(), InsertPosition::BeforeEnd, "user");
        renderer.render(&jane(), InsertPosition::BeforeEnd, "user");
        let children = renderer.mount().children();
        assert_eq!(children.len(), 2);
        assert_eq!(children[0], children[1]);
    }

    #[test]
    fn render_respects_position() {
        let renderer = CardRenderer::new(MountPoint::card_container());
        let mut john = jane();
        john.first_name = "John".to_string();
        renderer.render(&jane(), InsertPosition::BeforeEnd, "");
        renderer.render(&john, InsertPosition::AfterBegin, "");
        let children = renderer.mount().children();
        assert!(children[0].contains("John"));
        assert!(children[1].contains("Jane"));
    }
}
