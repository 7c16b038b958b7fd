//! Gallery Renderer
//!
//! Turns the item list into the grid's inner HTML. The output is injected
//! with `inner_html`, so every interpolated value goes through `escape_html`.

use crate::models::Item;

/// Shown in place of an image that fails to load
pub const FALLBACK_IMAGE: &str = "https://via.placeholder.com/800x500?text=Image";

/// Placeholder card text for an empty gallery
pub const EMPTY_MESSAGE: &str = "No items yet. Click \"Add Item\" to create your first project.";

/// Escape `& < > " '` for text and attribute positions
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render the whole grid: one card per item, or the empty placeholder
pub fn render_gallery(items: &[Item], crud_enabled: bool) -> String {
    if items.is_empty() {
        return format!(r#"<div class="card">{}</div>"#, escape_html(EMPTY_MESSAGE));
    }
    items
        .iter()
        .map(|item| render_card(item, crud_enabled))
        .collect()
}

fn render_card(item: &Item, crud_enabled: bool) -> String {
    let title = escape_html(&item.title);
    let actions = if crud_enabled {
        let id = escape_html(&item.id);
        format!(
            r#"<div class="card-actions"><button type="button" class="btn light" data-edit="{id}">Edit</button><button type="button" class="btn light" data-delete="{id}">Delete</button></div>"#
        )
    } else {
        String::new()
    };
    format!(
        r#"<div class="gallery-card"><img src="{src}" alt="{title}" onerror="this.onerror=null;this.src='{fallback}'" /><div class="content"><h4>{title}</h4><p>{desc}</p>{actions}</div></div>"#,
        src = escape_html(&item.image),
        fallback = FALLBACK_IMAGE,
        desc = escape_html(&item.desc),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::test_support::make_item;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#039;s&lt;/a&gt;"
        );
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn test_empty_renders_placeholder() {
        let html = render_gallery(&[], true);
        assert_eq!(
            html,
            r#"<div class="card">No items yet. Click &quot;Add Item&quot; to create your first project.</div>"#
        );
    }

    #[test]
    fn test_one_card_per_item_in_order() {
        let items = vec![make_item("a", "Alpha"), make_item("b", "Beta"), make_item("c", "Gamma")];
        let html = render_gallery(&items, false);
        assert_eq!(html.matches(r#"class="gallery-card""#).count(), 3);
        let alpha = html.find("<h4>Alpha</h4>").unwrap();
        let beta = html.find("<h4>Beta</h4>").unwrap();
        let gamma = html.find("<h4>Gamma</h4>").unwrap();
        assert!(alpha < beta && beta < gamma);
    }

    #[test]
    fn test_script_title_is_escaped() {
        let mut item = make_item("x", "<script>alert(1)</script>");
        item.desc = "<img src=x onerror=alert(2)>".into();
        let html = render_gallery(&[item], true);
        assert!(!html.contains("<script>"));
        assert!(html.contains("<h4>&lt;script&gt;alert(1)&lt;/script&gt;</h4>"));
        assert!(html.contains("<p>&lt;img src=x onerror=alert(2)&gt;</p>"));
    }

    #[test]
    fn test_image_attribute_cannot_break_out() {
        let mut item = make_item("x", "X");
        item.image = r#"" onload="alert(1)"#.into();
        let html = render_gallery(&[item], false);
        assert!(html.contains(r#"src="&quot; onload=&quot;alert(1)""#));
    }

    #[test]
    fn test_crud_controls_only_when_enabled() {
        let items = vec![make_item("abc", "A")];
        let with = render_gallery(&items, true);
        assert!(with.contains(r#"data-delete="abc""#));
        assert!(with.contains(r#"data-edit="abc""#));

        let without = render_gallery(&items, false);
        assert!(!without.contains("data-delete"));
        assert!(!without.contains("data-edit"));
        assert!(!without.contains("card-actions"));
    }

    #[test]
    fn test_fallback_image_wired() {
        let html = render_gallery(&[make_item("a", "A")], false);
        assert!(html.contains(FALLBACK_IMAGE));
        assert!(html.contains(r#"src="https://img.example/a.png""#));
    }

    #[test]
    fn test_render_is_idempotent() {
        let items = vec![make_item("a", "A & B"), make_item("b", "C")];
        assert_eq!(render_gallery(&items, true), render_gallery(&items, true));
    }
}
