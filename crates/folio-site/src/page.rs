//! Glue to the webview: smooth scrolling and intersection observers.
//!
//! Scripts are built as plain strings so they can be checked without a
//! webview; element ids are embedded as JSON string literals.

use dioxus::prelude::*;

use crate::state::ScrollRequest;

/// Table on `window` holding live observers, keyed by element id.
const OBSERVER_TABLE: &str = "window.__folioObservers";

/// Builds the script that scrolls to a section anchor.
///
/// Evaluates to `false` when the anchor does not exist.
pub fn scroll_script(request: &ScrollRequest) -> String {
    format!(
        r#"const el = document.getElementById({anchor});
if (!el) {{ return false; }}
const top = el.getBoundingClientRect().top + window.pageYOffset - {offset};
window.scrollTo({{ top: top, behavior: 'smooth' }});
return true;"#,
        anchor = js_string(request.anchor),
        offset = request.offset_px,
    )
}

/// Smooth-scrolls to the requested anchor.
///
/// A missing anchor is a no-op, logged at debug level.
pub fn scroll_to(request: ScrollRequest) {
    spawn(async move {
        match document::eval(&scroll_script(&request)).join::<bool>().await {
            Ok(true) => tracing::debug!(anchor = request.anchor, "Scrolled to section"),
            Ok(false) => tracing::debug!(anchor = request.anchor, "Scroll target missing, ignoring"),
            Err(e) => tracing::debug!(anchor = request.anchor, error = ?e, "Scroll script failed"),
        }
    });
}

/// Observer settings for one revealed element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ObserverOptions {
    /// Visible fraction that counts as "seen".
    pub threshold: f64,
    /// Viewport margin in pixels; negative shrinks the viewport.
    pub root_margin_px: i32,
}

/// Builds the script that observes `element_id` and streams visibility
/// reports back through `dioxus.send`.
pub fn observer_script(element_id: &str, options: ObserverOptions) -> String {
    format!(
        r#"const id = {id};
const el = document.getElementById(id);
if (el) {{
  {table} = {table} || {{}};
  if ({table}[id]) {{ {table}[id].disconnect(); }}
  const observer = new IntersectionObserver((entries) => {{
    for (const entry of entries) {{
      dioxus.send({{ ratio: entry.intersectionRatio, isIntersecting: entry.isIntersecting }});
    }}
  }}, {{ threshold: [{threshold}], rootMargin: '{margin}px' }});
  {table}[id] = observer;
  observer.observe(el);
}}"#,
        id = js_string(element_id),
        table = OBSERVER_TABLE,
        threshold = options.threshold,
        margin = options.root_margin_px,
    )
}

/// Builds the script that disconnects and forgets the observer for `element_id`.
pub fn disconnect_script(element_id: &str) -> String {
    format!(
        r#"const id = {id};
if ({table} && {table}[id]) {{
  {table}[id].disconnect();
  delete {table}[id];
}}"#,
        id = js_string(element_id),
        table = OBSERVER_TABLE,
    )
}

/// Tears down the observer for `element_id`, if any.
pub fn disconnect_observer(element_id: &str) {
    document::eval(&disconnect_script(element_id));
}

fn js_string(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "\"\"".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::NAV_BAR_OFFSET_PX;

    #[test]
    fn test_scroll_script_targets_anchor_with_offset() {
        let script = scroll_script(&ScrollRequest {
            anchor: "projects",
            offset_px: NAV_BAR_OFFSET_PX,
        });
        assert!(script.contains(r#"document.getElementById("projects")"#));
        assert!(script.contains("window.pageYOffset - 80"));
        assert!(script.contains("behavior: 'smooth'"));
    }

    #[test]
    fn test_scroll_script_returns_false_for_missing_anchor() {
        let script = scroll_script(&ScrollRequest {
            anchor: "hero",
            offset_px: 0,
        });
        assert!(script.contains("if (!el) { return false; }"));
    }

    #[test]
    fn test_observer_script_options() {
        let script = observer_script(
            "frame-about",
            ObserverOptions {
                threshold: 0.1,
                root_margin_px: -100,
            },
        );
        assert!(script.contains(r#"const id = "frame-about";"#));
        assert!(script.contains("threshold: [0.1]"));
        assert!(script.contains("rootMargin: '-100px'"));
        assert!(script.contains("isIntersecting: entry.isIntersecting"));
    }

    #[test]
    fn test_disconnect_script_forgets_observer() {
        let script = disconnect_script("skills");
        assert!(script.contains(r#"const id = "skills";"#));
        assert!(script.contains("delete window.__folioObservers[id];"));
    }

    #[test]
    fn test_ids_are_escaped() {
        assert_eq!(js_string(r#"a"b"#), r#""a\"b""#);
    }
}
