//! HTML markup for a preview tree.
//!
//! Used by the live preview server. Reveal elements carry their current
//! controller state as classes plus a `data-reveal` id, and
//! [`PREVIEW_SCRIPT`] flips pending elements to shown as they scroll
//! into view inside the viewport frame.

use std::fmt::Write;

use lp_renderer::{REVEAL_THRESHOLD, RevealState, escape_html};

use crate::backend::PreviewTree;
use crate::controller::RevealController;
use crate::node::Node;

/// Render the tree as an HTML fragment (the viewport frame and its content).
#[must_use]
pub fn render_markup(tree: &PreviewTree, controller: &RevealController) -> String {
    let mut out = String::with_capacity(32 * 1024);
    let _ = write!(
        out,
        r#"<div class="{}" data-viewport="{}" style="--lp-primary: {}">"#,
        tree.frame_class,
        tree.viewport.as_str(),
        tree.accent_color
    );
    if let Some(chrome) = &tree.chrome {
        let _ = write!(
            out,
            r#"<div class="{}"><div class="flex space-x-2"><div class="w-3 h-3 rounded-full bg-[#FF5F56] border border-[#E0443E]"></div><div class="w-3 h-3 rounded-full bg-[#FFBD2E] border border-[#DEA123]"></div><div class="w-3 h-3 rounded-full bg-[#27C93F] border border-[#1AAB29]"></div></div><div class="font-medium opacity-80">{}</div><div class="w-10"></div></div>"#,
            chrome.class,
            escape_html(&chrome.title)
        );
    }
    for section in &tree.sections {
        write_node(&mut out, &section.node, controller);
        out.push('\n');
    }
    out.push_str("</div>");
    out
}

fn write_node(out: &mut String, node: &Node, controller: &RevealController) {
    match node {
        Node::Element {
            tag,
            class,
            style,
            attrs,
            children,
        } => {
            let _ = write!(out, "<{tag}");
            if !class.is_empty() {
                let _ = write!(out, r#" class="{}""#, escape_html(class));
            }
            if let Some(style) = style {
                let _ = write!(out, r#" style="{}""#, escape_html(style));
            }
            for (name, value) in attrs {
                let _ = write!(out, r#" {name}="{}""#, escape_html(value));
            }
            out.push('>');
            for child in children {
                write_node(out, child, controller);
            }
            let _ = write!(out, "</{tag}>");
        }
        Node::Text { text } => out.push_str(&escape_html(text)),
        Node::Icon { icon, class } => {
            let _ = write!(
                out,
                r#"<i data-lucide="{}" class="{}"></i>"#,
                icon.lucide_name(),
                escape_html(class)
            );
        }
        Node::Image { src, alt, class } => {
            let _ = write!(
                out,
                r#"<img src="{}" alt="{}" class="{}" loading="lazy">"#,
                escape_html(src),
                escape_html(alt),
                escape_html(class)
            );
        }
        Node::Reveal {
            id,
            reveal,
            class,
            children,
        } => {
            let state = controller.state(*id).unwrap_or(RevealState::Pending);
            let _ = write!(
                out,
                r#"<div data-reveal="{id}" data-direction="{}" class="{}"#,
                reveal.direction.as_str(),
                reveal.classes(state)
            );
            if !class.is_empty() {
                out.push(' ');
                out.push_str(&escape_html(class));
            }
            let _ = write!(out, r#"" style="transition-delay: {}ms">"#, reveal.delay_ms);
            for child in children {
                write_node(out, child, controller);
            }
            out.push_str("</div>");
        }
        Node::Disclosure { class, summary, detail } => {
            let _ = write!(out, r#"<div class="{}" tabindex="0">"#, escape_html(class));
            for child in summary {
                write_node(out, child, controller);
            }
            out.push_str(r#"<div class="hidden group-hover:block group-focus-within:block">"#);
            for child in detail {
                write_node(out, child, controller);
            }
            out.push_str("</div></div>");
        }
    }
}

/// Client-side observer for `data-reveal` elements in the preview frame.
pub const PREVIEW_SCRIPT: &str = r"(function () {
  var frame = document.querySelector('[data-viewport]');
  var hidden = ['opacity-0', 'translate-y-8', '-translate-x-8', 'translate-x-8'];
  var shown = ['opacity-100', 'translate-x-0', 'translate-y-0'];
  var observer = new IntersectionObserver(function (entries) {
    entries.forEach(function (entry) {
      if (!entry.isIntersecting) return;
      var el = entry.target;
      hidden.forEach(function (c) { el.classList.remove(c); });
      shown.forEach(function (c) { el.classList.add(c); });
      observer.unobserve(el);
    });
  }, { root: frame, threshold: __THRESHOLD__ });
  document.querySelectorAll('[data-reveal].opacity-0').forEach(function (el) { observer.observe(el); });
})();";

/// [`PREVIEW_SCRIPT`] with the visibility threshold filled in.
#[must_use]
pub fn preview_script() -> String {
    PREVIEW_SCRIPT.replace("__THRESHOLD__", &REVEAL_THRESHOLD.to_string())
}

#[cfg(test)]
mod tests {
    use lp_content::{ContentDocument, FaqItem, Meta};

    use super::*;
    use crate::backend::render_preview;
    use crate::viewport::Viewport;

    fn doc() -> ContentDocument {
        ContentDocument {
            meta: Meta {
                brand_name: "<Acme>".to_owned(),
                title: "Acme".to_owned(),
                ..Meta::default()
            },
            faq: vec![FaqItem {
                question: "Q?".to_owned(),
                answer: "A.".to_owned(),
            }],
            ..ContentDocument::default()
        }
    }

    #[test]
    fn test_frame_and_chrome() {
        let tree = render_preview(&doc(), Viewport::Desktop, 2025);
        let html = render_markup(&tree, &RevealController::observe(&tree));
        assert!(html.starts_with(r#"<div class="mx-auto"#));
        assert!(html.contains(r#"data-viewport="desktop""#));
        assert!(html.contains(r#"<div class="font-medium opacity-80">Acme</div>"#));
        assert!(html.ends_with("</div>"));
    }

    #[test]
    fn test_mobile_has_no_chrome() {
        let tree = render_preview(&doc(), Viewport::Mobile, 2025);
        let html = render_markup(&tree, &RevealController::observe(&tree));
        assert!(html.contains("w-[375px] h-[750px]"));
        assert!(!html.contains("bg-[#FF5F56]"));
    }

    #[test]
    fn test_reveal_state_classes() {
        let tree = render_preview(&doc(), Viewport::Desktop, 2025);
        let mut controller = RevealController::observe(&tree);
        let html = render_markup(&tree, &controller);
        assert!(html.contains(r#"data-reveal="r0" data-direction="up" class="transition-all duration-1000 ease-out opacity-0 translate-y-8""#));

        controller.report_visibility(tree.reveal_ids()[0], 1.0);
        let html = render_markup(&tree, &controller);
        assert!(html.contains(r#"data-reveal="r0" data-direction="up" class="transition-all duration-1000 ease-out opacity-100"#));
    }

    #[test]
    fn test_text_escaped() {
        let tree = render_preview(&doc(), Viewport::Desktop, 2025);
        let html = render_markup(&tree, &RevealController::observe(&tree));
        assert!(html.contains("&lt;Acme&gt;"));
        assert!(!html.contains("<Acme>"));
    }

    #[test]
    fn test_disclosure_hides_answer() {
        let tree = render_preview(&doc(), Viewport::Desktop, 2025);
        let html = render_markup(&tree, &RevealController::observe(&tree));
        assert!(html.contains(r#"<div class="hidden group-hover:block group-focus-within:block"><p class="mt-2 text-slate-600">A.</p></div>"#));
    }

    #[test]
    fn test_script_threshold() {
        assert!(preview_script().contains("threshold: 0.1"));
    }
}
