//! Preview node tree.

use lp_renderer::{AiImage, Icon, Reveal};
use serde::Serialize;

/// Identifier of one revealed element within a tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct RevealId(pub u32);

impl std::fmt::Display for RevealId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "r{}", self.0)
    }
}

/// One renderable node.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Node {
    Element {
        tag: &'static str,
        #[serde(skip_serializing_if = "String::is_empty")]
        class: String,
        /// Inline style (accent colors).
        #[serde(skip_serializing_if = "Option::is_none")]
        style: Option<String>,
        #[serde(skip_serializing_if = "Vec::is_empty")]
        attrs: Vec<(&'static str, String)>,
        #[serde(skip_serializing_if = "Vec::is_empty")]
        children: Vec<Node>,
    },
    Text {
        text: String,
    },
    Icon {
        icon: Icon,
        #[serde(skip_serializing_if = "String::is_empty")]
        class: String,
    },
    Image {
        src: String,
        alt: String,
        class: String,
    },
    /// Element hidden until first seen, then shown for good.
    Reveal {
        id: RevealId,
        reveal: Reveal,
        #[serde(skip_serializing_if = "String::is_empty")]
        class: String,
        children: Vec<Node>,
    },
    /// Summary always visible, detail shown on hover or expand.
    Disclosure {
        class: String,
        summary: Vec<Node>,
        detail: Vec<Node>,
    },
}

impl Node {
    pub fn el(tag: &'static str, class: impl Into<String>) -> Self {
        Self::Element {
            tag,
            class: class.into(),
            style: None,
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    pub fn icon(icon: Icon, class: impl Into<String>) -> Self {
        Self::Icon {
            icon,
            class: class.into(),
        }
    }

    pub fn image(image: &AiImage, class: impl Into<String>) -> Self {
        Self::Image {
            src: image.url(),
            alt: image.alt.clone(),
            class: class.into(),
        }
    }

    /// Element with a single text child.
    pub fn text_el(tag: &'static str, class: impl Into<String>, text: impl Into<String>) -> Self {
        Self::el(tag, class).child(Self::text(text))
    }

    /// Append a child. No-op on leaf nodes.
    #[must_use]
    pub fn child(mut self, node: Node) -> Self {
        match &mut self {
            Self::Element { children, .. } | Self::Reveal { children, .. } => children.push(node),
            Self::Disclosure { detail, .. } => detail.push(node),
            Self::Text { .. } | Self::Icon { .. } | Self::Image { .. } => {}
        }
        self
    }

    #[must_use]
    pub fn children(self, nodes: impl IntoIterator<Item = Node>) -> Self {
        nodes.into_iter().fold(self, Self::child)
    }

    #[must_use]
    pub fn style(mut self, value: impl Into<String>) -> Self {
        if let Self::Element { style, .. } = &mut self {
            *style = Some(value.into());
        }
        self
    }

    #[must_use]
    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        if let Self::Element { attrs, .. } = &mut self {
            attrs.push((name, value.into()));
        }
        self
    }

    /// Visit this node and every descendant, depth first.
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a Node)) {
        visit(self);
        match self {
            Self::Element { children, .. } | Self::Reveal { children, .. } => {
                for child in children {
                    child.walk(visit);
                }
            }
            Self::Disclosure { summary, detail, .. } => {
                for child in summary.iter().chain(detail) {
                    child.walk(visit);
                }
            }
            Self::Text { .. } | Self::Icon { .. } | Self::Image { .. } => {}
        }
    }

    /// Concatenated text content.
    #[must_use]
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.walk(&mut |node| {
            if let Self::Text { text } = node {
                out.push_str(text);
            }
        });
        out
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_builder() {
        let node = Node::el("div", "card")
            .style("color: red")
            .attr("id", "x")
            .child(Node::text("hi"));
        assert_eq!(
            node,
            Node::Element {
                tag: "div",
                class: "card".to_owned(),
                style: Some("color: red".to_owned()),
                attrs: vec![("id", "x".to_owned())],
                children: vec![Node::text("hi")],
            }
        );
    }

    #[test]
    fn test_child_on_leaf_is_ignored() {
        assert_eq!(Node::text("a").child(Node::text("b")), Node::text("a"));
    }

    #[test]
    fn test_text_content() {
        let node = Node::el("p", "")
            .child(Node::text("Hello, "))
            .child(Node::text_el("b", "", "world"));
        assert_eq!(node.text_content(), "Hello, world");
    }

    #[test]
    fn test_serialize_icon_by_component_name() {
        let json = serde_json::to_value(Node::icon(Icon::ShieldCheck, "w-4")).unwrap();
        assert_eq!(json, serde_json::json!({"type": "icon", "icon": "ShieldCheck", "class": "w-4"}));
    }

    #[test]
    fn test_reveal_id_display() {
        assert_eq!(RevealId(7).to_string(), "r7");
    }
}
