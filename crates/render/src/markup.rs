//! Minimal HTML node tree. Text is stored raw and escaped only while
//! serializing, so unescaped interpolation of user- or server-influenced
//! strings is not expressible through this API.

use std::borrow::Cow;

/// Neutralizes HTML-significant characters for insertion as element content
/// or attribute values. Total over all inputs; everything else passes
/// through unchanged.
pub fn escape(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }
    let mut escaped = String::with_capacity(text.len() + 8);
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    Cow::Owned(escaped)
}

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
}

impl Node {
    pub fn text(text: impl Into<String>) -> Self {
        Node::Text(text.into())
    }

    /// Concatenated raw text of this subtree, as a reader of the rendered
    /// document would see it after entity decoding.
    pub fn text_content(&self) -> String {
        match self {
            Node::Text(text) => text.clone(),
            Node::Element(element) => element
                .children
                .iter()
                .map(Node::text_content)
                .collect::<Vec<_>>()
                .concat(),
        }
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    pub fn write_html(&self, out: &mut String) {
        match self {
            Node::Text(text) => out.push_str(&escape(text)),
            Node::Element(element) => element.write_html(out),
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub tag: &'static str,
    pub attrs: Vec<(&'static str, String)>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push((name, value.into()));
        self
    }

    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(Node::text(text))
    }

    pub fn attr_value(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(attr, _)| *attr == name)
            .map(|(_, value)| value.as_str())
    }

    fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(self.tag);
        for (name, value) in &self.attrs {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            out.push_str(&escape(value));
            out.push('"');
        }
        out.push('>');
        for child in &self.children {
            child.write_html(out);
        }
        out.push_str("</");
        out.push_str(self.tag);
        out.push('>');
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_neutralizes_markup_characters() {
        assert_eq!(escape(""), "");
        assert_eq!(escape("Dragon Lore 42"), "Dragon Lore 42");
        assert_eq!(
            escape(r#"<script>alert("x")</script>"#),
            "&lt;script&gt;alert(&quot;x&quot;)&lt;/script&gt;"
        );
        assert_eq!(escape("Fish & Chips"), "Fish &amp; Chips");
    }

    #[test]
    fn serialized_text_never_opens_elements() {
        for hostile in ["<b>bold</b>", "a & b", "\"quoted\"", "it's <i>"] {
            let html = Node::text(hostile).to_html();
            assert!(!html.contains('<'), "unescaped markup in {html}");
            assert_eq!(Node::text(hostile).text_content(), hostile);
        }
    }

    #[test]
    fn elements_serialize_with_escaped_attributes() {
        let node: Node = Element::new("a")
            .attr("href", "https://example.test/?a=1&b=2")
            .attr("class", "btn")
            .text("Steam Market")
            .into();
        assert_eq!(
            node.to_html(),
            "<a href=\"https://example.test/?a=1&amp;b=2\" class=\"btn\">Steam Market</a>"
        );
        assert_eq!(node.text_content(), "Steam Market");
    }
}
