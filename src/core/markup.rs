//! Thin query layer over a parsed HTML document.
//!
//! The platform strategies only ever need "find by tag + class", descendant
//! lookups, and direct-child iteration, so that is the whole interface; the
//! parsing crate never leaks into strategy code. A selector that fails to
//! compile (only possible with a malformed literal) behaves as "no match",
//! which the strategies already normalize to `UsernameNotFound`.

use scraper::{ElementRef, Html, Selector};

/// A parsed HTML document.
pub(crate) struct Markup {
    doc: Html,
}

impl Markup {
    pub(crate) fn parse(body: &str) -> Self {
        Self {
            doc: Html::parse_document(body),
        }
    }

    /// First element matching `tag` with all the (space-separated) classes.
    pub(crate) fn find(&self, tag: &str, class: &str) -> Option<Node<'_>> {
        let sel = compile(tag, Some(class))?;
        self.doc.select(&sel).next().map(Node::new)
    }

    /// All elements matching `tag` with all the (space-separated) classes.
    pub(crate) fn find_all(&self, tag: &str, class: &str) -> Vec<Node<'_>> {
        let Some(sel) = compile(tag, Some(class)) else {
            return Vec::new();
        };
        self.doc.select(&sel).map(Node::new).collect()
    }

    /// All elements with the given tag, in document order.
    pub(crate) fn tags(&self, tag: &str) -> Vec<Node<'_>> {
        let Some(sel) = compile(tag, None) else {
            return Vec::new();
        };
        self.doc.select(&sel).map(Node::new).collect()
    }
}

/// One element within a parsed document.
#[derive(Clone, Copy)]
pub(crate) struct Node<'a> {
    el: ElementRef<'a>,
}

impl<'a> Node<'a> {
    fn new(el: ElementRef<'a>) -> Self {
        Self { el }
    }

    /// Concatenated descendant text, trimmed.
    pub(crate) fn text(&self) -> String {
        self.el.text().collect::<String>().trim().to_string()
    }

    /// First descendant matching `tag` with the given classes.
    pub(crate) fn find(&self, tag: &str, class: &str) -> Option<Node<'a>> {
        let sel = compile(tag, Some(class))?;
        self.el.select(&sel).next().map(Node::new)
    }

    /// First descendant carrying the given class, any tag.
    pub(crate) fn find_class(&self, class: &str) -> Option<Node<'a>> {
        let sel = compile("*", Some(class))?;
        self.el.select(&sel).next().map(Node::new)
    }

    /// All descendants with the given tag.
    pub(crate) fn tags(&self, tag: &str) -> Vec<Node<'a>> {
        let Some(sel) = compile(tag, None) else {
            return Vec::new();
        };
        self.el.select(&sel).map(Node::new).collect()
    }

    /// Direct child elements with the given tag (non-recursive).
    pub(crate) fn children(&self, tag: &str) -> Vec<Node<'a>> {
        self.el
            .children()
            .filter_map(ElementRef::wrap)
            .filter(|el| el.value().name() == tag)
            .map(Node::new)
            .collect()
    }
}

fn compile(tag: &str, class: Option<&str>) -> Option<Selector> {
    let mut css = String::from(tag);
    if let Some(class) = class {
        for part in class.split_whitespace() {
            css.push('.');
            css.push_str(part);
        }
    }
    Selector::parse(&css).ok()
}
