//! Shared fixtures and a minimal tree reader for produced documents

use newsml_rs::{
    Article, ArticleBuilder, Destination, FormatterClock, InMemorySequenceProvider,
    NewsMl12Formatter,
};
use quick_xml::Reader;
use quick_xml::events::Event;

/// Install a test subscriber once; honours RUST_LOG
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn clock() -> FormatterClock {
    FormatterClock::from_ymd_hms(2024, 1, 1, 9, 30, 0).unwrap()
}

pub fn formatter() -> NewsMl12Formatter<InMemorySequenceProvider> {
    init_tracing();
    NewsMl12Formatter::new(InMemorySequenceProvider::new(), clock())
}

pub fn wire() -> Destination {
    Destination::newsml12("aap-wire")
}

/// Published article with every required field set
pub fn published() -> Article {
    ArticleBuilder::new("abc1")
        .version(1)
        .state("published")
        .firstcreated("20240101T0000Z")
        .versioncreated("20240101T0100Z")
        .pubstatus("usable")
        .urgency(3)
        .keywords(vec!["sport"])
        .category("04")
        .build()
}

/// Corrected article from the reference scenario
pub fn corrected() -> Article {
    ArticleBuilder::new("abc1")
        .version(2)
        .state("corrected")
        .firstcreated("20240101T0000Z")
        .versioncreated("20240101T0100Z")
        .pubstatus("usable")
        .urgency(3)
        .keywords(vec!["sport"])
        .category("04")
        .build()
}

/// Parsed element
#[derive(Debug, Clone, Default)]
pub struct Node {
    pub name: String,
    pub attrs: Vec<(String, String)>,
    pub text: String,
    pub children: Vec<Node>,
}

impl Node {
    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn children_named(&self, name: &str) -> Vec<&Node> {
        self.children.iter().filter(|c| c.name == name).collect()
    }

    /// Single child with this name; panics if absent or repeated
    pub fn child(&self, name: &str) -> &Node {
        let found = self.children_named(name);
        assert_eq!(
            found.len(),
            1,
            "expected exactly one <{}> under <{}>",
            name,
            self.name
        );
        found[0]
    }

    /// Follow a path of single children
    pub fn at(&self, path: &[&str]) -> &Node {
        path.iter().fold(self, |node, name| node.child(name))
    }

    pub fn child_names(&self) -> Vec<&str> {
        self.children.iter().map(|c| c.name.as_str()).collect()
    }
}

/// Parse a document into its root element
pub fn parse(document: &str) -> Node {
    let mut reader = Reader::from_str(document);
    reader.config_mut().trim_text(true);

    let mut stack: Vec<Node> = Vec::new();
    let mut root: Option<Node> = None;
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => stack.push(node_from(e)),
            Ok(Event::Empty(ref e)) => {
                let node = node_from(e);
                attach(&mut stack, &mut root, node);
            }
            Ok(Event::Text(ref e)) => {
                if let Some(top) = stack.last_mut() {
                    top.text.push_str(&e.unescape().unwrap());
                }
            }
            Ok(Event::End(_)) => {
                let node = stack.pop().expect("unbalanced end tag");
                attach(&mut stack, &mut root, node);
            }
            Ok(Event::Eof) => break,
            Err(e) => panic!("XML parse error: {e}"),
            _ => {}
        }
        buf.clear();
    }

    assert!(stack.is_empty(), "unclosed elements");
    root.expect("document has no root element")
}

fn node_from(e: &quick_xml::events::BytesStart<'_>) -> Node {
    let attrs = e
        .attributes()
        .map(|a| {
            let a = a.unwrap();
            (
                String::from_utf8_lossy(a.key.as_ref()).to_string(),
                a.unescape_value().unwrap().to_string(),
            )
        })
        .collect();
    Node {
        name: String::from_utf8_lossy(e.name().as_ref()).to_string(),
        attrs,
        ..Node::default()
    }
}

fn attach(stack: &mut [Node], root: &mut Option<Node>, node: Node) {
    match stack.last_mut() {
        Some(parent) => parent.children.push(node),
        None => {
            assert!(root.is_none(), "more than one root element");
            *root = Some(node);
        }
    }
}

/// Format an article and parse the result
pub fn format_and_parse(article: &Article) -> Node {
    let output = formatter().format(article, &wire()).unwrap();
    parse(&output.document)
}
