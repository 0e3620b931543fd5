//! Directive registration and dispatch.
//!
//! Models the host build system's extension surface: a directive is
//! registered under a name together with parallel-safety metadata and
//! invoked once per document with the current docname. Directives hold
//! no mutable state and the rule tables are immutable after startup, so
//! a multi-worker host can invoke them concurrently without locking.

use std::collections::HashMap;

use crate::error::{NeuronTagError, Result};
use crate::markup::{LineParser, Node};
use crate::ruleset::{RuleSet, TagResolver};

/// Name the tag directive is registered under.
pub const DIRECTIVE_NAME: &str = "neuron-tag";

/// Per-invocation input supplied by the host environment.
#[derive(Debug, Clone)]
pub struct RenderContext {
    /// Slash-separated path of the document being rendered.
    pub docname: String,
}

impl RenderContext {
    pub fn new(docname: impl Into<String>) -> Self {
        Self {
            docname: docname.into(),
        }
    }
}

/// Result of registering a directive with the host.
#[derive(Debug, Clone)]
pub struct DirectiveRegistration {
    pub name: String,
    pub version: &'static str,
    pub parallel_read_safe: bool,
    pub parallel_write_safe: bool,
}

/// A named extension contributing nodes to the rendered document.
pub trait Directive: Send + Sync {
    /// Produce the directive's nodes for the current document.
    fn run(&self, ctx: &RenderContext, parser: &dyn LineParser) -> Result<Vec<Node>>;
}

/// The applies-to tag directive.
///
/// Resolves the current docname against its rule set, renders the one
/// tag line, and hands it to the host's line parser. An untagged page
/// renders an empty line, which parses to no nodes.
pub struct NeuronTagDirective {
    rules: RuleSet,
}

impl NeuronTagDirective {
    pub fn new() -> Self {
        Self {
            rules: RuleSet::builtin().clone(),
        }
    }

    /// Use an injected rule set instead of the builtin tables.
    pub fn with_rules(rules: RuleSet) -> Self {
        Self { rules }
    }
}

impl Default for NeuronTagDirective {
    fn default() -> Self {
        Self::new()
    }
}

impl Directive for NeuronTagDirective {
    fn run(&self, ctx: &RenderContext, parser: &dyn LineParser) -> Result<Vec<Node>> {
        let resolution = TagResolver::new(&self.rules).resolve(&ctx.docname);
        parser.parse_lines(&[resolution.rendered_line()])
    }
}

/// Registry of named directives.
#[derive(Default)]
pub struct DirectiveRegistry {
    directives: HashMap<String, Box<dyn Directive>>,
}

impl DirectiveRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a directive under a name.
    ///
    /// Registration declares the directive safe for parallel read and
    /// parallel write use by the host build.
    pub fn register(
        &mut self,
        name: &str,
        directive: Box<dyn Directive>,
    ) -> Result<DirectiveRegistration> {
        if self.directives.contains_key(name) {
            return Err(NeuronTagError::DirectiveAlreadyRegistered {
                name: name.to_string(),
            });
        }

        self.directives.insert(name.to_string(), directive);

        Ok(DirectiveRegistration {
            name: name.to_string(),
            version: env!("CARGO_PKG_VERSION"),
            parallel_read_safe: true,
            parallel_write_safe: true,
        })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.directives.contains_key(name)
    }

    /// Registered directive names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.directives.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }

    /// Invoke a registered directive for the current document.
    pub fn run(
        &self,
        name: &str,
        ctx: &RenderContext,
        parser: &dyn LineParser,
    ) -> Result<Vec<Node>> {
        let directive =
            self.directives
                .get(name)
                .ok_or_else(|| NeuronTagError::DirectiveNotFound {
                    name: name.to_string(),
                })?;
        directive.run(ctx, parser)
    }
}

/// Build a registry with the tag directive registered under its
/// canonical name.
pub fn setup() -> Result<(DirectiveRegistry, DirectiveRegistration)> {
    let mut registry = DirectiveRegistry::new();
    let registration = registry.register(DIRECTIVE_NAME, Box::new(NeuronTagDirective::new()))?;
    Ok((registry, registration))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::{Inline, InlineParser};

    #[test]
    fn setup_registers_tag_directive() {
        let (registry, registration) = setup().unwrap();
        assert!(registry.contains(DIRECTIVE_NAME));
        assert_eq!(registration.name, DIRECTIVE_NAME);
        assert!(registration.parallel_read_safe);
        assert!(registration.parallel_write_safe);
    }

    #[test]
    fn duplicate_registration_is_rejected() {
        let (mut registry, _) = setup().unwrap();
        let result = registry.register(DIRECTIVE_NAME, Box::new(NeuronTagDirective::new()));
        assert!(matches!(
            result,
            Err(NeuronTagError::DirectiveAlreadyRegistered { .. })
        ));
    }

    #[test]
    fn unknown_directive_is_an_error() {
        let (registry, _) = setup().unwrap();
        let ctx = RenderContext::new("general/setup/install");
        let result = registry.run("no-such-directive", &ctx, &InlineParser);
        assert!(matches!(
            result,
            Err(NeuronTagError::DirectiveNotFound { .. })
        ));
    }

    #[test]
    fn tagged_page_produces_one_paragraph() {
        let (registry, _) = setup().unwrap();
        let ctx = RenderContext::new("general/setup/install");
        let nodes = registry.run(DIRECTIVE_NAME, &ctx, &InlineParser).unwrap();

        assert_eq!(nodes.len(), 1);
        let Node::Paragraph(inlines) = &nodes[0];
        assert_eq!(
            inlines[0],
            Inline::Emphasis("This document is relevant for".to_string())
        );
        assert!(inlines.contains(&Inline::Literal("Inf1".to_string())));
        assert!(inlines.contains(&Inline::Literal("Trn1".to_string())));
    }

    #[test]
    fn landing_page_produces_no_nodes() {
        let (registry, _) = setup().unwrap();
        let ctx = RenderContext::new("index");
        let nodes = registry.run(DIRECTIVE_NAME, &ctx, &InlineParser).unwrap();
        assert!(nodes.is_empty());
    }

    #[test]
    fn injected_rules_are_used() {
        let rules = RuleSet {
            common_dirs: vec!["docs".to_string()],
            ..Default::default()
        };
        let directive = NeuronTagDirective::with_rules(rules);
        let ctx = RenderContext::new("docs/page");
        let nodes = directive.run(&ctx, &InlineParser).unwrap();
        assert_eq!(nodes.len(), 1);
    }
}
