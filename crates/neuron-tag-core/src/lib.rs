pub mod config;
pub mod directive;
pub mod error;
pub mod markup;
pub mod platform;
pub mod report;
pub mod ruleset;

pub use config::{Config, ScanConfig};
pub use directive::{
    setup, Directive, DirectiveRegistration, DirectiveRegistry, NeuronTagDirective, RenderContext,
    DIRECTIVE_NAME,
};
pub use error::{NeuronTagError, Result};
pub use markup::{Inline, InlineParser, LineParser, Node};
pub use platform::Platform;
pub use report::{
    scan_tree, DocEntry, ScanOptions, TreeReport, DEFAULT_EXCLUDED_DIRS, DEFAULT_EXTENSIONS,
};

// Rule system
pub use ruleset::{RuleSet, TagResolution, TagResolver, TEXT_TEMPLATE};
