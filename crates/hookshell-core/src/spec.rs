//! Static command declarations.
//!
//! A [`CommandSpec`] is the loose, declarative description of one registry
//! entry. It deliberately allows malformed shapes (a group with a handler,
//! a built-in with children) so that [`Tree::build`](crate::Tree::build)
//! can reject them with a precise [`TreeError`](crate::TreeError).
//!
//! ```ignore
//! let memory = CommandSpec::group("memory", "Work with the current processes memory")
//!     .help("Contains subcommands to work with memory within the current process.")
//!     .child(CommandSpec::leaf("search", "Search for pattern in memory", SearchHandler));
//! ```

use crate::complete::DynamicCompleter;
use crate::context::SessionContext;
use crate::dispatch::Handler;
use std::sync::Arc;

/// Declarative description of one registry entry.
pub struct CommandSpec<C: SessionContext> {
    pub(crate) name: String,
    pub(crate) summary: String,
    pub(crate) help: Option<String>,
    pub(crate) children: Vec<CommandSpec<C>>,
    pub(crate) handler: Option<Arc<dyn Handler<C>>>,
    pub(crate) builtin: bool,
    pub(crate) completer: Option<Arc<dyn DynamicCompleter<C>>>,
}

impl<C: SessionContext> CommandSpec<C> {
    fn new(name: impl Into<String>, summary: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            summary: summary.into(),
            help: None,
            children: Vec::new(),
            handler: None,
            builtin: false,
            completer: None,
        }
    }

    /// A container for subcommands. Add them with [`CommandSpec::child`].
    pub fn group(name: impl Into<String>, summary: impl Into<String>) -> Self {
        Self::new(name, summary)
    }

    /// An executable command.
    pub fn leaf<H>(name: impl Into<String>, summary: impl Into<String>, handler: H) -> Self
    where
        H: Handler<C> + 'static,
    {
        Self::new(name, summary).handler(handler)
    }

    /// A terminal command handled by the console host.
    pub fn builtin(name: impl Into<String>, summary: impl Into<String>) -> Self {
        let mut spec = Self::new(name, summary);
        spec.builtin = true;
        spec
    }

    /// Long-form usage text, returned verbatim by the help engine.
    pub fn help(mut self, text: impl Into<String>) -> Self {
        self.help = Some(text.into());
        self
    }

    pub fn child(mut self, child: CommandSpec<C>) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = CommandSpec<C>>) -> Self {
        self.children.extend(children);
        self
    }

    /// Attach a handler. Combined with children this is rejected at build time.
    pub fn handler<H>(mut self, handler: H) -> Self
    where
        H: Handler<C> + 'static,
    {
        self.handler = Some(Arc::new(handler));
        self
    }

    /// Attach a dynamic completer. Only valid on terminal commands.
    pub fn completer<D>(mut self, completer: D) -> Self
    where
        D: DynamicCompleter<C> + 'static,
    {
        self.completer = Some(Arc::new(completer));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}
