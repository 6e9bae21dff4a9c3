//! The console's command registry.
//!
//! Each submodule contributes the registry entries for one area; the
//! order of [`build_registry`] is the order menus and help show them in.

mod args;
mod completion;
mod device;
mod filesystem;
pub mod host;
mod ios;
mod jobs;
mod memory;
mod remote;
mod render;
mod script;
mod sqlite;
mod ui;

use crate::session::Session;
use hookshell_core::{CommandSpec, Tree, TreeError};

type Spec = CommandSpec<Session>;

/// Build and validate the full command tree.
pub fn build_registry() -> Result<Tree<Session>, TreeError> {
    let mut specs = vec![host::shell(), host::reconnect()];
    specs.extend(script::commands());
    specs.extend(filesystem::commands());
    specs.extend(device::commands());
    specs.extend(memory::commands());
    specs.extend(sqlite::commands());
    specs.extend(jobs::commands());
    specs.extend(ui::commands());
    specs.extend(ios::commands());
    specs.push(host::exit());
    Tree::build(specs)
}
