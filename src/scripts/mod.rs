pub mod hello;
pub mod landing;

use crate::runtime::error::RuntimeError;
use crate::runtime::ui::Ui;

pub use hello::Hello;
pub use landing::Landing;

/// A playground page. `run` is re-executed top to bottom on every pass and
/// must derive its output only from its own code and the widget values `ui`
/// hands back.
pub trait Script: Sync {
    fn name(&self) -> &'static str;
    fn about(&self) -> &'static str;
    fn run(&self, ui: &mut Ui) -> Result<(), RuntimeError>;
}

static SCRIPTS: &[&dyn Script] = &[&Hello, &Landing];

pub fn all() -> &'static [&'static dyn Script] {
    SCRIPTS
}

pub fn find(name: &str) -> Option<&'static dyn Script> {
    SCRIPTS.iter().copied().find(|script| script.name() == name)
}
