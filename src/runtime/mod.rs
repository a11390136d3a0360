pub mod error;
pub mod events;
pub mod run;
pub mod session;
pub mod ui;
pub mod value;

pub use error::{InteractionError, RuntimeError};
pub use events::{Block, PageLayout, Pass, RenderEvent};
pub use run::{execute_pass, Runner, RunnerError};
pub use session::SessionState;
pub use ui::Ui;
pub use value::{WidgetKey, WidgetKind, WidgetValue};
