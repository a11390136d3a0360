use crate::runtime::error::RuntimeError;
use crate::runtime::ui::Ui;
use crate::scripts::Script;

pub const TITLE: &str = "Playground";
pub const MESSAGE_LABEL: &str = "Message";
pub const MESSAGE_DEFAULT: &str = "Hello";
pub const BUTTON_LABEL: &str = "Say it";
pub const IDLE_TEXT: &str = "Press the button to see a response.";

/// Title, one text box, one button and a branch on the button.
pub struct Hello;

impl Script for Hello {
    fn name(&self) -> &'static str {
        "hello"
    }

    fn about(&self) -> &'static str {
        "text box and button; the message changes for the pass after a click"
    }

    fn run(&self, ui: &mut Ui) -> Result<(), RuntimeError> {
        ui.title(TITLE);
        let message = ui.text_input(MESSAGE_LABEL, MESSAGE_DEFAULT)?;
        if ui.button(BUTTON_LABEL)? {
            ui.text(&format!("You said: {}", message));
        } else {
            ui.info(IDLE_TEXT);
        }
        Ok(())
    }
}
