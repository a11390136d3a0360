use log::{debug, warn};

use crate::interaction::Interaction;
use crate::runtime::error::{InteractionError, RuntimeError};
use crate::runtime::events::Pass;
use crate::runtime::session::SessionState;
use crate::runtime::ui::Ui;
use crate::scripts::Script;

/// Runs `script` once from top to bottom against `session`.
pub fn execute_pass(script: &dyn Script, session: &mut SessionState) -> Result<Pass, RuntimeError> {
    session.begin_pass();
    let mut ui = Ui::new(session);
    let outcome = script.run(&mut ui);
    let events = ui.into_events();
    match outcome {
        Ok(()) => {
            session.end_pass();
            debug!(
                "pass {} of `{}` produced {} events",
                session.passes(),
                script.name(),
                events.len()
            );
            Ok(Pass {
                number: session.passes(),
                script: script.name().to_string(),
                events,
            })
        }
        Err(err) => {
            session.abort_pass();
            warn!("pass of `{}` failed: {}", script.name(), err);
            Err(err)
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    #[error(transparent)]
    Interaction(#[from] InteractionError),
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

/// One script plus the session it re-executes against.
pub struct Runner {
    script: &'static dyn Script,
    session: SessionState,
    last: Option<Pass>,
}

impl Runner {
    pub fn new(script: &'static dyn Script) -> Self {
        Self {
            script,
            session: SessionState::new(),
            last: None,
        }
    }

    pub fn script(&self) -> &'static dyn Script {
        self.script
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn last_pass(&self) -> Option<&Pass> {
        self.last.as_ref()
    }

    /// Initial load.
    pub fn load(&mut self) -> Result<&Pass, RuntimeError> {
        self.rerun()
    }

    /// Re-executes without applying anything, e.g. a page refresh.
    pub fn rerun(&mut self) -> Result<&Pass, RuntimeError> {
        let pass = execute_pass(self.script, &mut self.session)?;
        Ok(&*self.last.insert(pass))
    }

    pub fn interact(&mut self, interaction: &Interaction) -> Result<&Pass, RunnerError> {
        self.interact_all(std::slice::from_ref(interaction))
    }

    /// Applies a batch of interactions, then re-executes once.
    ///
    /// The batch is validated against a scratch copy first so a bad entry
    /// leaves the session as it was.
    pub fn interact_all(&mut self, interactions: &[Interaction]) -> Result<&Pass, RunnerError> {
        if self.last.is_none() {
            self.rerun()?;
        }
        let mut staged = self.session.clone();
        for interaction in interactions {
            staged.apply(interaction)?;
        }
        self.session = staged;
        Ok(self.rerun()?)
    }
}
