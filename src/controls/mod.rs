//! Start/stop commands.
//!
//! Button state is set directly from the command outcome; there is no
//! follow-up status fetch.

use crate::api::{ApiError, CommandStatus, HarvesterApi};
use crate::i18n::Strings;
use crate::notify::{Notifier, Severity};
use crate::page::{ControlButtons, RunState};
use std::rc::Rc;
use tracing::{error, info, warn};

pub struct ControlActions {
    api: Rc<dyn HarvesterApi>,
    buttons: ControlButtons,
    notifier: Rc<Notifier>,
    strings: &'static Strings,
}

impl ControlActions {
    pub fn new(
        api: Rc<dyn HarvesterApi>,
        buttons: ControlButtons,
        notifier: Rc<Notifier>,
        strings: &'static Strings,
    ) -> Self {
        Self {
            api,
            buttons,
            notifier,
            strings,
        }
    }

    pub async fn start(&self) -> Result<CommandStatus, ApiError> {
        match self.api.start().await {
            Ok(CommandStatus::Started) => {
                info!("harvester started");
                self.buttons.show(RunState::Running);
                self.notifier
                    .notify(self.strings.harvester_started, Severity::Success);
                Ok(CommandStatus::Started)
            }
            Ok(CommandStatus::AlreadyRunning) => {
                info!("harvester already running");
                self.notifier
                    .notify(self.strings.harvester_already_running, Severity::Warning);
                Ok(CommandStatus::AlreadyRunning)
            }
            Ok(other) => {
                warn!(status = ?other, "unexpected start response, ignoring");
                Ok(other)
            }
            Err(e) => {
                error!(error = %e, "failed to start harvester");
                self.notifier.notify(self.strings.start_failed, Severity::Danger);
                Err(e)
            }
        }
    }

    pub async fn stop(&self) -> Result<CommandStatus, ApiError> {
        match self.api.stop().await {
            Ok(CommandStatus::Stopped) => {
                info!("harvester stopped");
                self.buttons.show(RunState::Stopped);
                self.notifier.info(self.strings.harvester_stopped);
                Ok(CommandStatus::Stopped)
            }
            Ok(other) => {
                warn!(status = ?other, "unexpected stop response, ignoring");
                Ok(other)
            }
            Err(e) => {
                error!(error = %e, "failed to stop harvester");
                self.notifier.notify(self.strings.stop_failed, Severity::Danger);
                Err(e)
            }
        }
    }
}
