//! Transient, dismissible notifications.
//!
//! Every notification is appended to the notification area and removal is
//! scheduled after a fixed lifetime. A notification dismissed by the user
//! before that is simply absent when the scheduled removal runs.

use crate::page::Handle;
use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;
use tracing::debug;

/// Default time a notification stays on screen.
pub const DEFAULT_LIFETIME: Duration = Duration::from_millis(5000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Warning,
    Danger,
}

impl Severity {
    pub fn alert_class(self) -> &'static str {
        match self {
            Severity::Info => "alert-info",
            Severity::Success => "alert-success",
            Severity::Warning => "alert-warning",
            Severity::Danger => "alert-danger",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub severity: Severity,
}

/// Runs a task once after a delay.
pub trait Scheduler {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>);
}

/// Browser timers via `setTimeout`.
#[cfg(target_arch = "wasm32")]
pub struct BrowserScheduler;

#[cfg(target_arch = "wasm32")]
impl Scheduler for BrowserScheduler {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) {
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        wasm_bindgen_futures::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(millis).await;
            task();
        });
    }
}

pub struct Notifier {
    area: Handle<Vec<Toast>>,
    scheduler: Rc<dyn Scheduler>,
    lifetime: Duration,
    next_id: Cell<u64>,
}

impl Notifier {
    pub fn new(area: Handle<Vec<Toast>>, scheduler: Rc<dyn Scheduler>, lifetime: Duration) -> Self {
        Self {
            area,
            scheduler,
            lifetime,
            next_id: Cell::new(1),
        }
    }

    /// Show `message` and schedule its removal. Returns the notification id.
    pub fn notify(&self, message: impl Into<String>, severity: Severity) -> u64 {
        let id = self.next_id.get();
        self.next_id.set(id + 1);

        let mut toast = Some(Toast {
            id,
            message: message.into(),
            severity,
        });
        self.area.update(&mut |toasts| {
            if let Some(t) = toast.take() {
                toasts.push(t);
            }
        });

        let area = self.area.clone();
        self.scheduler.schedule(
            self.lifetime,
            Box::new(move || {
                if !remove(&area, id) {
                    debug!(id = id, "notification already dismissed");
                }
            }),
        );
        id
    }

    pub fn info(&self, message: impl Into<String>) -> u64 {
        self.notify(message, Severity::Info)
    }

    /// Manual dismissal. Unknown ids are ignored.
    pub fn dismiss(&self, id: u64) {
        remove(&self.area, id);
    }
}

fn remove(area: &Handle<Vec<Toast>>, id: u64) -> bool {
    let mut removed = false;
    area.update(&mut |toasts| {
        let before = toasts.len();
        toasts.retain(|t| t.id != id);
        removed = toasts.len() != before;
    });
    removed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ManualScheduler;
    use std::cell::RefCell;

    fn setup() -> (Rc<RefCell<Vec<Toast>>>, Rc<ManualScheduler>, Notifier) {
        let area = Rc::new(RefCell::new(Vec::new()));
        let scheduler = Rc::new(ManualScheduler::default());
        let notifier = Notifier::new(area.clone(), scheduler.clone(), DEFAULT_LIFETIME);
        (area, scheduler, notifier)
    }

    #[test]
    fn test_notification_expires_after_lifetime() {
        let (area, scheduler, notifier) = setup();
        notifier.notify("Harvester started", Severity::Success);

        assert_eq!(area.borrow().len(), 1);
        assert_eq!(area.borrow()[0].severity, Severity::Success);
        assert_eq!(scheduler.delays(), vec![DEFAULT_LIFETIME]);

        scheduler.run_all();
        assert!(area.borrow().is_empty());
    }

    #[test]
    fn test_manual_dismiss_before_expiry() {
        let (area, scheduler, notifier) = setup();
        let id = notifier.info("hello");
        notifier.dismiss(id);
        assert!(area.borrow().is_empty());

        // scheduled cleanup finds nothing and must not panic
        scheduler.run_all();
        assert!(area.borrow().is_empty());
    }

    #[test]
    fn test_notifications_stack_independently() {
        let (area, scheduler, notifier) = setup();
        let first = notifier.info("same");
        let second = notifier.info("same");
        notifier.notify("careful", Severity::Warning);
        assert_ne!(first, second);
        assert_eq!(area.borrow().len(), 3);

        notifier.dismiss(second);
        assert_eq!(area.borrow().len(), 2);

        scheduler.run_all();
        assert!(area.borrow().is_empty());
    }

    #[test]
    fn test_info_is_default_severity() {
        let (area, _scheduler, notifier) = setup();
        notifier.info("x");
        assert_eq!(area.borrow()[0].severity, Severity::Info);
        assert_eq!(Severity::Info.alert_class(), "alert-info");
        assert_eq!(Severity::Danger.alert_class(), "alert-danger");
    }
}
