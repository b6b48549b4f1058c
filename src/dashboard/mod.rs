//! Dashboard wiring.
//!
//! Builds the components from a config, a backend client, the page handles
//! and a scheduler. The Dioxus web UI (`view`, wasm only) owns the handles; this
//! module stays renderer-agnostic so the wiring can be exercised natively.

#[cfg(target_arch = "wasm32")]
pub mod view;

use crate::api::HarvesterApi;
use crate::candidates::CandidateListView;
use crate::config::Config;
use crate::controls::ControlActions;
use crate::i18n::Strings;
use crate::notify::{Notifier, Scheduler, Toast};
use crate::page::{ControlButtons, Handle, StatusElements, TableRow};
use crate::status::StatusView;
use std::rc::Rc;
use tracing::info;

/// Every element handle the dashboard writes to.
#[derive(Clone)]
pub struct PageHandles {
    pub buttons: ControlButtons,
    pub status: StatusElements,
    pub candidates_tbody: Option<Handle<Vec<TableRow>>>,
    pub notifications: Handle<Vec<Toast>>,
}

pub struct Dashboard {
    pub actions: ControlActions,
    pub status: StatusView,
    pub candidates: CandidateListView,
    pub notifier: Rc<Notifier>,
    pub strings: &'static Strings,
}

impl Dashboard {
    pub fn new(
        config: &Config,
        api: Rc<dyn HarvesterApi>,
        page: PageHandles,
        scheduler: Rc<dyn Scheduler>,
    ) -> Self {
        let strings = config.ui.locale.strings();
        let notifier = Rc::new(Notifier::new(
            page.notifications,
            scheduler,
            config.notification_lifetime(),
        ));
        Self {
            actions: ControlActions::new(
                api.clone(),
                page.buttons.clone(),
                notifier.clone(),
                strings,
            ),
            status: StatusView::new(
                api.clone(),
                page.status,
                page.buttons,
                strings,
            ),
            candidates: CandidateListView::new(api, page.candidates_tbody, strings),
            notifier,
            strings,
        }
    }

    /// Initial page load: one status fetch and one candidates fetch.
    pub async fn load(&self) {
        info!("loading dashboard");
        self.refresh().await;
    }

    /// Refresh status and candidates concurrently. Failures are already
    /// logged by the views and leave the page as it was.
    pub async fn refresh(&self) {
        let (status, candidates) =
            futures::join!(self.status.refresh(), self.candidates.refresh());
        if status.is_err() || candidates.is_err() {
            info!(
                status_ok = status.is_ok(),
                candidates_ok = candidates.is_ok(),
                "dashboard refresh incomplete"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{CandidatesResponse, CommandStatus, CANDIDATES_PATH, STATUS_PATH};
    use crate::i18n::Locale;
    use crate::page::StatusBadge;
    use crate::testing::{run_status, ManualScheduler, MockApi, Reply};
    use futures::executor::block_on;
    use std::cell::RefCell;

    struct Page {
        start: Rc<RefCell<bool>>,
        stop: Rc<RefCell<bool>>,
        badge: Rc<RefCell<StatusBadge>>,
        rows: Rc<RefCell<Vec<TableRow>>>,
        toasts: Rc<RefCell<Vec<Toast>>>,
    }

    fn page() -> (Page, PageHandles) {
        let p = Page {
            start: Rc::new(RefCell::new(false)),
            stop: Rc::new(RefCell::new(false)),
            badge: Rc::new(RefCell::new(StatusBadge::Unknown)),
            rows: Rc::new(RefCell::new(Vec::new())),
            toasts: Rc::new(RefCell::new(Vec::new())),
        };
        let handles = PageHandles {
            buttons: ControlButtons {
                start: Some(p.start.clone()),
                stop: Some(p.stop.clone()),
            },
            status: StatusElements {
                status_text: Some(p.badge.clone()),
                ..Default::default()
            },
            candidates_tbody: Some(p.rows.clone()),
            notifications: p.toasts.clone(),
        };
        (p, handles)
    }

    #[test]
    fn test_load_fetches_status_and_candidates_once() {
        let api = Rc::new(MockApi::default());
        *api.status.borrow_mut() = Reply::Ok(run_status(true));
        *api.candidates.borrow_mut() = Reply::Ok(CandidatesResponse::default());
        let (p, handles) = page();
        let dash = Dashboard::new(
            &Config::default(),
            api.clone(),
            handles,
            Rc::new(ManualScheduler::default()),
        );

        block_on(dash.load());
        let mut calls = api.calls();
        calls.sort();
        assert_eq!(calls, vec![CANDIDATES_PATH, STATUS_PATH]);
        assert_eq!(*p.badge.borrow(), StatusBadge::Active);
        assert!(*p.stop.borrow());
        assert_eq!(p.rows.borrow().len(), 1);
        assert!(p.toasts.borrow().is_empty());
    }

    #[test]
    fn test_load_survives_backend_down() {
        let api = Rc::new(MockApi::default());
        let (p, handles) = page();
        let dash = Dashboard::new(
            &Config::default(),
            api,
            handles,
            Rc::new(ManualScheduler::default()),
        );

        block_on(dash.load());
        assert_eq!(*p.badge.borrow(), StatusBadge::Unknown);
        assert!(p.rows.borrow().is_empty());
        assert!(p.toasts.borrow().is_empty());
    }

    #[test]
    fn test_start_then_stop_round_trip() {
        let api = Rc::new(MockApi::default());
        *api.start.borrow_mut() = Reply::Ok(CommandStatus::Started);
        *api.stop.borrow_mut() = Reply::Ok(CommandStatus::Stopped);
        let (p, handles) = page();
        let scheduler = Rc::new(ManualScheduler::default());
        let mut config = Config::default();
        config.ui.locale = Locale::En;
        let dash = Dashboard::new(&config, api, handles, scheduler.clone());

        block_on(dash.actions.start()).unwrap();
        assert!(!*p.start.borrow());
        assert!(*p.stop.borrow());

        block_on(dash.actions.stop()).unwrap();
        assert!(*p.start.borrow());
        assert!(!*p.stop.borrow());

        let messages: Vec<String> = p.toasts.borrow().iter().map(|t| t.message.clone()).collect();
        assert_eq!(messages, vec!["Harvester started", "Harvester stopped"]);
        assert_eq!(scheduler.pending(), 2);

        scheduler.run_all();
        assert!(p.toasts.borrow().is_empty());
    }
}
