//! Dioxus web UI.
//!
//! The root component owns every page signal, so scheduled notification
//! removals and in-flight refreshes never outlive the state they write to
//! when the user switches routes.

use crate::api::HttpApi;
use crate::config::Config;
use crate::dashboard::{Dashboard, PageHandles};
use crate::i18n::Strings;
use crate::notify::{BrowserScheduler, Toast};
use crate::page::{ControlButtons, StatusBadge, StatusElements, TableRow};
use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;
use std::rc::Rc;
use tracing::info;

#[derive(Clone, Routable, Debug, PartialEq)]
enum Route {
    #[layout(Shell)]
        #[route("/")]
        Home {},
        #[route("/settings")]
        Settings {},
}

/// Signals backing the page elements.
#[derive(Clone, Copy)]
struct PageState {
    start_enabled: Signal<bool>,
    stop_enabled: Signal<bool>,
    badge: Signal<StatusBadge>,
    candidates_count: Signal<String>,
    transactions_count: Signal<String>,
    last_run: Signal<String>,
    dry_run: Signal<Option<bool>>,
    rows: Signal<Vec<TableRow>>,
    toasts: Signal<Vec<Toast>>,
}

impl PageState {
    fn handles(&self) -> PageHandles {
        PageHandles {
            buttons: ControlButtons {
                start: Some(Rc::new(self.start_enabled)),
                stop: Some(Rc::new(self.stop_enabled)),
            },
            status: StatusElements {
                status_text: Some(Rc::new(self.badge)),
                candidates_count: Some(Rc::new(self.candidates_count)),
                transactions_count: Some(Rc::new(self.transactions_count)),
                last_run: Some(Rc::new(self.last_run)),
                dry_run: Some(Rc::new(self.dry_run)),
            },
            candidates_tbody: Some(Rc::new(self.rows)),
            notifications: Rc::new(self.toasts),
        }
    }
}

#[derive(Clone)]
struct AppContext {
    config: Rc<Config>,
    api: Rc<HttpApi>,
    dashboard: Rc<Dashboard>,
    page: PageState,
}

impl AppContext {
    fn strings(&self) -> &'static Strings {
        self.dashboard.strings
    }
}

/// Empty base URL means the origin the page was served from.
fn resolve_api_base(configured: &str) -> String {
    if !configured.is_empty() {
        return configured.to_string();
    }
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default()
}

#[component]
pub fn App() -> Element {
    let config = use_hook(|| Rc::new(Config::load().unwrap_or_default()));

    let page = PageState {
        start_enabled: use_signal(|| true),
        stop_enabled: use_signal(|| false),
        badge: use_signal(StatusBadge::default),
        candidates_count: use_signal(|| "0".to_string()),
        transactions_count: use_signal(|| "0".to_string()),
        last_run: use_signal(String::new),
        dry_run: use_signal(|| None),
        rows: use_signal(Vec::new),
        toasts: use_signal(Vec::new),
    };

    let ctx = use_context_provider(|| {
        let api_base = resolve_api_base(&config.api.base_url);
        info!(api_base = %api_base, locale = config.ui.locale.code(), "dashboard starting");
        let api = Rc::new(HttpApi::new(api_base));
        let dashboard = Dashboard::new(
            &config,
            api.clone(),
            page.handles(),
            Rc::new(BrowserScheduler),
        );
        AppContext {
            config: config.clone(),
            api,
            dashboard: Rc::new(dashboard),
            page,
        }
    });

    let poll_interval = ctx.config.poll_interval();
    let dashboard = ctx.dashboard.clone();
    use_future(move || {
        let dashboard = dashboard.clone();
        async move {
            dashboard.load().await;
            let Some(interval) = poll_interval else {
                return;
            };
            let millis = u32::try_from(interval.as_millis()).unwrap_or(u32::MAX);
            loop {
                TimeoutFuture::new(millis).await;
                dashboard.refresh().await;
            }
        }
    });

    rsx! {
        Router::<Route> {}
    }
}

#[component]
fn Shell() -> Element {
    let ctx = use_context::<AppContext>();
    let strings = ctx.strings();
    let toasts = ctx.page.toasts.cloned();

    rsx! {
        nav { class: "navbar navbar-dark bg-dark mb-4",
            div { class: "container",
                span { class: "navbar-brand", "{strings.title}" }
                div { class: "navbar-nav flex-row gap-3",
                    Link { to: Route::Home {}, "{strings.dashboard}" }
                    Link { to: Route::Settings {}, "{strings.settings}" }
                }
            }
        }
        div { class: "container",
            Outlet::<Route> {}
        }
        {toasts.iter().enumerate().map(|(slot, toast)| render_toast(slot, toast, ctx.dashboard.clone()))}
    }
}

fn render_toast(slot: usize, toast: &Toast, dashboard: Rc<Dashboard>) -> Element {
    let class = format!(
        "alert {} alert-dismissible fade show position-fixed",
        toast.severity.alert_class()
    );
    let style = format!(
        "top: {}px; right: 20px; z-index: 9999; min-width: 300px;",
        20 + slot * 70
    );
    let id = toast.id;
    rsx! {
        div { key: "{id}", class: "{class}", style: "{style}",
            "{toast.message}"
            button {
                r#type: "button",
                class: "btn-close",
                onclick: move |_| dashboard.notifier.dismiss(id),
            }
        }
    }
}

#[component]
fn Home() -> Element {
    let ctx = use_context::<AppContext>();
    let strings = ctx.strings();
    let page = ctx.page;

    let badge = page.badge.cloned();
    let badge_class = badge.css_class();
    let badge_label = badge.label(strings);
    let start_disabled = !page.start_enabled.cloned();
    let stop_disabled = !page.stop_enabled.cloned();
    let candidates_count = page.candidates_count.cloned();
    let transactions_count = page.transactions_count.cloned();
    let last_run = match page.last_run.cloned() {
        s if s.is_empty() => strings.never.to_string(),
        s => s,
    };
    let mode = page.dry_run.cloned().map(|dry| {
        if dry {
            ("badge bg-warning text-dark", strings.dry_run)
        } else {
            ("badge bg-danger", strings.live)
        }
    });
    let rows = page.rows.cloned();

    let on_start = ctx.dashboard.clone();
    let on_stop = ctx.dashboard.clone();
    let on_refresh = ctx.dashboard.clone();

    rsx! {
        div { class: "card mb-4",
            div { class: "card-body",
                div { class: "row",
                    div { class: "col",
                        h6 { class: "text-muted", "{strings.status_heading}" }
                        div { id: "status-text",
                            span { class: "{badge_class}", "{badge_label}" }
                        }
                        if let Some((mode_class, mode_label)) = mode {
                            span { class: "{mode_class}", "{mode_label}" }
                        }
                    }
                    div { class: "col",
                        h6 { class: "text-muted", "{strings.candidates_heading}" }
                        div { id: "candidates-count", class: "fs-4", "{candidates_count}" }
                    }
                    div { class: "col",
                        h6 { class: "text-muted", "{strings.transactions_heading}" }
                        div { id: "transactions-count", class: "fs-4", "{transactions_count}" }
                    }
                    div { class: "col",
                        h6 { class: "text-muted", "{strings.last_run_heading}" }
                        div { id: "last-run", "{last_run}" }
                    }
                }
                div { class: "mt-3",
                    button {
                        id: "startBtn",
                        class: "btn btn-success me-2",
                        disabled: start_disabled,
                        onclick: move |_| {
                            let dashboard = on_start.clone();
                            spawn(async move {
                                let _ = dashboard.actions.start().await;
                            });
                        },
                        "{strings.start_button}"
                    }
                    button {
                        id: "stopBtn",
                        class: "btn btn-danger me-2",
                        disabled: stop_disabled,
                        onclick: move |_| {
                            let dashboard = on_stop.clone();
                            spawn(async move {
                                let _ = dashboard.actions.stop().await;
                            });
                        },
                        "{strings.stop_button}"
                    }
                    button {
                        class: "btn btn-outline-secondary",
                        onclick: move |_| {
                            let dashboard = on_refresh.clone();
                            spawn(async move {
                                dashboard.refresh().await;
                            });
                        },
                        "{strings.refresh_button}"
                    }
                }
            }
        }
        table { class: "table table-striped",
            thead {
                tr {
                    th { "{strings.col_pair}" }
                    th { "{strings.col_token}" }
                    th { "{strings.col_surplus}" }
                }
            }
            tbody { id: "candidates-tbody",
                {rows.iter().enumerate().map(|(i, row)| render_row(i, row))}
            }
        }
    }
}

fn render_row(index: usize, row: &TableRow) -> Element {
    match row {
        TableRow::Candidate {
            pair,
            token,
            surplus,
        } => rsx! {
            tr { key: "{index}",
                td { "{pair}" }
                td { code { "{token}" } }
                td { "{surplus}" }
            }
        },
        TableRow::Placeholder { colspan, message } => rsx! {
            tr { key: "{index}",
                td { colspan: "{colspan}", class: "text-center text-muted", "{message}" }
            }
        },
    }
}

#[component]
fn Settings() -> Element {
    let ctx = use_context::<AppContext>();
    let strings = ctx.strings();
    let config = ctx.config.clone();
    let api_base = ctx.api.base_url().to_string();
    let lifetime_ms = config.notifications.lifetime_ms;
    let poll = match config.poll_interval() {
        Some(d) => format!("{}s", d.as_secs()),
        None => "-".to_string(),
    };
    let locale = config.ui.locale.code();
    let level = config.logging.level.clone();

    rsx! {
        h4 { class: "mb-3", "{strings.settings}" }
        table { class: "table",
            tbody {
                tr { th { "api.base_url" } td { code { "{api_base}" } } }
                tr { th { "notifications.lifetime_ms" } td { "{lifetime_ms}" } }
                tr { th { "refresh.poll_interval_secs" } td { "{poll}" } }
                tr { th { "ui.locale" } td { "{locale}" } }
                tr { th { "logging.level" } td { "{level}" } }
            }
        }
    }
}
