//! User-visible strings and date/time patterns.

use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Ru,
    En,
}

impl Locale {
    pub fn strings(self) -> &'static Strings {
        match self {
            Locale::Ru => &RU,
            Locale::En => &EN,
        }
    }

    /// Config spelling of the locale (`ui.locale`).
    pub fn code(self) -> &'static str {
        match self {
            Locale::Ru => "ru",
            Locale::En => "en",
        }
    }
}

pub struct Strings {
    pub title: &'static str,
    pub status_active: &'static str,
    pub status_stopped: &'static str,
    pub status_unknown: &'static str,
    pub harvester_started: &'static str,
    pub harvester_already_running: &'static str,
    pub harvester_stopped: &'static str,
    pub start_failed: &'static str,
    pub stop_failed: &'static str,
    pub no_candidates: &'static str,
    pub start_button: &'static str,
    pub stop_button: &'static str,
    pub refresh_button: &'static str,
    pub status_heading: &'static str,
    pub candidates_heading: &'static str,
    pub transactions_heading: &'static str,
    pub last_run_heading: &'static str,
    pub never: &'static str,
    pub dry_run: &'static str,
    pub live: &'static str,
    pub col_pair: &'static str,
    pub col_token: &'static str,
    pub col_surplus: &'static str,
    pub settings: &'static str,
    pub dashboard: &'static str,
    /// chrono format string for `last_run`.
    pub datetime_format: &'static str,
}

static RU: Strings = Strings {
    title: "Onchain Dust Harvester",
    status_active: "Активен",
    status_stopped: "Остановлен",
    status_unknown: "Неизвестно",
    harvester_started: "Harvester запущен",
    harvester_already_running: "Harvester уже работает",
    harvester_stopped: "Harvester остановлен",
    start_failed: "Ошибка запуска harvester",
    stop_failed: "Ошибка остановки harvester",
    no_candidates: "Кандидаты не найдены",
    start_button: "Запустить",
    stop_button: "Остановить",
    refresh_button: "Обновить",
    status_heading: "Статус",
    candidates_heading: "Кандидаты",
    transactions_heading: "Транзакции",
    last_run_heading: "Последний запуск",
    never: "Никогда",
    dry_run: "DRY RUN",
    live: "LIVE",
    col_pair: "Пара",
    col_token: "Токен",
    col_surplus: "Излишек",
    settings: "Настройки",
    dashboard: "Панель",
    datetime_format: "%d.%m.%Y, %H:%M:%S",
};

static EN: Strings = Strings {
    title: "Onchain Dust Harvester",
    status_active: "Active",
    status_stopped: "Stopped",
    status_unknown: "Unknown",
    harvester_started: "Harvester started",
    harvester_already_running: "Harvester is already running",
    harvester_stopped: "Harvester stopped",
    start_failed: "Failed to start harvester",
    stop_failed: "Failed to stop harvester",
    no_candidates: "No candidates found",
    start_button: "Start",
    stop_button: "Stop",
    refresh_button: "Refresh",
    status_heading: "Status",
    candidates_heading: "Candidates",
    transactions_heading: "Transactions",
    last_run_heading: "Last run",
    never: "Never",
    dry_run: "DRY RUN",
    live: "LIVE",
    col_pair: "Pair",
    col_token: "Token",
    col_surplus: "Surplus",
    settings: "Settings",
    dashboard: "Dashboard",
    datetime_format: "%-m/%-d/%Y, %-I:%M:%S %p",
};
