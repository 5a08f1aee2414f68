use anyhow::{anyhow, Result};

use crate::time::format_hours_minutes;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    English,
    Italian,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::English, Language::Italian];

    pub fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Italian => "it",
        }
    }

    /// Matches on the primary subtag, so "it", "it-IT" and "it_IT.UTF-8" are all Italian.
    pub fn from_code(code: &str) -> Option<Self> {
        let primary = code
            .split(['-', '_', '.'])
            .next()
            .unwrap_or_default()
            .to_lowercase();
        Language::ALL.into_iter().find(|l| l.code() == primary)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    HeaderSubtitle,
    NavProgress,
    NavHistory,
    HomeQuickSummary,
    HomeCurrentMonthHours,
    HomeServiceYearHours,
    ProgressTitle,
    ProgressGoal,
    ProgressCompleted,
    ProgressMonthlyStatus,
    ProgressHoursRemaining,
    ProgressMonthlyAvgNeeded,
    HistoryTitle,
    HistoryShareText,
    SettingsExportSuccess,
    SettingsImportSuccess,
    SettingsImportError,
    SettingsClearConfirm,
    SettingsClearSuccess,
    MonthsFull,
    DaysShort,
    PaceBehind,
    PaceOnTrack,
    PaceAhead,
    EntryAdded,
    EntryDeleted,
    EntryNotFound,
    EntryInvalidHours,
    NoEntries,
}

impl Message {
    pub const ALL: [Message; 29] = [
        Message::HeaderSubtitle,
        Message::NavProgress,
        Message::NavHistory,
        Message::HomeQuickSummary,
        Message::HomeCurrentMonthHours,
        Message::HomeServiceYearHours,
        Message::ProgressTitle,
        Message::ProgressGoal,
        Message::ProgressCompleted,
        Message::ProgressMonthlyStatus,
        Message::ProgressHoursRemaining,
        Message::ProgressMonthlyAvgNeeded,
        Message::HistoryTitle,
        Message::HistoryShareText,
        Message::SettingsExportSuccess,
        Message::SettingsImportSuccess,
        Message::SettingsImportError,
        Message::SettingsClearConfirm,
        Message::SettingsClearSuccess,
        Message::MonthsFull,
        Message::DaysShort,
        Message::PaceBehind,
        Message::PaceOnTrack,
        Message::PaceAhead,
        Message::EntryAdded,
        Message::EntryDeleted,
        Message::EntryNotFound,
        Message::EntryInvalidHours,
        Message::NoEntries,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Message::HeaderSubtitle => "header.subtitle",
            Message::NavProgress => "nav.progress",
            Message::NavHistory => "nav.history",
            Message::HomeQuickSummary => "home.quickSummary",
            Message::HomeCurrentMonthHours => "home.currentMonthHours",
            Message::HomeServiceYearHours => "home.serviceYearHours",
            Message::ProgressTitle => "progress.title",
            Message::ProgressGoal => "progress.goal",
            Message::ProgressCompleted => "progress.completed",
            Message::ProgressMonthlyStatus => "progress.monthlyStatus",
            Message::ProgressHoursRemaining => "progress.hoursRemaining",
            Message::ProgressMonthlyAvgNeeded => "progress.monthlyAvgNeeded",
            Message::HistoryTitle => "history.title",
            Message::HistoryShareText => "history.shareText",
            Message::SettingsExportSuccess => "settings.exportSuccess",
            Message::SettingsImportSuccess => "settings.importSuccess",
            Message::SettingsImportError => "settings.importError",
            Message::SettingsClearConfirm => "settings.clearConfirm",
            Message::SettingsClearSuccess => "settings.clearSuccess",
            Message::MonthsFull => "months.full",
            Message::DaysShort => "days.short",
            Message::PaceBehind => "pace.behind",
            Message::PaceOnTrack => "pace.onTrack",
            Message::PaceAhead => "pace.ahead",
            Message::EntryAdded => "entry.added",
            Message::EntryDeleted => "entry.deleted",
            Message::EntryNotFound => "entry.notFound",
            Message::EntryInvalidHours => "entry.invalidHours",
            Message::NoEntries => "entry.none",
        }
    }
}

// English is the fallback language and must cover every message.
fn english(msg: Message) -> Option<&'static str> {
    Some(match msg {
        Message::HeaderSubtitle => "Hour log for pioneer service.",
        Message::NavProgress => "Progress",
        Message::NavHistory => "History",
        Message::HomeQuickSummary => "Quick Summary",
        Message::HomeCurrentMonthHours => "Current Month's Hours ({0})",
        Message::HomeServiceYearHours => "Total Service Year Hours",
        Message::ProgressTitle => "Annual Progress",
        Message::ProgressGoal => "Goal: {0} hours",
        Message::ProgressCompleted => "% completed",
        Message::ProgressMonthlyStatus => "Monthly Status",
        Message::ProgressHoursRemaining => "Hours Remaining",
        Message::ProgressMonthlyAvgNeeded => "Monthly Average Needed",
        Message::HistoryTitle => "Service Year History {0}",
        Message::HistoryShareText => "Report for {0} {1}: {2} hours.",
        Message::SettingsExportSuccess => "Backup written to {0}",
        Message::SettingsImportSuccess => "Data imported successfully!",
        Message::SettingsImportError => "Error: The backup file is not valid.",
        Message::SettingsClearConfirm => {
            "Are you sure you want to delete all data? This action is irreversible."
        }
        Message::SettingsClearSuccess => "All data has been deleted.",
        Message::MonthsFull => {
            "January,February,March,April,May,June,July,August,September,October,November,December"
        }
        Message::DaysShort => "Mon,Tue,Wed,Thu,Fri,Sat,Sun",
        Message::PaceBehind => "Behind",
        Message::PaceOnTrack => "On track",
        Message::PaceAhead => "Ahead",
        Message::EntryAdded => "Added {0} on {1} (ID: {2})",
        Message::EntryDeleted => "Entry {0} deleted.",
        Message::EntryNotFound => "No entry with ID {0}.",
        Message::EntryInvalidHours => "Hours must be greater than zero; nothing was saved.",
        Message::NoEntries => "No entries yet.",
    })
}

fn italian(msg: Message) -> Option<&'static str> {
    let text = match msg {
        Message::HeaderSubtitle => "Registro delle ore per il servizio di pioniere.",
        Message::NavProgress => "Progresso",
        Message::NavHistory => "Cronologia",
        Message::HomeQuickSummary => "Riepilogo Rapido",
        Message::HomeCurrentMonthHours => "Ore Mese Corrente ({0})",
        Message::HomeServiceYearHours => "Totale Ore Anno di Servizio",
        Message::ProgressTitle => "Progresso Annuale",
        Message::ProgressGoal => "Obiettivo: {0} ore",
        Message::ProgressCompleted => "% completato",
        Message::ProgressMonthlyStatus => "Stato Mensile",
        Message::ProgressHoursRemaining => "Ore Mancanti",
        Message::ProgressMonthlyAvgNeeded => "Media Mensile Necessaria",
        Message::HistoryTitle => "Cronologia Anno di Servizio {0}",
        Message::HistoryShareText => "Rapporto di {0} {1}: {2} ore.",
        Message::SettingsImportSuccess => "Dati importati con successo!",
        Message::SettingsImportError => "Errore: Il file di backup non è valido.",
        Message::SettingsClearConfirm => {
            "Sei sicuro di voler cancellare tutti i dati? Questa azione è irreversibile."
        }
        Message::SettingsClearSuccess => "Tutti i dati sono stati cancellati.",
        Message::MonthsFull => {
            "Gennaio,Febbraio,Marzo,Aprile,Maggio,Giugno,Luglio,Agosto,Settembre,Ottobre,Novembre,Dicembre"
        }
        Message::DaysShort => "Lun,Mar,Mer,Gio,Ven,Sab,Dom",
        Message::PaceBehind => "In ritardo",
        Message::PaceOnTrack => "In linea",
        Message::PaceAhead => "In anticipo",
        Message::EntryInvalidHours => "Le ore devono essere maggiori di zero; nulla è stato salvato.",
        Message::NoEntries => "Nessuna registrazione.",
        Message::SettingsExportSuccess
        | Message::EntryAdded
        | Message::EntryDeleted
        | Message::EntryNotFound => return None,
    };
    Some(text)
}

fn template(lang: Language, msg: Message) -> Option<&'static str> {
    match lang {
        Language::English => english(msg),
        Language::Italian => italian(msg),
    }
}

/// Looks up `msg` in `lang`, then English, then falls back to the raw key.
/// `{N}` placeholders take `args[N]`; placeholders without an argument stay as is.
pub fn translate(lang: Language, msg: Message, args: &[&str]) -> String {
    let text = template(lang, msg)
        .or_else(|| template(Language::English, msg))
        .unwrap_or(msg.key());
    fill_placeholders(text, args)
}

fn fill_placeholders(template: &str, args: &[&str]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        let Some(end) = after.find('}') else {
            out.push_str(&rest[start..]);
            return out;
        };

        let index = &after[..end];
        let arg = if !index.is_empty() && index.bytes().all(|b| b.is_ascii_digit()) {
            index.parse::<usize>().ok().and_then(|i| args.get(i))
        } else {
            None
        };

        match arg {
            Some(arg) => {
                out.push_str(arg);
                rest = &after[end + 1..];
            }
            None if index.contains('{') => {
                out.push('{');
                rest = after;
            }
            None => {
                out.push_str(&rest[start..start + end + 2]);
                rest = &after[end + 1..];
            }
        }
    }

    out.push_str(rest);
    out
}

pub fn month_names(lang: Language) -> Vec<String> {
    translate(lang, Message::MonthsFull, &[])
        .split(',')
        .map(str::to_string)
        .collect()
}

/// Short weekday names, Monday first.
pub fn weekday_names_short(lang: Language) -> Vec<String> {
    translate(lang, Message::DaysShort, &[])
        .split(',')
        .map(str::to_string)
        .collect()
}

/// Localized month name and year for a `YYYY-MM` key, e.g. "September 2024".
pub fn month_label(lang: Language, month_key: &str) -> Result<String> {
    let (year, month) = split_month_key(month_key)?;
    let names = month_names(lang);
    Ok(format!("{} {}", names[month - 1], year))
}

/// Text shared for one month's report.
pub fn share_text(lang: Language, month_key: &str, hours: f64) -> Result<String> {
    let (year, month) = split_month_key(month_key)?;
    let names = month_names(lang);
    Ok(translate(
        lang,
        Message::HistoryShareText,
        &[
            names[month - 1].as_str(),
            year.to_string().as_str(),
            format_hours_minutes(hours).as_str(),
        ],
    ))
}

fn split_month_key(month_key: &str) -> Result<(i32, usize)> {
    let invalid = || anyhow!("Month must be YYYY-MM: {}", month_key);
    let (year, month) = month_key.split_once('-').ok_or_else(invalid)?;
    let year: i32 = year.parse().map_err(|_| invalid())?;
    let month: usize = month.parse().map_err(|_| invalid())?;
    if !(1..=12).contains(&month) {
        return Err(invalid());
    }
    Ok((year, month))
}
