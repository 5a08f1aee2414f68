use std::{io, time::Duration};

use anyhow::Result;
use chrono::NaiveDate;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use pioneer_core::i18n::month_names;
use pioneer_core::service_year::{months_of_service_year, service_year_bounds};
use pioneer_core::{
    aggregate, format_hours_minutes, service_year_of, translate, DailyEntry, Message, Pace, ProgressReport, Totals,
};
use ratatui::{
    prelude::*,
    widgets::{Bar, BarChart, BarGroup, Block, BorderType, Borders, Gauge, Padding, Paragraph},
};

use crate::report::{pace_label, signed_hours};
use crate::Context;

// --- THEME ---
struct Theme {
    primary: Color,
    muted: Color,
    text: Color,
    bar: Color,
    behind: Color,
    on_track: Color,
    ahead: Color,
}

const THEME: Theme = Theme {
    primary: Color::Cyan,
    muted: Color::DarkGray,
    text: Color::White,
    bar: Color::Blue,
    behind: Color::Red,
    on_track: Color::Green,
    ahead: Color::Magenta,
};

fn pace_color(pace: Pace) -> Color {
    match pace {
        Pace::Behind => THEME.behind,
        Pace::OnTrack => THEME.on_track,
        Pace::Ahead => THEME.ahead,
    }
}

pub struct DashboardApp {
    pub current_service_year: i32,
    pub service_year: i32,
    /// Oldest service year with data, or the current one.
    pub first_service_year: i32,
    now: NaiveDate,
}

impl DashboardApp {
    pub fn new(entries: &[DailyEntry], now: NaiveDate) -> Self {
        let current = service_year_of(now);
        let first = entries
            .iter()
            .map(|e| service_year_of(e.date))
            .min()
            .unwrap_or(current)
            .min(current);
        Self {
            current_service_year: current,
            service_year: current,
            first_service_year: first,
            now,
        }
    }

    pub fn next_year(&mut self) {
        if self.service_year < self.current_service_year {
            self.service_year += 1;
        }
    }

    pub fn previous_year(&mut self) {
        if self.service_year > self.first_service_year {
            self.service_year -= 1;
        }
    }

    /// Reference date for the selected year: today, or the last day of a past year.
    pub fn reference_date(&self) -> NaiveDate {
        if self.service_year == self.current_service_year {
            self.now
        } else {
            service_year_bounds(self.service_year).1
        }
    }
}

pub fn run(entries: &[DailyEntry], ctx: &Context) -> Result<()> {
    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = DashboardApp::new(entries, ctx.now);

    let res = (|| -> Result<()> {
        loop {
            let reference = app.reference_date();
            let totals = aggregate(entries, reference);
            let report = ProgressReport::evaluate(&totals, ctx.goal, reference);
            terminal.draw(|f| ui(f, &app, &totals, &report, ctx))?;

            if event::poll(Duration::from_millis(100))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        match key.code {
                            KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                            KeyCode::Left | KeyCode::Char('h') => app.previous_year(),
                            KeyCode::Right | KeyCode::Char('l') => app.next_year(),
                            _ => {}
                        }
                    }
                }
            }
        }
    })();

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn ui(frame: &mut Frame, app: &DashboardApp, totals: &Totals, report: &ProgressReport, ctx: &Context) {
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Chart + Sidebar
            Constraint::Length(1), // Footer
        ])
        .split(frame.area());

    // --- Header ---
    let header_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1), Constraint::Length(32)])
        .split(main_layout[0]);

    let subtitle = translate(ctx.lang, Message::HeaderSubtitle, &[]);
    let app_title = Paragraph::new(Line::from(vec![
        Span::styled("PIONEER  ", Style::default().fg(THEME.primary).add_modifier(Modifier::BOLD)),
        Span::styled(subtitle, Style::default().fg(THEME.muted)),
    ]))
    .block(Block::default().padding(Padding::new(0, 0, 1, 0)));
    frame.render_widget(app_title, header_layout[0]);

    let year_label = format!(" {} ", app.service_year);
    let nav_text = Line::from(vec![
        Span::styled(
            " < ",
            Style::default().fg(if app.service_year > app.first_service_year { THEME.text } else { THEME.muted }),
        ),
        Span::styled(year_label, Style::default().fg(THEME.text).add_modifier(Modifier::BOLD)),
        Span::styled(
            " > ",
            Style::default().fg(if app.service_year < app.current_service_year { THEME.text } else { THEME.muted }),
        ),
    ]);
    let nav = Paragraph::new(nav_text)
        .alignment(Alignment::Right)
        .block(Block::default().padding(Padding::new(0, 0, 1, 0)));
    frame.render_widget(nav, header_layout[1]);
    frame.render_widget(
        Block::default().borders(Borders::BOTTOM).border_style(Style::default().fg(THEME.muted)),
        main_layout[0],
    );

    // --- Main Content Split ---
    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(65), // Chart
            Constraint::Length(1),      // Gutter
            Constraint::Percentage(35), // Info Panel
        ])
        .split(main_layout[1]);

    draw_chart(frame, totals, report, ctx, content_chunks[0]);
    draw_info_panel(frame, report, ctx, content_chunks[2]);

    // --- Footer ---
    let help = Line::from(vec![
        Span::styled("YEAR: ", Style::default().fg(THEME.muted)),
        Span::styled("←/→ ", Style::default().fg(THEME.text)),
        Span::raw("  "),
        Span::styled("QUIT: ", Style::default().fg(THEME.muted)),
        Span::styled("q", Style::default().fg(THEME.text)),
    ]);
    frame.render_widget(Paragraph::new(help).alignment(Alignment::Center), main_layout[2]);
}

fn draw_chart(frame: &mut Frame, totals: &Totals, report: &ProgressReport, ctx: &Context, area: Rect) {
    let names = month_names(ctx.lang);

    let bars: Vec<Bar> = months_of_service_year(totals.service_year)
        .iter()
        .map(|key| {
            let hours = totals.month_hours(key);
            let month_index = key[5..].parse::<usize>().unwrap_or(1) - 1;
            let label: String = names[month_index].chars().take(3).collect();
            let color = if hours >= report.monthly_goal { THEME.on_track } else { THEME.bar };
            Bar::default()
                .label(label)
                .value((hours * 10.0) as u64)
                .style(Style::default().fg(color))
                .text_value(if hours > 0.0 { format_hours_minutes(hours) } else { String::new() })
        })
        .collect();

    let chart_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(THEME.muted))
        .title(format!(" {} ", translate(ctx.lang, Message::NavHistory, &[])));

    let peak = totals.monthly.values().map(|m| m.hours).fold(report.monthly_goal, f64::max);
    let chart = BarChart::default()
        .block(chart_block)
        .bar_width(5)
        .bar_gap(1)
        .data(BarGroup::default().bars(&bars))
        .max((peak * 10.0) as u64);

    frame.render_widget(chart, area);
}

fn draw_info_panel(frame: &mut Frame, report: &ProgressReport, ctx: &Context, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(11), // Stats
            Constraint::Min(3),     // Gauge
        ])
        .split(area);

    let row = |msg: Message, value: String, color: Color| {
        Line::from(vec![
            Span::styled(format!("{}: ", translate(ctx.lang, msg, &[])), Style::default().fg(THEME.muted)),
            Span::styled(value, Style::default().fg(color).add_modifier(Modifier::BOLD)),
        ])
    };

    let status_color = if report.monthly_status >= 0.0 { THEME.on_track } else { THEME.behind };
    let goal = format!("{}", report.yearly_goal);
    let info_text = vec![
        Line::from(Span::styled(
            translate(ctx.lang, Message::ProgressGoal, &[goal.as_str()]),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        row(Message::HomeServiceYearHours, format_hours_minutes(report.yearly_hours), THEME.text),
        row(Message::ProgressHoursRemaining, format_hours_minutes(report.hours_needed), THEME.text),
        row(
            Message::ProgressMonthlyAvgNeeded,
            format_hours_minutes(report.monthly_average_needed),
            THEME.text,
        ),
        row(Message::ProgressMonthlyStatus, signed_hours(report.monthly_status), status_color),
    ];

    let info_block = Paragraph::new(info_text).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(THEME.muted))
            .title(format!(" {} ", translate(ctx.lang, Message::ProgressTitle, &[]))),
    );
    frame.render_widget(info_block, chunks[0]);

    let label = format!(
        "{:.0}{} · {}",
        report.percentage,
        translate(ctx.lang, Message::ProgressCompleted, &[]),
        pace_label(report.pace, ctx)
    );
    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(format!(" {} ", translate(ctx.lang, Message::NavProgress, &[])))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(THEME.muted)),
        )
        .gauge_style(Style::default().fg(pace_color(report.pace)))
        .ratio((report.percentage / 100.0).clamp(0.0, 1.0))
        .label(label);

    frame.render_widget(gauge, chunks[1]);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(date: NaiveDate) -> DailyEntry {
        DailyEntry {
            id: "x".to_string(),
            date,
            hours: 1.0,
        }
    }

    #[test]
    fn test_year_navigation_is_bounded() {
        let now = NaiveDate::from_ymd_opt(2025, 10, 3).unwrap();
        let entries = vec![entry(NaiveDate::from_ymd_opt(2023, 12, 1).unwrap())];
        let mut app = DashboardApp::new(&entries, now);

        assert_eq!(app.service_year, 2026);
        assert_eq!(app.reference_date(), now);
        app.next_year();
        assert_eq!(app.service_year, 2026);

        app.previous_year();
        app.previous_year();
        app.previous_year();
        assert_eq!(app.service_year, 2024);
        assert_eq!(app.reference_date(), NaiveDate::from_ymd_opt(2024, 8, 31).unwrap());
    }
}
