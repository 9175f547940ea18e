//! Ratatui-based terminal dashboard.
//!
//! The dashboard loads the merged GDP artifact, then renders one chart at a
//! time (cycled with `c`) next to the filter controls and the data grid. The
//! filtered view is recomputed synchronously on every input event.

use std::io;
use std::path::Path;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use plotters::style::RGBColor;
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
};

use crate::app::session::{Session, SessionOutput};
use crate::cli::TuiArgs;
use crate::domain::{GdpRow, MeanColumn};
use crate::error::AppError;
use crate::filter::FilteredView;
use crate::report::CountryMean;

mod plotters_chart;

use plotters_chart::{ChartSeries, GdpPlottersChart, SeriesKind};

/// Per-country series palette (RGB), cycled when more countries are selected.
const PALETTE: [(u8, u8, u8); 8] = [
    (0, 255, 255),   // cyan
    (255, 215, 0),   // gold
    (0, 255, 0),     // green
    (255, 105, 180), // pink
    (255, 165, 0),   // orange
    (135, 206, 250), // light blue
    (255, 80, 80),   // red
    (200, 200, 200), // gray
];

/// Most bars that fit readably in a terminal chart.
const MAX_BARS: usize = 12;

/// Start the dashboard.
pub fn run(args: TuiArgs) -> Result<(), AppError> {
    // Load (and fail) before touching the terminal, so loader errors print
    // as plain text naming the path and required columns.
    let session = Session::open(&args.file)?;

    let _guard = TerminalGuard::new()?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)
        .map_err(|e| AppError::network(format!("Failed to initialize terminal: {e}")))?;

    let mut app = App::new(session);
    app.event_loop(&mut terminal)
}

/// Ensures the terminal is restored (raw mode, alternate screen) on exit.
struct TerminalGuard;

impl TerminalGuard {
    fn new() -> Result<Self, AppError> {
        enable_raw_mode()
            .map_err(|e| AppError::network(format!("Failed to enable raw mode: {e}")))?;
        if let Err(e) = execute!(io::stdout(), EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(AppError::network(format!(
                "Failed to enter alternate screen: {e}"
            )));
        }
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

/// Which of the five widgets occupies the chart area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ChartKind {
    GdpLine,
    GrowthLine,
    Scatter,
    MeanGdpBar,
    MeanGrowthBar,
}

impl ChartKind {
    fn display_name(self) -> &'static str {
        match self {
            ChartKind::GdpLine => "GDP over time",
            ChartKind::GrowthLine => "GDP growth over time",
            ChartKind::Scatter => "GDP vs growth",
            ChartKind::MeanGdpBar => "Mean GDP by country",
            ChartKind::MeanGrowthBar => "Mean growth by country",
        }
    }

    fn next(self) -> Self {
        match self {
            ChartKind::GdpLine => ChartKind::GrowthLine,
            ChartKind::GrowthLine => ChartKind::Scatter,
            ChartKind::Scatter => ChartKind::MeanGdpBar,
            ChartKind::MeanGdpBar => ChartKind::MeanGrowthBar,
            ChartKind::MeanGrowthBar => ChartKind::GdpLine,
        }
    }
}

/// Focusable control fields, top to bottom.
const FIELD_YEAR_MIN: usize = 0;
const FIELD_YEAR_MAX: usize = 1;
const FIELD_COUNTRIES: usize = 2;

struct App {
    session: Session,
    output: SessionOutput,
    chart: ChartKind,
    selected_field: usize,
    country_cursor: usize,
    status: String,
}

impl App {
    fn new(session: Session) -> Self {
        let output = session.recompute();
        let status = format!(
            "Loaded {} rows ({} rejected).",
            session.loaded.rows_used,
            session.loaded.row_errors.len(),
        );
        Self {
            session,
            output,
            chart: ChartKind::GdpLine,
            selected_field: FIELD_YEAR_MIN,
            country_cursor: 0,
            status,
        }
    }

    fn event_loop<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> Result<(), AppError> {
        let mut needs_redraw = true;
        loop {
            if needs_redraw {
                terminal
                    .draw(|f| self.draw(f))
                    .map_err(|e| AppError::network(format!("Terminal draw error: {e}")))?;
                needs_redraw = false;
            }

            if !event::poll(Duration::from_millis(100))
                .map_err(|e| AppError::network(format!("Event poll error: {e}")))?
            {
                continue;
            }

            match event::read().map_err(|e| AppError::network(format!("Event read error: {e}")))? {
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if self.handle_key(key.code) {
                        break;
                    }
                    needs_redraw = true;
                }
                Event::Resize(_, _) => {
                    needs_redraw = true;
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Returns `true` when the app should quit.
    fn handle_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => return true,
            KeyCode::Up => {
                if self.selected_field > FIELD_YEAR_MIN {
                    self.selected_field -= 1;
                }
            }
            KeyCode::Down => {
                if self.selected_field < FIELD_COUNTRIES {
                    self.selected_field += 1;
                }
            }
            KeyCode::Left => self.adjust_field(-1),
            KeyCode::Right => self.adjust_field(1),
            KeyCode::Char(' ') => {
                if self.selected_field == FIELD_COUNTRIES {
                    self.toggle_country_at_cursor();
                }
            }
            KeyCode::Char('c') => {
                self.chart = self.chart.next();
                self.status = format!("chart: {}", self.chart.display_name());
            }
            KeyCode::Char('r') => {
                self.session.reset_filter();
                self.recompute();
                self.status = "Filters reset.".to_string();
            }
            KeyCode::Char('e') => {
                self.export_view();
            }
            _ => {}
        }

        false
    }

    fn adjust_field(&mut self, delta: i32) {
        match self.selected_field {
            FIELD_YEAR_MIN => {
                self.session
                    .filter
                    .adjust_year_min(delta, &self.session.loaded.table);
                self.recompute();
                self.status = format!("year min: {}", self.session.filter.year_range.0);
            }
            FIELD_YEAR_MAX => {
                self.session
                    .filter
                    .adjust_year_max(delta, &self.session.loaded.table);
                self.recompute();
                self.status = format!("year max: {}", self.session.filter.year_range.1);
            }
            FIELD_COUNTRIES => {
                let count = self.session.table().countries.len();
                if count == 0 {
                    return;
                }
                if delta >= 0 {
                    self.country_cursor = (self.country_cursor + 1).min(count - 1);
                } else {
                    self.country_cursor = self.country_cursor.saturating_sub(1);
                }
            }
            _ => {}
        }
    }

    fn toggle_country_at_cursor(&mut self) {
        let Some(country) = self
            .session
            .table()
            .countries
            .get(self.country_cursor)
            .cloned()
        else {
            return;
        };
        self.session.filter.toggle_country(&country);
        self.recompute();
        let verb = if self.session.filter.countries.contains(&country) {
            "selected"
        } else {
            "deselected"
        };
        self.status = format!("{verb}: {country}");
    }

    fn recompute(&mut self) {
        self.output = self.session.recompute();
    }

    fn export_view(&mut self) {
        let ts = chrono::Local::now().format("%Y%m%d_%H%M%S");
        let dir = self.session.path.parent().unwrap_or_else(|| Path::new("."));
        let path = dir.join(format!("gdp_view_{ts}.csv"));

        let mut rows = self.output.view.rows.clone();
        rows.sort_by(|a, b| a.country.cmp(&b.country).then(a.year.cmp(&b.year)));

        match crate::io::export::write_view_csv(&rows, &path) {
            Ok(()) => {
                self.status = format!("Exported {} rows to {}", rows.len(), path.display());
            }
            Err(err) => {
                self.status = format!("Export failed: {err}");
            }
        }
    }

    fn draw(&mut self, frame: &mut ratatui::Frame<'_>) {
        let size = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4),
                Constraint::Min(0),
                Constraint::Length(3),
            ])
            .split(size);

        self.draw_header(frame, chunks[0]);
        self.draw_body(frame, chunks[1]);
        self.draw_footer(frame, chunks[2]);
    }

    fn draw_header(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let mut lines: Vec<Line> = Vec::new();
        lines.push(Line::from(vec![
            Span::styled("gdp", Style::default().fg(Color::Cyan)),
            Span::raw(" — World Bank GDP dashboard"),
        ]));

        lines.push(Line::from(Span::styled(
            format!(
                "artifact: {} | rows: {} used / {} read",
                self.session.path.display(),
                self.session.loaded.rows_used,
                self.session.loaded.rows_read,
            ),
            Style::default().fg(Color::Gray),
        )));

        lines.push(Line::from(Span::styled(
            format!(
                "years: {}..{} | countries: {}/{} selected | view: {} rows | chart: {}",
                self.session.filter.year_range.0,
                self.session.filter.year_range.1,
                self.session.filter.countries.len(),
                self.session.table().countries.len(),
                self.output.view.len(),
                self.chart.display_name(),
            ),
            Style::default().fg(Color::Gray),
        )));

        let p = Paragraph::new(Text::from(lines)).block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, area);
    }

    fn draw_body(&mut self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
            .split(area);

        self.draw_chart(frame, columns[0]);

        let right = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4),
                Constraint::Percentage(45),
                Constraint::Min(0),
            ])
            .split(columns[1]);

        self.draw_year_fields(frame, right[0]);
        self.draw_country_list(frame, right[1]);
        self.draw_grid(frame, right[2]);
    }

    fn draw_chart(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let block = Block::default()
            .title(self.chart.display_name())
            .borders(Borders::ALL);
        let inner = block.inner(area);
        frame.render_widget(block, area);
        frame.render_widget(Clear, inner);

        let (series, x_bounds, y_bounds, categories, x_label, y_label, fmt_x, fmt_y) =
            match self.chart {
                ChartKind::GdpLine => {
                    let (s, xb, yb) = line_series(&self.output.view, self.selected_countries(), MeanColumn::Gdp);
                    (s, xb, yb, None, "year", "GDP (US$)", fmt_axis_year as fn(f64) -> String, fmt_axis_gdp as fn(f64) -> String)
                }
                ChartKind::GrowthLine => {
                    let (s, xb, yb) = line_series(&self.output.view, self.selected_countries(), MeanColumn::Growth);
                    (s, xb, yb, None, "year", "growth (%)", fmt_axis_year as fn(f64) -> String, fmt_axis_growth as fn(f64) -> String)
                }
                ChartKind::Scatter => {
                    let (s, xb, yb) = scatter_series(&self.output.view, self.selected_countries());
                    (s, xb, yb, None, "log10(GDP US$)", "growth (%)", fmt_axis_growth as fn(f64) -> String, fmt_axis_growth as fn(f64) -> String)
                }
                ChartKind::MeanGdpBar => {
                    let (s, xb, yb, labels) = bar_series(&self.output.mean_gdp);
                    (s, xb, yb, Some(labels), "country", "mean GDP (US$)", fmt_axis_year as fn(f64) -> String, fmt_axis_gdp as fn(f64) -> String)
                }
                ChartKind::MeanGrowthBar => {
                    let (s, xb, yb, labels) = bar_series(&self.output.mean_growth);
                    (s, xb, yb, Some(labels), "country", "mean growth (%)", fmt_axis_year as fn(f64) -> String, fmt_axis_growth as fn(f64) -> String)
                }
            };

        if self.output.view.is_empty() {
            let msg = Paragraph::new("No rows match the current filters.")
                .style(Style::default().fg(Color::Yellow))
                .block(Block::default());
            frame.render_widget(msg, inner);
            return;
        }

        let widget = GdpPlottersChart {
            series: &series,
            x_bounds,
            y_bounds,
            x_label,
            y_label,
            x_categories: categories.as_deref(),
            fmt_x,
            fmt_y,
        };
        frame.render_widget(widget, inner);
    }

    fn draw_year_fields(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let items = vec![
            ListItem::new(format!(
                "Year min: {}  (data {})",
                self.session.filter.year_range.0,
                self.session.table().year_min,
            )),
            ListItem::new(format!(
                "Year max: {}  (data {})",
                self.session.filter.year_range.1,
                self.session.table().year_max,
            )),
        ];

        let list = List::new(items)
            .block(Block::default().title("Filters").borders(Borders::ALL))
            .highlight_style(Style::default().fg(Color::Black).bg(Color::White))
            .highlight_symbol("» ");

        let mut state = ratatui::widgets::ListState::default();
        if self.selected_field <= FIELD_YEAR_MAX {
            state.select(Some(self.selected_field));
        }
        frame.render_stateful_widget(list, area, &mut state);
    }

    fn draw_country_list(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let selected = &self.session.filter.countries;
        let items: Vec<ListItem> = self
            .session
            .table()
            .countries
            .iter()
            .map(|country| {
                let is_selected = selected.contains(country);
                let marker = if is_selected { "[x]" } else { "[ ]" };
                let mut style = Style::default();
                if is_selected {
                    let (r, g, b) = palette_color(
                        selected.iter().position(|c| c == country).unwrap_or(0),
                    );
                    style = style.fg(Color::Rgb(r, g, b));
                }
                ListItem::new(format!("{marker} {country}")).style(style)
            })
            .collect();

        let focused = self.selected_field == FIELD_COUNTRIES;
        let title = format!("Countries ({} selected)", selected.len());
        let list = List::new(items)
            .block(Block::default().title(title).borders(Borders::ALL))
            .highlight_style(Style::default().fg(Color::Black).bg(Color::White))
            .highlight_symbol("» ");

        let mut state = ratatui::widgets::ListState::default();
        if focused {
            state.select(Some(self.country_cursor));
        }
        frame.render_stateful_widget(list, area, &mut state);
    }

    fn draw_grid(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let mut rows = self.output.view.rows.clone();
        rows.sort_by(|a, b| a.country.cmp(&b.country).then(a.year.cmp(&b.year)));

        let mut items = Vec::new();
        items.push(ListItem::new(
            format!(
                "{:<16} {:>5} {:>10} {:>7} {:>6}",
                "country", "year", "gdp", "growth", "log10"
            ),
        ).style(Style::default().add_modifier(Modifier::BOLD)));

        // Room for the border rows and the header line.
        let capacity = (area.height as usize).saturating_sub(3);
        for row in rows.iter().take(capacity) {
            items.push(ListItem::new(format_grid_row(row)));
        }

        let title = format!("Data ({} rows)", rows.len());
        let list = List::new(items).block(Block::default().title(title).borders(Borders::ALL));
        frame.render_widget(list, area);
    }

    fn draw_footer(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let help = "↑/↓ field  ←/→ adjust  Space toggle  c chart  e export  r reset  q quit";
        let line = Line::from(vec![
            Span::styled(help, Style::default().fg(Color::Gray)),
            Span::raw(" | "),
            Span::styled(&self.status, Style::default().fg(Color::Yellow)),
        ]);
        let p = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, area);
    }

    fn selected_countries(&self) -> &std::collections::BTreeSet<String> {
        &self.session.filter.countries
    }
}

fn palette_color(idx: usize) -> (u8, u8, u8) {
    PALETTE[idx % PALETTE.len()]
}

fn series_color(idx: usize) -> RGBColor {
    let (r, g, b) = palette_color(idx);
    RGBColor(r, g, b)
}

fn format_grid_row(row: &GdpRow) -> String {
    let log = row
        .log_gdp
        .map(|v| format!("{v:.2}"))
        .unwrap_or_else(|| "-".to_string());
    format!(
        "{:<16} {:>5} {:>10} {:>7.2} {:>6}",
        truncate(&row.country, 16),
        row.year,
        format!("{:.2e}", row.gdp_current),
        row.gdp_growth,
        log,
    )
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out = String::new();
    for (i, ch) in s.chars().enumerate() {
        if i + 1 >= max {
            break;
        }
        out.push(ch);
    }
    out.push('.');
    out
}

/// One line per selected country over the filtered view.
fn line_series(
    view: &FilteredView,
    countries: &std::collections::BTreeSet<String>,
    column: MeanColumn,
) -> (Vec<ChartSeries>, [f64; 2], [f64; 2]) {
    let mut series = Vec::new();
    for (idx, country) in countries.iter().enumerate() {
        let mut points: Vec<(f64, f64)> = view
            .rows
            .iter()
            .filter(|r| &r.country == country)
            .map(|r| (r.year as f64, column.value_of(r)))
            .collect();
        if points.is_empty() {
            continue;
        }
        points.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));
        series.push(ChartSeries {
            kind: SeriesKind::Line,
            color: series_color(idx),
            points,
        });
    }

    let (x_bounds, y_bounds) = bounds_of(&series);
    (series, x_bounds, y_bounds)
}

/// log10(GDP) vs growth, one scatter series per selected country.
///
/// Rows without a valid log column (GDP <= 0) are not plottable here and are
/// skipped; they still appear in the data grid.
fn scatter_series(
    view: &FilteredView,
    countries: &std::collections::BTreeSet<String>,
) -> (Vec<ChartSeries>, [f64; 2], [f64; 2]) {
    let mut series = Vec::new();
    for (idx, country) in countries.iter().enumerate() {
        let points: Vec<(f64, f64)> = view
            .rows
            .iter()
            .filter(|r| &r.country == country)
            .filter_map(|r| r.log_gdp.map(|log| (log, r.gdp_growth)))
            .collect();
        if points.is_empty() {
            continue;
        }
        series.push(ChartSeries {
            kind: SeriesKind::Scatter,
            color: series_color(idx),
            points,
        });
    }

    let (x_bounds, y_bounds) = bounds_of(&series);
    (series, x_bounds, y_bounds)
}

/// One bar per country mean, highest first, capped for readability.
fn bar_series(means: &[CountryMean]) -> (Vec<ChartSeries>, [f64; 2], [f64; 2], Vec<String>) {
    let shown = &means[..means.len().min(MAX_BARS)];

    let points: Vec<(f64, f64)> = shown
        .iter()
        .enumerate()
        .map(|(i, m)| (i as f64, m.mean))
        .collect();
    let labels: Vec<String> = shown.iter().map(|m| truncate(&m.country, 7)).collect();

    let mut y_min = 0.0_f64;
    let mut y_max = 0.0_f64;
    for &(_, y) in &points {
        y_min = y_min.min(y);
        y_max = y_max.max(y);
    }
    if y_max <= y_min {
        y_max = y_min + 1.0;
    }
    let pad = ((y_max - y_min).abs() * 0.05).max(1e-12);

    let x_bounds = [-0.5, shown.len().max(1) as f64 - 0.5];
    let y_bounds = [
        if y_min < 0.0 { y_min - pad } else { y_min },
        y_max + pad,
    ];

    let series = vec![ChartSeries {
        kind: SeriesKind::Bars,
        color: series_color(0),
        points,
    }];

    (series, x_bounds, y_bounds, labels)
}

/// Padded data bounds across all series, with a safe fallback when empty.
fn bounds_of(series: &[ChartSeries]) -> ([f64; 2], [f64; 2]) {
    let (mut x_min, mut x_max) = (f64::INFINITY, f64::NEG_INFINITY);
    let (mut y_min, mut y_max) = (f64::INFINITY, f64::NEG_INFINITY);

    for s in series {
        for &(x, y) in &s.points {
            x_min = x_min.min(x);
            x_max = x_max.max(x);
            y_min = y_min.min(y);
            y_max = y_max.max(y);
        }
    }

    if !x_min.is_finite() || !x_max.is_finite() {
        return ([0.0, 1.0], [0.0, 1.0]);
    }
    if x_max <= x_min {
        // A single year still needs a drawable span.
        x_min -= 0.5;
        x_max += 0.5;
    }
    if !y_min.is_finite() || !y_max.is_finite() || y_max <= y_min {
        y_min = y_min.min(0.0);
        y_max = y_min + 1.0;
    }

    let pad = ((y_max - y_min).abs() * 0.05).max(1e-12);
    ([x_min, x_max], [y_min - pad, y_max + pad])
}

fn fmt_axis_year(v: f64) -> String {
    format!("{v:.0}")
}

// GDP levels span trillions; scientific keeps tick labels narrow.
fn fmt_axis_gdp(v: f64) -> String {
    format!("{v:.1e}")
}

fn fmt_axis_growth(v: f64) -> String {
    format!("{v:.1}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::GdpRow;

    fn row(country: &str, year: i32, gdp: f64, growth: f64) -> GdpRow {
        GdpRow {
            country: country.to_string(),
            country_code: String::new(),
            year,
            gdp_current: gdp,
            gdp_growth: growth,
            log_gdp: GdpRow::log_gdp_of(gdp),
        }
    }

    fn view(rows: Vec<GdpRow>) -> FilteredView {
        FilteredView { rows }
    }

    fn countries(names: &[&str]) -> std::collections::BTreeSet<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn line_series_sorts_points_by_year() {
        let v = view(vec![
            row("A", 2005, 2.0e12, 1.0),
            row("A", 2000, 1.0e12, 2.0),
        ]);
        let (series, x_bounds, _) = line_series(&v, &countries(&["A"]), MeanColumn::Gdp);
        assert_eq!(series.len(), 1);
        assert_eq!(series[0].points[0].0, 2000.0);
        assert_eq!(series[0].points[1].0, 2005.0);
        assert_eq!(x_bounds, [2000.0, 2005.0]);
    }

    #[test]
    fn scatter_skips_rows_without_log() {
        let v = view(vec![
            row("A", 2000, 1.0e12, 2.0),
            row("A", 2001, -1.0, 3.0),
        ]);
        let (series, _, _) = scatter_series(&v, &countries(&["A"]));
        assert_eq!(series.len(), 1);
        assert_eq!(series[0].points.len(), 1);
        assert!((series[0].points[0].0 - 12.0).abs() < 1e-9);
    }

    #[test]
    fn empty_series_get_fallback_bounds() {
        let (xb, yb) = bounds_of(&[]);
        assert_eq!(xb, [0.0, 1.0]);
        assert_eq!(yb, [0.0, 1.0]);
    }

    #[test]
    fn bar_series_caps_and_labels() {
        let means: Vec<CountryMean> = (0..20)
            .map(|i| CountryMean {
                country: format!("Country{i:02}"),
                mean: (20 - i) as f64,
            })
            .collect();
        let (series, x_bounds, y_bounds, labels) = bar_series(&means);
        assert_eq!(series[0].points.len(), MAX_BARS);
        assert_eq!(labels.len(), MAX_BARS);
        assert_eq!(x_bounds, [-0.5, MAX_BARS as f64 - 0.5]);
        assert!(y_bounds[0] <= 0.0);
        assert!(y_bounds[1] >= 20.0);
    }

    #[test]
    fn chart_kind_cycles_through_all_five() {
        let mut kind = ChartKind::GdpLine;
        let mut seen = Vec::new();
        for _ in 0..5 {
            seen.push(kind);
            kind = kind.next();
        }
        assert_eq!(kind, ChartKind::GdpLine);
        assert_eq!(seen.len(), 5);
        assert!(seen.contains(&ChartKind::Scatter));
        assert!(seen.contains(&ChartKind::MeanGrowthBar));
    }
}
