//! Single-ticker detail view: a summary row and a three-column table of figures.

use oikonomia_common::Quote;
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Style, Stylize};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, BorderType, Cell, Padding, Paragraph, Row, Table, Widget};

use super::layout::{centered, cols};
use super::theme::Theme;
use crate::format::{format_count, format_percent, format_price};

const COLUMNS: usize = 3;
const CELL_PAD_X: u16 = 2;
const COLUMN_SPACING: u16 = 4;
/// A blank line above and below every figure.
const ROW_HEIGHT: u16 = 3;

/// `TICKER   $price   change%`, bold.
pub fn top_row(quote: &Quote, theme: &Theme) -> Line<'static> {
    let change = quote.regular_market_change_percent;
    Line::from(vec![
        Span::raw(format!(
            " {}   ${}   ",
            quote.ticker,
            format_price(quote.regular_market_price)
        ))
        .bold(),
        Span::styled(format_percent(change), Style::default().fg(theme.change_color(change))).bold(),
        Span::raw(" "),
    ])
}

fn entries(quote: &Quote, theme: &Theme) -> Vec<(&'static str, Span<'static>)> {
    let change_52wk = quote.fifty_two_week_change_percent;
    let market_cap = quote
        .known_market_cap()
        .map_or_else(|| "n/a".to_string(), |cap| format!("${}", format_count(cap)));
    vec![
        ("Open Price", Span::raw(format!("${:.2}", quote.regular_market_open))),
        ("High Price", Span::raw(format!("${:.2}", quote.regular_market_day_high))),
        ("Low Price", Span::raw(format!("${:.2}", quote.regular_market_day_low))),
        ("52wk High", Span::raw(format!("${:.2}", quote.fifty_two_week_high))),
        ("52wk Low", Span::raw(format!("${:.2}", quote.fifty_two_week_low))),
        (
            "52wk Change",
            Span::styled(format_percent(change_52wk), Style::default().fg(theme.change_color(change_52wk))),
        ),
        ("Market Cap", Span::raw(market_cap)),
        ("Volume", Span::raw(format_count(quote.regular_market_volume))),
        ("Avg Volume", Span::raw(format_count(quote.average_daily_volume_3_month))),
    ]
}

/// Cells laid out column-major: the first column is filled top to bottom first.
fn grid(cells: Vec<Line<'static>>) -> Vec<Vec<Line<'static>>> {
    let rows = cells.len().div_ceil(COLUMNS);
    let mut grid = vec![vec![Line::default(); COLUMNS]; rows];
    for (idx, cell) in cells.into_iter().enumerate() {
        grid[idx % rows][idx / rows] = cell;
    }
    grid
}

/// Summary row above a rounded table of the quote's figures.
pub struct DetailView {
    top: Line<'static>,
    grid: Vec<Vec<Line<'static>>>,
}

impl DetailView {
    pub fn new(quote: &Quote, theme: &Theme) -> Self {
        let cells = entries(quote, theme)
            .into_iter()
            .map(|(label, value)| Line::from(vec![Span::raw(format!("{label:<6}: ")), value]))
            .collect();
        Self {
            top: top_row(quote, theme),
            grid: grid(cells),
        }
    }

    pub fn height(&self) -> u16 {
        1 + self.table_height()
    }

    fn table_height(&self) -> u16 {
        cols(self.grid.len())
            .saturating_mul(ROW_HEIGHT)
            .saturating_add(2)
    }

    fn column_widths(&self) -> Vec<u16> {
        (0..COLUMNS)
            .map(|c| cols(self.grid.iter().map(|row| row[c].width()).max().unwrap_or(0)))
            .collect()
    }
}

impl Widget for DetailView {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let widths = self.column_widths();
        let [top, table] = Layout::vertical([Constraint::Length(1), Constraint::Length(self.table_height())])
            .areas(area);
        Paragraph::new(self.top)
            .alignment(Alignment::Center)
            .render(top, buf);

        let table_width = widths.iter().sum::<u16>()
            + COLUMN_SPACING * (cols(COLUMNS) - 1)
            + 2 * (CELL_PAD_X + 1);
        let rows = self.grid.into_iter().map(|row| {
            Row::new(
                row.into_iter()
                    .map(|line| Cell::from(Text::from(vec![Line::default(), line, Line::default()]))),
            )
            .height(ROW_HEIGHT)
        });

        Table::new(rows, widths.into_iter().map(Constraint::Length))
            .column_spacing(COLUMN_SPACING)
            .block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .padding(Padding::horizontal(CELL_PAD_X)),
            )
            .render(centered(table, table_width), buf);
    }
}
