//! Market overview: headline boxes on top, sector averages below.

use oikonomia_common::Quote;
use oikonomia_engine::{MarketSnapshot, SectorSummary};
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, BorderType, Padding, Paragraph, Widget};

use super::layout::{centered, cols};
use super::theme::Theme;
use crate::format::{format_percent, format_price};

/// Column reserved for the sector name and its colon.
const SECTOR_LABEL_WIDTH: usize = 24;
/// Two content lines inside a border.
const HEADLINE_HEIGHT: u16 = 4;
/// Border plus one column of padding on each side.
const HEADLINE_FRAME: u16 = 4;

fn headline_text(quote: &Quote, theme: &Theme) -> Text<'static> {
    let change = quote.regular_market_change_percent;
    Text::from(vec![
        Line::from(quote.ticker.to_string()),
        Line::from(vec![
            Span::raw(format!("${} ", format_price(quote.regular_market_price))),
            Span::styled(format_percent(change), Style::default().fg(theme.change_color(change))),
        ]),
    ])
}

fn headline_box(text: Text<'static>) -> Paragraph<'static> {
    Paragraph::new(text).alignment(Alignment::Center).block(
        Block::bordered()
            .border_type(BorderType::Rounded)
            .padding(Padding::horizontal(1)),
    )
}

fn sector_line(name: &str, summary: &SectorSummary, theme: &Theme) -> Line<'static> {
    let day = summary.average_change_percent;
    let year = summary.average_52wk_change_percent;
    Line::from(vec![
        Span::raw(format!("{:<width$} ", format!("{name}:"), width = SECTOR_LABEL_WIDTH)),
        Span::styled(format!("{:>7}", format_percent(day)), Style::default().fg(theme.change_color(day))),
        Span::raw("   52wk "),
        Span::styled(format!("{:>8}", format_percent(year)), Style::default().fg(theme.change_color(year))),
    ])
}

/// The whole overview of one snapshot. Sectors are listed alphabetically.
pub struct OverviewView<'a> {
    snapshot: &'a MarketSnapshot,
    theme: &'a Theme,
}

impl<'a> OverviewView<'a> {
    pub fn new(snapshot: &'a MarketSnapshot, theme: &'a Theme) -> Self {
        Self { snapshot, theme }
    }

    /// Rows needed: the boxes, the sector list framed by blank lines, the footer.
    pub fn height(&self) -> u16 {
        HEADLINE_HEIGHT + self.sector_rows() + 1
    }

    fn sector_rows(&self) -> u16 {
        cols(self.snapshot.sectors.len()).saturating_add(2)
    }

    fn render_headlines(&self, area: Rect, buf: &mut Buffer) {
        let texts: Vec<Text<'static>> = self
            .snapshot
            .headlines
            .iter()
            .map(|quote| headline_text(quote, self.theme))
            .collect();
        let widths = texts
            .iter()
            .map(|text| Constraint::Length(cols(text.width()).saturating_add(HEADLINE_FRAME)));
        let slots = Layout::horizontal(widths).flex(Flex::Center).split(area);

        for (text, slot) in texts.into_iter().zip(slots.iter()) {
            headline_box(text).render(*slot, buf);
        }
    }

    fn render_sectors(&self, area: Rect, buf: &mut Buffer) {
        let sectors = &self.snapshot.sectors;
        let mut names: Vec<&String> = sectors.keys().collect();
        names.sort();

        let mut lines = vec![Line::default()];
        lines.extend(
            names
                .into_iter()
                .map(|name| sector_line(name, &sectors[name], self.theme)),
        );
        lines.push(Line::default());

        let width = lines.iter().map(Line::width).max().unwrap_or(0);
        Paragraph::new(lines).render(centered(area, cols(width)), buf);
    }
}

impl Widget for OverviewView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [headlines, sectors, footer] = Layout::vertical([
            Constraint::Length(HEADLINE_HEIGHT),
            Constraint::Length(self.sector_rows()),
            Constraint::Length(1),
        ])
        .areas(area);

        self.render_headlines(headlines, buf);
        self.render_sectors(sectors, buf);
        Paragraph::new(Line::styled(
            format!("as of {}", self.snapshot.captured_at.format("%Y-%m-%d %H:%M:%S UTC")),
            Style::default().fg(self.theme.muted),
        ))
        .alignment(Alignment::Center)
        .render(footer, buf);
    }
}
