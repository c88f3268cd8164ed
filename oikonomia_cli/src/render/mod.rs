//! Presentation layer: turns snapshots and quotes into styled terminal text.
//!
//! - `theme` — the immutable colour configuration.
//! - `layout` — centring and writing ratatui buffers to a `Write` sink.
//! - `overview` — headline boxes plus sector averages.
//! - `detail` — the single-ticker figures table.
//!
//! Each view is a ratatui widget drawn into an off-screen buffer as wide as the
//! terminal, read once at start-up, and then written to a caller-supplied `Write`.
pub mod detail;
pub mod layout;
pub mod overview;
pub mod theme;

use std::io::Write;

use oikonomia_common::{Quote, Result};
use oikonomia_engine::MarketSnapshot;
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Style, Stylize};
use ratatui::text::Line;
use ratatui::widgets::{Paragraph, Widget};

use self::detail::DetailView;
use self::layout::write_buffer;
use self::overview::OverviewView;
pub use self::theme::Theme;

const TITLE: &str = "Oikonomia";
const SUBTITLE: &str = "A Financial Market Analysis Tool";

/// Renders views with a fixed theme and width.
pub struct Presenter {
    theme: Theme,
    width: u16,
}

impl Presenter {
    pub fn new(theme: Theme, width: u16) -> Self {
        Self { theme, width }
    }

    /// Title and subtitle.
    pub fn render_banner(&self, out: &mut dyn Write) -> Result<()> {
        let accent = Style::default().fg(self.theme.accent).bold();
        let banner = Paragraph::new(vec![
            Line::default(),
            Line::styled(TITLE, accent),
            Line::default(),
            Line::styled(SUBTITLE, accent.italic()),
            Line::default(),
        ])
        .alignment(Alignment::Center);
        self.draw(banner, 5, out)
    }

    /// Headline boxes, then the sector list, then the capture time.
    pub fn render_overview(&self, snapshot: &MarketSnapshot, out: &mut dyn Write) -> Result<()> {
        let view = OverviewView::new(snapshot, &self.theme);
        let height = view.height();
        self.draw(view, height, out)?;
        out.flush()?;
        Ok(())
    }

    /// Summary row and figures table for one quote.
    pub fn render_detail(&self, quote: &Quote, out: &mut dyn Write) -> Result<()> {
        let view = DetailView::new(quote, &self.theme);
        let height = view.height();
        self.draw(view, height, out)?;
        out.flush()?;
        Ok(())
    }

    fn draw(&self, widget: impl Widget, height: u16, out: &mut dyn Write) -> Result<()> {
        let area = Rect::new(0, 0, self.width, height);
        let mut buf = Buffer::empty(area);
        widget.render(area, &mut buf);
        write_buffer(&buf, &self.theme, out)
    }
}
