use blockfall_engine::ShapeKind;
use ratatui::{
    prelude::{Buffer, Rect},
    style::Style,
    widgets::{Paragraph, Widget},
};

use crate::view::widgets::style;

/// One grid cell, drawn two terminal columns wide.
#[derive(Debug)]
pub struct CellDisplay {
    style: Style,
    symbol: &'static str,
}

impl CellDisplay {
    pub const fn new(style: Style, symbol: &'static str) -> Self {
        Self { style, symbol }
    }

    pub fn width() -> u16 {
        2
    }

    pub fn height() -> u16 {
        1
    }

    pub fn from_kind(kind: ShapeKind) -> Self {
        match kind {
            ShapeKind::Empty => Self::new(style::EMPTY_DOT, "."),
            ShapeKind::I => Self::new(style::I_BLOCK, ""),
            ShapeKind::J => Self::new(style::J_BLOCK, ""),
            ShapeKind::L => Self::new(style::L_BLOCK, ""),
            ShapeKind::O => Self::new(style::O_BLOCK, ""),
            ShapeKind::S => Self::new(style::S_BLOCK, ""),
            ShapeKind::Z => Self::new(style::Z_BLOCK, ""),
            ShapeKind::T => Self::new(style::T_BLOCK, ""),
        }
    }
}

impl Widget for CellDisplay {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &CellDisplay {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        // Use a Paragraph to fill the whole area, not just the cells with the symbol
        Paragraph::new(self.symbol)
            .style(self.style)
            .centered()
            .render(area, buf);
    }
}
