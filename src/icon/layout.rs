//! # Calculator Layout
//!
//! Pure geometry for the calculator glyph. Every coordinate is derived from
//! the edge length `S`:
//!
//! - background: `(0, 0)..(S, S)`, radius `S/4`
//! - body: inset by `padding = S/8`, radius `S/16`
//! - display: inset by `padding * 1.2`, height `calcSize/4`, radius `S/32`
//! - keypad: 3 rows of 4 buttons of side `calcSize/4`, gaps of `buttonSize/4`
//!
//! Integer proportions use floor division. When the nominal keypad would
//! spill past the body's inner inset, it is scaled down uniformly so every
//! button stays inside the body and below the display.

/// A rectangle `[x0, x1] × [y0, y1]` with circular corners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x0: f32,
    pub y0: f32,
    pub x1: f32,
    pub y1: f32,
    pub radius: f32,
}

impl Rect {
    pub fn new(x0: f32, y0: f32, x1: f32, y1: f32, radius: f32) -> Self {
        Self {
            x0,
            y0,
            x1,
            y1,
            radius,
        }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.x1 - self.x0
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.y1 - self.y0
    }

    /// True when the rectangle has no area and draws nothing.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width() <= 0.0 || self.height() <= 0.0
    }

    /// Corner radius clamped so opposite corners never overlap.
    #[inline]
    pub fn effective_radius(&self) -> f32 {
        self.radius
            .min(self.width() / 2.0)
            .min(self.height() / 2.0)
            .max(0.0)
    }

    /// Check if a point lies inside the rounded rectangle.
    ///
    /// The nearest point of the inner (radius-shrunk) rectangle is found by
    /// clamping; the point is inside when it is within `radius` of it.
    pub fn contains(&self, px: f32, py: f32) -> bool {
        if self.is_empty() || px < self.x0 || px > self.x1 || py < self.y0 || py > self.y1 {
            return false;
        }

        let r = self.effective_radius();
        let nx = px.clamp(self.x0 + r, self.x1 - r);
        let ny = py.clamp(self.y0 + r, self.y1 - r);
        let dx = px - nx;
        let dy = py - ny;
        dx * dx + dy * dy <= r * r
    }
}

/// Which part of the glyph a shape belongs to. Determines its fill color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Part {
    Background,
    Body,
    Display,
    Button,
}

/// Resolved geometry for one edge length.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculatorLayout {
    pub edge: u32,
    pub background: Rect,
    pub body: Rect,
    pub display: Rect,
    /// Row-major, [`Self::ROWS`] × [`Self::COLUMNS`].
    pub buttons: Vec<Rect>,
}

impl CalculatorLayout {
    pub const ROWS: usize = 3;
    pub const COLUMNS: usize = 4;

    /// Compute the layout for an `edge × edge` canvas.
    pub fn for_edge(edge: u32) -> Self {
        let s = edge as f32;
        let padding = edge / 8;
        let calc_size = edge - 2 * padding;
        let display_height = (calc_size / 4) as f32;
        let button_size = calc_size / 4;
        let spacing = button_size / 4;

        let outer_radius = (edge / 4) as f32;
        let body_radius = (edge / 16) as f32;
        let inner_radius = (edge / 32) as f32;

        let padding = padding as f32;
        let inset = padding * 1.2;

        let background = Rect::new(0.0, 0.0, s, s, outer_radius);
        let body = Rect::new(padding, padding, s - padding, s - padding, body_radius);
        let display = Rect::new(inset, inset, s - inset, inset + display_height, inner_radius);

        // Keypad area: below the display, inside the body's inner inset.
        let top = display.y1 + spacing as f32;
        let avail_w = (s - 2.0 * inset).max(0.0);
        let avail_h = (s - inset - top).max(0.0);

        let (button, gap) = fit_keypad(button_size as f32, spacing as f32, avail_w, avail_h);
        let grid_w = grid_extent(button, gap, Self::COLUMNS);
        let left = inset + (avail_w - grid_w) / 2.0;

        let mut buttons = Vec::with_capacity(Self::ROWS * Self::COLUMNS);
        let mut y = top;
        for _ in 0..Self::ROWS {
            let mut x = left;
            for _ in 0..Self::COLUMNS {
                buttons.push(Rect::new(x, y, x + button, y + button, inner_radius));
                x += button + gap;
            }
            y += button + gap;
        }

        Self {
            edge,
            background,
            body,
            display,
            buttons,
        }
    }

    /// All shapes in paint order (back to front).
    pub fn shapes(&self) -> impl Iterator<Item = (Part, &Rect)> {
        [
            (Part::Background, &self.background),
            (Part::Body, &self.body),
            (Part::Display, &self.display),
        ]
        .into_iter()
        .chain(self.buttons.iter().map(|rect| (Part::Button, rect)))
    }

    /// Canvas bounds as a rectangle.
    pub fn bounds(&self) -> Rect {
        let s = self.edge as f32;
        Rect::new(0.0, 0.0, s, s, 0.0)
    }
}

/// Extent of `count` cells of size `cell` separated by `gap`.
#[inline]
fn grid_extent(cell: f32, gap: f32, count: usize) -> f32 {
    if count == 0 {
        return 0.0;
    }
    count as f32 * cell + (count - 1) as f32 * gap
}

/// Scale the nominal button size and gap so the 4×3 keypad fits the area.
fn fit_keypad(button: f32, gap: f32, avail_w: f32, avail_h: f32) -> (f32, f32) {
    let grid_w = grid_extent(button, gap, CalculatorLayout::COLUMNS);
    let grid_h = grid_extent(button, gap, CalculatorLayout::ROWS);
    if grid_w <= 0.0 || grid_h <= 0.0 {
        return (button, gap);
    }

    let scale = (avail_w / grid_w).min(avail_h / grid_h).min(1.0);
    (button * scale, gap * scale)
}
