//! Dot grid with right/down connectors for the background canvas.
//!
//! Geometry only changes on resize; per-frame work is limited to the mask.

use glam::DVec2;

use crate::constants::{GRID_CELL_SIZE, GRID_DOT_SIZE, GRID_PADDING};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridConfig {
    pub dot_size: f64,
    pub cell_size: f64,
    pub padding: f64,
}

impl GridConfig {
    #[inline]
    pub fn spacing(&self) -> f64 {
        self.dot_size + self.cell_size + 2.0 * self.padding
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            dot_size: GRID_DOT_SIZE,
            cell_size: GRID_CELL_SIZE,
            padding: GRID_PADDING,
        }
    }
}

/// Axis-aligned rectangle in CSS pixels, top-left origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellKind {
    Dot,
    Line,
}

/// One piece of grid geometry. Dots are stored by centre, lines by their
/// top-left corner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridCell {
    pub kind: CellKind,
    pub pos: DVec2,
    pub size: DVec2,
}

impl GridCell {
    pub fn rect(&self) -> Rect {
        let origin = match self.kind {
            CellKind::Dot => self.pos - self.size * 0.5,
            CellKind::Line => self.pos,
        };
        Rect {
            x: origin.x,
            y: origin.y,
            w: self.size.x,
            h: self.size.y,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct GridLayout {
    pub width: f64,
    pub height: f64,
    pub cols: usize,
    pub rows: usize,
    pub offset: DVec2,
    pub dots: Vec<GridCell>,
    pub lines: Vec<GridCell>,
}

impl GridLayout {
    /// Lay out a centred grid covering `width × height`.
    pub fn compute(width: f64, height: f64, config: &GridConfig) -> Self {
        let spacing = config.spacing();
        if spacing <= 0.0 || width <= 0.0 || height <= 0.0 {
            return Self {
                width: width.max(0.0),
                height: height.max(0.0),
                ..Self::default()
            };
        }
        let cols = (width / spacing).ceil() as usize;
        let rows = (height / spacing).ceil() as usize;
        let offset = DVec2::new((width % spacing) * 0.5, (height % spacing) * 0.5);
        let half_dot = config.dot_size * 0.5;

        let mut dots = Vec::with_capacity(cols * rows);
        let mut lines = Vec::with_capacity(2 * cols * rows);
        for row in 0..rows {
            for col in 0..cols {
                let centre =
                    DVec2::new(col as f64, row as f64) * spacing + DVec2::splat(half_dot) + offset;
                dots.push(GridCell {
                    kind: CellKind::Dot,
                    pos: centre,
                    size: DVec2::splat(config.dot_size),
                });
                if col + 1 < cols {
                    lines.push(GridCell {
                        kind: CellKind::Line,
                        pos: DVec2::new(centre.x + config.padding + half_dot, centre.y),
                        size: DVec2::new(config.cell_size, 1.0),
                    });
                }
                if row + 1 < rows {
                    lines.push(GridCell {
                        kind: CellKind::Line,
                        pos: DVec2::new(centre.x, centre.y + half_dot + config.padding),
                        size: DVec2::new(1.0, config.cell_size),
                    });
                }
            }
        }
        Self {
            width,
            height,
            cols,
            rows,
            offset,
            dots,
            lines,
        }
    }

    pub fn dot_rects(&self) -> impl Iterator<Item = Rect> + '_ {
        self.dots.iter().map(GridCell::rect)
    }

    pub fn line_rects(&self) -> impl Iterator<Item = Rect> + '_ {
        self.lines.iter().map(GridCell::rect)
    }

    /// Width / height, falling back to 1 for an empty viewport.
    pub fn aspect_ratio(&self) -> f64 {
        if self.height > 0.0 {
            self.width / self.height
        } else {
            1.0
        }
    }
}
