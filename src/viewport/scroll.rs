#![doc = r#"
Scroll controller

Entry point: `Viewport::scroll(src, direction, stride_x, stride_y) -> bool`.

Sequence
1. Normalize: zero strides become 1; conflicting bits on an axis cancel it.
   No active axis -> no-op.
2. Step count: the axis stride, or `min(stride_x, stride_y)` on a diagonal so
   both axes advance in lockstep.
3. Pass 1, all vertical steps: each step checks the Y bound (a blocked step
   ends the pass), rotates the row ring, and redraws the one exposed row.
4. Pass 2, all horizontal steps: each step checks the X bound, moves `fine_x`,
   and only when `fine_x` wraps rotates the column ring and redraws the exposed
   byte column(s): the two rightmost slots for +X, the leftmost for -X.

Every Y edge of a call is drawn before `fine_x` changes, so all rows of the
cache share one column origin.

Returns whether the camera moved. When it did not, heads, offset and buffer
are untouched.
"#]

use super::Viewport;
use crate::direction::Direction;
use crate::tiles::TileSource;

impl Viewport {
    /// Scroll by up to `stride` pixels along the axes named in `direction`,
    /// redrawing only newly exposed edges.
    pub fn scroll<S: TileSource>(
        &mut self,
        src: &S,
        direction: Direction,
        stride_x: u32,
        stride_y: u32,
    ) -> bool {
        self.debug_check_source(src);

        let stride_x = stride_x.max(1);
        let stride_y = stride_y.max(1);

        let x_sign = direction.x_sign();
        let y_sign = direction.y_sign();

        let steps = match (x_sign, y_sign) {
            (Some(_), Some(_)) => stride_x.min(stride_y),
            (Some(_), None) => stride_x,
            (None, Some(_)) => stride_y,
            (None, None) => return false,
        };

        let start = (self.camera_x, self.camera_y);

        // Pass 1: vertical
        if let Some(down) = y_sign {
            for _ in 0..steps {
                let moved = if down {
                    self.step_y_plus(src)
                } else {
                    self.step_y_minus(src)
                };
                if !moved {
                    break;
                }
            }
        }

        // Pass 2: horizontal
        if let Some(right) = x_sign {
            for _ in 0..steps {
                let moved = if right {
                    self.step_x_plus(src)
                } else {
                    self.step_x_minus(src)
                };
                if !moved {
                    break;
                }
            }
        }

        (self.camera_x, self.camera_y) != start
    }

    // -------------- Single-pixel steps --------------

    fn step_y_plus<S: TileSource>(&mut self, src: &S) -> bool {
        if self.camera_y >= self.max_y {
            return false;
        }
        self.camera_y += 1;
        self.row_head = self.rows.advance(self.row_head);

        // The old top row's slot becomes the new bottom row.
        let h = self.config.height_px;
        let bottom = self.rows.slot(self.row_head, h - 1);
        self.render_row(src, bottom, self.camera_y as usize + h - 1);
        true
    }

    fn step_y_minus<S: TileSource>(&mut self, src: &S) -> bool {
        if self.camera_y <= 0 {
            return false;
        }
        self.camera_y -= 1;
        self.row_head = self.rows.retreat(self.row_head);
        self.render_row(src, self.row_head, self.camera_y as usize);
        true
    }

    fn step_x_plus<S: TileSource>(&mut self, src: &S) -> bool {
        if self.camera_x >= self.max_x {
            return false;
        }
        self.camera_x += 1;
        self.fine_x += 1;
        if self.fine_x == 8 {
            self.fine_x = 0;
            self.col_head = self.cols.advance(self.col_head);
            log::trace!("col_head -> {} (+x)", self.col_head);

            // Rightmost visible byte and the lookahead byte.
            let w = self.config.visible_width_bytes;
            let base = self.camera_x as usize;
            let right = self.cols.slot(self.col_head, w - 1);
            self.render_column(src, right, base + (w - 1) * 8);
            let lookahead = self.cols.slot(self.col_head, w);
            self.render_column(src, lookahead, base + w * 8);
        }
        true
    }

    fn step_x_minus<S: TileSource>(&mut self, src: &S) -> bool {
        if self.camera_x <= 0 {
            return false;
        }
        self.camera_x -= 1;
        if self.fine_x == 0 {
            self.fine_x = 7;
            self.col_head = self.cols.retreat(self.col_head);
            log::trace!("col_head -> {} (-x)", self.col_head);

            let base = (self.camera_x & !7) as usize;
            self.render_column(src, self.col_head, base);
        } else {
            self.fine_x -= 1;
        }
        true
    }
}
