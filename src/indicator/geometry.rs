/// Snapshot of a scrollable container along its scroll axis.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollGeometry {
    /// Full scrollable extent (`scrollHeight`).
    pub content_length: f64,
    /// Visible extent (`clientHeight`).
    pub viewport_length: f64,
    /// Current position (`scrollTop`).
    pub scroll_offset: f64,
}

impl ScrollGeometry {
    pub const fn new(content_length: f64, viewport_length: f64, scroll_offset: f64) -> Self {
        Self {
            content_length,
            viewport_length,
            scroll_offset,
        }
    }

    pub fn max_scroll(&self) -> f64 {
        self.content_length - self.viewport_length
    }

    /// Content overflows a real viewport and every reading is finite.
    pub fn is_scrollable(&self) -> bool {
        self.content_length.is_finite()
            && self.viewport_length.is_finite()
            && self.scroll_offset.is_finite()
            && self.viewport_length > 0.0
            && self.max_scroll() > 0.0
    }

    /// `viewport / content` in `(0, 1)`, or `None` when the indicator hides.
    pub fn thumb_ratio(&self) -> Option<f64> {
        self.is_scrollable()
            .then(|| (self.viewport_length / self.content_length).clamp(0.0, 1.0))
    }

    /// `offset / max_scroll` clamped to `[0, 1]`, or `None` when the indicator hides.
    pub fn scroll_ratio(&self) -> Option<f64> {
        self.is_scrollable()
            .then(|| (self.scroll_offset / self.max_scroll()).clamp(0.0, 1.0))
    }
}

/// Dash parameters placing the visible thumb along the path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThumbStroke {
    /// Visible dash, `thumb_ratio * total`.
    pub length: f64,
    /// Distance from the path start, `scroll_ratio * (total - length)`.
    pub offset: f64,
    pub total: f64,
}

impl ThumbStroke {
    /// `None` when the content fits its viewport (or the path is empty).
    pub fn new(geometry: &ScrollGeometry, total: f64) -> Option<Self> {
        let thumb_ratio = geometry.thumb_ratio()?;
        let scroll_ratio = geometry.scroll_ratio()?;
        if thumb_ratio >= 1.0 || total <= 0.0 {
            return None;
        }
        let length = thumb_ratio * total;
        Some(Self {
            length,
            offset: scroll_ratio * (total - length),
            total,
        })
    }

    /// `stroke-dasharray`: one dash of `length`, then a gap covering the rest.
    pub fn dash_array(&self) -> String {
        format!("{} {}", self.length, self.total)
    }

    /// `stroke-dashoffset`: negative so the dash moves forward along the path.
    pub fn dash_offset(&self) -> String {
        if self.offset == 0.0 {
            "0".to_string()
        } else {
            format!("{}", -self.offset)
        }
    }
}
