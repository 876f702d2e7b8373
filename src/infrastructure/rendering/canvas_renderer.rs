use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::domain::{
    logging::{LogComponent, get_logger},
    market_data::{CandlePoint, ChangeDirection},
};

const BACKGROUND: &str = "#020617";
const TEXT_COLOR: &str = "#ffffff";
const PADDING: f64 = 24.0;
const AXIS_SPACE: f64 = 64.0;
const BODY_RATIO: f64 = 0.6;

/// Pre-computed pixel geometry for one candle
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CandleRenderData {
    pub x: f64,
    pub high_y: f64,
    pub low_y: f64,
    pub open_y: f64,
    pub close_y: f64,
    pub body_width: f64,
    pub color: &'static str,
}

/// Whole-chart geometry: per-candle shapes plus the price scale they share
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartLayout {
    pub candles: Vec<CandleRenderData>,
    pub min_price: f64,
    pub max_price: f64,
}

/// Map candle prices into a `width` x `height` pixel box, y growing downward.
/// Returns `None` for an empty series.
pub fn layout_candles(points: &[CandlePoint], width: f64, height: f64) -> Option<ChartLayout> {
    if points.is_empty() {
        return None;
    }

    let chart_width = (width - PADDING * 2.0 - AXIS_SPACE).max(1.0);
    let chart_height = (height - PADDING * 2.0).max(1.0);

    let (mut min_price, mut max_price) = points.iter().fold(
        (f64::INFINITY, f64::NEG_INFINITY),
        |(lo, hi), p| (lo.min(p.low), hi.max(p.high)),
    );
    if max_price - min_price <= f64::EPSILON {
        // flat series: open a one-unit window so the candles sit mid-chart
        min_price -= 0.5;
        max_price += 0.5;
    }
    let price_range = max_price - min_price;
    let slot = chart_width / points.len() as f64;
    let to_y = |price: f64| PADDING + (max_price - price) / price_range * chart_height;

    let candles = points
        .iter()
        .enumerate()
        .map(|(i, p)| CandleRenderData {
            x: PADDING + AXIS_SPACE + i as f64 * slot + slot / 2.0,
            high_y: to_y(p.high),
            low_y: to_y(p.low),
            open_y: to_y(p.open),
            close_y: to_y(p.close),
            body_width: (slot * BODY_RATIO).max(1.0),
            color: if p.is_bullish() { ChangeDirection::Up.color() } else { ChangeDirection::Down.color() },
        })
        .collect();

    Some(ChartLayout { candles, min_price, max_price })
}

/// Canvas 2D candlestick renderer
pub struct CanvasRenderer {
    context: CanvasRenderingContext2d,
    width: u32,
    height: u32,
}

impl CanvasRenderer {
    /// Size the canvas and grab its 2D context
    pub fn new(canvas: &HtmlCanvasElement, width: u32, height: u32) -> Result<Self, JsValue> {
        canvas.set_width(width);
        canvas.set_height(height);

        let context = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2D context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| JsValue::from_str("Failed to cast to 2D context"))?;

        Ok(Self { context, width, height })
    }

    /// Replace whatever is on the canvas with `points`
    pub fn render(&self, points: &[CandlePoint]) -> Result<(), JsValue> {
        let (width, height) = (self.width as f64, self.height as f64);
        let ctx = &self.context;

        ctx.clear_rect(0.0, 0.0, width, height);
        ctx.set_fill_style_str(BACKGROUND);
        ctx.fill_rect(0.0, 0.0, width, height);

        let Some(layout) = layout_candles(points, width, height) else {
            ctx.set_fill_style_str(TEXT_COLOR);
            ctx.set_font("14px sans-serif");
            ctx.fill_text("No chart data", PADDING, height / 2.0)?;
            get_logger().warn(LogComponent::Infrastructure("CanvasRenderer"), "No candle data to render");
            return Ok(());
        };

        for candle in &layout.candles {
            self.render_single_candle(candle);
        }
        self.render_scale(&layout, points, height)?;

        get_logger().debug(
            LogComponent::Infrastructure("CanvasRenderer"),
            &format!("Rendered {} candles", layout.candles.len()),
        );
        Ok(())
    }

    fn render_single_candle(&self, data: &CandleRenderData) {
        let ctx = &self.context;
        ctx.set_stroke_style_str(data.color);
        ctx.set_fill_style_str(data.color);
        ctx.set_line_width(1.0);

        ctx.begin_path();
        ctx.move_to(data.x, data.high_y);
        ctx.line_to(data.x, data.low_y);
        ctx.stroke();

        let body_top = data.open_y.min(data.close_y);
        let body_height = (data.open_y - data.close_y).abs().max(1.0);
        ctx.fill_rect(data.x - data.body_width / 2.0, body_top, data.body_width, body_height);
    }

    fn render_scale(&self, layout: &ChartLayout, points: &[CandlePoint], height: f64) -> Result<(), JsValue> {
        let ctx = &self.context;
        ctx.set_fill_style_str(TEXT_COLOR);
        ctx.set_font("11px sans-serif");

        ctx.fill_text(&format!("{:.2}", layout.max_price), 4.0, PADDING + 10.0)?;
        ctx.fill_text(&format!("{:.2}", layout.min_price), 4.0, height - PADDING)?;

        if let (Some(first), Some(last)) = (points.first(), points.last()) {
            let baseline = height - 6.0;
            ctx.fill_text(&first.time.to_string(), PADDING + AXIS_SPACE, baseline)?;
            if points.len() > 1 {
                let label = last.time.to_string();
                let x = self.width as f64 - PADDING - label.len() as f64 * 6.0;
                ctx.fill_text(&label, x, baseline)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::market_data::CandleTime;

    fn point(i: usize, open: f64, high: f64, low: f64, close: f64) -> CandlePoint {
        CandlePoint { time: CandleTime::Index(i), open, high, low, close }
    }

    #[test]
    fn empty_series_has_no_layout() {
        assert!(layout_candles(&[], 400.0, 200.0).is_none());
    }

    #[test]
    fn extremes_touch_padding() {
        let points = vec![point(0, 10.0, 12.0, 9.0, 11.0), point(1, 11.0, 14.0, 10.0, 10.5)];
        let layout = layout_candles(&points, 400.0, 200.0).unwrap();
        assert_eq!(layout.min_price, 9.0);
        assert_eq!(layout.max_price, 14.0);
        assert_eq!(layout.candles[1].high_y, PADDING);
        assert_eq!(layout.candles[0].low_y, 200.0 - PADDING);
        assert_eq!(layout.candles[0].color, "#4ade80");
        assert_eq!(layout.candles[1].color, "#fb7185");
        assert!(layout.candles[0].x < layout.candles[1].x);
    }

    #[test]
    fn flat_series_still_has_height() {
        let points = vec![point(0, 5.0, 5.0, 5.0, 5.0)];
        let layout = layout_candles(&points, 400.0, 200.0).unwrap();
        assert!(layout.max_price > layout.min_price);
        assert!(layout.candles[0].high_y.is_finite());
    }
}
