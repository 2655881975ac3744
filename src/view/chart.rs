use crate::domain::Label;
use crate::pipeline::LabelCounts;

const WIDTH: u32 = 420;
const HEIGHT: u32 = 280;
const MARGIN_LEFT: u32 = 48;
const MARGIN_RIGHT: u32 = 16;
const MARGIN_TOP: u32 = 36;
const MARGIN_BOTTOM: u32 = 48;
const BAR_GAP: u32 = 40;

/// One bar of the sentiment distribution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bar {
    pub label: &'static str,
    pub count: usize,
    pub color: &'static str,
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
    /// Horizontal centre, used for the category and value captions
    pub center: u32,
}

/// Pre-computed SVG geometry for the label distribution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BarChart {
    pub width: u32,
    pub height: u32,
    pub plot_left: u32,
    pub plot_top: u32,
    pub baseline: u32,
    pub plot_right: u32,
    pub max_count: usize,
    pub bars: Vec<Bar>,
}

fn color(label: Label) -> &'static str {
    match label {
        Label::Positive => "green",
        Label::Negative => "red",
    }
}

impl BarChart {
    pub fn from_counts(counts: &LabelCounts) -> Self {
        let plot_width = WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
        let plot_height = HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;
        let baseline = HEIGHT - MARGIN_BOTTOM;

        let n = Label::ALL.len() as u32;
        let bar_width = (plot_width - BAR_GAP * (n + 1)) / n;
        let max_count = counts.iter().map(|(_, c)| c).max().unwrap_or(0).max(1);

        let bars = counts
            .iter()
            .enumerate()
            .map(|(i, (label, count))| {
                let height = (count as u64 * u64::from(plot_height) / max_count as u64) as u32;
                let x = MARGIN_LEFT + BAR_GAP + i as u32 * (bar_width + BAR_GAP);
                Bar {
                    label: label.as_str(),
                    count,
                    color: color(label),
                    x,
                    y: baseline - height,
                    width: bar_width,
                    height,
                    center: x + bar_width / 2,
                }
            })
            .collect();

        Self {
            width: WIDTH,
            height: HEIGHT,
            plot_left: MARGIN_LEFT,
            plot_top: MARGIN_TOP,
            baseline,
            plot_right: WIDTH - MARGIN_RIGHT,
            max_count,
            bars,
        }
    }
}
