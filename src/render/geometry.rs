//! Pure tape layout
//!
//! Maps a [`TapeView`] and a viewport size to everything that has to be painted.
//! Nothing here touches the renderer, so the mapping can be checked in tests.

use crate::config::TickColor;
use crate::domain::{LINE_SPACING, TapeOrientation, TickKind, tick_position};
use crate::session::state::TapeView;

/// Gap between a label and the start of its tick on the vertical tape
pub const LABEL_GAP: f32 = 40.0;
/// Gap between a label and the top of its tick on the horizontal tape
pub const LABEL_GAP_ABOVE: f32 = 10.0;
/// Edge fade length on the vertical tape
pub const VERTICAL_FADE: f32 = 150.0;
/// Edge fade length on the horizontal tape
pub const HORIZONTAL_FADE: f32 = 100.0;

/// Stroke style of one class of line
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineStyle {
    /// Stroke width in logical pixels
    pub thickness: f32,
    /// Line length as a fraction of the cross axis
    pub length: f32,
    pub color: TickColor,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TapeStyle {
    pub major: LineStyle,
    pub normal: LineStyle,
    pub middle: LineStyle,
    pub label_color: TickColor,
    pub label_size: f32,
    pub background: TickColor,
}

/// A stroked line from `start` to `end`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub start: (f32, f32),
    pub end: (f32, f32),
    pub thickness: f32,
    pub color: TickColor,
}

/// How a label is placed relative to its anchor
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LabelAnchor {
    /// Anchor is the right edge, vertically centred
    RightCenter,
    /// Anchor is the bottom edge, horizontally centred
    BottomCenter,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Label {
    pub text: String,
    pub position: (f32, f32),
    pub anchor: LabelAnchor,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TickMark {
    pub value: i32,
    pub kind: TickKind,
    /// Position along the scroll axis
    pub position: f32,
    pub line: Segment,
    pub label: Option<Label>,
}

/// Gradient rectangle going from the background color at `opaque` to transparent at `clear`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EdgeFade {
    pub top_left: (f32, f32),
    pub size: (f32, f32),
    pub opaque: (f32, f32),
    pub clear: (f32, f32),
    pub color: TickColor,
}

/// Everything to paint for one frame, in paint order
#[derive(Clone, Debug, PartialEq)]
pub struct TapeLayout {
    pub ticks: Vec<TickMark>,
    pub fades: [EdgeFade; 2],
    pub middle: Segment,
}

/// Lay out the tape for a viewport of `size` (width, height)
pub fn layout_tape(tape: &TapeView, size: (f32, f32), style: &TapeStyle) -> TapeLayout {
    let (width, height) = size;
    let (axis_len, cross_len) = match tape.orientation {
        TapeOrientation::Vertical => (height, width),
        TapeOrientation::Horizontal => (width, height),
    };

    let ticks = visible_indices(tape, axis_len)
        .filter_map(|index| {
            let position = tick_position(index, tape.offset, axis_len);
            if !(0.0..=axis_len).contains(&position) {
                return None;
            }
            let value = tape.range.value_at(index);
            Some(tick_mark(tape.orientation, value, position, cross_len, style))
        })
        .collect();

    TapeLayout {
        ticks,
        fades: edge_fades(tape.orientation, size, style.background),
        middle: middle_marker(tape.orientation, axis_len, cross_len, &style.middle),
    }
}

/// Candidate tick indices around the viewport, one tick of slack on each side
fn visible_indices(tape: &TapeView, axis_len: f32) -> std::ops::Range<usize> {
    let count = tape.range.tick_count();
    if count == 0 || !axis_len.is_finite() || axis_len < 0.0 {
        return 0..0;
    }
    let half = axis_len / 2.0;
    let first = ((tape.offset - half) / LINE_SPACING).floor() - 1.0;
    let last = ((tape.offset + half) / LINE_SPACING).ceil() + 1.0;
    let first = first.max(0.0) as usize;
    let last = (last.max(-1.0) + 1.0).min(count as f32) as usize;
    first..last.max(first)
}

fn tick_mark(
    orientation: TapeOrientation,
    value: i32,
    position: f32,
    cross_len: f32,
    style: &TapeStyle,
) -> TickMark {
    let kind = TickKind::of(value);
    let line_style = if kind.is_major() {
        &style.major
    } else {
        &style.normal
    };
    let length = cross_len * line_style.length;

    let (start, end) = match orientation {
        TapeOrientation::Vertical => ((cross_len - length, position), (cross_len, position)),
        TapeOrientation::Horizontal => ((position, cross_len - length), (position, cross_len)),
    };

    let label = kind.is_major().then(|| match orientation {
        TapeOrientation::Vertical => Label {
            text: value.to_string(),
            position: (cross_len - length - LABEL_GAP, position),
            anchor: LabelAnchor::RightCenter,
        },
        TapeOrientation::Horizontal => Label {
            text: value.to_string(),
            position: (position, cross_len - length - LABEL_GAP_ABOVE),
            anchor: LabelAnchor::BottomCenter,
        },
    });

    TickMark {
        value,
        kind,
        position,
        line: Segment {
            start,
            end,
            thickness: line_style.thickness,
            color: line_style.color,
        },
        label,
    }
}

fn middle_marker(
    orientation: TapeOrientation,
    axis_len: f32,
    cross_len: f32,
    style: &LineStyle,
) -> Segment {
    let center = axis_len / 2.0;
    let from = cross_len * style.length;
    let (start, end) = match orientation {
        TapeOrientation::Vertical => ((from, center), (cross_len, center)),
        TapeOrientation::Horizontal => ((center, from), (center, cross_len)),
    };
    Segment {
        start,
        end,
        thickness: style.thickness,
        color: style.color,
    }
}

fn edge_fades(orientation: TapeOrientation, size: (f32, f32), color: TickColor) -> [EdgeFade; 2] {
    let (width, height) = size;
    match orientation {
        TapeOrientation::Vertical => {
            let fade = VERTICAL_FADE.min(height / 2.0).max(0.0);
            [
                EdgeFade {
                    top_left: (0.0, 0.0),
                    size: (width, fade),
                    opaque: (0.0, 0.0),
                    clear: (0.0, fade),
                    color,
                },
                EdgeFade {
                    top_left: (0.0, height - fade),
                    size: (width, fade),
                    opaque: (0.0, height),
                    clear: (0.0, height - fade),
                    color,
                },
            ]
        }
        TapeOrientation::Horizontal => {
            let fade = HORIZONTAL_FADE.min(width / 2.0).max(0.0);
            [
                EdgeFade {
                    top_left: (0.0, 0.0),
                    size: (fade, height),
                    opaque: (0.0, 0.0),
                    clear: (fade, 0.0),
                    color,
                },
                EdgeFade {
                    top_left: (width - fade, 0.0),
                    size: (fade, height),
                    opaque: (width, 0.0),
                    clear: (width - fade, 0.0),
                    color,
                },
            ]
        }
    }
}
