//! RulerCanvas - Canvas program for the draggable ruler tape
//!
//! This widget handles:
//! - Turning mouse drags, single-finger touch drags and wheel scrolls into
//!   signed deltas along the scroll axis
//! - Painting a [`TapeLayout`] (ticks, labels, edge fades, middle marker)

use cosmic::iced_core::{
    Color, Point, Rectangle, Size, alignment,
    mouse::{self, Cursor},
    touch,
};
use cosmic::iced_widget::canvas;

use crate::domain::{LINE_SPACING, TapeOrientation};
use crate::render::geometry::{EdgeFade, LabelAnchor, Segment, TapeLayout, TapeStyle, layout_tape};
use crate::session::state::TapeView;

/// Canvas program drawing the tape and reporting drag deltas
pub struct RulerCanvas<'a, Message: Clone + 'static> {
    /// Tape snapshot for this frame
    pub tape: TapeView,
    pub style: TapeStyle,
    /// Callback for a drag delta in logical pixels
    pub on_drag: Box<dyn Fn(f32) -> Message + 'a>,
}

/// Pointer tracking between events
#[derive(Debug, Default)]
pub struct DragState {
    /// Last pointer position along the scroll axis while dragging
    last: Option<f32>,
    /// Finger driving the drag, if it came from a touch screen
    finger: Option<touch::Finger>,
}

impl DragState {
    pub fn is_dragging(&self) -> bool {
        self.last.is_some()
    }

    fn begin(&mut self, along: f32, finger: Option<touch::Finger>) {
        self.last = Some(along);
        self.finger = finger;
    }

    /// Advance to `along`, returning the delta since the previous position
    fn advance(&mut self, along: f32) -> Option<f32> {
        let last = self.last.as_mut()?;
        let delta = along - *last;
        *last = along;
        (delta != 0.0).then_some(delta)
    }

    fn end(&mut self) -> bool {
        self.finger = None;
        self.last.take().is_some()
    }
}

impl<'a, Message: Clone + 'static> RulerCanvas<'a, Message> {
    pub fn new(tape: TapeView, style: TapeStyle, on_drag: impl Fn(f32) -> Message + 'a) -> Self {
        Self {
            tape,
            style,
            on_drag: Box::new(on_drag),
        }
    }

    /// Coordinate of `point` along the scroll axis
    fn along(&self, point: Point) -> f32 {
        match self.tape.orientation {
            TapeOrientation::Vertical => point.y,
            TapeOrientation::Horizontal => point.x,
        }
    }

    /// Wheel movement along the scroll axis, in pixels
    fn wheel_delta(&self, delta: mouse::ScrollDelta) -> f32 {
        let (x, y) = match delta {
            mouse::ScrollDelta::Lines { x, y } => (x * LINE_SPACING, y * LINE_SPACING),
            mouse::ScrollDelta::Pixels { x, y } => (x, y),
        };
        match self.tape.orientation {
            TapeOrientation::Vertical => y,
            // Plain vertical wheels still scroll the horizontal tape
            TapeOrientation::Horizontal if x != 0.0 => x,
            TapeOrientation::Horizontal => y,
        }
    }

    fn drag(&self, delta: f32) -> (canvas::event::Status, Option<Message>) {
        (canvas::event::Status::Captured, Some((self.on_drag)(delta)))
    }
}

impl<'a, Message: Clone + 'static> canvas::Program<Message, cosmic::Theme, cosmic::Renderer>
    for RulerCanvas<'a, Message>
{
    type State = DragState;

    fn update(
        &self,
        state: &mut Self::State,
        event: canvas::Event,
        bounds: Rectangle,
        cursor: Cursor,
    ) -> (canvas::event::Status, Option<Message>) {
        use cosmic::iced_core::mouse::{Button, Event as MouseEvent};

        match event {
            canvas::Event::Mouse(MouseEvent::ButtonPressed(Button::Left)) => {
                let Some(pos) = cursor.position_over(bounds) else {
                    return (canvas::event::Status::Ignored, None);
                };
                state.begin(self.along(pos), None);
                return (canvas::event::Status::Captured, None);
            }
            canvas::Event::Mouse(MouseEvent::CursorMoved { position }) => {
                if state.finger.is_none()
                    && let Some(delta) = state.advance(self.along(position))
                {
                    return self.drag(delta);
                }
            }
            canvas::Event::Mouse(MouseEvent::ButtonReleased(Button::Left)) => {
                if state.finger.is_none() && state.end() {
                    return (canvas::event::Status::Captured, None);
                }
            }
            canvas::Event::Mouse(MouseEvent::WheelScrolled { delta }) => {
                if cursor.is_over(bounds) {
                    let delta = self.wheel_delta(delta);
                    if delta != 0.0 {
                        return self.drag(delta);
                    }
                }
            }
            canvas::Event::Touch(touch::Event::FingerPressed { id, position }) => {
                // Single-finger only: a second finger is ignored while one is down
                if !state.is_dragging() && bounds.contains(position) {
                    state.begin(self.along(position), Some(id));
                    return (canvas::event::Status::Captured, None);
                }
            }
            canvas::Event::Touch(touch::Event::FingerMoved { id, position }) => {
                if state.finger == Some(id)
                    && let Some(delta) = state.advance(self.along(position))
                {
                    return self.drag(delta);
                }
            }
            canvas::Event::Touch(
                touch::Event::FingerLifted { id, .. } | touch::Event::FingerLost { id, .. },
            ) => {
                if state.finger == Some(id) && state.end() {
                    return (canvas::event::Status::Captured, None);
                }
            }
            _ => {}
        }

        (canvas::event::Status::Ignored, None)
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &cosmic::Renderer,
        _theme: &cosmic::Theme,
        bounds: Rectangle,
        _cursor: Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());
        let layout = layout_tape(&self.tape, (bounds.width, bounds.height), &self.style);

        frame.fill_rectangle(
            Point::ORIGIN,
            bounds.size(),
            Color::from(self.style.background),
        );
        draw_layout(&mut frame, &layout, &self.style);

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        state: &Self::State,
        bounds: Rectangle,
        cursor: Cursor,
    ) -> mouse::Interaction {
        if state.is_dragging() {
            mouse::Interaction::Grabbing
        } else if cursor.is_over(bounds) {
            mouse::Interaction::Grab
        } else {
            mouse::Interaction::default()
        }
    }
}

/// Paint ticks and labels, then the edge fades, then the middle marker on top
fn draw_layout(frame: &mut canvas::Frame, layout: &TapeLayout, style: &TapeStyle) {
    for tick in &layout.ticks {
        stroke_segment(frame, &tick.line);

        if let Some(label) = &tick.label {
            let (horizontal_alignment, vertical_alignment) = match label.anchor {
                LabelAnchor::RightCenter => {
                    (alignment::Horizontal::Right, alignment::Vertical::Center)
                }
                LabelAnchor::BottomCenter => {
                    (alignment::Horizontal::Center, alignment::Vertical::Bottom)
                }
            };
            frame.fill_text(canvas::Text {
                content: label.text.clone(),
                position: Point::new(label.position.0, label.position.1),
                color: style.label_color.into(),
                size: style.label_size.into(),
                horizontal_alignment,
                vertical_alignment,
                ..canvas::Text::default()
            });
        }
    }

    for fade in &layout.fades {
        fill_fade(frame, fade);
    }

    stroke_segment(frame, &layout.middle);
}

fn stroke_segment(frame: &mut canvas::Frame, segment: &Segment) {
    let path = canvas::Path::line(
        Point::new(segment.start.0, segment.start.1),
        Point::new(segment.end.0, segment.end.1),
    );
    let color: Color = segment.color.into();
    frame.stroke(
        &path,
        canvas::Stroke {
            style: color.into(),
            width: segment.thickness,
            line_cap: canvas::LineCap::Round,
            ..canvas::Stroke::default()
        },
    );
}

fn fill_fade(frame: &mut canvas::Frame, fade: &EdgeFade) {
    if fade.size.0 <= 0.0 || fade.size.1 <= 0.0 {
        return;
    }
    let opaque: Color = fade.color.into();
    let clear = Color { a: 0.0, ..opaque };
    let gradient = canvas::gradient::Linear::new(
        Point::new(fade.opaque.0, fade.opaque.1),
        Point::new(fade.clear.0, fade.clear.1),
    )
    .add_stop(0.0, opaque)
    .add_stop(1.0, clear);

    frame.fill_rectangle(
        Point::new(fade.top_left.0, fade.top_left.1),
        Size::new(fade.size.0, fade.size.1),
        canvas::Fill::from(canvas::Gradient::Linear(gradient)),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RulerConfig;
    use crate::domain::ValueRange;
    use canvas::Program;
    use cosmic::iced_core::mouse::{Button, Event as MouseEvent};

    fn ruler(orientation: TapeOrientation) -> RulerCanvas<'static, f32> {
        let tape = TapeView {
            orientation,
            range: ValueRange::new(0, 100),
            offset: 0.0,
        };
        RulerCanvas::new(tape, RulerConfig::default().tape_style(), |d| d)
    }

    fn bounds() -> Rectangle {
        Rectangle::new(Point::ORIGIN, Size::new(400.0, 400.0))
    }

    fn mouse(
        canvas: &RulerCanvas<'static, f32>,
        state: &mut DragState,
        event: MouseEvent,
        at: Point,
    ) -> Option<f32> {
        canvas
            .update(state, canvas::Event::Mouse(event), bounds(), Cursor::Available(at))
            .1
    }

    fn finger(
        canvas: &RulerCanvas<'static, f32>,
        state: &mut DragState,
        event: touch::Event,
    ) -> Option<f32> {
        canvas
            .update(state, canvas::Event::Touch(event), bounds(), Cursor::Unavailable)
            .1
    }

    #[test]
    fn test_mouse_drag_follows_scroll_axis() {
        let canvas = ruler(TapeOrientation::Vertical);
        let mut state = DragState::default();
        let start = Point::new(100.0, 100.0);
        assert_eq!(mouse(&canvas, &mut state, MouseEvent::ButtonPressed(Button::Left), start), None);
        assert!(state.is_dragging());

        let moved = Point::new(140.0, 130.0);
        let event = MouseEvent::CursorMoved { position: moved };
        assert_eq!(mouse(&canvas, &mut state, event, moved), Some(30.0));

        mouse(&canvas, &mut state, MouseEvent::ButtonReleased(Button::Left), moved);
        assert!(!state.is_dragging());
        let event = MouseEvent::CursorMoved { position: start };
        assert_eq!(mouse(&canvas, &mut state, event, start), None);

        let canvas = ruler(TapeOrientation::Horizontal);
        let mut state = DragState::default();
        mouse(&canvas, &mut state, MouseEvent::ButtonPressed(Button::Left), start);
        let event = MouseEvent::CursorMoved { position: moved };
        assert_eq!(mouse(&canvas, &mut state, event, moved), Some(40.0));
    }

    #[test]
    fn test_press_outside_bounds_is_ignored() {
        let canvas = ruler(TapeOrientation::Vertical);
        let mut state = DragState::default();
        let outside = Point::new(500.0, 100.0);
        let (status, message) = canvas.update(
            &mut state,
            canvas::Event::Mouse(MouseEvent::ButtonPressed(Button::Left)),
            bounds(),
            Cursor::Available(outside),
        );
        assert_eq!(status, canvas::event::Status::Ignored);
        assert_eq!(message, None);
        assert!(!state.is_dragging());
    }

    #[test]
    fn test_first_finger_drives_drag() {
        let canvas = ruler(TapeOrientation::Horizontal);
        let mut state = DragState::default();
        let (first, second) = (touch::Finger(1), touch::Finger(2));

        let pressed = |id, x| touch::Event::FingerPressed {
            id,
            position: Point::new(x, 200.0),
        };
        let moved = |id, x| touch::Event::FingerMoved {
            id,
            position: Point::new(x, 200.0),
        };
        assert_eq!(finger(&canvas, &mut state, pressed(first, 100.0)), None);
        assert_eq!(finger(&canvas, &mut state, pressed(second, 300.0)), None);

        assert_eq!(finger(&canvas, &mut state, moved(second, 250.0)), None);
        assert_eq!(finger(&canvas, &mut state, moved(first, 80.0)), Some(-20.0));

        let lifted = touch::Event::FingerLifted {
            id: second,
            position: Point::new(250.0, 200.0),
        };
        finger(&canvas, &mut state, lifted);
        assert!(state.is_dragging());

        let lifted = touch::Event::FingerLifted {
            id: first,
            position: Point::new(80.0, 200.0),
        };
        finger(&canvas, &mut state, lifted);
        assert!(!state.is_dragging());
    }

    #[test]
    fn test_wheel_scrolls_tape() {
        let inside = Point::new(200.0, 200.0);
        let lines = MouseEvent::WheelScrolled {
            delta: mouse::ScrollDelta::Lines { x: 0.0, y: 1.0 },
        };

        let canvas = ruler(TapeOrientation::Horizontal);
        let mut state = DragState::default();
        assert_eq!(mouse(&canvas, &mut state, lines.clone(), inside), Some(20.0));
        assert_eq!(mouse(&canvas, &mut state, lines.clone(), Point::new(500.0, 0.0)), None);

        let sideways = MouseEvent::WheelScrolled {
            delta: mouse::ScrollDelta::Pixels { x: -12.0, y: 3.0 },
        };
        assert_eq!(mouse(&canvas, &mut state, sideways.clone(), inside), Some(-12.0));

        let canvas = ruler(TapeOrientation::Vertical);
        assert_eq!(mouse(&canvas, &mut state, sideways, inside), Some(3.0));
        assert!(!state.is_dragging());
    }

    #[test]
    fn test_drag_state_reports_deltas() {
        let mut state = DragState::default();
        assert_eq!(state.advance(10.0), None);
        assert!(!state.is_dragging());

        state.begin(10.0, None);
        assert_eq!(state.advance(10.0), None);
        assert_eq!(state.advance(25.0), Some(15.0));
        assert_eq!(state.advance(5.0), Some(-20.0));
        assert!(state.end());
        assert!(!state.end());
        assert_eq!(state.advance(0.0), None);
    }
}
