//! Picker views for both tape orientations

use cosmic::Element;
use cosmic::iced::Length;
use cosmic::iced_core::{Alignment, Background, Border, Color};
use cosmic::iced_widget::{canvas, column, row};
use cosmic::widget::{container, segmented_button, segmented_control, text};

use super::ruler_canvas::RulerCanvas;
use crate::core::app::Msg;
use crate::domain::{TapeOrientation, Unit};
use crate::fl;
use crate::render::geometry::TapeStyle;
use crate::session::messages;
use crate::session::state::PickerState;

/// Width of the vertical tape
const VERTICAL_TAPE_WIDTH: f32 = 150.0;
/// Height of the horizontal tape
const HORIZONTAL_TAPE_HEIGHT: f32 = 100.0;

/// Localized short label of a unit
pub fn unit_label(unit: Unit) -> String {
    match unit {
        Unit::Kg => fl!("unit-kg"),
        Unit::Lbs => fl!("unit-lbs"),
    }
}

/// Build the picker for the configured orientation
pub fn view<'a>(
    state: &PickerState,
    style: TapeStyle,
    unit_model: &'a segmented_button::SingleSelectModel,
) -> Element<'a, Msg> {
    let content = match state.orientation {
        TapeOrientation::Vertical => vertical_tape(state, style),
        TapeOrientation::Horizontal => horizontal_tape(state, style, unit_model),
    };

    let background: Color = style.background.into();
    let text_color: Color = style.label_color.into();
    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .class(cosmic::theme::Container::Custom(Box::new(move |_theme| {
            cosmic::iced::widget::container::Style {
                background: Some(Background::Color(background)),
                text_color: Some(text_color),
                border: Border::default(),
                ..Default::default()
            }
        })))
        .into()
}

fn tape_canvas<'a>(
    state: &PickerState,
    style: TapeStyle,
) -> canvas::Canvas<RulerCanvas<'a, Msg>, Msg, cosmic::Theme, cosmic::Renderer> {
    let program = RulerCanvas::new(state.tape(), style, |delta| {
        Msg::Picker(messages::Msg::Drag(delta))
    });
    canvas::Canvas::new(program)
        .width(Length::Fill)
        .height(Length::Fill)
}

/// Horizontal tick lines on a tape dragged up and down, read out in centimetres
fn vertical_tape<'a>(state: &PickerState, style: TapeStyle) -> Element<'a, Msg> {
    let prompt = text::body(fl!("height-prompt"));
    let readout = text::title3(fl!("height-readout", value = state.selected_value()));

    let tape = container(tape_canvas(state, style))
        .width(Length::Fixed(VERTICAL_TAPE_WIDTH))
        .height(Length::Fill)
        .padding([50, 0]);

    let body = row![cosmic::widget::horizontal_space(), tape]
        .padding(16)
        .width(Length::Fill)
        .height(Length::Fill);

    column![prompt, readout, body]
        .spacing(16)
        .padding([16, 0])
        .align_x(Alignment::Center)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Vertical tick lines on a tape dragged left and right, with the kg/lb toggle
fn horizontal_tape<'a>(
    state: &PickerState,
    style: TapeStyle,
    unit_model: &'a segmented_button::SingleSelectModel,
) -> Element<'a, Msg> {
    let unit_toggle = segmented_control::horizontal(unit_model)
        .on_activate(Msg::UnitActivated)
        .width(Length::Fixed(160.0));

    let prompt = text::body(fl!("weight-prompt"));
    let readout = text::title3(fl!(
        "weight-readout",
        value = state.selected_value(),
        unit = unit_label(state.unit)
    ));

    let tape = container(tape_canvas(state, style))
        .width(Length::Fill)
        .height(Length::Fixed(HORIZONTAL_TAPE_HEIGHT))
        .padding([0, 20]);

    column![
        unit_toggle,
        prompt,
        readout,
        tape,
        cosmic::widget::vertical_space()
    ]
    .spacing(16)
    .padding([16, 0])
    .align_x(Alignment::Center)
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}
