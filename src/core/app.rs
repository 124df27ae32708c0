use clap::Parser;
use cosmic::app;
use cosmic::widget::segmented_button;
use cosmic::{ApplicationExt, Task};

use crate::config::RulerConfig;
use crate::domain::Unit;
use crate::fl;
use crate::render::geometry::TapeStyle;
use crate::session::messages;
use crate::session::state::PickerState;
use crate::widget::picker;

pub(crate) fn run(flags: Flags) -> cosmic::iced::Result {
    let settings = cosmic::app::Settings::default().size(cosmic::iced::Size::new(420.0, 640.0));
    cosmic::app::run::<App>(settings, flags)
}

/// Command-line overrides for the persisted config
#[derive(Parser, Debug)]
#[command(name = "rulerpick", about = "Ruler-style height and weight picker")]
pub struct Args {
    /// Smallest selectable value
    #[arg(long, allow_negative_numbers = true)]
    pub min: Option<i32>,

    /// Largest selectable value
    #[arg(long, allow_negative_numbers = true)]
    pub max: Option<i32>,

    /// Tape with horizontal tick lines, dragged up and down
    #[arg(long, conflicts_with = "horizontal")]
    pub vertical: bool,

    /// Tape with vertical tick lines and a kg/lb toggle
    #[arg(long)]
    pub horizontal: bool,

    /// Store the resulting range and orientation as the new defaults
    #[arg(long)]
    pub save: bool,
}

/// Startup options: the persisted config with command-line overrides applied
#[derive(Debug, Clone, PartialEq)]
pub struct Flags {
    pub config: RulerConfig,
}

impl Flags {
    pub fn new(args: &Args, mut config: RulerConfig) -> Self {
        if let Some(min) = args.min {
            config.min_value = min;
        }
        if let Some(max) = args.max {
            config.max_value = max;
        }
        if args.vertical {
            config.horizontal_lines = true;
        } else if args.horizontal {
            config.horizontal_lines = false;
        }

        if config.min_value > config.max_value {
            log::warn!(
                "min {} is above max {}, the tape will be empty",
                config.min_value,
                config.max_value
            );
        }

        Self { config }
    }
}

/// Create the kg/lb segmented button model, with kg active
pub fn create_unit_model() -> segmented_button::SingleSelectModel {
    segmented_button::Model::builder()
        .insert(|b| b.text(picker::unit_label(Unit::Kg)).data(Unit::Kg).activate())
        .insert(|b| b.text(picker::unit_label(Unit::Lbs)).data(Unit::Lbs))
        .build()
}

pub struct App {
    pub core: app::Core,
    pub picker: PickerState,
    pub style: TapeStyle,
    /// Unit segmented button model (stored here since it's not Send)
    pub unit_model: segmented_button::SingleSelectModel,
}

#[derive(Debug, Clone)]
pub enum Msg {
    Picker(messages::Msg),
    /// A unit segment was pressed
    UnitActivated(segmented_button::Entity),
}

impl cosmic::Application for App {
    type Executor = cosmic::executor::Default;

    type Flags = Flags;

    type Message = Msg;

    const APP_ID: &'static str = RulerConfig::ID;

    fn core(&self) -> &app::Core {
        &self.core
    }

    fn core_mut(&mut self) -> &mut app::Core {
        &mut self.core
    }

    fn init(
        core: app::Core,
        flags: Self::Flags,
    ) -> (Self, cosmic::iced::Task<cosmic::Action<Self::Message>>) {
        let config = flags.config;
        log::info!(
            "starting picker: range {}..={}, {:?} tape",
            config.min_value,
            config.max_value,
            config.orientation()
        );

        let mut app = Self {
            core,
            picker: PickerState::new(config.range(), config.orientation()),
            style: config.tape_style(),
            unit_model: create_unit_model(),
        };
        app.set_header_title(fl!("app-title"));

        (app, Task::none())
    }

    fn view(&self) -> cosmic::Element<'_, Self::Message> {
        picker::view(&self.picker, self.style, &self.unit_model)
    }

    fn update(
        &mut self,
        message: Self::Message,
    ) -> cosmic::iced::Task<cosmic::Action<Self::Message>> {
        match message {
            Msg::Picker(msg) => self.picker.update(msg),
            Msg::UnitActivated(entity) => {
                self.unit_model.activate(entity);
                if let Some(unit) = self.unit_model.data::<Unit>(entity).copied() {
                    self.picker.update(messages::Msg::SelectUnit(unit));
                }
            }
        }
        Task::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Args, clap::Error> {
        Args::try_parse_from(std::iter::once("rulerpick").chain(args.iter().copied()))
    }

    fn flags(args: &[&str]) -> Flags {
        Flags::new(&parse(args).unwrap(), RulerConfig::default())
    }

    #[test]
    fn test_no_args_keeps_config() {
        let args = parse(&[]).unwrap();
        assert!(!args.save);
        assert_eq!(Flags::new(&args, RulerConfig::default()).config, RulerConfig::default());
    }

    #[test]
    fn test_range_and_orientation_overrides() {
        let flags = flags(&["--min", "10", "--max=250", "--vertical"]);
        assert_eq!(flags.config.min_value, 10);
        assert_eq!(flags.config.max_value, 250);
        assert!(flags.config.horizontal_lines);

        let vertical = RulerConfig {
            horizontal_lines: true,
            ..RulerConfig::default()
        };
        let flags = Flags::new(&parse(&["--horizontal"]).unwrap(), vertical.clone());
        assert!(!flags.config.horizontal_lines);

        let flags = Flags::new(&parse(&[]).unwrap(), vertical);
        assert!(flags.config.horizontal_lines);
    }

    #[test]
    fn test_inverted_range_is_accepted() {
        let flags = flags(&["--min", "100", "--max", "0"]);
        assert_eq!(flags.config.range().tick_count(), 0);

        let flags = flags(&["--min", "-5"]);
        assert_eq!(flags.config.min_value, -5);
    }

    #[test]
    fn test_bad_args_are_errors() {
        assert!(parse(&["--min"]).is_err());
        assert!(parse(&["--max", "lots"]).is_err());
        assert!(parse(&["--sideways"]).is_err());
        assert!(parse(&["--vertical", "--horizontal"]).is_err());
    }

    #[test]
    fn test_save_flag() {
        let args = parse(&["--max", "250", "--save"]).unwrap();
        assert!(args.save);
        assert_eq!(Flags::new(&args, RulerConfig::default()).config.max_value, 250);
    }

    #[test]
    fn test_unit_model_starts_on_kg() {
        let model = create_unit_model();
        assert_eq!(model.active_data::<Unit>(), Some(&Unit::Kg));

        let units: Vec<Unit> = model
            .iter()
            .filter_map(|entity| model.data::<Unit>(entity).copied())
            .collect();
        assert_eq!(units, vec![Unit::Kg, Unit::Lbs]);
    }
}
