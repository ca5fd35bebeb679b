// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! # rota-calendar
//!
//! Loads a schedule file, focuses one staff member and prints what a
//! month-grid renderer needs as JSON on stdout. Logs go to stderr.

#![deny(
    clippy::pedantic,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used
)]

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use color_eyre::{
    Result,
    eyre::{Context, eyre},
};
use rota_calendar::{
    CalendarController, CalendarState, CalendarView, Command, DEFAULT_LOCALE, ScheduleAction,
};
use rota_calendar_domain::{
    ProfileCard, ReferenceZone, Schedule, SessionFallback, UserProfile, parse_iso_day,
    parse_stored_date,
};
use serde::Serialize;
use time::Date;
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_log::AsTrace;

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(args.log_level())
        .with_writer(std::io::stderr)
        .without_time()
        .init();

    match args.run() {
        Ok(()) => (),
        Err(err) => {
            tracing::error!("{err:#}");
            std::process::exit(1);
        }
    }
    Ok(())
}

/// Rota Calendar - staff schedule calendar views
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the schedule JSON file; required by every command but `profile`
    #[arg(short, long)]
    schedule: Option<PathBuf>,

    /// Path to the signed-in user's profile JSON file
    #[arg(short, long)]
    profile: Option<PathBuf>,

    /// IANA time zone in which shift instants become calendar days
    #[arg(short, long, default_value = "UTC")]
    time_zone: ReferenceZone,

    /// Staff id to focus instead of the first roster entry
    #[arg(long)]
    staff: Option<String>,

    #[command(subcommand)]
    command: Action,

    #[command(flatten)]
    verbosity: Verbosity<InfoLevel>,
}

#[derive(Clone, Debug, Subcommand)]
enum Action {
    /// Print the calendar view of the focal staff member
    #[command(visible_alias = "v")]
    View {
        /// Months to move the visible window from the schedule start
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        months: i32,
    },

    /// Move an assignment to another day and print the update action
    #[command(visible_alias = "m")]
    Move {
        /// Assignment id
        #[arg(long)]
        assignment: String,

        /// Target day (YYYY-MM-DD)
        #[arg(long, value_parser = parse_iso_day)]
        date: Date,
    },

    /// Print the detail of one of the focal staff member's events
    #[command(visible_alias = "e")]
    Event {
        /// Assignment id
        #[arg(long)]
        id: String,
    },

    /// Print the pairing that covers a day for the focal staff member
    #[command(visible_alias = "p")]
    Pair {
        /// Day (DD.MM.YYYY)
        #[arg(long, value_parser = parse_stored_date)]
        date: Date,
    },

    /// Print how one day cell is marked
    #[command(visible_alias = "d")]
    Day {
        /// Day (YYYY-MM-DD)
        #[arg(long, value_parser = parse_iso_day)]
        date: Date,
    },

    /// Print the signed-in user's profile card
    Profile {
        /// Name stored in the session
        #[arg(long, default_value = "")]
        session_name: String,

        /// Email stored in the session
        #[arg(long, default_value = "")]
        session_email: String,

        /// Roles stored in the session
        #[arg(long, default_value = "")]
        session_roles: String,
    },
}

impl Args {
    fn log_level(&self) -> LevelFilter {
        self.verbosity.log_level_filter().as_trace()
    }

    fn run(self) -> Result<()> {
        let profile: Option<UserProfile> = self
            .profile
            .as_deref()
            .map(read_json::<UserProfile>)
            .transpose()?;

        if let Action::Profile {
            session_name,
            session_email,
            session_roles,
        } = &self.command
        {
            let fallback: SessionFallback = SessionFallback {
                name: session_name.clone(),
                email: session_email.clone(),
                roles: session_roles.clone(),
            };
            return print_json(&ProfileCard::resolve(profile.as_ref(), &fallback));
        }

        let locale: &str = profile
            .as_ref()
            .and_then(|profile| profile.language.as_deref())
            .unwrap_or(DEFAULT_LOCALE);
        let mut controller: CalendarController<Vec<ScheduleAction>> =
            CalendarController::new(CalendarState::new(self.time_zone, locale), Vec::new());

        let schedule_path: PathBuf = self
            .schedule
            .ok_or_else(|| eyre!("--schedule is required for this command"))?;

        controller.begin_fetch();
        match read_json::<Schedule>(&schedule_path) {
            Ok(schedule) => {
                controller.complete_fetch(Ok(schedule))?;
            }
            Err(err) => {
                controller.complete_fetch(Err(format!("{err:#}")))?;
                return Err(err);
            }
        }

        if let Some(staff_id) = self.staff {
            controller.handle(Command::SelectStaff { staff_id })?;
        }

        info!(
            time_zone = %controller.state().zone(),
            locale = controller.state().locale(),
            staff_id = controller.view().selection.staff_id().unwrap_or_default(),
            "Schedule loaded"
        );

        run_action(&mut controller, self.command)
    }
}

fn run_action(
    controller: &mut CalendarController<Vec<ScheduleAction>>,
    action: Action,
) -> Result<()> {
    match action {
        Action::View { months } => {
            let view: &CalendarView = if months == 0 {
                controller.view()
            } else {
                controller.handle(Command::NavigateMonths { delta: months })?
            };
            print_json(view)
        }
        Action::Move { assignment, date } => {
            controller.handle(Command::MoveEvent {
                assignment_id: assignment,
                new_day: date,
            })?;
            let update: &ScheduleAction = controller
                .dispatcher()
                .iter()
                .rev()
                .find(|action| matches!(action, ScheduleAction::UpdateScheduleAssignment(_)))
                .ok_or_else(|| eyre!("No update action was dispatched"))?;
            print_json(update)
        }
        Action::Event { id } => print_json(&controller.state().event_detail(&id)?),
        Action::Pair { date } => print_json(&controller.state().pair_detail(date)?),
        Action::Day { date } => print_json(&controller.state().day_cell(date)),
        Action::Profile { .. } => Ok(()),
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let text: String = fs::read_to_string(path)
        .wrap_err_with(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&text).wrap_err_with(|| format!("Failed to parse {}", path.display()))
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let text: String = serde_json::to_string_pretty(value).wrap_err("Failed to encode output")?;
    println!("{text}");
    Ok(())
}
