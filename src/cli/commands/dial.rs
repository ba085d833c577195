use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::core::dial::DialPoint;
use crate::core::picker::TimePicker;
use crate::errors::AppResult;
use crate::models::Schedule;
use crate::store::SqliteAlarmStore;
use crate::ui::messages::success;
use crate::utils::colors::{CYAN, GREY, RESET};
use crate::utils::date;
use crate::utils::time::parse_optional_time;

/// Replay a drag gesture on the dial and show (or save) the picked time.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Dial {
        time,
        component,
        meridiem,
        drag,
        save,
        label,
    } = cmd
    {
        let dial = cfg.dial();
        let mut picker = match parse_optional_time(time.as_ref())? {
            Some(t) => TimePicker::new(dial, t),
            None => TimePicker::starting_now(dial),
        };

        picker.select(*component);
        if let Some(m) = meridiem {
            picker.set_meridiem(*m);
        }

        let points = drag
            .iter()
            .map(|p| p.parse::<DialPoint>())
            .collect::<AppResult<Vec<_>>>()?;

        if let Some((last, moves)) = points.split_last() {
            for p in moves {
                picker.drag_changed(*p);
            }
            picker.drag_ended(*last);
        }

        let hand = picker.hand_position();
        println!("🕰️  {}{}{}", CYAN, picker.display(), RESET);
        println!(
            "{}   hand {:.0}° at ({:.1}, {:.1}){}",
            GREY,
            picker.hand_angle(),
            hand.x,
            hand.y,
            RESET
        );

        if *save {
            let label = label.as_deref().unwrap_or(&cfg.default_label);
            let mut store = SqliteAlarmStore::open(&cfg.database)?;
            let alarm = AddLogic::from_picker(
                &mut store,
                &picker,
                label,
                Some(Schedule::OneShot(date::today())),
            )?;

            store.audit(
                "add",
                &alarm.id.to_string(),
                &format!("Added alarm '{}' at {} from dial", alarm.label, alarm.time),
            );
            success(picker.confirmation());
        }
    }

    Ok(())
}
