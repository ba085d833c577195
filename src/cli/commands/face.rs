use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::utils::table::{Column, Table};

/// Print the numbers drawn around the dial and their coordinates.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Face { component } = cmd {
        let dial = cfg.dial();

        let mut table = Table::new(vec![
            Column::new("LABEL", 5),
            Column::new("X", 7),
            Column::new("Y", 7),
        ]);

        for l in dial.labels(*component) {
            table.add_row(vec![
                l.text,
                format!("{:.1}", l.position.x),
                format!("{:.1}", l.position.y),
            ]);
        }

        table.fit();
        header(
            "🕰️  Dial face",
            &format!(
                "center ({:.0}, {:.0}), radius {:.0}",
                dial.center.x, dial.center.y, dial.radius
            ),
        );
        println!("{}", table.render());
    }

    Ok(())
}
