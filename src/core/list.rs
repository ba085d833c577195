use crate::models::Alarm;
use crate::store::AlarmStore;
use crate::ui::messages::warning;

pub struct ListLogic;

impl ListLogic {
    /// Alarms to show. A failing store is reported and yields an empty
    /// list, so the caller can keep rendering.
    pub fn fetch<S: AlarmStore + ?Sized>(store: &S) -> Vec<Alarm> {
        match store.list() {
            Ok(alarms) => {
                log::debug!("fetched {} alarms", alarms.len());
                alarms
            }
            Err(e) => {
                log::error!("error fetching alarms: {}", e);
                warning(format!("Could not load alarms: {}", e));
                Vec::new()
            }
        }
    }
}
