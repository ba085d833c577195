use crate::errors::AppResult;
use crate::models::AlarmId;
use crate::store::AlarmStore;

pub struct DeleteLogic;

impl DeleteLogic {
    pub fn one<S: AlarmStore + ?Sized>(store: &mut S, id: &AlarmId) -> AppResult<()> {
        store.delete(id)
    }

    /// Delete every alarm. An empty store is left untouched.
    pub fn all<S: AlarmStore + ?Sized>(store: &mut S) -> AppResult<usize> {
        store.delete_all()
    }
}
