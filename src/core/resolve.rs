use crate::errors::{AppError, AppResult};
use crate::models::AlarmId;
use crate::store::AlarmStore;

/// Shortest id prefix accepted on the command line.
pub const MIN_PREFIX_LEN: usize = 4;

/// Resolve a full id or a unique id prefix to an existing alarm.
pub fn resolve_id<S: AlarmStore + ?Sized>(store: &S, token: &str) -> AppResult<AlarmId> {
    if let Some(id) = AlarmId::parse(token) {
        return match store.get(&id)? {
            Some(_) => Ok(id),
            None => Err(AppError::AlarmNotFound(token.to_string())),
        };
    }

    let cleaned = token.trim();
    if !cleaned.chars().all(|c| c.is_ascii_hexdigit() || c == '-') {
        return Err(AppError::AlarmNotFound(format!(
            "'{}' (ids are hexadecimal)",
            cleaned
        )));
    }
    if cleaned.replace('-', "").len() < MIN_PREFIX_LEN {
        return Err(AppError::AlarmNotFound(format!(
            "'{}' (use at least {} characters of the id)",
            cleaned, MIN_PREFIX_LEN
        )));
    }

    let mut matches = store.ids_with_prefix(cleaned)?;
    match matches.len() {
        0 => Err(AppError::AlarmNotFound(cleaned.to_string())),
        1 => Ok(matches.remove(0)),
        _ => Err(AppError::AmbiguousId(cleaned.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AlarmDraft, TimeOfDay};
    use crate::store::InMemoryAlarmStore;

    #[test]
    fn resolves_full_ids_and_prefixes() {
        let mut store = InMemoryAlarmStore::new();
        let alarm = store
            .add(AlarmDraft::new(TimeOfDay::new(6, 0).unwrap()))
            .unwrap();

        assert_eq!(resolve_id(&store, &alarm.id.to_string()).unwrap(), alarm.id);
        assert_eq!(resolve_id(&store, &alarm.id.short()).unwrap(), alarm.id);
    }

    #[test]
    fn short_or_unknown_tokens_fail() {
        let store = InMemoryAlarmStore::new();
        assert!(matches!(
            resolve_id(&store, "ab"),
            Err(AppError::AlarmNotFound(_))
        ));
        assert!(matches!(
            resolve_id(&store, "abcdef"),
            Err(AppError::AlarmNotFound(_))
        ));
        assert!(matches!(
            resolve_id(&store, &AlarmId::new().to_string()),
            Err(AppError::AlarmNotFound(_))
        ));
    }

    #[test]
    fn wildcard_characters_never_match() {
        let mut store = InMemoryAlarmStore::new();
        store
            .add(AlarmDraft::new(TimeOfDay::new(6, 0).unwrap()))
            .unwrap();

        for token in ["____", "%%%%", "ab_%", "abcd*"] {
            assert!(matches!(
                resolve_id(&store, token),
                Err(AppError::AlarmNotFound(_))
            ));
        }
    }
}
