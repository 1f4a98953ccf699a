use super::record::Record;

/// Id for a new record: the current timestamp, bumped past the largest id already taken.
/// `None` once the largest id is `u64::MAX`.
pub fn next_id<R: Record>(records: &[R], now_millis: u64) -> Option<u64> {
    match records.iter().map(|record| record.id()).max() {
        Some(max) if max >= now_millis => max.checked_add(1),
        _ => Some(now_millis),
    }
}

pub fn append<R: Record>(records: &[R], record: R) -> Vec<R> {
    let mut updated = records.to_vec();
    updated.push(record);
    updated
}

/// Replaces the non-id fields of the record with `id`, keeping its position.
/// Returns whether a record matched.
pub fn replace_fields<R: Record>(records: &[R], id: u64, fields: R::Fields) -> (Vec<R>, bool) {
    let mut updated = records.to_vec();
    let matched = match updated.iter_mut().find(|record| record.id() == id) {
        Some(record) => {
            record.set_fields(fields);
            true
        }
        None => false,
    };
    (updated, matched)
}

/// Drops every record with `id`. Returns how many were dropped.
pub fn without<R: Record>(records: &[R], id: u64) -> (Vec<R>, usize) {
    let updated: Vec<R> = records
        .iter()
        .filter(|record| record.id() != id)
        .cloned()
        .collect();
    let removed = records.len() - updated.len();
    (updated, removed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::task::{TaskFields, TaskRecord};

    fn task(id: u64, name: &str) -> TaskRecord {
        TaskRecord::new(id, TaskFields::new(name, format!("{} details", name)))
    }

    #[test]
    fn next_id_uses_clock_when_ahead() {
        let records = vec![task(10, "a"), task(20, "b")];
        assert_eq!(next_id(&records, 1_000), Some(1_000));
        assert_eq!(next_id::<TaskRecord>(&[], 42), Some(42));
    }

    #[test]
    fn next_id_never_collides_with_existing() {
        let records = vec![task(1_000, "a"), task(1_005, "b")];
        assert_eq!(next_id(&records, 1_000), Some(1_006));
        assert_eq!(next_id(&records, 1_005), Some(1_006));
        assert_eq!(next_id(&records, 3), Some(1_006));
    }

    #[test]
    fn next_id_is_none_past_the_largest_id() {
        let records = vec![task(u64::MAX, "last")];
        assert_eq!(next_id(&records, 1_000), None);
        assert_eq!(next_id(&[task(u64::MAX - 1, "a")], 5), Some(u64::MAX));
    }

    #[test]
    fn append_grows_by_one() {
        let records = vec![task(1, "a")];
        let updated = append(&records, task(2, "b"));
        assert_eq!(updated.len(), records.len() + 1);
        assert_eq!(updated.last().unwrap().id, 2);
    }

    #[test]
    fn replace_fields_touches_only_the_match() {
        let records = vec![task(1, "a"), task(2, "b"), task(3, "c")];
        let (updated, matched) = replace_fields(&records, 2, TaskFields::new("X", "new"));

        assert!(matched);
        assert_eq!(updated[0], records[0]);
        assert_eq!(updated[2], records[2]);
        assert_eq!(updated[1].id, 2);
        assert_eq!(updated[1].task, "X");
        assert_eq!(updated[1].description, "new");
    }

    #[test]
    fn replace_fields_without_match_is_a_no_op() {
        let records = vec![task(1, "a")];
        let (updated, matched) = replace_fields(&records, 99, TaskFields::new("X", ""));
        assert!(!matched);
        assert_eq!(updated, records);
    }

    #[test]
    fn without_keeps_relative_order() {
        let records = vec![task(1, "a"), task(2, "b"), task(3, "c"), task(4, "d")];
        let (updated, removed) = without(&records, 2);
        assert_eq!(removed, 1);
        let ids: Vec<u64> = updated.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 3, 4]);
    }

    #[test]
    fn without_twice_equals_once() {
        let records = vec![task(1, "a"), task(2, "b")];
        let (once, _) = without(&records, 1);
        let (twice, removed_again) = without(&once, 1);
        assert_eq!(once, twice);
        assert_eq!(removed_again, 0);
    }
}
