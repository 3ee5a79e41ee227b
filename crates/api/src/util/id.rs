use core::sync::atomic::{AtomicI64, Ordering};
use model::Timestamp;

/// Issues record IDs from the wall clock in milliseconds. IDs only ever grow, so
/// two records created within the same millisecond still differ.
#[derive(Default)]
pub struct Ids(AtomicI64);

impl Ids {
    pub fn next(&self, now: Timestamp) -> String {
        let millis = now.timestamp_millis();
        let issue = |last: i64| millis.max(last + 1);
        let last = match self.0.fetch_update(Ordering::AcqRel, Ordering::Acquire, |last| Some(issue(last))) {
            Ok(last) | Err(last) => last,
        };
        issue(last).to_string()
    }
}
