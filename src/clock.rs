use chrono::{Local, NaiveDateTime};

/// Source of the wall-clock time reported to callers.
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}

/// Host local time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {

    fn now(&self) -> NaiveDateTime {

        Local::now().naive_local()

    }

}

/// Always reports the same instant. Used to pin timestamps in tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {

    fn now(&self) -> NaiveDateTime {

        self.0

    }

}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn system_clock_does_not_go_backwards() {

        let first = SystemClock.now();
        let second = SystemClock.now();

        assert!(second >= first);

    }

    #[test]
    fn fixed_clock_repeats_its_instant() {

        let instant = NaiveDate::from_ymd_opt(2023, 9, 15)
            .and_then(|d| d.and_hms_opt(12, 0, 0))
            .unwrap();
        let clock = FixedClock(instant);

        assert_eq!(clock.now(), instant);
        assert_eq!(clock.now(), clock.now());

    }
}
