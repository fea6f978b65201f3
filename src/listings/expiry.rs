use super::domain::Expires;
use chrono::{DateTime, Utc};
use serde::Serialize;

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Derived expiry view for countdown badges and listing cards.
///
/// `is_expired` and `days_remaining` are computed independently from the same
/// delta: a listing expiring later today shows `days_remaining == 0` while
/// still active, and one that lapsed earlier today shows `true` with the same
/// zero. Consumers render the two fields separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpirationStatus {
    pub is_expired: bool,
    pub days_remaining: Option<i64>,
    pub expiry_date: Option<DateTime<Utc>>,
}

/// True iff the listing carries an expiry date strictly earlier than `now`.
pub fn is_expired_at<T: Expires>(item: &T, now: DateTime<Utc>) -> bool {
    match item.expiry_date() {
        Some(expiry) => expiry < now,
        None => false,
    }
}

pub fn is_expired<T: Expires>(item: &T) -> bool {
    is_expired_at(item, Utc::now())
}

/// Order-preserving filter dropping exactly the expired listings.
pub fn filter_active_at<T: Expires>(items: Vec<T>, now: DateTime<Utc>) -> Vec<T> {
    let mut items = items;
    items.retain(|item| !is_expired_at(item, now));
    items
}

pub fn filter_active<T: Expires>(items: Vec<T>) -> Vec<T> {
    filter_active_at(items, Utc::now())
}

pub fn expiration_status_at<T: Expires>(item: &T, now: DateTime<Utc>) -> ExpirationStatus {
    let Some(expiry) = item.expiry_date() else {
        return ExpirationStatus {
            is_expired: false,
            days_remaining: None,
            expiry_date: None,
        };
    };

    let delta_millis = expiry.signed_duration_since(now).num_milliseconds();
    let days_remaining = delta_millis.div_euclid(MILLIS_PER_DAY)
        + i64::from(delta_millis.rem_euclid(MILLIS_PER_DAY) > 0);

    ExpirationStatus {
        is_expired: delta_millis < 0,
        days_remaining: Some(days_remaining.max(0)),
        expiry_date: Some(expiry),
    }
}

pub fn expiration_status<T: Expires>(item: &T) -> ExpirationStatus {
    expiration_status_at(item, Utc::now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    struct Stub(Option<DateTime<Utc>>);

    impl Expires for Stub {
        fn expiry_date(&self) -> Option<DateTime<Utc>> {
            self.0
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, 27, 12, 0, 0).unwrap()
    }

    #[test]
    fn listing_without_expiry_never_expires() {
        let stub = Stub(None);
        assert!(!is_expired_at(&stub, now()));

        let status = expiration_status_at(&stub, now());
        assert!(!status.is_expired);
        assert_eq!(status.days_remaining, None);
        assert_eq!(status.expiry_date, None);
    }

    #[test]
    fn past_expiry_is_expired() {
        let stub = Stub(Some(now() - Duration::days(3)));
        assert!(is_expired_at(&stub, now()));
    }

    #[test]
    fn expiry_equal_to_now_is_not_yet_expired() {
        let stub = Stub(Some(now()));
        assert!(!is_expired_at(&stub, now()));
        assert_eq!(
            expiration_status_at(&stub, now()).days_remaining,
            Some(0)
        );
    }

    #[test]
    fn thirty_six_hours_out_rounds_up_to_two_days() {
        let stub = Stub(Some(now() + Duration::hours(36)));
        let status = expiration_status_at(&stub, now());
        assert!(!status.is_expired);
        assert_eq!(status.days_remaining, Some(2));
    }

    #[test]
    fn exact_whole_days_do_not_round_up() {
        let stub = Stub(Some(now() + Duration::days(2)));
        assert_eq!(
            expiration_status_at(&stub, now()).days_remaining,
            Some(2)
        );
    }

    #[test]
    fn lapsed_earlier_today_reports_expired_with_zero_days() {
        let stub = Stub(Some(now() - Duration::hours(3)));
        let status = expiration_status_at(&stub, now());
        assert!(status.is_expired);
        assert_eq!(status.days_remaining, Some(0));
    }

    #[test]
    fn expiring_later_today_is_active_with_zero_days() {
        let stub = Stub(Some(now() + Duration::minutes(30)));
        let status = expiration_status_at(&stub, now());
        assert!(!status.is_expired);
        // ceiling of a positive partial day
        assert_eq!(status.days_remaining, Some(1));
    }

    #[test]
    fn filter_drops_exactly_the_expired_and_keeps_order() {
        let items = vec![
            Stub(Some(now() + Duration::days(1))),
            Stub(Some(now() - Duration::days(1))),
            Stub(None),
            Stub(Some(now() - Duration::hours(1))),
            Stub(Some(now() + Duration::hours(1))),
        ];
        let expired = items
            .iter()
            .filter(|item| is_expired_at(*item, now()))
            .count();
        let total = items.len();

        let active = filter_active_at(items, now());
        assert_eq!(active.len() + expired, total);
        assert_eq!(active.len(), 3);
        assert_eq!(active[0].0, Some(now() + Duration::days(1)));
        assert_eq!(active[1].0, None);
        assert_eq!(active[2].0, Some(now() + Duration::hours(1)));
    }
}
