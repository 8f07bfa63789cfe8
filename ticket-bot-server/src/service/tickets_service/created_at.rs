use time::{macros::format_description, OffsetDateTime, UtcOffset};

///
/// Formats ticket creation time as `YYYY-MM-DDTHH:MM:SSZ` in UTC.
/// Width is fixed, so text order matches chronological order.
///
pub fn format_created_at(created_at: OffsetDateTime) -> Result<String, time::error::Format> {
    created_at
        .to_offset(UtcOffset::UTC)
        .format(format_description!(
            "[year]-[month]-[day]T[hour]:[minute]:[second]Z"
        ))
}

#[cfg(test)]
mod test {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn formatted_utc() {
        let created = format_created_at(datetime!(2024-01-02 03:04:05.678 UTC)).unwrap();

        assert_eq!(created, "2024-01-02T03:04:05Z");
    }

    #[test]
    fn offset_converted_to_utc() {
        let created = format_created_at(datetime!(2024-01-02 05:04:05 +2)).unwrap();

        assert_eq!(created, "2024-01-02T03:04:05Z");
    }

    #[test]
    fn sortable_as_text() {
        let earlier = format_created_at(datetime!(2024-09-30 23:59:59 UTC)).unwrap();
        let later = format_created_at(datetime!(2024-10-01 00:00:00 UTC)).unwrap();

        assert!(earlier < later);
        assert_eq!(earlier.len(), later.len());
    }
}
