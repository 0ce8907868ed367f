use time::format_description::well_known::Rfc3339;

/// Render a backend RFC 3339 timestamp for display. Unparseable input is
/// shown as-is rather than dropped.
pub fn format_timestamp(raw: &str) -> String {
    match time::OffsetDateTime::parse(raw, &Rfc3339) {
        Ok(dt) => format!(
            "{:04}-{:02}-{:02} {:02}:{:02}:{:02} UTC",
            dt.year(),
            u8::from(dt.month()),
            dt.day(),
            dt.hour(),
            dt.minute(),
            dt.second()
        ),
        Err(_) => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_rfc3339() {
        assert_eq!(
            format_timestamp("2024-05-01T12:30:05Z"),
            "2024-05-01 12:30:05 UTC"
        );
    }

    #[test]
    fn passes_junk_through() {
        assert_eq!(format_timestamp("yesterday"), "yesterday");
        assert_eq!(format_timestamp(""), "");
    }
}
