//! Text rendering of user records
//!
//! The clipboard block has a fixed field order; only the date style is
//! configurable. Birth dates are shown in the viewer's local timezone.

use super::UserRecord;
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, FixedOffset, Local, Utc};

/// US short date, e.g. "4/9/1983"
pub const DEFAULT_DATE_FORMAT: &str = "%-m/%-d/%Y";

/// Long date shown at the bottom of each card, e.g. "April 9, 1983"
pub const LONG_DATE_FORMAT: &str = "%B %-d, %Y";

/// Timezone a timestamp is converted to before its date is taken
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateZone {
    /// The system's local timezone
    #[default]
    Local,
    Fixed(FixedOffset),
}

/// A strftime pattern that is known to format without error, plus the zone
/// dates are rendered in
///
/// chrono's `Display` for a bad pattern fails at format time, which
/// `to_string()` turns into a panic, so patterns are checked up front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateStyle {
    pattern: String,
    zone: DateZone,
}

impl DateStyle {
    /// Validate a strftime pattern; `None` if chrono cannot format it
    pub fn parse(pattern: &str) -> Option<Self> {
        if pattern.is_empty() {
            return None;
        }
        let valid = StrftimeItems::new(pattern).all(|item| !matches!(item, Item::Error));
        valid.then(|| Self {
            pattern: pattern.to_string(),
            zone: DateZone::Local,
        })
    }

    /// Render in a fixed offset instead of the local timezone
    pub fn with_offset(mut self, offset: FixedOffset) -> Self {
        self.zone = DateZone::Fixed(offset);
        self
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn format(&self, date: DateTime<Utc>) -> String {
        self.format_as(date, &self.pattern)
    }

    /// Spelled-out date used on cards
    pub fn format_long(&self, date: DateTime<Utc>) -> String {
        self.format_as(date, LONG_DATE_FORMAT)
    }

    fn format_as(&self, date: DateTime<Utc>, pattern: &str) -> String {
        match self.zone {
            DateZone::Local => date.with_timezone(&Local).format(pattern).to_string(),
            DateZone::Fixed(offset) => date.with_timezone(&offset).format(pattern).to_string(),
        }
    }
}

impl Default for DateStyle {
    fn default() -> Self {
        Self {
            pattern: DEFAULT_DATE_FORMAT.to_string(),
            zone: DateZone::Local,
        }
    }
}

/// Single-line postal address as used in the clipboard block
pub fn location_line(user: &UserRecord) -> String {
    let address = &user.address;
    format!(
        "{} {}, {}, {}, {} - {}",
        address.street.number,
        address.street.name,
        address.city,
        address.state,
        address.country,
        address.postcode
    )
}

/// Birth date in the long card format
pub fn long_birth_date(user: &UserRecord, date_style: &DateStyle) -> String {
    date_style.format_long(user.birth_date())
}

/// Multi-line details block written to the clipboard
///
/// Field order: Name, Email, Gender, Age (with birth date), Phone, Cell,
/// Nationality, Location.
pub fn details_text(user: &UserRecord, date_style: &DateStyle) -> String {
    [
        format!("Name: {}", user.full_name()),
        format!("Email: {}", user.email),
        format!("Gender: {}", user.gender),
        format!(
            "Age: {} (Born: {})",
            user.age(),
            date_style.format(user.birth_date())
        ),
        format!("Phone: {}", user.phone),
        format!("Cell: {}", user.cell),
        format!("Nationality: {}", user.nationality),
        format!("Location: {}", location_line(user)),
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::users::fixtures;

    fn offset_hours(hours: i32) -> DateStyle {
        DateStyle::default().with_offset(FixedOffset::east_opt(hours * 3600).unwrap())
    }

    #[test]
    fn details_block_has_fixed_field_order() {
        let user = &fixtures::users(1)[0];
        let text = details_text(user, &fixtures::utc_dates());

        assert_eq!(
            text,
            "Name: Mr Liam Walker\n\
             Email: liam.walker@example.com\n\
             Gender: male\n\
             Age: 41 (Born: 4/9/1983)\n\
             Phone: 555-0100\n\
             Cell: 555-0200\n\
             Nationality: NZ\n\
             Location: 4512 Queen Street, Auckland, Auckland, New Zealand - 84521"
        );
    }

    #[test]
    fn details_block_uses_configured_date_style() {
        let user = &fixtures::users(1)[0];
        let style = DateStyle::parse("%Y-%m-%d")
            .unwrap()
            .with_offset(FixedOffset::east_opt(0).unwrap());

        let text = details_text(user, &style);
        assert!(text.contains("Age: 41 (Born: 1983-04-09)"));
    }

    #[test]
    fn long_birth_date_spells_month() {
        let user = &fixtures::users(2)[1];
        assert_eq!(
            long_birth_date(user, &fixtures::utc_dates()),
            "November 2, 1990"
        );
    }

    #[test]
    fn birth_date_follows_viewer_timezone() {
        // Born 1990-11-02T03:05:44Z, which is still November 1st at UTC-7
        let user = &fixtures::users(2)[1];
        let pacific = offset_hours(-7);

        assert_eq!(long_birth_date(user, &pacific), "November 1, 1990");
        let text = details_text(user, &pacific);
        assert!(text.contains("(Born: 11/1/1990)"), "{}", text);

        // Born 1983-04-09T14:22:31Z, which is already April 10th at UTC+10
        let user = &fixtures::users(1)[0];
        assert_eq!(offset_hours(10).format(user.birth_date()), "4/10/1983");
        assert_eq!(offset_hours(9).format(user.birth_date()), "4/9/1983");
    }

    #[test]
    fn parsed_styles_render_in_local_time() {
        let style = DateStyle::parse("%Y").unwrap();
        assert_eq!(style, DateStyle::parse("%Y").unwrap());
        assert_ne!(style, style.clone().with_offset(FixedOffset::east_opt(0).unwrap()));
    }

    #[test]
    fn date_style_rejects_bad_patterns() {
        assert!(DateStyle::parse("%-m/%-d/%Y").is_some());
        assert!(DateStyle::parse("%d.%m.%Y").is_some());
        assert!(DateStyle::parse("").is_none());
        assert!(DateStyle::parse("%Q").is_none());
        assert!(DateStyle::parse("%").is_none());
    }

    #[test]
    fn text_postcode_in_location_line() {
        let user = &fixtures::users(3)[2];
        assert_eq!(
            location_line(user),
            "4514 Rue Principale, Kingston, Ontario, Canada - K7L 3N6"
        );
    }
}
