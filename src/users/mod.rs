// Users module - domain types for generated user profiles
//
// - models: RequestCount bounds and the UserRecord schema decoded from the API
// - format: the fixed-format details block copied to the clipboard

pub mod format;
pub mod models;

pub use format::{details_text, DateStyle};
pub use models::{CountError, RequestCount, UserRecord, MAX_COUNT, MIN_COUNT};

/// Canned API payloads shared by tests across modules
#[cfg(test)]
pub(crate) mod fixtures {
    use super::{DateStyle, RequestCount, UserRecord};
    use chrono::FixedOffset;
    use serde_json::{json, Value};

    /// Default date style pinned to UTC so rendered dates don't depend on
    /// the machine's timezone
    pub fn utc_dates() -> DateStyle {
        DateStyle::default().with_offset(FixedOffset::east_opt(0).unwrap())
    }

    struct Template {
        title: &'static str,
        first: &'static str,
        last: &'static str,
        gender: &'static str,
        nat: &'static str,
        street: &'static str,
        city: &'static str,
        state: &'static str,
        country: &'static str,
        dob: &'static str,
        age: u32,
    }

    const TEMPLATES: [Template; 4] = [
        Template {
            title: "Mr",
            first: "Liam",
            last: "Walker",
            gender: "male",
            nat: "NZ",
            street: "Queen Street",
            city: "Auckland",
            state: "Auckland",
            country: "New Zealand",
            dob: "1983-04-09T14:22:31.118Z",
            age: 41,
        },
        Template {
            title: "Ms",
            first: "Sofia",
            last: "Lehmann",
            gender: "female",
            nat: "DE",
            street: "Lindenstrasse",
            city: "Bremen",
            state: "Bremen",
            country: "Germany",
            dob: "1990-11-02T03:05:44.902Z",
            age: 34,
        },
        Template {
            title: "Mrs",
            first: "Ava",
            last: "Tremblay",
            gender: "female",
            nat: "CA",
            street: "Rue Principale",
            city: "Kingston",
            state: "Ontario",
            country: "Canada",
            dob: "1968-02-27T08:11:09.450Z",
            age: 56,
        },
        Template {
            title: "Mr",
            first: "Mateo",
            last: "Garcia",
            gender: "male",
            nat: "ES",
            street: "Calle Mayor",
            city: "Valencia",
            state: "Comunidad Valenciana",
            country: "Spain",
            dob: "1975-07-19T19:40:12.337Z",
            age: 49,
        },
    ];

    /// One user object exactly as the API nests it
    pub fn user_json(index: usize) -> Value {
        let t = &TEMPLATES[index % TEMPLATES.len()];
        let postcode = if t.nat == "CA" {
            json!("K7L 3N6")
        } else {
            json!(84521 + index as u64)
        };
        let folder = if t.gender == "male" { "men" } else { "women" };

        json!({
            "gender": t.gender,
            "name": { "title": t.title, "first": t.first, "last": t.last },
            "location": {
                "street": { "number": 4512 + index as u32, "name": t.street },
                "city": t.city,
                "state": t.state,
                "country": t.country,
                "postcode": postcode,
                "coordinates": { "latitude": "-36.8485", "longitude": "174.7633" },
                "timezone": { "offset": "+12:00", "description": "Auckland" }
            },
            "email": format!("{}.{}@example.com", t.first.to_lowercase(), t.last.to_lowercase()),
            "login": { "uuid": format!("00000000-0000-0000-0000-{:012}", index) },
            "dob": { "date": t.dob, "age": t.age },
            "registered": { "date": "2015-06-01T10:00:00.000Z", "age": 9 },
            "phone": format!("555-01{:02}", index),
            "cell": format!("555-02{:02}", index),
            "id": { "name": "", "value": null },
            "picture": {
                "large": format!("https://randomuser.me/api/portraits/{}/{}.jpg", folder, index),
                "medium": format!("https://randomuser.me/api/portraits/med/{}/{}.jpg", folder, index),
                "thumbnail": format!("https://randomuser.me/api/portraits/thumb/{}/{}.jpg", folder, index)
            },
            "nat": t.nat
        })
    }

    /// Full response envelope carrying `count` users
    pub fn response_json(count: usize) -> Value {
        let users: Vec<Value> = (0..count).map(user_json).collect();
        json!({
            "statusCode": 200,
            "data": {
                "page": 1,
                "limit": count,
                "totalPages": 1,
                "previousPage": false,
                "nextPage": false,
                "totalItems": count,
                "currentPageItems": count,
                "data": users
            },
            "message": "Random users fetched successfully",
            "success": true
        })
    }

    pub fn users(count: usize) -> Vec<UserRecord> {
        (0..count)
            .map(|i| serde_json::from_value(user_json(i)).expect("fixture decodes"))
            .collect()
    }

    pub fn count(value: u16) -> RequestCount {
        RequestCount::new(value).expect("fixture count in range")
    }
}
