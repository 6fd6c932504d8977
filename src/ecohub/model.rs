use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};

/// Categories a post can be filed under. The editor only offers these;
/// programmatic creation is not validated against the set.
pub const CATEGORIES: [&str; 4] = ["Certificações", "Inovação", "Materiais", "Eventos"];

/// Sentinel category that disables category filtering in listings.
pub const CATEGORY_ALL: &str = "Todos";

pub const DEFAULT_CATEGORY: &str = "Inovação";
pub const DEFAULT_READ_TIME: &str = "5 min";

/// Cover shown whenever a post has no image of its own.
pub const FALLBACK_IMAGE_URL: &str =
    "https://images.unsplash.com/photo-1497366216548-37526070297c?auto=format&fit=crop&w=1200&q=80";

/// A published article. Serialized field names match the persisted JSON
/// layout, which has no version field; absent fields deserialize to their
/// defaults so older data keeps loading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: i64,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub excerpt: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub read_time: String,
}

impl Post {
    /// The cover to render: the post's own image, or the shared fallback.
    pub fn cover_url(&self) -> &str {
        if self.image_url.is_empty() {
            FALLBACK_IMAGE_URL
        } else {
            &self.image_url
        }
    }
}

/// Ids are the creation instant in milliseconds. Unique under the
/// single-writer, low-frequency creation this store sees.
pub fn next_post_id() -> i64 {
    Utc::now().timestamp_millis()
}

const MONTHS_PT: [&str; 12] = [
    "Jan", "Fev", "Mar", "Abr", "Mai", "Jun", "Jul", "Ago", "Set", "Out", "Nov", "Dez",
];

/// Formats a creation instant the way the site displays dates,
/// e.g. "02 Abr, 2024". Assigned once at publication, immutable after.
pub fn display_date(when: DateTime<Utc>) -> String {
    format!(
        "{:02} {}, {}",
        when.day(),
        MONTHS_PT[when.month0() as usize],
        when.year()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn display_date_uses_pt_month_abbreviations() {
        let when = Utc.with_ymd_and_hms(2024, 4, 2, 10, 30, 0).unwrap();
        assert_eq!(display_date(when), "02 Abr, 2024");

        let when = Utc.with_ymd_and_hms(2024, 12, 25, 0, 0, 0).unwrap();
        assert_eq!(display_date(when), "25 Dez, 2024");
    }

    #[test]
    fn default_category_is_recognized_and_the_sentinel_is_not() {
        assert!(CATEGORIES.contains(&DEFAULT_CATEGORY));
        assert!(!CATEGORIES.contains(&CATEGORY_ALL));
    }

    #[test]
    fn cover_falls_back_when_empty() {
        let mut post = Post {
            id: 1,
            date: String::new(),
            category: String::new(),
            title: String::new(),
            excerpt: String::new(),
            content: String::new(),
            image_url: String::new(),
            read_time: String::new(),
        };
        assert_eq!(post.cover_url(), FALLBACK_IMAGE_URL);

        post.image_url = "https://example.com/a.jpg".into();
        assert_eq!(post.cover_url(), "https://example.com/a.jpg");
    }

    #[test]
    fn missing_fields_deserialize_to_defaults() {
        let post: Post = serde_json::from_str(r#"{"id": 7}"#).unwrap();
        assert_eq!(post.id, 7);
        assert!(post.title.is_empty());
        assert!(post.image_url.is_empty());
    }

    #[test]
    fn wire_field_names_are_camel_case() {
        let post = Post {
            id: 3,
            date: "15 Mar, 2024".into(),
            category: "Eventos".into(),
            title: "t".into(),
            excerpt: "e".into(),
            content: "c".into(),
            image_url: "u".into(),
            read_time: "5 min".into(),
        };
        let json = serde_json::to_string(&post).unwrap();
        assert!(json.contains("\"imageUrl\""));
        assert!(json.contains("\"readTime\""));
    }
}
