use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Anything with an optional expiry timestamp. Listings without one never
/// expire.
pub trait Expires {
    fn expiry_date(&self) -> Option<DateTime<Utc>>;
}

/// Measurement unit a listing is priced in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListingUnit {
    Liter,
    Ton,
    Kilogram,
    Piece,
    Hour,
}

impl ListingUnit {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Liter => "л",
            Self::Ton => "т",
            Self::Kilogram => "кг",
            Self::Piece => "шт",
            Self::Hour => "ч",
        }
    }
}

/// A sell-side listing as delivered by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Offer {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub category: String,
    #[serde(default)]
    pub transport_service_type: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price_per_unit: Option<f64>,
    #[serde(default)]
    pub quantity: Option<f64>,
    #[serde(default)]
    pub unit: Option<ListingUnit>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default, deserialize_with = "lenient_datetime")]
    pub expiry_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// A buy-side request. Shares the listing lifecycle with [`Offer`] but is
/// authored by a buyer looking for a supplier.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Request {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub category: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub budget: Option<f64>,
    #[serde(default)]
    pub quantity: Option<f64>,
    #[serde(default)]
    pub unit: Option<ListingUnit>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default, deserialize_with = "lenient_datetime")]
    pub expiry_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl Expires for Offer {
    fn expiry_date(&self) -> Option<DateTime<Utc>> {
        self.expiry_date
    }
}

impl Expires for Request {
    fn expiry_date(&self) -> Option<DateTime<Utc>> {
        self.expiry_date
    }
}

/// The backend stores expiry dates as free-form strings. Anything that does
/// not parse is treated as "no expiry" rather than failing the whole record.
pub(crate) fn lenient_datetime<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(parse_datetime))
}

fn parse_datetime(raw: &str) -> Option<DateTime<Utc>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(parsed.with_timezone(&Utc));
    }

    // Date-only values expire at local midnight UTC.
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn offer_json(expiry: &str) -> String {
        format!(
            r#"{{
                "id": "offer-1",
                "userId": "user-9",
                "title": "Дизельное топливо",
                "category": "fuel",
                "pricePerUnit": 62.5,
                "quantity": 2000.0,
                "unit": "liter",
                "expiryDate": {expiry},
                "createdAt": "2026-08-01T08:00:00Z"
            }}"#
        )
    }

    #[test]
    fn parses_rfc3339_expiry() {
        let offer: Offer =
            serde_json::from_str(&offer_json("\"2026-09-01T12:00:00Z\"")).expect("offer parses");
        assert_eq!(
            offer.expiry_date,
            Some(Utc.with_ymd_and_hms(2026, 9, 1, 12, 0, 0).unwrap())
        );
    }

    #[test]
    fn parses_date_only_expiry_as_midnight() {
        let offer: Offer =
            serde_json::from_str(&offer_json("\"2026-09-01\"")).expect("offer parses");
        assert_eq!(
            offer.expiry_date,
            Some(Utc.with_ymd_and_hms(2026, 9, 1, 0, 0, 0).unwrap())
        );
    }

    #[test]
    fn unparsable_expiry_becomes_none() {
        let offer: Offer =
            serde_json::from_str(&offer_json("\"next tuesday\"")).expect("offer parses");
        assert!(offer.expiry_date.is_none());
    }

    #[test]
    fn missing_and_null_expiry_become_none() {
        let offer: Offer = serde_json::from_str(&offer_json("null")).expect("offer parses");
        assert!(offer.expiry_date.is_none());

        let json = offer_json("null").replace("\"expiryDate\": null,", "");
        let offer: Offer = serde_json::from_str(&json).expect("offer parses without field");
        assert!(offer.expiry_date.is_none());
    }
}
