//! Listing feed conversions.
//!
//! Every `CarListing` field exists on both sides, so the conversions are
//! total: `listing_from_rpc(listing_to_rpc(x)) == x` for any listing whose
//! `posted_at` lies inside the protobuf timestamp range.

use chrono::{DateTime, Utc};
use prost_types::Timestamp;

use crate::domain::feed as wire;
use crate::rpc::feed as rpc;

/// Page number used when the caller omits it or sends a value below 1.
pub const DEFAULT_PAGE_NUMBER: i32 = 1;
/// Page size used when the caller omits it or sends a value below 1.
pub const DEFAULT_PAGE_SIZE: i32 = 10;

pub fn listing_to_rpc(listing: wire::CarListing) -> rpc::CarListing {
    rpc::CarListing {
        listing_id: listing.listing_id,
        seller_id: listing.seller_id,
        description: listing.description,
        posted_at: listing.posted_at.map(timestamp_from_datetime),
        status: listing.status,
        deal_type: listing.deal_type,
        price: listing.price,
        tags: listing.tags,
        car_id: listing.car_id,
        mileage: listing.mileage,
        owners_count: listing.owners_count,
        accidents_count: listing.accidents_count,
        condition: listing.condition,
        color: listing.color,
        config_id: listing.config_id,
        engine_type: listing.engine_type,
        engine_volume: listing.engine_volume,
        engine_power: listing.engine_power,
        cylinders: listing.cylinders,
        transmission: listing.transmission,
        drivetrain: listing.drivetrain,
        model_id: listing.model_id,
        model_name: listing.model_name,
        make: listing.make,
        year: listing.year,
        body_type: listing.body_type,
        generation: listing.generation,
        weight_kg: listing.weight_kg,
        seller_name: listing.seller_name,
        seller_rating: listing.seller_rating,
        seller_sales_count: listing.seller_sales_count,
        seller_is_business: listing.seller_is_business,
    }
}

pub fn listing_from_rpc(message: rpc::CarListing) -> wire::CarListing {
    wire::CarListing {
        listing_id: message.listing_id,
        seller_id: message.seller_id,
        description: message.description,
        posted_at: message.posted_at.as_ref().and_then(datetime_from_timestamp),
        status: message.status,
        deal_type: message.deal_type,
        price: message.price,
        tags: message.tags,
        car_id: message.car_id,
        mileage: message.mileage,
        owners_count: message.owners_count,
        accidents_count: message.accidents_count,
        condition: message.condition,
        color: message.color,
        config_id: message.config_id,
        engine_type: message.engine_type,
        engine_volume: message.engine_volume,
        engine_power: message.engine_power,
        cylinders: message.cylinders,
        transmission: message.transmission,
        drivetrain: message.drivetrain,
        model_id: message.model_id,
        model_name: message.model_name,
        make: message.make,
        year: message.year,
        body_type: message.body_type,
        generation: message.generation,
        weight_kg: message.weight_kg,
        seller_name: message.seller_name,
        seller_rating: message.seller_rating,
        seller_sales_count: message.seller_sales_count,
        seller_is_business: message.seller_is_business,
    }
}

/// An absent listing in a response renders as an empty record.
pub fn optional_listing_from_rpc(message: Option<rpc::CarListing>) -> wire::CarListing {
    message.map(listing_from_rpc).unwrap_or_default()
}

pub fn timestamp_from_datetime(at: DateTime<Utc>) -> Timestamp {
    Timestamp {
        seconds: at.timestamp(),
        nanos: at.timestamp_subsec_nanos() as i32,
    }
}

/// Returns `None` for timestamps chrono cannot represent.
pub fn datetime_from_timestamp(ts: &Timestamp) -> Option<DateTime<Utc>> {
    let nanos = u32::try_from(ts.nanos).ok()?;
    DateTime::from_timestamp(ts.seconds, nanos)
}

pub fn page_metadata_from_rpc(
    metadata: Option<rpc::PageResponseMetadata>,
) -> wire::PageResponseMetadata {
    let metadata = metadata.unwrap_or_default();
    wire::PageResponseMetadata {
        total_items: metadata.total_items,
        total_pages: metadata.total_pages,
        current_page: metadata.current_page,
    }
}

pub fn listing_page_from_rpc(
    listings: Vec<rpc::CarListing>,
    metadata: Option<rpc::PageResponseMetadata>,
) -> wire::ListingPage {
    wire::ListingPage {
        listings: listings.into_iter().map(listing_from_rpc).collect(),
        page_metadata: page_metadata_from_rpc(metadata),
    }
}

/// Resolve raw `page_number` / `page_size` query values.
///
/// Missing, non-numeric and non-positive values fall back to the defaults.
/// No upper bound is applied here.
pub fn page_request(page_number: Option<&str>, page_size: Option<&str>) -> rpc::PageRequest {
    rpc::PageRequest {
        page_number: positive_or(page_number, DEFAULT_PAGE_NUMBER),
        page_size: positive_or(page_size, DEFAULT_PAGE_SIZE),
    }
}

fn positive_or(raw: Option<&str>, default: i32) -> i32 {
    raw.and_then(|v| v.trim().parse::<i32>().ok())
        .filter(|v| *v >= 1)
        .unwrap_or(default)
}

/// Resolve a raw `sort_by` value, case-insensitively.
///
/// Anything unrecognized maps to `SORT_UNSPECIFIED`.
pub fn sort_by(raw: Option<&str>) -> rpc::SortBy {
    raw.and_then(|v| rpc::SortBy::from_str_name(&v.trim().to_ascii_uppercase()))
        .unwrap_or(rpc::SortBy::SortUnspecified)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_listing() -> wire::CarListing {
        wire::CarListing {
            listing_id: "lst-42".into(),
            seller_id: "seller-7".into(),
            description: "One owner, garage kept".into(),
            posted_at: Some(Utc.with_ymd_and_hms(2024, 5, 17, 8, 30, 15).unwrap()
                + chrono::Duration::nanoseconds(123_456_789)),
            status: "ACTIVE".into(),
            deal_type: "SALE".into(),
            price: 18_450.5,
            tags: vec!["low-mileage".into(), "warranty".into()],
            car_id: "car-1".into(),
            mileage: 42_000,
            owners_count: 1,
            accidents_count: 2,
            condition: "USED".into(),
            color: "graphite".into(),
            config_id: "cfg-3".into(),
            engine_type: "PETROL".into(),
            engine_volume: "2.0".into(),
            engine_power: 184,
            cylinders: 4,
            transmission: "AUTOMATIC".into(),
            drivetrain: "AWD".into(),
            model_id: "mdl-9".into(),
            model_name: "Outback".into(),
            make: "Subaru".into(),
            year: 2019,
            body_type: "WAGON".into(),
            generation: "BT".into(),
            weight_kg: 1_620.25,
            seller_name: "Dealer Co".into(),
            seller_rating: 4.8,
            seller_sales_count: 311,
            seller_is_business: true,
        }
    }

    #[test]
    fn test_listing_round_trip_keeps_every_field() {
        let listing = sample_listing();
        let restored = listing_from_rpc(listing_to_rpc(listing.clone()));
        assert_eq!(restored, listing);
    }

    #[test]
    fn test_listing_to_rpc_fields() {
        let message = listing_to_rpc(sample_listing());

        assert_eq!(message.listing_id, "lst-42");
        assert_eq!(message.seller_id, "seller-7");
        assert_eq!(message.description, "One owner, garage kept");
        assert_eq!(
            message.posted_at,
            Some(Timestamp { seconds: 1_715_934_615, nanos: 123_456_789 })
        );
        assert_eq!(message.status, "ACTIVE");
        assert_eq!(message.deal_type, "SALE");
        assert_eq!(message.price, 18_450.5);
        assert_eq!(message.tags, vec!["low-mileage", "warranty"]);
        assert_eq!(message.car_id, "car-1");
        assert_eq!(message.mileage, 42_000);
        assert_eq!(message.owners_count, 1);
        assert_eq!(message.accidents_count, 2);
        assert_eq!(message.condition, "USED");
        assert_eq!(message.color, "graphite");
        assert_eq!(message.config_id, "cfg-3");
        assert_eq!(message.engine_type, "PETROL");
        assert_eq!(message.engine_volume, "2.0");
        assert_eq!(message.engine_power, 184);
        assert_eq!(message.cylinders, 4);
        assert_eq!(message.transmission, "AUTOMATIC");
        assert_eq!(message.drivetrain, "AWD");
        assert_eq!(message.model_id, "mdl-9");
        assert_eq!(message.model_name, "Outback");
        assert_eq!(message.make, "Subaru");
        assert_eq!(message.year, 2019);
        assert_eq!(message.body_type, "WAGON");
        assert_eq!(message.generation, "BT");
        assert_eq!(message.weight_kg, 1_620.25);
        assert_eq!(message.seller_name, "Dealer Co");
        assert_eq!(message.seller_rating, 4.8);
        assert_eq!(message.seller_sales_count, 311);
        assert!(message.seller_is_business);
    }

    #[test]
    fn test_absent_collections_and_timestamps() {
        let wire: wire::CarListing = serde_json::from_str(r#"{"make":"Lada"}"#).unwrap();
        assert!(wire.tags.is_empty());
        assert!(wire.posted_at.is_none());

        let message = listing_to_rpc(wire);
        assert!(message.tags.is_empty());
        assert!(message.posted_at.is_none());

        let json = serde_json::to_value(listing_from_rpc(message)).unwrap();
        assert_eq!(json["tags"], serde_json::json!([]));
        assert_eq!(json["make"], "Lada");
    }

    #[test]
    fn test_out_of_range_timestamp_is_dropped() {
        let ts = Timestamp { seconds: i64::MAX, nanos: 0 };
        assert!(datetime_from_timestamp(&ts).is_none());

        let ts = Timestamp { seconds: 0, nanos: -1 };
        assert!(datetime_from_timestamp(&ts).is_none());
    }

    #[test]
    fn test_missing_page_metadata_defaults_to_zero() {
        let page = listing_page_from_rpc(vec![rpc::CarListing::default()], None);
        assert_eq!(page.listings.len(), 1);
        assert_eq!(page.page_metadata, wire::PageResponseMetadata::default());

        let page = listing_page_from_rpc(
            Vec::new(),
            Some(rpc::PageResponseMetadata { total_items: 31, total_pages: 4, current_page: 2 }),
        );
        assert_eq!(page.page_metadata.total_items, 31);
        assert_eq!(page.page_metadata.total_pages, 4);
        assert_eq!(page.page_metadata.current_page, 2);
    }

    #[test]
    fn test_page_request_defaults() {
        for (number, size) in [
            (None, None),
            (Some("0"), Some("0")),
            (Some("-3"), Some("-5")),
            (Some("abc"), Some("")),
        ] {
            let page = page_request(number, size);
            assert_eq!(page.page_number, 1, "page_number for {:?}", number);
            assert_eq!(page.page_size, 10, "page_size for {:?}", size);
        }
    }

    #[test]
    fn test_page_request_passes_positive_values() {
        let page = page_request(Some("3"), Some("250"));
        assert_eq!(page.page_number, 3);
        assert_eq!(page.page_size, 250);

        let page = page_request(Some("1"), Some("1"));
        assert_eq!(page.page_number, 1);
        assert_eq!(page.page_size, 1);
    }

    #[test]
    fn test_sort_by_parsing() {
        assert_eq!(sort_by(Some("price_asc")), rpc::SortBy::PriceAsc);
        assert_eq!(sort_by(Some("Date_Desc")), rpc::SortBy::DateDesc);
        assert_eq!(sort_by(Some("YEAR_ASC")), rpc::SortBy::YearAsc);
        assert_eq!(sort_by(Some("")), rpc::SortBy::SortUnspecified);
        assert_eq!(sort_by(Some("cheapest")), rpc::SortBy::SortUnspecified);
        assert_eq!(sort_by(None), rpc::SortBy::SortUnspecified);
    }
}
