//! `feed_v1.FeedService` contract.

/// Method paths.
pub mod method {
    pub const LIST_LISTINGS: &str = "/feed_v1.FeedService/ListListings";
    pub const SEARCH_LISTINGS: &str = "/feed_v1.FeedService/SearchListings";
    pub const GET_LISTING: &str = "/feed_v1.FeedService/GetListing";
    pub const CREATE_LISTING: &str = "/feed_v1.FeedService/CreateListing";
    pub const UPDATE_LISTING: &str = "/feed_v1.FeedService/UpdateListing";
    pub const DELETE_LISTING: &str = "/feed_v1.FeedService/DeleteListing";
    pub const ADD_TO_FAVORITES: &str = "/feed_v1.FeedService/AddToFavorites";
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum SortBy {
    SortUnspecified = 0,
    PriceAsc = 1,
    PriceDesc = 2,
    DateAsc = 3,
    DateDesc = 4,
    MileageAsc = 5,
    MileageDesc = 6,
    YearAsc = 7,
    YearDesc = 8,
}

impl SortBy {
    /// String value of the enum field names used in the ProtoBuf definition.
    pub fn as_str_name(&self) -> &'static str {
        match self {
            Self::SortUnspecified => "SORT_UNSPECIFIED",
            Self::PriceAsc => "PRICE_ASC",
            Self::PriceDesc => "PRICE_DESC",
            Self::DateAsc => "DATE_ASC",
            Self::DateDesc => "DATE_DESC",
            Self::MileageAsc => "MILEAGE_ASC",
            Self::MileageDesc => "MILEAGE_DESC",
            Self::YearAsc => "YEAR_ASC",
            Self::YearDesc => "YEAR_DESC",
        }
    }

    /// Creates an enum from field names used in the ProtoBuf definition.
    pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
        match value {
            "SORT_UNSPECIFIED" => Some(Self::SortUnspecified),
            "PRICE_ASC" => Some(Self::PriceAsc),
            "PRICE_DESC" => Some(Self::PriceDesc),
            "DATE_ASC" => Some(Self::DateAsc),
            "DATE_DESC" => Some(Self::DateDesc),
            "MILEAGE_ASC" => Some(Self::MileageAsc),
            "MILEAGE_DESC" => Some(Self::MileageDesc),
            "YEAR_ASC" => Some(Self::YearAsc),
            "YEAR_DESC" => Some(Self::YearDesc),
            _ => None,
        }
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CarListing {
    #[prost(string, tag = "1")]
    pub listing_id: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub seller_id: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub description: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "4")]
    pub posted_at: ::core::option::Option<::prost_types::Timestamp>,
    #[prost(string, tag = "5")]
    pub status: ::prost::alloc::string::String,
    #[prost(string, tag = "6")]
    pub deal_type: ::prost::alloc::string::String,
    #[prost(double, tag = "7")]
    pub price: f64,
    #[prost(string, repeated, tag = "8")]
    pub tags: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    #[prost(string, tag = "9")]
    pub car_id: ::prost::alloc::string::String,
    #[prost(int32, tag = "10")]
    pub mileage: i32,
    #[prost(int32, tag = "11")]
    pub owners_count: i32,
    #[prost(int32, tag = "12")]
    pub accidents_count: i32,
    #[prost(string, tag = "13")]
    pub condition: ::prost::alloc::string::String,
    #[prost(string, tag = "14")]
    pub color: ::prost::alloc::string::String,
    #[prost(string, tag = "15")]
    pub config_id: ::prost::alloc::string::String,
    #[prost(string, tag = "16")]
    pub engine_type: ::prost::alloc::string::String,
    #[prost(string, tag = "17")]
    pub engine_volume: ::prost::alloc::string::String,
    #[prost(int32, tag = "18")]
    pub engine_power: i32,
    #[prost(int32, tag = "19")]
    pub cylinders: i32,
    #[prost(string, tag = "20")]
    pub transmission: ::prost::alloc::string::String,
    #[prost(string, tag = "21")]
    pub drivetrain: ::prost::alloc::string::String,
    #[prost(string, tag = "22")]
    pub model_id: ::prost::alloc::string::String,
    #[prost(string, tag = "23")]
    pub model_name: ::prost::alloc::string::String,
    #[prost(string, tag = "24")]
    pub make: ::prost::alloc::string::String,
    #[prost(int32, tag = "25")]
    pub year: i32,
    #[prost(string, tag = "26")]
    pub body_type: ::prost::alloc::string::String,
    #[prost(string, tag = "27")]
    pub generation: ::prost::alloc::string::String,
    #[prost(double, tag = "28")]
    pub weight_kg: f64,
    #[prost(string, tag = "29")]
    pub seller_name: ::prost::alloc::string::String,
    #[prost(double, tag = "30")]
    pub seller_rating: f64,
    #[prost(int32, tag = "31")]
    pub seller_sales_count: i32,
    #[prost(bool, tag = "32")]
    pub seller_is_business: bool,
}

#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct PageRequest {
    #[prost(int32, tag = "1")]
    pub page_number: i32,
    #[prost(int32, tag = "2")]
    pub page_size: i32,
}

#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct PageResponseMetadata {
    #[prost(int32, tag = "1")]
    pub total_items: i32,
    #[prost(int32, tag = "2")]
    pub total_pages: i32,
    #[prost(int32, tag = "3")]
    pub current_page: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListListingsRequest {
    #[prost(message, optional, tag = "1")]
    pub page: ::core::option::Option<PageRequest>,
    #[prost(enumeration = "SortBy", tag = "2")]
    pub sort_by: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListListingsResponse {
    #[prost(message, repeated, tag = "1")]
    pub listings: ::prost::alloc::vec::Vec<CarListing>,
    #[prost(message, optional, tag = "2")]
    pub page_metadata: ::core::option::Option<PageResponseMetadata>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SearchListingsRequest {
    #[prost(string, tag = "1")]
    pub query: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "2")]
    pub page: ::core::option::Option<PageRequest>,
    #[prost(enumeration = "SortBy", tag = "3")]
    pub sort_by: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SearchListingsResponse {
    #[prost(message, repeated, tag = "1")]
    pub listings: ::prost::alloc::vec::Vec<CarListing>,
    #[prost(message, optional, tag = "2")]
    pub page_metadata: ::core::option::Option<PageResponseMetadata>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetListingRequest {
    #[prost(string, tag = "1")]
    pub listing_id: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetListingResponse {
    #[prost(message, optional, tag = "1")]
    pub listing: ::core::option::Option<CarListing>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreateListingRequest {
    #[prost(message, optional, tag = "1")]
    pub listing: ::core::option::Option<CarListing>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreateListingResponse {
    #[prost(message, optional, tag = "1")]
    pub listing: ::core::option::Option<CarListing>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct UpdateListingRequest {
    #[prost(message, optional, tag = "1")]
    pub listing: ::core::option::Option<CarListing>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct UpdateListingResponse {
    #[prost(message, optional, tag = "1")]
    pub listing: ::core::option::Option<CarListing>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DeleteListingRequest {
    #[prost(string, tag = "1")]
    pub listing_id: ::prost::alloc::string::String,
}

#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct DeleteListingResponse {
    #[prost(bool, tag = "1")]
    pub success: bool,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AddToFavoritesRequest {
    #[prost(string, tag = "1")]
    pub user_id: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub listing_id: ::prost::alloc::string::String,
}

#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct AddToFavoritesResponse {
    #[prost(bool, tag = "1")]
    pub success: bool,
}
