//! `prediction_v1.PredictionService` contract.

/// Method paths.
pub mod method {
    pub const PREDICT: &str = "/prediction_v1.PredictionService/Predict";
    pub const GET_IMAGES: &str = "/prediction_v1.PredictionService/GetImages";
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PredictRequest {
    #[prost(string, tag = "1")]
    pub make: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub model: ::prost::alloc::string::String,
    #[prost(int32, tag = "3")]
    pub year: i32,
    #[prost(int32, tag = "4")]
    pub hp: i32,
    #[prost(string, tag = "5")]
    pub body: ::prost::alloc::string::String,
    #[prost(int32, tag = "6")]
    pub yearsell: i32,
    #[prost(int32, tag = "7")]
    pub odometer: i32,
    #[prost(string, tag = "8")]
    pub color: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PredictResponse {
    #[prost(int32, tag = "1")]
    pub price: i32,
    #[prost(int32, tag = "2")]
    pub sell_count: i32,
    #[prost(string, repeated, tag = "3")]
    pub photo_urls: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    /// Rendered price chart, PNG encoded.
    #[prost(bytes = "vec", tag = "4")]
    pub graph_png: ::prost::alloc::vec::Vec<u8>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ImagesRequest {
    #[prost(string, tag = "1")]
    pub make: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub model: ::prost::alloc::string::String,
    #[prost(int32, tag = "3")]
    pub year: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ImagesResponse {
    #[prost(string, repeated, tag = "1")]
    pub photo_urls: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
}
