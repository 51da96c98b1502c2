//! `profile_v1.ProfileService` contract.

/// Method paths.
pub mod method {
    pub const LOGIN: &str = "/profile_v1.ProfileService/Login";
    pub const LOGOUT: &str = "/profile_v1.ProfileService/Logout";
    pub const REGISTER: &str = "/profile_v1.ProfileService/Register";
    pub const UNREGISTER: &str = "/profile_v1.ProfileService/Unregister";
    pub const GET_USER: &str = "/profile_v1.ProfileService/GetUser";
    pub const REFRESH: &str = "/profile_v1.ProfileService/Refresh";
}

/// Metadata key carrying the refresh token on logout, unregister and refresh.
pub const REFRESH_TOKEN_METADATA: &str = "refreshtoken";

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Uuid {
    #[prost(string, tag = "1")]
    pub value: ::prost::alloc::string::String,
}

/// Caller fingerprint forwarded for audit purposes.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SourceData {
    #[prost(string, tag = "1")]
    pub ip: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub user_agent: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TokenPair {
    #[prost(string, tag = "1")]
    pub access_token: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub refresh_token: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct LoginRequest {
    #[prost(string, tag = "1")]
    pub email: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub password: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "3")]
    pub source: ::core::option::Option<SourceData>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct LoginResponse {
    #[prost(message, optional, tag = "1")]
    pub user_id: ::core::option::Option<Uuid>,
    #[prost(message, optional, tag = "2")]
    pub tokens: ::core::option::Option<TokenPair>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RegisterRequest {
    #[prost(string, tag = "1")]
    pub fullname: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub email: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub phone: ::prost::alloc::string::String,
    #[prost(string, tag = "4")]
    pub password: ::prost::alloc::string::String,
    /// Unix epoch seconds.
    #[prost(int64, tag = "5")]
    pub birthdate: i64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RegisterResponse {
    #[prost(message, optional, tag = "1")]
    pub user_id: ::core::option::Option<Uuid>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct UserRequest {
    #[prost(message, optional, tag = "1")]
    pub user_id: ::core::option::Option<Uuid>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct UserResponse {
    #[prost(message, optional, tag = "1")]
    pub user_id: ::core::option::Option<Uuid>,
    #[prost(string, tag = "2")]
    pub fullname: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub email: ::prost::alloc::string::String,
    #[prost(string, tag = "4")]
    pub phone: ::prost::alloc::string::String,
    /// Unix epoch seconds.
    #[prost(int64, tag = "5")]
    pub birthdate: i64,
    /// Unix epoch seconds.
    #[prost(int64, tag = "6")]
    pub registerdate: i64,
}
