//! Prediction conversions.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::domain::prediction as wire;
use crate::rpc::prediction as rpc;

pub fn predict_to_rpc(body: wire::PredictionRequest) -> rpc::PredictRequest {
    rpc::PredictRequest {
        make: body.make,
        model: body.model,
        year: body.year,
        hp: body.hp,
        body: body.body,
        yearsell: body.year_sell,
        odometer: body.odometer,
        color: body.color,
    }
}

pub fn predict_from_rpc(message: rpc::PredictResponse) -> wire::PredictionResponse {
    wire::PredictionResponse {
        price: message.price,
        sell_count: message.sell_count,
        urls: message.photo_urls,
        image: STANDARD.encode(&message.graph_png),
    }
}

pub fn images_request(make: String, model: String, year: i32) -> rpc::ImagesRequest {
    rpc::ImagesRequest { make, model, year }
}

pub fn images_from_rpc(message: rpc::ImagesResponse) -> wire::ImagesResponse {
    wire::ImagesResponse {
        urls: message.photo_urls,
    }
}
