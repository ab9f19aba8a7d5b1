//! Asset model and response projections.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;

/// A stored image and its metadata row.
///
/// Dimensions are recorded at upload time: the original pair from the
/// decoded payload, the resized pair from the resize step. `bucketkey`
/// addresses the resized bytes in the object store and is never reused.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct Asset {
    pub assetid: i64,
    pub assetname: String,
    pub bucketkey: String,
    pub original_width: i32,
    pub original_height: i32,
    pub resized_width: i32,
    pub resized_height: i32,
    pub is_resized: bool,
    pub created_at: DateTime<Utc>,
}

/// Listing payload for GET /assets.
#[derive(Debug, Serialize, ToSchema)]
pub struct AssetListResponse {
    pub message: String,
    pub data: Vec<Asset>,
}

impl AssetListResponse {
    pub fn success(data: Vec<Asset>) -> Self {
        Self {
            message: "success".to_string(),
            data,
        }
    }
}

/// Full projection for GET /image/{assetid}, with the derived public URL.
#[derive(Debug, Serialize, ToSchema)]
pub struct AssetDetailResponse {
    pub assetid: i64,
    pub assetname: String,
    pub bucketkey: String,
    pub original_width: i32,
    pub original_height: i32,
    pub resized_width: i32,
    pub resized_height: i32,
    pub is_resized: bool,
    pub s3_link: String,
}

impl AssetDetailResponse {
    pub fn from_asset(asset: Asset, s3_link: String) -> Self {
        Self {
            assetid: asset.assetid,
            assetname: asset.assetname,
            bucketkey: asset.bucketkey,
            original_width: asset.original_width,
            original_height: asset.original_height,
            resized_width: asset.resized_width,
            resized_height: asset.resized_height,
            is_resized: asset.is_resized,
            s3_link,
        }
    }
}

/// Success payload for POST /image.
#[derive(Debug, Serialize, ToSchema)]
pub struct UploadImageResponse {
    pub message: String,
    pub assetid: i64,
    #[serde(rename = "objectUrl")]
    pub object_url: String,
    #[serde(rename = "originalImageWidth")]
    pub original_image_width: u32,
    #[serde(rename = "originalImageHeight")]
    pub original_image_height: u32,
    #[serde(rename = "resizedImageWidth")]
    pub resized_image_width: u32,
    #[serde(rename = "resizedImageHeight")]
    pub resized_image_height: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_response_wire_field_names() {
        let response = UploadImageResponse {
            message: "success".to_string(),
            assetid: 7,
            object_url: "https://bucket.s3.us-east-2.amazonaws.com/image_assets/x.jpg"
                .to_string(),
            original_image_width: 400,
            original_image_height: 300,
            resized_image_width: 100,
            resized_image_height: 100,
        };
        let json = serde_json::to_value(&response).expect("serialize");
        assert_eq!(json["assetid"], 7);
        assert!(json.get("objectUrl").is_some());
        assert_eq!(json["originalImageWidth"], 400);
        assert_eq!(json["resizedImageHeight"], 100);
    }

    #[test]
    fn test_list_response_success_message() {
        let response = AssetListResponse::success(vec![]);
        let json = serde_json::to_value(&response).expect("serialize");
        assert_eq!(json["message"], "success");
        assert!(json["data"].as_array().unwrap().is_empty());
    }
}
