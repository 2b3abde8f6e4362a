pub mod category;
pub mod response;
pub mod upload;

pub use category::{CategoryPolicy, MediaCategory, AUDIO_POLICY, VIDEO_POLICY};
pub use response::{CategoryPolicyResponse, UploadResponse};
pub use upload::{DetectedType, UploadRequest, ValidationResult};
