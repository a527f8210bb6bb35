//! # Public `OpenAI` Resources

use crate::resources::ConstUrlResource;

/// The "`r50k_base.tiktoken`" vocabulary resource.
pub const R50K_BASE_TIKTOKEN_RESOURCE: ConstUrlResource = ConstUrlResource {
    urls: &["https://openaipublic.blob.core.windows.net/encodings/r50k_base.tiktoken"],
    hash: Some("306cd27f03c1a714eca7108e03d66b7dc042abe8c258b44c199a7ed9838dd930"),
};

/// The "`p50k_base.tiktoken`" vocabulary resource.
pub const P50K_BASE_TIKTOKEN_RESOURCE: ConstUrlResource = ConstUrlResource {
    urls: &["https://openaipublic.blob.core.windows.net/encodings/p50k_base.tiktoken"],
    hash: Some("94b5ca7dff4d00767bc256fdd1b27e5b17361d7b8a5f968547f9f23eb70d2069"),
};

/// The "`cl100k_base.tiktoken`" vocabulary resource.
pub const CL100K_BASE_TIKTOKEN_RESOURCE: ConstUrlResource = ConstUrlResource {
    urls: &["https://openaipublic.blob.core.windows.net/encodings/cl100k_base.tiktoken"],
    hash: Some("223921b76ee99bde995b7ff738513eef100fb51d18c93597a113bcffe865b2a7"),
};

/// The "`o200k_base.tiktoken`" vocabulary resource.
pub const O200K_BASE_TIKTOKEN_RESOURCE: ConstUrlResource = ConstUrlResource {
    urls: &["https://openaipublic.blob.core.windows.net/encodings/o200k_base.tiktoken"],
    hash: Some("446a9538cb6c348e3516120d7c08b09f57c36495e2acfffe59a5bf8b0cfb1a2d"),
};
