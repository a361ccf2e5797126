mod api_key;
mod branding;
mod folder;
mod rates;
mod requests;
mod service;
mod template;

pub use api_key::{ApiKey, KeyType};
pub use branding::{EmailBranding, LetterBranding};
pub use folder::TemplateFolder;
pub use rates::{LetterRate, SmsRate};
pub use requests::{
    CreateApiKeyRequest, CreateFolderRequest, CreateTemplateRequest, EmailBrandingRequest,
    LetterBrandingRequest, MoveToFolderRequest, UpdateFolderRequest, UpdateServiceRequest,
    UpdateTemplateRequest,
};
pub use service::Service;
pub use template::{Template, TemplateType, TemplateUsage};
