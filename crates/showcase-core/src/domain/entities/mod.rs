pub mod contact;
pub mod project;
pub mod site;

pub use crate::domain::DomainError;
pub use contact::{ContactDraft, ContactPayload};
pub use project::{GalleryImage, Project};
pub use site::SiteContent;
