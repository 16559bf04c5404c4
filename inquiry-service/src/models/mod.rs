pub mod category;
pub mod inquiry;

pub use category::{Category, Classification};
pub use inquiry::{InquiryRecord, InquiryRequest};
