pub mod flow;
pub mod processor;
pub mod prompt;
pub mod providers;
pub mod store;

pub use flow::{AnswerFlow, ClassificationFlow, InquiryFlow};
pub use processor::InquiryProcessor;
pub use providers::RetrievalGenerator;
pub use store::InquiryStore;
