pub mod batch;
pub mod question;

pub use batch::BatchRequest;
pub use question::QuestionRecord;
