pub mod api;
pub mod attachment;
pub mod flow;
pub mod submission;
pub mod view;

pub use attachment::{load_attachment, validate_image, ImageAttachment};
pub use flow::{send_submission, SendOutcome};
pub use submission::ChatSubmission;
pub use view::ChatPage;
