mod controller;
mod notice;
mod options;
mod page;
mod renderer;
mod validation;

pub use controller::{SubmitOutcome, SubmitPhase};
pub use notice::{FAILURE_NOTICE, Notice, NoticeBoard, NoticeKind, SUCCESS_NOTICE};
pub use options::{
    DEFAULT_CLASS_PREFIX, DEFAULT_NOTICE_TTL, DEFAULT_SUBMIT_LABEL, DEFAULT_TIMEOUT, FormOptions,
    StyleDelivery,
};
pub use page::{MemoryPage, MemorySurface, Page, Surface};
pub use renderer::FormRenderer;
pub use validation::{ValidationOutcome, validate_form};
