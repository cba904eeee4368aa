//! Business services containing domain logic and use cases.

pub mod account;
pub mod notifications;
pub mod registration;
pub mod templates;
pub mod verification;

// Re-export commonly used types
pub use account::AccountStatusProjector;
pub use notifications::{
    ContactMessage, ContactOutcome, NoticeReceipt, NotificationService, OrderItem, OrderStatus,
    OrderStatusNotice, OrderSummary, ReviewNotice, ReviewTarget,
};
pub use registration::{
    AccountVerification, NewUser, RegistrationOutcome, RegistrationService, RegistrationStatus,
};
pub use templates::{GameCashTemplates, MessageRenderer, NoticeRenderer};
pub use verification::{
    AttemptPolicy, Clock, CodeGenerator, CodeSource, IssueOutcome, ManualClock, NotifierTrait,
    RecordManager, SystemClock, VerificationService, VerificationServiceConfig, VerificationStatus,
    VerificationView, VerifyOutcome,
};
