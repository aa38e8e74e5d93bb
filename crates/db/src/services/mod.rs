//! Service layer: mutation orchestration.
//!
//! Services own the transaction boundary. Each mutating operation opens
//! one transaction on the injected pool, runs the repository primitives
//! inside it, and commits only if every step succeeded; an early return
//! drops the transaction and rolls everything back. Authorization checks
//! (the admin gate on remove) run before any write is attempted.
//!
//! Reads go straight to the repositories; handlers call them on a pooled
//! connection without a service in between.

pub mod article_service;
pub mod category_service;
pub mod comment_service;
pub mod tag_service;

pub use article_service::ArticleService;
pub use category_service::CategoryService;
pub use comment_service::CommentService;
pub use tag_service::TagService;
