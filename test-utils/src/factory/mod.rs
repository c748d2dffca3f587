//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests.
//!
//! # Overview
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! // Create with defaults
//! let user = factory::create_user(&db).await?;
//!
//! // Using builder pattern for customization
//! let loan = factory::loan::LoanFactory::new(&db)
//!     .title("Home Equity")
//!     .category("Mortgage")
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `loan` - Create loan catalog entities
//! - `loan_application` - Create loan application entities
//! - `helpers` - Unique id generation shared across factories

pub mod helpers;
pub mod loan;
pub mod loan_application;
pub mod user;

// Re-export commonly used factory functions for concise usage
pub use loan::create_loan;
pub use loan_application::create_loan_application;
pub use user::create_user;
