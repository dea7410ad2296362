//! HTTP client SDK for the BambooHR REST API.
//!
//! This crate provides a typed client for the employee directory, single
//! employee lookups, and employee file management.
//!
//! # Example
//!
//! ```no_run
//! use bamboohr::{BambooClient, EmployeeField, Result};
//!
//! # async fn example() -> Result<()> {
//! let client = BambooClient::new("my-api-key", "acme")?;
//!
//! // Everyone in the directory
//! for employee in client.employees().directory().await? {
//!     println!("{:?}", employee.display_name);
//! }
//!
//! // One employee, selected fields only
//! let jane = client
//!     .employees()
//!     .get("123", &[EmployeeField::FirstName, EmployeeField::WorkEmail])
//!     .await?;
//! println!("{:?}", jane.work_email);
//!
//! // Files
//! let categories = client.files().list("123").await?;
//! if let Some(category) = categories.first() {
//!     client
//!         .files()
//!         .upload("123", &category.id.to_string(), "Contract", "./contract.pdf", "no")
//!         .await?;
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Requests
//!
//! Every request carries `Authorization: Basic base64(<key>:x)` and
//! `Accept: application/json`. Responses outside `200..400` fail with
//! [`Error::Api`]; `201 Created` responses are not decoded. The client never
//! retries. Dropping a returned future cancels the request.
//!
//! Request activity is reported through `tracing` at debug level.

pub mod api;
pub mod client;
pub mod error;
pub mod fields;
pub mod types;

pub use client::{BambooClient, ClientBuilder, DEFAULT_API_ROOT};
pub use error::{Error, Result};
pub use fields::{EmployeeField, EmployeeFields};
pub use types::*;
