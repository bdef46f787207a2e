//! Core library modules for the tasker application.
//!
//! Everything lives in process memory: the interactive loop in [`commands`]
//! drives the business rules in [`libs::service::TaskService`], which own
//! the keyed storage in [`store::tasks::Tasks`].
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::io;
//! use tasker::commands::Repl;
//! use tasker::libs::service::TaskService;
//!
//! let stdin = io::stdin();
//! let mut repl = Repl::new(TaskService::new(), stdin.lock());
//! repl.run().unwrap();
//! ```

pub mod commands;
pub mod libs;
pub mod store;
