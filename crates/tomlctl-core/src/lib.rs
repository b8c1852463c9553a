//! Path addressing for TOML document trees.
//!
//! This crate implements the engine behind the `tomlctl` CLI: a mini path
//! grammar (`a.b[0].c`), literal-to-typed-value inference, and a tree
//! navigator that performs point reads, point writes (creating missing
//! intermediate containers and growing arrays), and point deletions.
//!
//! # Example
//!
//! ```
//! use tomlctl_core::{delete, infer, lookup, parse, set, Value};
//!
//! let mut tree = Value::table();
//!
//! let port = parse("server.ports[2]").unwrap();
//! set(&mut tree, &port, infer("8080")).unwrap();
//! assert_eq!(lookup(&tree, &port), Some(&Value::Integer(8080)));
//!
//! delete(&mut tree, &port);
//! assert_eq!(lookup(&tree, &port), None);
//! ```

pub mod infer;
pub mod navigate;
pub mod path;
pub mod value;

pub use infer::infer;
pub use navigate::{delete, lookup, set, NavigateError};
pub use path::{format, parse, PathError, Token};
pub use value::Value;
