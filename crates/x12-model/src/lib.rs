//! X12 document model.
//!
//! - **Delimiters** (`delimiters`): segment terminator and element separator
//! - **Segment** (`segment`): one tag plus its positional elements
//! - **Tokenizer** (`tokenizer`): splits raw text into segments
//!
//! # Example
//!
//! ```
//! use x12_model::tokenize;
//!
//! let segments = tokenize("ST*837*0001~SE*2*0001~");
//! assert_eq!(segments[0].tag(), "ST");
//! assert_eq!(segments[0].element(0), Some("837"));
//! ```

pub mod delimiters;
pub mod error;
pub mod segment;
pub mod tokenizer;

pub use delimiters::{DEFAULT_ELEMENT_SEPARATOR, DEFAULT_SEGMENT_TERMINATOR, Delimiters};
pub use error::{ModelError, Result};
pub use segment::Segment;
pub use tokenizer::{Tokenizer, tokenize};
