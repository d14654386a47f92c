//! A compact codec for four-item selections.
//!
//! A [`Salt`] records which of 16 slots were selected and in which order,
//! for up to four selections. Every selection is stored as a nibble, so the
//! whole salt packs into two bytes. For transport in URLs and similar places,
//! the two bytes are encoded as unpadded base64.
//!
//! # Quickstart
//!
//! ```
//! use salt::Salt;
//!
//! // Slots 2, 3, 4 and 5 were selected, in this order.
//! let salt = Salt::from_slots([2, 3, 4, 5]).expect("all slots are on the grid");
//! assert_eq!(salt.to_bytes(), [0x12, 0x34]);
//! assert_eq!(salt.to_base64(), "EjQ");
//!
//! // The text form round-trips.
//! let decoded: Salt = "EjQ".parse().expect("valid salt");
//! assert_eq!(decoded, salt);
//!
//! // A consumer rendering the grid asks whether a slot is selected and at
//! // which position it was selected.
//! assert!(decoded.show(5));
//! assert_eq!(decoded.number(5), "4");
//! assert!(!decoded.show(1));
//! assert_eq!(decoded.number(1), "");
//! ```
//!
//! Nothing stops the same slot from being recorded more than once. In that
//! case, [`Salt::number`] lists every position:
//!
//! ```
//! use salt::Salt;
//!
//! let salt = Salt::from([0xff, 0x00]);
//! assert_eq!(salt.number(16), "1 2");
//! assert_eq!(salt.number(1), "3 4");
//! ```

mod codec;
pub mod encoding;
pub mod nibble;

pub use codec::{RAW_LENGTH, SELECTIONS, SLOTS, Salt, SaltError};
