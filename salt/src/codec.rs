//! Implements the salt itself.
//!
//! A salt records which of 16 slots were selected and in which order. It is
//! stored as four nibbles, the first one holding the zero-based index of the
//! first selected slot and so on. Externally, slots are addressed by 1-based
//! indices (`1..=16`).

use std::{fmt, str::FromStr};

use itertools::Itertools;
use thiserror::Error;

use crate::{
    encoding,
    nibble::{self, U4},
};

/// The amount of selections recorded in a salt.
pub const SELECTIONS: usize = 4;

/// The amount of addressable slots.
pub const SLOTS: usize = 16;

/// The length of the raw form of a salt.
pub const RAW_LENGTH: usize = SELECTIONS / 2;

/// Represents a salt: four selected slots in the order of their selection.
///
/// Once constructed, a salt is immutable.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Salt {
    nibbles: [U4; SELECTIONS],
}

impl Salt {
    /// Creates a salt from four already validated nibbles.
    pub const fn from_nibbles(nibbles: [U4; SELECTIONS]) -> Self {
        Self { nibbles }
    }

    /// Creates a salt from its raw form.
    ///
    /// The first byte packs the first two selections (high nibble first), the
    /// second byte the remaining two. Fails with
    /// [`SaltError::InvalidLength`] if `bytes` is not exactly two bytes long.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SaltError> {
        let Ok(raw) = <[u8; RAW_LENGTH]>::try_from(bytes) else {
            tracing::debug!(len = bytes.len(), "rejecting salt of invalid length");
            return Err(SaltError::InvalidLength(bytes.len()));
        };

        Ok(Self::from(raw))
    }

    /// Creates a salt from its unpadded base64 text form.
    pub fn from_base64(text: &str) -> Result<Self, SaltError> {
        let bytes = encoding::decode(text).inspect_err(|err| {
            tracing::debug!(%err, "rejecting salt that is not valid base64");
        })?;

        let salt = Self::from_bytes(&bytes)?;
        tracing::trace!(text, ?salt, "decoded salt");

        Ok(salt)
    }

    /// Creates a salt from four 1-based slot indices in the order they were
    /// selected.
    ///
    /// Fails with [`SaltError::SlotOutOfRange`] for any index outside
    /// `1..=16`.
    pub fn from_slots(slots: [usize; SELECTIONS]) -> Result<Self, SaltError> {
        let mut nibbles = [U4::MIN; SELECTIONS];
        for (nibble, slot) in nibbles.iter_mut().zip(slots) {
            *nibble = slot_to_nibble(slot).ok_or_else(|| {
                tracing::debug!(slot, "rejecting slot outside of the grid");
                SaltError::SlotOutOfRange(slot)
            })?;
        }

        Ok(Self { nibbles })
    }

    /// Returns the recorded nibbles in selection order.
    pub const fn nibbles(&self) -> [U4; SELECTIONS] {
        self.nibbles
    }

    /// Returns the 1-based selected slots in selection order.
    ///
    /// A slot recorded multiple times is yielded multiple times.
    pub fn selected_slots(&self) -> impl Iterator<Item = usize> + '_ {
        self.nibbles
            .iter()
            .map(|nibble| usize::from(nibble.to_lo()) + 1)
    }

    /// Whether the slot with the given 1-based index was selected.
    ///
    /// Indices outside of `1..=16` are never selected.
    pub fn show(&self, index: usize) -> bool {
        let Some(wanted) = slot_to_nibble(index) else {
            return false;
        };

        self.nibbles.contains(&wanted)
    }

    /// Returns the 1-based positions at which the slot with the given 1-based
    /// index was selected, in ascending order.
    pub fn positions(&self, index: usize) -> Vec<usize> {
        let Some(wanted) = slot_to_nibble(index) else {
            return Vec::new();
        };

        self.nibbles
            .iter()
            .positions(|&nibble| nibble == wanted)
            .map(|position| position + 1)
            .collect()
    }

    /// Returns the selection order of the slot with the given 1-based index.
    ///
    /// The positions from [`Self::positions`] are joined by single spaces, so
    /// a slot selected first yields `"1"` and one recorded first and second
    /// yields `"1 2"`. A slot that was not selected yields an empty string.
    pub fn number(&self, index: usize) -> String {
        self.positions(index).into_iter().join(" ")
    }

    /// Returns the raw form of the salt.
    pub const fn to_bytes(&self) -> [u8; RAW_LENGTH] {
        let [a, b, c, d] = self.nibbles;
        [nibble::combine(a, b), nibble::combine(c, d)]
    }

    /// Returns the unpadded base64 text form of the salt.
    pub fn to_base64(&self) -> String {
        encoding::encode(self.to_bytes())
    }
}

/// Maps a 1-based slot index to the nibble it is stored as.
fn slot_to_nibble(index: usize) -> Option<U4> {
    let zero_based = index.checked_sub(1)?;
    u8::try_from(zero_based)
        .ok()
        .and_then(|raw| U4::try_from(raw).ok())
}

impl From<[u8; RAW_LENGTH]> for Salt {
    fn from([first, second]: [u8; RAW_LENGTH]) -> Self {
        let (a, b) = nibble::split(first);
        let (c, d) = nibble::split(second);

        Self {
            nibbles: [a, b, c, d],
        }
    }
}

impl From<Salt> for [u8; RAW_LENGTH] {
    fn from(salt: Salt) -> Self {
        salt.to_bytes()
    }
}

impl TryFrom<&[u8]> for Salt {
    type Error = SaltError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        Self::from_bytes(bytes)
    }
}

impl FromStr for Salt {
    type Err = SaltError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_base64(s)
    }
}

impl fmt::Display for Salt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_base64())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Salt {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_base64())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Salt {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::from_base64(&text).map_err(serde::de::Error::custom)
    }
}

/// Represents an error that occurred while constructing a salt.
#[derive(Debug, Error)]
pub enum SaltError {
    /// Indicates that the text form is not valid unpadded base64.
    #[error("the salt is not valid base64")]
    Decode(#[from] base64::DecodeError),

    /// Indicates that the raw form is not exactly two bytes long.
    #[error("invalid salt: expected 2 bytes, got {0}")]
    InvalidLength(usize),

    /// Indicates that a slot index lies outside of `1..=16`.
    #[error("slot {0} is outside of 1..=16")]
    SlotOutOfRange(usize),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nibbles_of(salt: &Salt) -> [u8; SELECTIONS] {
        salt.nibbles().map(u8::from)
    }

    #[test]
    fn unpacks_high_nibble_first() {
        let salt = Salt::from_bytes(&[0x12, 0x34]).unwrap();

        assert_eq!(nibbles_of(&salt), [1, 2, 3, 4]);
        assert!(salt.show(2));
        assert!(!salt.show(1));
        assert_eq!(salt.number(2), "1");
        assert_eq!(salt.number(5), "4");
        assert_eq!(salt.number(4), "3");
        assert_eq!(salt.number(1), "");
        assert_eq!(salt.to_base64(), "EjQ");
        assert_eq!(Salt::from_base64("EjQ").unwrap().to_bytes(), [0x12, 0x34]);
    }

    #[test]
    fn reports_every_position_of_a_repeated_slot() {
        let salt = Salt::from_bytes(&[0xff, 0x00]).unwrap();

        assert_eq!(nibbles_of(&salt), [15, 15, 0, 0]);
        assert!(salt.show(16));
        assert_eq!(salt.number(16), "1 2");
        assert_eq!(salt.number(1), "3 4");
        assert_eq!(salt.positions(16), vec![1, 2]);
        assert_eq!(salt.to_base64(), "/wA");
    }

    #[test]
    fn rejects_raw_form_of_wrong_length() {
        let cases: [&[u8]; 3] = [&[], &[0x12], &[0x12, 0x34, 0x56]];
        for bytes in cases {
            assert!(matches!(
                Salt::from_bytes(bytes),
                Err(SaltError::InvalidLength(len)) if len == bytes.len()
            ));
        }
    }

    #[test]
    fn rejects_text_decoding_to_wrong_length() {
        assert!(matches!(
            Salt::from_base64("EjRW"),
            Err(SaltError::InvalidLength(3))
        ));
        assert!(matches!(
            Salt::from_base64(""),
            Err(SaltError::InvalidLength(0))
        ));
    }

    #[test]
    fn rejects_malformed_text() {
        assert!(matches!(
            Salt::from_base64("E$Q"),
            Err(SaltError::Decode(_))
        ));
        assert!(matches!(
            Salt::from_base64("EjQ="),
            Err(SaltError::Decode(_))
        ));
        assert!(matches!("E".parse::<Salt>(), Err(SaltError::Decode(_))));
    }

    #[test]
    fn error_message_names_the_salt() {
        let err = Salt::from_bytes(&[0x00]).unwrap_err();
        assert!(err.to_string().starts_with("invalid salt"));
    }

    #[test]
    fn out_of_grid_indices_are_never_selected() {
        let salt = Salt::from_bytes(&[0x00, 0x00]).unwrap();

        assert!(!salt.show(0));
        assert!(!salt.show(17));
        assert!(!salt.show(usize::MAX));
        assert_eq!(salt.number(0), "");
        assert_eq!(salt.number(257), "");
    }

    #[test]
    fn builds_from_slots_in_selection_order() {
        let salt = Salt::from_slots([2, 3, 4, 5]).unwrap();

        assert_eq!(salt.to_bytes(), [0x12, 0x34]);
        assert_eq!(salt.selected_slots().collect::<Vec<_>>(), vec![2, 3, 4, 5]);
    }

    #[test]
    fn builds_from_nibbles_in_selection_order() {
        let salt = Salt::from_nibbles([
            U4::from_lo(1),
            U4::from_lo(2),
            U4::from_lo(3),
            U4::from_lo(4),
        ]);

        assert_eq!(salt.to_bytes(), [0x12, 0x34]);
        assert_eq!(salt, Salt::from([0x12, 0x34]));
    }

    #[test]
    fn try_from_slice_checks_the_length() {
        assert!(matches!(
            Salt::try_from(&[0x12u8][..]),
            Err(SaltError::InvalidLength(1))
        ));
        assert_eq!(
            Salt::try_from(&[0x12u8, 0x34][..]).unwrap().to_base64(),
            "EjQ"
        );
    }

    #[test]
    fn rejects_slots_outside_of_the_grid() {
        assert!(matches!(
            Salt::from_slots([1, 2, 0, 4]),
            Err(SaltError::SlotOutOfRange(0))
        ));
        assert!(matches!(
            Salt::from_slots([1, 17, 3, 4]),
            Err(SaltError::SlotOutOfRange(17))
        ));
    }

    #[test]
    fn text_and_display_agree() {
        let salt: Salt = "/wA".parse().unwrap();
        assert_eq!(salt.to_string(), "/wA");
        assert_eq!(<[u8; RAW_LENGTH]>::from(salt), [0xff, 0x00]);
    }

    #[test]
    fn canonicalizes_trailing_bits() {
        let salt = Salt::from_base64("EjR").unwrap();
        assert_eq!(salt.to_base64(), "EjQ");
    }
}
