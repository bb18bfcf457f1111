// KILT Blockchain – https://botlabs.org
// Copyright (C) 2019-2024 BOTLabs GmbH

// The KILT Blockchain is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.

// The KILT Blockchain is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.

// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

// If you feel like getting in touch with us, you can do so at info@botlabs.org

//! Decoding of the strings a client hands over: content sniffing between hex
//! and UTF-8 for messages, and hex/base64/base58 for signatures and
//! addresses.

use base58::FromBase58;
use scale_info::prelude::{format, string::String};
use sp_runtime::{traits::Get, BoundedVec};
use sp_std::vec::Vec;

use crate::errors::{EncodingError, EncodingErrorKind, Field};

/// The encoding a platform natively uses for binary values when no `0x`
/// prefix is present.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TextEncoding {
	/// Bare hex digits.
	Hex,
	/// Standard base64 with padding, as produced by Bitcoin wallets.
	Base64,
	/// Bitcoin-alphabet base58, as produced by Solana wallets.
	Base58,
}

/// Returns the hex digits following a `0x` (or `0X`) prefix, if the prefix is
/// present.
pub fn strip_hex_prefix(input: &str) -> Option<&str> {
	input.strip_prefix("0x").or_else(|| input.strip_prefix("0X"))
}

/// Whether the input is a hex string, with or without the `0x` prefix.
pub fn is_hex(input: &str) -> bool {
	let digits = strip_hex_prefix(input).unwrap_or(input);
	!digits.is_empty() && digits.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Turn a message into the bytes that were signed.
///
/// Hex input (prefixed or not) is decoded, anything else is taken as UTF-8.
/// Text that happens to be valid hex is decoded as hex, there is no way to
/// tell the two apart. An odd number of hex digits cannot be turned into
/// bytes, so such a message is kept in its `0x`-prefixed text form.
pub fn decode_message(input: &str) -> Vec<u8> {
	if !is_hex(input) {
		return input.as_bytes().to_vec();
	}
	let digits = strip_hex_prefix(input).unwrap_or(input);
	match hex::decode(digits) {
		Ok(bytes) => bytes,
		Err(_) => format!("0x{}", digits).into_bytes(),
	}
}

/// Render a message the way it was handed over: text stays text, binary
/// messages are rendered as `0x`-prefixed hex.
pub fn render_message(message: &[u8]) -> String {
	match core::str::from_utf8(message) {
		Ok(text) if !text.chars().any(|c| c.is_control() && !c.is_whitespace()) => text.into(),
		_ => to_prefixed_hex(message),
	}
}

/// Decode a hex string. The `0x` prefix is optional.
pub fn decode_hex(field: Field, input: &str) -> Result<Vec<u8>, EncodingError> {
	let digits = strip_hex_prefix(input).unwrap_or(input);
	hex::decode(digits).map_err(|_| EncodingError::new(field, EncodingErrorKind::InvalidHex))
}

pub fn decode_base64(field: Field, input: &str) -> Result<Vec<u8>, EncodingError> {
	base64::decode(input).map_err(|_| EncodingError::new(field, EncodingErrorKind::InvalidBase64))
}

pub fn decode_base58(field: Field, input: &str) -> Result<Vec<u8>, EncodingError> {
	input
		.from_base58()
		.map_err(|_| EncodingError::new(field, EncodingErrorKind::InvalidBase58))
}

/// Decode a binary value: `0x`-prefixed input is always read as hex,
/// otherwise the platform's native encoding applies.
pub fn decode_binary(field: Field, input: &str, native: TextEncoding) -> Result<Vec<u8>, EncodingError> {
	if let Some(digits) = strip_hex_prefix(input) {
		return decode_hex(field, digits);
	}
	match native {
		TextEncoding::Hex => decode_hex(field, input),
		TextEncoding::Base64 => decode_base64(field, input),
		TextEncoding::Base58 => decode_base58(field, input),
	}
}

/// Render bytes as `0x`-prefixed lowercase hex.
pub fn to_prefixed_hex(bytes: &[u8]) -> String {
	format!("0x{}", hex::encode(bytes))
}

/// Move decoded bytes into a fixed-size array, failing on length mismatch.
pub(crate) fn into_array<const N: usize>(field: Field, bytes: Vec<u8>) -> Result<[u8; N], EncodingError> {
	let actual = bytes.len();
	bytes.try_into().map_err(|_| {
		EncodingError::new(
			field,
			EncodingErrorKind::InvalidLength { expected: N, actual },
		)
	})
}

/// Move bytes into a bounded vector, failing if they exceed the bound.
pub(crate) fn into_bounded<S: Get<u32>>(field: Field, bytes: Vec<u8>) -> Result<BoundedVec<u8, S>, EncodingError> {
	BoundedVec::try_from(bytes).map_err(|_| EncodingError::new(field, EncodingErrorKind::TooLong { max: S::get() }))
}

/// Convert a client string field into its on-chain bounded representation.
pub(crate) fn bounded_string<S: Get<u32>>(field: Field, input: &str) -> Result<BoundedVec<u8, S>, EncodingError> {
	into_bounded(field, input.as_bytes().to_vec())
}
