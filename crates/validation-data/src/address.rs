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

//! Fixed-size account addresses of the chains an identity can live on.

use base58::{FromBase58, ToBase58};
use blake2::{Blake2b512, Digest};
use parity_scale_codec::{Decode, Encode, MaxEncodedLen};
use scale_info::{prelude::string::String, TypeInfo};
use sp_runtime::RuntimeDebug;
use sp_std::{vec, vec::Vec};

use crate::errors::EncodingErrorKind;

/// A 20-byte EVM address.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Encode, Decode, MaxEncodedLen, TypeInfo, RuntimeDebug)]
pub struct Address20(pub [u8; 20]);

/// A 32-byte address: a Substrate account ID or a Solana public key.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Encode, Decode, MaxEncodedLen, TypeInfo, RuntimeDebug)]
pub struct Address32(pub [u8; 32]);

/// A 33-byte compressed secp256k1 public key, identifying a Bitcoin wallet.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Encode, Decode, MaxEncodedLen, TypeInfo, RuntimeDebug)]
pub struct Address33(pub [u8; 33]);

macro_rules! impl_address {
	($name:ident, $len:literal) => {
		impl From<[u8; $len]> for $name {
			fn from(bytes: [u8; $len]) -> Self {
				Self(bytes)
			}
		}

		impl From<$name> for [u8; $len] {
			fn from(address: $name) -> Self {
				address.0
			}
		}

		impl AsRef<[u8]> for $name {
			fn as_ref(&self) -> &[u8] {
				&self.0[..]
			}
		}

		#[cfg(feature = "std")]
		impl std::fmt::Display for $name {
			fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
				write!(f, "0x{}", hex::encode(self.0))
			}
		}
	};
}

impl_address!(Address20, 20);
impl_address!(Address32, 32);
impl_address!(Address33, 33);

impl Address32 {
	/// Render the address in SS58 format with the given network prefix.
	pub fn to_ss58(&self, prefix: u16) -> String {
		to_ss58(&self.0, prefix)
	}

	/// Parse an SS58 address, returning it together with its network prefix.
	pub fn from_ss58(input: &str) -> Result<(Self, u16), EncodingErrorKind> {
		let (public_key, prefix) = from_ss58(input)?;
		let public_key: [u8; 32] = public_key.try_into().map_err(|_| EncodingErrorKind::InvalidSs58)?;
		Ok((Self(public_key), prefix))
	}
}

// Adapted from https://github.com/paritytech/substrate/blob/ad5399644aebc54e32a107ac37ae08e6cd1f0cfb/primitives/core/src/crypto.rs#L324
// Copyright (C) Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: Apache-2.0
fn to_ss58(public_key: &[u8], prefix: u16) -> String {
	// We mask out the upper two bits of the ident - SS58 Prefix currently only
	// supports 14-bits
	let ident: u16 = prefix & 0b0011_1111_1111_1111;
	let mut v = match ident {
		0..=63 => vec![ident as u8],
		64..=16_383 => {
			// upper six bits of the lower byte(!)
			let first = ((ident & 0b0000_0000_1111_1100) as u8) >> 2;
			// lower two bits of the lower byte in the high pos,
			// lower bits of the upper byte in the low pos
			let second = ((ident >> 8) as u8) | ((ident & 0b0000_0000_0000_0011) as u8) << 6;
			vec![first | 0b01000000, second]
		}
		_ => unreachable!("masked out the upper two bits; qed"),
	};
	v.extend(public_key);
	let r = ss58hash(&v);
	v.extend(&r[0..2]);
	v.to_base58()
}

fn from_ss58(input: &str) -> Result<(Vec<u8>, u16), EncodingErrorKind> {
	const CHECKSUM_LEN: usize = 2;

	let data = input.from_base58().map_err(|_| EncodingErrorKind::InvalidSs58)?;
	let (prefix_len, ident) = match data.first().copied() {
		Some(first @ 0..=63) => (1, u16::from(first)),
		Some(first @ 64..=127) => {
			let second = *data.get(1).ok_or(EncodingErrorKind::InvalidSs58)?;
			// weird bit manipulation owing to the combination of LE encoding and missing two
			// bits from the left.
			// d[0] d[1] are: 01aaaaaa bbcccccc
			// they make the LE-encoded 16-bit value: aaaaaabb 00cccccc
			// so the lower byte is formed of aaaaaabb and the higher byte is 00cccccc
			let lower = (first << 2) | (second >> 6);
			let upper = second & 0b0011_1111;
			(2, u16::from(lower) | (u16::from(upper) << 8))
		}
		_ => return Err(EncodingErrorKind::InvalidSs58),
	};
	if data.len() <= prefix_len + CHECKSUM_LEN {
		return Err(EncodingErrorKind::InvalidSs58);
	}
	let body_len = data.len() - CHECKSUM_LEN;
	let hash = ss58hash(&data[..body_len]);
	if data[body_len..] != hash[..CHECKSUM_LEN] {
		return Err(EncodingErrorKind::InvalidSs58);
	}
	Ok((data[prefix_len..body_len].to_vec(), ident))
}

const PREFIX: &[u8] = b"SS58PRE";

fn ss58hash(data: &[u8]) -> Vec<u8> {
	let mut ctx = Blake2b512::new();
	ctx.update(PREFIX);
	ctx.update(data);
	ctx.finalize().to_vec()
}
