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

//! The signatures a wallet can produce over a validation message, and how the
//! chain checks them.

use parity_scale_codec::{alloc::string::ToString, Decode, Encode, MaxEncodedLen};
use scale_info::{prelude::string::String, TypeInfo};
use serde::{Deserialize, Serialize};
use sha3::{Digest, Keccak256};
use sp_core::{ecdsa, ed25519, sr25519};
use sp_runtime::RuntimeDebug;
use sp_std::vec::Vec;

use crate::{
	address::{Address20, Address32, Address33},
	constants::{
		BITCOIN_SIGNATURE_LENGTH, ECDSA_SIGNATURE_LENGTH, ED25519_SIGNATURE_LENGTH, ETHEREUM_SIGNATURE_LENGTH,
		LOG_TARGET, SR25519_SIGNATURE_LENGTH,
	},
	encoding::{into_array, to_prefixed_hex},
	errors::{EncodingError, Field},
};

const PAYLOAD_BYTES_WRAPPER_PREFIX: &[u8; 7] = b"<Bytes>";
const PAYLOAD_BYTES_WRAPPER_POSTFIX: &[u8; 8] = b"</Bytes>";
const ETHEREUM_SIGNATURE_PREFIX: &[u8; 26] = b"\x19Ethereum Signed Message:\n";
const BITCOIN_SIGNATURE_PREFIX: &[u8; 25] = b"\x18Bitcoin Signed Message:\n";

/// Signature schemes a client can name explicitly.
#[derive(
	Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Encode, Decode, MaxEncodedLen, TypeInfo, RuntimeDebug, Serialize, Deserialize,
)]
pub enum SignatureScheme {
	Ed25519,
	Sr25519,
	Ecdsa,
	Ethereum,
	Bitcoin,
}

impl SignatureScheme {
	/// The length, in bytes, of a raw signature of this scheme.
	pub const fn signature_length(&self) -> usize {
		match self {
			Self::Ed25519 => ED25519_SIGNATURE_LENGTH,
			Self::Sr25519 => SR25519_SIGNATURE_LENGTH,
			Self::Ecdsa => ECDSA_SIGNATURE_LENGTH,
			Self::Ethereum => ETHEREUM_SIGNATURE_LENGTH,
			Self::Bitcoin => BITCOIN_SIGNATURE_LENGTH,
		}
	}
}

/// A recoverable secp256k1 signature over an EIP-191 message, `r || s || v`.
#[derive(Clone, Copy, Eq, PartialEq, Encode, Decode, MaxEncodedLen, TypeInfo, RuntimeDebug)]
pub struct EthereumSignature(pub [u8; 65]);

/// A BIP-137 message signature, `header || r || s`.
#[derive(Clone, Copy, Eq, PartialEq, Encode, Decode, MaxEncodedLen, TypeInfo, RuntimeDebug)]
pub struct BitcoinSignature(pub [u8; 65]);

/// A signature of any of the schemes supported by the identity chain.
#[derive(Clone, Eq, PartialEq, Encode, Decode, MaxEncodedLen, TypeInfo, RuntimeDebug)]
pub enum Web3Signature {
	#[codec(index = 0)]
	Ed25519(ed25519::Signature),
	#[codec(index = 1)]
	Sr25519(sr25519::Signature),
	#[codec(index = 2)]
	Ecdsa(ecdsa::Signature),
	#[codec(index = 3)]
	Ethereum(EthereumSignature),
	#[codec(index = 4)]
	Bitcoin(BitcoinSignature),
}

impl Web3Signature {
	/// Tag raw signature bytes with a scheme, checking their length.
	pub fn from_raw(scheme: SignatureScheme, raw: Vec<u8>) -> Result<Self, EncodingError> {
		let signature = match scheme {
			SignatureScheme::Ed25519 => Self::Ed25519(ed25519::Signature::from_raw(into_array(Field::Signature, raw)?)),
			SignatureScheme::Sr25519 => Self::Sr25519(sr25519::Signature::from_raw(into_array(Field::Signature, raw)?)),
			SignatureScheme::Ecdsa => Self::Ecdsa(ecdsa::Signature::from_raw(into_array(Field::Signature, raw)?)),
			SignatureScheme::Ethereum => Self::Ethereum(EthereumSignature(into_array(Field::Signature, raw)?)),
			SignatureScheme::Bitcoin => Self::Bitcoin(BitcoinSignature(into_array(Field::Signature, raw)?)),
		};
		Ok(signature)
	}

	pub fn scheme(&self) -> SignatureScheme {
		match self {
			Self::Ed25519(_) => SignatureScheme::Ed25519,
			Self::Sr25519(_) => SignatureScheme::Sr25519,
			Self::Ecdsa(_) => SignatureScheme::Ecdsa,
			Self::Ethereum(_) => SignatureScheme::Ethereum,
			Self::Bitcoin(_) => SignatureScheme::Bitcoin,
		}
	}

	pub fn is_ed25519(&self) -> bool {
		matches!(self, Self::Ed25519(_))
	}

	pub fn is_sr25519(&self) -> bool {
		matches!(self, Self::Sr25519(_))
	}

	pub fn is_ecdsa(&self) -> bool {
		matches!(self, Self::Ecdsa(_))
	}

	pub fn is_ethereum(&self) -> bool {
		matches!(self, Self::Ethereum(_))
	}

	pub fn is_bitcoin(&self) -> bool {
		matches!(self, Self::Bitcoin(_))
	}

	/// The raw signature bytes, without the scheme tag.
	pub fn as_bytes(&self) -> &[u8] {
		match self {
			Self::Ed25519(sig) => AsRef::<[u8]>::as_ref(sig),
			Self::Sr25519(sig) => AsRef::<[u8]>::as_ref(sig),
			Self::Ecdsa(sig) => AsRef::<[u8]>::as_ref(sig),
			Self::Ethereum(sig) => &sig.0[..],
			Self::Bitcoin(sig) => &sig.0[..],
		}
	}

	/// The raw signature bytes as `0x`-prefixed hex, lowercase regardless of
	/// the case the signature was handed over in.
	pub fn to_hex(&self) -> String {
		to_prefixed_hex(self.as_bytes())
	}

	/// Verify the signature over `message` for a Substrate account.
	///
	/// Wallets commonly wrap the payload in `<Bytes>...</Bytes>` before
	/// signing, so both the raw and the wrapped payload are accepted. ECDSA
	/// accounts are the blake2 hash of the compressed public key.
	pub fn verify_substrate(&self, message: &[u8], account: &Address32) -> bool {
		let wrapped = get_wrapped_payload(message, WrapType::Substrate);
		[message, &wrapped[..]].iter().any(|payload| match self {
			Self::Ed25519(sig) => sp_io::crypto::ed25519_verify(sig, payload, &ed25519::Public::from_raw(account.0)),
			Self::Sr25519(sig) => sp_io::crypto::sr25519_verify(sig, payload, &sr25519::Public::from_raw(account.0)),
			Self::Ecdsa(sig) => {
				let Ok(raw) = <[u8; 65]>::try_from(AsRef::<[u8]>::as_ref(sig)) else {
					return false;
				};
				match sp_io::crypto::secp256k1_ecdsa_recover_compressed(&raw, &sp_io::hashing::blake2_256(payload)) {
					Ok(public_key) => sp_io::hashing::blake2_256(&public_key) == account.0,
					Err(_) => {
						log::trace!(target: LOG_TARGET, "Error recovering ECDSA public key");
						false
					}
				}
			}
			_ => false,
		})
	}

	/// Verify an Ed25519 signature over the raw `message` for a Solana
	/// account.
	pub fn verify_solana(&self, message: &[u8], account: &Address32) -> bool {
		match self {
			Self::Ed25519(sig) => sp_io::crypto::ed25519_verify(sig, message, &ed25519::Public::from_raw(account.0)),
			_ => false,
		}
	}

	/// Verify an EIP-191 personal-message signature for an EVM address.
	pub fn verify_evm(&self, message: &[u8], address: &Address20) -> bool {
		let Self::Ethereum(sig) = self else {
			return false;
		};
		let payload = get_wrapped_payload(message, WrapType::Ethereum);
		let mut hashed_message_buffer = [0u8; 32];
		hashed_message_buffer.copy_from_slice(Keccak256::digest(payload).as_slice());
		match sp_io::crypto::secp256k1_ecdsa_recover(&sig.0, &hashed_message_buffer) {
			Ok(public_key) => Keccak256::digest(public_key).as_slice()[12..] == address.0[..],
			Err(_) => {
				log::trace!(target: LOG_TARGET, "Error verifying Ethereum signature");
				false
			}
		}
	}

	/// Verify a BIP-137 signed message for a Bitcoin public key.
	///
	/// Bitcoin wallets sign text, so the message is checked in its hex
	/// rendering (with and without `0x` prefix) and as raw bytes.
	pub fn verify_bitcoin(&self, message: &[u8], public_key: &Address33) -> bool {
		let Self::Bitcoin(sig) = self else {
			return false;
		};
		let Some(raw) = sig.to_recoverable() else {
			log::trace!(target: LOG_TARGET, "Invalid Bitcoin signature header {}", sig.0[0]);
			return false;
		};
		let hex_message = to_prefixed_hex(message);
		let unprefixed = &hex_message.as_bytes()[2..];
		[unprefixed, hex_message.as_bytes(), message].iter().any(|text| {
			sp_io::crypto::secp256k1_ecdsa_recover_compressed(&raw, &bitcoin_message_hash(text))
				.map(|recovered| recovered == public_key.0)
				.unwrap_or(false)
		})
	}
}

impl BitcoinSignature {
	/// Convert the `header || r || s` layout into the `r || s || v` layout
	/// the secp256k1 recovery expects. Returns `None` for an invalid header.
	fn to_recoverable(&self) -> Option<[u8; 65]> {
		let header = self.0[0];
		// 27-30: uncompressed P2PKH, 31-34: compressed P2PKH, 35-38: P2SH-P2WPKH, 39-42: P2WPKH.
		if !(27..=42).contains(&header) {
			return None;
		}
		let mut raw = [0u8; 65];
		raw[..64].copy_from_slice(&self.0[1..]);
		raw[64] = (header - 27) % 4;
		Some(raw)
	}
}

/// The double SHA-256 digest Bitcoin wallets sign for a text message.
pub fn bitcoin_message_hash(message: &[u8]) -> [u8; 32] {
	let mut payload = BITCOIN_SIGNATURE_PREFIX.to_vec();
	payload.extend(compact_size(message.len()));
	payload.extend_from_slice(message);
	sp_io::hashing::sha2_256(&sp_io::hashing::sha2_256(&payload))
}

/// Bitcoin's variable length integer encoding.
fn compact_size(len: usize) -> Vec<u8> {
	match len {
		0..=0xfc => sp_std::vec![len as u8],
		0xfd..=0xffff => [&[0xfd][..], &(len as u16).to_le_bytes()[..]].concat(),
		_ => [&[0xfe][..], &(len as u32).to_le_bytes()[..]].concat(),
	}
}

pub(crate) enum WrapType {
	Substrate,
	Ethereum,
}

pub(crate) fn get_wrapped_payload(payload: &[u8], wrap_type: WrapType) -> Vec<u8> {
	match wrap_type {
		WrapType::Substrate => PAYLOAD_BYTES_WRAPPER_PREFIX
			.iter()
			.chain(payload.iter())
			.chain(PAYLOAD_BYTES_WRAPPER_POSTFIX.iter())
			.copied()
			.collect(),
		WrapType::Ethereum => ETHEREUM_SIGNATURE_PREFIX
			.iter()
			// eth wrapping also contains the length of the payload
			.chain(payload.len().to_string().as_bytes().iter())
			.chain(payload.iter())
			.copied()
			.collect(),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	use sp_core::{crypto::Pair, ecdsa, ed25519, sr25519};

	use crate::{
		errors::EncodingErrorKind,
		test_utils::{bitcoin_sign, evm_address, evm_sign},
	};

	const MESSAGE: &[u8] = b"validation challenge";

	#[test]
	fn from_raw_checks_length() {
		assert!(Web3Signature::from_raw(SignatureScheme::Sr25519, vec![0u8; 64])
			.unwrap()
			.is_sr25519());
		assert!(Web3Signature::from_raw(SignatureScheme::Bitcoin, vec![0u8; 65])
			.unwrap()
			.is_bitcoin());
		assert_eq!(
			Web3Signature::from_raw(SignatureScheme::Ed25519, vec![0u8; 65]),
			Err(EncodingError::new(
				Field::Signature,
				EncodingErrorKind::InvalidLength {
					expected: 64,
					actual: 65
				}
			))
		);
	}

	#[test]
	fn hex_rendering_matches_raw_bytes() {
		let raw = (0u8..64).collect::<Vec<_>>();
		let signature = Web3Signature::from_raw(SignatureScheme::Sr25519, raw.clone()).unwrap();
		assert_eq!(signature.as_bytes(), &raw[..]);
		assert_eq!(signature.to_hex(), format!("0x{}", hex::encode(&raw)));
		assert_eq!(signature.scheme(), SignatureScheme::Sr25519);
	}

	#[test]
	fn test_substrate_signatures() {
		sp_io::TestExternalities::default().execute_with(|| {
			let sr_pair = sr25519::Pair::from_seed(b"Alice                           ");
			let ed_pair = ed25519::Pair::from_seed(b"Bob                             ");
			let ecdsa_pair = ecdsa::Pair::from_seed(b"Charlie                         ");

			let sr_account = Address32(sr_pair.public().0);
			let ed_account = Address32(ed_pair.public().0);
			let ecdsa_account = Address32(sp_io::hashing::blake2_256(&ecdsa_pair.public().0));

			let sr_sig = Web3Signature::Sr25519(sr_pair.sign(MESSAGE));
			let ed_sig = Web3Signature::Ed25519(ed_pair.sign(MESSAGE));
			let ecdsa_sig = Web3Signature::Ecdsa(ecdsa_pair.sign(MESSAGE));

			assert!(sr_sig.verify_substrate(MESSAGE, &sr_account));
			assert!(ed_sig.verify_substrate(MESSAGE, &ed_account));
			assert!(ecdsa_sig.verify_substrate(MESSAGE, &ecdsa_account));

			// Wrong account
			assert!(!sr_sig.verify_substrate(MESSAGE, &ed_account));
			assert!(!ecdsa_sig.verify_substrate(MESSAGE, &sr_account));
			// Wrong message
			assert!(!ed_sig.verify_substrate(b"another challenge", &ed_account));

			// Wallets wrapping the payload
			let wrapped_sig = Web3Signature::Sr25519(
				sr_pair.sign(&[&b"<Bytes>"[..], MESSAGE, &b"</Bytes>"[..]].concat()[..]),
			);
			assert!(wrapped_sig.verify_substrate(MESSAGE, &sr_account));
		});
	}

	#[test]
	fn test_solana_signature() {
		sp_io::TestExternalities::default().execute_with(|| {
			let pair = ed25519::Pair::from_seed(b"Dave                            ");
			let account = Address32(pair.public().0);
			let signature = Web3Signature::Ed25519(pair.sign(MESSAGE));

			assert!(signature.verify_solana(MESSAGE, &account));
			assert!(!signature.verify_solana(b"another challenge", &account));
			// Solana wallets never wrap the payload.
			let wrapped = Web3Signature::Ed25519(pair.sign(&get_wrapped_payload(MESSAGE, WrapType::Substrate)));
			assert!(!wrapped.verify_solana(MESSAGE, &account));
		});
	}

	#[test]
	fn test_evm_signature() {
		sp_io::TestExternalities::default().execute_with(|| {
			let pair = ecdsa::Pair::from_seed(b"Eve                             ");
			let address = evm_address(&pair);

			let signature = Web3Signature::Ethereum(evm_sign(&pair, MESSAGE));

			assert!(signature.verify_evm(MESSAGE, &address));
			assert!(!signature.verify_evm(b"another challenge", &address));
			assert!(!signature.verify_evm(MESSAGE, &Address20([0u8; 20])));
		});
	}

	#[test]
	fn test_bitcoin_signature() {
		sp_io::TestExternalities::default().execute_with(|| {
			let pair = ecdsa::Pair::from_seed(b"Ferdie                          ");
			let public_key = Address33(pair.public().0);
			let message = [0xa7u8, 0x96, 0x0f, 0xc4];

			// Signed over the hex rendering, as the identity chain hands it out.
			let over_hex = Web3Signature::Bitcoin(bitcoin_sign(&pair, b"a7960fc4"));
			assert!(over_hex.verify_bitcoin(&message, &public_key));

			// Signed over raw text.
			let over_text = Web3Signature::Bitcoin(bitcoin_sign(&pair, MESSAGE));
			assert!(over_text.verify_bitcoin(MESSAGE, &public_key));

			// Signed over the `0x`-prefixed hex rendering.
			let over_prefixed_hex = Web3Signature::Bitcoin(bitcoin_sign(&pair, b"0xa7960fc4"));
			assert!(over_prefixed_hex.verify_bitcoin(&message, &public_key));

			assert!(!over_hex.verify_bitcoin(MESSAGE, &public_key));

			// Corrupt header
			let Web3Signature::Bitcoin(BitcoinSignature(mut raw)) = over_hex else {
				unreachable!()
			};
			raw[0] = 0;
			assert!(!Web3Signature::Bitcoin(BitcoinSignature(raw)).verify_bitcoin(&message, &public_key));
		});
	}

	#[test]
	fn test_compact_size() {
		assert_eq!(compact_size(0), vec![0]);
		assert_eq!(compact_size(0xfc), vec![0xfc]);
		assert_eq!(compact_size(0xfd), vec![0xfd, 0xfd, 0x00]);
		assert_eq!(compact_size(0x1_0000), vec![0xfe, 0x00, 0x00, 0x01, 0x00]);
	}

	#[test]
	fn test_wrapped_payloads() {
		assert_eq!(
			get_wrapped_payload(b"abc", WrapType::Substrate),
			b"<Bytes>abc</Bytes>".to_vec()
		);
		assert_eq!(
			get_wrapped_payload(b"abc", WrapType::Ethereum),
			b"\x19Ethereum Signed Message:\n3abc".to_vec()
		);
	}
}
