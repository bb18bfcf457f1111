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

use sha3::{Digest, Keccak256};
use sp_core::{crypto::Pair, ecdsa};

use crate::{
	address::Address20,
	signature::{bitcoin_message_hash, get_wrapped_payload, BitcoinSignature, EthereumSignature, WrapType},
};

pub(crate) fn init_logger() {
	let _ = env_logger::builder().is_test(true).try_init();
}

/// The 20-byte EVM address of an ECDSA key pair.
pub(crate) fn evm_address(pair: &ecdsa::Pair) -> Address20 {
	let compressed: [u8; 33] = pair.public().0;
	let uncompressed = libsecp256k1::PublicKey::parse_compressed(&compressed)
		.expect("valid public key")
		.serialize();
	let mut address = [0u8; 20];
	address.copy_from_slice(&Keccak256::digest(&uncompressed[1..]).as_slice()[12..]);
	Address20(address)
}

/// Sign a message the way an EVM wallet's `personal_sign` does.
pub(crate) fn evm_sign(pair: &ecdsa::Pair, message: &[u8]) -> EthereumSignature {
	let mut hash = [0u8; 32];
	hash.copy_from_slice(Keccak256::digest(get_wrapped_payload(message, WrapType::Ethereum)).as_slice());
	EthereumSignature(pair.sign_prehashed(&hash).0)
}

/// Sign a text message the way a Bitcoin wallet does, with a compressed-key
/// header.
pub(crate) fn bitcoin_sign(pair: &ecdsa::Pair, text: &[u8]) -> BitcoinSignature {
	let rsv: [u8; 65] = pair.sign_prehashed(&bitcoin_message_hash(text)).0;
	let mut signature = [0u8; 65];
	signature[0] = 31 + rsv[64];
	signature[1..].copy_from_slice(&rsv[..64]);
	BitcoinSignature(signature)
}
