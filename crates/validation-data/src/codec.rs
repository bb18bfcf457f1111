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

use parity_scale_codec::{DecodeAll, Encode};
use sp_std::vec::Vec;

use crate::validation::ValidationData;

/// Serializes validation data for the identity chain.
pub trait ValidationDataCodec {
	fn encode(&self, validation_data: &ValidationData) -> Vec<u8>;
	fn decode(&self, encoded: &[u8]) -> Result<ValidationData, parity_scale_codec::Error>;
}

/// The SCALE encoding the chain's extrinsics use.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ScaleCodec;

impl ValidationDataCodec for ScaleCodec {
	fn encode(&self, validation_data: &ValidationData) -> Vec<u8> {
		validation_data.encode()
	}

	fn decode(&self, mut encoded: &[u8]) -> Result<ValidationData, parity_scale_codec::Error> {
		ValidationData::decode_all(&mut encoded)
	}
}

/// The type registry describing [ValidationData] and
/// [Identity](crate::identity::Identity), as exposed in the chain metadata.
#[cfg(feature = "std")]
pub fn type_registry() -> scale_info::PortableRegistry {
	use scale_info::{meta_type, Registry};

	let mut registry = Registry::new();
	registry.register_type(&meta_type::<ValidationData>());
	registry.register_type(&meta_type::<crate::identity::Identity>());
	registry.into()
}
