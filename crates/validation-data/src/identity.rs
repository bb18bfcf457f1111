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

use core::str::FromStr;

use parity_scale_codec::{Decode, Encode, MaxEncodedLen};
use scale_info::{prelude::string::String, TypeInfo};
use serde::{Deserialize, Serialize};
use sp_runtime::{BoundedVec, RuntimeDebug};

use crate::{
	address::{Address20, Address32, Address33},
	constants::MaxIdentityStringLength,
	encoding::{bounded_string, decode_binary, decode_hex, into_array, strip_hex_prefix, TextEncoding},
	errors::{EncodingError, Error, Field},
};

/// The tag a client uses to say which kind of identity it wants to prove.
#[derive(
	Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Encode, Decode, MaxEncodedLen, TypeInfo, RuntimeDebug, Serialize, Deserialize,
)]
pub enum IdentityType {
	Twitter,
	Discord,
	Github,
	Email,
	Substrate,
	Evm,
	Bitcoin,
	Solana,
}

impl IdentityType {
	pub fn is_web2(&self) -> bool {
		matches!(self, Self::Twitter | Self::Discord | Self::Github | Self::Email)
	}

	pub fn is_web3(&self) -> bool {
		!self.is_web2()
	}

	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Twitter => "Twitter",
			Self::Discord => "Discord",
			Self::Github => "Github",
			Self::Email => "Email",
			Self::Substrate => "Substrate",
			Self::Evm => "Evm",
			Self::Bitcoin => "Bitcoin",
			Self::Solana => "Solana",
		}
	}
}

impl FromStr for IdentityType {
	type Err = &'static str;

	fn from_str(input: &str) -> Result<Self, Self::Err> {
		match input {
			"Twitter" => Ok(Self::Twitter),
			"Discord" => Ok(Self::Discord),
			"Github" => Ok(Self::Github),
			"Email" => Ok(Self::Email),
			"Substrate" => Ok(Self::Substrate),
			"Evm" => Ok(Self::Evm),
			"Bitcoin" => Ok(Self::Bitcoin),
			"Solana" => Ok(Self::Solana),
			_ => Err("unknown identity type."),
		}
	}
}

/// What the client knows about the identity being proven.
#[derive(Clone, Eq, PartialEq, RuntimeDebug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityDescriptor {
	/// A chain address for Web3 types, a handle or username for Web2 types.
	/// The builder does not validate its format.
	pub address_or_handle: String,
	#[serde(rename = "type")]
	pub identity_type: IdentityType,
}

impl IdentityDescriptor {
	pub fn new<S: Into<String>>(address_or_handle: S, identity_type: IdentityType) -> Self {
		Self {
			address_or_handle: address_or_handle.into(),
			identity_type,
		}
	}

	/// Parse the descriptor into the identity as it is stored on chain.
	///
	/// Substrate addresses are accepted in SS58 or `0x` hex form, Solana
	/// addresses in base58 or `0x` hex form, EVM addresses and Bitcoin public
	/// keys in hex form. Web2 handles are stored as-is.
	pub fn to_identity(&self) -> Result<Identity, Error> {
		let input = self.address_or_handle.as_str();
		let identity = match self.identity_type {
			IdentityType::Twitter => Identity::Twitter(bounded_string(Field::AddressOrHandle, input)?),
			IdentityType::Discord => Identity::Discord(bounded_string(Field::AddressOrHandle, input)?),
			IdentityType::Github => Identity::Github(bounded_string(Field::AddressOrHandle, input)?),
			IdentityType::Email => Identity::Email(bounded_string(Field::AddressOrHandle, input)?),
			IdentityType::Substrate => Identity::Substrate(parse_substrate_address(input)?),
			IdentityType::Evm => Identity::Evm(Address20(into_array(
				Field::AddressOrHandle,
				decode_hex(Field::AddressOrHandle, input)?,
			)?)),
			IdentityType::Bitcoin => Identity::Bitcoin(Address33(into_array(
				Field::AddressOrHandle,
				decode_hex(Field::AddressOrHandle, input)?,
			)?)),
			IdentityType::Solana => Identity::Solana(Address32(into_array(
				Field::AddressOrHandle,
				decode_binary(Field::AddressOrHandle, input, TextEncoding::Base58)?,
			)?)),
		};
		Ok(identity)
	}
}

fn parse_substrate_address(input: &str) -> Result<Address32, EncodingError> {
	if strip_hex_prefix(input).is_some() {
		let bytes = decode_hex(Field::AddressOrHandle, input)?;
		return Ok(Address32(into_array(Field::AddressOrHandle, bytes)?));
	}
	Address32::from_ss58(input)
		.map(|(address, _)| address)
		.map_err(|kind| EncodingError::new(Field::AddressOrHandle, kind))
}

pub type IdentityString = BoundedVec<u8, MaxIdentityStringLength>;

/// An identity as it is stored on chain.
#[derive(Clone, Eq, PartialEq, Encode, Decode, MaxEncodedLen, TypeInfo, RuntimeDebug)]
pub enum Identity {
	#[codec(index = 0)]
	Twitter(IdentityString),
	#[codec(index = 1)]
	Discord(IdentityString),
	#[codec(index = 2)]
	Github(IdentityString),
	#[codec(index = 3)]
	Substrate(Address32),
	#[codec(index = 4)]
	Evm(Address20),
	#[codec(index = 5)]
	Bitcoin(Address33),
	#[codec(index = 6)]
	Solana(Address32),
	#[codec(index = 7)]
	Email(IdentityString),
}

impl Identity {
	pub fn identity_type(&self) -> IdentityType {
		match self {
			Self::Twitter(_) => IdentityType::Twitter,
			Self::Discord(_) => IdentityType::Discord,
			Self::Github(_) => IdentityType::Github,
			Self::Substrate(_) => IdentityType::Substrate,
			Self::Evm(_) => IdentityType::Evm,
			Self::Bitcoin(_) => IdentityType::Bitcoin,
			Self::Solana(_) => IdentityType::Solana,
			Self::Email(_) => IdentityType::Email,
		}
	}
}
