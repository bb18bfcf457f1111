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

//! The validation data sent to the identity chain, laid out exactly as in the
//! chain's type registry.

use parity_scale_codec::{Decode, Encode, MaxEncodedLen};
use scale_info::{prelude::string::String, TypeInfo};
use sp_runtime::{BoundedVec, RuntimeDebug};

use crate::{
	constants::{MaxValidationStringLength, LOG_TARGET},
	encoding::{render_message, to_prefixed_hex},
	identity::Identity,
	signature::Web3Signature,
};

pub type ValidationString = BoundedVec<u8, MaxValidationStringLength>;

/// Proof of control of an on-chain account: a message and the account's
/// signature over it.
#[derive(Clone, Eq, PartialEq, Encode, Decode, MaxEncodedLen, TypeInfo, RuntimeDebug)]
pub struct Web3CommonValidationData {
	pub message: ValidationString,
	pub signature: Web3Signature,
}

impl Web3CommonValidationData {
	/// The message as `0x`-prefixed hex.
	pub fn message_hex(&self) -> String {
		to_prefixed_hex(&self.message)
	}

	/// The message as the client handed it over: the original text for text
	/// messages, canonical `0x`-prefixed hex for hex messages.
	pub fn message_string(&self) -> String {
		render_message(&self.message)
	}
}

#[derive(Clone, Eq, PartialEq, Encode, Decode, MaxEncodedLen, TypeInfo, RuntimeDebug)]
pub enum Web3ValidationData {
	#[codec(index = 0)]
	Substrate(Web3CommonValidationData),
	#[codec(index = 1)]
	Evm(Web3CommonValidationData),
	#[codec(index = 2)]
	Bitcoin(Web3CommonValidationData),
	#[codec(index = 3)]
	Solana(Web3CommonValidationData),
}

impl Web3ValidationData {
	pub fn common(&self) -> &Web3CommonValidationData {
		match self {
			Self::Substrate(data) | Self::Evm(data) | Self::Bitcoin(data) | Self::Solana(data) => data,
		}
	}

	pub fn message(&self) -> &ValidationString {
		&self.common().message
	}

	pub fn signature(&self) -> &Web3Signature {
		&self.common().signature
	}

	pub fn is_substrate(&self) -> bool {
		matches!(self, Self::Substrate(_))
	}

	pub fn is_evm(&self) -> bool {
		matches!(self, Self::Evm(_))
	}

	pub fn is_bitcoin(&self) -> bool {
		matches!(self, Self::Bitcoin(_))
	}

	pub fn is_solana(&self) -> bool {
		matches!(self, Self::Solana(_))
	}

	/// Check the signature against the identity it claims to prove.
	///
	/// Fails if the identity lives on a different chain than the validation
	/// data.
	pub fn verify(&self, identity: &Identity) -> bool {
		match (self, identity) {
			(Self::Substrate(data), Identity::Substrate(account)) => {
				data.signature.verify_substrate(&data.message, account)
			}
			(Self::Evm(data), Identity::Evm(address)) => data.signature.verify_evm(&data.message, address),
			(Self::Bitcoin(data), Identity::Bitcoin(public_key)) => {
				data.signature.verify_bitcoin(&data.message, public_key)
			}
			(Self::Solana(data), Identity::Solana(account)) => data.signature.verify_solana(&data.message, account),
			_ => {
				log::trace!(
					target: LOG_TARGET,
					"Validation data does not match identity type {:?}",
					identity.identity_type()
				);
				false
			}
		}
	}
}

#[derive(Clone, Eq, PartialEq, Encode, Decode, MaxEncodedLen, TypeInfo, RuntimeDebug)]
pub enum TwitterValidationData {
	/// A public tweet containing the challenge.
	#[codec(index = 0)]
	PublicTweet { tweet_id: ValidationString },
	/// The result of the OAuth2 authorization code flow.
	#[codec(index = 1)]
	OAuth2 {
		code: ValidationString,
		state: ValidationString,
		redirect_uri: ValidationString,
	},
}

impl TwitterValidationData {
	pub fn is_public_tweet(&self) -> bool {
		matches!(self, Self::PublicTweet { .. })
	}

	pub fn is_oauth2(&self) -> bool {
		matches!(self, Self::OAuth2 { .. })
	}
}

#[derive(Clone, Eq, PartialEq, Encode, Decode, MaxEncodedLen, TypeInfo, RuntimeDebug)]
pub enum DiscordValidationData {
	/// A message containing the challenge, posted in a public channel.
	#[codec(index = 0)]
	PublicMessage {
		channel_id: ValidationString,
		message_id: ValidationString,
		guild_id: ValidationString,
	},
	#[codec(index = 1)]
	OAuth2 {
		code: ValidationString,
		redirect_uri: ValidationString,
	},
}

impl DiscordValidationData {
	pub fn is_public_message(&self) -> bool {
		matches!(self, Self::PublicMessage { .. })
	}

	pub fn is_oauth2(&self) -> bool {
		matches!(self, Self::OAuth2 { .. })
	}
}

/// The code sent to an email address, as typed back by its owner.
#[derive(Clone, Eq, PartialEq, Encode, Decode, MaxEncodedLen, TypeInfo, RuntimeDebug)]
pub struct EmailValidationData {
	pub email: ValidationString,
	pub verification_code: ValidationString,
}

#[derive(Clone, Eq, PartialEq, Encode, Decode, MaxEncodedLen, TypeInfo, RuntimeDebug)]
pub enum Web2ValidationData {
	#[codec(index = 0)]
	Twitter(TwitterValidationData),
	#[codec(index = 1)]
	Discord(DiscordValidationData),
	#[codec(index = 2)]
	Email(EmailValidationData),
}

impl Web2ValidationData {
	pub fn is_twitter(&self) -> bool {
		matches!(self, Self::Twitter(_))
	}

	pub fn is_discord(&self) -> bool {
		matches!(self, Self::Discord(_))
	}

	pub fn is_email(&self) -> bool {
		matches!(self, Self::Email(_))
	}

	pub fn as_twitter(&self) -> Option<&TwitterValidationData> {
		match self {
			Self::Twitter(data) => Some(data),
			_ => None,
		}
	}

	pub fn as_discord(&self) -> Option<&DiscordValidationData> {
		match self {
			Self::Discord(data) => Some(data),
			_ => None,
		}
	}

	pub fn as_email(&self) -> Option<&EmailValidationData> {
		match self {
			Self::Email(data) => Some(data),
			_ => None,
		}
	}
}

/// Proof of control of an identity. Exactly one of the Web2 or Web3 variants
/// is present.
#[derive(Clone, Eq, PartialEq, Encode, Decode, MaxEncodedLen, TypeInfo, RuntimeDebug)]
pub enum ValidationData {
	#[codec(index = 0)]
	Web2Validation(Web2ValidationData),
	#[codec(index = 1)]
	Web3Validation(Web3ValidationData),
}

impl ValidationData {
	pub fn is_web2_validation(&self) -> bool {
		matches!(self, Self::Web2Validation(_))
	}

	pub fn is_web3_validation(&self) -> bool {
		matches!(self, Self::Web3Validation(_))
	}

	pub fn as_web2_validation(&self) -> Option<&Web2ValidationData> {
		match self {
			Self::Web2Validation(data) => Some(data),
			_ => None,
		}
	}

	pub fn as_web3_validation(&self) -> Option<&Web3ValidationData> {
		match self {
			Self::Web3Validation(data) => Some(data),
			_ => None,
		}
	}
}

impl From<Web2ValidationData> for ValidationData {
	fn from(data: Web2ValidationData) -> Self {
		Self::Web2Validation(data)
	}
}

impl From<Web3ValidationData> for ValidationData {
	fn from(data: Web3ValidationData) -> Self {
		Self::Web3Validation(data)
	}
}

impl From<TwitterValidationData> for ValidationData {
	fn from(data: TwitterValidationData) -> Self {
		Self::Web2Validation(Web2ValidationData::Twitter(data))
	}
}

impl From<DiscordValidationData> for ValidationData {
	fn from(data: DiscordValidationData) -> Self {
		Self::Web2Validation(Web2ValidationData::Discord(data))
	}
}

impl From<EmailValidationData> for ValidationData {
	fn from(data: EmailValidationData) -> Self {
		Self::Web2Validation(Web2ValidationData::Email(data))
	}
}
