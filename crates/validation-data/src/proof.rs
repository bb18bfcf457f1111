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

//! The proof payloads clients submit, as they appear in the JSON request body.

use scale_info::prelude::string::String;
use serde::{Deserialize, Serialize};
use sp_runtime::RuntimeDebug;

use crate::signature::SignatureScheme;

/// A message signed by a wallet.
#[derive(Clone, Eq, PartialEq, RuntimeDebug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Web3Proof {
	/// Hex (with or without `0x`) or plain text.
	pub message: String,
	/// Hex, or the chain's native text encoding.
	pub signature: String,
	/// Required to tell Ed25519 and Sr25519 Substrate signatures apart.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub scheme: Option<SignatureScheme>,
}

#[derive(Clone, Eq, PartialEq, RuntimeDebug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PublicTweetProof {
	pub tweet_id: String,
}

/// The outcome of an OAuth2 authorization code flow.
#[derive(Clone, Eq, PartialEq, RuntimeDebug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct OAuth2Proof {
	pub code: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub state: Option<String>,
	pub redirect_uri: String,
}

#[derive(Clone, Eq, PartialEq, RuntimeDebug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PublicMessageProof {
	pub channel_id: String,
	pub message_id: String,
	pub guild_id: String,
}

#[derive(Clone, Eq, PartialEq, RuntimeDebug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct EmailProof {
	pub email: String,
	pub verification_code: String,
}

/// Any of the proof shapes. The shape is recognised by its fields alone.
#[derive(Clone, Eq, PartialEq, RuntimeDebug, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProofPayload {
	Web3(Web3Proof),
	PublicTweet(PublicTweetProof),
	OAuth2(OAuth2Proof),
	PublicMessage(PublicMessageProof),
	Email(EmailProof),
}

/// The shape of a [ProofPayload], without its content.
#[derive(Clone, Copy, Eq, PartialEq, RuntimeDebug)]
pub enum ProofKind {
	Web3,
	PublicTweet,
	OAuth2,
	PublicMessage,
	Email,
}

impl ProofPayload {
	pub fn kind(&self) -> ProofKind {
		match self {
			Self::Web3(_) => ProofKind::Web3,
			Self::PublicTweet(_) => ProofKind::PublicTweet,
			Self::OAuth2(_) => ProofKind::OAuth2,
			Self::PublicMessage(_) => ProofKind::PublicMessage,
			Self::Email(_) => ProofKind::Email,
		}
	}
}

impl From<Web3Proof> for ProofPayload {
	fn from(proof: Web3Proof) -> Self {
		Self::Web3(proof)
	}
}

impl From<PublicTweetProof> for ProofPayload {
	fn from(proof: PublicTweetProof) -> Self {
		Self::PublicTweet(proof)
	}
}

impl From<OAuth2Proof> for ProofPayload {
	fn from(proof: OAuth2Proof) -> Self {
		Self::OAuth2(proof)
	}
}

impl From<PublicMessageProof> for ProofPayload {
	fn from(proof: PublicMessageProof) -> Self {
		Self::PublicMessage(proof)
	}
}

impl From<EmailProof> for ProofPayload {
	fn from(proof: EmailProof) -> Self {
		Self::Email(proof)
	}
}
