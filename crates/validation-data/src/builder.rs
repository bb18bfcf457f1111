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

use sp_std::vec::Vec;

use crate::{
	codec::{ScaleCodec, ValidationDataCodec},
	constants::LOG_TARGET,
	encoding::{bounded_string, decode_binary, decode_message, into_bounded, TextEncoding},
	errors::{Error, Field, ShapeMismatch},
	identity::{IdentityDescriptor, IdentityType},
	proof::{EmailProof, OAuth2Proof, ProofPayload, PublicMessageProof, PublicTweetProof, Web3Proof},
	signature::{SignatureScheme, Web3Signature},
	validation::{
		DiscordValidationData, EmailValidationData, TwitterValidationData, ValidationData, ValidationString,
		Web2ValidationData, Web3CommonValidationData, Web3ValidationData,
	},
};

/// Turn a client proof into the validation data the identity chain expects
/// for the given identity.
///
/// Only the shape and the encodings of the proof are checked. Signatures are
/// not verified, see [Web3ValidationData::verify] for that.
pub fn build_validation_data(identity: &IdentityDescriptor, proof: &ProofPayload) -> Result<ValidationData, Error> {
	log::trace!(
		target: LOG_TARGET,
		"Building validation data for {:?} identity with {:?} proof",
		identity.identity_type,
		proof.kind()
	);

	let validation_data: ValidationData = match (identity.identity_type, proof) {
		(IdentityType::Github, _) => {
			log::error!(target: LOG_TARGET, "Github identities cannot be validated yet");
			return Err(Error::UnsupportedIdentityType(IdentityType::Github));
		}
		(IdentityType::Twitter, ProofPayload::PublicTweet(proof)) => build_public_tweet(proof)?.into(),
		(IdentityType::Twitter, ProofPayload::OAuth2(proof)) => build_twitter_oauth2(proof)?.into(),
		(IdentityType::Discord, ProofPayload::PublicMessage(proof)) => build_public_message(proof)?.into(),
		(IdentityType::Discord, ProofPayload::OAuth2(proof)) => build_discord_oauth2(proof)?.into(),
		(IdentityType::Email, ProofPayload::Email(proof)) => build_email(proof)?.into(),
		(IdentityType::Substrate, ProofPayload::Web3(proof)) => {
			Web3ValidationData::Substrate(build_web3(proof, substrate_signature)?).into()
		}
		(IdentityType::Evm, ProofPayload::Web3(proof)) => Web3ValidationData::Evm(build_web3(proof, evm_signature)?).into(),
		(IdentityType::Bitcoin, ProofPayload::Web3(proof)) => {
			Web3ValidationData::Bitcoin(build_web3(proof, bitcoin_signature)?).into()
		}
		(IdentityType::Solana, ProofPayload::Web3(proof)) => {
			Web3ValidationData::Solana(build_web3(proof, solana_signature)?).into()
		}
		(identity_type, proof) => {
			return Err(ShapeMismatch::UnexpectedProof {
				identity_type,
				proof: proof.kind(),
			}
			.into())
		}
	};
	Ok(validation_data)
}

fn validation_string(field: Field, input: &str) -> Result<ValidationString, Error> {
	Ok(bounded_string(field, input)?)
}

fn build_public_tweet(proof: &PublicTweetProof) -> Result<TwitterValidationData, Error> {
	Ok(TwitterValidationData::PublicTweet {
		tweet_id: validation_string(Field::TweetId, &proof.tweet_id)?,
	})
}

fn build_twitter_oauth2(proof: &OAuth2Proof) -> Result<TwitterValidationData, Error> {
	let state = proof
		.state
		.as_deref()
		.ok_or(ShapeMismatch::MissingField(Field::State))?;
	Ok(TwitterValidationData::OAuth2 {
		code: validation_string(Field::Code, &proof.code)?,
		state: validation_string(Field::State, state)?,
		redirect_uri: validation_string(Field::RedirectUri, &proof.redirect_uri)?,
	})
}

fn build_public_message(proof: &PublicMessageProof) -> Result<DiscordValidationData, Error> {
	Ok(DiscordValidationData::PublicMessage {
		channel_id: validation_string(Field::ChannelId, &proof.channel_id)?,
		message_id: validation_string(Field::MessageId, &proof.message_id)?,
		guild_id: validation_string(Field::GuildId, &proof.guild_id)?,
	})
}

fn build_discord_oauth2(proof: &OAuth2Proof) -> Result<DiscordValidationData, Error> {
	if proof.state.is_some() {
		log::debug!(target: LOG_TARGET, "Ignoring OAuth2 state for Discord identity");
	}
	Ok(DiscordValidationData::OAuth2 {
		code: validation_string(Field::Code, &proof.code)?,
		redirect_uri: validation_string(Field::RedirectUri, &proof.redirect_uri)?,
	})
}

fn build_email(proof: &EmailProof) -> Result<EmailValidationData, Error> {
	Ok(EmailValidationData {
		email: validation_string(Field::Email, &proof.email)?,
		verification_code: validation_string(Field::VerificationCode, &proof.verification_code)?,
	})
}

fn build_web3(
	proof: &Web3Proof,
	signature: fn(&Web3Proof) -> Result<Web3Signature, Error>,
) -> Result<Web3CommonValidationData, Error> {
	let message = into_bounded(Field::Message, decode_message(&proof.message))?;
	let signature = signature(proof)?;
	log::trace!(
		target: LOG_TARGET,
		"Normalized {}-byte message and {:?} signature",
		message.len(),
		signature.scheme()
	);
	Ok(Web3CommonValidationData { message, signature })
}

fn ensure_scheme(proof: &Web3Proof, allowed: SignatureScheme) -> Result<(), Error> {
	match proof.scheme {
		Some(scheme) if scheme != allowed => Err(ShapeMismatch::UnsupportedScheme(scheme).into()),
		_ => Ok(()),
	}
}

fn substrate_signature(proof: &Web3Proof) -> Result<Web3Signature, Error> {
	let raw = decode_binary(Field::Signature, &proof.signature, TextEncoding::Hex)?;
	let scheme = match (proof.scheme, raw.len()) {
		(Some(scheme @ (SignatureScheme::Ed25519 | SignatureScheme::Sr25519 | SignatureScheme::Ecdsa)), _) => scheme,
		(Some(scheme), _) => return Err(ShapeMismatch::UnsupportedScheme(scheme).into()),
		(None, len) if len == SignatureScheme::Ecdsa.signature_length() => SignatureScheme::Ecdsa,
		(None, len) if len == SignatureScheme::Sr25519.signature_length() => {
			return Err(ShapeMismatch::AmbiguousSignatureScheme.into())
		}
		// Let the length check report the mismatch.
		(None, _) => SignatureScheme::Ecdsa,
	};
	Ok(Web3Signature::from_raw(scheme, raw)?)
}

fn evm_signature(proof: &Web3Proof) -> Result<Web3Signature, Error> {
	ensure_scheme(proof, SignatureScheme::Ethereum)?;
	let raw = decode_binary(Field::Signature, &proof.signature, TextEncoding::Hex)?;
	Ok(Web3Signature::from_raw(SignatureScheme::Ethereum, raw)?)
}

fn bitcoin_signature(proof: &Web3Proof) -> Result<Web3Signature, Error> {
	ensure_scheme(proof, SignatureScheme::Bitcoin)?;
	let raw = decode_binary(Field::Signature, &proof.signature, TextEncoding::Base64)?;
	Ok(Web3Signature::from_raw(SignatureScheme::Bitcoin, raw)?)
}

fn solana_signature(proof: &Web3Proof) -> Result<Web3Signature, Error> {
	ensure_scheme(proof, SignatureScheme::Ed25519)?;
	let raw = decode_binary(Field::Signature, &proof.signature, TextEncoding::Base58)?;
	Ok(Web3Signature::from_raw(SignatureScheme::Ed25519, raw)?)
}

/// Builds validation data and encodes it with an injected codec.
#[derive(Clone, Debug)]
pub struct ValidationDataBuilder<C> {
	codec: C,
}

impl<C: ValidationDataCodec> ValidationDataBuilder<C> {
	pub fn new(codec: C) -> Self {
		Self { codec }
	}

	pub fn codec(&self) -> &C {
		&self.codec
	}

	/// See [build_validation_data].
	pub fn build(&self, identity: &IdentityDescriptor, proof: &ProofPayload) -> Result<ValidationData, Error> {
		build_validation_data(identity, proof)
	}

	/// Build the validation data and encode it, ready to be put into an
	/// extrinsic.
	pub fn build_encoded(&self, identity: &IdentityDescriptor, proof: &ProofPayload) -> Result<Vec<u8>, Error> {
		let validation_data = self.build(identity, proof)?;
		Ok(self.codec.encode(&validation_data))
	}
}

impl Default for ValidationDataBuilder<ScaleCodec> {
	fn default() -> Self {
		Self::new(ScaleCodec)
	}
}
