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

use sp_runtime::RuntimeDebug;

use crate::{identity::IdentityType, proof::ProofKind, signature::SignatureScheme};

/// All the errors that can be generated when building validation data.
#[derive(Clone, Eq, PartialEq, RuntimeDebug)]
pub enum Error {
	/// The identity type has no validation data shape. This is a
	/// programming error on the caller side.
	UnsupportedIdentityType(IdentityType),
	/// See [ShapeMismatch].
	ShapeMismatch(ShapeMismatch),
	/// See [EncodingError].
	Encoding(EncodingError),
}

impl From<ShapeMismatch> for Error {
	fn from(err: ShapeMismatch) -> Self {
		Self::ShapeMismatch(err)
	}
}

impl From<EncodingError> for Error {
	fn from(err: EncodingError) -> Self {
		Self::Encoding(err)
	}
}

/// The proof payload does not fit the declared identity type.
#[derive(Clone, Eq, PartialEq, RuntimeDebug)]
pub enum ShapeMismatch {
	/// The proof has a shape that the identity type does not accept, e.g. a
	/// tweet ID for an email identity.
	UnexpectedProof {
		identity_type: IdentityType,
		proof: ProofKind,
	},
	/// A field that is optional in the proof shape is required by the
	/// identity type.
	MissingField(Field),
	/// A 64-byte Substrate signature was provided without telling whether it
	/// is Ed25519 or Sr25519.
	AmbiguousSignatureScheme,
	/// The explicitly requested signature scheme is not used by the identity
	/// type.
	UnsupportedScheme(SignatureScheme),
}

/// A string could not be decoded under any supported encoding.
#[derive(Clone, Eq, PartialEq, RuntimeDebug)]
pub struct EncodingError {
	/// The input field that failed to decode.
	pub field: Field,
	pub kind: EncodingErrorKind,
}

impl EncodingError {
	pub fn new(field: Field, kind: EncodingErrorKind) -> Self {
		Self { field, kind }
	}
}

#[derive(Clone, Eq, PartialEq, RuntimeDebug)]
pub enum EncodingErrorKind {
	/// Not a valid hex string.
	InvalidHex,
	/// Not a valid base64 string.
	InvalidBase64,
	/// Not a valid base58 string.
	InvalidBase58,
	/// Not a valid SS58 address (bad alphabet, length, prefix or checksum).
	InvalidSs58,
	/// The decoded value does not have the length its type requires.
	InvalidLength { expected: usize, actual: usize },
	/// The decoded value exceeds the maximum length allowed on chain.
	TooLong { max: u32 },
}

/// The input fields a caller provides, named as they are on the client side.
#[derive(Clone, Copy, Eq, PartialEq, RuntimeDebug)]
pub enum Field {
	AddressOrHandle,
	Message,
	Signature,
	TweetId,
	Code,
	State,
	RedirectUri,
	ChannelId,
	MessageId,
	GuildId,
	Email,
	VerificationCode,
}

impl Field {
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::AddressOrHandle => "addressOrHandle",
			Self::Message => "message",
			Self::Signature => "signature",
			Self::TweetId => "tweetId",
			Self::Code => "code",
			Self::State => "state",
			Self::RedirectUri => "redirectUri",
			Self::ChannelId => "channelId",
			Self::MessageId => "messageId",
			Self::GuildId => "guildId",
			Self::Email => "email",
			Self::VerificationCode => "verificationCode",
		}
	}
}

#[cfg(feature = "std")]
impl std::fmt::Display for Field {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

#[cfg(feature = "std")]
impl std::fmt::Display for EncodingError {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match &self.kind {
			EncodingErrorKind::InvalidHex => write!(f, "`{}` is not valid hex", self.field),
			EncodingErrorKind::InvalidBase64 => write!(f, "`{}` is not valid base64", self.field),
			EncodingErrorKind::InvalidBase58 => write!(f, "`{}` is not valid base58", self.field),
			EncodingErrorKind::InvalidSs58 => write!(f, "`{}` is not a valid SS58 address", self.field),
			EncodingErrorKind::InvalidLength { expected, actual } => write!(
				f,
				"`{}` decodes to {} bytes, {} expected",
				self.field, actual, expected
			),
			EncodingErrorKind::TooLong { max } => write!(f, "`{}` is longer than {} bytes", self.field, max),
		}
	}
}

#[cfg(feature = "std")]
impl std::fmt::Display for Error {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::UnsupportedIdentityType(identity_type) => {
				write!(f, "identity type {:?} has no validation data", identity_type)
			}
			Self::ShapeMismatch(ShapeMismatch::UnexpectedProof { identity_type, proof }) => {
				write!(f, "a {:?} proof cannot validate a {:?} identity", proof, identity_type)
			}
			Self::ShapeMismatch(ShapeMismatch::MissingField(field)) => write!(f, "`{}` is required", field),
			Self::ShapeMismatch(ShapeMismatch::AmbiguousSignatureScheme) => {
				f.write_str("64-byte signatures need an explicit `scheme` (Ed25519 or Sr25519)")
			}
			Self::ShapeMismatch(ShapeMismatch::UnsupportedScheme(scheme)) => {
				write!(f, "signature scheme {:?} is not supported for this identity", scheme)
			}
			Self::Encoding(err) => write!(f, "{}", err),
		}
	}
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
