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

use sp_runtime::traits::ConstU32;

/// Log target used by every module of this crate.
pub const LOG_TARGET: &str = "validation-data";

/// The maximum length, in bytes, of any string carried inside validation
/// data (messages, OAuth2 codes, post identifiers, email addresses).
pub const MAX_VALIDATION_STRING_LENGTH: u32 = 512;
pub type MaxValidationStringLength = ConstU32<MAX_VALIDATION_STRING_LENGTH>;

/// The maximum length, in bytes, of a Web2 handle stored in an identity.
pub const MAX_IDENTITY_STRING_LENGTH: u32 = 64;
pub type MaxIdentityStringLength = ConstU32<MAX_IDENTITY_STRING_LENGTH>;

pub const ED25519_SIGNATURE_LENGTH: usize = 64;
pub const SR25519_SIGNATURE_LENGTH: usize = 64;
pub const ECDSA_SIGNATURE_LENGTH: usize = 65;
pub const ETHEREUM_SIGNATURE_LENGTH: usize = 65;
pub const BITCOIN_SIGNATURE_LENGTH: usize = 65;

/// The SS58 prefix used when rendering Substrate addresses. Parsing accepts
/// any valid prefix.
pub const DEFAULT_SS58_PREFIX: u16 = 31;
