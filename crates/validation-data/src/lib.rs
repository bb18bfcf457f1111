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

//! Library to turn the proofs a client collects (a signed message, a public
//! post, an OAuth2 code, an email verification code) into the validation data
//! an identity chain expects when linking an identity to an account.
//!
//! The library is suitable for no_std environment, such as WASM-based
//! blockchain runtimes.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod address;
pub mod builder;
pub mod codec;
pub mod constants;
pub mod encoding;
pub mod identity;
pub mod proof;
pub mod signature;
pub mod validation;

mod errors;

#[cfg(test)]
mod test_utils;

// Re-export relevant types
pub use address::{Address20, Address32, Address33};
pub use builder::{build_validation_data, ValidationDataBuilder};
pub use codec::{ScaleCodec, ValidationDataCodec};
pub use errors::*;
pub use identity::{Identity, IdentityDescriptor, IdentityType};
pub use proof::*;
pub use signature::{SignatureScheme, Web3Signature};
pub use validation::*;
