//! Opaque, URL-safe tokens that carry a user id and a project id.
//!
//! ```no_run
//! use idcodec::{Codec, INVALID_PROJECT_ID};
//!
//! let codec = Codec::with_key(&[0x42; idcodec::crypto::KEY_LEN])?;
//! let token = codec.encode("alice@example.com", 1001)?;
//! assert_eq!(codec.decode_user(&token).as_deref(), Some("alice@example.com"));
//! assert_eq!(codec.decode_project_id(&token), 1001);
//! assert_eq!(codec.decode_project_id("!!!"), INVALID_PROJECT_ID);
//! # Ok::<(), idcodec::CodecError>(())
//! ```

pub mod codec;
pub mod crypto;
pub mod error;

pub use codec::{Codec, IdPair, ProjectId, INVALID_PROJECT_ID};
pub use crypto::{AesGcmSivProvider, EncryptionError, EncryptionProvider};
pub use error::CodecError;
