//! Body encryption using the age format, keyed by an SSH key file.
//!
//! This module only sees opaque text. It knows nothing about note metadata:
//! callers hand it a body and get back an ASCII-armored age envelope (or the
//! reverse).
//!
//! Supported key algorithms are `ssh-ed25519` and `ssh-rsa`. Any other
//! algorithm is rejected with [`CryptoError::UnsupportedKeyType`].

use age::armor::{ArmoredReader, ArmoredWriter, Format};
use ssh_key::{Algorithm, PrivateKey, PublicKey};
use std::fmt;
use std::fs;
use std::io::{self, BufReader, Read, Write};
use std::iter;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors from the encryption boundary.
#[derive(Debug, Error)]
pub enum CryptoError {
    /// Encryption or decryption was requested without a key file.
    #[error("ssh key path is required for encryption")]
    MissingKey,

    #[error("failed to read ssh key {path}: {source}")]
    ReadKey {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse ssh key {path}: {source}")]
    ParseKey {
        path: PathBuf,
        #[source]
        source: ssh_key::Error,
    },

    #[error("failed to parse ssh identity {path}: {source}")]
    ParseIdentity {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("unsupported ssh key type: {0}")]
    UnsupportedKeyType(String),

    #[error("ssh key {path} is passphrase-protected")]
    PassphraseProtected { path: PathBuf },

    #[error("invalid {kind} recipient in {path}")]
    InvalidRecipient { kind: KeyKind, path: PathBuf },

    #[error("encrypt body: {0}")]
    Encrypt(#[from] age::EncryptError),

    #[error("encrypt body: {0}")]
    EncryptIo(#[source] io::Error),

    #[error("decrypt body: {0}")]
    Decrypt(#[from] age::DecryptError),

    #[error("decrypt body: {0}")]
    DecryptIo(#[source] io::Error),
}

/// The key algorithms a journal can be encrypted with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyKind {
    Ed25519,
    Rsa,
}

impl KeyKind {
    /// Maps an SSH key algorithm onto a supported kind.
    ///
    /// # Errors
    ///
    /// Returns `CryptoError::UnsupportedKeyType` for anything other than
    /// Ed25519 or RSA.
    pub fn from_algorithm(algorithm: &Algorithm) -> Result<Self, CryptoError> {
        match algorithm {
            Algorithm::Ed25519 => Ok(Self::Ed25519),
            Algorithm::Rsa { .. } => Ok(Self::Rsa),
            other => Err(CryptoError::UnsupportedKeyType(other.as_str().to_string())),
        }
    }

    /// Returns the OpenSSH name of the algorithm.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ed25519 => "ssh-ed25519",
            Self::Rsa => "ssh-rsa",
        }
    }
}

impl fmt::Display for KeyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An SSH key file used to encrypt or decrypt note bodies.
///
/// For encryption the file may hold either an OpenSSH public key line or an
/// OpenSSH private key (its public half is used). Decryption needs the
/// private key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyFile {
    path: PathBuf,
}

impl KeyFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Builds a key file from an optional configured path.
    ///
    /// # Errors
    ///
    /// Returns `CryptoError::MissingKey` if the path is absent or empty.
    pub fn from_setting(path: Option<&Path>) -> Result<Self, CryptoError> {
        match path {
            Some(path) if !path.as_os_str().is_empty() => Ok(Self::new(path)),
            _ => Err(CryptoError::MissingKey),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Resolves the public encryption target of this key file.
    pub fn resolve_recipient(&self) -> Result<age::ssh::Recipient, CryptoError> {
        let data = fs::read_to_string(&self.path).map_err(|source| CryptoError::ReadKey {
            path: self.path.clone(),
            source,
        })?;

        let public = match PublicKey::from_openssh(data.trim()) {
            Ok(public) => public,
            Err(_) => PrivateKey::from_openssh(data.as_bytes())
                .map_err(|source| CryptoError::ParseKey {
                    path: self.path.clone(),
                    source,
                })?
                .public_key()
                .clone(),
        };

        let kind = KeyKind::from_algorithm(&public.algorithm())?;
        let invalid = || CryptoError::InvalidRecipient {
            kind,
            path: self.path.clone(),
        };

        // age expects "<type> <base64>"; drop the comment
        let line = public.to_openssh().map_err(|_| invalid())?;
        let line = line.split_whitespace().take(2).collect::<Vec<_>>().join(" ");
        line.parse::<age::ssh::Recipient>().map_err(|_| invalid())
    }

    /// Resolves the decryption identity of this key file.
    ///
    /// # Errors
    ///
    /// Fails if the file is unreadable, is not a private key, holds a key of
    /// an unsupported type, or is passphrase-protected.
    pub fn resolve_identity(&self) -> Result<age::ssh::Identity, CryptoError> {
        let file = fs::File::open(&self.path).map_err(|source| CryptoError::ReadKey {
            path: self.path.clone(),
            source,
        })?;

        let identity = age::ssh::Identity::from_buffer(
            BufReader::new(file),
            Some(self.path.display().to_string()),
        )
        .map_err(|source| CryptoError::ParseIdentity {
            path: self.path.clone(),
            source,
        })?;

        match &identity {
            age::ssh::Identity::Unencrypted(_) => Ok(identity),
            age::ssh::Identity::Encrypted(_) => Err(CryptoError::PassphraseProtected {
                path: self.path.clone(),
            }),
            age::ssh::Identity::Unsupported(_) => {
                Err(CryptoError::UnsupportedKeyType(self.algorithm_name()))
            }
        }
    }

    fn algorithm_name(&self) -> String {
        fs::read(&self.path)
            .ok()
            .and_then(|data| PrivateKey::from_openssh(data).ok())
            .map(|key| key.algorithm().as_str().to_string())
            .unwrap_or_else(|| "unknown".to_string())
    }
}

/// Encrypts `body` when `enabled`, otherwise returns it unchanged.
///
/// Returns the output body and whether it is ciphertext. When disabled the
/// key path is never looked at, so a bad path cannot fail the call.
pub fn maybe_encrypt_body(
    body: &str,
    enabled: bool,
    key_path: Option<&Path>,
) -> Result<(String, bool), CryptoError> {
    if !enabled {
        return Ok((body.to_string(), false));
    }
    encrypt_body(body, key_path).map(|ciphertext| (ciphertext, true))
}

/// Encrypts `body` to the recipient in `key_path` as an armored age file.
///
/// # Errors
///
/// Returns `CryptoError::MissingKey` if no key path is given, and a wrapped
/// error if the key cannot be resolved or encryption fails.
pub fn encrypt_body(body: &str, key_path: Option<&Path>) -> Result<String, CryptoError> {
    let recipient = KeyFile::from_setting(key_path)?.resolve_recipient()?;
    let encryptor = age::Encryptor::with_recipients(iter::once(&recipient as &dyn age::Recipient))?;

    let mut output = Vec::new();
    let armor =
        ArmoredWriter::wrap_output(&mut output, Format::AsciiArmor).map_err(CryptoError::EncryptIo)?;
    let mut writer = encryptor
        .wrap_output(armor)
        .map_err(CryptoError::EncryptIo)?;
    writer
        .write_all(body.as_bytes())
        .map_err(CryptoError::EncryptIo)?;
    writer
        .finish()
        .and_then(ArmoredWriter::finish)
        .map_err(CryptoError::EncryptIo)?;

    String::from_utf8(output)
        .map_err(|e| CryptoError::EncryptIo(io::Error::new(io::ErrorKind::InvalidData, e)))
}

/// Decrypts an armored age file with the identity in `key_path`.
///
/// # Errors
///
/// Returns `CryptoError::MissingKey` if no key path is given, and a wrapped
/// error for an unusable key, the wrong key, or a corrupt or truncated
/// envelope.
pub fn decrypt_body(ciphertext: &str, key_path: Option<&Path>) -> Result<String, CryptoError> {
    let identity = KeyFile::from_setting(key_path)?.resolve_identity()?;

    let decryptor = age::Decryptor::new(ArmoredReader::new(ciphertext.as_bytes()))?;
    let mut reader = decryptor.decrypt(iter::once(&identity as &dyn age::Identity))?;

    let mut plaintext = Vec::new();
    reader
        .read_to_end(&mut plaintext)
        .map_err(CryptoError::DecryptIo)?;

    String::from_utf8(plaintext)
        .map_err(|e| CryptoError::DecryptIo(io::Error::new(io::ErrorKind::InvalidData, e)))
}
