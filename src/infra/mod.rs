//! File I/O, frontmatter codec, encryption

mod crypto;
mod frontmatter;
mod fs;
mod slug;

pub use crypto::{CryptoError, KeyFile, KeyKind, decrypt_body, encrypt_body, maybe_encrypt_body};
pub use frontmatter::{
    count_words, parse_front_matter, parse_header, parse_timestamp, render_content,
};
pub use fs::{FsError, NoteStore};
pub use slug::{NOTE_EXTENSION, TIMESTAMP_LAYOUT, build_filename, sanitize_title};
