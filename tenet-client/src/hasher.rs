//! Password hashing for the `md5pass` credential

use md5::{Digest, Md5};

/// Hash a plaintext password into the form the API accepts
///
/// The portal authenticates with the lowercase hex MD5 digest of the password.
///
/// # Example
///
/// ```
/// use tenet_client::password_to_hash;
///
/// assert_eq!(password_to_hash("password"), "5f4dcc3b5aa765d61d8327deb882cf99");
/// ```
pub fn password_to_hash(password: &str) -> String {
    hex::encode(Md5::digest(password.as_bytes()))
}
