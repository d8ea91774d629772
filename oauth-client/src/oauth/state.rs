//! Anti-forgery state values for the authorization redirect.
//!
//! A state value is a salted password hash (PHC string) of a shared secret.
//! Every generated value differs, and any of them verifies against the secret.
//! Values are not bound to a particular authorization request.

use argon2::password_hash::PasswordHash;
use argon2::{Params, ARGON2ID_IDENT};
use log::*;
use secrecy::{ExposeSecret, SecretString};

/// Generates and verifies state values for one shared secret.
#[derive(Debug, Clone)]
pub struct StateHasher {
    secret: SecretString,
}

impl StateHasher {
    pub fn new(secret: SecretString) -> Self {
        Self { secret }
    }

    /// Hash the secret with a fresh salt.
    pub fn generate(&self) -> String {
        password_auth::generate_hash(self.secret.expose_secret())
    }

    /// Check that `candidate` is a hash of the secret.
    ///
    /// Returns `false` for a mismatch and for input that is not a parseable hash.
    /// Only argon2id hashes with the parameters `generate` uses are checked, so
    /// the candidate cannot choose the memory or time cost of verification.
    pub fn verify(&self, candidate: &str) -> bool {
        if !Self::has_generated_params(candidate) {
            debug!("State verification failed: unexpected hash parameters");
            return false;
        }

        match password_auth::verify_password(self.secret.expose_secret(), candidate) {
            Ok(()) => true,
            Err(e) => {
                debug!("State verification failed: {:?}", e);
                false
            }
        }
    }

    fn has_generated_params(candidate: &str) -> bool {
        let Ok(hash) = PasswordHash::new(candidate) else {
            return false;
        };
        if hash.algorithm != ARGON2ID_IDENT {
            return false;
        }

        let expected = Params::default();
        match Params::try_from(&hash) {
            Ok(params) => {
                params.m_cost() == expected.m_cost()
                    && params.t_cost() == expected.t_cost()
                    && params.p_cost() == expected.p_cost()
            }
            Err(_) => false,
        }
    }
}
