pub mod user;

/*
 A single table carries every secret the backend owns: the account password
 (hashed, never reversible), the MRSU portal password (reversibly encrypted
 because we have to replay it against the portal API), and the Google refresh
 token handed back by the consent flow.
 Linking is a two-step onboarding: a fresh account has is_mrsu_verified and
 is_google_verified false, and the setup wizard walks the student through both.
 */
