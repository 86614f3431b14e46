//! Builds the sample request URI and checks it against the expected string.
//!
//! # Usage
//!
//! ```bash
//! cargo run --example request_uri_sample
//! ```

use std::process::ExitCode;

use request_uri::{AbsoluteUri, UriError};

const SCHEME: &str = "http";
const HOST: &str = "host.com";
const PORT: u16 = 5000;
const PATH_PART_1: &str = "pathpart1";
const PATH_PART_2: &str = "pathpart2";
const FIELD_NAME_1: &str = "fieldname1";
const FIELD_NAME_2: &str = "FieldName2";
const FIELD_VALUE_1: &str = "field<>Value1";
const FIELD_VALUE_2: &str = "field<>Value2";
const FIELD_VALUE_ENCODED_1: &str = "field%3C%3EValue1";
const FIELD_VALUE_ENCODED_2: &str = "field%3C%3EValue2";
const FRAGMENT: &str = "frag";
const USERNAME: &str = "username";
const PASSWORD: &str = "password";

fn build() -> Result<String, UriError> {
    let uri = AbsoluteUri::new(HOST, Some(SCHEME), Some(PORT))?
        .with_path_segments([PATH_PART_1, PATH_PART_2])?
        .with_query_pairs([(FIELD_NAME_1, FIELD_VALUE_1), (FIELD_NAME_2, FIELD_VALUE_2)])?
        .with_fragment(FRAGMENT)
        .with_user(USERNAME, PASSWORD)?;

    Ok(uri.to_uri_string())
}

fn main() -> ExitCode {
    let expected = format!(
        "{SCHEME}://{USERNAME}:{PASSWORD}@{HOST}:{PORT}/{PATH_PART_1}/{PATH_PART_2}?\
         {FIELD_NAME_1}={FIELD_VALUE_ENCODED_1}&{FIELD_NAME_2}={FIELD_VALUE_ENCODED_2}#{FRAGMENT}"
    );

    match build() {
        Ok(uri) => {
            println!("{uri}");
            println!("matches expected: {}", uri == expected);
            if uri == expected {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
