//! Fuzz target for `typeguard.toml` parsing and resolution.
//!
//! Goal: parsing and resolving should **never panic** on any input.
//! They may return errors, but panics are unacceptable.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_config_parser
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;
use typeguard_settings::{parse_config_toml, resolve_config, Overrides};

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };
    if let Ok(cfg) = parse_config_toml(input) {
        let _ = resolve_config(cfg, Overrides::default());
    }
});
