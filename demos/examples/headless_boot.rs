// Copyright 2025 the Bolts Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Headless boot.
//!
//! Boot Bolts over an in-memory article page, replay a few browser events and
//! print the resulting state attributes.
//!
//! Run:
//! - `cargo run -p bolts_demos --example headless_boot`
//! - `cargo run -p bolts_demos --example headless_boot -- touch`
//! - `RUST_LOG=warn cargo run -p bolts_demos --example headless_boot`

use std::env;

use bolts::{Bolts, BoltsConfig, InputSignals};
use bolts_demos::page::{article, dump_state_attributes};

fn main() {
    bolts_demos::init_tracing();

    let signals = match env::args().nth(1).as_deref() {
        Some("touch") => InputSignals::TOUCHSTART | InputSignals::MOBILE_AGENT,
        _ => InputSignals::MOUSEMOVE,
    };
    let (doc, host) = article(signals);

    let config: BoltsConfig = serde_json::from_str(r#"{ "resizeSettleMs": 100 }"#)
        .unwrap_or_default();
    let mut bolts = Bolts::new(doc, config);
    let report = bolts.boot(&host);
    println!(
        "imported {} entries, hover: {:?}, {} image(s) pending",
        report.imported,
        report.hover,
        report.pending_images.len()
    );

    if report.awaits_mouseover() {
        println!("-- mouseover");
        bolts.on_mouseover().unwrap();
    }
    for image in &host.images {
        if report.pending_images.contains(&image.element) {
            println!("-- load #{}", image.element.index());
            bolts.on_image_load(&image.element, image.size).unwrap();
        }
    }

    println!("-- resize burst at t=0..48");
    for t in [0, 16, 32, 48] {
        bolts.on_resize(t).unwrap();
    }
    print!("{}", dump_state_attributes(bolts.state().document()));

    println!("-- settle at t=148");
    bolts.poll_resize(148).unwrap();
    print!("{}", dump_state_attributes(bolts.state().document()));
}
