// Copyright 2025 the Bolts Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! State basics.
//!
//! Set, toggle and remove entries in both scopes and watch the attributes they
//! mirror into.
//!
//! Run:
//! - `cargo run -p bolts_demos --example state_basics`

use bolts::{MemoryDocument, Scope, State, StateError, Toggle};
use bolts_demos::page::dump_state_attributes;

fn main() -> Result<(), StateError> {
    bolts_demos::init_tracing();

    let mut doc = MemoryDocument::new();
    let menu = doc.create_element("nav");
    let mut state = State::new(doc);

    state.set("theme", "light", &Scope::Global)?;
    state.set("unread", 3, &Scope::Global)?;
    state.set_flag("open", &Scope::Local(menu))?;
    println!("-- after set");
    print!("{}", dump_state_attributes(state.document()));

    let themes = Toggle::cycle(["light", "dark", "sepia"])?;
    for _ in 0..2 {
        state.toggle("theme", &themes, &Scope::Global)?;
    }
    state.toggle("open", &Toggle::Flag, &Scope::Local(menu))?;
    println!("-- after toggles");
    print!("{}", dump_state_attributes(state.document()));

    // `false` is stored but never rendered.
    state.set("unread", false, &Scope::Global)?;
    println!("-- unread = false");
    print!("{}", dump_state_attributes(state.document()));
    println!("global entries: {:?}", state.get_all(&Scope::Global));

    match state.set("bad key", "x", &Scope::Global) {
        Err(error) => println!("rejected: {error}"),
        Ok(()) => println!("unexpectedly accepted"),
    }
    Ok(())
}
