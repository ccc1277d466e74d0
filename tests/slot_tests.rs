// Host-side tests for the keyed resource slot.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod catalog {
    include!("../src/core/catalog.rs");
}
mod geometry {
    include!("../src/core/geometry.rs");
}
mod slot {
    include!("../src/core/slot.rs");
}

use catalog::TrailerKey;
use constants::WORLD_SCALE;
use geometry::{to_world_box, WorldBox};
use slot::*;
use std::cell::RefCell;
use std::rc::Rc;

type Log = Rc<RefCell<Vec<String>>>;

struct Recorded {
    name: u32,
    log: Log,
}

impl Release for Recorded {
    fn release(&mut self) {
        self.log.borrow_mut().push(format!("release {}", self.name));
    }
}

fn builder(log: &Log) -> impl FnOnce(u32) -> Recorded + '_ {
    move |key| {
        log.borrow_mut().push(format!("build {key}"));
        Recorded {
            name: key,
            log: log.clone(),
        }
    }
}

#[test]
fn key_change_releases_before_rebuilding() {
    let log: Log = Rc::default();
    let mut slot: ResourceSlot<u32, Recorded> = ResourceSlot::empty();
    slot.ensure(1, builder(&log));
    slot.ensure(2, builder(&log));
    assert_eq!(*log.borrow(), ["build 1", "release 1", "build 2"]);
    assert_eq!(slot.get().map(|r| r.name), Some(2));
}

#[test]
fn same_key_keeps_the_resource() {
    let log: Log = Rc::default();
    let mut slot: ResourceSlot<u32, Recorded> = ResourceSlot::default();
    slot.ensure(7, builder(&log));
    slot.ensure(7, builder(&log));
    slot.ensure(7, builder(&log));
    assert_eq!(*log.borrow(), ["build 7"]);
}

#[test]
fn drop_releases_the_last_resource() {
    let log: Log = Rc::default();
    {
        let mut slot: ResourceSlot<u32, Recorded> = ResourceSlot::empty();
        slot.ensure(3, builder(&log));
    }
    assert_eq!(*log.borrow(), ["build 3", "release 3"]);
}

#[test]
fn clear_releases_once_and_empties() {
    let log: Log = Rc::default();
    let mut slot: ResourceSlot<u32, Recorded> = ResourceSlot::empty();
    slot.ensure(4, builder(&log));
    slot.clear();
    assert!(slot.get().is_none());
    drop(slot);
    assert_eq!(*log.borrow(), ["build 4", "release 4"]);
}

#[test]
fn empty_slot_drops_quietly() {
    let log: Log = Rc::default();
    let slot: ResourceSlot<u32, Recorded> = ResourceSlot::empty();
    drop(slot);
    assert!(log.borrow().is_empty());
}

#[test]
fn alternating_keys_never_hold_two_generations() {
    let log: Log = Rc::default();
    let mut slot: ResourceSlot<u32, Recorded> = ResourceSlot::empty();
    for key in [1, 2, 1, 2] {
        slot.ensure(key, builder(&log));
    }
    let log = log.borrow();
    let mut live = 0i32;
    for entry in log.iter() {
        if entry.starts_with("build") {
            live += 1;
        } else {
            live -= 1;
        }
        assert!(live <= 1, "two resources alive: {:?}", *log);
    }
}

struct BoxBuffers {
    trailer: TrailerKey,
    half_length: f32,
    log: Log,
}

impl Release for BoxBuffers {
    fn release(&mut self) {
        self.log.borrow_mut().push(format!("release {}", self.trailer));
    }
}

#[test]
fn trailer_switch_rebuilds_box_after_releasing_old_one() {
    let log: Log = Rc::default();
    let mut slot: ResourceSlot<WorldBox, BoxBuffers> = ResourceSlot::empty();
    for trailer in [
        TrailerKey::Standard,
        TrailerKey::Standard,
        TrailerKey::Bus8Ep,
        TrailerKey::Mega,
    ] {
        let world_box = to_world_box(trailer.dimensions(), WORLD_SCALE);
        let buffers = slot.ensure(world_box, |b| {
            log.borrow_mut().push(format!("build {trailer}"));
            BoxBuffers {
                trailer,
                half_length: b.half_length,
                log: log.clone(),
            }
        });
        assert_eq!(buffers.trailer, trailer);
        assert_eq!(buffers.half_length, world_box.half_length);
    }
    assert_eq!(
        *log.borrow(),
        [
            "build standard",
            "release standard",
            "build bus8ep",
            "release bus8ep",
            "build mega"
        ]
    );
    drop(slot);
    assert_eq!(log.borrow().last().map(String::as_str), Some("release mega"));
}
