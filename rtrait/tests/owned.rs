//! Owning handles: construction, destruction and moves.

use std::cell::Cell;

use rtrait::prelude::*;
use rtrait_testhelpers::IPanic;

interface! {
    pub trait Gauge {
        fn id(&self) -> u32;
        fn touch(&self, by: u32) -> u32;
    }
}

interface! {
    pub trait Tagged: Gauge {
        fn tag(&self) -> &str;
    }
}

thread_local! {
    static CONSTRUCTED: Cell<u32> = const { Cell::new(0) };
    static DROPPED: Cell<u32> = const { Cell::new(0) };
}

fn constructed() -> u32 {
    CONSTRUCTED.with(Cell::get)
}

fn dropped() -> u32 {
    DROPPED.with(Cell::get)
}

/// Counts constructions and drops on the current thread.
struct Tracked {
    id: u32,
    touched: Cell<u32>,
}

impl Tracked {
    fn new(id: u32) -> Self {
        CONSTRUCTED.with(|count| count.set(count.get() + 1));
        Self {
            id,
            touched: Cell::new(0),
        }
    }
}

impl From<u32> for Tracked {
    fn from(id: u32) -> Self {
        Self::new(id)
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        DROPPED.with(|count| count.set(count.get() + 1));
    }
}

impl Gauge for Tracked {
    fn id(&self) -> u32 {
        self.id
    }

    fn touch(&self, by: u32) -> u32 {
        self.touched.set(self.touched.get() + by);
        self.touched.get()
    }
}

impl Tagged for Tracked {
    fn tag(&self) -> &str {
        "tracked"
    }
}

#[derive(Debug)]
struct Plain(u32);

impl Gauge for Plain {
    fn id(&self) -> u32 {
        self.0
    }

    fn touch(&self, by: u32) -> u32 {
        self.0 + by
    }
}

#[test]
fn own_moves_the_value_in() {
    rtrait_testhelpers::setup();

    let (c0, d0) = (constructed(), dropped());
    let handle = own::<dyn Gauge, _>(Tracked::new(1));
    assert_eq!((constructed(), dropped()), (c0 + 1, d0));

    assert_eq!(handle.id(), 1);
    assert_eq!(handle.touch(2), 2);
    assert_eq!(handle.touch(3), 5);

    drop(handle);
    assert_eq!((constructed(), dropped()), (c0 + 1, d0 + 1));
}

#[test]
fn make_constructs_exactly_once() {
    rtrait_testhelpers::setup();

    let (c0, d0) = (constructed(), dropped());
    {
        let handle = make::<dyn Gauge, Tracked, _>(7);
        assert_eq!(handle.id(), 7);
        assert_eq!((constructed(), dropped()), (c0 + 1, d0));
    }
    assert_eq!((constructed(), dropped()), (c0 + 1, d0 + 1));
}

#[test]
fn reassignment_drops_the_old_value_once() {
    rtrait_testhelpers::setup();

    let (c0, d0) = (constructed(), dropped());
    let mut handle: Owned<dyn Gauge> = Owned::new(Tracked::new(1));
    assert_eq!(handle.id(), 1);

    handle = Owned::construct::<Tracked, _>(2);
    assert_eq!((constructed(), dropped()), (c0 + 2, d0 + 1));
    assert_eq!(handle.id(), 2);

    handle = Owned::new(Plain(3));
    assert_eq!((constructed(), dropped()), (c0 + 2, d0 + 2));
    assert_eq!(handle.touch(1), 4);
}

#[test]
fn moving_a_handle_moves_ownership() {
    rtrait_testhelpers::setup();

    let (c0, d0) = (constructed(), dropped());
    let first = own::<dyn Tagged, _>(Tracked::new(4));
    let address = first.origin().address();

    let second = first;
    let mut all = vec![second];
    all.push(own(Tracked::new(5)));
    assert_eq!(all[0].origin().address(), address);
    assert_eq!(all.iter().map(|handle| handle.id()).sum::<u32>(), 9);
    assert_eq!(dropped(), d0);

    drop(all);
    assert_eq!((constructed(), dropped()), (c0 + 2, d0 + 2));
}

#[test]
fn boxes_are_rewrapped_in_place() {
    rtrait_testhelpers::setup();

    let (c0, d0) = (constructed(), dropped());
    let boxed = Box::new(Tracked::new(9));
    let address = &*boxed as *const Tracked as *const ();

    let handle = Owned::<dyn Tagged>::from_box(boxed);
    assert_eq!(handle.origin().address(), address);
    assert_eq!(handle.tag(), "tracked");

    let handle: Owned<dyn Gauge> = handle.upcast();
    assert_eq!(handle.origin().address(), address);
    assert_eq!(handle.id(), 9);

    let back = handle.downcast::<Tracked>().ok().unwrap();
    assert!(core::ptr::eq(&*back as *const Tracked as *const (), address));
    assert_eq!(dropped(), d0);

    drop(back);
    assert_eq!((constructed(), dropped()), (c0 + 1, d0 + 1));
}

#[test]
fn failed_downcasts_keep_the_value() -> Result<(), IPanic> {
    rtrait_testhelpers::setup();

    let d0 = dropped();
    let mut handle = own::<dyn Gauge, _>(Tracked::new(3));

    let err = handle.downcast_ref::<Plain>().unwrap_err();
    assert!(err.actual.is::<Tracked>());
    assert!(err.to_string().contains("Plain"), "{err}");

    handle.downcast_mut::<Tracked>()?.id = 30;
    assert_eq!(handle.id(), 30);

    let handle = match handle.downcast::<Plain>() {
        Ok(_) => panic!("a Tracked value came back as Plain"),
        Err(handle) => handle,
    };
    assert_eq!(dropped(), d0);
    assert_eq!(handle.downcast_ref::<Tracked>()?.id, 30);
    Ok(())
}

#[test]
fn references_into_owned_values_downcast_to_them() {
    rtrait_testhelpers::setup();

    let handle = own::<dyn Tagged, _>(Tracked::new(6));
    let view = handle.reference();
    assert_eq!(view.tag(), "tracked");
    assert!(core::ptr::eq(
        view.downcast::<Tracked>().unwrap(),
        handle.downcast_ref::<Tracked>().unwrap()
    ));

    let gauge = InterfaceRef::<dyn Gauge>::from_erased(&handle);
    assert_eq!(gauge.touch(1), 1);
    assert_eq!(view.touch(1), 2);
    assert!(format!("{handle:?}").starts_with("Owned<Tagged>("));
}

#[test]
fn into_box_gives_up_the_recorded_type() {
    rtrait_testhelpers::setup();

    let (c0, d0) = (constructed(), dropped());
    let handle = own::<dyn Tagged, _>(Tracked::new(4));
    let address = handle.origin().address();

    let boxed: Box<dyn Tagged> = handle.into_box();
    assert!(core::ptr::eq(&*boxed as *const dyn Tagged as *const (), address));
    assert_eq!((boxed.id(), boxed.tag()), (4, "tracked"));
    assert_eq!(dropped(), d0);

    let rewrapped = Owned::<dyn Tagged>::from(Box::new(Tracked::new(5)));
    drop(boxed);
    assert_eq!((constructed(), dropped()), (c0 + 2, d0 + 1));
    assert!(rewrapped.is::<Tracked>());
}
