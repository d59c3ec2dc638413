//! Doorbell demo: persistent, one-shot and re-entrant subscribers on one channel.

use std::{cell::Cell, rc::Rc};

use rusty_event::{Channel, Handler};

#[derive(Debug, Clone)]
struct Ring {
    visitor: String,
    attempt: u32,
}

fn main() {
    let doorbell = Channel::<Ring>::with_capacity(4);

    let house = Handler::new(|ring: &Ring| {
        println!("ding dong: {} (attempt {})", ring.visitor, ring.attempt);
    });
    let dog = Handler::new(|ring: &Ring| println!("woof! at {}", ring.visitor));
    let first_guest = Handler::new(|ring: &Ring| {
        println!("the first guest tonight is {}", ring.visitor);
    });

    doorbell.subscribe(&house);
    let quiet_dog = doorbell.subscribe(&dog);
    doorbell.subscribe_once(&first_guest);

    // Impatient visitors ring again right away, from inside the handler.
    let weak = doorbell.downgrade();
    let rings = Rc::new(Cell::new(0));
    let counter = Rc::clone(&rings);
    let impatient = Handler::new(move |ring: &Ring| {
        counter.set(counter.get() + 1);
        if ring.attempt < 2 {
            if let Some(doorbell) = weak.upgrade() {
                doorbell.dispatch(&Ring {
                    attempt: ring.attempt + 1,
                    ..ring.clone()
                });
            }
        }
    });
    doorbell.subscribe(&impatient);

    doorbell.dispatch(&Ring {
        visitor: "Ada".into(),
        attempt: 1,
    });

    quiet_dog.revoke();
    doorbell.unsubscribe(&impatient);

    doorbell.dispatch(&Ring {
        visitor: "Grace".into(),
        attempt: 1,
    });

    println!("{:?}", doorbell);
    println!("impatient handler saw {} rings", rings.get());

    doorbell.clear();
    assert!(doorbell.is_empty());
}
